use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::SafeArea;

/// Landing point for the identity provider's hosted sign-in flow.
#[function_component]
pub fn SignInPage() -> Html {
    html! {
        <SafeArea>
            <div class="text-center space-y-4">
                <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Sign In"}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Continue with your identity provider to sign in."}
                </p>
                <Link<Route> to={Route::Home} classes="underline">
                    {"Back"}
                </Link<Route>>
            </div>
        </SafeArea>
    }
}
