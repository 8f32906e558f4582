use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::SafeArea;

#[function_component]
pub fn SignUpPage() -> Html {
    html! {
        <SafeArea>
            <div class="text-center space-y-4">
                <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Sign Up"}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Create an account with your identity provider."}
                </p>
                <Link<Route> to={Route::Home} classes="underline">
                    {"Back"}
                </Link<Route>>
            </div>
        </SafeArea>
    }
}
