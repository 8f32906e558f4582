use fetcher::CurrentUser;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{SafeArea, SignedIn, SignedOut};
use crate::hooks::use_current_user;

/// Greeting shown to a signed-in user.
pub fn greeting(user: Option<&CurrentUser>) -> String {
    let email = user.and_then(CurrentUser::primary_email).unwrap_or_default();
    format!("Hello {email}")
}

#[function_component]
pub fn HomePage() -> Html {
    let user = use_current_user();

    html! {
        <SafeArea>
            <div class="text-center space-y-4">
                <SignedIn>
                    <p class="text-xl text-neutral-900 dark:text-neutral-100">
                        {greeting(user.as_ref())}
                    </p>
                </SignedIn>
                <SignedOut>
                    <div class="flex flex-col items-center space-y-2">
                        <Link<Route>
                            to={Route::SignIn}
                            classes="text-neutral-900 dark:text-neutral-100 font-medium underline"
                        >
                            <span>{"Sign In"}</span>
                        </Link<Route>>
                        <Link<Route>
                            to={Route::SignUp}
                            classes="text-neutral-900 dark:text-neutral-100 font-medium underline"
                        >
                            <span>{"Sign Up"}</span>
                        </Link<Route>>
                    </div>
                </SignedOut>
            </div>
        </SafeArea>
    }
}
