use fetcher::FetchClient;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod config;
pub mod contexts;
pub mod hooks;
mod logs;
pub mod pages;

use config::AppConfig;
use contexts::IdentityProvider;
use hooks::use_session;
use pages::{HomePage, NotFoundPage, SignInPage, SignUpPage};

// Global fetch client - configured from the build-time API_BASE_URL
pub fn get_fetch_client() -> FetchClient {
    AppConfig::load().client()
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <BrowserRouter>
            <SessionProvider>
                <Switch<Route> render={switch} />
            </SessionProvider>
        </BrowserRouter>
    }
}

#[derive(Properties, PartialEq)]
struct SessionProviderProps {
    children: Children,
}

/// Checks the session once and injects the resulting identity.
#[function_component]
fn SessionProvider(props: &SessionProviderProps) -> Html {
    let identity = use_session(AppConfig::load().session_url());

    html! {
        <IdentityProvider {identity}>
            {props.children.clone()}
        </IdentityProvider>
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/sign-in")]
    SignIn,
    #[at("/sign-up")]
    SignUp,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::SignIn => html! { <SignInPage /> },
        Route::SignUp => html! { <SignUpPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
