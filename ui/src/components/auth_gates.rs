use yew::prelude::*;

use crate::contexts::use_identity;

#[derive(Properties, PartialEq)]
pub struct SignedInProps {
    #[prop_or_default]
    pub children: Children,
}

/// Renders its children only while a user is signed in.
///
/// Nothing renders while the session is still unknown, so child hooks only
/// run once the user is known to be present.
#[function_component]
pub fn SignedIn(props: &SignedInProps) -> Html {
    if !use_identity().is_signed_in() {
        return html! {};
    }

    html! {
        <>
            {for props.children.iter()}
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct SignedOutProps {
    #[prop_or_default]
    pub children: Children,
}

/// Renders its children only once the session is known to have no user.
#[function_component]
pub fn SignedOut(props: &SignedOutProps) -> Html {
    if !use_identity().is_signed_out() {
        return html! {};
    }

    html! {
        <>
            {for props.children.iter()}
        </>
    }
}
