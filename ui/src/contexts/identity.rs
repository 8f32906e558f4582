use fetcher::{CurrentUser, Phase};
use yew::prelude::*;

/// What the identity provider currently knows about the user.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Identity {
    /// The session has not been checked yet.
    #[default]
    Unknown,
    SignedOut,
    SignedIn(CurrentUser),
}

impl Identity {
    pub fn user(&self) -> Option<&CurrentUser> {
        match self {
            Identity::SignedIn(user) => Some(user),
            Identity::Unknown | Identity::SignedOut => None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, Identity::SignedIn(_))
    }

    pub fn is_signed_out(&self) -> bool {
        matches!(self, Identity::SignedOut)
    }

    /// Derive the identity from the state of a session fetch.
    ///
    /// A failed session check counts as signed out. A user fetched earlier
    /// stays signed in while the session is being refreshed.
    pub fn from_session(phase: Phase, user: Option<&CurrentUser>) -> Self {
        match (phase, user) {
            (Phase::Failed, _) => Identity::SignedOut,
            (_, Some(user)) => Identity::SignedIn(user.clone()),
            (Phase::Succeeded, None) => Identity::SignedOut,
            (Phase::Idle | Phase::Loading, None) => Identity::Unknown,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IdentityProviderProps {
    pub identity: Identity,
    pub children: Children,
}

/// Injects the identity into the component tree. Components read it with
/// [`use_identity`] and never write it.
#[function_component]
pub fn IdentityProvider(props: &IdentityProviderProps) -> Html {
    html! {
        <ContextProvider<Identity> context={props.identity.clone()}>
            {props.children.clone()}
        </ContextProvider<Identity>>
    }
}

/// The injected identity, or [`Identity::Unknown`] outside a provider.
#[hook]
pub fn use_identity() -> Identity {
    use_context::<Identity>().unwrap_or_default()
}
