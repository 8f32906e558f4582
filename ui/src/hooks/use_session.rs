use fetcher::{CurrentUser, RequestKey, RequestOptions};
use yew::prelude::*;

use super::use_fetch;
use crate::contexts::Identity;

/// Load the current user from the session endpoint and derive the identity
/// to inject into the tree.
#[hook]
pub fn use_session(session_url: String) -> Identity {
    // Rebuilt every render; the key compares structurally so this fetches
    // once.
    let key = RequestKey::new(session_url)
        .with_options(RequestOptions::new().include_credentials());
    let session = use_fetch::<CurrentUser>(key);

    Identity::from_session(session.phase, session.data.as_ref())
}
