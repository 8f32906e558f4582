use fetcher::CurrentUser;
use yew::prelude::*;

use crate::contexts::use_identity;

/// The signed-in user, or None if signed out or still checking the session.
#[hook]
pub fn use_current_user() -> Option<CurrentUser> {
    use_identity().user().cloned()
}
