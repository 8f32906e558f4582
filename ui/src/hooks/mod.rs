//! Hooks for fetching data and reading the session.
//!
//! Fetch hooks return a [`FetchHookReturn`] with three pieces of state:
//!
//! | data         | is_loading | error  | meaning                             |
//! |--------------|------------|--------|-------------------------------------|
//! | `NotFetched` | false      | `None` | not started, or settled empty       |
//! | `NotFetched` | true       | `None` | first load in flight                |
//! | `NotFetched` | false      | `Some` | first load failed                   |
//! | `Fetched`    | true       | `None` | refetch in flight, old data shown   |
//! | `Fetched`    | false      | `Some` | refetch failed, old data kept       |
//!
//! Use `phase` to tell "not started" from "settled empty".

pub mod use_current_user;
pub mod use_fetch;
pub mod use_session;

pub use use_current_user::use_current_user;
pub use use_fetch::{FetchHookReturn, use_fetch, use_fetch_with};
pub use use_session::use_session;

/// Distinguishes "no payload yet" from a fetched payload.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            FetchState::Fetched(data) => Some(data),
            FetchState::NotFetched => None,
        }
    }
}

impl<T> From<Option<T>> for FetchState<T> {
    fn from(data: Option<T>) -> Self {
        match data {
            Some(data) => FetchState::Fetched(data),
            None => FetchState::NotFetched,
        }
    }
}
