//! JSON fetching for the app: the request function, request configuration,
//! the `data` envelope, and the per-hook fetch cycle state.

mod client;
mod cycle;
mod envelope;
mod error;
mod options;

pub use client::{FetchClient, FetchConfig, StatusPolicy, fetch_api};
pub use cycle::{FetchCycle, Generation, GenerationCounter, Phase};
pub use envelope::{DataPolicy, decode_data, extract_data};
pub use error::{ErrorKind, FetchError};
pub use options::{HttpMethod, RequestKey, RequestOptions};

use serde::{Deserialize, Serialize};

/// One email address attached to a signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress {
    pub email_address: String,
}

/// The user reported by the identity provider's session endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    #[serde(default)]
    pub email_addresses: Vec<EmailAddress>,
}

impl CurrentUser {
    /// The first listed address, which the provider treats as primary.
    pub fn primary_email(&self) -> Option<&str> {
        self.email_addresses
            .first()
            .map(|e| e.email_address.as_str())
    }
}
