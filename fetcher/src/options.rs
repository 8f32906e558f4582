use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::hash::{DefaultHasher, Hash, Hasher};

use crate::FetchError;

#[derive(
    Debug,
    Display,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    #[display("GET")]
    Get,
    #[display("POST")]
    Post,
    #[display("PUT")]
    Put,
    #[display("PATCH")]
    Patch,
    #[display("DELETE")]
    Delete,
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Request configuration passed alongside an address.
///
/// Headers are kept sorted and their names lowercased so that two options
/// built in a different order compare (and hash) equal.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
    /// Send cookies on cross-origin requests. Only meaningful in the
    /// browser.
    pub include_credentials: bool,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    pub fn header(
        mut self,
        name: impl AsRef<str>,
        value: impl Into<String>,
    ) -> Self {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `value` as the request body and set the content type.
    pub fn json(self, value: &impl Serialize) -> Result<Self, FetchError> {
        let body = serde_json::to_string(value)?;
        Ok(self.header("content-type", "application/json").body(body))
    }

    pub fn include_credentials(mut self) -> Self {
        self.include_credentials = true;
        self
    }
}

/// Identity of one fetch: the address plus its configuration.
///
/// Hooks re-run when the key changes, and equality is structural, so a
/// configuration rebuilt on every render does not trigger another fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestKey {
    pub address: String,
    pub options: Option<RequestOptions>,
}

impl RequestKey {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            options: None,
        }
    }

    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// In-process hash of the address and configuration. Equal keys hash
    /// equal within one build; the value is not meant to be persisted.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl From<&str> for RequestKey {
    fn from(address: &str) -> Self {
        RequestKey::new(address)
    }
}

impl From<String> for RequestKey {
    fn from(address: String) -> Self {
        RequestKey::new(address)
    }
}
