use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{DataPolicy, FetchError, RequestKey, RequestOptions, decode_data};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// How a non-success HTTP status is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Fail with [`FetchError::Http`] before looking at the body.
    #[default]
    Strict,
    /// Ignore the status and parse the body anyway.
    Lenient,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchConfig {
    pub status_policy: StatusPolicy,
    pub data_policy: DataPolicy,
}

/// A client for fetching JSON documents.
#[derive(Debug, Clone, Default)]
pub struct FetchClient {
    pub inner_client: reqwest::Client,
    pub config: FetchConfig,
}

/// Helper methods for http actions
impl FetchClient {
    pub fn new(config: FetchConfig) -> Self {
        Self {
            inner_client: reqwest::Client::new(),
            config,
        }
    }

    async fn send(
        &self,
        address: &str,
        options: Option<&RequestOptions>,
    ) -> ReqwestResult {
        let default_options = RequestOptions::default();
        let options = options.unwrap_or(&default_options);

        let mut request = self
            .inner_client
            .request(options.method.into(), address);
        for (name, value) in &options.headers {
            request = request.header(name, value);
        }
        if let Some(body) = &options.body {
            request = request.body(body.clone());
        }

        #[cfg(target_arch = "wasm32")]
        let request = if options.include_credentials {
            request.fetch_credentials_include()
        } else {
            request
        };

        request.send().await
    }
}

impl FetchClient {
    /// Perform one request and parse the response body as JSON.
    pub async fn fetch_api(
        &self,
        address: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Value, FetchError> {
        tracing::debug!(
            address,
            method = %options.map(|o| o.method).unwrap_or_default(),
            "fetch_api called"
        );

        let response = self.send(address, options).await.map_err(|e| {
            tracing::error!(address, "Fetch error: {e}");
            FetchError::from(e)
        })?;

        json_body(response, self.config.status_policy).await
    }

    /// Fetch the document named by `key` and unwrap its `data` field into
    /// `T`.
    pub async fn fetch_data<T: DeserializeOwned>(
        &self,
        key: &RequestKey,
    ) -> Result<Option<T>, FetchError> {
        let body = self.fetch_api(&key.address, key.options.as_ref()).await?;
        decode_data(body, self.config.data_policy)
    }
}

/// Fetch with a default client.
pub async fn fetch_api(
    address: &str,
    options: Option<&RequestOptions>,
) -> Result<Value, FetchError> {
    FetchClient::default().fetch_api(address, options).await
}

/// Parse a response into JSON, checking the status first when the policy
/// requires it.
async fn json_body(
    response: reqwest::Response,
    policy: StatusPolicy,
) -> Result<Value, FetchError> {
    let status = response.status();
    tracing::debug!(status = status.as_u16(), "Received response");

    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "Response not OK");
        if policy == StatusPolicy::Strict {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }
    }

    let text = response.text().await?;
    let value = serde_json::from_str::<Value>(&text).map_err(|e| {
        tracing::error!("Failed to parse response as JSON: {e}");
        FetchError::from(e)
    })?;
    tracing::debug!("Parsed JSON data");
    Ok(value)
}
