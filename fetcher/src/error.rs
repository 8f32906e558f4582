/// Broad failure classes, used by callers that only care where a fetch
/// cycle broke down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never produced a usable response.
    Transport,
    /// The response body was not the JSON we expected.
    Parse,
    /// The JSON was valid but lacked the `data` envelope field.
    Schema,
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Transport(String),
    /// A non-success status under [`crate::StatusPolicy::Strict`].
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },
    #[error("Failed to parse response as JSON: {0}")]
    Parse(String),
    #[error("Response did not contain a \"data\" field")]
    MissingData,
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Transport(_) | FetchError::Http { .. } => {
                ErrorKind::Transport
            }
            FetchError::Parse(_) => ErrorKind::Parse,
            FetchError::MissingData => ErrorKind::Schema,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Parse(e.to_string())
    }
}
