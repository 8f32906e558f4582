use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::FetchError;

/// What to do when a response lacks the `data` envelope field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DataPolicy {
    /// Treat it as an empty result.
    #[default]
    Optional,
    /// Treat it as a schema error.
    Required,
}

/// Unwrap the `data` field of a response body.
///
/// A `null` field counts as absent.
pub fn extract_data(
    body: Value,
    policy: DataPolicy,
) -> Result<Option<Value>, FetchError> {
    let data = match body {
        Value::Object(mut fields) => fields.remove("data"),
        _ => None,
    };

    match (data, policy) {
        (Some(Value::Null) | None, DataPolicy::Optional) => Ok(None),
        (Some(Value::Null) | None, DataPolicy::Required) => {
            Err(FetchError::MissingData)
        }
        (Some(data), _) => Ok(Some(data)),
    }
}

/// Unwrap the `data` field and deserialize it into `T`.
pub fn decode_data<T: DeserializeOwned>(
    body: Value,
    policy: DataPolicy,
) -> Result<Option<T>, FetchError> {
    extract_data(body, policy)?
        .map(serde_json::from_value)
        .transpose()
        .map_err(FetchError::from)
}
