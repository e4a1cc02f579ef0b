use serde::de::{DeserializeOwned, Error as _};
use serde::Deserialize;
use serde_json::Value;

/// Body shape shared by every upstream service: `{ "data": T }` on success,
/// `{ "error": "..." }` on failure.
#[derive(Debug, PartialEq)]
pub enum Envelope<T> {
    Data(T),
    Error(String),
}

#[derive(Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    error: Option<String>,
}

impl<T: DeserializeOwned> Envelope<T> {
    /// `data` wins when a body carries both keys.
    pub fn decode(body: &[u8]) -> Result<Self, serde_json::Error> {
        let raw: RawEnvelope = serde_json::from_slice(body)?;
        match (raw.data, raw.error) {
            (Some(data), _) => serde_json::from_value(data).map(Envelope::Data),
            (None, Some(error)) => Ok(Envelope::Error(error)),
            (None, None) => Err(serde_json::Error::missing_field("data")),
        }
    }
}

/// The `error` field of a failure body, if the body has one.
pub fn error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<RawEnvelope>(body)
        .ok()
        .and_then(|raw| raw.error)
        .filter(|message| !message.is_empty())
}
