use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DnsRecord {
    #[serde(rename = "record_id")]
    pub id: i64,
    #[serde(rename = "type", default)]
    pub record_type: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub fqdn: Option<String>,
    #[serde(default, deserialize_with = "deserialize_priority")]
    pub priority: u64,
    #[serde(default)]
    pub ttl: u64,
    #[serde(default)]
    pub subdomain: String,
}

/// Shapes the provider uses for `priority`. Variants are tried top to bottom,
/// so any string wins over a number.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPriority {
    Text(#[allow(dead_code)] String),
    Number(u64),
    Other(#[allow(dead_code)] serde::de::IgnoredAny),
}

// A string priority decodes to 0 even when it looks numeric ("5" -> 0).
fn deserialize_priority<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawPriority::deserialize(deserializer)? {
        RawPriority::Number(value) => value,
        RawPriority::Text(_) | RawPriority::Other(_) => 0,
    })
}

/// Parameters of a record to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRequest {
    pub record_type: String,
    pub content: String,
    pub ttl: u32,
    pub subdomain: String,
}

/// The provider's `success` field. Only the literal `"error"` means failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Status {
    #[default]
    Ok,
    Error,
}

impl From<String> for Status {
    fn from(value: String) -> Self {
        if value == "error" {
            Status::Error
        } else {
            Status::Ok
        }
    }
}

/// Envelope fields common to every response. The rest of the body is kept
/// untyped until `success` says there is a payload worth decoding.
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub success: Status,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl ApiResponse {
    pub fn into_payload(self) -> Result<Value, ApiError> {
        match self.success {
            Status::Ok => Ok(Value::Object(self.payload)),
            Status::Error => Err(ApiError::Provider {
                message: self.error.unwrap_or_default(),
            }),
        }
    }
}

/// Decodes a response body: envelope first, then the typed payload.
pub fn decode_response<T: DeserializeOwned>(body: String) -> Result<T, ApiError> {
    let envelope: ApiResponse = match serde_json::from_str(&body) {
        Ok(envelope) => envelope,
        Err(source) => return Err(ApiError::Decode { source, body }),
    };

    let payload = envelope.into_payload()?;
    serde_json::from_value(payload).map_err(|source| ApiError::Decode { source, body })
}

#[derive(Debug, Deserialize)]
pub struct RecordList {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub records: Vec<DnsRecord>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<DnsRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Deserialize)]
pub struct CreatedRecord {
    #[serde(default)]
    pub record: Option<DnsRecord>,
}

/// Delete responses echo the removed record's fields; none of them are used.
#[derive(Debug, Deserialize)]
pub struct Deleted {}

pub fn filter_by_content<S: AsRef<str>>(records: Vec<DnsRecord>, contents: &[S]) -> Vec<DnsRecord> {
    records
        .into_iter()
        .filter(|record| contents.iter().any(|c| c.as_ref() == record.content))
        .collect()
}
