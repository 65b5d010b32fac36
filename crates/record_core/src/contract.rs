use serde::{Deserialize, Serialize};

pub const RECORD_ADDED_MESSAGE: &str = "Item added successfully";
pub const MISSING_RECORD_ID_MESSAGE: &str = "Missing recordId";

/// Query string parameters accepted by the handlers.
///
/// `owners` and `petid` are part of the public route but carry no behaviour.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordQuery {
    #[serde(rename = "recordId", default)]
    pub record_id: Option<String>,
    #[serde(default)]
    pub owners: Option<String>,
    #[serde(rename = "petid", default)]
    pub pet_id: Option<String>,
}

impl RecordQuery {
    /// Returns the record id when present. Presence is the only check.
    pub fn require_record_id(&self) -> Result<&str, ValidationError> {
        self.record_id
            .as_deref()
            .ok_or_else(|| ValidationError::new(MISSING_RECORD_ID_MESSAGE))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordAddedResponse {
    pub message: String,
    #[serde(rename = "recordId")]
    pub record_id: String,
}

impl RecordAddedResponse {
    pub fn new(record_id: impl Into<String>) -> Self {
        Self {
            message: RECORD_ADDED_MESSAGE.to_string(),
            record_id: record_id.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordIdsResponse {
    #[serde(rename = "recordIds")]
    pub record_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}
