use serde::{Deserialize, Serialize};

/// Attribute name of the table's partition key.
pub const RECORD_ID_ATTRIBUTE: &str = "recordId";
/// Attribute name holding the narrative text.
pub const VALUE_ATTRIBUTE: &str = "value";

const CASE_REPORT_PREFIX: &str = "Case Report ";
const CASE_REPORT_NARRATIVE: &str =
    ": Acute Gastroenteritis in a 3-Year-Old Female Labrador Retriever";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    #[serde(rename = "recordId")]
    pub record_id: String,
    pub value: String,
}

impl Record {
    /// Builds the case report record stored for `record_id`.
    pub fn case_report(record_id: impl Into<String>) -> Self {
        let record_id = record_id.into();
        let value = case_report_value(&record_id);
        Self { record_id, value }
    }
}

pub fn case_report_value(record_id: &str) -> String {
    format!("{CASE_REPORT_PREFIX}{record_id}{CASE_REPORT_NARRATIVE}")
}
