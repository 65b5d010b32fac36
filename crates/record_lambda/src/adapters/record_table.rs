use record_core::record::Record;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure talking to the record table.
///
/// The display text is safe to return to callers; backend detail stays in
/// `source` and is only logged.
#[derive(Debug, Error)]
pub enum RecordTableError {
    #[error("failed to write record")]
    Write {
        table: String,
        #[source]
        source: BoxError,
    },
    #[error("failed to scan records")]
    Scan {
        table: String,
        #[source]
        source: BoxError,
    },
}

impl RecordTableError {
    pub fn table(&self) -> &str {
        match self {
            Self::Write { table, .. } | Self::Scan { table, .. } => table,
        }
    }
}

pub trait RecordTable {
    fn table_name(&self) -> &str;

    /// Upserts `record` by its id.
    fn put_record(&self, record: &Record) -> Result<(), RecordTableError>;

    /// Returns the id of every stored record, across all scan pages.
    fn scan_record_ids(&self) -> Result<Vec<String>, RecordTableError>;
}
