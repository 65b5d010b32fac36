use std::collections::HashMap;
use std::sync::Mutex;

use record_core::record::Record;

use crate::adapters::record_table::{RecordTable, RecordTableError};

pub(crate) struct RecordingTable {
    records: Mutex<HashMap<String, String>>,
}

impl RecordingTable {
    pub(crate) fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) fn value(&self, record_id: &str) -> Option<String> {
        self.records
            .lock()
            .expect("poisoned mutex")
            .get(record_id)
            .cloned()
    }

    pub(crate) fn len(&self) -> usize {
        self.records.lock().expect("poisoned mutex").len()
    }

    pub(crate) fn seed_record(&self, record_id: &str) {
        let record = Record::case_report(record_id);
        self.records
            .lock()
            .expect("poisoned mutex")
            .insert(record.record_id, record.value);
    }
}

impl RecordTable for RecordingTable {
    fn table_name(&self) -> &str {
        "recording-table"
    }

    fn put_record(&self, record: &Record) -> Result<(), RecordTableError> {
        self.records
            .lock()
            .expect("poisoned mutex")
            .insert(record.record_id.clone(), record.value.clone());
        Ok(())
    }

    fn scan_record_ids(&self) -> Result<Vec<String>, RecordTableError> {
        Ok(self
            .records
            .lock()
            .expect("poisoned mutex")
            .keys()
            .cloned()
            .collect())
    }
}

/// Fails every call with a backend message that must not reach callers.
pub(crate) struct FailingTable;

pub(crate) const BACKEND_DETAIL: &str = "ResourceNotFoundException: arn:aws:dynamodb:secret";

impl RecordTable for FailingTable {
    fn table_name(&self) -> &str {
        "failing-table"
    }

    fn put_record(&self, _record: &Record) -> Result<(), RecordTableError> {
        Err(RecordTableError::Write {
            table: self.table_name().to_string(),
            source: std::io::Error::other(BACKEND_DETAIL).into(),
        })
    }

    fn scan_record_ids(&self) -> Result<Vec<String>, RecordTableError> {
        Err(RecordTableError::Scan {
            table: self.table_name().to_string(),
            source: std::io::Error::other(BACKEND_DETAIL).into(),
        })
    }
}
