use std::collections::HashMap;

use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use record_core::record::{Record, RECORD_ID_ATTRIBUTE, VALUE_ATTRIBUTE};

use crate::adapters::record_table::{RecordTable, RecordTableError};

pub type Item = HashMap<String, AttributeValue>;

/// One page of a table scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanPage {
    pub items: Vec<Item>,
    pub last_evaluated_key: Option<Item>,
}

pub struct DynamoRecordTable {
    // Client wraps an Arc so should be low cost to clone
    client: Client,
    table_name: String,
}

impl DynamoRecordTable {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    fn fetch_page(&self, exclusive_start_key: Option<Item>) -> Result<ScanPage, RecordTableError> {
        let client = self.client.clone();
        let table_name = self.table_name.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .scan()
                    .table_name(table_name)
                    .projection_expression(RECORD_ID_ATTRIBUTE)
                    .set_exclusive_start_key(exclusive_start_key)
                    .send()
                    .await
                    .map(|output| ScanPage {
                        items: output.items.unwrap_or_default(),
                        last_evaluated_key: output.last_evaluated_key,
                    })
                    .map_err(|error| {
                        tracing::error!(
                            table = %self.table_name,
                            error = %DisplayErrorContext(&error),
                            "dynamodb scan failed"
                        );
                        RecordTableError::Scan {
                            table: self.table_name.clone(),
                            source: error.into(),
                        }
                    })
            })
        })
    }
}

impl RecordTable for DynamoRecordTable {
    fn table_name(&self) -> &str {
        &self.table_name
    }

    fn put_record(&self, record: &Record) -> Result<(), RecordTableError> {
        let client = self.client.clone();
        let table_name = self.table_name.clone();
        let item = record_item(record);

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .put_item()
                    .table_name(table_name)
                    .set_item(Some(item))
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| {
                        tracing::error!(
                            table = %self.table_name,
                            record_id = %record.record_id,
                            error = %DisplayErrorContext(&error),
                            "dynamodb put_item failed"
                        );
                        RecordTableError::Write {
                            table: self.table_name.clone(),
                            source: error.into(),
                        }
                    })
            })
        })
    }

    fn scan_record_ids(&self) -> Result<Vec<String>, RecordTableError> {
        collect_record_ids(|start_key| self.fetch_page(start_key))
    }
}

pub fn record_item(record: &Record) -> Item {
    let mut item = HashMap::with_capacity(2);
    item.insert(
        RECORD_ID_ATTRIBUTE.to_string(),
        AttributeValue::S(record.record_id.clone()),
    );
    item.insert(
        VALUE_ATTRIBUTE.to_string(),
        AttributeValue::S(record.value.clone()),
    );
    item
}

/// Items without a string `recordId` attribute yield `None`.
pub fn record_id_of(item: &Item) -> Option<String> {
    item.get(RECORD_ID_ATTRIBUTE)
        .and_then(|value| value.as_s().ok())
        .cloned()
}

/// Drives `fetch_page` from the first page until the table reports no
/// continuation key.
pub fn collect_record_ids<E>(
    mut fetch_page: impl FnMut(Option<Item>) -> Result<ScanPage, E>,
) -> Result<Vec<String>, E> {
    let mut record_ids = Vec::new();
    let mut start_key = None;

    loop {
        let page = fetch_page(start_key)?;
        record_ids.extend(page.items.iter().filter_map(record_id_of));

        match page.last_evaluated_key {
            Some(key) if !key.is_empty() => start_key = Some(key),
            _ => break,
        }
    }

    Ok(record_ids)
}
