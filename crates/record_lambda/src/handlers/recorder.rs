use std::time::Instant;

use record_core::contract::RecordAddedResponse;
use record_core::record::Record;
use serde_json::Value;

use crate::adapters::record_table::RecordTable;
use crate::handlers::event::query_parameters;
use crate::handlers::response::{error_response, success_response, ApiGatewayResponse};

/// Stores the case report for the event's `recordId`.
///
/// Returns 400 when the id is missing and 500 when the table write fails.
/// A repeated id overwrites the earlier record.
pub fn handle_recorder_event(event: &Value, table: &dyn RecordTable) -> ApiGatewayResponse {
    let query = query_parameters(event);
    tracing::debug!(
        component = "recorder",
        owners = ?query.owners,
        pet_id = ?query.pet_id,
        "query parameters received"
    );

    let record_id = match query.require_record_id() {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(component = "recorder", error = %error, "record_rejected");
            return error_response(400, error.message());
        }
    };

    let record = Record::case_report(record_id);
    let started_at = Instant::now();
    match table.put_record(&record) {
        Ok(()) => {
            tracing::info!(
                component = "recorder",
                table = table.table_name(),
                record_id = %record.record_id,
                duration_ms = started_at.elapsed().as_millis() as u64,
                "record_stored"
            );
            success_response(200, RecordAddedResponse::new(record.record_id))
        }
        Err(error) => {
            tracing::error!(
                component = "recorder",
                table = error.table(),
                record_id = %record.record_id,
                duration_ms = started_at.elapsed().as_millis() as u64,
                error = %error,
                "record_store_failed"
            );
            error_response(500, &error.to_string())
        }
    }
}
