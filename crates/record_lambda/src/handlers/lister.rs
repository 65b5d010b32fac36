use std::time::Instant;

use record_core::contract::RecordIdsResponse;
use serde_json::Value;

use crate::adapters::record_table::RecordTable;
use crate::handlers::response::{error_response, success_response, ApiGatewayResponse};

/// Lists every stored record id. The event is ignored.
pub fn handle_lister_event(_event: &Value, table: &dyn RecordTable) -> ApiGatewayResponse {
    let started_at = Instant::now();
    match table.scan_record_ids() {
        Ok(record_ids) => {
            tracing::info!(
                component = "lister",
                table = table.table_name(),
                record_count = record_ids.len(),
                duration_ms = started_at.elapsed().as_millis() as u64,
                "records_listed"
            );
            for record_id in &record_ids {
                tracing::debug!(component = "lister", record_id = %record_id, "record listed");
            }
            success_response(200, RecordIdsResponse { record_ids })
        }
        Err(error) => {
            tracing::error!(
                component = "lister",
                table = error.table(),
                duration_ms = started_at.elapsed().as_millis() as u64,
                error = %error,
                "records_list_failed"
            );
            error_response(500, &error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use record_core::contract::ErrorResponse;
    use serde_json::json;

    use super::*;
    use crate::handlers::recorder::handle_recorder_event;
    use crate::testing::{FailingTable, RecordingTable, BACKEND_DETAIL};

    fn listed_ids(response: &ApiGatewayResponse) -> BTreeSet<String> {
        let body: RecordIdsResponse =
            serde_json::from_str(&response.body).expect("body should parse");
        body.record_ids.into_iter().collect()
    }

    #[test]
    fn lists_every_stored_record_id() {
        let table = RecordingTable::new();
        table.seed_record("R1");
        table.seed_record("R2");

        let response = handle_lister_event(&json!({}), &table);

        assert_eq!(response.status_code, 200);
        assert_eq!(response.headers["Content-Type"], "application/json");
        assert_eq!(
            listed_ids(&response),
            BTreeSet::from(["R1".to_string(), "R2".to_string()])
        );
    }

    #[test]
    fn empty_table_lists_no_ids() {
        let response = handle_lister_event(&json!({}), &RecordingTable::new());

        assert_eq!(response.status_code, 200);
        let body: Value = serde_json::from_str(&response.body).expect("body should parse");
        assert_eq!(body, json!({"recordIds": []}));
    }

    #[test]
    fn ignores_query_parameters() {
        let table = RecordingTable::new();
        table.seed_record("R1");

        let response = handle_lister_event(
            &json!({"queryStringParameters": {"owners": "george", "petid": "9"}}),
            &table,
        );

        assert_eq!(listed_ids(&response), BTreeSet::from(["R1".to_string()]));
    }

    #[test]
    fn lists_records_written_by_recorder() {
        let table = RecordingTable::new();
        for record_id in ["R1", "R2", "R1"] {
            let event = json!({"queryStringParameters": {"recordId": record_id}});
            assert_eq!(handle_recorder_event(&event, &table).status_code, 200);
        }

        let response = handle_lister_event(&Value::Null, &table);

        assert_eq!(
            listed_ids(&response),
            BTreeSet::from(["R1".to_string(), "R2".to_string()])
        );
    }

    #[test]
    fn scan_failure_returns_500_without_backend_detail() {
        let response = handle_lister_event(&json!({}), &FailingTable);

        assert_eq!(response.status_code, 500);
        assert_eq!(response.headers["Content-Type"], "application/json");
        let body: ErrorResponse =
            serde_json::from_str(&response.body).expect("error body should parse");
        assert_eq!(body.error, "failed to scan records");
        assert!(!response.body.contains(BACKEND_DETAIL));
    }
}
