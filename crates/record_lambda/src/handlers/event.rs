use record_core::contract::RecordQuery;
use serde_json::Value;

const QUERY_PARAMETERS_FIELD: &str = "queryStringParameters";

/// Reads the query string parameters of an API Gateway proxy event.
///
/// A missing or `null` parameters member yields an empty query, as does a
/// non-object event or a parameters mapping that does not match
/// `RecordQuery` (for example a non-string `recordId`).
pub fn query_parameters(event: &Value) -> RecordQuery {
    let parameters = match event.get(QUERY_PARAMETERS_FIELD) {
        Some(Value::Null) | None => return RecordQuery::default(),
        Some(value) => value.clone(),
    };

    match serde_json::from_value::<RecordQuery>(parameters) {
        Ok(query) => query,
        Err(error) => {
            tracing::warn!(error = %error, "malformed query string parameters");
            RecordQuery::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn reads_all_known_parameters() {
        let query = query_parameters(&json!({
            "queryStringParameters": {
                "recordId": "R1",
                "owners": "george",
                "petid": "3",
                "unrelated": "ignored"
            }
        }));

        assert_eq!(query.record_id.as_deref(), Some("R1"));
        assert_eq!(query.owners.as_deref(), Some("george"));
        assert_eq!(query.pet_id.as_deref(), Some("3"));
    }

    #[test]
    fn null_parameters_yield_empty_query() {
        let query = query_parameters(&json!({"queryStringParameters": null}));
        assert_eq!(query, RecordQuery::default());
    }

    #[test]
    fn missing_parameters_yield_empty_query() {
        assert_eq!(query_parameters(&json!({})), RecordQuery::default());
        assert_eq!(query_parameters(&json!("not an event")), RecordQuery::default());
    }

    #[test]
    fn non_string_record_id_yields_empty_query() {
        let query = query_parameters(&json!({
            "queryStringParameters": {"recordId": 12, "owners": "george"}
        }));
        assert_eq!(query, RecordQuery::default());
    }

    #[test]
    fn non_object_parameters_yield_empty_query() {
        let query = query_parameters(&json!({"queryStringParameters": "recordId=R1"}));
        assert_eq!(query, RecordQuery::default());
    }
}
