use lambda_runtime::{service_fn, Error, LambdaEvent};
use record_lambda::adapters::dynamodb::DynamoRecordTable;
use record_lambda::config::TableConfig;
use record_lambda::handlers::recorder::handle_recorder_event;
use record_lambda::handlers::response::ApiGatewayResponse;
use serde_json::Value;

async fn handle_request(
    table: &DynamoRecordTable,
    event: LambdaEvent<Value>,
) -> Result<ApiGatewayResponse, Error> {
    Ok(handle_recorder_event(&event.payload, table))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::tracing::init_default_subscriber();

    let config = TableConfig::from_env()?;
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let table = DynamoRecordTable::new(
        aws_sdk_dynamodb::Client::new(&aws_config),
        config.table_name,
    );

    let table = &table;
    lambda_runtime::run(service_fn(move |event| async move {
        handle_request(table, event).await
    }))
    .await
}
