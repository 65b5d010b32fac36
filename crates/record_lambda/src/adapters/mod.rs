pub mod dynamodb;
pub mod record_table;
