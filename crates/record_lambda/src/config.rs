use thiserror::Error;

pub const TABLE_NAME_ENV: &str = "RECORD_TABLE_NAME";
pub const DEFAULT_TABLE_NAME: &str = "HistoricalRecordDynamoDBTable";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must not be blank")]
    Blank(&'static str),
}

/// Settings read once at cold start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
}

impl TableConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let table_name = match lookup(TABLE_NAME_ENV) {
            Some(value) if value.trim().is_empty() => return Err(ConfigError::Blank(TABLE_NAME_ENV)),
            Some(value) => value.trim().to_string(),
            None => DEFAULT_TABLE_NAME.to_string(),
        };

        Ok(Self { table_name })
    }
}
