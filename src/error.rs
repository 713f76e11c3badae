use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("ConfigurationError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("ConnectionError: {0}")]
    Connection(#[from] ConnectionError),
    #[error("ExecutionError: {0}")]
    Query(#[from] QueryError),
    #[error("CatalogError: {0}")]
    Catalog(#[from] CatalogError),
    #[error("InputError: {0}")]
    Input(#[from] InputError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration field '{field}' is missing")]
    MissingField { field: String },
    #[error("invalid configuration value for '{field}': {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
    #[error("profile '{name}' not found")]
    ProfileNotFound { name: String },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("file I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("configuration parse error: {message}")]
    ConfigParse { message: String },
}

#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("could not connect to the database: {0}")]
    Connect(tokio_postgres::Error),
}

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("query execution failed: {0}")]
    Driver(#[from] tokio_postgres::Error),
    #[error("column '{column}' has unsupported type {type_name}")]
    UnsupportedColumnType { column: String, type_name: String },
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("unknown report selection {selection}")]
    UnknownSelection { selection: usize },
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("input stream closed")]
    StreamClosed,
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "🚨",
            ErrorSeverity::High => "❌",
            ErrorSeverity::Medium => "⚠️",
            ErrorSeverity::Low => "ℹ️",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Connection(_) => ErrorSeverity::Critical,
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Storage(_) => ErrorSeverity::High,
            AppError::Query(_) => ErrorSeverity::Medium,
            AppError::Catalog(_) => ErrorSeverity::Medium,
            AppError::Input(_) => ErrorSeverity::Low,
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Config(ConfigError::ProfileNotFound { name }) => Some(format!(
                "add a [profiles.{}] section to config.toml with host, database and user",
                name
            )),
            AppError::Config(_) => Some("check the profile values in config.toml".to_string()),
            AppError::Storage(StorageError::ConfigParse { .. }) => {
                Some("fix the TOML syntax in config.toml".to_string())
            }
            AppError::Connection(_) => Some(
                "check the profile's host and port and that the database server is reachable"
                    .to_string(),
            ),
            _ => None,
        }
    }
}
