use thiserror::Error;

use crate::domain::provision::ProvisionStep;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Bootstrap failures. A failed step aborts every step after it.
#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("{step} failed: {source}")]
    Step {
        step: ProvisionStep,
        #[source]
        source: Box<Error>,
    },

    #[error("user '{user}' already exists in database '{db}'")]
    UserExists { user: String, db: String },

    #[error("collection '{collection}' already exists in database '{db}'")]
    CollectionExists { collection: String, db: String },

    #[error("user '{user}' exists with roles [{found}], expected [{expected}]")]
    RoleMismatch {
        user: String,
        expected: String,
        found: String,
    },
}

/// Product feed errors.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("product #{position} has no ProductId attribute")]
    MissingProductId { position: usize },

    #[error("invalid number for {field} in product {stock_code}: '{value}'")]
    InvalidNumber {
        stock_code: String,
        field: &'static str,
        value: String,
    },

    #[error("product {stock_code} is missing required field {field}")]
    MissingField {
        stock_code: String,
        field: &'static str,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Provision(#[from] ProvisionError),

    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("BSON encoding error: {0}")]
    Bson(#[from] bson::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("database error: {0}")]
    Database(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Feed(FeedError::Xml(err))
    }
}
