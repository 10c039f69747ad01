mod config;

pub use config::ConfigurationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    InputOutput(#[from] std::io::Error),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("database instance {instance_identifier} not found")]
    InstanceNotFound { instance_identifier: String },

    #[error("authorization denied: {operation}")]
    Authorization { operation: String },

    #[error("authentication failed: {detail}")]
    Authentication { detail: String },

    #[error("rate limit or quota exceeded during {operation_name}")]
    Quota { operation_name: String },

    #[error("transient error during {operation_name}: {detail}")]
    Transient {
        operation_name: String,
        detail: String,
    },

    #[error("unexpected error during {operation_name}: {detail}")]
    Unknown {
        operation_name: String,
        detail: String,
    },
}

impl Error {
    /// Errors the user can fix by changing the invocation rather than the
    /// remote state.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
