use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("The config profile ({profile_name}) could not be found")]
    ProfileNotFound { profile_name: String },

    #[error("the specified region {region_name} is not a valid AWS region")]
    InvalidRegion { region_name: String },

    #[error("invalid configuration file {path}: {reason}")]
    InvalidFile { path: String, reason: String },

    #[error("failed to initialize logging: {reason}")]
    Logging { reason: String },
}
