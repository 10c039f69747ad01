mod aws_error;
mod config;
mod db_instance;
mod profile;
mod provider;
mod region;

pub use provider::{AwsProvider, AwsProviderConfig};
