pub mod cloud_provider;
pub mod commands;
pub mod error;
pub mod logging;
pub mod size;
