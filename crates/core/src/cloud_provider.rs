use async_trait::async_trait;

use crate::error::Result;

/// Read-only view of a managed database service.
///
/// Implementations own their client and resolved region; callers receive
/// the provider by reference so tests can substitute an in-memory fake.
#[async_trait]
pub trait CloudProvider: Send + Sync {
    async fn list_instances(&self) -> Result<Vec<InstanceInfo>>;

    /// Fails with [`crate::error::Error::InstanceNotFound`] when the service
    /// does not know `instance_id`.
    async fn list_log_files(&self, instance_id: &str) -> Result<Vec<LogFileInfo>>;

    fn get_region_name(&self) -> Option<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceInfo {
    pub id: String,
    pub engine: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFileInfo {
    pub name: String,
    /// Size in bytes as reported by the service.
    pub size: i64,
}
