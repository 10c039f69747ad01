use std::collections::HashMap;

use async_trait::async_trait;

use crate::{
    cloud_provider::{CloudProvider, InstanceInfo, LogFileInfo},
    error::{Error, Result},
};

/// In-memory provider; `failure` short-circuits every call.
#[derive(Default)]
pub(crate) struct FakeProvider {
    instances: Vec<InstanceInfo>,
    log_files: HashMap<String, Vec<LogFileInfo>>,
    failure: Option<fn() -> Error>,
}

impl FakeProvider {
    pub(crate) fn with_instances(ids: &[&str]) -> Self {
        let instances = ids
            .iter()
            .map(|id| InstanceInfo {
                id: id.to_string(),
                engine: Some("postgres".to_string()),
                status: Some("available".to_string()),
            })
            .collect();
        Self {
            instances,
            ..Self::default()
        }
    }

    pub(crate) fn with_log_files(mut self, instance_id: &str, sizes: &[i64]) -> Self {
        let log_files = sizes
            .iter()
            .enumerate()
            .map(|(index, size)| LogFileInfo {
                name: format!("error/postgresql.log.{index}"),
                size: *size,
            })
            .collect();
        self.log_files.insert(instance_id.to_string(), log_files);
        self
    }

    pub(crate) fn failing(failure: fn() -> Error) -> Self {
        Self {
            failure: Some(failure),
            ..Self::default()
        }
    }
}

#[async_trait]
impl CloudProvider for FakeProvider {
    async fn list_instances(&self) -> Result<Vec<InstanceInfo>> {
        if let Some(failure) = self.failure {
            return Err(failure());
        }
        Ok(self.instances.clone())
    }

    async fn list_log_files(&self, instance_id: &str) -> Result<Vec<LogFileInfo>> {
        if let Some(failure) = self.failure {
            return Err(failure());
        }
        self.log_files
            .get(instance_id)
            .cloned()
            .ok_or_else(|| Error::InstanceNotFound {
                instance_identifier: instance_id.to_string(),
            })
    }

    fn get_region_name(&self) -> Option<String> {
        Some("us-east-1".to_string())
    }
}
