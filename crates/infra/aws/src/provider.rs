use async_trait::async_trait;
use aws_sdk_rds::Client as RdsClient;
use rdslogs_core::{
    cloud_provider::{CloudProvider, InstanceInfo, LogFileInfo},
    error::Result,
};

use crate::{config, db_instance};

/// Session overrides; `None` falls back to the SDK's ambient resolution.
#[derive(Debug, Clone, Default)]
pub struct AwsProviderConfig {
    pub profile: Option<String>,
    pub region: Option<String>,
}

pub struct AwsProvider {
    pub rds_client: RdsClient,
    region: Option<String>,
}

impl AwsProvider {
    pub async fn new(config: &AwsProviderConfig) -> Result<Self> {
        let sdk_config = config::get_config(config).await?;
        let region = sdk_config.region().map(ToString::to_string);
        let rds_client = RdsClient::new(&sdk_config);
        Ok(Self { rds_client, region })
    }
}

#[async_trait]
impl CloudProvider for AwsProvider {
    async fn list_instances(&self) -> Result<Vec<InstanceInfo>> {
        db_instance::list_instances(&self.rds_client).await
    }

    async fn list_log_files(&self, instance_id: &str) -> Result<Vec<LogFileInfo>> {
        db_instance::list_log_files(&self.rds_client, instance_id).await
    }

    fn get_region_name(&self) -> Option<String> {
        self.region.clone()
    }
}
