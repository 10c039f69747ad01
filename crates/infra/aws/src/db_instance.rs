use aws_sdk_rds::{
    Client as RdsClient,
    types::{DbInstance, DescribeDbLogFilesDetails},
};
use rdslogs_core::{
    cloud_provider::{InstanceInfo, LogFileInfo},
    error::{Error, Result},
};
use tracing::debug;

use crate::aws_error::map_aws_error;

pub(super) async fn list_instances(rds_client: &RdsClient) -> Result<Vec<InstanceInfo>> {
    let resp = rds_client
        .describe_db_instances()
        .send()
        .await
        .map_err(|error| map_aws_error("DescribeDBInstances", error))?;

    let instances = resp
        .db_instances()
        .iter()
        .filter_map(instance_info)
        .collect();
    Ok(instances)
}

pub(super) async fn list_log_files(
    rds_client: &RdsClient,
    instance_id: &str,
) -> Result<Vec<LogFileInfo>> {
    let resp = match rds_client
        .describe_db_log_files()
        .db_instance_identifier(instance_id)
        .send()
        .await
    {
        Ok(resp) => resp,
        Err(error)
            if error
                .as_service_error()
                .is_some_and(|service_error| service_error.is_db_instance_not_found_fault()) =>
        {
            debug!(instance_id, "service reported DBInstanceNotFound");
            return Err(Error::InstanceNotFound {
                instance_identifier: instance_id.to_string(),
            });
        }
        Err(error) => return Err(map_aws_error("DescribeDBLogFiles", error)),
    };

    let log_files = resp
        .describe_db_log_files()
        .iter()
        .map(log_file_info)
        .collect();
    Ok(log_files)
}

fn instance_info(instance: &DbInstance) -> Option<InstanceInfo> {
    let id = instance.db_instance_identifier()?.to_string();
    Some(InstanceInfo {
        id,
        engine: instance.engine().map(ToString::to_string),
        status: instance.db_instance_status().map(ToString::to_string),
    })
}

/// A descriptor without a size counts as zero bytes.
fn log_file_info(detail: &DescribeDbLogFilesDetails) -> LogFileInfo {
    LogFileInfo {
        name: detail.log_file_name().unwrap_or_default().to_string(),
        size: detail.size().unwrap_or_default(),
    }
}
