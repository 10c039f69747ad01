use tracing::{debug, info};

use crate::{
    cloud_provider::CloudProvider,
    error::{Error, Result},
    size::{HumanSize, total_size},
};

#[derive(Debug, Clone, PartialEq)]
pub enum LogSizeOutcome {
    Found {
        instance_id: String,
        log_file_count: usize,
        total_bytes: u64,
        total: HumanSize,
    },
    InstanceNotFound {
        instance_id: String,
    },
}

/// Sums the log file sizes of one instance.
///
/// An unknown instance is reported as [`LogSizeOutcome::InstanceNotFound`];
/// every other failure is returned as an error.
pub async fn get_log_size(
    provider: &dyn CloudProvider,
    instance_id: &str,
) -> Result<LogSizeOutcome> {
    info!(
        instance_id,
        region = ?provider.get_region_name(),
        "describing log files"
    );
    let log_files = match provider.list_log_files(instance_id).await {
        Ok(log_files) => log_files,
        Err(Error::InstanceNotFound { .. }) => {
            return Ok(LogSizeOutcome::InstanceNotFound {
                instance_id: instance_id.to_string(),
            });
        }
        Err(error) => return Err(error),
    };

    for log_file in &log_files {
        debug!(name = %log_file.name, size = log_file.size, "log file");
    }

    let total_bytes = total_size(&log_files);
    info!(count = log_files.len(), total_bytes, "aggregated log files");

    Ok(LogSizeOutcome::Found {
        instance_id: instance_id.to_string(),
        log_file_count: log_files.len(),
        total_bytes,
        total: HumanSize::from_bytes(total_bytes),
    })
}
