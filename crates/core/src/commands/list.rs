use tracing::{debug, info};

use crate::{
    cloud_provider::{CloudProvider, InstanceInfo},
    error::Result,
};

pub async fn list_instances(provider: &dyn CloudProvider) -> Result<Vec<InstanceInfo>> {
    info!(region = ?provider.get_region_name(), "listing database instances");
    let instances = provider.list_instances().await?;
    for instance in &instances {
        debug!(
            id = %instance.id,
            engine = ?instance.engine,
            status = ?instance.status,
            "found instance"
        );
    }
    Ok(instances)
}
