use std::io::Write;

use rdslogs_core::{
    cloud_provider::{CloudProvider, InstanceInfo},
    commands,
    error::Result,
};

pub async fn list_instances(provider: &dyn CloudProvider, out: &mut impl Write) -> Result<()> {
    let instances = commands::list::list_instances(provider).await?;
    write_instances(out, &instances)?;
    Ok(())
}

fn write_instances(out: &mut impl Write, instances: &[InstanceInfo]) -> std::io::Result<()> {
    if instances.is_empty() {
        writeln!(out, "No RDS instances found!!")?;
        return Ok(());
    }

    writeln!(out, "RDS Instance ID:")?;
    writeln!(out, "----------------")?;
    for instance in instances {
        writeln!(out, "{}", instance.id)?;
    }
    Ok(())
}
