use std::io::Write;

use rdslogs_core::{
    cloud_provider::CloudProvider,
    commands::{self, log_size::LogSizeOutcome},
    error::Result,
};

pub async fn log_size(
    provider: &dyn CloudProvider,
    instance_id: &str,
    out: &mut impl Write,
) -> Result<()> {
    let outcome = commands::log_size::get_log_size(provider, instance_id).await?;
    write_outcome(out, &outcome)?;
    Ok(())
}

fn write_outcome(out: &mut impl Write, outcome: &LogSizeOutcome) -> std::io::Result<()> {
    match outcome {
        LogSizeOutcome::Found { total, .. } => writeln!(out, "The total logs size is {total}"),
        LogSizeOutcome::InstanceNotFound { instance_id } => {
            writeln!(out, "The database instance {instance_id} not found!!")
        }
    }
}
