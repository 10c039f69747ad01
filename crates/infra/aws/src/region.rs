use rdslogs_core::error::{ConfigurationError, Result};

/// Regions of the `aws` partition where RDS is offered.
pub(crate) const RDS_REGIONS: &[&str] = &[
    "af-south-1",
    "ap-east-1",
    "ap-east-2",
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-northeast-3",
    "ap-south-1",
    "ap-south-2",
    "ap-southeast-1",
    "ap-southeast-2",
    "ap-southeast-3",
    "ap-southeast-4",
    "ap-southeast-5",
    "ap-southeast-7",
    "ca-central-1",
    "ca-west-1",
    "eu-central-1",
    "eu-central-2",
    "eu-north-1",
    "eu-south-1",
    "eu-south-2",
    "eu-west-1",
    "eu-west-2",
    "eu-west-3",
    "il-central-1",
    "me-central-1",
    "me-south-1",
    "mx-central-1",
    "sa-east-1",
    "us-east-1",
    "us-east-2",
    "us-west-1",
    "us-west-2",
];

pub(crate) fn is_known_region(region_name: &str) -> bool {
    RDS_REGIONS.contains(&region_name)
}

pub(crate) fn validate_region(region_name: &str) -> Result<()> {
    if is_known_region(region_name) {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidRegion {
            region_name: region_name.to_string(),
        }
        .into())
    }
}
