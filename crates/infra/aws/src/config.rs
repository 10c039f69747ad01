use aws_config::SdkConfig;
use aws_sdk_rds::config::Region;
use rdslogs_core::error::Result;
use tracing::{debug, info};

use crate::{
    AwsProviderConfig,
    profile::{self, ProfileFiles},
    region,
};

/// Rejects an unknown profile, or an unknown region when it is the only
/// override, before any client is built.
pub(super) fn validate(provider_config: &AwsProviderConfig, files: &ProfileFiles) -> Result<()> {
    match (&provider_config.profile, &provider_config.region) {
        (Some(profile_name), _) => profile::ensure_profile_exists(profile_name, files),
        (None, Some(region_name)) => region::validate_region(region_name),
        (None, None) => Ok(()),
    }
}

pub(super) async fn get_config(provider_config: &AwsProviderConfig) -> Result<SdkConfig> {
    validate(provider_config, &ProfileFiles::from_env())?;

    let mut loader = aws_config::from_env();
    if let Some(profile_name) = &provider_config.profile {
        debug!(profile_name, "using named profile");
        loader = loader.profile_name(profile_name);
    }
    if let Some(region_name) = &provider_config.region {
        debug!(region_name, "using explicit region");
        loader = loader.region(Region::new(region_name.clone()));
    }

    let config = loader.load().await;
    info!(region = ?config.region(), "resolved AWS session");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use rdslogs_core::error::{ConfigurationError, Error};

    use super::*;

    fn provider_config(profile: Option<&str>, region: Option<&str>) -> AwsProviderConfig {
        AwsProviderConfig {
            profile: profile.map(ToString::to_string),
            region: region.map(ToString::to_string),
        }
    }

    fn files_with_profile(directory: &tempfile::TempDir, profile_name: &str) -> ProfileFiles {
        let credentials = directory.path().join("credentials");
        std::fs::write(
            &credentials,
            format!("[{profile_name}]\naws_access_key_id = AKIAEXAMPLE\n"),
        )
        .unwrap();
        ProfileFiles {
            config: None,
            credentials: Some(credentials),
        }
    }

    #[test]
    fn ambient_defaults_need_no_validation() {
        assert!(validate(&provider_config(None, None), &ProfileFiles::default()).is_ok());
    }

    #[test]
    fn region_only_must_be_known() {
        let files = ProfileFiles::default();
        assert!(validate(&provider_config(None, Some("eu-west-1")), &files).is_ok());

        let error = validate(&provider_config(None, Some("eu-west-9")), &files).unwrap_err();
        assert!(matches!(
            error,
            Error::Configuration(ConfigurationError::InvalidRegion { region_name }) if region_name == "eu-west-9"
        ));
    }

    #[test]
    fn profile_must_exist() {
        let directory = tempfile::tempdir().unwrap();
        let files = files_with_profile(&directory, "staging");

        assert!(validate(&provider_config(Some("staging"), None), &files).is_ok());
        assert!(
            validate(
                &provider_config(Some("staging"), Some("eu-central-1")),
                &files
            )
            .is_ok()
        );

        let error = validate(&provider_config(Some("prod"), Some("eu-central-1")), &files)
            .unwrap_err();
        assert!(matches!(
            error,
            Error::Configuration(ConfigurationError::ProfileNotFound { profile_name }) if profile_name == "prod"
        ));
    }

    #[test]
    fn region_is_not_checked_alongside_a_profile() {
        let directory = tempfile::tempdir().unwrap();
        let files = files_with_profile(&directory, "staging");
        assert!(validate(&provider_config(Some("staging"), Some("local-1")), &files).is_ok());
    }
}
