//! Named-profile discovery in the shared AWS config and credentials files.

use std::{
    collections::BTreeSet,
    env,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use ini::Ini;
use rdslogs_core::error::{ConfigurationError, Error, Result};

#[derive(Debug, Clone, Default)]
pub(crate) struct ProfileFiles {
    pub(crate) config: Option<PathBuf>,
    pub(crate) credentials: Option<PathBuf>,
}

impl ProfileFiles {
    /// Locates the shared files the same way the SDK does: the
    /// `AWS_CONFIG_FILE` and `AWS_SHARED_CREDENTIALS_FILE` overrides first,
    /// then `~/.aws/config` and `~/.aws/credentials`.
    pub(crate) fn from_env() -> Self {
        Self {
            config: shared_file_path("AWS_CONFIG_FILE", "config"),
            credentials: shared_file_path("AWS_SHARED_CREDENTIALS_FILE", "credentials"),
        }
    }
}

fn shared_file_path(override_var: &str, file_name: &str) -> Option<PathBuf> {
    match env::var(override_var) {
        Ok(path) if !path.is_empty() => Some(expand_home(&path)),
        _ => dirs::home_dir().map(|home| home.join(".aws").join(file_name)),
    }
}

fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

/// Every profile name declared in either file.
pub(crate) fn profile_names(files: &ProfileFiles) -> Result<BTreeSet<String>> {
    let mut names = BTreeSet::new();

    if let Some(path) = &files.config {
        // In the config file only `[default]` and `[profile NAME]` declare
        // profiles; `[sso-session ...]` and friends do not.
        names.extend(load_sections(path)?.into_iter().filter_map(|section| {
            if section == "default" {
                return Some(section);
            }
            section
                .strip_prefix("profile ")
                .map(|name| name.trim().to_string())
        }));
    }

    if let Some(path) = &files.credentials {
        names.extend(load_sections(path)?);
    }

    Ok(names)
}

pub(crate) fn ensure_profile_exists(profile_name: &str, files: &ProfileFiles) -> Result<()> {
    if profile_names(files)?.contains(profile_name) {
        Ok(())
    } else {
        Err(ConfigurationError::ProfileNotFound {
            profile_name: profile_name.to_string(),
        }
        .into())
    }
}

fn load_sections(path: &Path) -> Result<Vec<String>> {
    let file = match Ini::load_from_file(path) {
        Ok(file) => file,
        Err(ini::Error::Io(io_error)) if io_error.kind() == ErrorKind::NotFound => {
            return Ok(Vec::new());
        }
        Err(error) => {
            return Err(Error::from(ConfigurationError::InvalidFile {
                path: path.display().to_string(),
                reason: error.to_string(),
            }));
        }
    };

    Ok(file
        .sections()
        .flatten()
        .map(|section| section.trim().to_string())
        .collect())
}
