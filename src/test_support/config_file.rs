use crate::configuration::config_file_flag;
use crate::test_support::config_options::ClusterDefinitionWithName;
use crate::test_support::sandbox_user_config_builder::new_sandbox_user_config;
use anyhow::{Context, Result};
use log::{debug, error, info};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempPath;

const CONFIG_FILE_PREFIX: &str = "configFile-";
const CONFIG_FILE_SUFFIX: &str = ".yaml";

/// Generated config file published through the config file flag.
///
/// Dropping the guard restores the previous flag value and deletes the file.
#[derive(Debug)]
#[must_use = "the config file is removed when the guard is dropped"]
pub struct ConfigFileGuard {
    path: PathBuf,
    content: String,
    previous_flag: String,
    temp_path: Option<TempPath>,
}

impl ConfigFileGuard {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialized YAML as written to disk.
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Drop for ConfigFileGuard {
    fn drop(&mut self) {
        config_file_flag::set(std::mem::take(&mut self.previous_flag));

        let Some(temp_path) = self.temp_path.take() else {
            return;
        };
        match temp_path.close() {
            Ok(()) => debug!("removed config file: {}", self.path.display()),
            // a second panic while unwinding would abort the test binary
            Err(err) if std::thread::panicking() => error!(
                "Failed to remove config file {}: {}",
                self.path.display(),
                err
            ),
            Err(err) => panic!(
                "Failed to remove config file {}: {}",
                self.path.display(),
                err
            ),
        }
    }
}

/// Writes the config of the given clusters to a temporary file and makes it the active config file.
///
/// Panics on any I/O or serialization error. Keep the returned guard alive for
/// the whole test; the file is removed when it is dropped.
#[must_use = "the config file is removed when the guard is dropped"]
pub fn set_file_config(cluster_defs: &[ClusterDefinitionWithName]) -> ConfigFileGuard {
    try_set_file_config(cluster_defs)
        .unwrap_or_else(|err| panic!("Failed to set up config file: {err:#}"))
}

pub fn try_set_file_config(cluster_defs: &[ClusterDefinitionWithName]) -> Result<ConfigFileGuard> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(CONFIG_FILE_PREFIX).suffix(CONFIG_FILE_SUFFIX);
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o600));
    }
    let mut tmp_file = builder
        .tempfile_in(std::env::temp_dir())
        .context("Failed to create temporary config file")?;
    let path = tmp_file.path().to_path_buf();

    let sandbox_user_config = new_sandbox_user_config(cluster_defs);
    let out = serde_yaml::to_string(&sandbox_user_config)
        .with_context(|| format!("Failed to serialize config for file: {}", path.display()))?;

    tmp_file
        .write_all(out.as_bytes())
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;
    tmp_file
        .flush()
        .with_context(|| format!("Failed to close config file: {}", path.display()))?;
    let temp_path = tmp_file.into_temp_path();

    let previous_flag = config_file_flag::set(path.to_string_lossy());
    info!("config file: {}: \n{}", path.display(), out);

    Ok(ConfigFileGuard {
        path,
        content: out,
        previous_flag,
        temp_path: Some(temp_path),
    })
}
