use crate::configuration::cluster_config::ClusterConfig;
use crate::configuration::config_file_flag;
use crate::configuration::sandbox_user_config::SandboxUserConfig;
use anyhow::{Context, Result, anyhow};
use log::debug;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

pub const DEFAULT_CONFIG_FILE_NAME: &str = ".ksctl.yaml";

pub struct ConfigurationManager {
    config_file_name: PathBuf,
    sandbox_user_config: Option<SandboxUserConfig>,
}

impl ConfigurationManager {
    pub fn new(config_file_name: impl Into<PathBuf>) -> Self {
        Self {
            config_file_name: config_file_name.into(),
            sandbox_user_config: None,
        }
    }

    /// Manager for the file named by the config file flag, or `~/.ksctl.yaml` when the flag is empty.
    pub fn from_config_file_flag() -> Result<Self> {
        let flag = config_file_flag::get();
        if !flag.is_empty() {
            return Ok(Self::new(flag));
        }
        let home_dir = dirs::home_dir()
            .ok_or_else(|| anyhow!("Failed to locate home directory for {DEFAULT_CONFIG_FILE_NAME}"))?;
        Ok(Self::new(home_dir.join(DEFAULT_CONFIG_FILE_NAME)))
    }

    pub fn config_file_name(&self) -> &Path {
        &self.config_file_name
    }

    pub async fn load_config_from_file(&mut self) -> Result<()> {
        let content = tokio::fs::read_to_string(&self.config_file_name)
            .await
            .with_context(|| {
                format!(
                    "Failed to read config file: {}",
                    self.config_file_name.display()
                )
            })?;

        let sandbox_user_config: SandboxUserConfig = serde_yaml::from_str(&content)
            .with_context(|| {
                format!(
                    "Failed to deserialize config file: {}",
                    self.config_file_name.display()
                )
            })?;
        debug!(
            "Loaded {} cluster definition(s) for '{}' from {}",
            sandbox_user_config.cluster_access_definitions.len(),
            sandbox_user_config.name,
            self.config_file_name.display()
        );
        self.sandbox_user_config = Some(sandbox_user_config);

        Ok(())
    }

    pub async fn save_config_to_file(&self, config_file_name: &Path) -> Result<()> {
        let sandbox_user_config = self.get_sandbox_user_config()?;
        let serialized = serde_yaml::to_string(sandbox_user_config).with_context(|| {
            format!(
                "Failed to serialize config for file: {}",
                config_file_name.display()
            )
        })?;

        let mut options = tokio::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);

        let mut output = options.open(config_file_name).await.with_context(|| {
            format!(
                "Failed to create output config file: {}",
                config_file_name.display()
            )
        })?;
        // mode() only applies on creation, an existing file keeps its old bits
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            output
                .set_permissions(std::fs::Permissions::from_mode(0o600))
                .await
                .with_context(|| {
                    format!(
                        "Failed to restrict permissions of config file: {}",
                        config_file_name.display()
                    )
                })?;
        }

        output
            .write_all(serialized.as_bytes())
            .await
            .with_context(|| {
                format!(
                    "Failed to write serialized config to file: {}",
                    config_file_name.display()
                )
            })?;
        output.flush().await.with_context(|| {
            format!("Failed to flush config file: {}", config_file_name.display())
        })?;

        Ok(())
    }

    pub fn get_sandbox_user_config(&self) -> Result<&SandboxUserConfig> {
        self.sandbox_user_config
            .as_ref()
            .ok_or_else(|| anyhow!("No configuration loaded"))
    }

    pub fn get_cluster_config(&self, cluster_name: &str) -> Result<ClusterConfig> {
        let sandbox_user_config = self.get_sandbox_user_config()?;
        let config_file_name = self.config_file_name.display().to_string();
        let definition = sandbox_user_config
            .cluster_access_definitions
            .get(cluster_name)
            .ok_or_else(|| {
                anyhow!(
                    "ksctl command failed: the provided cluster-name '{}' is not present in your ksctl.yaml file ({}). The available cluster names are: {:?}",
                    cluster_name,
                    config_file_name,
                    sandbox_user_config
                        .cluster_access_definitions
                        .keys()
                        .collect::<Vec<_>>()
                )
            })?;
        ClusterConfig::from(cluster_name, definition, &config_file_name)
    }
}
