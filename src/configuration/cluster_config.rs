use crate::configuration::cluster_access_definition::ClusterAccessDefinition;
use crate::configuration::cluster_type::ClusterType;
use anyhow::{Result, bail};
use std::fmt;

/// A single cluster resolved out of `ksctl.yaml`, ready to be handed to an API client.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct ClusterConfig {
    pub cluster_name: String,
    pub cluster_type: ClusterType,
    pub server_api: String,
    pub server_name: String,
    pub token: String,
}

impl ClusterConfig {
    pub fn from(
        cluster_name: &str,
        definition: &ClusterAccessDefinition,
        config_file_name: &str,
    ) -> Result<Self> {
        if definition.token.is_empty() {
            bail!(
                "ksctl command failed: the token in your ksctl.yaml file ({}) is missing for cluster '{}'",
                config_file_name,
                cluster_name
            );
        }
        if let ClusterType::Unknown(value) = &definition.cluster_type {
            bail!(
                "ksctl command failed: unknown cluster type '{}' for cluster '{}' in {}",
                value,
                cluster_name,
                config_file_name
            );
        }

        Ok(Self {
            cluster_name: cluster_name.to_string(),
            cluster_type: definition.cluster_type.clone(),
            server_api: definition.server_api.clone(),
            server_name: definition.server_name.clone(),
            token: definition.token.clone(),
        })
    }

    pub fn get_server_param(&self) -> String {
        format!("--server={}", self.server_api)
    }
}

impl fmt::Display for ClusterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cluster={} type={} server={} server_name={}",
            self.cluster_name, self.cluster_type, self.server_api, self.server_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(cluster_type: &str, token: &str) -> ClusterAccessDefinition {
        ClusterAccessDefinition {
            server_api: "https://api.member.example.com:6443".to_string(),
            server_name: "member.example.com".to_string(),
            cluster_type: ClusterType::from(cluster_type),
            token: token.to_string(),
        }
    }

    #[test]
    fn resolves_member_cluster_and_server_param() {
        let config = ClusterConfig::from("member1", &definition("member", "abc"), "ksctl.yaml")
            .unwrap();

        assert_eq!(config.cluster_name, "member1");
        assert_eq!(config.cluster_type, ClusterType::Member);
        assert_eq!(config.server_name, "member.example.com");
        assert_eq!(config.token, "abc");
        assert_eq!(
            config.get_server_param(),
            "--server=https://api.member.example.com:6443"
        );
    }

    #[test]
    fn rejects_missing_token() {
        let err = ClusterConfig::from("host", &definition("host", ""), "ksctl.yaml").unwrap_err();

        assert!(err.to_string().contains("the token in your ksctl.yaml file"));
    }

    #[test]
    fn rejects_unknown_cluster_type() {
        let err =
            ClusterConfig::from("edge", &definition("edge", "abc"), "ksctl.yaml").unwrap_err();

        assert!(err.to_string().contains("unknown cluster type 'edge'"));
    }
}
