use crate::configuration::cluster_access_definition::ClusterAccessDefinition;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Ordered map keeps the serialized file byte-for-byte stable.
#[derive(Serialize, Deserialize, Eq, PartialEq, Clone, Debug, Default)]
pub struct SandboxUserConfig {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "ClusterAccessDefinitions", default)]
    pub cluster_access_definitions: BTreeMap<String, ClusterAccessDefinition>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::cluster_type::ClusterType;

    #[test]
    fn serializes_with_loader_field_names() {
        let mut config = SandboxUserConfig {
            name: "john".to_string(),
            ..Default::default()
        };
        config.cluster_access_definitions.insert(
            "host".to_string(),
            ClusterAccessDefinition {
                server_api: "https://cool-server.com".to_string(),
                server_name: "cool-server.com".to_string(),
                cluster_type: ClusterType::Host,
                token: "cool-token".to_string(),
            },
        );

        let yaml = serde_yaml::to_string(&config).unwrap();

        assert_eq!(
            yaml,
            "Name: john\n\
             ClusterAccessDefinitions:\n  \
               host:\n    \
                 ServerAPI: https://cool-server.com\n    \
                 ServerName: cool-server.com\n    \
                 ClusterType: host\n    \
                 Token: cool-token\n"
        );
    }

    #[test]
    fn missing_token_deserializes_as_empty() {
        let yaml = "\
Name: john
ClusterAccessDefinitions:
  member1:
    ServerAPI: https://cool-server.com
    ServerName: cool-server.com
    ClusterType: member
";
        let config: SandboxUserConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.cluster_access_definitions["member1"].token, "");
        assert_eq!(
            config.cluster_access_definitions["member1"].cluster_type,
            ClusterType::Member
        );
    }
}
