use crate::configuration::SandboxUserConfig;
use crate::test_support::config_options::ClusterDefinitionWithName;

pub const DEFAULT_USER_NAME: &str = "john";

/// Builds the config of the test user out of the given cluster definitions.
///
/// Definitions sharing a cluster name overwrite each other, the last one wins.
pub fn new_sandbox_user_config(cluster_defs: &[ClusterDefinitionWithName]) -> SandboxUserConfig {
    let mut sandbox_user_config = SandboxUserConfig {
        name: DEFAULT_USER_NAME.to_string(),
        ..Default::default()
    };
    for cluster_def in cluster_defs {
        sandbox_user_config
            .cluster_access_definitions
            .insert(cluster_def.cluster_name.clone(), cluster_def.definition.clone());
    }
    sandbox_user_config
}
