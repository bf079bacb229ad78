use crate::configuration::{ClusterAccessDefinition, ClusterType};

pub const DEFAULT_SERVER_API: &str = "https://cool-server.com";
pub const DEFAULT_SERVER_NAME: &str = "cool-server.com";
pub const DEFAULT_TOKEN: &str = "cool-token";
pub const DEFAULT_HOST_CLUSTER_NAME: &str = "host";
pub const DEFAULT_MEMBER_CLUSTER_NAME: &str = "member1";

/// A cluster access definition together with the name it is stored under.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct ClusterDefinitionWithName {
    pub cluster_name: String,
    pub definition: ClusterAccessDefinition,
}

/// Transformation applied to a cluster definition under construction.
///
/// Options take the definition by value and hand back a new one, so a
/// single option can be reused for any number of definitions.
pub type ConfigOption = Box<dyn Fn(ClusterDefinitionWithName) -> ClusterDefinitionWithName>;

/// Removes the default token.
pub fn no_token() -> ConfigOption {
    Box::new(|mut content| {
        content.definition.token = String::new();
        content
    })
}

/// Server API to use (default is `https://cool-server.com`).
pub fn server_api(server_api: impl Into<String>) -> ConfigOption {
    let server_api = server_api.into();
    Box::new(move |mut content| {
        content.definition.server_api = server_api.clone();
        content
    })
}

/// Name the definition is stored under (default is `host` or `member1`).
pub fn cluster_name(cluster_name: impl Into<String>) -> ConfigOption {
    let cluster_name = cluster_name.into();
    Box::new(move |mut content| {
        content.cluster_name = cluster_name.clone();
        content
    })
}

/// Server name (default is `cool-server.com`).
pub fn server_name(server_name: impl Into<String>) -> ConfigOption {
    let server_name = server_name.into();
    Box::new(move |mut content| {
        content.definition.server_name = server_name.clone();
        content
    })
}

/// Cluster type, `host` or `member`. Other values are written as-is.
pub fn cluster_type(cluster_type: &str) -> ConfigOption {
    let cluster_type = ClusterType::from(cluster_type);
    Box::new(move |mut content| {
        content.definition.cluster_type = cluster_type.clone();
        content
    })
}

pub fn host(options: &[ConfigOption]) -> ClusterDefinitionWithName {
    with_values(default_definition(DEFAULT_HOST_CLUSTER_NAME, ClusterType::Host), options)
}

pub fn member(options: &[ConfigOption]) -> ClusterDefinitionWithName {
    with_values(
        default_definition(DEFAULT_MEMBER_CLUSTER_NAME, ClusterType::Member),
        options,
    )
}

/// Applies the options in order; the last option touching a field wins.
pub fn with_values(
    cluster_def: ClusterDefinitionWithName,
    options: &[ConfigOption],
) -> ClusterDefinitionWithName {
    options
        .iter()
        .fold(cluster_def, |content, modify| modify(content))
}

fn default_definition(cluster_name: &str, cluster_type: ClusterType) -> ClusterDefinitionWithName {
    ClusterDefinitionWithName {
        cluster_name: cluster_name.to_string(),
        definition: ClusterAccessDefinition {
            server_api: DEFAULT_SERVER_API.to_string(),
            server_name: DEFAULT_SERVER_NAME.to_string(),
            cluster_type,
            token: DEFAULT_TOKEN.to_string(),
        },
    }
}
