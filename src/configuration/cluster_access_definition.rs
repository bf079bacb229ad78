use crate::configuration::cluster_type::ClusterType;
use serde::{Deserialize, Serialize};

/// Access credentials of a single cluster as stored in `ksctl.yaml`.
///
/// `server_api` is the endpoint, `server_name` a label; neither is derived
/// from the other. An empty `token` means unauthenticated.
#[derive(Serialize, Deserialize, Eq, PartialEq, Clone, Debug)]
pub struct ClusterAccessDefinition {
    #[serde(rename = "ServerAPI")]
    pub server_api: String,
    #[serde(rename = "ServerName")]
    pub server_name: String,
    #[serde(rename = "ClusterType")]
    pub cluster_type: ClusterType,
    #[serde(rename = "Token", default)]
    pub token: String,
}
