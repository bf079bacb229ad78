//! Configuration module for ksctl cluster access
//!
//! This module holds the `ksctl.yaml` data model, the process-wide
//! config file slot set from the command line, and the manager that
//! loads the file and resolves a single cluster out of it.

pub mod cluster_access_definition;
pub mod cluster_config;
pub mod cluster_type;
pub mod config_file_flag;
pub mod configuration_manager;
pub mod sandbox_user_config;

pub use crate::configuration::cluster_access_definition::ClusterAccessDefinition;
pub use crate::configuration::cluster_config::ClusterConfig;
pub use crate::configuration::cluster_type::ClusterType;
pub use crate::configuration::configuration_manager::ConfigurationManager;
pub use crate::configuration::sandbox_user_config::SandboxUserConfig;
