//! Fixtures generating `ksctl.yaml` files for tests
//!
//! Start from `host` or `member`, tweak fields with config options, then
//! either aggregate the definitions with `new_sandbox_user_config` or
//! write them to a temporary file published through the config file flag
//! with `set_file_config`.
//!
//! ```no_run
//! use ksctl::test_support::{host, member, no_token, server_api, set_file_config};
//!
//! let _config_file = set_file_config(&[
//!     host(&[server_api("https://api.host.example.com:6443")]),
//!     member(&[no_token()]),
//! ]);
//! // the config file flag now points to the generated file
//! ```

pub mod config_file;
pub mod config_options;
pub mod sandbox_user_config_builder;

pub use crate::test_support::config_file::{ConfigFileGuard, set_file_config, try_set_file_config};
pub use crate::test_support::config_options::{
    ClusterDefinitionWithName, ConfigOption, cluster_name, cluster_type, host, member, no_token,
    server_api, server_name, with_values,
};
pub use crate::test_support::sandbox_user_config_builder::{
    DEFAULT_USER_NAME, new_sandbox_user_config,
};
