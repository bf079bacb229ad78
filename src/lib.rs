//! ksctl: command line access to host and member clusters.
//!
//! `configuration` holds the `ksctl.yaml` model and loader used by the tool,
//! `test_support` generates such files for tests.

pub mod clap_parser;
pub mod configuration;
pub mod test_support;
