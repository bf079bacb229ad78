//! Process-wide path of the config file to use.
//!
//! Set once from `--config` by the binary. Test fixtures publish their
//! generated file here and restore the previous value when they are done.
//! An empty value means the default `~/.ksctl.yaml`.

use std::sync::{PoisonError, RwLock};

static CONFIG_FILE_FLAG: RwLock<String> = RwLock::new(String::new());

pub fn get() -> String {
    CONFIG_FILE_FLAG
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Stores `value` and returns what was there before.
pub fn set(value: impl Into<String>) -> String {
    let mut flag = CONFIG_FILE_FLAG
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    std::mem::replace(&mut *flag, value.into())
}

pub fn reset() {
    set(String::new());
}

pub fn is_set() -> bool {
    !get().is_empty()
}
