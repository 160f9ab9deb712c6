use std::{
    path::PathBuf,
    sync::{Mutex, OnceLock},
};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const CONFIG_HOME_ENV: &str = "PLACEDESK_CONFIG_HOME";
const API_BASE_ENV: &str = "PLACEDESK_API_BASE";

/// Points the app config home at a scratch directory and blanks the API base
/// override for the guard's lifetime. Restores both on drop.
pub struct EnvGuard {
    previous_home: Option<String>,
    previous_api_base: Option<String>,
    _lock: std::sync::MutexGuard<'static, ()>,
}

impl EnvGuard {
    pub fn set_config_home(path: PathBuf) -> Self {
        let lock = ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|err| err.into_inner());
        let previous_home = std::env::var(CONFIG_HOME_ENV).ok();
        let previous_api_base = std::env::var(API_BASE_ENV).ok();
        // SAFETY: tests run under a global lock to prevent concurrent env mutations.
        unsafe {
            std::env::set_var(CONFIG_HOME_ENV, path);
            std::env::remove_var(API_BASE_ENV);
        }
        Self {
            previous_home,
            previous_api_base,
            _lock: lock,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: tests run under a global lock to prevent concurrent env mutations.
        unsafe {
            match self.previous_home.take() {
                Some(value) => std::env::set_var(CONFIG_HOME_ENV, value),
                None => std::env::remove_var(CONFIG_HOME_ENV),
            }
            match self.previous_api_base.take() {
                Some(value) => std::env::set_var(API_BASE_ENV, value),
                None => std::env::remove_var(API_BASE_ENV),
            }
        }
    }
}
