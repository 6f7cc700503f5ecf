
use std::env;
use std::path::PathBuf;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    #[allow(dead_code)]
    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp dir and point ELOG_CONFIG at `elog.toml` inside it.
/// The file itself is not created.
pub(crate) fn setup_config_file() -> (TempDir, PathBuf, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("elog.toml");
    let guard = EnvGuard::set("ELOG_CONFIG", path.to_str().unwrap());
    (temp, path, guard)
}
