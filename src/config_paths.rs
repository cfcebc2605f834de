//! Centralized configuration paths for syntax-server
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/syntax-server/`
//! - Windows: `%APPDATA%\syntax-server\`

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "syntax-server";
const CONFIG_FILE: &str = "config.yaml";
const LOGS_DIR: &str = "logs";

/// Base config directory for syntax-server
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/syntax-server`
///   - Else: `~/.config/syntax-server`
///
/// Windows:
///   - `%APPDATA%\syntax-server`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/syntax-server/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// `~/.config/syntax-server/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LOGS_DIR))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Ensure the base config dir exists, returning it
pub fn ensure_config_dir() -> Result<PathBuf, String> {
    let dir = config_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&dir)?;
    Ok(dir)
}

/// Ensure the logs dir exists under the config dir, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = ensure_config_dir()?.join(LOGS_DIR);
    ensure_dir(&logs)?;
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(target_os = "windows"))]
    fn test_ensure_logs_dir_creates_config_dir_first() {
        let root = tempfile::tempdir().unwrap();
        env::set_var("XDG_CONFIG_HOME", root.path());

        let logs = ensure_logs_dir().unwrap();
        assert_eq!(logs, root.path().join(APP_DIR).join(LOGS_DIR));
        assert!(root.path().join(APP_DIR).is_dir());
        assert!(logs.is_dir());
        assert_eq!(config_file(), Some(root.path().join(APP_DIR).join(CONFIG_FILE)));

        env::remove_var("XDG_CONFIG_HOME");
    }
}
