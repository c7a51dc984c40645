//! Where polysketch keeps its two files on disk: `config.json` and the debug
//! log. Running from a cargo checkout keeps both next to the working
//! directory; an installed build uses the per-user directories from `dirs`.

use std::path::PathBuf;

const APP_DIR: &str = "polysketch";

/// Running from a checkout: cargo sets `CARGO`, and debug builds count too
pub fn is_dev_mode() -> bool {
    std::env::var("CARGO").is_ok() || cfg!(debug_assertions)
}

/// Directory holding `config.json`; `None` only when the OS reports no config dir
pub fn config_dir() -> Option<PathBuf> {
    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }
    dirs::config_dir().map(|p| p.join(APP_DIR))
}

/// The settings file read at startup and written on `SaveConfigRequest`
pub fn config_file() -> PathBuf {
    config_dir().unwrap_or_default().join("config.json")
}

/// Directory for `polysketch.log`. Logs are state rather than settings, so an
/// installed build puts them under the local data dir.
pub fn logs_dir() -> PathBuf {
    if is_dev_mode() {
        return PathBuf::from("logs");
    }
    dirs::data_local_dir()
        .map(|p| p.join(APP_DIR).join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

pub fn ensure_config_dir() -> std::io::Result<()> {
    match config_dir() {
        Some(dir) if !is_dev_mode() => std::fs::create_dir_all(dir),
        _ => Ok(()),
    }
}
