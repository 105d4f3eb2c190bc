use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Tunables for the synchronization core.
///
/// Loaded best-effort from the platform config directory; any missing or
/// unparseable file silently falls back to defaults so the server can always
/// start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Global cap on retained activity entries (oldest evicted first).
    #[serde(default = "default_activity_capacity")]
    pub activity_capacity: usize,

    /// Buffer size of each board's broadcast channel. Slow subscribers that
    /// fall more than this many events behind lose the overflow.
    #[serde(default = "default_event_buffer")]
    pub event_buffer: usize,

    /// Page size used when a caller does not supply one.
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
}

fn default_activity_capacity() -> usize {
    100
}

fn default_event_buffer() -> usize {
    32
}

fn default_page_size() -> usize {
    10
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            activity_capacity: default_activity_capacity(),
            event_buffer: default_event_buffer(),
            default_page_size: default_page_size(),
        }
    }
}

impl SyncConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/syncboard/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("syncboard/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("syncboard\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if let Some(config) = Self::load_from(&config_path) {
                return config;
            }
        }
        Self::default()
    }

    fn load_from(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        toml::from_str(&content).ok()
    }
}
