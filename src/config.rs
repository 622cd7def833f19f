//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/edlin/config.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Rows moved by page up/down
    pub page_size: usize,
    /// Tab stop width in columns
    pub tab_size: usize,
    /// Text size in points (used by graphical hosts)
    pub text_size: f32,
    pub window_width: u32,
    pub window_height: u32,
    /// How long "not found" notices take to fade in (shown for twice this)
    pub toast_ms: u64,
    /// Initial state of the ignore-case toggle for new tabs
    pub ignore_case: bool,
    /// Last folder a file was opened from; base for relative open paths
    pub open_dir: Option<PathBuf>,
    /// Last folder a file was saved to; base for relative save paths
    pub save_dir: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            tab_size: 4,
            text_size: 20.0,
            window_width: 1000,
            window_height: 800,
            toast_ms: 500,
            ignore_case: false,
            open_dir: None,
            save_dir: None,
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse a config from YAML; missing fields take their defaults
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        crate::config_paths::ensure_config_dir()?;
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Path to open, relative paths taken from the last open folder
    pub fn resolve_open(&self, path: &Path) -> PathBuf {
        resolve_in(self.open_dir.as_deref(), path)
    }

    /// Path to save to, relative paths taken from the last save folder
    pub fn resolve_save(&self, path: &Path) -> PathBuf {
        resolve_in(self.save_dir.as_deref(), path)
    }

    /// Remember the folder of a file that was just opened
    pub fn remember_open(&mut self, file: &Path) {
        if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.open_dir = Some(parent.to_path_buf());
        }
    }

    /// Remember the folder of a file that was just saved
    pub fn remember_save(&mut self, file: &Path) {
        if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.save_dir = Some(parent.to_path_buf());
        }
    }
}

/// Join a relative path onto a remembered folder; with no folder the path is
/// left to the working directory
fn resolve_in(dir: Option<&Path>, path: &Path) -> PathBuf {
    match dir {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}
