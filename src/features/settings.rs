//! Application settings persistence
//!
//! Handles saving and loading user preferences.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Durations for transient UI effects
    #[serde(default)]
    pub timing: TimingSettings,
}

/// Display and interface settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
    /// Disable ambient scenes and decorative animation
    #[serde(default)]
    pub reduced_motion: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            reduced_motion: false,
        }
    }
}

/// Durations for transient UI effects, in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingSettings {
    /// How long a press ripple stays alive
    #[serde(default = "default_ripple_duration_ms")]
    pub ripple_duration_ms: u64,
    /// Simulated contact-form delivery delay
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
    /// How long a toast stays on screen
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
}

fn default_ripple_duration_ms() -> u64 {
    1000
}

fn default_submit_delay_ms() -> u64 {
    1500
}

fn default_toast_duration_ms() -> u64 {
    3500
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            ripple_duration_ms: default_ripple_duration_ms(),
            submit_delay_ms: default_submit_delay_ms(),
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

impl TimingSettings {
    pub fn ripple_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.ripple_duration_ms)
    }

    pub fn submit_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.submit_delay_ms)
    }

    pub fn toast_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.toast_duration_ms)
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "lucas-edit", "Showreel")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| Self::load_from_file(&path).ok())
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.display.dark_mode);
        assert!(!settings.display.reduced_motion);
        assert_eq!(settings.timing.ripple_duration_ms, 1000);
        assert_eq!(settings.timing.submit_delay_ms, 1500);
        assert_eq!(settings.timing.toast_duration_ms, 3500);
    }

    #[test]
    fn test_roundtrip() {
        let mut settings = Settings::default();
        settings.display.dark_mode = false;
        settings.timing.ripple_duration_ms = 750;

        let json = serde_json::to_string(&settings).unwrap();
        let loaded: Settings = serde_json::from_str(&json).unwrap();
        assert!(!loaded.display.dark_mode);
        assert_eq!(loaded.timing.ripple_duration_ms, 750);
        assert_eq!(loaded.timing.submit_delay_ms, 1500);
    }

    #[test]
    fn test_missing_sections_fall_back() {
        let loaded: Settings = serde_json::from_str("{}").unwrap();
        assert!(loaded.display.dark_mode);
        assert_eq!(loaded.timing.toast_duration_ms, 3500);
    }
}
