// Shrthnd Settings Module
// Startup configuration: initial layout, profile store path, timeouts

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::engine::DEFAULT_SUPPRESS_TIMEOUT;

/// Startup settings for shrthnd.
///
/// Loaded from a TOML file (default: ~/.config/shrthnd/settings.toml).
/// All fields have working defaults; a missing file is not an error.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Initial active layout name, when explicitly configured.
    layout: Option<String>,

    /// Override for the profile store location.
    profiles_path: Option<PathBuf>,

    /// Suppression window fallback timeout in milliseconds.
    suppress_timeout_ms: u64,

    /// Path the settings were loaded from (for reload).
    source_path: Option<PathBuf>,
}

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),
}

/// TOML representation for deserializing settings
#[derive(Debug, Clone, serde::Deserialize, Default)]
struct SettingsToml {
    #[serde(default)]
    layout: Option<LayoutSettings>,

    #[serde(default)]
    profiles: Option<ProfileSettings>,

    #[serde(default)]
    expansion: Option<ExpansionSettings>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
struct LayoutSettings {
    #[serde(default)]
    active: Option<String>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
struct ProfileSettings {
    #[serde(default)]
    path: Option<PathBuf>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
struct ExpansionSettings {
    #[serde(default)]
    suppress_timeout_ms: Option<u64>,
}

impl Settings {
    /// Settings with built-in defaults.
    pub fn new() -> Self {
        Self {
            layout: None,
            profiles_path: None,
            suppress_timeout_ms: DEFAULT_SUPPRESS_TIMEOUT.as_millis() as u64,
            source_path: None,
        }
    }

    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(&path)?;
        let mut settings = Self::from_toml(&content)?;
        settings.source_path = Some(path.as_ref().to_path_buf());
        Ok(settings)
    }

    /// Load settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let raw: SettingsToml =
            toml::from_str(content).map_err(|e| SettingsError::TomlParse(e.to_string()))?;

        let mut settings = Self::new();

        if let Some(layout) = raw.layout {
            settings.layout = layout.active;
        }

        if let Some(profiles) = raw.profiles {
            settings.profiles_path = profiles.path;
        }

        if let Some(expansion) = raw.expansion {
            if let Some(ms) = expansion.suppress_timeout_ms {
                settings.suppress_timeout_ms = ms;
            }
        }

        Ok(settings)
    }

    /// Get the default settings path.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("shrthnd").join("settings.toml"))
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load_default() -> Result<Self, SettingsError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::from_file(path);
            }
        }
        Ok(Self::new())
    }

    /// Explicitly configured initial layout name, if any. `None` leaves
    /// the choice to locale detection or the hard-coded default.
    pub fn layout(&self) -> Option<&str> {
        self.layout.as_deref()
    }

    /// Configured profile store path, if overridden.
    pub fn profiles_path(&self) -> Option<&Path> {
        self.profiles_path.as_deref()
    }

    /// Suppression window fallback timeout.
    pub fn suppress_timeout(&self) -> Duration {
        Duration::from_millis(self.suppress_timeout_ms)
    }

    /// Reload settings from the original file.
    pub fn reload(&mut self) -> Result<(), SettingsError> {
        if let Some(ref path) = self.source_path {
            *self = Self::from_file(path)?;
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

/// Create default settings content for a new installation
pub fn default_settings_content() -> &'static str {
    r#"# Shrthnd Settings
# Place this file at: ~/.config/shrthnd/settings.toml

[layout]
# Initial layout the incoming QWERTY-positional events are transcoded to.
# Run `shrthnd layouts` for the accepted names.
active = "qwerty"

[profiles]
# Optional override for the profile store location.
# path = "/home/user/.config/shrthnd/profiles.toml"

[expansion]
# Fallback bound (ms) on the self-injection suppression window.
suppress_timeout_ms = 200
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::new();
        assert_eq!(settings.layout(), None);
        assert_eq!(settings.suppress_timeout(), Duration::from_millis(200));
        assert!(settings.profiles_path().is_none());
    }

    #[test]
    fn test_settings_from_toml() {
        let toml = r#"
[layout]
active = "qwertz"

[profiles]
path = "/tmp/profiles.toml"

[expansion]
suppress_timeout_ms = 500
"#;
        let settings = Settings::from_toml(toml).unwrap();
        assert_eq!(settings.layout(), Some("qwertz"));
        assert_eq!(
            settings.profiles_path(),
            Some(Path::new("/tmp/profiles.toml"))
        );
        assert_eq!(settings.suppress_timeout(), Duration::from_millis(500));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = Settings::from_toml("[layout]\nactive = \"workman\"\n").unwrap();
        assert_eq!(settings.layout(), Some("workman"));
        assert_eq!(settings.suppress_timeout(), Duration::from_millis(200));
    }

    #[test]
    fn test_default_content_parses() {
        let settings = Settings::from_toml(default_settings_content()).unwrap();
        assert_eq!(settings.layout(), Some("qwerty"));
    }
}
