//! Local client settings.
//!
//! Settings say where the client is served from (the origin that publishes
//! `config.json`), how long to wait for the network, and which color theme to use.
//! They come from an optional TOML file and are overridden by command-line flags.
//!
//! ```toml
//! origin = "http://127.0.0.1:5173"
//! request_timeout_secs = 10
//! theme = "monochrome"
//! ```

use crate::error::{LookupError, Result};
use crate::render::ui::ColorTheme;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Origin used when neither the settings file nor the command line provides one.
pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1:5173";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_THEME: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub origin: String,
    pub request_timeout_secs: u64,
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

/// Values given on the command line; `None` keeps the file/default value.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub origin: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub theme: Option<String>,
}

impl Settings {
    /// `<config dir>/siren-lookup/settings.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("siren-lookup").join("settings.toml"))
    }

    /// Parse a settings file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| LookupError::settings(path, e.to_string()))?;
        toml::from_str(&text).map_err(|e| LookupError::settings(path, e.message().to_string()))
    }

    /// Resolve settings for this run.
    ///
    /// An explicit path must exist and parse. Without one, the default location is
    /// read when present and silently skipped otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn apply(mut self, overrides: SettingsOverrides) -> Self {
        if let Some(origin) = overrides.origin {
            self.origin = origin;
        }
        if let Some(secs) = overrides.request_timeout_secs {
            self.request_timeout_secs = secs;
        }
        if let Some(theme) = overrides.theme {
            self.theme = theme;
        }
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Resolve the configured theme name
    pub fn color_theme(&self) -> Result<ColorTheme> {
        ColorTheme::from_name(&self.theme)
            .ok_or_else(|| LookupError::config(format!("unknown theme '{}'", self.theme)))
    }

    /// Shared HTTP client honoring the request timeout
    pub fn http_client(&self) -> Result<reqwest::Client> {
        Ok(reqwest::Client::builder()
            .timeout(self.request_timeout())
            .build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_settings(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_settings("theme = \"monochrome\"\n");
        let settings = Settings::from_file(file.path()).unwrap();

        assert_eq!(settings.theme, "monochrome");
        assert_eq!(settings.origin, DEFAULT_ORIGIN);
        assert_eq!(settings.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let file = write_settings("api_url = \"http://x\"\n");
        let err = Settings::from_file(file.path()).unwrap_err();
        assert!(matches!(err, LookupError::Settings { .. }));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Settings::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_overrides_win() {
        let settings = Settings::default().apply(SettingsOverrides {
            origin: Some("http://front:8080".to_string()),
            request_timeout_secs: Some(3),
            theme: None,
        });

        assert_eq!(settings.origin, "http://front:8080");
        assert_eq!(settings.request_timeout(), Duration::from_secs(3));
        assert_eq!(settings.theme, DEFAULT_THEME);
    }

    #[test]
    fn test_unknown_theme() {
        let settings = Settings {
            theme: "neon".to_string(),
            ..Settings::default()
        };
        assert!(settings.color_theme().is_err());
        assert!(Settings::default().color_theme().is_ok());
    }
}
