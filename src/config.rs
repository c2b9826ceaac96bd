//! User configuration.
//!
//! Settings are read from a TOML file, either the one given with `--config` or
//! `<config dir>/wardview/config.toml`. A missing default file simply means defaults; a
//! missing explicit file is an error. Nothing is ever written back.
//!
//! ```toml
//! theme = "high-contrast"
//! locale = "en-US"
//! poll_interval_ms = 50
//! compact_width = 100
//! data_file = "/srv/exports/ward-3.json"
//! ```

use crate::error::{Result, WardviewError};
use crate::format::Locale;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Color theme selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeName {
    #[default]
    Default,
    Monochrome,
    HighContrast,
}

impl FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(ThemeName::Default),
            "monochrome" | "mono" => Ok(ThemeName::Monochrome),
            "high-contrast" | "high_contrast" => Ok(ThemeName::HighContrast),
            other => Err(format!(
                "unknown theme '{other}' (expected default, monochrome or high-contrast)"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub theme: ThemeName,
    pub locale: Locale,
    /// Input polling interval in milliseconds
    pub poll_interval_ms: u64,
    /// Terminal width below which rows are rendered as cards
    pub compact_width: u16,
    /// Record file used when none is given on the command line
    pub data_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeName::Default,
            locale: Locale::PtBr,
            poll_interval_ms: 50,
            compact_width: 100,
            data_file: None,
        }
    }
}

impl Config {
    /// `<config dir>/wardview/config.toml`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wardview").join("config.toml"))
    }

    /// Load configuration from `explicit`, or from the default location.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::load_file(&path),
                _ => {
                    log::debug!("no configuration file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            WardviewError::file_error(
                format!("Failed to read configuration {}", path.display()),
                e,
            )
        })?;
        let config = Self::from_toml_str(&contents)
            .map_err(|e| WardviewError::config(format!("{}: {}", path.display(), e)))?;
        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(contents).map_err(|e| WardviewError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.poll_interval_ms == 0 {
            return Err(WardviewError::config("poll_interval_ms must be greater than 0"));
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn parses_every_field() {
        let config = Config::from_toml_str(
            r#"
            theme = "high-contrast"
            locale = "en-US"
            poll_interval_ms = 20
            compact_width = 80
            data_file = "/tmp/ward.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.theme, ThemeName::HighContrast);
        assert_eq!(config.locale, Locale::EnUs);
        assert_eq!(config.poll_interval(), Duration::from_millis(20));
        assert_eq!(config.compact_width, 80);
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/ward.json")));
    }

    #[test]
    fn rejects_zero_poll_interval_and_unknown_keys() {
        assert!(matches!(
            Config::from_toml_str("poll_interval_ms = 0"),
            Err(WardviewError::ConfigError { .. })
        ));
        assert!(Config::from_toml_str("colour = \"red\"").is_err());
        assert!(Config::from_toml_str("locale = \"fr-FR\"").is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = Path::new("/definitely/not/here/config.toml");
        assert!(matches!(
            Config::load(Some(missing)),
            Err(WardviewError::FileError { .. })
        ));
    }

    #[test]
    fn loads_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "theme = \"monochrome\"").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.theme, ThemeName::Monochrome);
        assert_eq!(config.locale, Locale::PtBr);
    }

    #[test]
    fn theme_names_parse() {
        assert_eq!("High-Contrast".parse::<ThemeName>(), Ok(ThemeName::HighContrast));
        assert_eq!("mono".parse::<ThemeName>(), Ok(ThemeName::Monochrome));
        assert!("solarized".parse::<ThemeName>().is_err());
    }
}
