use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::font::FontFamily;
use super::style::LineStyleRule;
use crate::app::error::{AppError, Result};

const APP_DIR: &str = "quillpad";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,

    #[serde(default)]
    pub font: FontFamily,

    /// Size the editor draws text at. Exported documents always use 12 pt.
    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// How a line's style is picked when exporting
    #[serde(default)]
    pub line_style_rule: LineStyleRule,

    /// Word offered by the suggestion label and inserted on Tab
    #[serde(default = "default_suggestion")]
    pub suggestion: String,
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::Dark
}

fn default_font_size() -> u32 {
    12
}

fn default_suggestion() -> String {
    "example".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
            font: FontFamily::default(),
            font_size: default_font_size(),
            line_style_rule: LineStyleRule::default(),
            suggestion: default_suggestion(),
        }
    }
}

impl AppSettings {
    /// Load settings from the config directory, falling back to defaults.
    pub fn load() -> Self {
        match Self::get_config_path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                warn!("{}. Using default settings.", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        debug!("Settings saved to {}", path.display());

        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir()
            .ok_or_else(|| AppError::Settings("config directory not found".to_string()))?;
        path.push(APP_DIR);
        path.push(SETTINGS_FILE);
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme_mode, ThemeMode::Dark);
        assert_eq!(settings.font, FontFamily::Arial);
        assert_eq!(settings.font_size, 12);
        assert_eq!(settings.line_style_rule, LineStyleRule::FirstChar);
        assert_eq!(settings.suggestion, "example");
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = AppSettings {
            theme_mode: ThemeMode::Light,
            font: FontFamily::CourierNew,
            line_style_rule: LineStyleRule::AnyChar,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"font": "TimesNewRoman"}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.font, FontFamily::TimesNewRoman);
        assert_eq!(settings.theme_mode, ThemeMode::Dark);
        assert_eq!(settings.suggestion, "example");
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = AppSettings {
            suggestion: "hello".to_string(),
            ..Default::default()
        };
        settings.save_to(&path).unwrap();
        assert_eq!(AppSettings::load_from(&path), settings);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
    }

    #[test]
    fn test_theme_mode_from_dark() {
        assert_eq!(ThemeMode::from_dark(true), ThemeMode::Dark);
        assert!(!ThemeMode::from_dark(false).is_dark());
    }
}
