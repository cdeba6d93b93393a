//! Global settings of the viewer.
//!
//! Defaults are compiled in and may be overridden by an optional JSON file in
//! the data directory. The file is only ever read.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{LazyLock, RwLock};

use super::constant::{ChartType, Period};
use super::error::SettingsError;
use super::utility::get_file_path;

/// Setting filename
const SETTING_FILENAME: &str = "viewer_setting.json";

/// Default settings
fn default_settings() -> HashMap<String, SettingValue> {
    let mut settings = HashMap::new();

    // Font settings
    settings.insert("font.size".to_string(), SettingValue::Int(12));

    // Window settings
    settings.insert("window.width".to_string(), SettingValue::Int(800));
    settings.insert("window.height".to_string(), SettingValue::Int(600));

    // Log settings
    settings.insert("log.level".to_string(), SettingValue::Int(20)); // INFO level
    settings.insert("log.console".to_string(), SettingValue::Bool(true));
    settings.insert("log.file".to_string(), SettingValue::Bool(false));

    // Datafeed settings
    settings.insert(
        "datafeed.host".to_string(),
        SettingValue::String("https://query1.finance.yahoo.com".to_string()),
    );
    settings.insert("datafeed.timeout".to_string(), SettingValue::Int(30));
    settings.insert(
        "datafeed.user_agent".to_string(),
        SettingValue::String(
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36"
                .to_string(),
        ),
    );

    // Form defaults
    settings.insert("default.period".to_string(), SettingValue::String("1d".to_string()));
    settings.insert("default.chart_type".to_string(), SettingValue::String("Line".to_string()));

    settings
}

/// Setting value types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl SettingValue {
    /// Get as string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            SettingValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as f64
    pub fn as_float(&self) -> Option<f64> {
        match self {
            SettingValue::Float(f) => Some(*f),
            SettingValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Settings container
pub struct Settings {
    settings: RwLock<HashMap<String, SettingValue>>,
    /// Why the settings file was ignored, kept until a logger can report it
    load_error: Option<String>,
}

impl Settings {
    /// Create Settings from defaults overlaid with the settings file, if any
    pub fn new() -> Self {
        Self::load(&get_file_path(SETTING_FILENAME))
    }

    /// Create Settings from defaults overlaid with `path` when it exists.
    ///
    /// A file that cannot be read or parsed leaves the defaults in place and
    /// is recorded in [`Settings::load_error`].
    pub fn load(path: &Path) -> Self {
        let mut settings = Self::with_defaults();
        if path.exists() {
            match load_settings_from_file(path) {
                Ok(file_settings) => settings.update(file_settings),
                Err(e) => settings.load_error = Some(format!("{}: {}", path.display(), e)),
            }
        }
        settings
    }

    /// Create Settings holding only the compiled-in defaults
    pub fn with_defaults() -> Self {
        Self {
            settings: RwLock::new(default_settings()),
            load_error: None,
        }
    }

    /// Reason the settings file was ignored, if it was
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Create Settings from defaults overlaid with a specific file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let settings = Self::with_defaults();
        settings.update(load_settings_from_file(path)?);
        Ok(settings)
    }

    /// Get a setting value
    pub fn get(&self, key: &str) -> Option<SettingValue> {
        self.settings.read().ok()?.get(key).cloned()
    }

    /// Get a string setting
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(|v| v.as_str().map(|s| s.to_string()))
    }

    /// Get an integer setting
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(|v| v.as_int())
    }

    /// Get a float setting
    pub fn get_float(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(|v| v.as_float())
    }

    /// Get a bool setting
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|v| v.as_bool())
    }

    /// Set a setting value
    pub fn set(&self, key: impl Into<String>, value: SettingValue) {
        if let Ok(mut settings) = self.settings.write() {
            settings.insert(key.into(), value);
        }
    }

    /// Update settings from a map
    pub fn update(&self, new_settings: HashMap<String, SettingValue>) {
        if let Ok(mut settings) = self.settings.write() {
            settings.extend(new_settings);
        }
    }

    /// Period preselected in the form; falls back to `1d` on a bad token
    pub fn default_period(&self) -> Period {
        self.get_string("default.period")
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Chart type preselected in the form; falls back to `Line` on a bad name
    pub fn default_chart_type(&self) -> ChartType {
        self.get_string("default.chart_type")
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

/// Load settings from a JSON file
fn load_settings_from_file(path: &Path) -> Result<HashMap<String, SettingValue>, SettingsError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Global settings instance
pub static SETTINGS: LazyLock<Settings> = LazyLock::new(Settings::new);

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_setting_value_types() {
        let s = SettingValue::String("test".to_string());
        assert_eq!(s.as_str(), Some("test"));

        let i = SettingValue::Int(42);
        assert_eq!(i.as_int(), Some(42));
        assert_eq!(i.as_float(), Some(42.0));

        let b = SettingValue::Bool(true);
        assert_eq!(b.as_bool(), Some(true));
        assert_eq!(b.as_str(), None);
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::with_defaults();
        assert_eq!(settings.get_int("font.size"), Some(12));
        assert_eq!(settings.get_int("datafeed.timeout"), Some(30));
        assert_eq!(settings.default_period(), Period::Day1);
        assert_eq!(settings.default_chart_type(), ChartType::Line);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"default.period": "1y", "default.chart_type": "Candlestick", "log.file": true}}"#
        )
        .unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.default_period(), Period::Year1);
        assert_eq!(settings.default_chart_type(), ChartType::Candlestick);
        assert_eq!(settings.get_bool("log.file"), Some(true));
        assert_eq!(settings.get_int("window.width"), Some(800));
    }

    #[test]
    fn test_bad_tokens_fall_back() {
        let settings = Settings::with_defaults();
        settings.set("default.period", SettingValue::String("3w".to_string()));
        settings.set("default.chart_type", SettingValue::Int(7));
        assert_eq!(settings.default_period(), Period::Day1);
        assert_eq!(settings.default_chart_type(), ChartType::Line);
    }

    #[test]
    fn test_invalid_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(Settings::from_file(file.path()), Err(SettingsError::Json(_))));
    }

    #[test]
    fn test_load_keeps_error_for_bad_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"font.size\": ").unwrap();

        let settings = Settings::load(file.path());
        let error = settings.load_error().unwrap();
        assert!(error.contains(&file.path().display().to_string()));
        assert!(error.contains("settings json error"));
        assert_eq!(settings.get_int("font.size"), Some(12));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("viewer_setting.json"));
        assert!(settings.load_error().is_none());
        assert_eq!(settings.default_period(), Period::Day1);
    }
}
