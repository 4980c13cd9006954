//! Card display settings, loaded from a TOML file.
//!
//! The default file lives in the platform-specific config folder:
//! - macOS: ~/Library/Application Support/com.payload-card.Payload-Card/
//! - Windows: %APPDATA%/payload-card/Payload Card/config/
//! - Linux: ~/.config/payloadcard/

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use payload_core::MassFormat;
use serde::{Deserialize, Serialize};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "payload-card";
const APP_NAME: &str = "Payload Card";
const CONFIG_FILENAME: &str = "settings.toml";

/// All user-configurable settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub display: DisplaySettings,
    pub chart: ChartSettings,
}

/// Table and numeral formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub grouping_separator: char,
    pub decimal_separator: char,
    pub max_fraction_digits: usize,
    /// Unit suffix after each total.
    pub unit: String,
    /// Maximum table width in columns.
    pub table_width: u16,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        let format = MassFormat::default();
        Self {
            grouping_separator: format.grouping_separator,
            decimal_separator: format.decimal_separator,
            max_fraction_digits: format.max_fraction_digits,
            unit: format.unit,
            table_width: 100,
        }
    }
}

impl DisplaySettings {
    pub fn mass_format(&self) -> MassFormat {
        MassFormat {
            grouping_separator: self.grouping_separator,
            decimal_separator: self.decimal_separator,
            max_fraction_digits: self.max_fraction_digits,
            unit: self.unit.clone(),
        }
    }
}

/// Chart breakdown rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Width of a 100% share bar, in characters.
    pub bar_width: usize,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self { bar_width: 30 }
    }
}

/// Get the path to the default settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Parse settings text; missing keys take their defaults.
pub fn parse_settings(content: &str) -> Result<Settings> {
    toml::from_str(content).context("parse settings")
}

/// Load settings.
///
/// An explicit path must exist and parse. Without one, the default file is
/// used when present, and any problem with it falls back to defaults.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        let content = fs::read_to_string(path)
            .with_context(|| format!("read settings {}", path.display()))?;
        let settings = parse_settings(&content)
            .with_context(|| format!("load settings {}", path.display()))?;
        tracing::info!("Loaded settings from {:?}", path);
        return Ok(settings);
    }

    let Some(path) = settings_path() else {
        tracing::warn!("Could not determine settings path, using defaults");
        return Ok(Settings::default());
    };

    Ok(match fs::read_to_string(&path) {
        Ok(content) => match parse_settings(&content) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                tracing::warn!("Failed to parse settings file: {:#}, using defaults", e);
                Settings::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No settings file found at {:?}, using defaults", path);
            Settings::default()
        }
        Err(e) => {
            tracing::warn!("Failed to read settings file: {}, using defaults", e);
            Settings::default()
        }
    })
}
