//! Configuration constants and settings loading for calcline
//!
//! Settings live in an INI file:
//!
//! ```ini
//! [display]
//! max_chars = 23
//!
//! [keyboard]
//! insert_negates = true
//!
//! [aliases]
//! * = ×
//! r = 1/x
//! ```
//!
//! A missing file means defaults. Command line flags override file values.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use ini::Ini;

use crate::calc::commands::{default_aliases, KeyDispatcher};
use crate::calc::models::{CalculatorModel, MAX_CHARS};
use crate::cmd_args::CommandLineArgs;

/// Default settings file path for calcline
pub const DEFAULT_CONFIG_PATH: &str = "~/.calcline/config";

/// Environment variable name for overriding the settings path
pub const CONFIG_PATH_ENV_VAR: &str = "CALCLINE_CONFIG_PATH";

/// Environment variable holding the log filter
pub const LOG_LEVEL_ENV_VAR: &str = "CALCLINE_LOG_LEVEL";

/// Largest accepted `max_chars`
pub const MAX_CHARS_LIMIT: usize = 64;

/// Get the settings file path, checking environment variable first, then falling back to default
pub fn get_config_path() -> String {
    std::env::var_os(CONFIG_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}

/// Calculator settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcSettings {
    /// Characters accepted while typing a number
    pub max_chars: usize,
    /// Whether the Insert key toggles the sign
    pub insert_negates: bool,
    /// Key text to keypad label substitutions
    pub aliases: BTreeMap<String, String>,
}

impl Default for CalcSettings {
    fn default() -> Self {
        Self {
            max_chars: MAX_CHARS,
            insert_negates: true,
            aliases: default_aliases(),
        }
    }
}

impl CalcSettings {
    /// Load settings from an INI file. `~` is expanded; a missing file yields defaults.
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());

        if !path.exists() {
            tracing::debug!("Settings file '{}' not found, using defaults", path.display());
            return Ok(Self::default());
        }

        tracing::debug!("Loading settings from '{}'", path.display());
        let ini = Ini::load_from_file(path)
            .with_context(|| format!("Failed to read settings file '{}'", path.display()))?;
        Self::from_ini(&ini).with_context(|| format!("Invalid settings in '{}'", path.display()))
    }

    /// Parse settings from INI text
    pub fn parse(text: &str) -> Result<Self> {
        let ini = Ini::load_from_str(text).context("Failed to parse settings")?;
        Self::from_ini(&ini)
    }

    fn from_ini(ini: &Ini) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(display) = ini.section(Some("display")) {
            if let Some(value) = display.get("max_chars") {
                settings.max_chars = parse_max_chars(value)?;
            }
        }

        if let Some(keyboard) = ini.section(Some("keyboard")) {
            if let Some(value) = keyboard.get("insert_negates") {
                settings.insert_negates = parse_bool(value)
                    .with_context(|| format!("insert_negates: '{value}' is not a boolean"))?;
            }
        }

        if let Some(aliases) = ini.section(Some("aliases")) {
            for (key, label) in aliases.iter() {
                let label = label.trim();
                if label.is_empty() {
                    settings.aliases.remove(key);
                } else {
                    settings.aliases.insert(key.to_string(), label.to_string());
                }
            }
        }

        Ok(settings)
    }

    /// Apply command line overrides
    pub fn apply_args(&mut self, args: &CommandLineArgs) -> Result<()> {
        if let Some(max_chars) = args.max_chars() {
            self.max_chars = validate_max_chars(max_chars)?;
        }
        if args.no_insert_negate() {
            self.insert_negates = false;
        }
        Ok(())
    }

    /// Keyboard dispatcher configured by these settings
    pub fn dispatcher(&self) -> KeyDispatcher {
        KeyDispatcher::new(self.insert_negates).with_aliases(self.aliases.clone())
    }

    /// Fresh calculator model configured by these settings
    pub fn model(&self) -> CalculatorModel {
        CalculatorModel::with_max_chars(self.max_chars)
    }
}

fn parse_max_chars(value: &str) -> Result<usize> {
    let max_chars = value
        .trim()
        .parse::<usize>()
        .with_context(|| format!("max_chars: '{value}' is not a number"))?;
    validate_max_chars(max_chars)
}

fn validate_max_chars(max_chars: usize) -> Result<usize> {
    if !(1..=MAX_CHARS_LIMIT).contains(&max_chars) {
        bail!("max_chars must be between 1 and {MAX_CHARS_LIMIT}, got {max_chars}");
    }
    Ok(max_chars)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
