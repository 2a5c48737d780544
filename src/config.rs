//! Configuration file support
//!
//! Loads settings from ~/.swarnam.toml (or %USERPROFILE%\.swarnam.toml on Windows)
//!
//! Example:
//! ```text
//! # swarnam configuration
//! color = true
//! dark-mode = false
//! badges = true
//! tab-width = 4
//!
//! [colors]
//! tag = "#e34c26"
//! comment = "bright-black"
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use toml::{Table, Value};
use tracing::warn;

use crate::error::Result;
use crate::syntax::{Color, Style, TokenType};

/// Configuration settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Whether to emit terminal colours
    pub color: bool,
    /// Whether the preview uses light text on a dark background
    pub dark_mode: bool,
    /// Whether panes get a segment badge header
    pub badges: bool,
    /// Tab width for pane display
    pub tab_width: usize,
    /// Foreground colour overrides per token class
    pub colors: HashMap<TokenType, Color>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            dark_mode: false,
            badges: true,
            tab_width: 4,
            colors: HashMap::new(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".swarnam.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".swarnam.toml"))
        }
    }

    /// Load configuration from the default file, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        let Ok(contents) = fs::read_to_string(&path) else {
            return Config::default();
        };

        match Self::from_toml(&contents) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring configuration file");
                Config::default()
            }
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let table: Table = contents.parse()?;
        let mut config = Config::default();
        config.apply(&table);
        Ok(config)
    }

    /// Apply settings from a parsed table; unknown keys and bad values are ignored
    fn apply(&mut self, settings: &Table) {
        if let Some(value) = settings.get("color").and_then(Value::as_bool) {
            self.color = value;
        }

        if let Some(value) = settings.get("dark-mode").and_then(Value::as_bool) {
            self.dark_mode = value;
        }

        if let Some(value) = settings.get("badges").and_then(Value::as_bool) {
            self.badges = value;
        }

        if let Some(value) = settings.get("tab-width").and_then(Value::as_integer) {
            self.tab_width = value.clamp(1, 16) as usize; // Between 1 and 16
        }

        if let Some(colors) = settings.get("colors").and_then(Value::as_table) {
            for (name, value) in colors {
                let token_type = TokenType::from_name(name);
                let color = value.as_str().and_then(Color::from_name);
                match (token_type, color) {
                    (Some(token_type), Some(color)) => {
                        self.colors.insert(token_type, color);
                    }
                    _ => warn!(class = %name, "ignoring colour override"),
                }
            }
        }
    }

    /// Style for a token class, with any configured colour override
    pub fn style_for(&self, token_type: TokenType) -> Style {
        let style = token_type.default_style();
        match self.colors.get(&token_type) {
            Some(&color) => style.with_fg(color),
            None => style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let contents = r##"
# Comment
color = false
dark-mode = true
badges = false
tab-width = 2

[colors]
tag = "#e34c26"
string = "yellow"
        "##;

        let config = Config::from_toml(contents).unwrap();
        assert!(!config.color);
        assert!(config.dark_mode);
        assert!(!config.badges);
        assert_eq!(config.tab_width, 2);
        assert_eq!(config.colors.get(&TokenType::Tag), Some(&Color::Rgb(0xe3, 0x4c, 0x26)));
        assert_eq!(config.style_for(TokenType::String).fg, Color::Yellow);
    }

    #[test]
    fn test_bad_values_ignored() {
        let contents = r#"
color = "maybe"
tab-width = 99
unknown = 1

[colors]
tag = "chartreuse"
nonsense = "red"
        "#;

        let config = Config::from_toml(contents).unwrap();
        assert!(config.color);
        assert_eq!(config.tab_width, 16);
        assert!(config.colors.is_empty());
    }

    #[test]
    fn test_malformed_file() {
        assert!(Config::from_toml("color = ").is_err());
    }

    #[test]
    fn test_style_defaults() {
        let config = Config::default();
        assert_eq!(config.style_for(TokenType::Comment), TokenType::Comment.default_style());
    }
}
