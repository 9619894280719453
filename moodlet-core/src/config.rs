use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Error, Result};
use crate::fsc::DEFAULT_IN_PROGRESS_VARIANT;
use crate::variant::{StyleTable, Variant, VariantStyles};

/// Viewport widths at or below this are laid out for mobile.
pub const MOBILE_MAX_WIDTH: f32 = 600.0;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text format (default).
    #[default]
    Text,
    /// Structured JSON format.
    Json,
}

/// `logging` section of the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output format: "text" or "json".
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Sizing profile for widgets that differ between desktop and mobile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Desktop,
    Mobile,
}

impl LayoutMode {
    /// Pick a layout for a known viewport width.
    pub fn from_viewport_width(width: f32) -> Self {
        if width <= MOBILE_MAX_WIDTH {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutMode::Desktop => "desktop",
            LayoutMode::Mobile => "mobile",
        }
    }
}

impl std::str::FromStr for LayoutMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "desktop" => Ok(LayoutMode::Desktop),
            "mobile" => Ok(LayoutMode::Mobile),
            _ => Err(Error::Config(format!("Unknown layout: {}", s))),
        }
    }
}

impl std::fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Application color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Desktop or mobile sizing.
    #[serde(default)]
    pub layout: LayoutMode,

    /// Page color scheme. Pill colors come from the palette either way.
    #[serde(default)]
    pub theme: ThemeChoice,

    /// Variant shown for indicators in the `current` state.
    #[serde(default = "default_in_progress_variant")]
    pub in_progress_variant: Variant,
}

fn default_in_progress_variant() -> Variant {
    DEFAULT_IN_PROGRESS_VARIANT
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            layout: LayoutMode::default(),
            theme: ThemeChoice::default(),
            in_progress_variant: default_in_progress_variant(),
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Custom palette keyed by variant name. When present it replaces the
    /// built-in palette and must define every variant.
    #[serde(default)]
    pub palette: Option<BTreeMap<String, VariantStyles>>,
}

impl AppConfig {
    /// Style table selected by this configuration.
    ///
    /// Fails on an unknown variant name or a palette missing a variant.
    pub fn style_table(&self) -> Result<StyleTable> {
        let Some(palette) = &self.palette else {
            return Ok(StyleTable::builtin().clone());
        };

        let entries = palette
            .iter()
            .map(|(name, styles)| Ok((name.parse::<Variant>()?, *styles)))
            .collect::<Result<Vec<_>>>()?;

        StyleTable::from_entries(entries)
    }
}

/// Read a JSON5 file into `T`, usually [`AppConfig`].
///
/// Read and parse failures both surface as [`Error::Config`] naming the path.
/// A custom palette is only checked later, by [`AppConfig::style_table`].
///
/// # Example
///
/// ```ignore
/// use moodlet_core::{AppConfig, load_config};
///
/// let config: AppConfig = load_config("moodlet.json5")?;
/// let styles = config.style_table()?;
/// ```
pub fn load_config<T: for<'de> Deserialize<'de>>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;

    json5::from_str(&content).map_err(|e| {
        Error::Config(format!(
            "Failed to parse config file '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Parse an in-memory JSON5 document, as [`load_config`] does for files.
pub fn parse_config<T: for<'de> Deserialize<'de>>(content: &str) -> Result<T> {
    json5::from_str(content).map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config: AppConfig = parse_config("{}").unwrap();

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Text);
        assert_eq!(config.display.layout, LayoutMode::Desktop);
        assert_eq!(config.display.theme, ThemeChoice::Light);
        assert_eq!(config.display.in_progress_variant, Variant::Blue);
        assert!(config.palette.is_none());
        assert_eq!(config.style_table().unwrap(), *StyleTable::builtin());
    }

    #[test]
    fn test_parse_display_config() {
        let json5 = r#"
        {
            logging: {
                level: "debug",
                format: "json",
            },
            display: {
                layout: "mobile",
                theme: "dark",
                in_progress_variant: "red",
            },
        }
        "#;

        let config: AppConfig = parse_config(json5).unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.display.layout, LayoutMode::Mobile);
        assert_eq!(config.display.theme, ThemeChoice::Dark);
        assert_eq!(config.display.in_progress_variant, Variant::Red);
    }

    #[test]
    fn test_partial_palette_is_rejected() {
        let json5 = r##"
        {
            palette: {
                primary: {
                    readonly: {
                        border: "#824DFF", color: "#824DFF", bg: "#E2DEED",
                        hoverBorder: "#824DFF", hoverColor: "#824DFF", hoverBg: "#E2DEED",
                    },
                    button: {
                        border: "#824DFF", color: "#FFFFFF", bg: "#824DFF",
                        hoverBorder: "#6D0EF1", hoverColor: "#FFFFFF", hoverBg: "#6D0EF1",
                    },
                },
            },
        }
        "##;

        let config: AppConfig = parse_config(json5).unwrap();
        assert_eq!(config.palette.as_ref().map(|p| p.len()), Some(1));
        assert!(matches!(
            config.style_table(),
            Err(Error::IncompleteStyleTable {
                variant: Variant::Inactive
            })
        ));
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let json5 = r##"
        {
            palette: {
                primary: {
                    readonly: {
                        border: "purple", foreground: "#824DFF", background: "#E2DEED",
                        hover_border: "#824DFF", hover_foreground: "#824DFF", hover_background: "#E2DEED",
                    },
                    interactive: {
                        border: "#824DFF", foreground: "#FFFFFF", background: "#824DFF",
                        hover_border: "#6D0EF1", hover_foreground: "#FFFFFF", hover_background: "#6D0EF1",
                    },
                },
            },
        }
        "##;

        let err = parse_config::<AppConfig>(json5).unwrap_err();
        assert!(err.to_string().contains("purple"), "unexpected error: {err}");
    }

    #[test]
    fn test_unknown_palette_variant_is_rejected() {
        let json5 = r##"
        {
            palette: {
                purple: {
                    readonly: {
                        border: "#824DFF", color: "#824DFF", bg: "#E2DEED",
                        hoverBorder: "#824DFF", hoverColor: "#824DFF", hoverBg: "#E2DEED",
                    },
                    button: {
                        border: "#824DFF", color: "#FFFFFF", bg: "#824DFF",
                        hoverBorder: "#6D0EF1", hoverColor: "#FFFFFF", hoverBg: "#6D0EF1",
                    },
                },
            },
        }
        "##;

        let config: AppConfig = parse_config(json5).unwrap();
        assert!(matches!(config.style_table(), Err(Error::Config(msg)) if msg.contains("purple")));
    }

    #[test]
    fn test_layout_from_viewport_width() {
        assert_eq!(LayoutMode::from_viewport_width(375.0), LayoutMode::Mobile);
        assert_eq!(LayoutMode::from_viewport_width(600.0), LayoutMode::Mobile);
        assert_eq!(LayoutMode::from_viewport_width(601.0), LayoutMode::Desktop);
    }

    #[test]
    fn test_layout_from_str() {
        assert_eq!("Mobile".parse::<LayoutMode>().unwrap(), LayoutMode::Mobile);
        assert_eq!("desktop".parse::<LayoutMode>().unwrap(), LayoutMode::Desktop);
        assert!("tablet".parse::<LayoutMode>().is_err());
    }
}
