//! Moodlet Core Library
//!
//! GUI-independent logic behind Moodlet pills:
//!
//! - [`variant`] - Variant palette (`Variant`, `VisualStyle`, `StyleTable`)
//! - [`fsc`] - FSC indicator state machine (`FscState`, `FscIndicator`)
//! - [`group`] - Fuelling / Servicing / Cleaning trio (`FscGroup`, `Category`)
//! - [`config`] - Configuration loading (JSON5 format)
//! - [`error`] - Error types

pub mod config;
pub mod error;
pub mod fsc;
pub mod group;
pub mod variant;

// Re-export commonly used types at the crate root
pub use config::{
    AppConfig, DisplayConfig, LayoutMode, LogFormat, LoggingConfig, MOBILE_MAX_WIDTH,
    ThemeChoice, load_config, parse_config,
};
pub use error::{Error, Result};
pub use fsc::{DEFAULT_IN_PROGRESS_VARIANT, FscIndicator, FscState, IndicatorView, LabelMode};
pub use group::{Category, FscGroup};
pub use variant::{Rgb, StyleTable, Variant, VariantStyles, VisualStyle, resolve};

/// Install the global subscriber for the showcase and its widgets.
///
/// Output is plain text or one JSON object per line depending on
/// `config.format`. `RUST_LOG` takes precedence over `config.level` when set,
/// so `RUST_LOG=moodlet_core::fsc=trace` shows ignored transitions.
///
/// # Example
///
/// ```ignore
/// use moodlet_core::{AppConfig, init_tracing, load_config};
///
/// let mut config: AppConfig = load_config("moodlet.json5")?;
/// config.logging.level = "debug".to_string();
/// init_tracing(&config.logging)?;
/// ```
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format {
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(fmt::layer())
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(fmt::layer().json())
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
    }

    Ok(())
}
