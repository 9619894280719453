//! CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;

use moodlet_core::LayoutMode;

/// Command-line arguments for the showcase.
#[derive(Parser, Debug, Clone)]
#[command(about = "Moodlet FSC pills and widgets showcase")]
pub struct ShowcaseArgs {
    /// Path to configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Override layout (desktop, mobile).
    #[arg(long)]
    pub layout: Option<LayoutMode>,
}

impl ShowcaseArgs {
    /// Config file to load: the explicit path, or the per-user file when it exists.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(|| {
            dirs::config_dir()
                .map(|dir| dir.join("moodlet").join("config.json5"))
                .filter(|path| path.is_file())
        })
    }
}
