//! Moodlet - showcase for FSC status pills and moodlet widgets.
//!
//! Loads an optional JSON5 configuration, validates the palette, then runs
//! the iced application.

use iced::application;

use moodlet::Showcase;
use moodlet::args::ShowcaseArgs;
use moodlet_core::{AppConfig, init_tracing, load_config};

fn main() -> anyhow::Result<()> {
    let args = <ShowcaseArgs as clap::Parser>::parse();

    let mut config: AppConfig = match args.config_path() {
        Some(path) => load_config(&path)?,
        None => AppConfig::default(),
    };

    if let Some(level) = args.log_level.clone() {
        config.logging.level = level;
    }
    if let Some(layout) = args.layout {
        config.display.layout = layout;
    }

    init_tracing(&config.logging)?;

    // An incomplete palette is fatal; there is no fallback style.
    let styles = config.style_table()?;

    tracing::info!(
        layout = %config.display.layout,
        in_progress = %config.display.in_progress_variant,
        "Starting Moodlet"
    );

    application(
        move || Showcase::new(config.clone(), styles.clone()),
        Showcase::update,
        Showcase::view,
    )
    .title(Showcase::title)
    .theme(Showcase::theme)
    .run()
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
