//! Forensis - a terminal reader for forensic chemistry reference material
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::collections::BTreeMap;

use clap::Parser;
use forensis_app::config;
use forensis_core::{SubstanceCatalog, SubstanceRecord};

/// Forensis - a terminal reader for forensic chemistry reference material
#[derive(Parser, Debug)]
#[command(name = "forensis")]
#[command(about = "A terminal reader for forensic chemistry reference material", long_about = None)]
struct Args {
    /// Section to open at startup, given as a location fragment
    /// ("#cocaine" or plain "cocaine")
    #[arg(value_name = "SECTION")]
    section: Option<String>,

    /// Print the substance catalog as JSON and exit (no TUI)
    #[arg(long)]
    headless: bool,

    /// Disable the decorative molecule background
    #[arg(long)]
    no_background: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.headless {
        return run_headless();
    }

    forensis_core::logging::init()?;

    let mut settings = config::load_settings();
    if args.no_background {
        settings.ui.background = false;
    }
    tracing::info!(?settings, section = ?args.section, "starting");

    forensis_tui::run(settings, args.section.as_deref())?;
    Ok(())
}

/// Dump the substance catalog as JSON for scripting use.
fn run_headless() -> color_eyre::Result<()> {
    let catalog = SubstanceCatalog::builtin();
    let records: BTreeMap<&str, &SubstanceRecord> = catalog.iter().collect();
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
