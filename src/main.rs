use anyhow::Context;
use clap::{ArgAction, Parser};
use sketchpad::script::Script;
use sketchpad::{Config, Sketchpad};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(
    version,
    about = "Freehand sketchpad with undo/redo, stickers and PNG export"
)]
struct Cli {
    /// Event script (TOML) to replay onto a fresh canvas
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Write the exported PNG here instead of the configured export directory
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Export upscaling factor (overrides the config file)
    #[arg(long, short = 's', value_name = "N", value_parser = clap::value_parser!(u32).range(1..=16))]
    scale: Option<u32>,

    /// Configuration file to use instead of ~/.config/sketchpad/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the JSON schema of the configuration file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    print_config_schema: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.print_config_schema {
        println!("{}", Config::json_schema()?);
        return Ok(());
    }

    let Some(script_path) = cli.script else {
        println!("sketchpad: Freehand sketchpad with undo/redo, stickers and PNG export");
        println!();
        println!("Usage:");
        println!("  sketchpad <SCRIPT> [-o FILE]     Replay an event script and export a PNG");
        println!("  sketchpad --print-config-schema  Show the config file schema");
        println!("  sketchpad --help                 Show help");
        println!();
        println!("Event script example:");
        println!("  [[events]]");
        println!("  event = \"marker\"");
        println!();
        println!("  [[events]]");
        println!("  event = \"pointer-down\"");
        println!("  x = 10.0");
        println!("  y = 20.0");
        return Ok(());
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let script = Script::load(&script_path).with_context(|| {
        format!("Failed to load event script {}", script_path.display())
    })?;

    let mut sketchpad = Sketchpad::new(&config).context("Failed to create canvas")?;
    if let Some(scale) = cli.scale {
        sketchpad.export_options_mut().scale = scale;
    }

    let applied = sketchpad
        .replay(script.events)
        .context("Failed to render sketch")?;
    log::info!(
        "Replayed {} event(s); {} item(s) on canvas",
        applied,
        sketchpad.state().history.len()
    );

    let path = match &cli.output {
        Some(output) => sketchpad.export(output),
        None => sketchpad.export_default(),
    }
    .context("Failed to export sketch")?;

    println!("{}", path.display());
    Ok(())
}
