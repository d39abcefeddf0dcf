use clap::{Parser, Subcommand};
use log::{error, info};
use signal_gtm::core::config::{CliOverrides, load_config, resolve};
use signal_gtm::core::palette::{Preset, Rgb};
use signal_gtm::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "signal", about = "Signal GTM landing page in the terminal")]
struct Args {
    /// Background palette preset
    #[arg(short, long, value_enum)]
    preset: Option<Preset>,

    /// Base color (#RRGGBB) to derive the palette from; wins over --preset
    #[arg(short, long)]
    base_color: Option<Rgb>,

    /// Start route ("/" or "/dashboard")
    #[arg(short, long)]
    route: Option<String>,

    #[arg(long, default_value = "signal.log")]
    log_file: PathBuf,

    #[arg(long, default_value = "debug")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the active eight-color palette as JSON and exit
    Palette,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // File logger only; the terminal belongs to the UI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    info!("Signal starting up");

    let overrides = CliOverrides {
        preset: args.preset,
        base_color: args.base_color,
        route: args.route,
    };
    let config = match load_config().and_then(|file| resolve(&file, &overrides)) {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            eprintln!("signal: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(Command::Palette) = args.command {
        let colors: Vec<String> = config.palette.colors().iter().map(|c| c.to_hex()).collect();
        return match serde_json::to_string(&colors) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("signal: {e}");
                ExitCode::FAILURE
            }
        };
    }

    if let Err(e) = tui::run(config) {
        error!("Terminal error: {}", e);
        eprintln!("signal: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
