//! Courtside - desktop seat picker entry point.

use std::path::PathBuf;

use anyhow::Context;
use eframe::egui;
use tracing::info;

use courtside::config;
use courtside::gui::CourtsideApp;

fn print_usage() {
    eprintln!("Usage: courtside [OPTIONS] [SECTION]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [SECTION]                 Starting section: lower, club, or upper");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -q, --quantity <N>        Number of seats to pick (default 2)");
    eprintln!("  --config <FILE>           Load configuration from a specific file");
    eprintln!("  -h, --help                Print help");
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("courtside=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let mut section: Option<String> = None;
    let mut quantity: Option<usize> = None;
    let mut config_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            "-q" | "--quantity" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --quantity requires a number");
                    std::process::exit(1);
                }
                match args[i].parse::<usize>() {
                    Ok(n) if n >= 1 => quantity = Some(n),
                    _ => {
                        eprintln!("Error: --quantity must be a positive integer");
                        std::process::exit(1);
                    }
                }
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a file path");
                    std::process::exit(1);
                }
                config_path = Some(PathBuf::from(&args[i]));
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: unknown option: {arg}");
                print_usage();
                std::process::exit(1);
            }
            _ => {
                if section.is_none() {
                    section = Some(args[i].to_string());
                } else {
                    eprintln!("Error: unexpected argument: {}", args[i]);
                    print_usage();
                    std::process::exit(1);
                }
            }
        }
        i += 1;
    }

    let config =
        config::load(config_path.as_deref()).context("failed to load configuration")?;

    // CLI beats config file beats built-in defaults.
    let section = section
        .or(config.section.clone())
        .unwrap_or_else(|| "lower".to_string());
    let quantity = quantity.or(config.quantity).unwrap_or(2);

    info!(%section, quantity, "courtside starting up");

    let mut options = eframe::NativeOptions::default();
    options.viewport = egui::ViewportBuilder::default().with_inner_size([1100.0, 760.0]);

    eframe::run_native(
        "Courtside",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(CourtsideApp::new(
                &section,
                quantity,
                config.geometry,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to start GUI: {e}"))
}
