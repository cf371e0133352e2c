//! stratpack CLI
//!
//! Downloads the community stratagem icon archive, rasterizes every icon at
//! the requested size, and writes the `stratagems.json` manifest consumed by
//! companion apps.

use std::path::PathBuf;

use clap::Parser;

use stratpack_core::{DEFAULT_ICON_SIZE, MAX_ICON_SIZE, MIN_ICON_SIZE};

mod error;
mod generate;

use error::CliError;

/// Default source for the icon archive.
const REPO_ZIP_URL: &str =
    "https://github.com/nvigneux/Helldivers-2-Stratagems-icons-svg/archive/refs/heads/master.zip";

#[derive(Parser)]
#[command(name = "stratpack")]
#[command(about = "Generate rasterized stratagem icons and a stratagems.json manifest", long_about = None)]
struct Cli {
    /// Icon size in pixels
    #[arg(short, long, default_value_t = DEFAULT_ICON_SIZE, value_parser = parse_icon_size)]
    size: u32,

    /// Output directory (fully regenerated on every run)
    #[arg(short, long, default_value = "output")]
    out: PathBuf,

    /// Input-sequence table (JSON mapping stratagem name to direction tokens)
    #[arg(long, default_value = "sequences.json")]
    sequences: PathBuf,

    /// Icon archive URL
    #[arg(long, default_value = REPO_ZIP_URL)]
    url: String,

    /// Keep the extraction directory for inspection
    #[arg(long)]
    keep_temp: bool,

    /// Only show warnings and errors (suppress normal output)
    #[arg(short, long)]
    quiet: bool,

    /// Enable verbose/debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_icon_size(value: &str) -> Result<u32, String> {
    let size: u32 = value
        .parse()
        .map_err(|_| format!("invalid size: {value}"))?;
    if (MIN_ICON_SIZE..=MAX_ICON_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(format!(
            "size must be between {MIN_ICON_SIZE} and {MAX_ICON_SIZE}"
        ))
    }
}

fn init_logger(quiet: bool, verbose: bool) {
    let default_level = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.quiet, cli.verbose);

    if let Err(e) = generate::run_generate(&cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
