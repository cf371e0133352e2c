//! The generate run: fetch, extract, rasterize, assemble, report.

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use stratpack_core::{
    GenerateOptions, GenerateProgress, GenerateReport, NameOrdering, ResolverTables,
    load_sequences, pipeline,
};
use stratpack_render::RsvgConvert;

use crate::{Cli, CliError};

pub(crate) fn run_generate(cli: &Cli) -> Result<(), CliError> {
    // Converter availability is fatal, so check before any network traffic.
    let rasterizer = RsvgConvert::detect()?;

    let temp = tempfile::tempdir()?;
    let archive = stratpack_fetch::download(&cli.url)?;
    stratpack_fetch::extract(&archive, temp.path())?;
    let svg_root = stratpack_fetch::find_archive_root(temp.path())?;
    log::info!("Archive root: {}", svg_root.display());

    let tables = ResolverTables::builtin();
    let sequences = load_sequences(&cli.sequences);
    log::info!(
        "Loaded {} sequences from {}",
        sequences.len(),
        cli.sequences.display()
    );

    // The output directory is regenerated from scratch, never merged.
    if cli.out.exists() {
        std::fs::remove_dir_all(&cli.out)?;
    }
    let icons_dir = cli.out.join("icons");
    let manifest_path = cli.out.join("stratagems.json");

    // Progress spinner (hidden in quiet mode)
    let pb = if cli.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("  {spinner:.cyan} {msg}")
                .unwrap()
                .tick_chars("/-\\|"),
        );
        pb
    };

    let progress_callback = |progress: GenerateProgress| match progress {
        GenerateProgress::ScanningGroup { name, asset_count } => {
            pb.set_message(format!("[{name}] {asset_count} SVGs"));
            pb.tick();
        }
        GenerateProgress::RenderingAsset { name } => {
            pb.set_message(format!("Converting {name}"));
            pb.tick();
        }
        GenerateProgress::Done => {
            pb.finish_and_clear();
        }
    };

    let options = GenerateOptions {
        icon_size: cli.size,
        ordering: NameOrdering::Ordinal,
    };
    let report = pipeline::generate(
        &svg_root,
        &icons_dir,
        &manifest_path,
        &tables,
        &sequences,
        &rasterizer,
        &options,
        &progress_callback,
    )?;

    if cli.keep_temp {
        let kept = temp.keep();
        log::info!("Keeping extraction directory: {}", kept.display());
    }

    print_summary(cli, &report);
    Ok(())
}

fn print_summary(cli: &Cli, report: &GenerateReport) {
    if cli.quiet {
        return;
    }

    println!();
    println!(
        "{} {} stratagem entries from {} folders",
        "Generated".if_supports_color(Stdout, |t| t.bold()),
        report.entries_written,
        report.groups_scanned,
    );
    println!("Output: {}", cli.out.display());
    println!("  - icons/     ({} PNGs @ {}px)", report.icons_rendered, cli.size);
    println!("  - stratagems.json");

    if !report.render_failures.is_empty() {
        println!();
        println!(
            "{} {} asset(s) failed to convert:",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            report.render_failures.len(),
        );
        for asset in &report.render_failures {
            println!("  - {asset}");
        }
    }

    if !report.unresolved_aliases.is_empty() {
        println!();
        println!(
            "{} {} shared-icon alias(es) could not be resolved:",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            report.unresolved_aliases.len(),
        );
        for alias in &report.unresolved_aliases {
            println!("  - {alias}");
        }
    }

    if !report.missing_sequences.is_empty() {
        println!();
        println!(
            "{} {} stratagem(s) missing input sequences:",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            report.missing_sequences.len(),
        );
        for name in &report.missing_sequences {
            println!("  - {name}");
        }
    }
}
