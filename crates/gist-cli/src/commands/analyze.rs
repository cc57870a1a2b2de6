use crate::cli::AnalyzeArgs;
use crate::config::PartialGistConfig;
use crate::error::{CliError, Result};
use crate::input;
use crate::utils::progress::CliProgressHandler;
use gistpp::engine::entropy::statistics::SearchSummary;
use gistpp::engine::postprocess::GistResult;
use gistpp::engine::progress::ProgressReporter;
use gistpp::workflows;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

pub fn run(args: AnalyzeArgs, quiet: bool) -> Result<()> {
    let partial_config = PartialGistConfig::from_file(&args.config)?;
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args)?;

    let trajectory =
        input::load_trajectory(&args.input, args.atoms.as_deref(), &config.solvent_species)?;

    let progress_handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!(
        "Starting GIST analysis of {} frame(s)...",
        trajectory.frames.len()
    );
    info!("Invoking the core analysis workflow...");
    let result = workflows::analyze::run(&config, &trajectory.frames, &reporter)?;

    report_diagnostics(&result);

    info!("Writing GIST table to {:?}", &args.output);
    write_table(&result, &args.output)?;
    println!("✓ GIST table written to: {}", args.output.display());

    if let Some(dir) = &args.dx_dir {
        fs::create_dir_all(dir)?;
        info!("Writing DX grids to {:?}", dir);
        result.write_dx_files(dir)?;
        println!("✓ DX grids written to: {}", dir.display());
    }

    Ok(())
}

fn write_table(result: &GistResult, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    result
        .write_table(&mut writer)
        .and_then(|_| writer.flush())
        .map_err(CliError::Io)
}

fn report_diagnostics(result: &GistResult) {
    let summary = &result.diagnostics;
    let occupied = result.voxels.iter().filter(|v| v.population > 0).count();
    println!(
        "  {} of {} voxel(s) occupied, {} nearest-neighbor search(es)",
        occupied,
        result.voxels.len(),
        summary.total
    );
    if let Some(warning) = search_warning(summary) {
        println!("  {}", warning);
    }
}

fn search_warning(summary: &SearchSummary) -> Option<String> {
    if summary.translational_failures == 0 && summary.six_failures == 0 {
        return None;
    }
    Some(format!(
        "Warning: {:.2}% (translational) / {:.2}% (six-dimensional) of nearest-neighbor searches ended beyond one voxel edge and may not be exact",
        summary.translational_failure_percent(),
        summary.six_failure_percent()
    ))
}
