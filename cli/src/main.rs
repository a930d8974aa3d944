//! CLI entrypoint for solver-sweep
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::sync::Arc;
use sweep_application::{RunSweepInput, RunSweepUseCase};
use sweep_infrastructure::{ConfigLoader, FsInputProbe, ProcessSolverLauncher, harness_root};
use sweep_presentation::{Cli, ConsoleProgress};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries the progress lines and the
    // solver's own output.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting solver-sweep");

    // === Configuration ===
    let root = harness_root();
    let file_config =
        ConfigLoader::load(&root).context("Failed to load sweep configuration")?;

    let layout = file_config
        .layout(&root, &cli.exec_folder)
        .context("Invalid solver location")?;
    info!(
        "Execution root: {}, solver: {}",
        root.display(),
        layout.executable_path().display()
    );

    // === Dependency Injection ===
    let use_case = RunSweepUseCase::new(Arc::new(ProcessSolverLauncher::new()))
        .with_input_probe(Arc::new(FsInputProbe));
    let progress = ConsoleProgress::new().with_color(std::io::stdout().is_terminal());

    let input = RunSweepInput::new(file_config.to_sweep_config(), layout);
    let output = use_case
        .execute_with_progress(input, &progress)
        .context("Sweep aborted")?;

    info!("Completed {} runs", output.invocations);

    Ok(())
}
