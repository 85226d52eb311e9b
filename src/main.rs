use anyhow::{Context, Result};
use clap::Parser;
use colored::control::set_override as set_color_override;
use golden_test::backend::{ExternalBackend, resolve_program_path};
use golden_test::report::Reporter;
use golden_test::{Layout, run};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser, Debug, Clone)]
#[command(
    version,
    about = "Runs a program against golden-file cases and compares its output with the recorded expectations"
)]
struct Cli {
    /// Executable under test, called as `PROGRAM <case>.zt words-<case>.txt`
    #[arg(value_name = "PROGRAM")]
    program: PathBuf,

    /// Directory holding auto/cases (read) and auto/output (written)
    #[arg(value_name = "TEST_ROOT")]
    test_root: PathBuf,

    /// Log run details at info level
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Never color status lines
    #[arg(long = "no-color")]
    no_color: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = try_main(&cli) {
        error!("{e:#}");
        // Printed unconditionally: RUST_LOG may filter the log line out.
        eprintln!("error: {e:#}");
        std::process::exit(2);
    }
}

fn try_main(cli: &Cli) -> Result<()> {
    let stderr = std::io::stderr();
    let color = !cli.no_color && stderr.is_terminal();
    set_color_override(color);

    let filter = if cli.verbose {
        // With -v, show INFO and above, but allow RUST_LOG to override for debug/trace
        std::env::var("RUST_LOG").unwrap_or_else(|_| "golden_test=info".to_string())
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "golden_test=warn".to_string())
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(color)
        .init();

    let layout = Layout::from_test_root(&cli.test_root);
    info!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    info!("Program: {}", resolve_program_path(&cli.program));
    info!("Cases:   {}", layout.cases_dir.display());
    info!("Output:  {}", layout.output_dir.display());

    let backend = ExternalBackend::new(&cli.program);
    let summary = run(&backend, &layout, Reporter::new(stderr.lock(), color))
        .context("test run aborted")?;

    if !summary.all_passed() {
        std::process::exit(summary.exit_code());
    }
    Ok(())
}
