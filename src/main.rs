use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

use router_patch_check::utils::{format_duration, setup_logging};
use router_patch_check::{Config, RouterPatchChecker};

#[derive(Parser)]
#[command(name = "router-patch-check")]
#[command(about = "Lists the routers in a CSV inventory that can be patched")]
#[command(version)]
struct Args {
    #[arg(help = "CSV file: hostname,IP address,patched,OS version[,notes]")]
    input: PathBuf,

    #[arg(short, long, help = "JSON configuration file")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Verbose output")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let start_time = Instant::now();

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let verbosity = if args.verbose { "verbose" } else { config.logging.verbosity.as_str() };
    setup_logging(verbosity)?;

    info!("Checking routers in {}", args.input.display());

    let checker = RouterPatchChecker::from_config(&config);
    let report = checker.check_file(&args.input);

    println!("{}", report);

    info!(
        "{} routers can be patched, {} rows checked ({})",
        report.stats.eligible,
        report.stats.rows_checked,
        format_duration(start_time.elapsed())
    );

    Ok(())
}
