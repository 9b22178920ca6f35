use std::io;

use clap::{CommandFactory, Parser};
use hibp_check::{Args, Error, Reporter, Statistics, input, progress_bar, run_batch};
use hibp_range::{ExposureChecker, RangeClient};
use indicatif::ProgressBar;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    let mut args = Args::parse();
    init_tracing(&args);

    let mut reporter = Reporter::new(io::stdout(), args.hide);

    if args.credits {
        reporter.write_credits()?;
        return Ok(());
    }

    let mut stats = Statistics::start();

    // Passwords on the command line take precedence over the input file.
    // They are moved out of `args` so only the zeroizing candidates hold them.
    let passwords = std::mem::take(&mut args.passwords);
    let (candidates, progress) = if !passwords.is_empty() {
        (input::from_arguments(passwords), ProgressBar::hidden())
    } else {
        match input::from_file(&args.input) {
            Ok(candidates) => {
                let progress = progress_bar(candidates.len(), !args.no_progress);
                (candidates, progress)
            }
            Err(e) if e.is_not_found() && args.uses_default_input() => {
                reporter.write_notice("Default passwords file not found")?;
                Args::command().print_help()?;
                return Ok(());
            }
            Err(e) => return Err(e),
        }
    };

    info!(count = candidates.len(), hashed = args.hashed, "checking candidates");

    let checker = ExposureChecker::new(RangeClient::new(args.client_config())?);
    run_batch(&checker, &candidates, args.hashed, &mut reporter, &progress, &mut stats).await?;
    progress.finish_and_clear();

    if args.stats {
        reporter.write_summary(&stats)?;
    }

    Ok(())
}

fn init_tracing(args: &Args) {
    // -v wins over RUST_LOG
    let filter = if args.verbose > 0 {
        EnvFilter::new(args.log_filter())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()))
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}
