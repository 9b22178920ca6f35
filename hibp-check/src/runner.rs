use std::io::{self, Write};

use hibp_range::{ExposureChecker, RangeSource};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tracing::debug;

use crate::input::Candidate;
use crate::report::{Outcome, Reporter, Statistics};

/// Checks candidates one after another with a single shared checker.
///
/// A failed lookup is reported for its candidate and the batch moves on.
/// Only an error writing the report stops the run.
pub async fn run_batch<S, W>(
    checker: &ExposureChecker<S>,
    candidates: &[Candidate],
    hashed: bool,
    reporter: &mut Reporter<W>,
    progress: &ProgressBar,
    stats: &mut Statistics,
) -> io::Result<()>
where
    S: RangeSource,
    W: Write,
{
    for candidate in candidates {
        let outcome = Outcome::from(checker.check_password(candidate.secret(), hashed).await);
        if let Outcome::Unknown(e) = &outcome {
            debug!(origin = ?candidate.origin(), error = %e, "check failed, continuing");
        }

        stats.record(&outcome);
        progress.suspend(|| reporter.report(candidate, &outcome))?;
        progress.inc(1);
    }

    Ok(())
}

/// Progress bar for file input, drawn on stderr.
pub fn progress_bar(len: usize, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::with_draw_target(Some(len as u64), ProgressDrawTarget::stderr());
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
        .map(|style| style.progress_chars("#>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb
}
