//! Terminal output: per-candidate results, statistics and credits.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use console::style;
use hibp_range::Verdict;
use indicatif::HumanDuration;

use crate::input::{Candidate, Origin};

/// How a single check ended.
///
/// A failed lookup is `Unknown`, never `Clear`: nothing was learned about the
/// password.
#[derive(Debug)]
pub enum Outcome {
    Exposed { occurrences: u64 },
    Clear,
    Unknown(hibp_range::Error),
}

impl From<Result<Verdict, hibp_range::Error>> for Outcome {
    fn from(result: Result<Verdict, hibp_range::Error>) -> Self {
        match result {
            Ok(Verdict::Exposed { occurrences }) => Outcome::Exposed { occurrences },
            Ok(Verdict::NotExposed) => Outcome::Clear,
            Err(e) => Outcome::Unknown(e),
        }
    }
}

/// Running totals for a batch.
#[derive(Debug, Clone)]
pub struct Statistics {
    start: Instant,
    exposed: usize,
    clear: usize,
    unknown: usize,
}

impl Statistics {
    pub fn start() -> Self {
        Self { start: Instant::now(), exposed: 0, clear: 0, unknown: 0 }
    }

    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Exposed { .. } => self.exposed += 1,
            Outcome::Clear => self.clear += 1,
            Outcome::Unknown(_) => self.unknown += 1,
        }
    }

    pub fn exposed(&self) -> usize {
        self.exposed
    }

    pub fn clear(&self) -> usize {
        self.clear
    }

    pub fn unknown(&self) -> usize {
        self.unknown
    }

    pub fn total(&self) -> usize {
        self.exposed + self.clear + self.unknown
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Writes results for each candidate.
///
/// Command-line passwords get a line for every result. File input only
/// reports exposures and failures, keyed by line number.
pub struct Reporter<W> {
    out: W,
    hide_passwords: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, hide_passwords: bool) -> Self {
        Self { out, hide_passwords }
    }

    pub fn report(&mut self, candidate: &Candidate, outcome: &Outcome) -> io::Result<()> {
        match candidate.origin() {
            Origin::Argument { index, total } => {
                writeln!(self.out, "\nChecking password {} of {}:", index, total)?;
                match outcome {
                    Outcome::Exposed { occurrences } => writeln!(
                        self.out,
                        "{}",
                        style(format!("BAD PASSWORD FOUND ({} occurrences)", occurrences)).red()
                    )?,
                    Outcome::Clear => writeln!(self.out, "{}", style("Good password").green())?,
                    Outcome::Unknown(e) => writeln!(
                        self.out,
                        "{}",
                        style(format!("Could not check password: {}", e)).red()
                    )?,
                }
                self.echo_password(candidate)
            }
            Origin::Line(line) => match outcome {
                Outcome::Exposed { occurrences } => {
                    writeln!(
                        self.out,
                        "{}",
                        style(format!(
                            "BAD PASSWORD FOUND ON LINE: {} ({} occurrences)",
                            line, occurrences
                        ))
                        .red()
                    )?;
                    self.echo_password(candidate)
                }
                Outcome::Clear => Ok(()),
                Outcome::Unknown(e) => writeln!(
                    self.out,
                    "{}",
                    style(format!("Could not check password on line {}: {}", line, e)).red()
                ),
            },
        }
    }

    fn echo_password(&mut self, candidate: &Candidate) -> io::Result<()> {
        if self.hide_passwords {
            return Ok(());
        }
        writeln!(self.out, "Password: {}", candidate.display())
    }

    pub fn write_summary(&mut self, stats: &Statistics) -> io::Result<()> {
        writeln!(self.out, "\nTotal runtime: {}", HumanDuration(stats.elapsed()))?;
        writeln!(self.out, "Total passwords checked: {}", stats.total())?;
        writeln!(
            self.out,
            "{}",
            style(format!("Bad passwords found: {}", stats.exposed())).red()
        )?;
        writeln!(self.out, "{}", style(format!("Good passwords: {}", stats.clear())).green())?;
        if stats.unknown() > 0 {
            writeln!(
                self.out,
                "{}",
                style(format!("Unchecked passwords (lookup failed): {}", stats.unknown())).yellow()
            )?;
        }
        Ok(())
    }

    pub fn write_credits(&mut self) -> io::Result<()> {
        writeln!(self.out, "hibp-check {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(
            self.out,
            "The real work is done by Troy Hunt, the Have I Been Pwned API and everyone who contributed to it."
        )
    }

    pub fn write_notice(&mut self, notice: &str) -> io::Result<()> {
        writeln!(self.out, "{}\n", style(notice).yellow())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
