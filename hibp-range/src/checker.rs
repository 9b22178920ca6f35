use tracing::trace;

use crate::client::RangeSource;
use crate::digest::{Digest, build_digest};
use crate::error::Error;
use crate::range::find_suffix;

/// Result of a completed lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The digest is in the corpus.
    Exposed { occurrences: u64 },
    /// The digest is not in the corpus.
    NotExposed,
}

impl Verdict {
    pub fn is_exposed(&self) -> bool {
        matches!(self, Verdict::Exposed { .. })
    }
}

/// Checks digests against the corpus using k-Anonymity range queries.
///
/// Only [`Digest::prefix`] is handed to the [`RangeSource`]; the suffix is
/// compared locally against the returned records.
pub struct ExposureChecker<S> {
    source: S,
}

impl<S: RangeSource> ExposureChecker<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Looks up a digest and returns the verdict with its occurrence count.
    ///
    /// A matching record with a count of zero is a padding decoy and does not
    /// count as an exposure.
    pub async fn lookup(&self, digest: &Digest) -> Result<Verdict, Error> {
        let body = self.source.fetch_range(digest.prefix()).await?;

        let verdict = match find_suffix(&body, digest.suffix()) {
            Some(occurrences) if occurrences > 0 => Verdict::Exposed { occurrences },
            _ => Verdict::NotExposed,
        };
        trace!(prefix = digest.prefix(), exposed = verdict.is_exposed(), "range lookup complete");

        Ok(verdict)
    }

    /// Returns whether the digest appears in the corpus.
    pub async fn check_exposure(&self, digest: &Digest) -> Result<bool, Error> {
        Ok(self.lookup(digest).await?.is_exposed())
    }

    /// Builds the digest for `input` and looks it up.
    pub async fn check_password(
        &self,
        input: impl AsRef<[u8]>,
        already_hashed: bool,
    ) -> Result<Verdict, Error> {
        let digest = build_digest(input, already_hashed)?;
        self.lookup(&digest).await
    }
}
