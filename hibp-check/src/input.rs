//! Candidate passwords and where they came from.

use std::borrow::Cow;
use std::ffi::OsString;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use zeroize::Zeroizing;

use crate::error::Error;

/// Where a candidate was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// 1-based position among `total` command-line passwords.
    Argument { index: usize, total: usize },
    /// 1-based line number in the input file.
    Line(usize),
}

/// A password (or pre-computed hash) to check. Wiped from memory on drop.
///
/// Held as raw bytes: the digest is taken over exactly what was supplied,
/// whatever its encoding.
pub struct Candidate {
    secret: Zeroizing<Vec<u8>>,
    origin: Origin,
}

impl Candidate {
    pub fn new(secret: impl Into<Vec<u8>>, origin: Origin) -> Self {
        Self { secret: Zeroizing::new(secret.into()), origin }
    }

    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    /// The secret for display. Invalid UTF-8 is replaced with U+FFFD.
    pub fn display(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.secret)
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }
}

impl fmt::Debug for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate")
            .field("secret", &"<redacted>")
            .field("origin", &self.origin)
            .finish()
    }
}

/// Candidates from command-line arguments, taken verbatim.
///
/// The arguments are consumed so no plain copy outlives the candidates.
pub fn from_arguments(passwords: Vec<OsString>) -> Vec<Candidate> {
    let total = passwords.len();
    passwords
        .into_iter()
        .enumerate()
        .map(|(i, password)| {
            let origin = Origin::Argument { index: i + 1, total };
            Candidate::new(password.into_encoded_bytes(), origin)
        })
        .collect()
}

/// Candidates from newline separated input.
///
/// Lines are split on `\n` and trimmed of ASCII whitespace (so `\r\n` endings
/// work); blank lines are skipped but still count towards line numbers. Lines
/// need not be valid UTF-8.
pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Vec<Candidate>> {
    let mut candidates = Vec::new();
    for (i, line) in reader.split(b'\n').enumerate() {
        let line = Zeroizing::new(line?);
        let password = line.trim_ascii();
        if password.is_empty() {
            continue;
        }
        candidates.push(Candidate::new(password, Origin::Line(i + 1)));
    }
    Ok(candidates)
}

pub fn from_file(path: &Path) -> Result<Vec<Candidate>, Error> {
    let input_error = |source| Error::InputFile { path: path.to_path_buf(), source };
    let file = File::open(path).map_err(input_error)?;
    from_reader(BufReader::new(file)).map_err(input_error)
}
