use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Range(#[from] hibp_range::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Cannot read input file '{path}': {source}")]
    InputFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// True when the input file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::InputFile { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
