use std::collections::TryReserveError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Fatal conditions of a vocabulary run. There is no recoverable variant:
/// every error aborts the run and the only recovery is to start over.
#[derive(Debug)]
pub enum VocabError {
    /// A corpus, output or log stream could not be opened.
    ResourceUnavailable {
        what: &'static str,
        path: PathBuf,
        source: io::Error,
    },
    /// Reading the corpus or writing the vocabulary failed mid-stream.
    Io(io::Error),
    /// Growing the counting table or the drained entry array failed.
    OutOfMemory { requested: usize },
}

pub type Result<T> = std::result::Result<T, VocabError>;

impl VocabError {
    pub fn unavailable(what: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        VocabError::ResourceUnavailable {
            what,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn out_of_memory(requested: usize, _err: TryReserveError) -> Self {
        VocabError::OutOfMemory { requested }
    }
}

impl fmt::Display for VocabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VocabError::ResourceUnavailable { what, path, source } => {
                write!(f, "cannot open {what} \"{}\": {source}", path.display())
            }
            VocabError::Io(e) => write!(f, "i/o error: {e}"),
            VocabError::OutOfMemory { requested } => {
                write!(f, "out of memory reserving {requested} more entries")
            }
        }
    }
}

impl std::error::Error for VocabError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VocabError::ResourceUnavailable { source, .. } => Some(source),
            VocabError::Io(e) => Some(e),
            VocabError::OutOfMemory { .. } => None,
        }
    }
}

impl From<io::Error> for VocabError {
    fn from(e: io::Error) -> Self {
        VocabError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn unavailable_names_the_stream_and_path() {
        let err = VocabError::unavailable(
            "log file",
            "/no/such/dir/log.txt",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("log file"));
        assert!(msg.contains("/no/such/dir/log.txt"));
        assert!(err.source().is_some());
    }

    #[test]
    fn io_errors_convert() {
        let err: VocabError = io::Error::other("boom").into();
        assert!(matches!(err, VocabError::Io(_)));
    }
}
