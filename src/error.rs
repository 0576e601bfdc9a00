use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to {op}: {source}")]
    Terminal {
        op: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Attach the name of the terminal operation that failed to an `io::Result`.
pub(crate) trait TerminalResultExt<T> {
    fn during(self, op: &'static str) -> Result<T>;
}

impl<T> TerminalResultExt<T> for io::Result<T> {
    fn during(self, op: &'static str) -> Result<T> {
        self.map_err(|source| Error::Terminal { op, source })
    }
}
