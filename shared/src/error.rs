//! Error type shared by both embedders.

use std::io;
use std::path::PathBuf;

/// Everything that can abort an embed run.
///
/// Argument errors never reach this type: `clap` rejects them before any
/// file is touched and exits with status 2.
#[derive(Debug, thiserror::Error)]
pub enum EmbedError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "{} is {len} bytes, which is not a multiple of the {width}-byte element size",
        path.display()
    )]
    MalformedInput {
        path: PathBuf,
        len: usize,
        width: usize,
    },

    #[error("{} is too large to embed ({len} bytes, max {max} bytes)", path.display())]
    InputTooLarge { path: PathBuf, len: u64, max: u64 },

    #[error("cannot derive an identifier from output path {}", path.display())]
    InvalidOutputPath { path: PathBuf },

    #[error("{} is out of date", path.display())]
    OutOfSync { path: PathBuf },
}

impl EmbedError {
    /// Adapter for `map_err` that attaches the offending path to an I/O error.
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}
