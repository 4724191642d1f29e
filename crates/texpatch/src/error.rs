//! Error type shared by every pipeline stage.

use std::io;
use thiserror::Error;

/// Errors raised while planning or emitting a texture patch.
#[derive(Debug, Error)]
pub enum TexError {
    /// A caller-supplied argument is outside its accepted domain.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// No sweep line crossed the region, so there is nothing to emit.
    #[error("empty toolpath: no sweep line produced a segment")]
    EmptyPath,

    /// A motion program line could not be read back.
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl TexError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Convenience alias for results using [`TexError`].
pub type Result<T> = std::result::Result<T, TexError>;
