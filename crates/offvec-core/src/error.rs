//! Kind-lookup error types.

use std::error::Error;
use std::fmt;

/// Errors from scalar-kind resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KindError {
    /// A kind token that is not registered in the descriptor table.
    UnsupportedKind {
        /// The token that failed to resolve.
        token: String,
    },
}

impl fmt::Display for KindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedKind { token } => {
                write!(f, "unsupported element kind '{token}'")
            }
        }
    }
}

impl Error for KindError {}
