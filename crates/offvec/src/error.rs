//! Container error types.
//!
//! Every failure is synchronous and typed; nothing is retried internally
//! and invalid input is never coerced. Mutating operations either complete
//! fully or fail before any observable mutation.

use std::error::Error;
use std::fmt;

use offvec_core::{KindError, ScalarKind};
use offvec_region::RegionError;

/// Errors that can occur during container operations.
#[derive(Clone, Debug, PartialEq)]
pub enum VecError {
    /// Construction with a non-positive or overflowing capacity.
    InvalidCapacity {
        /// The rejected capacity, in elements.
        requested: usize,
    },
    /// Positional access or mutation outside the valid bounds.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Logical length of the container at the time of the access.
        len: usize,
    },
    /// A value of one kind offered to a container of another.
    KindMismatch {
        /// The container's element kind.
        expected: ScalarKind,
        /// The kind of the offered value.
        found: ScalarKind,
    },
    /// An iterator or cursor advanced past its bounds.
    Exhausted,
    /// Cursor mutation without a preceding `next()`/`previous()`.
    CursorState,
    /// Kind resolution failed during construction.
    Kind(KindError),
    /// The underlying region rejected the access.
    Region(RegionError),
}

impl fmt::Display for VecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapacity { requested } => {
                write!(f, "invalid initial capacity {requested}")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::KindMismatch { expected, found } => {
                write!(f, "expected a {expected} value, found {found}")
            }
            Self::Exhausted => write!(f, "iteration exhausted"),
            Self::CursorState => {
                write!(f, "cursor mutation without a preceding next() or previous()")
            }
            Self::Kind(e) => write!(f, "kind resolution failed: {e}"),
            Self::Region(e) => write!(f, "region access failed: {e}"),
        }
    }
}

impl Error for VecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Kind(e) => Some(e),
            Self::Region(e) => Some(e),
            _ => None,
        }
    }
}

impl From<KindError> for VecError {
    fn from(e: KindError) -> Self {
        Self::Kind(e)
    }
}

impl From<RegionError> for VecError {
    fn from(e: RegionError) -> Self {
        Self::Region(e)
    }
}
