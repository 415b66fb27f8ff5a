//! Region-specific error types.

use std::error::Error;
use std::fmt;

use crate::region::RegionPolicy;

/// Errors that can occur during raw region operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegionError {
    /// The allocator refused the request, or the layout was invalid.
    AllocationFailed {
        /// Number of bytes requested.
        bytes: usize,
        /// Requested byte alignment.
        align: usize,
    },
    /// A read, write, or copy touched bytes outside the region.
    OutOfBounds {
        /// Starting byte offset of the access.
        offset: usize,
        /// Length of the access in bytes.
        len: usize,
        /// Total region capacity in bytes.
        capacity: usize,
    },
    /// A thread-confined region was accessed from a foreign thread.
    CrossThread {
        /// The policy of the region that rejected the access.
        policy: RegionPolicy,
    },
    /// Explicit release of a region whose policy forbids it.
    NotReleasable {
        /// The policy of the region that rejected the release.
        policy: RegionPolicy,
    },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { bytes, align } => {
                write!(f, "allocation of {bytes} bytes (align {align}) failed")
            }
            Self::OutOfBounds {
                offset,
                len,
                capacity,
            } => {
                write!(
                    f,
                    "access of {len} bytes at offset {offset} exceeds region capacity {capacity}"
                )
            }
            Self::CrossThread { policy } => {
                write!(f, "{policy} region accessed from a foreign thread")
            }
            Self::NotReleasable { policy } => {
                write!(f, "{policy} region cannot be explicitly released")
            }
        }
    }
}

impl Error for RegionError {}
