//! offvec: a growable, randomly-indexed sequence container whose storage
//! lives in a single contiguous block of raw memory.
//!
//! The container stores one of a closed set of fixed-width scalar kinds
//! (signed integers, floats, bool, UTF-16 code unit). The kind is chosen
//! once, at construction; it selects a `{read, write, compare}` accessor
//! triple that every later operation calls through directly, with no
//! per-call type inspection. The backing [`RawRegion`] is exclusively
//! owned and replaced wholesale on growth.
//!
//! # Quick start
//!
//! ```rust
//! use offvec::{OffVec, RegionPolicy, ScalarKind, Value};
//!
//! let mut v = OffVec::with_capacity(ScalarKind::I32, 2, RegionPolicy::Shared)?;
//! for x in [5, 5, 3, 4, 1, 49, -5] {
//!     v.push(Value::I32(x))?;
//! }
//! v.sort()?;
//! assert_eq!(v.get(0)?, Value::I32(-5));
//! assert_eq!(v.len(), 7);
//!
//! let collected: Result<Vec<_>, _> = v.iter().collect();
//! assert_eq!(collected?.last(), Some(&Value::I32(49)));
//! # Ok::<(), offvec::VecError>(())
//! ```
//!
//! # Concurrency
//!
//! There is no internal locking. Safety follows the region's
//! [`RegionPolicy`]: `Confined` regions reject every access from a
//! foreign thread with a typed error, `Shared` and `Global` regions
//! leave ordering to the caller. Disjoint [`Splitter`] windows may be
//! traversed from different threads; structural mutation is excluded
//! while they are alive because they borrow the buffer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod cursor;
pub mod error;
pub mod iter;
mod ops;
mod sort;
pub mod split;

pub use buffer::OffVec;
pub use cursor::Cursor;
pub use error::VecError;
pub use iter::Iter;
pub use split::Splitter;

// Re-export the leaf crates' surface so `offvec` works as a single
// dependency.
pub use offvec_core::{Comparator, KindDescriptor, KindError, ScalarKind, Value};
pub use offvec_region::{RawRegion, RegionError, RegionPolicy};
