//! Raw memory regions for the offvec container.
//!
//! A [`RawRegion`] is a single contiguous, aligned block of raw memory
//! obtained from the global allocator, together with a lifetime policy
//! governing cross-thread access and release. This is the only crate in
//! the workspace that contains `unsafe` code; every `unsafe` block is
//! confined to [`region`] and carries a `// SAFETY:` comment.
//!
//! # Access model
//!
//! - All reads and writes are bounds-checked against the region's byte
//!   capacity and checked against its [`RegionPolicy`] before touching
//!   memory.
//! - Mutation requires `&mut RawRegion`, so aliasing rules are enforced
//!   by the borrow checker; the policy check only adds thread identity
//!   on top of that.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod region;

pub use error::RegionError;
pub use region::{RawRegion, RegionPolicy, Scalar};
