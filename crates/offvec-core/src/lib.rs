//! Core types for the offvec container workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! closed set of scalar element kinds the container can store, the
//! [`KindDescriptor`] layout table, the [`Value`] tagged scalar used at the
//! API boundary, and the natural per-kind comparators.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod kind;
pub mod value;

pub use error::KindError;
pub use kind::{KindDescriptor, ScalarKind};
pub use value::{Comparator, Value};
