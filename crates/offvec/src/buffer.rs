//! The growable buffer core.
//!
//! [`OffVec`] is a randomly-indexed sequence of one scalar kind, backed by
//! a single contiguous [`RawRegion`] that it exclusively owns. The region
//! is replaced, never aliased, on growth. Elements at `[0, len)` are live
//! and densely packed; `[len, capacity)` is stale and never read.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use offvec_core::{Comparator, ScalarKind, Value};
use offvec_region::{RawRegion, RegionPolicy};

use crate::cursor::Cursor;
use crate::error::VecError;
use crate::iter::Iter;
use crate::ops::KindOps;
use crate::sort;
use crate::split::Splitter;

/// A growable sequence of fixed-width scalars over raw memory.
///
/// The element kind is fixed at construction and determines the byte
/// width of every slot and the accessor strategy used for all reads,
/// writes, and comparisons. Capacity grows by doubling and never
/// shrinks; [`OffVec::clear`] retains storage.
///
/// Cross-thread access rules come from the region's [`RegionPolicy`],
/// not from the buffer: a `Confined` region rejects foreign threads at
/// every access, while `Shared` and `Global` regions leave ordering to
/// the caller. No operation locks or blocks.
pub struct OffVec {
    kind: ScalarKind,
    /// Bytes per element, from the kind descriptor.
    width: usize,
    /// Accessor triple bound once at construction.
    ops: KindOps,
    region: RawRegion,
    len: usize,
    capacity: usize,
}

impl OffVec {
    /// Create an empty buffer for `kind` with a strictly positive initial
    /// capacity, backed by a fresh region under `policy`.
    ///
    /// Fails [`VecError::InvalidCapacity`] if `capacity` is zero or the
    /// byte size overflows.
    pub fn with_capacity(
        kind: ScalarKind,
        capacity: usize,
        policy: RegionPolicy,
    ) -> Result<Self, VecError> {
        if capacity == 0 {
            return Err(VecError::InvalidCapacity { requested: 0 });
        }
        let descriptor = kind.descriptor();
        let bytes = capacity
            .checked_mul(descriptor.width)
            .ok_or(VecError::InvalidCapacity {
                requested: capacity,
            })?;
        let region = RawRegion::allocate(bytes, descriptor.align, policy)?;
        Ok(Self {
            kind,
            width: descriptor.width,
            ops: KindOps::bind(kind),
            region,
            len: 0,
            capacity,
        })
    }

    /// Like [`OffVec::with_capacity`], resolving the kind from its token
    /// (e.g. `"i32"`, `"bool"`).
    ///
    /// Fails [`VecError::Kind`] for an unregistered token.
    pub fn with_kind_token(
        token: &str,
        capacity: usize,
        policy: RegionPolicy,
    ) -> Result<Self, VecError> {
        let kind = ScalarKind::from_str(token)?;
        Self::with_capacity(kind, capacity, policy)
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements the current region can hold without growth.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The element kind fixed at construction.
    pub fn kind(&self) -> ScalarKind {
        self.kind
    }

    /// The lifetime policy of the backing region.
    pub fn policy(&self) -> RegionPolicy {
        self.region.policy()
    }

    fn check_index(&self, index: usize) -> Result<(), VecError> {
        if index < self.len {
            Ok(())
        } else {
            Err(VecError::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    fn check_kind(&self, value: &Value) -> Result<(), VecError> {
        if value.kind() == self.kind {
            Ok(())
        } else {
            Err(VecError::KindMismatch {
                expected: self.kind,
                found: value.kind(),
            })
        }
    }

    /// Read the element at `index`.
    pub fn get(&self, index: usize) -> Result<Value, VecError> {
        self.check_index(index)?;
        (self.ops.read)(&self.region, index)
    }

    /// Overwrite the element at `index`, returning the previous value.
    pub fn set(&mut self, index: usize, value: Value) -> Result<Value, VecError> {
        self.check_index(index)?;
        self.check_kind(&value)?;
        let previous = (self.ops.read)(&self.region, index)?;
        (self.ops.write)(&mut self.region, index, value)?;
        Ok(previous)
    }

    /// Insert `value` at `index`, shifting `[index, len)` one slot up.
    ///
    /// `index == len` appends. Grows the backing region first when full,
    /// so a failed growth leaves the buffer untouched.
    pub fn insert(&mut self, index: usize, value: Value) -> Result<(), VecError> {
        if index > self.len {
            return Err(VecError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.check_kind(&value)?;
        self.region.ensure_accessible()?;
        if self.len == self.capacity {
            self.grow()?;
        }
        if index < self.len {
            self.region.shift(
                index * self.width,
                (index + 1) * self.width,
                (self.len - index) * self.width,
            )?;
        }
        (self.ops.write)(&mut self.region, index, value)?;
        self.len += 1;
        Ok(())
    }

    /// Remove and return the element at `index`, shifting `(index, len)`
    /// one slot down. Capacity never shrinks.
    pub fn remove(&mut self, index: usize) -> Result<Value, VecError> {
        self.check_index(index)?;
        let removed = (self.ops.read)(&self.region, index)?;
        if index + 1 < self.len {
            self.region.shift(
                (index + 1) * self.width,
                index * self.width,
                (self.len - index - 1) * self.width,
            )?;
        }
        self.len -= 1;
        Ok(removed)
    }

    /// Append `value` at the end.
    pub fn push(&mut self, value: Value) -> Result<(), VecError> {
        self.insert(self.len, value)
    }

    /// Drop all elements. Storage is retained.
    ///
    /// A structural mutation like any other: on a `Confined` buffer it
    /// fails [`RegionError::CrossThread`] off the owning thread.
    pub fn clear(&mut self) -> Result<(), VecError> {
        self.region.ensure_accessible()?;
        self.len = 0;
        Ok(())
    }

    /// Index of the first element comparing equal to `value`, under the
    /// buffer's bound comparison strategy.
    pub fn index_of(&self, value: &Value) -> Result<Option<usize>, VecError> {
        self.check_kind(value)?;
        for i in 0..self.len {
            let current = (self.ops.read)(&self.region, i)?;
            if (self.ops.compare)(&current, value) == Ordering::Equal {
                return Ok(Some(i));
            }
        }
        Ok(None)
    }

    /// Index of the last element comparing equal to `value`.
    pub fn last_index_of(&self, value: &Value) -> Result<Option<usize>, VecError> {
        self.check_kind(value)?;
        for i in (0..self.len).rev() {
            let current = (self.ops.read)(&self.region, i)?;
            if (self.ops.compare)(&current, value) == Ordering::Equal {
                return Ok(Some(i));
            }
        }
        Ok(None)
    }

    /// Whether any element compares equal to `value`.
    pub fn contains(&self, value: &Value) -> Result<bool, VecError> {
        Ok(self.index_of(value)?.is_some())
    }

    /// Snapshot the live elements into a `Vec`.
    pub fn to_vec(&self) -> Result<Vec<Value>, VecError> {
        let mut out = Vec::with_capacity(self.len);
        for i in 0..self.len {
            out.push((self.ops.read)(&self.region, i)?);
        }
        Ok(out)
    }

    /// Sort in place under the kind's natural ascending order.
    ///
    /// Not stable; see [`OffVec::sort_by`].
    pub fn sort(&mut self) -> Result<(), VecError> {
        self.sort_by(self.kind.natural_comparator())
    }

    /// Sort in place so `cmp` is non-decreasing across consecutive pairs.
    ///
    /// Numeric and char kinds use an in-place partition-exchange
    /// quicksort, which is not stable. Bool buffers use an O(n)
    /// two-pointer partition that always orders `false` before `true`,
    /// ignoring the comparator's direction.
    pub fn sort_by(&mut self, cmp: Comparator) -> Result<(), VecError> {
        sort::sort_by(self, cmp)
    }

    /// Forward iterator over the live elements.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Bidirectional cursor with mutation at the cursor position.
    ///
    /// The cursor borrows the buffer mutably, so no other path can
    /// structurally modify it while the cursor is live.
    pub fn cursor(&mut self) -> Cursor<'_> {
        Cursor::new(self)
    }

    /// Split-capable iterator over `[0, len)` captured now.
    ///
    /// Disjoint splits may be traversed from different threads, provided
    /// no structural mutation happens during the traversal; the mutable
    /// borrow required for mutation makes that statically impossible
    /// while any splitter is alive.
    pub fn splitter(&self) -> Splitter<'_> {
        Splitter::new(self)
    }

    /// Double the capacity: allocate a region for `capacity * 2`
    /// elements under the same policy, copy the live prefix across at
    /// matching offsets, and adopt it. The old region is dropped only
    /// after a successful copy.
    fn grow(&mut self) -> Result<(), VecError> {
        let new_capacity =
            self.capacity
                .checked_mul(2)
                .ok_or(VecError::InvalidCapacity {
                    requested: self.capacity,
                })?;
        let bytes = new_capacity
            .checked_mul(self.width)
            .ok_or(VecError::InvalidCapacity {
                requested: new_capacity,
            })?;
        let mut next = RawRegion::allocate(bytes, self.kind.align(), self.region.policy())?;
        next.copy_from(&self.region, 0, 0, self.len * self.width)?;
        self.region = next;
        self.capacity = new_capacity;
        Ok(())
    }

    /// Exchange the elements at `i` and `j`. Sort-internal; indices are
    /// trusted to be in range.
    pub(crate) fn swap(&mut self, i: usize, j: usize) -> Result<(), VecError> {
        if i == j {
            return Ok(());
        }
        let a = (self.ops.read)(&self.region, i)?;
        let b = (self.ops.read)(&self.region, j)?;
        (self.ops.write)(&mut self.region, i, b)?;
        (self.ops.write)(&mut self.region, j, a)?;
        Ok(())
    }
}

impl fmt::Debug for OffVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OffVec")
            .field("kind", &self.kind)
            .field("len", &self.len)
            .field("capacity", &self.capacity)
            .field("policy", &self.region.policy())
            .finish()
    }
}
