//! Split-capable iteration for divide-and-conquer traversal.

use offvec_core::Value;

use crate::buffer::OffVec;
use crate::error::VecError;

/// A split-capable iterator over a fixed window of an [`OffVec`].
///
/// Created over `[0, len)` captured at creation time (sized, ordered,
/// immutable-view contract). [`Splitter::try_split`] repeatedly halves
/// the remaining window, handing off disjoint sub-ranges that may be
/// traversed independently — sequentially or from different threads.
/// Structural mutation during traversal is impossible while any
/// splitter is alive, because the splitter holds a shared borrow of the
/// buffer.
///
/// Every element of the original window belongs to exactly one live
/// splitter, so a splitter cannot be duplicated:
///
/// ```compile_fail
/// use offvec::{OffVec, RegionPolicy, ScalarKind, Splitter, Value};
///
/// let mut v = OffVec::with_capacity(ScalarKind::I32, 4, RegionPolicy::Shared).unwrap();
/// v.push(Value::I32(1)).unwrap();
/// let s = v.splitter();
/// let dup: Splitter<'_> = s.clone();
/// ```
pub struct Splitter<'a> {
    vec: &'a OffVec,
    cursor: usize,
    end: usize,
}

impl<'a> Splitter<'a> {
    pub(crate) fn new(vec: &'a OffVec) -> Self {
        Self {
            vec,
            cursor: 0,
            end: vec.len(),
        }
    }

    /// Number of elements not yet yielded from this splitter's window.
    pub fn remaining(&self) -> usize {
        self.end - self.cursor
    }

    /// Split off the lower half of the remaining window.
    ///
    /// Returns a splitter for `[cursor, mid)` and retains `[mid, end)`,
    /// or `None` when fewer than two elements remain.
    pub fn try_split(&mut self) -> Option<Splitter<'a>> {
        if self.remaining() < 2 {
            return None;
        }
        let mid = self.cursor + self.remaining() / 2;
        let lower = Splitter {
            vec: self.vec,
            cursor: self.cursor,
            end: mid,
        };
        self.cursor = mid;
        Some(lower)
    }

    /// Yield one element to `consume` and advance.
    ///
    /// Returns `Ok(false)` once the window is exhausted.
    pub fn try_advance<F>(&mut self, mut consume: F) -> Result<bool, VecError>
    where
        F: FnMut(Value),
    {
        if self.cursor >= self.end {
            return Ok(false);
        }
        let value = self.vec.get(self.cursor)?;
        self.cursor += 1;
        consume(value);
        Ok(true)
    }

    /// Drain the remaining window into `consume`.
    pub fn for_each_remaining<F>(&mut self, mut consume: F) -> Result<(), VecError>
    where
        F: FnMut(Value),
    {
        while self.try_advance(&mut consume)? {}
        Ok(())
    }
}
