//! Forward iteration over a buffer.

use offvec_core::Value;

use crate::buffer::OffVec;
use crate::error::VecError;

/// Forward iterator over the live elements of an [`OffVec`].
///
/// [`Iter::has_next`] is a live cursor-vs-length comparison, not a
/// snapshot. The `Iterator` impl yields `Result` items: exhaustion is
/// `None`, while a region access rejection (a confined region touched
/// from a foreign thread) surfaces as an `Err` item rather than being
/// swallowed.
pub struct Iter<'a> {
    vec: &'a OffVec,
    cursor: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(vec: &'a OffVec) -> Self {
        Self { vec, cursor: 0 }
    }

    /// Whether another element is available right now.
    pub fn has_next(&self) -> bool {
        self.cursor < self.vec.len()
    }

    /// Return the next element and advance, failing
    /// [`VecError::Exhausted`] at the end.
    pub fn try_next(&mut self) -> Result<Value, VecError> {
        if !self.has_next() {
            return Err(VecError::Exhausted);
        }
        let value = self.vec.get(self.cursor)?;
        self.cursor += 1;
        Ok(value)
    }
}

impl Iterator for Iter<'_> {
    type Item = Result<Value, VecError>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }
        let item = self.vec.get(self.cursor);
        self.cursor += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vec.len().saturating_sub(self.cursor);
        (remaining, Some(remaining))
    }
}
