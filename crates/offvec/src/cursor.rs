//! Bidirectional cursor with mutation at the cursor position.

use offvec_core::Value;

use crate::buffer::OffVec;
use crate::error::VecError;

/// A bidirectional cursor over an [`OffVec`], with mutation at the last
/// returned position.
///
/// State is `(position, last_returned)` with `0 ≤ position ≤ len`.
/// [`Cursor::remove`] and [`Cursor::set`] act on the element most
/// recently returned by [`Cursor::next`] or [`Cursor::previous`] and
/// fail [`VecError::CursorState`] if no element has been returned since
/// the last `remove()` or `add()`. The cursor borrows the buffer
/// mutably, so structural changes through any other path are impossible
/// while it is alive.
pub struct Cursor<'a> {
    vec: &'a mut OffVec,
    position: usize,
    last_returned: Option<usize>,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(vec: &'a mut OffVec) -> Self {
        Self {
            vec,
            position: 0,
            last_returned: None,
        }
    }

    /// Whether a following element exists.
    pub fn has_next(&self) -> bool {
        self.position < self.vec.len()
    }

    /// Whether a preceding element exists.
    pub fn has_previous(&self) -> bool {
        self.position > 0
    }

    /// Return the element after the cursor and move past it.
    pub fn next(&mut self) -> Result<Value, VecError> {
        if !self.has_next() {
            return Err(VecError::Exhausted);
        }
        let value = self.vec.get(self.position)?;
        self.last_returned = Some(self.position);
        self.position += 1;
        Ok(value)
    }

    /// Return the element before the cursor and move before it.
    pub fn previous(&mut self) -> Result<Value, VecError> {
        if !self.has_previous() {
            return Err(VecError::Exhausted);
        }
        let value = self.vec.get(self.position - 1)?;
        self.position -= 1;
        self.last_returned = Some(self.position);
        Ok(value)
    }

    /// Index of the element a subsequent [`Cursor::next`] would return.
    pub fn next_index(&self) -> usize {
        self.position
    }

    /// Index of the element a subsequent [`Cursor::previous`] would
    /// return, or `None` at the front.
    pub fn previous_index(&self) -> Option<usize> {
        self.position.checked_sub(1)
    }

    /// Remove and return the last returned element.
    ///
    /// Fails [`VecError::CursorState`] if no element has been returned
    /// since the last `remove()` or `add()`.
    pub fn remove(&mut self) -> Result<Value, VecError> {
        let index = self.last_returned.ok_or(VecError::CursorState)?;
        let removed = self.vec.remove(index)?;
        if index < self.position {
            self.position -= 1;
        }
        self.last_returned = None;
        Ok(removed)
    }

    /// Overwrite the last returned element, returning the value it
    /// replaced. Same precondition as [`Cursor::remove`]; repeated
    /// `set()` calls after one move are allowed.
    pub fn set(&mut self, value: Value) -> Result<Value, VecError> {
        let index = self.last_returned.ok_or(VecError::CursorState)?;
        self.vec.set(index, value)
    }

    /// Insert `value` at the cursor position and advance past it.
    /// No precondition; clears the last-returned element.
    pub fn add(&mut self, value: Value) -> Result<(), VecError> {
        self.vec.insert(self.position, value)?;
        self.position += 1;
        self.last_returned = None;
        Ok(())
    }
}
