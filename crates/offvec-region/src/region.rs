//! The [`RawRegion`] allocation and its lifetime policies.
//!
//! A region is allocated once, at a fixed size and alignment, and never
//! grows in place: the container obtains a larger region, copies the live
//! prefix across, and drops the old one. Release behavior and cross-thread
//! access rules depend on the [`RegionPolicy`] chosen at allocation.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::fmt;
use std::ptr::NonNull;
use std::thread::{self, ThreadId};

use crate::error::RegionError;

/// Lifetime and cross-thread access policy of a [`RawRegion`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionPolicy {
    /// Usable only from the thread that allocated the region. Any access
    /// from another thread fails [`RegionError::CrossThread`]. Released
    /// on drop.
    Confined,
    /// Usable from any thread. The region imposes no ordering or
    /// atomicity guarantees beyond what the borrow checker and the caller
    /// provide. Released on drop.
    Shared,
    /// Like [`RegionPolicy::Shared`], but lives until process exit: drop
    /// leaks the allocation and explicit release fails
    /// [`RegionError::NotReleasable`].
    Global,
}

impl fmt::Display for RegionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Confined => f.write_str("confined"),
            Self::Shared => f.write_str("shared"),
            Self::Global => f.write_str("global"),
        }
    }
}

/// Marker for scalar types that may be read from and written to a region.
///
/// Sealed: the set matches the fixed-width representations used by the
/// container (booleans travel as `u8`, UTF-16 code units as `u16`). Every
/// implementor is plain-old-data with no invalid bit patterns, which is
/// what makes the raw reads in [`RawRegion::read`] sound.
pub trait Scalar: Copy + sealed::Sealed {}

mod sealed {
    pub trait Sealed {}
}

macro_rules! scalar {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}
            impl Scalar for $t {}
        )*
    };
}

scalar!(u8, i8, u16, i16, i32, i64, f32, f64);

/// A contiguous block of raw memory with explicit size, alignment, and
/// lifetime policy.
///
/// The region is the unit of ownership: exactly one `RawRegion` owns a
/// given allocation, and all access goes through bounds- and
/// policy-checked methods. Contents are uninitialized until written;
/// callers must not read bytes they have not written (the container
/// guarantees this by only reading below its logical length).
pub struct RawRegion {
    ptr: NonNull<u8>,
    bytes: usize,
    align: usize,
    policy: RegionPolicy,
    /// Allocating thread; `Some` iff the policy is `Confined`.
    owner: Option<ThreadId>,
}

// SAFETY: the region uniquely owns its allocation. Shared references only
// permit reads through bounds-checked methods, and concurrent reads of
// plain-old-data bytes are race-free; writes require `&mut`, which the
// borrow checker makes exclusive. `Confined` regions additionally verify
// thread identity at every access, so sending one to a foreign thread
// yields typed errors rather than undefined behavior.
unsafe impl Send for RawRegion {}
// SAFETY: see `Send` above; `&RawRegion` exposes no interior mutability.
unsafe impl Sync for RawRegion {}

impl RawRegion {
    /// Allocate a region of `bytes` bytes at the given alignment.
    ///
    /// Fails [`RegionError::AllocationFailed`] if `bytes` is zero, the
    /// layout is invalid, or the allocator returns null. The contents are
    /// uninitialized.
    pub fn allocate(
        bytes: usize,
        align: usize,
        policy: RegionPolicy,
    ) -> Result<Self, RegionError> {
        let fail = RegionError::AllocationFailed { bytes, align };
        if bytes == 0 {
            return Err(fail);
        }
        let layout = Layout::from_size_align(bytes, align).map_err(|_| fail.clone())?;
        // SAFETY: `layout` has non-zero size, checked above.
        let raw = unsafe { alloc::alloc(layout) };
        let ptr = NonNull::new(raw).ok_or(fail)?;
        let owner = match policy {
            RegionPolicy::Confined => Some(thread::current().id()),
            RegionPolicy::Shared | RegionPolicy::Global => None,
        };
        Ok(Self {
            ptr,
            bytes,
            align,
            policy,
            owner,
        })
    }

    /// Total capacity in bytes.
    pub fn bytes(&self) -> usize {
        self.bytes
    }

    /// Byte alignment of the allocation.
    pub fn align(&self) -> usize {
        self.align
    }

    /// The lifetime policy chosen at allocation.
    pub fn policy(&self) -> RegionPolicy {
        self.policy
    }

    /// Verify that the current thread may access this region.
    ///
    /// A no-op for `Shared` and `Global` regions; for `Confined` regions
    /// fails [`RegionError::CrossThread`] off the allocating thread.
    pub fn ensure_accessible(&self) -> Result<(), RegionError> {
        match self.owner {
            Some(owner) if owner != thread::current().id() => Err(RegionError::CrossThread {
                policy: self.policy,
            }),
            _ => Ok(()),
        }
    }

    fn check_bounds(&self, offset: usize, len: usize) -> Result<(), RegionError> {
        let end = offset.checked_add(len);
        match end {
            Some(end) if end <= self.bytes => Ok(()),
            _ => Err(RegionError::OutOfBounds {
                offset,
                len,
                capacity: self.bytes,
            }),
        }
    }

    /// Read one scalar at the given byte offset.
    pub fn read<T: Scalar>(&self, offset: usize) -> Result<T, RegionError> {
        self.ensure_accessible()?;
        self.check_bounds(offset, size_of::<T>())?;
        // SAFETY: `offset + size_of::<T>() <= self.bytes` was just
        // checked, so the read stays inside the allocation. `T: Scalar`
        // is plain-old-data, so any byte pattern is a valid value.
        // `read_unaligned` drops the alignment obligation; in practice
        // the container only reads at element-width multiples.
        Ok(unsafe { self.ptr.as_ptr().add(offset).cast::<T>().read_unaligned() })
    }

    /// Write one scalar at the given byte offset.
    pub fn write<T: Scalar>(&mut self, offset: usize, value: T) -> Result<(), RegionError> {
        self.ensure_accessible()?;
        self.check_bounds(offset, size_of::<T>())?;
        // SAFETY: bounds checked above; `&mut self` guarantees exclusive
        // access to the allocation for the duration of the write.
        unsafe {
            self.ptr
                .as_ptr()
                .add(offset)
                .cast::<T>()
                .write_unaligned(value);
        }
        Ok(())
    }

    /// Copy `len` bytes from another region into this one.
    ///
    /// The regions are distinct allocations, so the ranges cannot
    /// overlap. Used by the container's growth path.
    pub fn copy_from(
        &mut self,
        src: &RawRegion,
        src_offset: usize,
        dst_offset: usize,
        len: usize,
    ) -> Result<(), RegionError> {
        self.ensure_accessible()?;
        src.ensure_accessible()?;
        src.check_bounds(src_offset, len)?;
        self.check_bounds(dst_offset, len)?;
        // SAFETY: both ranges are bounds-checked; `self` and `src` own
        // distinct allocations, so the ranges never overlap.
        unsafe {
            std::ptr::copy_nonoverlapping(
                src.ptr.as_ptr().add(src_offset),
                self.ptr.as_ptr().add(dst_offset),
                len,
            );
        }
        Ok(())
    }

    /// Move `len` bytes within this region, allowing overlap.
    ///
    /// Used by the container's shift-based insert and remove.
    pub fn shift(
        &mut self,
        src_offset: usize,
        dst_offset: usize,
        len: usize,
    ) -> Result<(), RegionError> {
        self.ensure_accessible()?;
        self.check_bounds(src_offset, len)?;
        self.check_bounds(dst_offset, len)?;
        // SAFETY: both ranges are bounds-checked and `ptr::copy` handles
        // overlapping ranges; `&mut self` guarantees exclusive access.
        unsafe {
            std::ptr::copy(
                self.ptr.as_ptr().add(src_offset),
                self.ptr.as_ptr().add(dst_offset),
                len,
            );
        }
        Ok(())
    }

    /// Explicitly release the region.
    ///
    /// Equivalent to dropping it, except that `Global` regions refuse:
    /// the handle is returned alongside [`RegionError::NotReleasable`]
    /// and remains fully usable.
    pub fn release(self) -> Result<(), (Self, RegionError)> {
        if self.policy == RegionPolicy::Global {
            let err = RegionError::NotReleasable {
                policy: self.policy,
            };
            return Err((self, err));
        }
        drop(self);
        Ok(())
    }
}

impl fmt::Debug for RawRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawRegion")
            .field("bytes", &self.bytes)
            .field("align", &self.align)
            .field("policy", &self.policy)
            .finish()
    }
}

impl Drop for RawRegion {
    fn drop(&mut self) {
        // Global regions live until process exit.
        if self.policy == RegionPolicy::Global {
            return;
        }
        // Layout was validated at allocation, so this cannot fail.
        if let Ok(layout) = Layout::from_size_align(self.bytes, self.align) {
            // SAFETY: `ptr` was returned by `alloc::alloc` with exactly
            // this layout and has not been deallocated before.
            unsafe { alloc::dealloc(self.ptr.as_ptr(), layout) };
        }
    }
}
