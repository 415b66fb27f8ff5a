//! Per-kind accessor strategies.
//!
//! A [`KindOps`] is the `{read, write, compare}` triple bound once when a
//! buffer is constructed. Every subsequent operation goes through these
//! plain function pointers — a flat call, with no per-call inspection of
//! the element kind. Byte offsets are computed here; booleans travel as a
//! single `u8`, UTF-16 code units as a `u16`.

use offvec_core::{Comparator, ScalarKind, Value};
use offvec_region::RawRegion;

use crate::error::VecError;

/// Read the element at `index` from a region.
pub(crate) type ReadFn = fn(&RawRegion, usize) -> Result<Value, VecError>;

/// Write the element at `index` into a region, rejecting wrong-kind values.
pub(crate) type WriteFn = fn(&mut RawRegion, usize, Value) -> Result<(), VecError>;

/// The accessor strategy triple for one element kind.
#[derive(Clone, Copy)]
pub(crate) struct KindOps {
    pub read: ReadFn,
    pub write: WriteFn,
    pub compare: Comparator,
}

impl KindOps {
    /// Bind the accessor triple for `kind`. Consulted exactly once, at
    /// buffer construction.
    pub fn bind(kind: ScalarKind) -> Self {
        let (read, write): (ReadFn, WriteFn) = match kind {
            ScalarKind::I8 => (read_i8, write_i8),
            ScalarKind::I16 => (read_i16, write_i16),
            ScalarKind::I32 => (read_i32, write_i32),
            ScalarKind::I64 => (read_i64, write_i64),
            ScalarKind::F32 => (read_f32, write_f32),
            ScalarKind::F64 => (read_f64, write_f64),
            ScalarKind::Bool => (read_bool, write_bool),
            ScalarKind::Char => (read_char, write_char),
        };
        Self {
            read,
            write,
            compare: kind.natural_comparator(),
        }
    }
}

macro_rules! accessors {
    ($read:ident, $write:ident, $variant:ident, $t:ty) => {
        fn $read(region: &RawRegion, index: usize) -> Result<Value, VecError> {
            Ok(Value::$variant(region.read::<$t>(index * size_of::<$t>())?))
        }

        fn $write(region: &mut RawRegion, index: usize, value: Value) -> Result<(), VecError> {
            match value {
                Value::$variant(v) => Ok(region.write::<$t>(index * size_of::<$t>(), v)?),
                other => Err(VecError::KindMismatch {
                    expected: ScalarKind::$variant,
                    found: other.kind(),
                }),
            }
        }
    };
}

accessors!(read_i8, write_i8, I8, i8);
accessors!(read_i16, write_i16, I16, i16);
accessors!(read_i32, write_i32, I32, i32);
accessors!(read_i64, write_i64, I64, i64);
accessors!(read_f32, write_f32, F32, f32);
accessors!(read_f64, write_f64, F64, f64);
accessors!(read_char, write_char, Char, u16);

// Booleans are stored as one byte, 0 or 1.

fn read_bool(region: &RawRegion, index: usize) -> Result<Value, VecError> {
    Ok(Value::Bool(region.read::<u8>(index)? != 0))
}

fn write_bool(region: &mut RawRegion, index: usize, value: Value) -> Result<(), VecError> {
    match value {
        Value::Bool(v) => Ok(region.write::<u8>(index, u8::from(v))?),
        other => Err(VecError::KindMismatch {
            expected: ScalarKind::Bool,
            found: other.kind(),
        }),
    }
}
