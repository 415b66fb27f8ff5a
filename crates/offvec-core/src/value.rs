//! The [`Value`] tagged scalar and per-kind comparators.
//!
//! `Value` is the boundary representation: the container stores raw bytes,
//! but every read and write at the API surface carries one of these. The
//! tag is fixed by the buffer's kind at construction, so well-formed code
//! never mixes tags within one buffer.

use std::cmp::Ordering;
use std::fmt;

use crate::kind::ScalarKind;

/// A single scalar element, tagged with its kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    /// 8-bit signed integer.
    I8(i8),
    /// 16-bit signed integer.
    I16(i16),
    /// 32-bit signed integer.
    I32(i32),
    /// 64-bit signed integer.
    I64(i64),
    /// 32-bit float.
    F32(f32),
    /// 64-bit float.
    F64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-16 code unit.
    Char(u16),
}

/// A total-order comparison strategy over two values of the same kind.
///
/// Plain function pointers so a comparator can be stored in the accessor
/// triple bound at buffer construction and called with no indirection
/// beyond a flat call.
pub type Comparator = fn(&Value, &Value) -> Ordering;

impl Value {
    /// The kind this value belongs to.
    pub fn kind(&self) -> ScalarKind {
        match self {
            Self::I8(_) => ScalarKind::I8,
            Self::I16(_) => ScalarKind::I16,
            Self::I32(_) => ScalarKind::I32,
            Self::I64(_) => ScalarKind::I64,
            Self::F32(_) => ScalarKind::F32,
            Self::F64(_) => ScalarKind::F64,
            Self::Bool(_) => ScalarKind::Bool,
            Self::Char(_) => ScalarKind::Char,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I8(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Char(v) => match char::from_u32(u32::from(*v)) {
                Some(c) => write!(f, "'{c}'"),
                None => write!(f, "\\u{{{v:04x}}}"),
            },
        }
    }
}

// Natural comparator for one kind. Applied across kinds it panics:
// comparators are bound per buffer, so that is a caller bug, not data.
macro_rules! natural_cmp {
    ($name:ident, $variant:ident, $cmp:expr) => {
        pub(crate) fn $name(a: &Value, b: &Value) -> Ordering {
            match (a, b) {
                (Value::$variant(x), Value::$variant(y)) => $cmp(x, y),
                _ => panic!(
                    "natural comparator for {} applied to {} and {}",
                    ScalarKind::$variant,
                    a.kind(),
                    b.kind()
                ),
            }
        }
    };
}

natural_cmp!(cmp_i8, I8, |x: &i8, y: &i8| x.cmp(y));
natural_cmp!(cmp_i16, I16, |x: &i16, y: &i16| x.cmp(y));
natural_cmp!(cmp_i32, I32, |x: &i32, y: &i32| x.cmp(y));
natural_cmp!(cmp_i64, I64, |x: &i64, y: &i64| x.cmp(y));
natural_cmp!(cmp_f32, F32, |x: &f32, y: &f32| x.total_cmp(y));
natural_cmp!(cmp_f64, F64, |x: &f64, y: &f64| x.total_cmp(y));
natural_cmp!(cmp_bool, Bool, |x: &bool, y: &bool| x.cmp(y));
natural_cmp!(cmp_char, Char, |x: &u16, y: &u16| x.cmp(y));
