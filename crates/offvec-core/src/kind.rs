//! The closed set of scalar element kinds and their layout descriptors.
//!
//! A [`ScalarKind`] names one of the eight fixed-width element types the
//! container can store. Its [`KindDescriptor`] gives the byte width and
//! alignment of the in-region representation, and the kind's natural
//! comparator. The descriptor table is consulted exactly once, when a
//! buffer is constructed; afterwards all access goes through accessors
//! bound from it.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::error::KindError;
use crate::value::{self, Comparator};

/// One of the fixed scalar element kinds.
///
/// Booleans are stored as a single byte (0 or 1); `Char` is a UTF-16 code
/// unit stored as two bytes. All other kinds use their native width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// 8-bit signed integer.
    I8,
    /// 16-bit signed integer.
    I16,
    /// 32-bit signed integer.
    I32,
    /// 64-bit signed integer.
    I64,
    /// 32-bit IEEE-754 float.
    F32,
    /// 64-bit IEEE-754 float.
    F64,
    /// Boolean, one byte per element.
    Bool,
    /// UTF-16 code unit, two bytes per element.
    Char,
}

/// Memory layout and ordering information for a [`ScalarKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KindDescriptor {
    /// The kind this descriptor describes.
    pub kind: ScalarKind,
    /// Bytes occupied by one element.
    pub width: usize,
    /// Required byte alignment of the backing region.
    pub align: usize,
}

/// Token → kind registry backing [`ScalarKind::from_str`].
///
/// `IndexMap` keeps registration order, so [`ScalarKind::ALL`] and the
/// registry iterate in the same order.
static REGISTRY: LazyLock<IndexMap<&'static str, ScalarKind>> = LazyLock::new(|| {
    ScalarKind::ALL.iter().map(|&k| (k.token(), k)).collect()
});

impl ScalarKind {
    /// Every supported kind, in registration order.
    pub const ALL: [ScalarKind; 8] = [
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::F32,
        Self::F64,
        Self::Bool,
        Self::Char,
    ];

    /// The canonical token for this kind, as accepted by [`ScalarKind::from_str`].
    pub fn token(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Bool => "bool",
            Self::Char => "char",
        }
    }

    /// Bytes occupied by one element of this kind.
    pub fn width(self) -> usize {
        match self {
            Self::I8 | Self::Bool => 1,
            Self::I16 | Self::Char => 2,
            Self::I32 | Self::F32 => 4,
            Self::I64 | Self::F64 => 8,
        }
    }

    /// Required byte alignment of the backing region.
    ///
    /// All supported kinds are naturally aligned, so this equals
    /// [`ScalarKind::width`].
    pub fn align(self) -> usize {
        self.width()
    }

    /// The full layout descriptor for this kind.
    pub fn descriptor(self) -> KindDescriptor {
        KindDescriptor {
            kind: self,
            width: self.width(),
            align: self.align(),
        }
    }

    /// The natural ascending comparator for this kind.
    ///
    /// Floats use IEEE-754 total ordering (`-0.0 < 0.0`, NaN greatest),
    /// matching the semantics of the per-kind compare strategies bound at
    /// buffer construction.
    pub fn natural_comparator(self) -> Comparator {
        match self {
            Self::I8 => value::cmp_i8,
            Self::I16 => value::cmp_i16,
            Self::I32 => value::cmp_i32,
            Self::I64 => value::cmp_i64,
            Self::F32 => value::cmp_f32,
            Self::F64 => value::cmp_f64,
            Self::Bool => value::cmp_bool,
            Self::Char => value::cmp_char,
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ScalarKind {
    type Err = KindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        REGISTRY
            .get(s)
            .copied()
            .ok_or_else(|| KindError::UnsupportedKind {
                token: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_match_native_layout() {
        assert_eq!(ScalarKind::I8.width(), 1);
        assert_eq!(ScalarKind::I16.width(), 2);
        assert_eq!(ScalarKind::I32.width(), 4);
        assert_eq!(ScalarKind::I64.width(), 8);
        assert_eq!(ScalarKind::F32.width(), 4);
        assert_eq!(ScalarKind::F64.width(), 8);
        assert_eq!(ScalarKind::Bool.width(), 1);
        assert_eq!(ScalarKind::Char.width(), 2);
    }

    #[test]
    fn all_kinds_are_naturally_aligned() {
        for kind in ScalarKind::ALL {
            let d = kind.descriptor();
            assert_eq!(d.width, d.align);
            assert!(d.width.is_power_of_two());
        }
    }

    #[test]
    fn token_round_trip() {
        for kind in ScalarKind::ALL {
            assert_eq!(kind.token().parse::<ScalarKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_token_is_unsupported() {
        let err = "u128".parse::<ScalarKind>().unwrap_err();
        assert_eq!(
            err,
            KindError::UnsupportedKind {
                token: "u128".to_string()
            }
        );
    }

    #[test]
    fn display_matches_token() {
        assert_eq!(ScalarKind::Char.to_string(), "char");
        assert_eq!(ScalarKind::I64.to_string(), "i64");
    }
}
