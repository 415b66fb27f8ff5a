//! Shared helpers for the offvec benchmarks.

use offvec::{OffVec, RegionPolicy, ScalarKind, Value};

/// Build an i64 buffer pre-filled with `values`, starting from a small
/// capacity so growth is exercised.
pub fn filled_i64(values: &[i64]) -> OffVec {
    let mut v = OffVec::with_capacity(ScalarKind::I64, 2, RegionPolicy::Shared)
        .expect("benchmark buffer construction");
    for &x in values {
        v.push(Value::I64(x)).expect("benchmark push");
    }
    v
}
