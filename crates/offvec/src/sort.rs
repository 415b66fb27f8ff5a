//! In-place sort strategies over the raw buffer.
//!
//! Numeric and char kinds share one kind-parameterized Lomuto
//! partition-exchange quicksort driven through the buffer's bound
//! accessors: last element of the active sub-range as pivot, expected
//! O(n log n), worst case O(n²), not stable. Bool buffers use an O(n)
//! two-pointer partition instead, which always produces ascending
//! false-before-true order regardless of the comparator's direction.

use std::cmp::Ordering;

use offvec_core::{Comparator, ScalarKind, Value};
use smallvec::{smallvec, SmallVec};

use crate::buffer::OffVec;
use crate::error::VecError;

/// Reorder `[0, len)` so `cmp` is non-decreasing across consecutive
/// pairs. No-op on empty and single-element buffers.
pub(crate) fn sort_by(vec: &mut OffVec, cmp: Comparator) -> Result<(), VecError> {
    if vec.len() < 2 {
        return Ok(());
    }
    match vec.kind() {
        ScalarKind::Bool => partition_bools(vec),
        _ => quicksort(vec, cmp),
    }
}

/// Iterative Lomuto quicksort over inclusive sub-ranges. The explicit
/// stack keeps worst-case input from overflowing the call stack.
fn quicksort(vec: &mut OffVec, cmp: Comparator) -> Result<(), VecError> {
    let mut pending: SmallVec<[(usize, usize); 32]> = smallvec![(0, vec.len() - 1)];
    while let Some((lo, hi)) = pending.pop() {
        if lo >= hi {
            continue;
        }
        let pivot = partition(vec, cmp, lo, hi)?;
        if pivot > lo {
            pending.push((lo, pivot - 1));
        }
        if pivot < hi {
            pending.push((pivot + 1, hi));
        }
    }
    Ok(())
}

/// Partition `[lo, hi]` around the element at `hi`, returning the
/// pivot's final position.
fn partition(vec: &mut OffVec, cmp: Comparator, lo: usize, hi: usize) -> Result<usize, VecError> {
    let pivot = vec.get(hi)?;
    let mut boundary = lo;
    for j in lo..hi {
        let current = vec.get(j)?;
        if cmp(&current, &pivot) != Ordering::Greater {
            vec.swap(boundary, j)?;
            boundary += 1;
        }
    }
    vec.swap(boundary, hi)?;
    Ok(boundary)
}

/// Two-pointer boolean partition: advance a low pointer over `false`s
/// from the front and a high pointer over `true`s from the back,
/// swapping on conflict.
fn partition_bools(vec: &mut OffVec) -> Result<(), VecError> {
    let mut low = 0;
    let mut high = vec.len();
    while low < high {
        if vec.get(low)? == Value::Bool(false) {
            low += 1;
            continue;
        }
        high -= 1;
        if vec.get(high)? == Value::Bool(true) {
            continue;
        }
        vec.swap(low, high)?;
        low += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use offvec_region::RegionPolicy;
    use proptest::prelude::*;

    fn buffer(kind: ScalarKind) -> OffVec {
        OffVec::with_capacity(kind, 2, RegionPolicy::Shared).unwrap()
    }

    fn descending(a: &Value, b: &Value) -> Ordering {
        a.kind().natural_comparator()(b, a)
    }

    #[test]
    fn sorts_integers_ascending() {
        let mut v = buffer(ScalarKind::I32);
        for x in [5, 5, 3, 4, 1, 49, -5] {
            v.push(Value::I32(x)).unwrap();
        }
        v.sort().unwrap();
        let sorted: Vec<_> = v.to_vec().unwrap();
        let expected: Vec<_> = [-5, 1, 3, 4, 5, 5, 49].map(Value::I32).to_vec();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn sorts_integers_descending_with_reversed_comparator() {
        let mut v = buffer(ScalarKind::I32);
        for x in [2, 9, 4] {
            v.push(Value::I32(x)).unwrap();
        }
        v.sort_by(descending).unwrap();
        assert_eq!(
            v.to_vec().unwrap(),
            [9, 4, 2].map(Value::I32).to_vec()
        );
    }

    #[test]
    fn sorts_chars_by_code_unit() {
        let mut v = buffer(ScalarKind::Char);
        for c in ['c', 'e', 'h', 'f', 'z', 'a'] {
            v.push(Value::Char(c as u16)).unwrap();
        }
        v.sort().unwrap();
        let expected: Vec<_> = ['a', 'c', 'e', 'f', 'h', 'z']
            .map(|c| Value::Char(c as u16))
            .to_vec();
        assert_eq!(v.to_vec().unwrap(), expected);
    }

    #[test]
    fn bool_sort_puts_false_first() {
        let mut v = buffer(ScalarKind::Bool);
        for b in [true, false, true, false] {
            v.push(Value::Bool(b)).unwrap();
        }
        v.sort().unwrap();
        assert_eq!(
            v.to_vec().unwrap(),
            [false, false, true, true].map(Value::Bool).to_vec()
        );
    }

    #[test]
    fn bool_sort_ignores_comparator_direction() {
        let mut v = buffer(ScalarKind::Bool);
        for b in [true, false, true] {
            v.push(Value::Bool(b)).unwrap();
        }
        // Reversed comparator, same outcome: false still sorts first.
        v.sort_by(descending).unwrap();
        assert_eq!(
            v.to_vec().unwrap(),
            [false, true, true].map(Value::Bool).to_vec()
        );
    }

    #[test]
    fn empty_and_singleton_are_no_ops() {
        let mut v = buffer(ScalarKind::I64);
        v.sort().unwrap();
        assert!(v.is_empty());
        v.push(Value::I64(3)).unwrap();
        v.sort().unwrap();
        assert_eq!(v.to_vec().unwrap(), vec![Value::I64(3)]);
    }

    #[test]
    fn sorts_floats_with_total_order() {
        let mut v = buffer(ScalarKind::F64);
        for x in [1.5, f64::NAN, -0.0, 0.0, f64::NEG_INFINITY] {
            v.push(Value::F64(x)).unwrap();
        }
        v.sort().unwrap();
        let out = v.to_vec().unwrap();
        assert_eq!(out[0], Value::F64(f64::NEG_INFINITY));
        assert_eq!(out[3], Value::F64(1.5));
        // NaN sorts greatest under total ordering.
        assert!(matches!(out[4], Value::F64(x) if x.is_nan()));
        // -0.0 before 0.0: distinguish by sign bit.
        let (a, b) = match (out[1], out[2]) {
            (Value::F64(a), Value::F64(b)) => (a, b),
            other => panic!("unexpected {other:?}"),
        };
        assert!(a.is_sign_negative() && a == 0.0);
        assert!(b.is_sign_positive() && b == 0.0);
    }

    #[test]
    fn sorts_already_sorted_and_reversed_runs() {
        for input in [(0..64).collect::<Vec<_>>(), (0..64).rev().collect()] {
            let mut v = buffer(ScalarKind::I64);
            for x in &input {
                v.push(Value::I64(*x)).unwrap();
            }
            v.sort().unwrap();
            let expected: Vec<_> = (0..64).map(Value::I64).collect();
            assert_eq!(v.to_vec().unwrap(), expected);
        }
    }

    proptest! {
        #[test]
        fn sorted_output_is_an_ordered_permutation(values in prop::collection::vec(any::<i64>(), 0..128)) {
            let mut v = buffer(ScalarKind::I64);
            for &x in &values {
                v.push(Value::I64(x)).unwrap();
            }
            v.sort().unwrap();

            let mut expected = values.clone();
            expected.sort_unstable();
            let actual: Vec<i64> = v
                .to_vec()
                .unwrap()
                .into_iter()
                .map(|x| match x {
                    Value::I64(n) => n,
                    other => panic!("unexpected {other:?}"),
                })
                .collect();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn bool_partition_preserves_counts(values in prop::collection::vec(any::<bool>(), 0..96)) {
            let mut v = buffer(ScalarKind::Bool);
            for &b in &values {
                v.push(Value::Bool(b)).unwrap();
            }
            v.sort().unwrap();

            let falses = values.iter().filter(|&&b| !b).count();
            let out = v.to_vec().unwrap();
            for (i, value) in out.iter().enumerate() {
                prop_assert_eq!(*value, Value::Bool(i >= falses));
            }
        }

        #[test]
        fn char_sort_is_ordered(units in prop::collection::vec(any::<u16>(), 0..64)) {
            let mut v = buffer(ScalarKind::Char);
            for &u in &units {
                v.push(Value::Char(u)).unwrap();
            }
            v.sort().unwrap();

            let mut expected = units.clone();
            expected.sort_unstable();
            let actual: Vec<u16> = v
                .to_vec()
                .unwrap()
                .into_iter()
                .map(|x| match x {
                    Value::Char(u) => u,
                    other => panic!("unexpected {other:?}"),
                })
                .collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
