//! End-to-end scenarios exercising the public surface: construction,
//! positional mutation, growth, sorting, and iteration.

use offvec::{OffVec, RegionPolicy, ScalarKind, Value, VecError};

fn ints(v: &OffVec) -> Vec<i32> {
    v.to_vec()
        .unwrap()
        .into_iter()
        .map(|x| match x {
            Value::I32(n) => n,
            other => panic!("unexpected {other:?}"),
        })
        .collect()
}

#[test]
fn integer_buffer_sorts_ascending_across_growth() {
    let mut v = OffVec::with_capacity(ScalarKind::I32, 2, RegionPolicy::Shared).unwrap();
    for x in [5, 5, 3, 4, 1, 49, -5] {
        v.push(Value::I32(x)).unwrap();
    }
    v.sort().unwrap();
    assert_eq!(ints(&v), vec![-5, 1, 3, 4, 5, 5, 49]);
}

#[test]
fn char_buffer_sorts_by_code_unit() {
    let mut v = OffVec::with_kind_token("char", 4, RegionPolicy::Shared).unwrap();
    for c in ['c', 'e', 'h', 'f', 'z', 'a'] {
        v.push(Value::Char(c as u16)).unwrap();
    }
    v.sort().unwrap();
    let sorted: Vec<u16> = v
        .to_vec()
        .unwrap()
        .into_iter()
        .map(|x| match x {
            Value::Char(u) => u,
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    let expected: Vec<u16> = ['a', 'c', 'e', 'f', 'h', 'z'].map(|c| c as u16).to_vec();
    assert_eq!(sorted, expected);
}

#[test]
fn bool_buffer_partitions_false_before_true() {
    let mut v = OffVec::with_capacity(ScalarKind::Bool, 2, RegionPolicy::Shared).unwrap();
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
fn inserts_at_offset_shift_the_tail() {
    let mut v = OffVec::with_capacity(ScalarKind::I32, 2, RegionPolicy::Shared).unwrap();
    for x in [1, 2, 3] {
        v.push(Value::I32(x)).unwrap();
    }
    v.insert(1, Value::I32(9)).unwrap();
    v.insert(2, Value::I32(8)).unwrap();
    assert_eq!(ints(&v), vec![1, 9, 8, 2, 3]);
    assert_eq!(v.len(), 5);
}

#[test]
fn remove_returns_value_and_compacts() {
    let mut v = OffVec::with_capacity(ScalarKind::I32, 8, RegionPolicy::Shared).unwrap();
    for x in [1, 2, 3, 4, 5] {
        v.push(Value::I32(x)).unwrap();
    }
    assert_eq!(v.remove(2).unwrap(), Value::I32(3));
    assert_eq!(ints(&v), vec![1, 2, 4, 5]);
    assert_eq!(v.len(), 4);
}

#[test]
fn split_tasks_recover_the_exact_multiset() {
    let mut v = OffVec::with_capacity(ScalarKind::I32, 4, RegionPolicy::Shared).unwrap();
    for x in [5, 6, 7] {
        v.push(Value::I32(x)).unwrap();
    }
    let mut upper = v.splitter();
    let mut lower = upper.try_split().unwrap();

    // Merge the halves in the opposite order.
    let mut merged = Vec::new();
    upper.for_each_remaining(|x| merged.push(x)).unwrap();
    lower.for_each_remaining(|x| merged.push(x)).unwrap();
    let mut merged: Vec<i32> = merged
        .into_iter()
        .map(|x| match x {
            Value::I32(n) => n,
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    merged.sort_unstable();
    assert_eq!(merged, vec![5, 6, 7]);
}

#[test]
fn empty_buffer_iteration_is_exhausted() {
    let v = OffVec::with_capacity(ScalarKind::F64, 1, RegionPolicy::Shared).unwrap();
    let mut it = v.iter();
    assert!(!it.has_next());
    assert_eq!(it.try_next().unwrap_err(), VecError::Exhausted);
}

#[test]
fn cursor_mutation_requires_a_preceding_move() {
    let mut v = OffVec::with_capacity(ScalarKind::I32, 2, RegionPolicy::Shared).unwrap();
    v.push(Value::I32(1)).unwrap();
    let mut c = v.cursor();
    assert_eq!(c.remove().unwrap_err(), VecError::CursorState);
    assert_eq!(c.set(Value::I32(2)).unwrap_err(), VecError::CursorState);
    c.next().unwrap();
    assert_eq!(c.remove().unwrap(), Value::I32(1));
}

#[test]
fn global_buffer_supports_the_full_contract() {
    // Process-lifetime storage behaves like shared storage for access.
    let mut v = OffVec::with_capacity(ScalarKind::I16, 2, RegionPolicy::Global).unwrap();
    for x in [3i16, 1, 2] {
        v.push(Value::I16(x)).unwrap();
    }
    v.sort().unwrap();
    assert_eq!(
        v.to_vec().unwrap(),
        [1i16, 2, 3].map(Value::I16).to_vec()
    );
}
