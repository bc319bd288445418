// listless-core - Maybe integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Integration tests for the `Maybe` container.
//!
//! Tests for: map, and_then, filter, unwrap_or, unwrap_or_else,
//! if_present, get, conversions, equality, display

use std::cell::Cell;

use listless_core::{Error, Maybe};

// =============================================================================
// Presence checks and extraction
// =============================================================================

#[test]
fn test_some_is_some() {
    assert!(Maybe::Some(1).is_some());
    assert!(!Maybe::Some(1).is_none());
}

#[test]
fn test_none_is_none() {
    assert!(Maybe::<i32>::None.is_none());
    assert!(!Maybe::<i32>::None.is_some());
}

#[test]
fn test_get_some() {
    assert_eq!(Maybe::Some(42).get(), Ok(42));
}

#[test]
fn test_get_none_errors() {
    assert_eq!(Maybe::<i32>::None.get(), Err(Error::NoValue));
}

// =============================================================================
// map
// =============================================================================

#[test]
fn test_map_some() {
    assert_eq!(Maybe::Some(3).map(|x| x * 2), Maybe::Some(6));
}

#[test]
fn test_map_none_stays_none() {
    assert_eq!(Maybe::<i32>::None.map(|x| x * 2), Maybe::None);
}

#[test]
fn test_map_none_skips_transformer() {
    let called = Cell::new(false);
    let _ = Maybe::<i32>::None.map(|x| {
        called.set(true);
        x
    });
    assert!(!called.get());
}

#[test]
fn test_map_changes_type() {
    assert_eq!(
        Maybe::Some(3).map(|x| format!("n={}", x)),
        Maybe::Some("n=3".to_string())
    );
}

// =============================================================================
// and_then
// =============================================================================

#[test]
fn test_and_then_flattens_one_level() {
    assert_eq!(Maybe::Some(3).and_then(|x| Maybe::Some(x + 1)), Maybe::Some(4));
}

#[test]
fn test_and_then_absent_result() {
    assert_eq!(Maybe::Some(3).and_then(|_| Maybe::<i32>::None), Maybe::None);
}

#[test]
fn test_and_then_on_none_skips_transformer() {
    let called = Cell::new(false);
    let result = Maybe::<i32>::None.and_then(|x| {
        called.set(true);
        Maybe::Some(x)
    });
    assert_eq!(result, Maybe::None);
    assert!(!called.get());
}

// =============================================================================
// filter
// =============================================================================

#[test]
fn test_filter_passing() {
    assert_eq!(Maybe::Some(4).filter(|x| x % 2 == 0), Maybe::Some(4));
}

#[test]
fn test_filter_failing() {
    assert_eq!(Maybe::Some(3).filter(|x| x % 2 == 0), Maybe::None);
}

#[test]
fn test_filter_none_skips_predicate() {
    let called = Cell::new(false);
    let result = Maybe::<i32>::None.filter(|_| {
        called.set(true);
        true
    });
    assert_eq!(result, Maybe::None);
    assert!(!called.get());
}

// =============================================================================
// unwrap_or / unwrap_or_else
// =============================================================================

#[test]
fn test_unwrap_or() {
    assert_eq!(Maybe::Some(1).unwrap_or(9), 1);
    assert_eq!(Maybe::None.unwrap_or(9), 9);
}

#[test]
fn test_unwrap_or_else() {
    assert_eq!(Maybe::Some(1).unwrap_or_else(|| 9), 1);
    assert_eq!(Maybe::None.unwrap_or_else(|| 9), 9);
}

#[test]
fn test_unwrap_or_else_skips_supplier_when_present() {
    let called = Cell::new(false);
    let value = Maybe::Some(1).unwrap_or_else(|| {
        called.set(true);
        9
    });
    assert_eq!(value, 1);
    assert!(!called.get());
}

// =============================================================================
// if_present
// =============================================================================

#[test]
fn test_if_present_runs_on_some() {
    let seen = Cell::new(0);
    Maybe::Some(7).if_present(|v| seen.set(*v));
    assert_eq!(seen.get(), 7);
}

#[test]
fn test_if_present_noop_on_none() {
    let seen = Cell::new(0);
    Maybe::<i32>::None.if_present(|v| seen.set(*v));
    assert_eq!(seen.get(), 0);
}

// =============================================================================
// Equality
// =============================================================================

#[test]
fn test_equality_is_structural() {
    assert_eq!(Maybe::<i32>::None, Maybe::<i32>::None);
    assert_eq!(Maybe::Some(1), Maybe::Some(1));
    assert_ne!(Maybe::Some(1), Maybe::Some(2));
    assert_ne!(Maybe::Some(1), Maybe::None);
}

#[test]
fn test_equality_with_absent_payload() {
    // An "absent but present" payload composes as Maybe<Option<T>> and
    // compares structurally: two absent payloads are equal, an absent
    // payload never equals a present one.
    assert_eq!(Maybe::Some(None::<i32>), Maybe::Some(None::<i32>));
    assert_ne!(Maybe::Some(None), Maybe::Some(Some(1)));
    assert_ne!(Maybe::Some(None::<i32>), Maybe::None);
}

// =============================================================================
// Conversions and display
// =============================================================================

#[test]
fn test_from_option() {
    assert_eq!(Maybe::from(Some(3)), Maybe::Some(3));
    assert_eq!(Maybe::from(None::<i32>), Maybe::None);
}

#[test]
fn test_into_option() {
    assert_eq!(Option::from(Maybe::Some(3)), Some(3));
    assert_eq!(Option::<i32>::from(Maybe::<i32>::None), None);
}

#[test]
fn test_as_ref() {
    let maybe = Maybe::Some(5);
    assert_eq!(maybe.as_ref(), Maybe::Some(&5));
    assert_eq!(Maybe::<i32>::None.as_ref(), Maybe::None);
}

#[test]
fn test_display() {
    assert_eq!(format!("{}", Maybe::<i32>::None), "[]");
    assert_eq!(format!("{}", Maybe::Some(5)), "[5]");
}
