//! Fail-fast assertions and a first-error combinator
//!
//! `must` and `must_zero` are for places where an error can only mean a bug,
//! e.g. encoding a value that is known to be serializable. They panic instead
//! of returning.

use std::fmt;

/// Return the `Ok` value or panic with the error.
#[track_caller]
pub fn must<T, E>(result: Result<T, E>) -> T
where
    E: fmt::Debug,
{
    match result {
        Ok(value) => value,
        Err(err) => panic!("must: {err:?}"),
    }
}

/// Panic unless `value` equals its type's default.
///
/// Pass `result.err()` to assert that a fallible call went through.
#[track_caller]
pub fn must_zero<T>(value: T)
where
    T: Default + PartialEq + fmt::Debug,
{
    if value != T::default() {
        panic!("must_zero: {value:?}");
    }
}

/// Run `f` and record its error in `slot` unless `slot` already holds one.
///
/// Meant for cleanup steps (closing a file, flushing a writer) that run after
/// the main work and must not hide the error that work produced.
pub fn try_record<E, F>(f: F, slot: &mut Result<(), E>)
where
    F: FnOnce() -> Result<(), E>,
{
    let outcome = f();
    if slot.is_ok() {
        *slot = outcome;
    }
}
