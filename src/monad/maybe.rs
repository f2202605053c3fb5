//! Pipeline helpers for `Option`.
//!
//! `Option` is the crate's Maybe: prisms return it and `traverse` callbacks
//! produce it. These functions cover the list and conversion combinators the
//! standard library leaves out.
//!
//! ```rust
//! use monoptic::monad::maybe;
//!
//! let parsed = maybe::traverse(["1", "2", "3"], |text| text.parse::<i32>().ok());
//! assert_eq!(parsed, Some(vec![1, 2, 3]));
//!
//! let present = maybe::concat([Some(1), None, Some(3)]);
//! assert_eq!(present, vec![1, 3]);
//! ```

use super::either::Either;

/// `Some(value)` when `predicate` holds.
pub fn lift_predicate<T, P>(value: T, predicate: P) -> Option<T>
where
    P: FnOnce(&T) -> bool,
{
    Some(value).filter(predicate)
}

/// All values, or `None` if any is missing.
///
/// Elements after the first `None` are not consumed.
pub fn sequence<T, I>(values: I) -> Option<Vec<T>>
where
    I: IntoIterator<Item = Option<T>>,
{
    values.into_iter().collect()
}

/// Applies `function` to every value; `None` as soon as one result is
/// missing.
pub fn traverse<T, U, I, F>(values: I, function: F) -> Option<Vec<U>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Option<U>,
{
    values.into_iter().map(function).collect()
}

/// Keeps the present values, in order.
pub fn concat<T, I>(values: I) -> Vec<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    values.into_iter().flatten().collect()
}

/// Applies `function` to every value and keeps the present results.
pub fn concat_map<T, U, I, F>(values: I, function: F) -> Vec<U>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Option<U>,
{
    values.into_iter().filter_map(function).collect()
}

/// `Right` for `Some`, `Left(left())` for `None`.
pub fn to_either<L, T, F>(option: Option<T>, left: F) -> Either<L, T>
where
    F: FnOnce() -> L,
{
    Either::from_option(option, left)
}

/// Discards the error of a `Result`.
pub fn from_result<T, E>(result: Result<T, E>) -> Option<T> {
    result.ok()
}
