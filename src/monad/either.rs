//! Either: a right-biased value that is one of two types.
//!
//! `Right` carries the successful value and keeps a pipeline running;
//! `Left` carries the failure and short-circuits it. The list combinators
//! come in two flavours:
//!
//! - [`sequence`]/[`traverse`] stop at the first `Left`;
//! - [`validate`]/[`traverse_all`] visit everything and collect every `Left`.
//!
//! # Examples
//!
//! ```rust
//! use monoptic::monad::Either;
//!
//! fn parse(text: &str) -> Either<String, i32> {
//!     text.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! let total = parse("40")
//!     .flat_map(|left| parse("2").map(|right| left + right))
//!     .filter_or_else(|sum| *sum > 0, |_| "not positive".to_string());
//! assert_eq!(total, Either::Right(42));
//!
//! assert!(parse("x").flat_map(|_| parse("2")).is_left());
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::typeclass::Semigroup;

/// A value that is either `Left(L)` (failure) or `Right(R)` (success).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Either<L, R> {
    /// The failure branch.
    Left(L),
    /// The success branch.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` for `Left`.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` for `Right`.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// The `Left` value, if any.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// The `Right` value, if any.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Transforms the `Right` value.
    ///
    /// ```rust
    /// use monoptic::monad::Either;
    ///
    /// let value: Either<String, i32> = Either::Right(21);
    /// assert_eq!(value.map(|number| number * 2), Either::Right(42));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Transforms the `Left` value.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms whichever value is present.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Chains a computation that may fail.
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Collapses both branches into one value.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Exchanges the branches.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Turns a `Right` that fails `predicate` into a `Left`.
    #[inline]
    #[must_use]
    pub fn filter_or_else<P, F>(self, predicate: P, otherwise: F) -> Self
    where
        P: FnOnce(&R) -> bool,
        F: FnOnce(R) -> L,
    {
        match self {
            Self::Right(value) if predicate(&value) => Self::Right(value),
            Self::Right(value) => Self::Left(otherwise(value)),
            left @ Self::Left(_) => left,
        }
    }

    // =========================================================================
    // Recovery
    // =========================================================================

    /// The `Right` value, or `default` on `Left`.
    #[inline]
    pub fn get_or_else(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    /// Keeps a `Right`, or tries an alternative built from the `Left`.
    #[inline]
    pub fn or_else<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Construction and Conversion
    // =========================================================================

    /// `Right(value)` when `predicate` holds, otherwise `Left` built from it.
    ///
    /// ```rust
    /// use monoptic::monad::Either;
    ///
    /// let adult = |age: u32| Either::lift_predicate(age, |age| *age >= 18, |age| format!("{age} is too young"));
    /// assert_eq!(adult(30), Either::Right(30));
    /// assert_eq!(adult(9), Either::Left("9 is too young".to_string()));
    /// ```
    #[inline]
    pub fn lift_predicate<P, F>(value: R, predicate: P, otherwise: F) -> Self
    where
        P: FnOnce(&R) -> bool,
        F: FnOnce(R) -> L,
    {
        Self::Right(value).filter_or_else(predicate, otherwise)
    }

    /// `Right` for `Some`, `Left(left())` for `None`.
    #[inline]
    pub fn from_option<F>(option: Option<R>, left: F) -> Self
    where
        F: FnOnce() -> L,
    {
        option.map_or_else(|| Self::Left(left()), Self::Right)
    }

    /// Converts to a `Result`: `Right` is `Ok`, `Left` is `Err`.
    ///
    /// # Errors
    ///
    /// Returns the `Left` value as the error.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        self.into()
    }
}

// =============================================================================
// List Combinators
// =============================================================================

/// Collects every `Right`, or returns the first `Left`.
///
/// Elements after the first `Left` are not consumed.
pub fn sequence<L, R, I>(values: I) -> Either<L, Vec<R>>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    values.into_iter().map(Either::into_result).collect::<Result<Vec<_>, _>>().into()
}

/// Applies `function` to every value, stopping at the first `Left`.
pub fn traverse<T, L, R, I, F>(values: I, function: F) -> Either<L, Vec<R>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Either<L, R>,
{
    sequence(values.into_iter().map(function))
}

/// Collects every `Right`, or every `Left` if there is at least one.
///
/// ```rust
/// use monoptic::monad::either::{validate, Either};
///
/// let checks: Vec<Either<&str, i32>> = vec![Either::Left("a"), Either::Right(1), Either::Left("b")];
/// assert_eq!(validate(checks), Either::Left(vec!["a", "b"]));
/// ```
pub fn validate<L, R, I>(values: I) -> Either<Vec<L>, Vec<R>>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    let (lefts, rights) = values.into_iter().fold(
        (Vec::new(), Vec::new()),
        |(mut lefts, mut rights), value| {
            match value {
                Either::Left(error) => lefts.push(error),
                Either::Right(success) => rights.push(success),
            }
            (lefts, rights)
        },
    );
    if lefts.is_empty() {
        Either::Right(rights)
    } else {
        Either::Left(lefts)
    }
}

/// Applies `function` to every value and accumulates every `Left`.
pub fn traverse_all<T, L, R, I, F>(values: I, function: F) -> Either<Vec<L>, Vec<R>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Either<L, R>,
{
    validate(values.into_iter().map(function))
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Combines `Right` values; the first `Left` wins.
impl<L, R: Semigroup> Semigroup for Either<L, R> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Right(left), Self::Right(right)) => Self::Right(left.combine(right)),
            (Self::Left(error), _) | (_, Self::Left(error)) => Self::Left(error),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}
