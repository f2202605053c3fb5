//! Bridging plain values into a monoid and folding them.
//!
//! A comparator, a lens or a number does not say *how* it should be combined;
//! the monoid instance does. [`Wrapper`] lifts a raw value into the chosen
//! instance and back out again, so a single fold ([`m_concat`]) drives every
//! composition in the crate:
//!
//! 1. start from `M::empty()`;
//! 2. for each raw value, `accumulator = accumulator.combine(M::wrap(value))`;
//! 3. return `accumulator.into_inner()`.
//!
//! ```rust
//! use monoptic::typeclass::{m_concat, Max, Sum};
//!
//! assert_eq!(m_concat::<Sum<i32>, _>(vec![1, 2, 3]), 6);
//! assert_eq!(m_concat::<Max<i32>, _>(vec![1, 7, 3]), 7);
//! assert_eq!(m_concat::<Sum<i32>, _>(Vec::new()), 0);
//! ```

use super::monoid::Monoid;
use super::wrappers::{All, Any, Max, Min, Product, Sum};

/// A monoid representation of some raw domain value.
///
/// `Self::wrap(raw).into_inner() == raw` must hold.
pub trait Wrapper: Sized {
    /// The raw value carried by the wrapper.
    type Inner;

    /// Lifts a raw value into the monoid.
    fn wrap(inner: Self::Inner) -> Self;

    /// Extracts the raw value.
    fn into_inner(self) -> Self::Inner;
}

/// Combines two raw values through the monoid `M`.
///
/// ```rust
/// use monoptic::typeclass::{m_append, All};
///
/// assert!(!m_append::<All>(true, false));
/// ```
pub fn m_append<M>(left: M::Inner, right: M::Inner) -> M::Inner
where
    M: Monoid + Wrapper,
{
    M::wrap(left).combine(M::wrap(right)).into_inner()
}

/// Folds raw values through the monoid `M`, returning the unwrapped result.
///
/// An empty input yields `M::empty().into_inner()`.
pub fn m_concat<M, I>(values: I) -> M::Inner
where
    M: Monoid + Wrapper,
    I: IntoIterator<Item = M::Inner>,
{
    values
        .into_iter()
        .fold(M::empty(), |accumulator, value| accumulator.combine(M::wrap(value)))
        .into_inner()
}

macro_rules! newtype_wrapper {
    ($($name:ident),+) => {
        $(
            impl<A> Wrapper for $name<A> {
                type Inner = A;

                fn wrap(inner: A) -> Self {
                    Self(inner)
                }

                fn into_inner(self) -> A {
                    self.0
                }
            }
        )+
    };
}

newtype_wrapper!(Sum, Product, Max, Min);

impl Wrapper for All {
    type Inner = bool;

    fn wrap(inner: bool) -> Self {
        Self(inner)
    }

    fn into_inner(self) -> bool {
        self.0
    }
}

impl Wrapper for Any {
    type Inner = bool;

    fn wrap(inner: bool) -> Self {
        Self(inner)
    }

    fn into_inner(self) -> bool {
        self.0
    }
}

/// Strings accumulate by concatenation and need no wrapping.
impl Wrapper for String {
    type Inner = Self;

    fn wrap(inner: Self) -> Self {
        inner
    }

    fn into_inner(self) -> Self {
        self
    }
}

/// Lists accumulate by concatenation and need no wrapping.
impl<T> Wrapper for Vec<T> {
    type Inner = Self;

    fn wrap(inner: Self) -> Self {
        inner
    }

    fn into_inner(self) -> Self {
        self
    }
}
