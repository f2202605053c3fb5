//! Newtype wrappers that pick one of several lawful monoids for a type.
//!
//! An integer can be accumulated by addition ([`Sum`]), multiplication
//! ([`Product`]), or by keeping the extreme ([`Max`], [`Min`]). A boolean can be
//! accumulated with AND ([`All`]) or OR ([`Any`]). The wrapper selects the
//! instance; [`Wrapper`](super::Wrapper) bridges plain values in and out of it.
//!
//! [`Bounded`] supplies the identity elements `Max` and `Min` need.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! numeric_wrapper {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub struct $name<A>(pub A);

        impl<A> $name<A> {
            /// Wraps a value.
            #[inline]
            pub const fn new(value: A) -> Self {
                Self(value)
            }

            /// Consumes the wrapper and returns the inner value.
            #[inline]
            pub fn into_inner(self) -> A {
                self.0
            }

            /// Returns a reference to the inner value.
            #[inline]
            pub const fn as_inner(&self) -> &A {
                &self.0
            }
        }

        impl<A> From<A> for $name<A> {
            fn from(value: A) -> Self {
                Self::new(value)
            }
        }
    };
}

numeric_wrapper!(
    /// Additive monoid: `Sum(a).combine(Sum(b)) == Sum(a + b)`, identity `Sum(0)`.
    ///
    /// ```rust
    /// use monoptic::typeclass::{Monoid, Sum};
    ///
    /// assert_eq!(Sum::combine_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
    /// ```
    Sum
);

numeric_wrapper!(
    /// Multiplicative monoid: `Product(a).combine(Product(b)) == Product(a * b)`,
    /// identity `Product(1)`.
    Product
);

numeric_wrapper!(
    /// Keeps the larger value. Its identity is [`Bounded::MIN_VALUE`].
    Max
);

numeric_wrapper!(
    /// Keeps the smaller value. Its identity is [`Bounded::MAX_VALUE`].
    Min
);

/// Boolean conjunction monoid, identity `All(true)`.
///
/// ```rust
/// use monoptic::typeclass::{All, Monoid};
///
/// assert_eq!(All::combine_all(vec![All(true), All(false)]), All(false));
/// assert_eq!(All::combine_all(Vec::new()), All(true));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct All(pub bool);

/// Boolean disjunction monoid, identity `Any(false)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Any(pub bool);

impl From<bool> for All {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl From<bool> for Any {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

// =============================================================================
// Bounded
// =============================================================================

/// Types with a least and a greatest value.
///
/// ```rust
/// use monoptic::typeclass::Bounded;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// struct Percent(u8);
///
/// impl Bounded for Percent {
///     const MIN_VALUE: Self = Percent(0);
///     const MAX_VALUE: Self = Percent(100);
/// }
///
/// assert_eq!(Percent::MAX_VALUE, Percent(100));
/// ```
pub trait Bounded {
    /// The least value of the type.
    const MIN_VALUE: Self;

    /// The greatest value of the type.
    const MAX_VALUE: Self;
}

macro_rules! bounded_primitive {
    ($($primitive:ty),+ $(,)?) => {
        $(
            impl Bounded for $primitive {
                const MIN_VALUE: Self = Self::MIN;
                const MAX_VALUE: Self = Self::MAX;
            }
        )+
    };
}

bounded_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char);

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}

impl Bounded for () {
    const MIN_VALUE: Self = ();
    const MAX_VALUE: Self = ();
}
