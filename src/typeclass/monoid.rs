//! Monoid - a semigroup with an identity element.
//!
//! # Laws
//!
//! For all `a`, `b`, `c`:
//!
//! ```text
//! T::empty().combine(a) == a                          // left identity
//! a.combine(T::empty()) == a                          // right identity
//! (a.combine(b)).combine(c) == a.combine(b.combine(c)) // associativity
//! ```
//!
//! The identity is what makes folding an empty list meaningful: an empty chain
//! of comparators compares everything as equal, an empty conjunction of
//! predicates accepts everything, an empty traversal focuses nothing.

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{All, Any, Bounded, Max, Min, Product, Sum};

/// A [`Semigroup`] with an identity element.
///
/// # Examples
///
/// ```rust
/// use monoptic::typeclass::{Monoid, Semigroup};
///
/// let value = String::from("hello");
/// assert_eq!(String::empty().combine(value.clone()), value);
/// assert_eq!(value.clone().combine(String::empty()), value);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Folds a sequence with `combine`, starting from [`Monoid::empty`].
    ///
    /// ```rust
    /// use monoptic::typeclass::Monoid;
    ///
    /// assert_eq!(String::combine_all(vec!["a".to_string(), "b".to_string()]), "ab");
    /// assert_eq!(String::combine_all(Vec::<String>::new()), "");
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value equals the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! product_identity {
    ($one:expr => $($primitive:ty),+ $(,)?) => {
        $(
            impl Monoid for Product<$primitive> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )+
    };
}

product_identity!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
product_identity!(1.0 => f32, f64);

impl<A: Ord + Bounded> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::MIN_VALUE)
    }
}

impl<A: Ord + Bounded> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::MAX_VALUE)
    }
}

impl Monoid for All {
    fn empty() -> Self {
        Self(true)
    }
}

impl Monoid for Any {
    fn empty() -> Self {
        Self(false)
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Monoid, B: Monoid, C: Monoid> Monoid for (A, B, C) {
    fn empty() -> Self {
        (A::empty(), B::empty(), C::empty())
    }
}
