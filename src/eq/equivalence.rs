//! The [`Equivalence`] relation and its AND/OR monoids [`EqAll`] and [`EqAny`].

use std::fmt;
use std::sync::Arc;

use crate::optics::{Lens, Prism};
use crate::typeclass::{Monoid, Semigroup, Wrapper};

type EqualFunction<T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// An equality verdict over `T`, held as a value.
pub struct Equivalence<T> {
    equal: EqualFunction<T>,
}

impl<T: 'static> Equivalence<T> {
    /// Wraps an equality function.
    pub fn new<F>(equal: F) -> Self
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        Self {
            equal: Arc::new(equal),
        }
    }

    /// Finds every pair equal.
    #[must_use]
    pub fn always() -> Self {
        Self::new(|_, _| true)
    }

    /// Finds no pair equal.
    #[must_use]
    pub fn never() -> Self {
        Self::new(|_, _| false)
    }

    /// Compares a projection with `inner`.
    pub fn by<U, F>(project: F, inner: Equivalence<U>) -> Self
    where
        U: 'static,
        F: Fn(&T) -> U + Send + Sync + 'static,
    {
        Self::new(move |left, right| inner.eq(&project(left), &project(right)))
    }

    /// Compares a projected key with `==`.
    ///
    /// ```
    /// use monoptic::eq::Equivalence;
    ///
    /// let case_insensitive = Equivalence::by_key(|word: &String| word.to_lowercase());
    /// assert!(case_insensitive.eq(&"Rust".to_string(), &"rust".to_string()));
    /// ```
    pub fn by_key<K, F>(project: F) -> Self
    where
        K: PartialEq,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self::new(move |left, right| project(left) == project(right))
    }

    /// Compares a required field.
    ///
    /// # Panics
    ///
    /// Comparing panics when `lens` cannot focus either operand.
    pub fn by_lens<A: 'static>(lens: Lens<T, A>, inner: Equivalence<A>) -> Self {
        Self::by(move |source| lens.force_view(source), inner)
    }

    /// Compares an optional field.
    ///
    /// Two misses are equal; a miss and a hit are not.
    pub fn by_prism<A: 'static>(prism: Prism<T, A>, inner: Equivalence<A>) -> Self {
        Self::new(
            move |left, right| match (prism.preview(left), prism.preview(right)) {
                (None, None) => true,
                (Some(left), Some(right)) => inner.eq(&left, &right),
                _ => false,
            },
        )
    }

    /// Inverts the verdict.
    #[must_use]
    pub fn negate(self) -> Self {
        Self::new(move |left, right| !self.eq(left, right))
    }

    /// Equal only when both are. `other` is skipped once `self` says no.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::new(move |left, right| self.eq(left, right) && other.eq(left, right))
    }

    /// Equal when either is. `other` is skipped once `self` says yes.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::new(move |left, right| self.eq(left, right) || other.eq(left, right))
    }

    /// Returns the verdict for two values.
    pub fn eq(&self, left: &T, right: &T) -> bool {
        (self.equal)(left, right)
    }

    /// The negated verdict.
    pub fn not_eq(&self, left: &T, right: &T) -> bool {
        !self.eq(left, right)
    }
}

impl<T: PartialEq + 'static> Equivalence<T> {
    /// `==` on `T`.
    #[must_use]
    pub fn natural() -> Self {
        Self::new(T::eq)
    }
}

impl<T: PartialEq + 'static> Default for Equivalence<T> {
    fn default() -> Self {
        Self::natural()
    }
}

impl<T> Clone for Equivalence<T> {
    fn clone(&self) -> Self {
        Self {
            equal: Arc::clone(&self.equal),
        }
    }
}

impl<T> fmt::Debug for Equivalence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Equivalence").finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Equivalence<crate::value::Value>: Send, Sync, Clone);

/// Equivalences under conjunction: equal when every member says so.
///
/// `empty` finds everything equal.
#[derive(Debug, Clone)]
pub struct EqAll<T>(pub Equivalence<T>);

impl<T: 'static> Semigroup for EqAll<T> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.and(other.0))
    }
}

impl<T: 'static> Monoid for EqAll<T> {
    fn empty() -> Self {
        Self(Equivalence::always())
    }
}

impl<T> Wrapper for EqAll<T> {
    type Inner = Equivalence<T>;

    fn wrap(inner: Equivalence<T>) -> Self {
        Self(inner)
    }

    fn into_inner(self) -> Equivalence<T> {
        self.0
    }
}

/// Equivalences under disjunction: equal when any member says so.
///
/// `empty` finds nothing equal.
#[derive(Debug, Clone)]
pub struct EqAny<T>(pub Equivalence<T>);

impl<T: 'static> Semigroup for EqAny<T> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.or(other.0))
    }
}

impl<T: 'static> Monoid for EqAny<T> {
    fn empty() -> Self {
        Self(Equivalence::never())
    }
}

impl<T> Wrapper for EqAny<T> {
    type Inner = Equivalence<T>;

    fn wrap(inner: Equivalence<T>) -> Self {
        Self(inner)
    }

    fn into_inner(self) -> Equivalence<T> {
        self.0
    }
}
