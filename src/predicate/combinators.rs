//! The [`Predicate`] type, its boolean combinators and the
//! [`PredicateAll`]/[`PredicateAny`] monoids.

use std::fmt;
use std::sync::Arc;

use crate::optics::{Lens, Prism};
use crate::typeclass::{Monoid, Semigroup, Wrapper, m_concat};

type TestFunction<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// A boolean test over `T`.
pub struct Predicate<T> {
    test: TestFunction<T>,
}

impl<T: 'static> Predicate<T> {
    /// Wraps a test function.
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            test: Arc::new(test),
        }
    }

    /// Accepts everything.
    #[must_use]
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    /// Rejects everything.
    #[must_use]
    pub fn never() -> Self {
        Self::new(|_| false)
    }

    /// Runs the test.
    pub fn test(&self, value: &T) -> bool {
        (self.test)(value)
    }

    /// Both tests must pass. `other` is skipped once `self` fails.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::new(move |value| self.test(value) && other.test(value))
    }

    /// Either test must pass. `other` is skipped once `self` passes.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::new(move |value| self.test(value) || other.test(value))
    }

    /// Inverts the test.
    #[must_use]
    pub fn negate(self) -> Self {
        Self::new(move |value| !self.test(value))
    }

    /// Tests a required field.
    ///
    /// # Panics
    ///
    /// Testing panics when `lens` cannot focus the value.
    pub fn on_lens<A: 'static>(lens: Lens<T, A>, inner: Predicate<A>) -> Self {
        Self::new(move |value| inner.test(&lens.force_view(value)))
    }

    /// Tests an optional field. A miss fails the test.
    pub fn on_prism<A: 'static>(prism: Prism<T, A>, inner: Predicate<A>) -> Self {
        Self::new(move |value| prism.preview(value).is_some_and(|focus| inner.test(&focus)))
    }

    /// Keeps the values that pass, in order.
    pub fn filter(&self, values: impl IntoIterator<Item = T>) -> Vec<T> {
        values.into_iter().filter(|value| self.test(value)).collect()
    }
}

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            test: Arc::clone(&self.test),
        }
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Predicate").finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Predicate<crate::value::Value>: Send, Sync, Clone);

/// Predicates under conjunction.
#[derive(Debug, Clone)]
pub struct PredicateAll<T>(pub Predicate<T>);

impl<T: 'static> Semigroup for PredicateAll<T> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.and(other.0))
    }
}

impl<T: 'static> Monoid for PredicateAll<T> {
    fn empty() -> Self {
        Self(Predicate::always())
    }
}

impl<T> Wrapper for PredicateAll<T> {
    type Inner = Predicate<T>;

    fn wrap(inner: Predicate<T>) -> Self {
        Self(inner)
    }

    fn into_inner(self) -> Predicate<T> {
        self.0
    }
}

/// Predicates under disjunction.
#[derive(Debug, Clone)]
pub struct PredicateAny<T>(pub Predicate<T>);

impl<T: 'static> Semigroup for PredicateAny<T> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.or(other.0))
    }
}

impl<T: 'static> Monoid for PredicateAny<T> {
    fn empty() -> Self {
        Self(Predicate::never())
    }
}

impl<T> Wrapper for PredicateAny<T> {
    type Inner = Predicate<T>;

    fn wrap(inner: Predicate<T>) -> Self {
        Self(inner)
    }

    fn into_inner(self) -> Predicate<T> {
        self.0
    }
}

/// Passes when every predicate passes. Empty input passes.
pub fn all_of<T: 'static>(predicates: impl IntoIterator<Item = Predicate<T>>) -> Predicate<T> {
    m_concat::<PredicateAll<T>, _>(predicates)
}

/// Passes when any predicate passes. Empty input fails.
pub fn any_of<T: 'static>(predicates: impl IntoIterator<Item = Predicate<T>>) -> Predicate<T> {
    m_concat::<PredicateAny<T>, _>(predicates)
}

/// Passes when no predicate passes. Empty input passes.
pub fn none_of<T: 'static>(predicates: impl IntoIterator<Item = Predicate<T>>) -> Predicate<T> {
    any_of(predicates).negate()
}
