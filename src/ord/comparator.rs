//! The [`Comparator`] type and its [`OrdMonoid`] wrapper.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::optics::{Lens, Prism};
use crate::typeclass::{Monoid, Semigroup, Wrapper};

type CompareFunction<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// A total order over `T`, held as a value.
///
/// Comparators are built from a projection and an inner comparator
/// ([`Comparator::by`]), chained lexicographically ([`Comparator::then`]) and
/// reversed ([`Comparator::reverse`]). The natural order of `T: Ord` is the
/// default.
pub struct Comparator<T> {
    compare: CompareFunction<T>,
}

impl<T: 'static> Comparator<T> {
    /// Wraps a comparison function.
    pub fn new<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self {
            compare: Arc::new(compare),
        }
    }

    /// The comparator that finds every pair equal.
    ///
    /// This is the identity of [`Comparator::then`].
    #[must_use]
    pub fn equal() -> Self {
        Self::new(|_, _| Ordering::Equal)
    }

    /// Orders by a projection, compared with `inner`.
    pub fn by<U, F>(project: F, inner: Comparator<U>) -> Self
    where
        U: 'static,
        F: Fn(&T) -> U + Send + Sync + 'static,
    {
        Self::new(move |left, right| inner.compare(&project(left), &project(right)))
    }

    /// Orders by the natural order of a projected key.
    ///
    /// ```
    /// use monoptic::ord::Comparator;
    ///
    /// let by_length = Comparator::by_key(|word: &&str| word.len());
    /// assert!(by_length.lt(&"fig", &"apple"));
    /// ```
    pub fn by_key<K, F>(project: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self::new(move |left, right| project(left).cmp(&project(right)))
    }

    /// Orders by a required field.
    ///
    /// # Panics
    ///
    /// Comparing panics when `lens` cannot focus either operand.
    pub fn by_lens<A: 'static>(lens: Lens<T, A>, inner: Comparator<A>) -> Self {
        Self::by(move |source| lens.force_view(source), inner)
    }

    /// Orders by an optional field. Values where `prism` misses sort first.
    pub fn by_prism<A: 'static>(prism: Prism<T, A>, inner: Comparator<A>) -> Self {
        Self::new(
            move |left, right| match (prism.preview(left), prism.preview(right)) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (Some(left), Some(right)) => inner.compare(&left, &right),
            },
        )
    }

    /// Inverts the order.
    #[must_use]
    pub fn reverse(self) -> Self {
        Self::new(move |left, right| self.compare(left, right).reverse())
    }

    /// Breaks ties of `self` with `next`.
    ///
    /// `next` is consulted only when `self` finds the operands equal.
    ///
    /// ```
    /// use monoptic::ord::Comparator;
    ///
    /// let by_age = Comparator::by_key(|person: &(&str, u32)| person.1);
    /// let by_name = Comparator::by_key(|person: &(&str, u32)| person.0);
    /// let order = by_age.then(by_name);
    ///
    /// assert!(order.lt(&("Bea", 30), &("Al", 31)));
    /// assert!(order.lt(&("Al", 30), &("Bea", 30)));
    /// ```
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        Self::new(move |left, right| {
            self.compare(left, right)
                .then_with(|| next.compare(left, right))
        })
    }

    /// Compares two values.
    pub fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.compare)(left, right)
    }

    /// `left < right`.
    pub fn lt(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) == Ordering::Less
    }

    /// `left <= right`.
    pub fn le(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) != Ordering::Greater
    }

    /// `left > right`.
    pub fn gt(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) == Ordering::Greater
    }

    /// `left >= right`.
    pub fn ge(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) != Ordering::Less
    }
}

impl<T: Ord + 'static> Comparator<T> {
    /// The natural order of `T`.
    #[must_use]
    pub fn natural() -> Self {
        Self::new(T::cmp)
    }
}

impl<T: Ord + 'static> Default for Comparator<T> {
    fn default() -> Self {
        Self::natural()
    }
}

impl<T> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        Self {
            compare: Arc::clone(&self.compare),
        }
    }
}

impl<T> fmt::Debug for Comparator<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Comparator").finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Comparator<crate::value::Value>: Send, Sync, Clone);

/// Comparators under lexicographic chaining.
///
/// `combine` is [`Comparator::then`]: the first comparator with a decisive
/// verdict wins and later ones only break ties. `empty` is
/// [`Comparator::equal`].
///
/// ```
/// use monoptic::ord::{Comparator, OrdMonoid};
/// use monoptic::typeclass::m_concat;
///
/// let order = m_concat::<OrdMonoid<(i32, i32)>, _>([
///     Comparator::by_key(|pair: &(i32, i32)| pair.0),
///     Comparator::by_key(|pair: &(i32, i32)| pair.1).reverse(),
/// ]);
/// assert!(order.lt(&(1, 9), &(1, 2)));
/// ```
#[derive(Debug, Clone)]
pub struct OrdMonoid<T>(pub Comparator<T>);

impl<T: 'static> Semigroup for OrdMonoid<T> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.then(other.0))
    }
}

impl<T: 'static> Monoid for OrdMonoid<T> {
    fn empty() -> Self {
        Self(Comparator::equal())
    }
}

impl<T> Wrapper for OrdMonoid<T> {
    type Inner = Comparator<T>;

    fn wrap(inner: Comparator<T>) -> Self {
        Self(inner)
    }

    fn into_inner(self) -> Comparator<T> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::m_concat;
    use crate::value::Value;
    use rstest::rstest;

    #[rstest]
    #[case(1, 2, Ordering::Less)]
    #[case(2, 2, Ordering::Equal)]
    #[case(3, 2, Ordering::Greater)]
    fn test_natural_and_reverse(#[case] left: i32, #[case] right: i32, #[case] expected: Ordering) {
        assert_eq!(Comparator::natural().compare(&left, &right), expected);
        assert_eq!(
            Comparator::<i32>::default().reverse().compare(&left, &right),
            expected.reverse()
        );
    }

    #[test]
    fn test_equal_is_identity_of_then() {
        let natural = Comparator::<i32>::natural();
        let left = Comparator::equal().then(natural.clone());
        let right = natural.then(Comparator::equal());
        assert_eq!(left.compare(&1, &2), Ordering::Less);
        assert_eq!(right.compare(&2, &1), Ordering::Greater);
    }

    #[test]
    fn test_then_falls_through_only_on_ties() {
        let first = Comparator::by_key(|pair: &(i32, &str)| pair.0);
        let second = Comparator::by_key(|pair: &(i32, &str)| pair.1);
        let order = m_concat::<OrdMonoid<_>, _>([first, second]);

        assert_eq!(order.compare(&(1, "b"), &(1, "a")), Ordering::Greater);
        assert_eq!(order.compare(&(0, "b"), &(1, "a")), Ordering::Less);
    }

    #[test]
    fn test_empty_concat_finds_everything_equal() {
        let order = m_concat::<OrdMonoid<i32>, _>(Vec::new());
        assert_eq!(order.compare(&1, &100), Ordering::Equal);
    }

    #[test]
    fn test_by_lens_reads_required_field() {
        let by_age = Comparator::by_lens(
            Lens::<Value, Value>::key("age"),
            Comparator::by_key(|age: &Value| age.as_int()),
        );
        let young = Value::map([("age", 20)]);
        let old = Value::map([("age", 70)]);
        assert!(by_age.lt(&young, &old));
        assert!(by_age.ge(&old, &young));
    }

    #[test]
    #[should_panic(expected = "lens contract violated")]
    fn test_by_lens_panics_on_missing_field() {
        let by_age = Comparator::by_lens(
            Lens::<Value, Value>::key("age"),
            Comparator::by_key(|age: &Value| age.as_int()),
        );
        let _ = by_age.compare(&Value::map([("age", 20)]), &Value::map([("name", "x")]));
    }

    #[rstest]
    #[case(Value::map([("rank", 1)]), Value::map([("other", 1)]), Ordering::Greater)]
    #[case(Value::map([("other", 1)]), Value::map([("rank", 1)]), Ordering::Less)]
    #[case(Value::map([("other", 1)]), Value::map([("other", 2)]), Ordering::Equal)]
    #[case(Value::map([("rank", 1)]), Value::map([("rank", 2)]), Ordering::Less)]
    fn test_by_prism_sorts_misses_first(
        #[case] left: Value,
        #[case] right: Value,
        #[case] expected: Ordering,
    ) {
        let by_rank = Comparator::by_prism(
            Prism::<Value, Value>::key("rank"),
            Comparator::by_key(|rank: &Value| rank.as_int()),
        );
        assert_eq!(by_rank.compare(&left, &right), expected);
    }

    #[test]
    fn test_relational_helpers() {
        let natural = Comparator::<u8>::natural();
        assert!(natural.lt(&1, &2));
        assert!(natural.le(&2, &2));
        assert!(natural.gt(&3, &2));
        assert!(natural.ge(&2, &2));
        assert!(!natural.gt(&2, &2));
    }
}
