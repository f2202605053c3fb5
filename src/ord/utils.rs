//! Ordering helpers that take an explicit [`Comparator`].

use super::comparator::Comparator;

/// Returns the greater of two values; `right` when they are equal.
pub fn max<T: 'static>(comparator: &Comparator<T>, left: T, right: T) -> T {
    std::cmp::max_by(left, right, |a, b| comparator.compare(a, b))
}

/// Returns the lesser of two values; `left` when they are equal.
pub fn min<T: 'static>(comparator: &Comparator<T>, left: T, right: T) -> T {
    std::cmp::min_by(left, right, |a, b| comparator.compare(a, b))
}

/// Restricts `value` to the interval `[low, high]`.
///
/// # Panics
///
/// Panics if `low` is greater than `high`.
pub fn clamp<T: 'static>(comparator: &Comparator<T>, value: T, low: T, high: T) -> T {
    assert!(
        comparator.le(&low, &high),
        "clamp requires low <= high"
    );
    if comparator.lt(&value, &low) {
        low
    } else if comparator.gt(&value, &high) {
        high
    } else {
        value
    }
}

/// Returns whether `low <= value <= high`.
pub fn between<T: 'static>(comparator: &Comparator<T>, value: &T, low: &T, high: &T) -> bool {
    comparator.ge(value, low) && comparator.le(value, high)
}

/// Sorts in place. The sort is stable.
///
/// ```
/// use monoptic::ord::{sort, Comparator};
///
/// let mut words = vec!["pear", "fig", "apple"];
/// sort(&mut words, &Comparator::by_key(|word: &&str| word.len()));
/// assert_eq!(words, ["fig", "pear", "apple"]);
/// ```
pub fn sort<T: 'static>(values: &mut [T], comparator: &Comparator<T>) {
    values.sort_by(|left, right| comparator.compare(left, right));
}

/// Sorts in place by a projection compared with `comparator`. The sort is
/// stable.
pub fn sort_by<T, K, F>(values: &mut [T], project: F, comparator: &Comparator<K>)
where
    K: 'static,
    F: Fn(&T) -> K,
{
    values.sort_by(|left, right| comparator.compare(&project(left), &project(right)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(5, 1, 9, 5)]
    #[case(0, 1, 9, 1)]
    #[case(10, 1, 9, 9)]
    fn test_clamp(#[case] value: i32, #[case] low: i32, #[case] high: i32, #[case] expected: i32) {
        assert_eq!(clamp(&Comparator::natural(), value, low, high), expected);
    }

    #[test]
    #[should_panic(expected = "clamp requires low <= high")]
    fn test_clamp_rejects_inverted_bounds() {
        let _ = clamp(&Comparator::natural(), 1, 9, 1);
    }

    #[test]
    fn test_max_and_min_keep_order_on_ties() {
        let by_first = Comparator::by_key(|pair: &(i32, char)| pair.0);
        assert_eq!(max(&by_first, (1, 'a'), (1, 'b')), (1, 'b'));
        assert_eq!(min(&by_first, (1, 'a'), (1, 'b')), (1, 'a'));
        assert_eq!(max(&by_first, (2, 'a'), (1, 'b')), (2, 'a'));
    }

    #[rstest]
    #[case(1, true)]
    #[case(5, true)]
    #[case(0, false)]
    #[case(6, false)]
    fn test_between(#[case] value: i32, #[case] expected: bool) {
        assert_eq!(between(&Comparator::natural(), &value, &1, &5), expected);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut people = vec![("Cy", 30), ("Al", 20), ("Bo", 30), ("Di", 20)];
        sort(&mut people, &Comparator::by_key(|person: &(&str, i32)| person.1));
        assert_eq!(people, [("Al", 20), ("Di", 20), ("Cy", 30), ("Bo", 30)]);
    }

    #[test]
    fn test_sort_by_projection_descending() {
        let mut words = vec!["bb", "a", "ccc"];
        sort_by(&mut words, |word| word.len(), &Comparator::natural().reverse());
        assert_eq!(words, ["ccc", "bb", "a"]);
    }
}
