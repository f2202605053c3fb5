//! Collection helpers driven by an [`Equivalence`].

use super::equivalence::Equivalence;

/// Removes duplicates, keeping the first of each equivalent run of values
/// in input order.
///
/// ```
/// use monoptic::eq::{uniq, Equivalence};
///
/// let words = vec!["Apple", "apple", "Pear", "APPLE"];
/// let same = Equivalence::by_key(|word: &&str| word.to_lowercase());
/// assert_eq!(uniq(words, &same), ["Apple", "Pear"]);
/// ```
pub fn uniq<T: 'static>(values: impl IntoIterator<Item = T>, equivalence: &Equivalence<T>) -> Vec<T> {
    values.into_iter().fold(Vec::new(), |mut kept, value| {
        if !contains(&kept, &value, equivalence) {
            kept.push(value);
        }
        kept
    })
}

/// Returns whether any element is equivalent to `target`.
pub fn contains<T: 'static>(values: &[T], target: &T, equivalence: &Equivalence<T>) -> bool {
    values.iter().any(|value| equivalence.eq(value, target))
}

/// Partitions values into groups of equivalent elements.
///
/// Groups appear in order of their first element, and each group keeps
/// input order. A value joins the first group whose first element it is
/// equivalent to.
pub fn group<T: 'static>(
    values: impl IntoIterator<Item = T>,
    equivalence: &Equivalence<T>,
) -> Vec<Vec<T>> {
    let mut groups: Vec<Vec<T>> = Vec::new();
    for value in values {
        match groups
            .iter()
            .position(|group| group.first().is_some_and(|first| equivalence.eq(first, &value)))
        {
            Some(index) => groups[index].push(value),
            None => groups.push(vec![value]),
        }
    }
    groups
}
