//! Traversal optics: ordered aggregation of Lens and Prism foci.
//!
//! A Traversal holds a list of foci over the same source type. Each focus is
//! either a [`Lens`] (always present, a violation is an error) or a [`Prism`]
//! (may miss). Reads aggregate the foci in order; the write, [`traverse`],
//! is all-or-nothing.
//!
//! | operation  | Lens focus                 | Prism focus                  |
//! |------------|----------------------------|------------------------------|
//! | `to_list`  | always contributes         | contributes on hit           |
//! | `preview`  | hit (stops the search)     | hit stops, miss continues    |
//! | `has`      | as `preview`               | as `preview`                 |
//! | `traverse` | read, transform, write     | miss aborts the whole write  |
//!
//! In every operation a Lens violation is returned as `Err` immediately; a
//! Traversal never softens a Lens into an optional read.
//!
//! [`traverse`]: Traversal::traverse
//!
//! # Examples
//!
//! ```
//! use monoptic::optics::{Focus, Lens, Prism, Traversal};
//! use monoptic::value::Value;
//!
//! let names = Traversal::combine([
//!     Focus::from(Lens::<Value, Value>::key("name")),
//!     Focus::from(Prism::<Value, Value>::key("nickname")),
//! ]);
//!
//! let ann = Value::map([("name", "Ann")]);
//! assert_eq!(names.to_list(&ann), Ok(vec![Value::from("Ann")]));
//!
//! let bob = Value::map([("name", "Robert"), ("nickname", "Bob")]);
//! assert_eq!(
//!     names.to_list(&bob),
//!     Ok(vec![Value::from("Robert"), Value::from("Bob")])
//! );
//! ```

use std::fmt;

use smallvec::SmallVec;

use super::error::OpticError;
use super::lens::Lens;
use super::prism::Prism;

/// One focus of a [`Traversal`].
pub enum Focus<S, A> {
    /// A required focus.
    Lens(Lens<S, A>),
    /// An optional focus.
    Prism(Prism<S, A>),
}

impl<S: 'static, A: 'static> Focus<S, A> {
    /// Reads the focus: `Ok(None)` is a Prism miss, `Err` a Lens violation.
    ///
    /// # Errors
    ///
    /// Returns an [`OpticError`] when a Lens focus is absent.
    pub fn read(&self, source: &S) -> Result<Option<A>, OpticError> {
        match self {
            Self::Lens(lens) => lens.view(source).map(Some),
            Self::Prism(prism) => Ok(prism.preview(source)),
        }
    }

    /// Writes a value back through the focus.
    ///
    /// # Errors
    ///
    /// Returns an [`OpticError`] when a Lens focus is absent.
    pub fn write(&self, source: S, value: A) -> Result<S, OpticError> {
        match self {
            Self::Lens(lens) => lens.set(source, value),
            Self::Prism(prism) => Ok(prism.set(source, value)),
        }
    }

    /// Returns whether this is a required focus.
    pub const fn is_lens(&self) -> bool {
        matches!(self, Self::Lens(_))
    }
}

impl<S, A> From<Lens<S, A>> for Focus<S, A> {
    fn from(lens: Lens<S, A>) -> Self {
        Self::Lens(lens)
    }
}

impl<S, A> From<Prism<S, A>> for Focus<S, A> {
    fn from(prism: Prism<S, A>) -> Self {
        Self::Prism(prism)
    }
}

impl<S, A> Clone for Focus<S, A> {
    fn clone(&self) -> Self {
        match self {
            Self::Lens(lens) => Self::Lens(lens.clone()),
            Self::Prism(prism) => Self::Prism(prism.clone()),
        }
    }
}

impl<S, A> fmt::Debug for Focus<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lens(lens) => lens.fmt(formatter),
            Self::Prism(prism) => prism.fmt(formatter),
        }
    }
}

/// An ordered list of Lens/Prism foci read and rebuilt as one.
///
/// Order is significant: it fixes the order of [`Traversal::to_list`] and
/// which focus wins in [`Traversal::preview`].
pub struct Traversal<S, A> {
    foci: SmallVec<[Focus<S, A>; 4]>,
}

impl<S: 'static, A: 'static> Traversal<S, A> {
    /// The traversal with no foci, the identity for [`Traversal::append`].
    #[must_use]
    pub fn empty() -> Self {
        Self {
            foci: SmallVec::new(),
        }
    }

    /// Builds a traversal from optics, preserving their order.
    pub fn combine<O, I>(optics: I) -> Self
    where
        O: Into<Focus<S, A>>,
        I: IntoIterator<Item = O>,
    {
        Self {
            foci: optics.into_iter().map(Into::into).collect(),
        }
    }

    /// Adds one focus at the end.
    #[must_use]
    pub fn focus(mut self, optic: impl Into<Focus<S, A>>) -> Self {
        self.foci.push(optic.into());
        self
    }

    /// Concatenates the foci of `other` after those of `self`.
    #[must_use]
    pub fn append(mut self, other: Self) -> Self {
        self.foci.extend(other.foci);
        self
    }

    /// Number of foci.
    pub fn len(&self) -> usize {
        self.foci.len()
    }

    /// Returns whether there are no foci.
    pub fn is_empty(&self) -> bool {
        self.foci.is_empty()
    }

    /// The foci in order.
    pub fn foci(&self) -> &[Focus<S, A>] {
        &self.foci
    }

    /// Collects every focus that is present, in order.
    ///
    /// Each Lens contributes one value; each Prism contributes one value on a
    /// hit and nothing on a miss.
    ///
    /// # Errors
    ///
    /// Returns the first Lens violation encountered.
    pub fn to_list(&self, source: &S) -> Result<Vec<A>, OpticError> {
        self.foci
            .iter()
            .map(|focus| focus.read(source))
            .filter_map(Result::transpose)
            .collect()
    }

    /// Returns the first focus that is present.
    ///
    /// Foci after the first hit are not evaluated.
    ///
    /// # Errors
    ///
    /// Returns a Lens violation met before any hit.
    pub fn preview(&self, source: &S) -> Result<Option<A>, OpticError> {
        self.foci
            .iter()
            .map(|focus| focus.read(source))
            .find_map(Result::transpose)
            .transpose()
    }

    /// Returns whether any focus is present.
    ///
    /// # Errors
    ///
    /// Returns a Lens violation met before any hit.
    pub fn has(&self, source: &S) -> Result<bool, OpticError> {
        self.preview(source).map(|found| found.is_some())
    }

    /// Transforms every focus and rebuilds the structure, or changes nothing.
    ///
    /// Every focus is read first, so a Lens violation is reported even when
    /// another focus misses. If any Prism misses, `function` is never called
    /// and the result is `Ok(None)`. Otherwise each value is passed to
    /// `function` in order; if it returns `None` for any of them, the result
    /// is `Ok(None)` and nothing is written. Otherwise each new value is written
    /// back through the optic it came from and the rebuilt structure is
    /// returned. An empty traversal returns the source unchanged.
    ///
    /// Combining prisms for mutually exclusive branches (say, two payment
    /// kinds) therefore never rebuilds: a value can only be in one branch, so
    /// the other prism misses. Drive each branch with its own traversal to
    /// update "whichever applies".
    ///
    /// Foci are written in order, each into the result of the previous
    /// write. A prism built with [`Prism::new`] alone writes back with
    /// `review`, which replaces the whole source and drops earlier writes.
    /// Give such prisms a [`Prism::with_set`] that updates in place before
    /// combining them with other foci.
    ///
    /// # Errors
    ///
    /// Returns the first Lens violation encountered.
    ///
    /// # Example
    ///
    /// ```
    /// use monoptic::optics::{Prism, Traversal};
    /// use monoptic::value::Value;
    ///
    /// let tip = Traversal::combine([Prism::<Value, Value>::key("tip")]);
    /// let double = |value: Value| value.as_int().map(|amount| Value::Int(amount * 2));
    ///
    /// let bill = Value::map([("tip", 5)]);
    /// assert_eq!(tip.traverse(bill, double), Ok(Some(Value::map([("tip", 10)]))));
    /// assert_eq!(tip.traverse(Value::map([("total", 5)]), double), Ok(None));
    /// ```
    pub fn traverse<F>(&self, source: S, mut function: F) -> Result<Option<S>, OpticError>
    where
        F: FnMut(A) -> Option<A>,
    {
        let currents = self
            .foci
            .iter()
            .map(|focus| focus.read(&source))
            .collect::<Result<Vec<_>, _>>()?;
        if let Some(index) = currents.iter().position(Option::is_none) {
            tracing::trace!(focus = index, reason = "focus_missed", "traverse aborted");
            return Ok(None);
        }

        let mut updates = Vec::with_capacity(currents.len());
        for (index, current) in currents.into_iter().flatten().enumerate() {
            let Some(updated) = function(current) else {
                tracing::trace!(focus = index, reason = "rejected", "traverse aborted");
                return Ok(None);
            };
            updates.push(updated);
        }

        let rebuilt = self
            .foci
            .iter()
            .zip(updates)
            .try_fold(source, |accumulator, (focus, value)| {
                focus.write(accumulator, value)
            })?;
        tracing::trace!(foci = self.foci.len(), "traverse rebuilt");
        Ok(Some(rebuilt))
    }

    /// Applies `function` to every focus with the same all-or-nothing
    /// semantics as [`Traversal::traverse`].
    ///
    /// # Errors
    ///
    /// Returns the first Lens violation encountered.
    pub fn over<F>(&self, source: S, mut function: F) -> Result<Option<S>, OpticError>
    where
        F: FnMut(A) -> A,
    {
        self.traverse(source, |value| Some(function(value)))
    }
}

impl<S, A> Clone for Traversal<S, A> {
    fn clone(&self) -> Self {
        Self {
            foci: self.foci.clone(),
        }
    }
}

impl<S, A> fmt::Debug for Traversal<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Traversal")
            .field("foci", &self.foci)
            .finish()
    }
}

static_assertions::assert_impl_all!(
    Traversal<crate::value::Value, crate::value::Value>: Send, Sync, Clone
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Keyed, Value};
    use rstest::rstest;

    fn name() -> Lens<Value, Value> {
        Lens::key("name")
    }

    fn nickname() -> Prism<Value, Value> {
        Prism::key("nickname")
    }

    fn increment(value: Value) -> Option<Value> {
        value.as_int().map(|number| Value::Int(number + 1))
    }

    #[test]
    fn test_empty_traversal_is_identity() {
        let empty = Traversal::<Value, Value>::empty();
        let source = Value::map([("a", 1)]);

        assert!(empty.is_empty());
        assert_eq!(empty.to_list(&source), Ok(vec![]));
        assert_eq!(empty.preview(&source), Ok(None));
        assert_eq!(empty.has(&source), Ok(false));
        assert_eq!(empty.traverse(source.clone(), |_| None), Ok(Some(source)));
    }

    #[rstest]
    #[case(Value::map([("name", "Ann")]), vec![Value::from("Ann")])]
    #[case(
        Value::map([("name", "Robert"), ("nickname", "Bob")]),
        vec![Value::from("Robert"), Value::from("Bob")]
    )]
    fn test_to_list_mixed_foci(#[case] source: Value, #[case] expected: Vec<Value>) {
        let traversal = Traversal::combine([Focus::from(name()), Focus::from(nickname())]);
        assert_eq!(traversal.to_list(&source), Ok(expected));
    }

    #[test]
    fn test_preview_skips_misses_and_stops_at_first_hit() {
        let traversal = Traversal::combine([Focus::from(nickname()), Focus::from(name())]);
        let source = Value::map([("name", "Ann")]);
        assert_eq!(traversal.preview(&source), Ok(Some(Value::from("Ann"))));
    }

    #[test]
    fn test_preview_does_not_evaluate_lens_after_hit() {
        let traversal = Traversal::combine([
            Focus::from(nickname()),
            Focus::from(Lens::<Value, Value>::key("missing")),
        ]);
        let source = Value::map([("nickname", "Bob")]);
        assert_eq!(traversal.preview(&source), Ok(Some(Value::from("Bob"))));
    }

    #[test]
    fn test_lens_violation_propagates_from_every_read() {
        let traversal = Traversal::combine([Focus::from(Lens::<Value, Value>::key("missing"))]);
        let source = Value::map([("name", "Ann")]);
        let expected = OpticError::MissingKey {
            key: "missing".to_string(),
        };

        assert_eq!(traversal.to_list(&source), Err(expected.clone()));
        assert_eq!(traversal.preview(&source), Err(expected.clone()));
        assert_eq!(traversal.has(&source), Err(expected.clone()));
        assert_eq!(traversal.traverse(source, Some), Err(expected));
    }

    #[test]
    fn test_traverse_rebuilds_every_focus() {
        let traversal = Traversal::combine([
            Focus::from(Lens::<Value, Value>::key("a")),
            Focus::from(Prism::<Value, Value>::key("b")),
        ]);
        let source = Value::map([("a", 1), ("b", 10), ("c", 100)]);
        assert_eq!(
            traversal.traverse(source, increment),
            Ok(Some(Value::map([("a", 2), ("b", 11), ("c", 100)])))
        );
    }

    #[test]
    fn test_traverse_aborts_when_function_rejects() {
        let traversal = Traversal::combine([
            Prism::<Value, Value>::key("a"),
            Prism::<Value, Value>::key("b"),
        ]);
        let source = Value::map([("a", Value::Int(1)), ("b", Value::from("text"))]);
        assert_eq!(traversal.traverse(source, increment), Ok(None));
    }

    fn reviewed_b() -> Prism<Value, Value> {
        Prism::new(
            |source: &Value| source.fetch(&"b".to_string()).cloned(),
            |value| Value::map([("b", value)]),
        )
    }

    #[test]
    fn test_traverse_review_write_back_replaces_earlier_writes() {
        let traversal = Traversal::combine([Prism::<Value, Value>::key("a"), reviewed_b()]);
        let source = Value::map([("a", 1), ("b", 2)]);
        assert_eq!(
            traversal.traverse(source, increment),
            Ok(Some(Value::map([("b", 3)])))
        );
    }

    #[test]
    fn test_traverse_with_set_keeps_earlier_writes() {
        let in_place = reviewed_b().with_set(|source, value| source.insert("b".to_string(), value));
        let traversal = Traversal::combine([Prism::<Value, Value>::key("a"), in_place]);
        let source = Value::map([("a", 1), ("b", 2)]);
        assert_eq!(
            traversal.traverse(source, increment),
            Ok(Some(Value::map([("a", 2), ("b", 3)])))
        );
    }

    #[test]
    fn test_traverse_aborts_on_prism_miss() {
        let traversal = Traversal::combine([
            Prism::<Value, Value>::key("a"),
            Prism::<Value, Value>::key("b"),
        ]);
        assert_eq!(traversal.traverse(Value::map([("a", 1)]), increment), Ok(None));
    }

    #[test]
    fn test_traverse_reports_lens_violation_behind_a_miss() {
        let traversal = Traversal::combine([
            Focus::from(nickname()),
            Focus::from(Lens::<Value, Value>::key("missing")),
        ]);
        assert_eq!(
            traversal.traverse(Value::map([("name", "Ann")]), Some),
            Err(OpticError::MissingKey {
                key: "missing".to_string()
            })
        );
    }

    #[test]
    fn test_traverse_skips_function_when_any_focus_misses() {
        let traversal = Traversal::combine([
            Prism::<Value, Value>::key("a"),
            Prism::<Value, Value>::key("b"),
        ]);
        let mut calls = 0;
        let result = traversal.traverse(Value::map([("a", 1)]), |value| {
            calls += 1;
            Some(value)
        });

        assert_eq!(result, Ok(None));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_over_applies_total_function() {
        let traversal = Lens::<Value, Value>::key("a").to_traversal();
        assert_eq!(
            traversal.over(Value::map([("a", 1)]), |_| Value::Null),
            Ok(Some(Value::map([("a", Value::Null)])))
        );
    }

    #[test]
    fn test_append_and_focus_preserve_order() {
        let traversal = Traversal::combine([Prism::<Value, Value>::key("b")])
            .append(Traversal::combine([Prism::<Value, Value>::key("a")]))
            .focus(Lens::<Value, Value>::key("c"));
        let source = Value::map([("a", 1), ("b", 2), ("c", 3)]);

        assert_eq!(traversal.len(), 3);
        assert!(traversal.foci()[2].is_lens());
        assert_eq!(
            traversal.to_list(&source),
            Ok(vec![Value::Int(2), Value::Int(1), Value::Int(3)])
        );
    }

    #[test]
    fn test_debug_lists_foci() {
        let traversal = Traversal::combine([Focus::from(name()), Focus::from(nickname())]);
        let rendered = format!("{traversal:?}");
        assert!(rendered.contains("Lens"));
        assert!(rendered.contains("Prism"));
    }
}
