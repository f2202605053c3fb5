//! Iso optics for lossless conversions.
//!
//! An Iso converts between two representations of the same information. It is
//! the strongest optic: every Iso is also a Lens and a Prism.
//!
//! # Laws
//!
//! 1. **ViewReview**: `iso.review(iso.view(source)) == source`
//! 2. **ReviewView**: `iso.view(iso.review(value)) == value`
//!
//! # Examples
//!
//! ```
//! use monoptic::optics::Iso;
//!
//! let chars = Iso::new(
//!     |text: String| text.chars().collect::<Vec<_>>(),
//!     |chars: Vec<char>| chars.into_iter().collect::<String>(),
//! );
//!
//! let reversed = chars.over("hello".to_string(), |mut chars| {
//!     chars.reverse();
//!     chars
//! });
//! assert_eq!(reversed, "olleh");
//! ```

use std::fmt;
use std::sync::Arc;

use super::lens::Lens;
use super::prism::Prism;

type ConvertFunction<S, A> = Arc<dyn Fn(S) -> A + Send + Sync>;

/// A bidirectional conversion between `S` and `A` that loses nothing.
pub struct Iso<S, A> {
    view: ConvertFunction<S, A>,
    review: ConvertFunction<A, S>,
}

impl<S: 'static, A: 'static> Iso<S, A> {
    /// Creates an Iso from a forward and a backward conversion.
    pub fn new<V, R>(view: V, review: R) -> Self
    where
        V: Fn(S) -> A + Send + Sync + 'static,
        R: Fn(A) -> S + Send + Sync + 'static,
    {
        Self {
            view: Arc::new(view),
            review: Arc::new(review),
        }
    }

    /// Converts forward.
    pub fn view(&self, source: S) -> A {
        (self.view)(source)
    }

    /// Converts backward.
    pub fn review(&self, value: A) -> S {
        (self.review)(value)
    }

    /// Converts, applies `function`, and converts back.
    pub fn over<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        self.review(function(self.view(source)))
    }

    /// Swaps the two directions.
    #[must_use]
    pub fn reverse(self) -> Iso<A, S> {
        Iso {
            view: self.review,
            review: self.view,
        }
    }

    /// Sequences this Iso (outer) with `inner`.
    ///
    /// ```
    /// use monoptic::optics::Iso;
    ///
    /// let widen = Iso::new(
    ///     |narrow: i32| i64::from(narrow),
    ///     |wide: i64| i32::try_from(wide).unwrap_or_default(),
    /// );
    /// let negate = Iso::new(|value: i64| -value, |value: i64| -value);
    ///
    /// let both = widen.compose(negate);
    /// assert_eq!(both.view(5), -5_i64);
    /// assert_eq!(both.review(-5), 5_i32);
    /// ```
    #[must_use]
    pub fn compose<B: 'static>(self, inner: Iso<A, B>) -> Iso<S, B> {
        let outer_view = self.view;
        let outer_review = self.review;
        let inner_view = inner.view;
        let inner_review = inner.review;
        Iso {
            view: Arc::new(move |source| inner_view(outer_view(source))),
            review: Arc::new(move |value| outer_review(inner_review(value))),
        }
    }
}

impl<S: Clone + 'static, A: 'static> Iso<S, A> {
    /// Views this Iso as a Lens whose `set` ignores the old source.
    #[must_use]
    pub fn to_lens(self) -> Lens<S, A> {
        let view = self.view;
        let review = self.review;
        Lens::new(
            move |source: &S| view(source.clone()),
            move |_, value| review(value),
        )
    }

    /// Views this Iso as a Prism that always matches.
    #[must_use]
    pub fn to_prism(self) -> Prism<S, A> {
        let view = self.view;
        let review = self.review;
        Prism::new(move |source: &S| Some(view(source.clone())), move |value| review(value))
    }
}

impl<S: 'static> Iso<S, S> {
    /// The Iso that converts nothing.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(|source| source, |value| value)
    }
}

impl<S, A> Clone for Iso<S, A> {
    fn clone(&self) -> Self {
        Self {
            view: Arc::clone(&self.view),
            review: Arc::clone(&self.review),
        }
    }
}

impl<S, A> fmt::Debug for Iso<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Iso").finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Iso<String, Vec<char>>: Send, Sync, Clone);
