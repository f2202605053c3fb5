//! Prism optics: partial accessors for optional data and variants.
//!
//! A Prism may fail to focus. `preview` returning `None` means "this value
//! does not inhabit this branch", which is an ordinary outcome rather than
//! an error. Prisms model optional fields, enum variants, and domain
//! boundaries: a key path whose segments can also demand a record tag, so
//! "a transaction whose payment is a credit card" can be expressed
//! separately from "a transaction that has a payment".
//!
//! # Laws
//!
//! 1. **PreviewReview**: `prism.preview(&prism.review(value)) == Some(value)`
//! 2. **ReviewPreview**: if `prism.preview(&source) == Some(a)` then
//!    `prism.set(source, a) == source`
//!
//! # Examples
//!
//! ```
//! use monoptic::optics::{Prism, Segment};
//! use monoptic::value::Value;
//!
//! let card_amount = Prism::path([
//!     Segment::key("payment"),
//!     Segment::tagged("CreditCard", "amount"),
//! ]);
//!
//! let charge = Value::map([(
//!     "payment",
//!     Value::record("CreditCard", [("amount", 100)]),
//! )]);
//! let check = Value::map([(
//!     "payment",
//!     Value::record("Check", [("amount", 100)]),
//! )]);
//!
//! assert_eq!(card_amount.preview(&charge), Some(Value::Int(100)));
//! assert_eq!(card_amount.preview(&check), None);
//! ```

use std::fmt;
use std::sync::Arc;

use super::compose::PrismCompose;
use super::traversal::Traversal;
use crate::typeclass::m_concat;
use crate::value::{Keyed, Value};

type PreviewFunction<S, A> = Arc<dyn Fn(&S) -> Option<A> + Send + Sync>;
type ReviewFunction<S, A> = Arc<dyn Fn(A) -> S + Send + Sync>;
type SetFunction<S, A> = Arc<dyn Fn(S, A) -> S + Send + Sync>;

/// A partial accessor focusing zero or one `A` inside an `S`.
///
/// Besides `preview`/`review`, a Prism knows how to write a value back into
/// an existing structure it matched (`set`). For sum-type prisms that is the
/// same as `review`; for key-based prisms it re-inserts the key while
/// keeping the rest of the structure.
pub struct Prism<S, A> {
    preview: PreviewFunction<S, A>,
    review: ReviewFunction<S, A>,
    set: SetFunction<S, A>,
}

impl<S: 'static, A: 'static> Prism<S, A> {
    /// Creates a Prism from a matcher and a constructor.
    ///
    /// Writing back through the prism rebuilds the structure with `review`.
    /// Use [`Prism::with_set`] when the focus lives inside a larger
    /// structure that must be preserved.
    ///
    /// # Example
    ///
    /// ```
    /// use monoptic::optics::Prism;
    ///
    /// let positive = Prism::new(
    ///     |number: &i32| (*number > 0).then_some(*number as u32),
    ///     |value: u32| value as i32,
    /// );
    ///
    /// assert_eq!(positive.preview(&5), Some(5));
    /// assert_eq!(positive.preview(&-5), None);
    /// assert_eq!(positive.review(7), 7);
    /// ```
    pub fn new<P, R>(preview: P, review: R) -> Self
    where
        P: Fn(&S) -> Option<A> + Send + Sync + 'static,
        R: Fn(A) -> S + Send + Sync + 'static,
    {
        let review: ReviewFunction<S, A> = Arc::new(review);
        let rebuild = Arc::clone(&review);
        Self {
            preview: Arc::new(preview),
            review,
            set: Arc::new(move |_, value| rebuild(value)),
        }
    }

    /// Replaces how a matched value is written back into its source.
    #[must_use]
    pub fn with_set<F>(self, set: F) -> Self
    where
        F: Fn(S, A) -> S + Send + Sync + 'static,
    {
        Self {
            set: Arc::new(set),
            ..self
        }
    }

    /// Attempts to focus. `None` means the source is outside this branch.
    pub fn preview(&self, source: &S) -> Option<A> {
        (self.preview)(source)
    }

    /// Builds a source from a focus value.
    pub fn review(&self, value: A) -> S {
        (self.review)(value)
    }

    /// Writes `value` back into a source this prism matched.
    ///
    /// The result is unspecified when `preview(&source)` is `None`.
    pub fn set(&self, source: S, value: A) -> S {
        (self.set)(source, value)
    }

    /// Returns whether the prism focuses in `source`.
    pub fn matches(&self, source: &S) -> bool {
        self.preview(source).is_some()
    }

    /// Applies `function` to the focus if present.
    ///
    /// Returns `None` when the prism misses.
    pub fn over<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
    {
        let value = self.preview(&source)?;
        Some(self.set(source, function(value)))
    }

    /// Applies `function` to the focus if present, otherwise returns the
    /// source unchanged.
    pub fn over_or_identity<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        match self.preview(&source) {
            Some(value) => self.set(source, function(value)),
            None => source,
        }
    }

    /// Sequences this prism (outer) with `inner`.
    ///
    /// `preview` short-circuits: `inner` is consulted only when `self`
    /// matched. `review` threads outward: `inner` builds first, then `self`.
    #[must_use]
    pub fn compose<B: 'static>(self, inner: Prism<A, B>) -> Prism<S, B> {
        let outer_preview = Arc::clone(&self.preview);
        let inner_preview = Arc::clone(&inner.preview);
        let outer_review = Arc::clone(&self.review);
        let inner_review = Arc::clone(&inner.review);
        Prism {
            preview: Arc::new(move |source| {
                outer_preview(source).and_then(|intermediate| inner_preview(&intermediate))
            }),
            review: Arc::new(move |value| outer_review(inner_review(value))),
            set: Arc::new(move |source, value| match (self.preview)(&source) {
                Some(intermediate) => {
                    let updated = (inner.set)(intermediate, value);
                    (self.set)(source, updated)
                }
                None => source,
            }),
        }
    }

    /// Wraps this prism as a single-focus [`Traversal`].
    #[must_use]
    pub fn to_traversal(self) -> Traversal<S, A> {
        Traversal::combine([self])
    }
}

impl<S: Clone + 'static> Prism<S, S> {
    /// The neutral prism: always matches, returns the source unchanged.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(|source: &S| Some(source.clone()), |value| value)
    }
}

impl<S> Prism<S, S::Value>
where
    S: Keyed + 'static,
    S::Value: 'static,
{
    /// Focuses an optional key. A missing key is a miss, never an error.
    ///
    /// `review` builds a structure holding only that key; `set` re-inserts
    /// the key into the matched structure.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use monoptic::optics::Prism;
    ///
    /// let nickname = Prism::<BTreeMap<String, String>, String>::key("nickname".to_string());
    ///
    /// assert_eq!(nickname.preview(&BTreeMap::new()), None);
    /// assert_eq!(
    ///     nickname.review("Bob".to_string()),
    ///     BTreeMap::from([("nickname".to_string(), "Bob".to_string())])
    /// );
    /// ```
    pub fn key(key: impl Into<S::Key>) -> Self {
        let key = key.into();
        let review_key = key.clone();
        let set_key = key.clone();
        Self::new(
            move |source: &S| source.fetch(&key).cloned(),
            move |value| S::singleton(review_key.clone(), value),
        )
        .with_set(move |source, value| source.insert(set_key.clone(), value))
    }
}

/// One step of a [`Prism::path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Focus a key, whatever the shape of the structure holding it.
    Key(String),
    /// Focus a key only when the structure holding it is a record carrying
    /// `tag`.
    Tagged {
        /// The record tag the structure must carry.
        tag: String,
        /// The key to focus inside it.
        key: String,
    },
}

impl Segment {
    /// A plain key segment.
    pub fn key(key: impl Into<String>) -> Self {
        Self::Key(key.into())
    }

    /// A key segment guarded by a record tag.
    pub fn tagged(tag: impl Into<String>, key: impl Into<String>) -> Self {
        Self::Tagged {
            tag: tag.into(),
            key: key.into(),
        }
    }

    /// The prism focusing this single step.
    pub fn into_prism(self) -> Prism<Value, Value> {
        match self {
            Self::Key(key) => Prism::<Value, Value>::key(key),
            Self::Tagged { tag, key } => Prism::tagged_key(tag, key),
        }
    }
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Self::key(key)
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<(&str, &str)> for Segment {
    fn from((tag, key): (&str, &str)) -> Self {
        Self::tagged(tag, key)
    }
}

impl Prism<Value, Value> {
    /// Matches records carrying `tag`, focusing the record itself.
    ///
    /// `review` is the identity.
    ///
    /// ```
    /// use monoptic::optics::Prism;
    /// use monoptic::value::Value;
    ///
    /// let check = Prism::record("Check");
    /// assert!(check.matches(&Value::record("Check", [("number", 12)])));
    /// assert!(!check.matches(&Value::record("CreditCard", [("number", 12)])));
    /// assert!(!check.matches(&Value::map([("number", 12)])));
    /// ```
    pub fn record(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self::new(
            move |source: &Value| source.has_tag(&tag).then(|| source.clone()),
            |value| value,
        )
    }

    /// Focuses `key` inside a record carrying `tag`.
    ///
    /// A record with a different tag and a structure without the key both
    /// miss. `review` builds a record with that tag holding only `key`.
    pub fn tagged_key(tag: impl Into<String>, key: impl Into<String>) -> Self {
        let tag = tag.into();
        let key = key.into();
        let review_tag = tag.clone();
        let review_key = key.clone();
        let set_key = key.clone();
        Self::new(
            move |source: &Value| {
                if source.has_tag(&tag) {
                    source.fetch(&key).cloned()
                } else {
                    None
                }
            },
            move |value| Value::record(review_tag.clone(), [(review_key.clone(), value)]),
        )
        .with_set(move |source, value| source.insert(set_key.clone(), value))
    }

    /// Focuses a nested optional location, one segment at a time.
    ///
    /// Every segment must match for the path to match. An empty path is the
    /// identity prism.
    pub fn path<T, I>(segments: I) -> Self
    where
        T: Into<Segment>,
        I: IntoIterator<Item = T>,
    {
        m_concat::<PrismCompose<Value>, _>(
            segments
                .into_iter()
                .map(|segment| segment.into().into_prism()),
        )
    }
}

impl<S, A> Clone for Prism<S, A> {
    fn clone(&self) -> Self {
        Self {
            preview: Arc::clone(&self.preview),
            review: Arc::clone(&self.review),
            set: Arc::clone(&self.set),
        }
    }
}

impl<S, A> fmt::Debug for Prism<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Prism").finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Prism<Value, Value>: Send, Sync, Clone);

/// Creates a [`Prism`] for a single-field variant of an enum.
///
/// ```
/// use monoptic::prism;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Shape {
///     Circle(f64),
///     Square(f64),
/// }
///
/// let circle = prism!(Shape, Circle);
///
/// assert_eq!(circle.preview(&Shape::Circle(2.0)), Some(2.0));
/// assert_eq!(circle.preview(&Shape::Square(2.0)), None);
/// assert_eq!(circle.review(1.0), Shape::Circle(1.0));
/// ```
#[macro_export]
macro_rules! prism {
    ($enum_type:ident, $variant:ident) => {
        $crate::optics::Prism::new(
            |source: &$enum_type| match source {
                $enum_type::$variant(value) => Some(::std::clone::Clone::clone(value)),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:ident < $($generic:tt),+ >, $variant:ident) => {
        $crate::optics::Prism::new(
            |source: &$enum_type<$($generic),+>| match source {
                $enum_type::$variant(value) => Some(::std::clone::Clone::clone(value)),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::$variant(value),
        )
    };
}
