//! Lens optics: total accessors for required fields.
//!
//! A Lens focuses exactly one part of a structure and asserts that the part
//! exists. Reading or writing through a Lens whose focus is absent is a
//! contract violation, reported as an [`OpticError`]; absence is never a
//! normal outcome (use a [`Prism`](super::Prism) for optional data).
//!
//! # Laws
//!
//! 1. **GetPut**: `lens.set(source, lens.view(&source)?) == source`
//! 2. **PutGet**: `lens.view(&lens.set(source, value)?)? == value`
//! 3. **PutPut**: `lens.set(lens.set(source, v1)?, v2) == lens.set(source, v2)`
//!
//! # Examples
//!
//! ```
//! use monoptic::optics::Lens;
//! use monoptic::value::Value;
//!
//! let city = Lens::<Value, Value>::path(["address", "city"]);
//! let user = Value::map([("address", Value::map([("city", "Osaka")]))]);
//!
//! assert_eq!(city.view(&user), Ok(Value::from("Osaka")));
//!
//! let moved = city.set(user, Value::from("Kyoto")).unwrap();
//! assert_eq!(city.view(&moved), Ok(Value::from("Kyoto")));
//! ```

use std::fmt;
use std::sync::Arc;

use super::compose::LensCompose;
use super::error::OpticError;
use super::traversal::Traversal;
use crate::typeclass::m_concat;
use crate::value::Keyed;

type ViewFunction<S, A> = Arc<dyn Fn(&S) -> Result<A, OpticError> + Send + Sync>;
type SetFunction<S, A> = Arc<dyn Fn(S, A) -> Result<S, OpticError> + Send + Sync>;

/// A total accessor focusing one `A` inside an `S`.
///
/// Lenses are immutable values. Cloning shares the underlying accessors, and
/// a Lens can be used from several threads at once.
pub struct Lens<S, A> {
    view: ViewFunction<S, A>,
    set: SetFunction<S, A>,
}

impl<S: 'static, A: 'static> Lens<S, A> {
    /// Creates a Lens from an accessor and a mutator.
    ///
    /// No validation is performed: the caller is responsible for the
    /// GetPut/PutGet laws.
    ///
    /// # Example
    ///
    /// ```
    /// use monoptic::optics::Lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x = Lens::new(|point: &Point| point.x, |point: Point, x| Point { x, ..point });
    /// assert_eq!(x.force_view(&Point { x: 1, y: 2 }), 1);
    /// ```
    pub fn new<V, St>(view: V, set: St) -> Self
    where
        V: Fn(&S) -> A + Send + Sync + 'static,
        St: Fn(S, A) -> S + Send + Sync + 'static,
    {
        Self {
            view: Arc::new(move |source| Ok(view(source))),
            set: Arc::new(move |source, value| Ok(set(source, value))),
        }
    }

    /// Creates a Lens from accessors that can detect a structural violation.
    pub fn try_new<V, St>(view: V, set: St) -> Self
    where
        V: Fn(&S) -> Result<A, OpticError> + Send + Sync + 'static,
        St: Fn(S, A) -> Result<S, OpticError> + Send + Sync + 'static,
    {
        Self {
            view: Arc::new(view),
            set: Arc::new(set),
        }
    }

    /// Reads the focus.
    ///
    /// # Errors
    ///
    /// Returns an [`OpticError`] when the focus does not exist in `source`.
    pub fn view(&self, source: &S) -> Result<A, OpticError> {
        (self.view)(source)
    }

    /// Replaces the focus, returning the updated structure.
    ///
    /// # Errors
    ///
    /// Returns an [`OpticError`] when the focus does not exist in `source`.
    pub fn set(&self, source: S, value: A) -> Result<S, OpticError> {
        (self.set)(source, value)
    }

    /// Applies `function` to the focus.
    ///
    /// # Errors
    ///
    /// Returns an [`OpticError`] when the focus does not exist in `source`.
    pub fn over<F>(&self, source: S, function: F) -> Result<S, OpticError>
    where
        F: FnOnce(A) -> A,
    {
        let current = self.view(&source)?;
        self.set(source, function(current))
    }

    /// Reads the focus, treating a violation as fatal.
    ///
    /// # Panics
    ///
    /// Panics with the [`OpticError`] message when the focus does not exist.
    pub fn force_view(&self, source: &S) -> A {
        self.view(source).unwrap_or_else(|error| panic!("{error}"))
    }

    /// Replaces the focus, treating a violation as fatal.
    ///
    /// # Panics
    ///
    /// Panics with the [`OpticError`] message when the focus does not exist.
    pub fn force_set(&self, source: S, value: A) -> S {
        self.set(source, value)
            .unwrap_or_else(|error| panic!("{error}"))
    }

    /// Applies `function` to the focus, treating a violation as fatal.
    ///
    /// # Panics
    ///
    /// Panics with the [`OpticError`] message when the focus does not exist.
    pub fn force_over<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        self.over(source, function)
            .unwrap_or_else(|error| panic!("{error}"))
    }

    /// Sequences this lens (outer) with `inner`.
    ///
    /// `view` reads the outer focus, then the inner focus within it. `set`
    /// reads the outer focus, updates it through `inner`, and writes it back
    /// through `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use monoptic::optics::Lens;
    /// use monoptic::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Address { street: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Person { address: Address }
    ///
    /// let street = lens!(Person, address).compose(lens!(Address, street));
    /// let person = Person { address: Address { street: "Main St".to_string() } };
    ///
    /// let moved = street.force_set(person, "Oak Ave".to_string());
    /// assert_eq!(moved.address.street, "Oak Ave");
    /// ```
    #[must_use]
    pub fn compose<B: 'static>(self, inner: Lens<A, B>) -> Lens<S, B> {
        let outer_view = Arc::clone(&self.view);
        let inner_view = Arc::clone(&inner.view);
        Lens {
            view: Arc::new(move |source| {
                let intermediate = outer_view(source)?;
                inner_view(&intermediate)
            }),
            set: Arc::new(move |source, value| {
                let intermediate = (self.view)(&source)?;
                let updated = (inner.set)(intermediate, value)?;
                (self.set)(source, updated)
            }),
        }
    }

    /// Wraps this lens as a single-focus [`Traversal`].
    #[must_use]
    pub fn to_traversal(self) -> Traversal<S, A> {
        Traversal::combine([self])
    }
}

impl<S: Clone + 'static> Lens<S, S> {
    /// The neutral lens: `view` returns the whole, `set` replaces it.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(S::clone, |_, value| value)
    }
}

impl<S> Lens<S, S::Value>
where
    S: Keyed + 'static,
    S::Value: 'static,
{
    /// Focuses a required key of a keyed structure.
    ///
    /// Reading or writing a key that is absent is a contract violation.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use monoptic::optics::{Lens, OpticError};
    ///
    /// let age = Lens::<HashMap<&str, u32>, u32>::key("age");
    /// let person = HashMap::from([("age", 41)]);
    ///
    /// assert_eq!(age.view(&person), Ok(41));
    /// assert_eq!(
    ///     age.view(&HashMap::new()),
    ///     Err(OpticError::MissingKey { key: "age".to_string() })
    /// );
    /// ```
    pub fn key(key: impl Into<S::Key>) -> Self {
        let key = key.into();
        let set_key = key.clone();
        Self::try_new(
            move |source: &S| {
                source
                    .fetch(&key)
                    .cloned()
                    .ok_or_else(|| violation(source, &key))
            },
            move |source: S, value| {
                if source.contains(&set_key) {
                    Ok(source.insert(set_key.clone(), value))
                } else {
                    Err(violation(&source, &set_key))
                }
            },
        )
    }
}

impl<S> Lens<S, S>
where
    S: Keyed<Value = S> + Clone + 'static,
{
    /// Focuses a nested required key by composing one key lens per segment.
    ///
    /// An empty path is the identity lens.
    pub fn path<K, I>(keys: I) -> Self
    where
        K: Into<S::Key>,
        I: IntoIterator<Item = K>,
    {
        m_concat::<LensCompose<S>, _>(keys.into_iter().map(Self::key))
    }
}

pub(crate) fn violation<S: Keyed>(source: &S, key: &S::Key) -> OpticError {
    tracing::debug!(key = %key, kind = source.kind(), "lens focus missing");
    if source.is_structure() {
        OpticError::MissingKey {
            key: key.to_string(),
        }
    } else {
        OpticError::NotAStructure {
            key: key.to_string(),
            found: source.kind(),
        }
    }
}

impl<S, A> Clone for Lens<S, A> {
    fn clone(&self) -> Self {
        Self {
            view: Arc::clone(&self.view),
            set: Arc::clone(&self.set),
        }
    }
}

impl<S, A> fmt::Debug for Lens<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Lens").finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Lens<crate::value::Value, crate::value::Value>: Send, Sync, Clone);

/// Creates a [`Lens`] for a field of a Rust struct.
///
/// The setter moves the source and assigns the field in place. The field type
/// must be `Clone`, since `view` returns an owned copy.
///
/// ```
/// use monoptic::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x = lens!(Point, x);
/// let point = Point { x: 10, y: 20 };
///
/// assert_eq!(x.force_view(&point), 10);
/// assert_eq!(x.force_set(point, 100), Point { x: 100, y: 20 });
/// ```
#[macro_export]
macro_rules! lens {
    ($source:ty, $field:ident) => {
        $crate::optics::Lens::new(
            |source: &$source| ::std::clone::Clone::clone(&source.$field),
            |mut source: $source, value| {
                source.$field = value;
                source
            },
        )
    };
}
