//! Monoid instances that let optics be folded with [`m_concat`].
//!
//! | wrapper               | empty              | combine                     |
//! |-----------------------|--------------------|-----------------------------|
//! | [`LensCompose`]       | `Lens::identity`   | `outer.compose(inner)`      |
//! | [`PrismCompose`]      | `Prism::identity`  | `outer.compose(inner)`      |
//! | [`IsoCompose`]        | `Iso::identity`    | `outer.compose(inner)`      |
//! | [`TraversalCombine`]  | `Traversal::empty` | foci of left, then of right |
//!
//! [`m_concat`]: crate::typeclass::m_concat
//!
//! # Examples
//!
//! ```
//! use monoptic::optics::{Lens, LensCompose};
//! use monoptic::typeclass::m_concat;
//! use monoptic::value::Value;
//!
//! let deep = m_concat::<LensCompose<Value>, _>([
//!     Lens::key("a"),
//!     Lens::key("b"),
//!     Lens::key("c"),
//! ]);
//! let source = Value::map([("a", Value::map([("b", Value::map([("c", 1)]))]))]);
//! assert_eq!(deep.view(&source), Ok(Value::Int(1)));
//! ```

use super::iso::Iso;
use super::lens::Lens;
use super::prism::Prism;
use super::traversal::Traversal;
use crate::typeclass::{Monoid, Semigroup, Wrapper};

/// Lenses from `S` to `S` under sequential composition.
#[derive(Debug, Clone)]
pub struct LensCompose<S>(pub Lens<S, S>);

impl<S: Clone + 'static> Semigroup for LensCompose<S> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.compose(other.0))
    }
}

impl<S: Clone + 'static> Monoid for LensCompose<S> {
    fn empty() -> Self {
        Self(Lens::identity())
    }
}

impl<S> Wrapper for LensCompose<S> {
    type Inner = Lens<S, S>;

    fn wrap(inner: Lens<S, S>) -> Self {
        Self(inner)
    }

    fn into_inner(self) -> Lens<S, S> {
        self.0
    }
}

/// Prisms from `S` to `S` under sequential composition.
#[derive(Debug, Clone)]
pub struct PrismCompose<S>(pub Prism<S, S>);

impl<S: Clone + 'static> Semigroup for PrismCompose<S> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.compose(other.0))
    }
}

impl<S: Clone + 'static> Monoid for PrismCompose<S> {
    fn empty() -> Self {
        Self(Prism::identity())
    }
}

impl<S> Wrapper for PrismCompose<S> {
    type Inner = Prism<S, S>;

    fn wrap(inner: Prism<S, S>) -> Self {
        Self(inner)
    }

    fn into_inner(self) -> Prism<S, S> {
        self.0
    }
}

/// Isos from `S` to `S` under sequential composition.
#[derive(Debug, Clone)]
pub struct IsoCompose<S>(pub Iso<S, S>);

impl<S: 'static> Semigroup for IsoCompose<S> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.compose(other.0))
    }
}

impl<S: 'static> Monoid for IsoCompose<S> {
    fn empty() -> Self {
        Self(Iso::identity())
    }
}

impl<S> Wrapper for IsoCompose<S> {
    type Inner = Iso<S, S>;

    fn wrap(inner: Iso<S, S>) -> Self {
        Self(inner)
    }

    fn into_inner(self) -> Iso<S, S> {
        self.0
    }
}

/// Traversals under concatenation of their foci.
#[derive(Debug, Clone)]
pub struct TraversalCombine<S, A>(pub Traversal<S, A>);

impl<S: 'static, A: 'static> Semigroup for TraversalCombine<S, A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.append(other.0))
    }
}

impl<S: 'static, A: 'static> Monoid for TraversalCombine<S, A> {
    fn empty() -> Self {
        Self(Traversal::empty())
    }
}

impl<S, A> Wrapper for TraversalCombine<S, A> {
    type Inner = Traversal<S, A>;

    fn wrap(inner: Traversal<S, A>) -> Self {
        Self(inner)
    }

    fn into_inner(self) -> Traversal<S, A> {
        self.0
    }
}
