//! Algebraic building blocks: semigroups, monoids and the wrappers that
//! select between instances.
//!
//! Every composable value in the crate is driven by the same contract:
//!
//! - [`Monoid::empty`]: the identity element;
//! - [`Semigroup::combine`]: the associative join;
//! - [`Wrapper::wrap`] / [`Wrapper::into_inner`]: bridging a raw domain value
//!   into the monoid representation and back.
//!
//! [`m_concat`] folds a list through any such instance, so comparators,
//! equivalences, predicates, optics and plain numbers all compose with one
//! utility.
//!
//! # Examples
//!
//! ```rust
//! use monoptic::typeclass::{m_concat, Monoid, Semigroup, Sum};
//!
//! assert_eq!(Sum(3).combine(Sum(4)), Sum(7));
//! assert_eq!(Sum::<i32>::empty(), Sum(0));
//! assert_eq!(m_concat::<Sum<i32>, _>(vec![3, 4]), 7);
//! ```

mod monoid;
mod semigroup;
mod wrapped;
mod wrappers;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrapped::{Wrapper, m_append, m_concat};
pub use wrappers::{All, Any, Bounded, Max, Min, Product, Sum};
