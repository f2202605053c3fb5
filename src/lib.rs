//! # monoptic
//!
//! Functional combinators for Rust built on a single monoid contract.
//!
//! ## Overview
//!
//! - **Optics**: [`Lens`](optics::Lens) for required fields,
//!   [`Prism`](optics::Prism) for optional fields and tagged variants,
//!   [`Iso`](optics::Iso) for lossless conversions, and
//!   [`Traversal`](optics::Traversal) for reading and rebuilding several foci
//!   at once.
//! - **Monoid composition**: [`Semigroup`](typeclass::Semigroup),
//!   [`Monoid`](typeclass::Monoid) and [`m_concat`](typeclass::m_concat) fold
//!   comparators, equivalences, predicates and optics the same way.
//! - **Ordering and equality**: lexicographic [`Comparator`](ord::Comparator)
//!   chains, AND/OR [`Equivalence`](eq::Equivalence) composition, and
//!   [`Predicate`](predicate::Predicate) combinators.
//! - **Pipelines**: [`Either`](monad::Either) and `Option` helpers.
//! - **Dynamic data**: [`Value`](value::Value), a keyed data model for
//!   key- and path-based optics.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Semigroup, Monoid and the wrapper instances
//! - `optics`: Lens, Prism, Iso, Traversal
//! - `ord`: Comparator and ordering utilities
//! - `eq`: Equivalence and equality utilities
//! - `predicate`: Predicate combinators
//! - `monad`: Either and Maybe helpers
//! - `serde`: `Serialize`/`Deserialize` for data types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use monoptic::prelude::*;
//! use monoptic::value::Value;
//!
//! let card = Prism::path([Segment::key("payment"), Segment::tagged("CreditCard", "amount")]);
//! let check = Prism::path([Segment::key("payment"), Segment::tagged("Check", "amount")]);
//! let double = |amount: Value| amount.as_int().map(|cents| Value::Int(cents * 2));
//!
//! let charge = Value::map([(
//!     "payment",
//!     Value::record("CreditCard", [("amount", 100)]),
//! )]);
//!
//! // Every focus must apply for a combined traversal to rebuild.
//! let both = Traversal::combine([card.clone(), check]);
//! assert_eq!(both.traverse(charge.clone(), double), Ok(None));
//!
//! let only_card = Traversal::combine([card]);
//! let doubled = only_card.traverse(charge, double).unwrap();
//! assert_eq!(
//!     doubled,
//!     Some(Value::map([("payment", Value::record("CreditCard", [("amount", 200)]))]))
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports every enabled module.
///
/// # Usage
///
/// ```rust
/// use monoptic::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    #[cfg(feature = "ord")]
    pub use crate::ord::*;

    #[cfg(feature = "eq")]
    pub use crate::eq::*;

    #[cfg(feature = "predicate")]
    pub use crate::predicate::*;

    #[cfg(feature = "monad")]
    pub use crate::monad::*;

    #[cfg(feature = "optics")]
    pub use crate::{lens, prism};
}

pub mod value;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "ord")]
pub mod ord;

#[cfg(feature = "eq")]
pub mod eq;

#[cfg(feature = "predicate")]
pub mod predicate;

#[cfg(feature = "monad")]
pub mod monad;
