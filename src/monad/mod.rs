//! Maybe and Either pipelines.
//!
//! - [`maybe`]: list and conversion helpers over `Option`, the result type of
//!   prism lookups and of `Traversal::traverse`.
//! - [`either`]: the right-biased [`Either`] with short-circuiting and
//!   accumulating list combinators.

pub mod either;
pub mod maybe;

pub use either::Either;
