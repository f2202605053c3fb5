//! Composable equality.
//!
//! An [`Equivalence`] decides whether two values count as equal. Equivalences
//! project through optics and combine with AND ([`EqAll`]) or OR
//! ([`EqAny`]), so "same customer" can be spelled as "same id, or same email
//! and same name".
//!
//! ```
//! use monoptic::eq::{EqAll, EqAny, Equivalence};
//! use monoptic::optics::Lens;
//! use monoptic::typeclass::m_concat;
//! use monoptic::value::Value;
//!
//! let field = |key: &str| Equivalence::by_lens(Lens::<Value, Value>::key(key), Equivalence::natural());
//!
//! let same_customer = m_concat::<EqAny<Value>, _>([
//!     field("id"),
//!     m_concat::<EqAll<Value>, _>([field("email"), field("name")]),
//! ]);
//!
//! let ann = Value::map([("id", Value::Int(1)), ("email", "a@x".into()), ("name", "Ann".into())]);
//! let twin = Value::map([("id", Value::Int(2)), ("email", "a@x".into()), ("name", "Ann".into())]);
//! assert!(same_customer.eq(&ann, &twin));
//! ```

mod equivalence;
mod utils;

pub use equivalence::{EqAll, EqAny, Equivalence};
pub use utils::{contains, group, uniq};
