//! Composable orderings.
//!
//! A [`Comparator`] is a total order held as a value, so it can be built from
//! optics, reversed, and chained. Chaining is lexicographic: the first
//! comparator with a decisive verdict wins and later ones only break ties.
//! [`OrdMonoid`] exposes that chaining to [`m_concat`](crate::typeclass::m_concat).
//!
//! # Examples
//!
//! ```
//! use monoptic::optics::Lens;
//! use monoptic::ord::{sort, Comparator, OrdMonoid};
//! use monoptic::typeclass::m_concat;
//! use monoptic::value::Value;
//!
//! let by_int = || Comparator::by_key(|value: &Value| value.as_int());
//! let order = m_concat::<OrdMonoid<Value>, _>([
//!     Comparator::by_lens(Lens::<Value, Value>::key("priority"), by_int()),
//!     Comparator::by_lens(Lens::<Value, Value>::key("id"), by_int()),
//! ]);
//!
//! let mut tasks = vec![
//!     Value::map([("priority", 2), ("id", 1)]),
//!     Value::map([("priority", 1), ("id", 9)]),
//!     Value::map([("priority", 1), ("id", 3)]),
//! ];
//! sort(&mut tasks, &order);
//!
//! let id = Lens::<Value, Value>::key("id");
//! let ids: Vec<_> = tasks.iter().map(|task| id.force_view(task)).collect();
//! assert_eq!(ids, [Value::Int(3), Value::Int(9), Value::Int(1)]);
//! ```

mod comparator;
mod utils;

pub use comparator::{Comparator, OrdMonoid};
pub use utils::{between, clamp, max, min, sort, sort_by};
