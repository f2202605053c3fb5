//! Predicate combinators.
//!
//! A [`Predicate`] is a boolean test held as a value. Predicates combine with
//! `and`/`or`/`negate`, focus through optics, and fold as monoids:
//! [`PredicateAll`] (conjunction, empty accepts everything) and
//! [`PredicateAny`] (disjunction, empty rejects everything).
//!
//! # Example
//!
//! ```rust
//! use monoptic::optics::Prism;
//! use monoptic::predicate::{all_of, Predicate};
//! use monoptic::value::Value;
//!
//! let large = Predicate::new(|amount: &Value| amount.as_int().is_some_and(|cents| cents > 1_000));
//! let large_card_payment = all_of([
//!     Predicate::on_prism(Prism::record("CreditCard"), Predicate::always()),
//!     Predicate::on_prism(Prism::<Value, Value>::key("amount"), large),
//! ]);
//!
//! assert!(large_card_payment.test(&Value::record("CreditCard", [("amount", 5_000)])));
//! assert!(!large_card_payment.test(&Value::record("Check", [("amount", 5_000)])));
//! assert!(!large_card_payment.test(&Value::record("CreditCard", [("amount", 10)])));
//! ```

mod combinators;

pub use combinators::{Predicate, PredicateAll, PredicateAny, all_of, any_of, none_of};
