//! Optics for immutable data manipulation.
//!
//! Optics are composable accessors for immutable data. Each kind makes a
//! different promise about its focus:
//!
//! - [`Lens`]: the focus is **required**. Its absence is a contract
//!   violation, reported as an [`OpticError`].
//! - [`Prism`]: the focus is **optional**. A miss is `None`, a normal outcome.
//! - [`Iso`]: a lossless conversion; usable as either of the above.
//! - [`Traversal`]: an ordered list of Lens/Prism [`Focus`]es read and rebuilt
//!   together.
//!
//! # Optics Hierarchy
//!
//! ```text
//! Iso <: Lens
//! Iso <: Prism
//! Lens <: Traversal
//! Prism <: Traversal
//! ```
//!
//! # Example with Lens
//!
//! ```
//! use monoptic::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! let person_street = lens!(Person, address).compose(lens!(Address, street));
//!
//! let person = Person {
//!     name: "Alice".to_string(),
//!     address: Address {
//!         street: "Main St".to_string(),
//!         city: "Tokyo".to_string(),
//!     },
//! };
//!
//! assert_eq!(person_street.force_view(&person), "Main St");
//!
//! let updated = person_street.force_set(person, "Oak Ave".to_string());
//! assert_eq!(updated.address.street, "Oak Ave");
//! assert_eq!(updated.address.city, "Tokyo");
//! ```
//!
//! # Example with Prism
//!
//! ```
//! use monoptic::prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape {
//!     Circle(f64),
//!     Square(f64),
//! }
//!
//! let circle = prism!(Shape, Circle);
//!
//! assert_eq!(circle.preview(&Shape::Circle(5.0)), Some(5.0));
//! assert_eq!(circle.preview(&Shape::Square(3.0)), None);
//! assert_eq!(circle.review(10.0), Shape::Circle(10.0));
//! ```
//!
//! # Example with dynamic data
//!
//! ```
//! use monoptic::optics::{Prism, Traversal};
//! use monoptic::value::Value;
//!
//! let card_amount = Prism::path([("CreditCard", "amount")]);
//! let order = Value::record("CreditCard", [("amount", 100)]);
//!
//! let doubled = Traversal::combine([card_amount])
//!     .traverse(order, |amount| amount.as_int().map(|cents| Value::Int(cents * 2)));
//! assert_eq!(doubled, Ok(Some(Value::record("CreditCard", [("amount", 200)]))));
//! ```

mod compose;
mod error;
mod iso;
mod lens;
mod prism;
mod traversal;

pub use compose::{IsoCompose, LensCompose, PrismCompose, TraversalCombine};
pub use error::OpticError;
pub use iso::Iso;
pub use lens::Lens;
pub use prism::{Prism, Segment};
pub use traversal::{Focus, Traversal};
