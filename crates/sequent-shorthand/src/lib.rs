//! Shorthand - property-path and comparison strings compiled into evaluators.
//!
//! Enumerable operations accept either a callback or a shorthand string. This
//! crate is the string half: it compiles `"age"`, `"name.first"`, or
//! `"age > 20"` into a [`Shorthand`] that can look a value up on any element
//! implementing [`Fielded`], or test the element against an embedded
//! comparison.
//!
//! # Quick Start
//!
//! ```rust
//! use sequent_shorthand::{Fielded, Number, Shorthand, Value};
//!
//! struct User {
//!     name: String,
//!     age: i64,
//! }
//!
//! impl Fielded for User {
//!     fn field(&self, name: &str) -> Value<'_> {
//!         match name {
//!             "name" => Value::Str(&self.name),
//!             "age" => Value::Number(Number::I64(self.age)),
//!             _ => Value::None,
//!         }
//!     }
//! }
//!
//! let user = User { name: "Tobi".into(), age: 23 };
//!
//! let adult = Shorthand::compile("age > 20")?;
//! assert!(adult.matches(&user));
//!
//! let name = Shorthand::compile("name")?;
//! assert_eq!(name.lookup(&user).as_str(), Some("Tobi"));
//! # Ok::<(), sequent_shorthand::ShorthandError>(())
//! ```
//!
//! # Shorthand Syntax
//!
//! ```text
//! shorthand  = path [ op literal ]
//! path       = segment ( "." segment )*
//! op         = "==" | "=" | "!=" | ">" | ">=" | "<" | "<="
//! literal    = number | 'string' | "string" | true | false | null
//! ```
//!
//! A bare path predicate tests the looked-up value for truthiness
//! (JavaScript-style: `false`, `0`, NaN, the empty string, and absent values
//! are falsy). Dot-paths descend through [`Value::Nested`]; a missing segment
//! yields [`Value::None`] rather than an error.

mod error;
mod field;
mod op;
mod parse;
mod value;

// Re-export public API
pub use error::{Result, ShorthandError};
pub use field::{lookup, Fielded};
pub use op::Op;
pub use parse::{Literal, Shorthand};
pub use value::{Number, Nullish, OwnedValue, ToNumber, Value};
