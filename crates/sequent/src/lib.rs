//! Sequent - chainable enumerable operations for any type that owns an
//! ordered sequence.
//!
//! Sequent attaches a fixed set of traversal, filtering, and aggregation
//! operations (`each`, `map`, `select`, `reject`, `unique`, `find`,
//! `reduce`, `max`, `sum`, `in_groups_of`, ...) to any host type, without
//! inheritance: a host implements the two slot accessors of [`Enumerable`]
//! and gets the whole operation set as provided methods. [`Sequence`] is
//! the ready-made plain host, and `Vec<T>` is registered as a host too.
//!
//! Predicate and accessor arguments are either closures `(value, index)` or
//! shorthand strings (`"age > 20"`, `"name.first"`) compiled by the
//! [`shorthand`] crate; string shorthands require the element type to
//! implement [`Fielded`].
//!
//! # Quick Start
//!
//! ```rust
//! use sequent::{Enumerable, Sequence};
//!
//! let mut nums = Sequence::range(1, 10);
//! nums.select(|n: &i64, _: usize| n % 2 == 0)?
//!     .map(|n: &i64, _: usize| n * n)?;
//! assert_eq!(nums.array(), &[4, 16, 36, 64, 100]);
//! assert_eq!(nums.sum(), 220.0);
//! # Ok::<(), sequent::EnumerableError>(())
//! ```
//!
//! # String shorthands
//!
//! ```rust
//! use sequent::{Enumerable, Fielded, Number, Sequence, Value};
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
//! let mut users = Sequence::from_vec(vec![
//!     User { name: "Tobi".into(), age: 23 },
//!     User { name: "Loki".into(), age: 14 },
//! ]);
//!
//! users.select("age > 20")?;
//! assert_eq!(users.len(), 1);
//! assert_eq!(users.sum_by("age")?, 23.0);
//! # Ok::<(), sequent::EnumerableError>(())
//! ```
//!
//! # Mutating vs. persistent
//!
//! Transforming operations are destructive: they overwrite the host's slot
//! and return `&mut Self` for chaining. The persistent alternative is
//! [`map_to`](Enumerable::map_to) (and cloning the host first for the
//! rest). [`in_groups_of`](Enumerable::in_groups_of) always returns a new
//! host because its element type changes.
//!
//! # Threading
//!
//! Operations are synchronous and run to completion; transforming
//! operations read-then-overwrite the slot non-atomically, so a host must
//! not be shared across threads without external synchronization.

mod arg;
pub mod dedupe;
mod enumerable;
mod error;
mod sequence;

/// The shorthand resolver, re-exported for direct use.
pub use sequent_shorthand as shorthand;

// Re-export public API
pub use arg::{
    FnArg, FnKey, FnMapper, FnPredicate, IntoKey, IntoMapper, IntoPredicate, Key, Mapper,
    PathKey, PathMapper, PathPredicate, Predicate, StrArg,
};
pub use enumerable::Enumerable;
pub use error::{EnumerableError, Result};
pub use sequence::Sequence;

// The parts of the resolver most callers need by name.
pub use sequent_shorthand::{
    Fielded, Literal, Nullish, Number, Op, OwnedValue, Shorthand, ShorthandError, ToNumber, Value,
};

// `grep` takes a compiled regex.
pub use regex::Regex;
