//! Field access for host elements.
//!
//! Elements opt into string shorthands by implementing [`Fielded`], the
//! capability the resolver uses to read a (possibly nested) property off a
//! value at runtime.

use crate::value::Value;

/// Trait for element types whose fields can be read by name.
///
/// Returning [`Value::Nested`] lets dot-paths descend into sub-objects;
/// returning [`Value::None`] for unknown names keeps lookup permissive.
///
/// # Example
///
/// ```
/// use sequent_shorthand::{Fielded, Number, Value};
///
/// struct Name {
///     first: String,
/// }
///
/// struct User {
///     name: Name,
///     age: i64,
/// }
///
/// impl Fielded for Name {
///     fn field(&self, name: &str) -> Value<'_> {
///         match name {
///             "first" => Value::Str(&self.first),
///             _ => Value::None,
///         }
///     }
/// }
///
/// impl Fielded for User {
///     fn field(&self, name: &str) -> Value<'_> {
///         match name {
///             "name" => Value::Nested(&self.name),
///             "age" => Value::Number(Number::I64(self.age)),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Fielded {
    /// Returns the value of the named field, or [`Value::None`] if the
    /// element has no such field.
    fn field(&self, name: &str) -> Value<'_>;
}

/// Walks a dot-path through an element.
///
/// Any missing segment, or a non-nested value with path left to walk,
/// yields [`Value::None`].
pub fn lookup<'a>(item: &'a dyn Fielded, path: &[String]) -> Value<'a> {
    let Some((head, rest)) = path.split_first() else {
        return Value::None;
    };
    let mut current = item.field(head);
    for segment in rest {
        current = match current {
            Value::Nested(nested) => nested.field(segment),
            _ => return Value::None,
        };
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;

    struct Name {
        first: String,
        last: String,
    }

    struct User {
        name: Name,
        age: i64,
    }

    impl Fielded for Name {
        fn field(&self, name: &str) -> Value<'_> {
            match name {
                "first" => Value::Str(&self.first),
                "last" => Value::Str(&self.last),
                _ => Value::None,
            }
        }
    }

    impl Fielded for User {
        fn field(&self, name: &str) -> Value<'_> {
            match name {
                "name" => Value::Nested(&self.name),
                "age" => Value::Number(Number::I64(self.age)),
                _ => Value::None,
            }
        }
    }

    fn tobi() -> User {
        User {
            name: Name {
                first: "Tobi".to_string(),
                last: "Ferret".to_string(),
            },
            age: 2,
        }
    }

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn top_level_lookup() {
        let user = tobi();
        assert_eq!(lookup(&user, &path(&["age"])), Value::Number(Number::I64(2)));
    }

    #[test]
    fn nested_lookup() {
        let user = tobi();
        assert_eq!(lookup(&user, &path(&["name", "first"])), Value::Str("Tobi"));
        assert_eq!(
            lookup(&user, &path(&["name", "last"])),
            Value::Str("Ferret")
        );
    }

    #[test]
    fn missing_segments_yield_none() {
        let user = tobi();
        assert!(lookup(&user, &path(&["species"])).is_none());
        assert!(lookup(&user, &path(&["name", "middle"])).is_none());
        // Walking past a leaf is permissive, not an error.
        assert!(lookup(&user, &path(&["age", "digits"])).is_none());
        assert!(lookup(&user, &[]).is_none());
    }
}
