//! Runtime values extracted from host elements.
//!
//! The [`Value`] enum is what a [`Fielded`] element hands back when asked for
//! a field: a borrowed scalar, a nested object to descend into, or
//! [`Value::None`] for anything absent. [`OwnedValue`] is its owned
//! counterpart, produced when a plucked value must outlive the element it
//! came from.

use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::field::Fielded;

/// Runtime value of a field, borrowed from the source element.
///
/// # Example
///
/// ```
/// use sequent_shorthand::{Fielded, Number, Value};
///
/// struct Pet {
///     name: String,
///     age: i64,
/// }
///
/// impl Fielded for Pet {
///     fn field(&self, name: &str) -> Value<'_> {
///         match name {
///             "name" => Value::Str(&self.name),
///             "age" => Value::Number(Number::I64(self.age)),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
#[derive(Clone, Copy)]
pub enum Value<'a> {
    /// String value (borrowed).
    Str(&'a str),
    /// Numeric value.
    Number(Number),
    /// Boolean value.
    Bool(bool),
    /// A nested object; dot-paths descend through it.
    Nested(&'a dyn Fielded),
    /// Field not present, null, or unsupported.
    None,
}

impl<'a> Value<'a> {
    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// JavaScript-style truthiness, used by bare-path predicates.
    ///
    /// `false`, `0`, NaN, the empty string, and absent values are falsy;
    /// everything else (including nested objects) is truthy.
    pub fn truthy(&self) -> bool {
        match self {
            Value::Str(s) => !s.is_empty(),
            Value::Number(n) => {
                let f = n.to_f64();
                f != 0.0 && !f.is_nan()
            }
            Value::Bool(b) => *b,
            Value::Nested(_) => true,
            Value::None => false,
        }
    }

    /// Numeric coercion for aggregation (`sum`, `max`, `avg`).
    ///
    /// Numbers pass through, bools become 1 or 0, strings parse as f64,
    /// and everything else (including nested objects) is NaN. Arithmetic
    /// addition, never concatenation.
    pub fn to_number(&self) -> Number {
        match self {
            Value::Number(n) => *n,
            Value::Bool(b) => Number::I64(i64::from(*b)),
            Value::Str(s) => Number::F64(s.trim().parse().unwrap_or(f64::NAN)),
            Value::Nested(_) | Value::None => Number::F64(f64::NAN),
        }
    }

    /// Detaches this value from its source element.
    ///
    /// Nested objects flatten to [`OwnedValue::Null`]; only leaf values
    /// survive the conversion.
    pub fn to_owned_value(&self) -> OwnedValue {
        match self {
            Value::Str(s) => OwnedValue::Str((*s).to_string()),
            Value::Number(n) => OwnedValue::Number(*n),
            Value::Bool(b) => OwnedValue::Bool(*b),
            Value::Nested(_) | Value::None => OwnedValue::Null,
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Nested(_) => f.write_str("Nested(..)"),
            Value::None => f.write_str("None"),
        }
    }
}

impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a.compare(*b) == Some(Ordering::Equal),
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::None, Value::None) => true,
            // Nested objects have no identity to compare.
            _ => false,
        }
    }
}

/// Numeric value supporting the common numeric types.
///
/// Numbers are stored in one of three variants to preserve precision:
/// `I64` for signed integers, `U64` for unsigned integers, and `F64` for
/// floating point. Mixed-type comparisons convert to f64, so `I64(3)` and
/// `F64(3.0)` are equal.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64 for arithmetic and comparison.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers, handling mixed variants.
    ///
    /// Returns `None` only when a NaN is involved.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.compare(*other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{n}"),
            Number::U64(n) => write!(f, "{n}"),
            Number::F64(n) => write!(f, "{n}"),
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match *self {
            Number::I64(n) => serializer.serialize_i64(n),
            Number::U64(n) => serializer.serialize_u64(n),
            Number::F64(n) => serializer.serialize_f64(n),
        }
    }
}

macro_rules! number_from {
    ($variant:ident as $repr:ty: $($t:ty),+) => {
        $(impl From<$t> for Number {
            fn from(n: $t) -> Self {
                Number::$variant(n as $repr)
            }
        })+
    };
}

number_from!(I64 as i64: i8, i16, i32, i64, isize);
number_from!(U64 as u64: u8, u16, u32, u64, usize);
number_from!(F64 as f64: f32, f64);

/// Owned counterpart of [`Value`], for plucked results that outlive their
/// source element.
///
/// Serializes as a plain JSON scalar (`Null` as JSON `null`).
#[derive(Debug, Clone, PartialEq)]
pub enum OwnedValue {
    /// String value.
    Str(String),
    /// Numeric value.
    Number(Number),
    /// Boolean value.
    Bool(bool),
    /// Absent value.
    Null,
}

impl OwnedValue {
    /// JavaScript-style truthiness; see [`Value::truthy`].
    pub fn truthy(&self) -> bool {
        match self {
            OwnedValue::Str(s) => !s.is_empty(),
            OwnedValue::Number(n) => {
                let f = n.to_f64();
                f != 0.0 && !f.is_nan()
            }
            OwnedValue::Bool(b) => *b,
            OwnedValue::Null => false,
        }
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OwnedValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            OwnedValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for OwnedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OwnedValue::Str(s) => f.write_str(s),
            OwnedValue::Number(n) => write!(f, "{n}"),
            OwnedValue::Bool(b) => write!(f, "{b}"),
            OwnedValue::Null => f.write_str("null"),
        }
    }
}

impl Serialize for OwnedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            OwnedValue::Str(s) => serializer.serialize_str(s),
            OwnedValue::Number(n) => n.serialize(serializer),
            OwnedValue::Bool(b) => serializer.serialize_bool(*b),
            OwnedValue::Null => serializer.serialize_unit(),
        }
    }
}

/// Element types that have a notion of "absent", used by `compact`.
///
/// `0`, `false`, and the empty string are *not* nullish; only genuinely
/// absent values are removed.
pub trait Nullish {
    /// Returns `true` if this element should be dropped by `compact`.
    fn is_nullish(&self) -> bool;
}

impl<T> Nullish for Option<T> {
    fn is_nullish(&self) -> bool {
        self.is_none()
    }
}

impl Nullish for OwnedValue {
    fn is_nullish(&self) -> bool {
        matches!(self, OwnedValue::Null)
    }
}

impl Nullish for Value<'_> {
    fn is_nullish(&self) -> bool {
        self.is_none()
    }
}

/// Numeric coercion for raw elements, used by the no-argument forms of
/// `sum`, `max`, and `avg`.
pub trait ToNumber {
    /// Coerces this element to a [`Number`].
    fn to_number(&self) -> Number;
}

macro_rules! to_number_via_from {
    ($($t:ty),+) => {
        $(impl ToNumber for $t {
            fn to_number(&self) -> Number {
                Number::from(*self)
            }
        })+
    };
}

to_number_via_from!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl ToNumber for bool {
    fn to_number(&self) -> Number {
        Number::I64(i64::from(*self))
    }
}

impl ToNumber for &str {
    fn to_number(&self) -> Number {
        Number::F64(self.trim().parse().unwrap_or(f64::NAN))
    }
}

impl ToNumber for String {
    fn to_number(&self) -> Number {
        self.as_str().to_number()
    }
}

impl ToNumber for Number {
    fn to_number(&self) -> Number {
        *self
    }
}

impl ToNumber for OwnedValue {
    fn to_number(&self) -> Number {
        match self {
            OwnedValue::Str(s) => s.to_number(),
            OwnedValue::Number(n) => *n,
            OwnedValue::Bool(b) => b.to_number(),
            OwnedValue::Null => Number::F64(f64::NAN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness() {
        assert!(Value::Str("x").truthy());
        assert!(!Value::Str("").truthy());
        assert!(Value::Number(Number::I64(-1)).truthy());
        assert!(!Value::Number(Number::I64(0)).truthy());
        assert!(!Value::Number(Number::F64(f64::NAN)).truthy());
        assert!(Value::Bool(true).truthy());
        assert!(!Value::Bool(false).truthy());
        assert!(!Value::None.truthy());
    }

    #[test]
    fn number_comparisons() {
        assert_eq!(
            Number::I64(5).compare(Number::I64(10)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Number::U64(10).compare(Number::F64(5.5)),
            Some(Ordering::Greater)
        );
        assert_eq!(
            Number::I64(5).compare(Number::F64(5.0)),
            Some(Ordering::Equal)
        );
        assert_eq!(Number::F64(f64::NAN).compare(Number::F64(1.0)), None);

        // Equality follows compare, not the variant.
        assert_eq!(Number::I64(3), Number::F64(3.0));
        assert_ne!(Number::F64(f64::NAN), Number::F64(f64::NAN));
    }

    #[test]
    fn value_equality_is_numeric() {
        assert_eq!(
            Value::Number(Number::I64(3)),
            Value::Number(Number::F64(3.0))
        );
        assert_ne!(Value::Str("3"), Value::Number(Number::I64(3)));
        assert_eq!(Value::None, Value::None);
    }

    #[test]
    fn numeric_coercion() {
        assert_eq!(Value::Bool(true).to_number(), Number::I64(1));
        assert_eq!(Value::Str("12.5").to_number(), Number::F64(12.5));
        assert!(Value::Str("pony").to_number().to_f64().is_nan());
        assert!(Value::None.to_number().to_f64().is_nan());

        assert_eq!(42i32.to_number(), Number::I64(42));
        assert_eq!("7".to_number(), Number::F64(7.0));
        assert!(String::from("x").to_number().to_f64().is_nan());
    }

    #[test]
    fn owned_value_detaches() {
        assert_eq!(
            Value::Str("a").to_owned_value(),
            OwnedValue::Str("a".to_string())
        );
        assert_eq!(Value::None.to_owned_value(), OwnedValue::Null);
    }

    #[test]
    fn owned_value_serializes_as_scalar() {
        assert_eq!(
            serde_json::to_string(&OwnedValue::Str("a".into())).unwrap(),
            "\"a\""
        );
        assert_eq!(
            serde_json::to_string(&OwnedValue::Number(Number::I64(3))).unwrap(),
            "3"
        );
        assert_eq!(serde_json::to_string(&OwnedValue::Null).unwrap(), "null");
    }

    #[test]
    fn nullish_elements() {
        assert!(None::<i32>.is_nullish());
        assert!(!Some(0).is_nullish());
        assert!(OwnedValue::Null.is_nullish());
        assert!(!OwnedValue::Bool(false).is_nullish());
    }
}
