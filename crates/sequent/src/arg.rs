//! Operation arguments: callbacks and shorthand strings, unified.
//!
//! Every predicate- or accessor-taking operation accepts *either* a closure
//! or a shorthand string. The conversion traits here ([`IntoPredicate`],
//! [`IntoMapper`], [`IntoKey`]) resolve whichever was passed into a single
//! concrete callable once, at the start of the operation, so the scan logic
//! stays type-uniform.
//!
//! The extra `Marker` type parameter on the conversion traits keeps the
//! closure impls and the string impls from overlapping; callers never name
//! it, inference picks the only applicable impl.

use std::marker::PhantomData;

use sequent_shorthand::{Fielded, Number, OwnedValue, Shorthand};

use crate::error::Result;

/// Marker for arguments passed as closures.
pub struct FnArg;

/// Marker for arguments passed as shorthand strings (or pre-compiled
/// [`Shorthand`] values).
pub struct StrArg;

/// A resolved predicate: `test(value, index) -> bool`.
pub trait Predicate<T> {
    /// Tests one element.
    fn test(&mut self, value: &T, index: usize) -> bool;
}

/// A resolved mapper: `apply(value, index) -> R`.
pub trait Mapper<T, R> {
    /// Maps one element.
    fn apply(&mut self, value: &T, index: usize) -> R;
}

/// A resolved numeric accessor: `key(value, index) -> f64`.
pub trait Key<T> {
    /// Extracts the numeric key of one element.
    fn key(&mut self, value: &T, index: usize) -> f64;
}

/// Predicate backed by a caller closure.
pub struct FnPredicate<F>(F);

impl<T, F> Predicate<T> for FnPredicate<F>
where
    F: FnMut(&T, usize) -> bool,
{
    fn test(&mut self, value: &T, index: usize) -> bool {
        (self.0)(value, index)
    }
}

/// Predicate backed by a compiled shorthand.
pub struct PathPredicate(Shorthand);

impl<T: Fielded> Predicate<T> for PathPredicate {
    fn test(&mut self, value: &T, _index: usize) -> bool {
        self.0.matches(value)
    }
}

/// Mapper backed by a caller closure.
pub struct FnMapper<F>(F);

impl<T, R, F> Mapper<T, R> for FnMapper<F>
where
    F: FnMut(&T, usize) -> R,
{
    fn apply(&mut self, value: &T, index: usize) -> R {
        (self.0)(value, index)
    }
}

/// Mapper backed by a compiled shorthand; plucks the path into an
/// [`OwnedValue`].
pub struct PathMapper(Shorthand);

impl<T: Fielded> Mapper<T, OwnedValue> for PathMapper {
    fn apply(&mut self, value: &T, _index: usize) -> OwnedValue {
        self.0.lookup(value).to_owned_value()
    }
}

/// Key backed by a caller closure returning any numeric type.
pub struct FnKey<F, N>(F, PhantomData<fn() -> N>);

impl<T, N, F> Key<T> for FnKey<F, N>
where
    N: Into<Number>,
    F: FnMut(&T, usize) -> N,
{
    fn key(&mut self, value: &T, index: usize) -> f64 {
        (self.0)(value, index).into().to_f64()
    }
}

/// Key backed by a compiled shorthand, with the resolver's numeric coercion.
pub struct PathKey(Shorthand);

impl<T: Fielded> Key<T> for PathKey {
    fn key(&mut self, value: &T, _index: usize) -> f64 {
        self.0.lookup(value).to_number().to_f64()
    }
}

/// Conversion into a [`Predicate`]. Closure conversion is infallible;
/// string conversion compiles the shorthand and can fail.
pub trait IntoPredicate<T, Marker> {
    /// The resolved predicate type.
    type Pred: Predicate<T>;

    /// Resolves the argument into a predicate.
    fn into_predicate(self) -> Result<Self::Pred>;
}

impl<T, F> IntoPredicate<T, FnArg> for F
where
    F: FnMut(&T, usize) -> bool,
{
    type Pred = FnPredicate<F>;

    fn into_predicate(self) -> Result<Self::Pred> {
        Ok(FnPredicate(self))
    }
}

impl<T: Fielded> IntoPredicate<T, StrArg> for &str {
    type Pred = PathPredicate;

    fn into_predicate(self) -> Result<Self::Pred> {
        Ok(PathPredicate(Shorthand::compile(self)?))
    }
}

impl<T: Fielded> IntoPredicate<T, StrArg> for Shorthand {
    type Pred = PathPredicate;

    fn into_predicate(self) -> Result<Self::Pred> {
        Ok(PathPredicate(self))
    }
}

/// Conversion into a [`Mapper`]. String arguments pluck the path and always
/// produce [`OwnedValue`] elements.
pub trait IntoMapper<T, R, Marker> {
    /// The resolved mapper type.
    type Map: Mapper<T, R>;

    /// Resolves the argument into a mapper.
    fn into_mapper(self) -> Result<Self::Map>;
}

impl<T, R, F> IntoMapper<T, R, FnArg> for F
where
    F: FnMut(&T, usize) -> R,
{
    type Map = FnMapper<F>;

    fn into_mapper(self) -> Result<Self::Map> {
        Ok(FnMapper(self))
    }
}

impl<T: Fielded> IntoMapper<T, OwnedValue, StrArg> for &str {
    type Map = PathMapper;

    fn into_mapper(self) -> Result<Self::Map> {
        Ok(PathMapper(Shorthand::compile(self)?))
    }
}

impl<T: Fielded> IntoMapper<T, OwnedValue, StrArg> for Shorthand {
    type Map = PathMapper;

    fn into_mapper(self) -> Result<Self::Map> {
        Ok(PathMapper(self))
    }
}

/// Conversion into a [`Key`]. Closures may return any `Into<Number>` type.
pub trait IntoKey<T, Marker> {
    /// The resolved key type.
    type Key: Key<T>;

    /// Resolves the argument into a numeric accessor.
    fn into_key(self) -> Result<Self::Key>;
}

impl<T, N, F> IntoKey<T, (FnArg, N)> for F
where
    N: Into<Number>,
    F: FnMut(&T, usize) -> N,
{
    type Key = FnKey<F, N>;

    fn into_key(self) -> Result<Self::Key> {
        Ok(FnKey(self, PhantomData))
    }
}

impl<T: Fielded> IntoKey<T, StrArg> for &str {
    type Key = PathKey;

    fn into_key(self) -> Result<Self::Key> {
        Ok(PathKey(Shorthand::compile(self)?))
    }
}

impl<T: Fielded> IntoKey<T, StrArg> for Shorthand {
    type Key = PathKey;

    fn into_key(self) -> Result<Self::Key> {
        Ok(PathKey(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sequent_shorthand::Value;

    struct Pet {
        name: String,
        age: i64,
    }

    impl Fielded for Pet {
        fn field(&self, name: &str) -> Value<'_> {
            match name {
                "name" => Value::Str(&self.name),
                "age" => Value::Number(Number::I64(self.age)),
                _ => Value::None,
            }
        }
    }

    fn resolve_pred<M, A: IntoPredicate<Pet, M>>(arg: A) -> A::Pred {
        arg.into_predicate().unwrap()
    }

    #[test]
    fn closure_predicate_resolves() {
        let pet = Pet {
            name: "Tobi".into(),
            age: 5,
        };
        let mut pred = resolve_pred(|p: &Pet, _: usize| p.age > 3);
        assert!(pred.test(&pet, 0));
    }

    #[test]
    fn string_predicate_resolves() {
        let pet = Pet {
            name: "Tobi".into(),
            age: 5,
        };
        let mut pred = resolve_pred("age > 3");
        assert!(pred.test(&pet, 0));
        let mut pred = resolve_pred("name == 'Loki'");
        assert!(!pred.test(&pet, 0));
    }

    #[test]
    fn bad_string_predicate_fails_at_resolution() {
        let result: Result<PathPredicate> =
            IntoPredicate::<Pet, StrArg>::into_predicate("age >");
        assert!(result.is_err());
    }

    #[test]
    fn string_mapper_plucks_owned_values() {
        let pet = Pet {
            name: "Tobi".into(),
            age: 5,
        };
        let mut mapper: PathMapper =
            IntoMapper::<Pet, OwnedValue, StrArg>::into_mapper("name").unwrap();
        assert_eq!(mapper.apply(&pet, 0), OwnedValue::Str("Tobi".into()));
    }

    #[test]
    fn closure_key_accepts_any_numeric_return() {
        let pet = Pet {
            name: "Tobi".into(),
            age: 5,
        };
        let mut int_key = (|p: &Pet, _: usize| p.age).into_key().unwrap();
        assert_eq!(int_key.key(&pet, 0), 5.0);
        let mut float_key = (|p: &Pet, _: usize| p.age as f64 / 2.0).into_key().unwrap();
        assert_eq!(float_key.key(&pet, 0), 2.5);
    }

    #[test]
    fn string_key_coerces() {
        let pet = Pet {
            name: "Tobi".into(),
            age: 5,
        };
        let mut key: PathKey = IntoKey::<Pet, StrArg>::into_key("age").unwrap();
        assert_eq!(key.key(&pet, 0), 5.0);
        let mut missing: PathKey = IntoKey::<Pet, StrArg>::into_key("species").unwrap();
        assert!(missing.key(&pet, 0).is_nan());
    }
}
