//! The shorthand compiler.
//!
//! [`Shorthand::compile`] turns `"age"`, `"name.first"`, or `"age > 20"`
//! into a reusable evaluator. Compilation happens once per enumerable
//! operation invocation; evaluation is pure and side-effect free.

use crate::error::{Result, ShorthandError};
use crate::field::{self, Fielded};
use crate::op::Op;
use crate::value::{Number, Value};

/// Right-hand-side literal of a comparison shorthand.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Quoted string. Escape sequences are not interpreted.
    Str(String),
    /// Numeric literal.
    Number(f64),
    /// `true` or `false`.
    Bool(bool),
    /// `null` - matches absent values with `==`, present ones with `!=`.
    Null,
}

/// A compiled shorthand: a property path with an optional comparison.
///
/// Without a comparison the shorthand is a bare accessor, and as a predicate
/// it tests the looked-up value for truthiness. With a comparison it tests
/// the looked-up value against the literal.
///
/// # Example
///
/// ```
/// use sequent_shorthand::Shorthand;
///
/// let bare = Shorthand::compile("name.first")?;
/// assert_eq!(bare.path(), ["name", "first"]);
/// assert!(bare.test().is_none());
///
/// let cmp = Shorthand::compile("age >= 21")?;
/// assert!(cmp.test().is_some());
/// # Ok::<(), sequent_shorthand::ShorthandError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Shorthand {
    path: Vec<String>,
    test: Option<(Op, Literal)>,
}

impl Shorthand {
    /// Compiles a shorthand string.
    ///
    /// Accepted grammar: `path [ op literal ]`, where `path` is a
    /// dot-separated identifier chain, `op` is one of
    /// `==  =  !=  >  >=  <  <=`, and `literal` is a number, a quoted
    /// string, `true`, `false`, or `null`.
    pub fn compile(src: &str) -> Result<Shorthand> {
        let src = src.trim();
        let path_end = src
            .find(|c: char| !is_path_char(c))
            .unwrap_or(src.len());
        let (path_str, rest) = src.split_at(path_end);
        let path = parse_path(path_str)?;

        let rest = rest.trim_start();
        if rest.is_empty() {
            return Ok(Shorthand { path, test: None });
        }

        let op_end = rest
            .find(|c: char| !is_op_char(c))
            .unwrap_or(rest.len());
        if op_end == 0 {
            return Err(ShorthandError::TrailingInput(rest.to_string()));
        }
        let (op_str, lit_str) = rest.split_at(op_end);
        let op = Op::parse(op_str)
            .ok_or_else(|| ShorthandError::UnknownOperator(op_str.to_string()))?;
        let literal = parse_literal(lit_str.trim())?;

        Ok(Shorthand {
            path,
            test: Some((op, literal)),
        })
    }

    /// The property path segments.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// The comparison, if the shorthand has one.
    pub fn test(&self) -> Option<&(Op, Literal)> {
        self.test.as_ref()
    }

    /// Looks the path up on an element.
    pub fn lookup<'a>(&self, item: &'a dyn Fielded) -> Value<'a> {
        field::lookup(item, &self.path)
    }

    /// Evaluates the shorthand as a predicate.
    ///
    /// A bare path tests the looked-up value for truthiness; a comparison
    /// evaluates it against the literal.
    pub fn matches(&self, item: &dyn Fielded) -> bool {
        let value = self.lookup(item);
        match &self.test {
            None => value.truthy(),
            Some((op, literal)) => compare(&value, *op, literal),
        }
    }
}

fn is_path_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$' || c == '.'
}

fn is_op_char(c: char) -> bool {
    matches!(c, '=' | '!' | '<' | '>')
}

fn parse_path(s: &str) -> Result<Vec<String>> {
    if s.is_empty() {
        return Err(ShorthandError::EmptyPath);
    }
    let mut segments = Vec::new();
    for segment in s.split('.') {
        if segment.is_empty() {
            return Err(ShorthandError::InvalidPath(s.to_string()));
        }
        segments.push(segment.to_string());
    }
    Ok(segments)
}

fn parse_literal(s: &str) -> Result<Literal> {
    if s.is_empty() {
        return Err(ShorthandError::MissingLiteral);
    }
    if let Some(quote) = s.chars().next().filter(|c| matches!(c, '\'' | '"')) {
        if s.len() >= 2 && s.ends_with(quote) {
            return Ok(Literal::Str(s[1..s.len() - 1].to_string()));
        }
        return Err(ShorthandError::InvalidLiteral(s.to_string()));
    }
    match s {
        "true" => return Ok(Literal::Bool(true)),
        "false" => return Ok(Literal::Bool(false)),
        "null" => return Ok(Literal::Null),
        _ => {}
    }
    s.parse::<f64>()
        .map(Literal::Number)
        .map_err(|_| ShorthandError::InvalidLiteral(s.to_string()))
}

/// Comparison semantics: numbers compare numerically, strings compare
/// lexicographically, bools support equality only, and a missing value
/// matches nothing except `== null`. Type mismatches never match.
fn compare(value: &Value<'_>, op: Op, literal: &Literal) -> bool {
    match (value, literal) {
        (Value::Number(n), Literal::Number(x)) => n
            .compare(Number::F64(*x))
            .is_some_and(|ordering| op.eval_ordering(ordering)),
        (Value::Str(s), Literal::Str(pattern)) => op.eval_ordering(s.cmp(&pattern.as_str())),
        (Value::Bool(b), Literal::Bool(x)) => match op {
            Op::Eq => b == x,
            Op::Ne => b != x,
            _ => false,
        },
        (Value::None, Literal::Null) => matches!(op, Op::Eq),
        (_, Literal::Null) => matches!(op, Op::Ne),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Name {
        first: String,
    }

    struct User {
        name: Name,
        age: i64,
        admin: bool,
        email: Option<String>,
    }

    impl Fielded for Name {
        fn field(&self, name: &str) -> Value<'_> {
            match name {
                "first" => Value::Str(&self.first),
                _ => Value::None,
            }
        }
    }

    impl Fielded for User {
        fn field(&self, name: &str) -> Value<'_> {
            match name {
                "name" => Value::Nested(&self.name),
                "age" => Value::Number(Number::I64(self.age)),
                "admin" => Value::Bool(self.admin),
                "email" => match &self.email {
                    Some(email) => Value::Str(email),
                    None => Value::None,
                },
                _ => Value::None,
            }
        }
    }

    fn user(first: &str, age: i64, admin: bool) -> User {
        User {
            name: Name {
                first: first.to_string(),
            },
            age,
            admin,
            email: None,
        }
    }

    #[test]
    fn compiles_bare_paths() {
        let s = Shorthand::compile("age").unwrap();
        assert_eq!(s.path(), ["age"]);
        assert!(s.test().is_none());

        let s = Shorthand::compile("name.first").unwrap();
        assert_eq!(s.path(), ["name", "first"]);
    }

    #[test]
    fn compiles_comparisons() {
        let s = Shorthand::compile("age > 20").unwrap();
        assert_eq!(s.test(), Some(&(Op::Gt, Literal::Number(20.0))));

        // Whitespace is optional.
        let s = Shorthand::compile("age>20").unwrap();
        assert_eq!(s.test(), Some(&(Op::Gt, Literal::Number(20.0))));

        let s = Shorthand::compile("name.first == 'Tobi'").unwrap();
        assert_eq!(s.test(), Some(&(Op::Eq, Literal::Str("Tobi".into()))));

        let s = Shorthand::compile("admin != false").unwrap();
        assert_eq!(s.test(), Some(&(Op::Ne, Literal::Bool(false))));

        let s = Shorthand::compile("email == null").unwrap();
        assert_eq!(s.test(), Some(&(Op::Eq, Literal::Null)));
    }

    #[test]
    fn compile_errors() {
        assert_eq!(Shorthand::compile(""), Err(ShorthandError::EmptyPath));
        assert_eq!(
            Shorthand::compile("a..b"),
            Err(ShorthandError::InvalidPath("a..b".into()))
        );
        assert_eq!(
            Shorthand::compile("age => 3"),
            Err(ShorthandError::UnknownOperator("=>".into()))
        );
        assert_eq!(
            Shorthand::compile("age >"),
            Err(ShorthandError::MissingLiteral)
        );
        assert_eq!(
            Shorthand::compile("age > 'unterminated"),
            Err(ShorthandError::InvalidLiteral("'unterminated".into()))
        );
        assert_eq!(
            Shorthand::compile("age > ferret"),
            Err(ShorthandError::InvalidLiteral("ferret".into()))
        );
        assert_eq!(
            Shorthand::compile("age ? 3"),
            Err(ShorthandError::TrailingInput("? 3".into()))
        );
    }

    #[test]
    fn bare_path_tests_truthiness() {
        let admin = Shorthand::compile("admin").unwrap();
        assert!(admin.matches(&user("Tobi", 2, true)));
        assert!(!admin.matches(&user("Loki", 1, false)));

        // Unknown field is falsy, not an error.
        let missing = Shorthand::compile("species").unwrap();
        assert!(!missing.matches(&user("Tobi", 2, true)));
    }

    #[test]
    fn numeric_comparisons() {
        let s = Shorthand::compile("age > 20").unwrap();
        assert!(s.matches(&user("Tobi", 23, false)));
        assert!(!s.matches(&user("Loki", 20, false)));

        let s = Shorthand::compile("age <= 20").unwrap();
        assert!(s.matches(&user("Loki", 20, false)));
    }

    #[test]
    fn nested_string_comparison() {
        let s = Shorthand::compile("name.first == 'Tobi'").unwrap();
        assert!(s.matches(&user("Tobi", 2, false)));
        assert!(!s.matches(&user("Loki", 2, false)));
    }

    #[test]
    fn null_comparisons() {
        let absent = Shorthand::compile("email == null").unwrap();
        let present = Shorthand::compile("email != null").unwrap();

        let mut u = user("Tobi", 2, false);
        assert!(absent.matches(&u));
        assert!(!present.matches(&u));

        u.email = Some("tobi@ferrets.example".to_string());
        assert!(!absent.matches(&u));
        assert!(present.matches(&u));
    }

    #[test]
    fn type_mismatch_never_matches() {
        // name.first is a string, 3 is a number.
        let s = Shorthand::compile("name.first == 3").unwrap();
        assert!(!s.matches(&user("3", 3, false)));

        // Ordering on bools is rejected.
        let s = Shorthand::compile("admin > true").unwrap();
        assert!(!s.matches(&user("Tobi", 2, true)));
    }
}
