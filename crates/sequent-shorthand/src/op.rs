//! Comparison operators for shorthand predicates.

use std::cmp::Ordering;

/// Comparison operator embedded in a shorthand string.
///
/// `Eq` and `Ne` apply to every value type; the ordering operators apply to
/// numbers and strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Equal (`==`, also accepted as `=`).
    Eq,
    /// Not equal (`!=`).
    Ne,
    /// Greater than (`>`).
    Gt,
    /// Greater than or equal (`>=`).
    Gte,
    /// Less than (`<`).
    Lt,
    /// Less than or equal (`<=`).
    Lte,
}

impl Op {
    /// Parses the surface form of an operator.
    pub fn parse(token: &str) -> Option<Op> {
        match token {
            "==" | "=" => Some(Op::Eq),
            "!=" => Some(Op::Ne),
            ">" => Some(Op::Gt),
            ">=" => Some(Op::Gte),
            "<" => Some(Op::Lt),
            "<=" => Some(Op::Lte),
            _ => None,
        }
    }

    /// Returns `true` for `Eq` and `Ne`, the operators valid on every type.
    pub fn is_equality(self) -> bool {
        matches!(self, Op::Eq | Op::Ne)
    }

    /// Evaluates this operator against an ordering result.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            Op::Eq => ordering == Ordering::Equal,
            Op::Ne => ordering != Ordering::Equal,
            Op::Gt => ordering == Ordering::Greater,
            Op::Gte => ordering != Ordering::Less,
            Op::Lt => ordering == Ordering::Less,
            Op::Lte => ordering != Ordering::Greater,
        }
    }

    /// Returns the canonical surface form of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "==",
            Op::Ne => "!=",
            Op::Gt => ">",
            Op::Gte => ">=",
            Op::Lt => "<",
            Op::Lte => "<=",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_surface_forms() {
        assert_eq!(Op::parse("=="), Some(Op::Eq));
        assert_eq!(Op::parse("="), Some(Op::Eq));
        assert_eq!(Op::parse("!="), Some(Op::Ne));
        assert_eq!(Op::parse(">"), Some(Op::Gt));
        assert_eq!(Op::parse(">="), Some(Op::Gte));
        assert_eq!(Op::parse("<"), Some(Op::Lt));
        assert_eq!(Op::parse("<="), Some(Op::Lte));
        assert_eq!(Op::parse("=>"), None);
        assert_eq!(Op::parse("~"), None);
    }

    #[test]
    fn eval_ordering_matrix() {
        assert!(Op::Eq.eval_ordering(Ordering::Equal));
        assert!(!Op::Eq.eval_ordering(Ordering::Less));
        assert!(Op::Ne.eval_ordering(Ordering::Greater));
        assert!(Op::Gt.eval_ordering(Ordering::Greater));
        assert!(!Op::Gt.eval_ordering(Ordering::Equal));
        assert!(Op::Gte.eval_ordering(Ordering::Equal));
        assert!(Op::Lt.eval_ordering(Ordering::Less));
        assert!(Op::Lte.eval_ordering(Ordering::Equal));
        assert!(!Op::Lte.eval_ordering(Ordering::Greater));
    }

    #[test]
    fn display_is_canonical() {
        assert_eq!(Op::Eq.to_string(), "==");
        assert_eq!(Op::parse("=").unwrap().to_string(), "==");
    }
}
