//! Token classification for postfix cell expressions.
//!
//! Classification priority: reference (uppercase first character), then
//! numeric literal (leading digit, or `-` followed by a digit), else operator.
//! A lone `-` is the subtraction operator, not a negative literal.

use std::str::FromStr;

/// The fixed operator set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Incr,
    Decr,
}

impl FromStr for Op {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Op::Add),
            "-" => Ok(Op::Sub),
            "*" => Ok(Op::Mul),
            "/" => Ok(Op::Div),
            "++" => Ok(Op::Incr),
            "--" => Ok(Op::Decr),
            _ => Err(()),
        }
    }
}

/// True if the token names another cell.
pub fn is_reference(token: &str) -> bool {
    token.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// True if the token is a numeric literal.
pub fn is_literal(token: &str) -> bool {
    let bytes = token.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_digit() => true,
        Some(b'-') => bytes.get(1).is_some_and(|b| b.is_ascii_digit()),
        _ => false,
    }
}

/// Parse a literal token. A leading `-` negates the unsigned remainder parse,
/// so the sign handling matches the classification rule above.
pub fn parse_literal(token: &str) -> Option<f32> {
    match token.strip_prefix('-') {
        Some(rest) => rest.parse::<f32>().ok().map(|v| -v),
        None => token.parse::<f32>().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_reference() {
        assert!(is_reference("A1"));
        assert!(is_reference("Z99"));
        assert!(!is_reference("a1"));
        assert!(!is_reference("42"));
        assert!(!is_reference("+"));
        assert!(!is_reference(""));
    }

    #[test]
    fn test_is_literal() {
        assert!(is_literal("5"));
        assert!(is_literal("3.25"));
        assert!(is_literal("-5"));
        assert!(is_literal("-0.5"));
        assert!(!is_literal("-"));
        assert!(!is_literal("--"));
        assert!(!is_literal("A1"));
        assert!(!is_literal(""));
    }

    #[test]
    fn test_parse_literal_negation() {
        assert_eq!(parse_literal("5"), Some(5.0));
        assert_eq!(parse_literal("-5"), Some(-5.0));
        assert_eq!(parse_literal("-2.5"), Some(-2.5));
        assert_eq!(parse_literal("5x"), None);
    }

    #[test]
    fn test_op_from_str() {
        assert_eq!("+".parse(), Ok(Op::Add));
        assert_eq!("++".parse(), Ok(Op::Incr));
        assert_eq!("--".parse(), Ok(Op::Decr));
        assert_eq!("%".parse::<Op>(), Err(()));
        assert_eq!("+++".parse::<Op>(), Err(()));
    }
}
