// ABOUTME: Parses comparison filter expressions into an operator and a numeric operand
// ABOUTME: Ill-formed input yields None so callers can drop the filter silently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{self, Display, Formatter};

/// Comparison operator accepted in filter expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    /// `>=`
    GreaterOrEqual,
    /// `<=`
    LessOrEqual,
    /// `>`
    Greater,
    /// `<`
    Less,
    /// `=`
    Equal,
}

impl ComparisonOperator {
    /// Prefix match order: two-character operators before their one-character prefixes
    pub const PARSE_ORDER: [Self; 5] = [
        Self::GreaterOrEqual,
        Self::LessOrEqual,
        Self::Greater,
        Self::Less,
        Self::Equal,
    ];

    /// SQL spelling of the operator
    #[must_use]
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::GreaterOrEqual => ">=",
            Self::LessOrEqual => "<=",
            Self::Greater => ">",
            Self::Less => "<",
            Self::Equal => "=",
        }
    }
}

impl Display for ComparisonOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Result of parsing a filter expression
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedComparison {
    /// Comparison operator
    pub operator: ComparisonOperator,
    /// Numeric operand
    pub value: f64,
}

impl ParsedComparison {
    /// Operand narrowed for integer columns (truncates toward zero)
    #[must_use]
    pub fn value_as_integer(&self) -> i64 {
        self.value as i64
    }
}

/// Parse a filter expression such as `"  >= 4.5 "`, `"<=10"`, or `"5"`
///
/// All whitespace is removed first. A leading operator is matched in
/// [`ComparisonOperator::PARSE_ORDER`]; with no operator the whole string is the
/// operand and the operator is `=`. Returns `None` when the operand is not a
/// finite number, including an operator with nothing after it.
#[must_use]
pub fn parse(expr: &str) -> Option<ParsedComparison> {
    let compact: String = expr.chars().filter(|c| !c.is_whitespace()).collect();

    let (operator, operand) = ComparisonOperator::PARSE_ORDER
        .iter()
        .find_map(|op| compact.strip_prefix(op.as_sql()).map(|rest| (*op, rest)))
        .unwrap_or((ComparisonOperator::Equal, compact.as_str()));

    let value = operand.parse::<f64>().ok().filter(|v| v.is_finite())?;
    Some(ParsedComparison { operator, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_parsed(expr: &str, operator: ComparisonOperator, value: f64) {
        let parsed = parse(expr);
        assert!(parsed.is_some(), "expected {expr:?} to parse");
        if let Some(parsed) = parsed {
            assert_eq!(parsed.operator, operator, "operator for {expr:?}");
            assert!((parsed.value - value).abs() < f64::EPSILON, "value for {expr:?}");
        }
    }

    #[test]
    fn test_operators_with_whitespace() {
        assert_parsed("  >= 4.5 ", ComparisonOperator::GreaterOrEqual, 4.5);
        assert_parsed("<=10", ComparisonOperator::LessOrEqual, 10.0);
        assert_parsed("> 3", ComparisonOperator::Greater, 3.0);
        assert_parsed("<\t2.25", ComparisonOperator::Less, 2.25);
        assert_parsed("= 7", ComparisonOperator::Equal, 7.0);
        assert_parsed("> = 4", ComparisonOperator::GreaterOrEqual, 4.0);
    }

    #[test]
    fn test_bare_number_is_equality() {
        assert_parsed("5", ComparisonOperator::Equal, 5.0);
        assert_parsed(" 1e2 ", ComparisonOperator::Equal, 100.0);
        assert_parsed("-3.5", ComparisonOperator::Equal, -3.5);
    }

    #[test]
    fn test_two_char_operators_win() {
        assert_parsed("<=5", ComparisonOperator::LessOrEqual, 5.0);
        assert_parsed(">=5", ComparisonOperator::GreaterOrEqual, 5.0);
    }

    #[test]
    fn test_ill_formed_input() {
        assert_eq!(parse("abc"), None);
        assert_eq!(parse(">"), None);
        assert_eq!(parse(">="), None);
        assert_eq!(parse("=>5"), None);
        assert_eq!(parse("<<5"), None);
        assert_eq!(parse(">=4.5stars"), None);
        assert_eq!(parse("fast"), None);
        assert_eq!(parse(""), None);
    }

    #[test]
    fn test_non_finite_operands_rejected() {
        assert_eq!(parse("NaN"), None);
        assert_eq!(parse(">inf"), None);
        assert_eq!(parse("<=-infinity"), None);
    }

    #[test]
    fn test_integer_narrowing_truncates() {
        let parsed = parse(">=30.9");
        assert_eq!(parsed.map(|p| p.value_as_integer()), Some(30));
        let parsed = parse("<-2.7");
        assert_eq!(parsed.map(|p| p.value_as_integer()), Some(-2));
    }
}
