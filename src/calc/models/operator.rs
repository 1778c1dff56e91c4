//! Binary operators awaiting their second operand

use serde::Serialize;

use super::number::finite_or_zero;

/// Pending binary operator
///
/// `Equals` marks a committed calculation; applying it simply takes the
/// right-hand operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Operator {
    #[default]
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "×")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
    #[serde(rename = "=")]
    Equals,
}

impl Operator {
    /// Symbol shown on the keypad
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
            Operator::Equals => "=",
        }
    }

    /// Look up an operator by its keypad symbol. ASCII `*` and `/` are accepted too.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "×" | "*" => Some(Operator::Multiply),
            "÷" | "/" => Some(Operator::Divide),
            "=" => Some(Operator::Equals),
            _ => None,
        }
    }

    /// Combine the accumulator with a new operand.
    ///
    /// Non-finite outcomes (division by zero) become zero.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        let value = match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
            Operator::Equals => rhs,
        };
        finite_or_zero(value)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
