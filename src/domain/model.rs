use crate::utils::error::{CalcError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    Decimal,
    Roman,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand {
    pub value: i64,
    pub notation: Notation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(token: &str) -> Result<Self> {
        match token {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            other => Err(CalcError::OperatorError {
                operator: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        };
        f.write_str(symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expression {
    pub lhs: Operand,
    pub operator: Operator,
    pub rhs: Operand,
}

impl Expression {
    /// Roman output is chosen only when both operands were written in Roman.
    pub fn result_notation(&self) -> Notation {
        match (self.lhs.notation, self.rhs.notation) {
            (Notation::Roman, Notation::Roman) => Notation::Roman,
            _ => Notation::Decimal,
        }
    }
}

/// The three raw tokens of an input line, borrowed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokens<'a> {
    pub lhs: &'a str,
    pub operator: &'a str,
    pub rhs: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    Decimal(i64),
    Roman(String),
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluation::Decimal(value) => write!(f, "{}", value),
            Evaluation::Roman(numeral) => f.write_str(numeral),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_from_str() {
        assert_eq!("+".parse::<Operator>().unwrap(), Operator::Add);
        assert_eq!("/".parse::<Operator>().unwrap(), Operator::Divide);
        assert!(matches!(
            "%".parse::<Operator>(),
            Err(CalcError::OperatorError { operator }) if operator == "%"
        ));
    }

    #[test]
    fn test_mixed_notation_yields_decimal() {
        let expression = Expression {
            lhs: Operand { value: 2, notation: Notation::Roman },
            operator: Operator::Add,
            rhs: Operand { value: 3, notation: Notation::Decimal },
        };
        assert_eq!(expression.result_notation(), Notation::Decimal);
    }

    #[test]
    fn test_evaluation_display() {
        assert_eq!(Evaluation::Decimal(5).to_string(), "5");
        assert_eq!(Evaluation::Roman("V".to_string()).to_string(), "V");
    }
}
