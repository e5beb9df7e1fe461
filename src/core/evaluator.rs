use crate::core::roman;
use crate::core::{ConfigProvider, Evaluation, Expression, Notation, Operand, Operator, Tokens};
use crate::domain::ports::{DEFAULT_MAX_OPERAND, DEFAULT_MIN_OPERAND};
use crate::utils::error::{CalcError, Result};
use std::ops::RangeInclusive;

#[derive(Debug, Clone)]
pub struct Evaluator {
    operand_range: RangeInclusive<i64>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_OPERAND..=DEFAULT_MAX_OPERAND)
    }
}

impl Evaluator {
    pub fn new(operand_range: RangeInclusive<i64>) -> Self {
        Self { operand_range }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(config.operand_range())
    }

    pub fn evaluate(&self, tokens: Tokens<'_>) -> Result<Evaluation> {
        let expression = self.parse(tokens)?;
        let value = apply(expression.operator, expression.lhs.value, expression.rhs.value)?;
        tracing::debug!(
            "{} {} {} = {}",
            expression.lhs.value,
            expression.operator,
            expression.rhs.value,
            value
        );

        match expression.result_notation() {
            Notation::Roman => Ok(Evaluation::Roman(roman::arabic_to_roman(value)?)),
            Notation::Decimal => Ok(Evaluation::Decimal(value)),
        }
    }

    /// Parses both operands, then range-checks them, then reads the operator.
    pub fn parse(&self, tokens: Tokens<'_>) -> Result<Expression> {
        let lhs = parse_operand(tokens.lhs)?;
        let rhs = parse_operand(tokens.rhs)?;
        self.check_range(&lhs)?;
        self.check_range(&rhs)?;
        let operator = tokens.operator.parse::<Operator>()?;
        Ok(Expression { lhs, operator, rhs })
    }

    pub fn check_range(&self, operand: &Operand) -> Result<()> {
        if !self.operand_range.contains(&operand.value) {
            return Err(CalcError::RangeError {
                value: operand.value,
                min: *self.operand_range.start(),
                max: *self.operand_range.end(),
            });
        }
        Ok(())
    }
}

/// Decimal first, then canonical Roman.
pub fn parse_operand(token: &str) -> Result<Operand> {
    let operand = match token.parse::<i64>() {
        Ok(value) => Operand {
            value,
            notation: Notation::Decimal,
        },
        Err(_) if roman::is_valid_roman(token) => Operand {
            value: i64::from(roman::roman_to_arabic(token)),
            notation: Notation::Roman,
        },
        Err(_) => {
            return Err(CalcError::format(format!("malformed number '{}'", token)));
        }
    };

    tracing::debug!("Parsed operand {:?} from {:?}", operand, token);
    Ok(operand)
}

pub fn apply(operator: Operator, lhs: i64, rhs: i64) -> Result<i64> {
    let overflow = || CalcError::ArithmeticOverflowError {
        lhs,
        operator: operator.to_string(),
        rhs,
    };

    match operator {
        Operator::Add => lhs.checked_add(rhs).ok_or_else(overflow),
        Operator::Subtract => {
            let value = lhs.checked_sub(rhs).ok_or_else(overflow)?;
            if value <= 0 {
                return Err(CalcError::NonPositiveResultError { value });
            }
            Ok(value)
        }
        Operator::Multiply => lhs.checked_mul(rhs).ok_or_else(overflow),
        Operator::Divide => {
            if rhs == 0 {
                return Err(CalcError::DivisionByZeroError);
            }
            lhs.checked_div(rhs).ok_or_else(overflow)
        }
    }
}
