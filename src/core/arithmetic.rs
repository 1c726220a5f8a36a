//! The four supported operations on resolved integer operands.
use crate::error::{Error, Result};
use crate::types::Operator;

impl Operator {
    /// Apply the operator; `/` truncates toward zero and overflow wraps.
    pub fn apply(self, a: i64, b: i64) -> Result<i64> {
        match self {
            Operator::Add => Ok(a.wrapping_add(b)),
            Operator::Sub => Ok(a.wrapping_sub(b)),
            Operator::Mul => Ok(a.wrapping_mul(b)),
            Operator::Div => {
                if b == 0 {
                    return Err(Error::DivideByZero);
                }
                Ok(a.wrapping_div(b))
            }
        }
    }
}

/// Evaluate `a <operator> b` where the operator is still a raw token.
pub fn calculate(a: i64, b: i64, operator: &str) -> Result<i64> {
    operator.parse::<Operator>()?.apply(a, b)
}
