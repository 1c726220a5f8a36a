use crate::error::{Error, Result};

pub const MIN_OPERAND: i64 = 1;
pub const MAX_OPERAND: i64 = 10;

/// Operands must lie in `[MIN_OPERAND, MAX_OPERAND]`.
pub fn validate_range(value: i64) -> Result<()> {
    if !(MIN_OPERAND..=MAX_OPERAND).contains(&value) {
        return Err(Error::OutOfRange { value });
    }
    Ok(())
}
