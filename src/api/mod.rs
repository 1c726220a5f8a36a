//! High-level library API: parse one input line into an `Expression`,
//! evaluate it, and render the result in the notation of the input.
//! Prefer these entrypoints over the low-level `core` modules.
use std::fmt;
use std::io::BufRead;

use tracing::debug;

use crate::core::arithmetic::calculate;
use crate::core::numerals::{arabic_to_roman, classify, parse_arabic, roman_to_arabic};
use crate::core::tokenizer::tokenize;
use crate::core::validate::validate_range;
use crate::error::{Error, Result};
use crate::types::{NumeralSystem, Operand, Position};

/// Prefix of the success line.
pub const RESULT_PREFIX: &str = "Результат: ";

/// A tokenized, converted and range-checked expression.
///
/// The operator is kept as its raw token; it is only checked when the
/// expression is evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub system: NumeralSystem,
    pub left: Operand,
    pub operator: String,
    pub right: Operand,
}

/// Outcome of a successful evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub system: NumeralSystem,
    pub value: i64,
    /// `value` rendered in `system`.
    pub rendered: String,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", RESULT_PREFIX, self.rendered)
    }
}

fn resolve_operand(token: &str, system: NumeralSystem, position: Position) -> Result<Operand> {
    let value = match system {
        NumeralSystem::Roman => roman_to_arabic(token)?,
        NumeralSystem::Arabic => parse_arabic(token, position)?,
    };
    Ok(Operand(value))
}

pub fn parse_expression(line: &str) -> Result<Expression> {
    let [left, operator, right] = tokenize(line)?;

    let system = classify(left);
    if system != classify(right) {
        return Err(Error::MixedNumerals);
    }
    debug!("Numeral system: {}", system);

    let left = resolve_operand(left, system, Position::First)?;
    let right = resolve_operand(right, system, Position::Second)?;

    validate_range(left.value())?;
    validate_range(right.value())?;

    Ok(Expression {
        system,
        left,
        operator: operator.to_string(),
        right,
    })
}

/// Render a result in the given notation.
///
/// Roman output requires a value of at least 1. Arabic output is never
/// range-checked, and neither branch enforces an upper bound.
pub fn format_result(value: i64, system: NumeralSystem) -> Result<String> {
    match system {
        NumeralSystem::Roman => {
            if value < 1 {
                return Err(Error::InvalidRomanResult { value });
            }
            arabic_to_roman(value)
        }
        NumeralSystem::Arabic => Ok(value.to_string()),
    }
}

pub fn evaluate(expression: &Expression) -> Result<Evaluation> {
    let value = calculate(
        expression.left.value(),
        expression.right.value(),
        &expression.operator,
    )?;
    debug!(
        "{} {} {} = {}",
        expression.left.value(),
        expression.operator,
        expression.right.value(),
        value
    );

    let rendered = format_result(value, expression.system)?;
    Ok(Evaluation {
        system: expression.system,
        value,
        rendered,
    })
}

/// Read one newline-terminated line of input.
pub fn read_expression<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(Error::EmptyInput);
    }
    if !line.ends_with('\n') {
        return Err(Error::UnterminatedLine);
    }
    Ok(line)
}

/// Parse and evaluate a single input line.
pub fn evaluate_line(line: &str) -> Result<Evaluation> {
    let expression = parse_expression(line)?;
    evaluate(&expression)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(input: &str) -> Result<String> {
        evaluate_line(input).map(|e| e.to_string())
    }

    #[test]
    fn roman_addition() -> Result<()> {
        assert_eq!(line("III + IV")?, "Результат: VII");
        assert_eq!(line("iv + iii")?, "Результат: VII");
        assert_eq!(line("ii * Iii\n")?, "Результат: VI");
        Ok(())
    }

    #[test]
    fn arabic_operations() -> Result<()> {
        assert_eq!(line("7 * 1")?, "Результат: 7");
        assert_eq!(line("10 / 3")?, "Результат: 3");
        assert_eq!(line("2 - 9")?, "Результат: -7");
        Ok(())
    }

    #[test]
    fn results_above_ten_are_not_capped() -> Result<()> {
        assert_eq!(line("5 * 5")?, "Результат: 25");
        assert_eq!(line("V * V")?, "Результат: XXV");
        assert_eq!(line("X * X")?, "Результат: C");
        assert_eq!(line("IX * IX")?, "Результат: LXXXI");
        Ok(())
    }

    #[test]
    fn parsed_expression_keeps_raw_operator() -> Result<()> {
        let expression = parse_expression("VI / ii")?;
        assert_eq!(
            expression,
            Expression {
                system: NumeralSystem::Roman,
                left: Operand(6),
                operator: "/".to_string(),
                right: Operand(2),
            }
        );
        let evaluation = evaluate(&expression)?;
        assert_eq!(evaluation.value, 3);
        assert_eq!(evaluation.rendered, "III");
        Ok(())
    }

    #[test]
    fn mixed_numerals_fail() {
        assert!(matches!(evaluate_line("IV + 3"), Err(Error::MixedNumerals)));
        assert!(matches!(evaluate_line("3 + IV"), Err(Error::MixedNumerals)));
    }

    #[test]
    fn operands_out_of_range_fail() {
        assert!(matches!(
            evaluate_line("11 + 1"),
            Err(Error::OutOfRange { value: 11 })
        ));
        assert!(matches!(
            evaluate_line("1 + 0"),
            Err(Error::OutOfRange { value: 0 })
        ));
        // range is checked before the operator
        assert!(matches!(
            evaluate_line("11 % 1"),
            Err(Error::OutOfRange { value: 11 })
        ));
    }

    #[test]
    fn bad_arabic_operand_names_its_position() {
        assert!(matches!(
            evaluate_line("a + 1"),
            Err(Error::Parse { position: Position::First, .. })
        ));
        assert!(matches!(
            evaluate_line("1 + XI"),
            Err(Error::Parse { position: Position::Second, .. })
        ));
    }

    #[test]
    fn division_by_zero_reports_range_first() {
        // 0 is never a valid operand, so "5 / 0" stops at range validation
        // in the pipeline; the arithmetic check still guards direct callers.
        assert!(matches!(
            evaluate_line("5 / 0"),
            Err(Error::OutOfRange { value: 0 })
        ));
        let expression = Expression {
            system: NumeralSystem::Arabic,
            left: Operand(5),
            operator: "/".to_string(),
            right: Operand(0),
        };
        assert!(matches!(evaluate(&expression), Err(Error::DivideByZero)));
    }

    #[test]
    fn roman_result_must_be_positive() {
        assert!(matches!(
            evaluate_line("X - X"),
            Err(Error::InvalidRomanResult { value: 0 })
        ));
        assert!(matches!(
            evaluate_line("I - V"),
            Err(Error::InvalidRomanResult { value: -4 })
        ));
        assert!(matches!(
            evaluate_line("I / X"),
            Err(Error::InvalidRomanResult { value: 0 })
        ));
    }

    #[test]
    fn unknown_operator_fails() {
        assert!(matches!(
            evaluate_line("3 4 5"),
            Err(Error::UnknownOperator { operator }) if operator == "4"
        ));
    }

    #[test]
    fn reads_a_single_line() -> Result<()> {
        let input = "III + IV\nignored\n".as_bytes();
        assert_eq!(read_expression(input)?, "III + IV\n");
        assert!(matches!(
            read_expression("".as_bytes()),
            Err(Error::EmptyInput)
        ));
        Ok(())
    }

    #[test]
    fn line_without_newline_is_rejected() {
        assert!(matches!(
            read_expression("7 * 1".as_bytes()),
            Err(Error::UnterminatedLine)
        ));
        assert!(matches!(
            read_expression("III + IV".as_bytes()),
            Err(Error::UnterminatedLine)
        ));
    }

    #[test]
    fn format_errors() {
        assert!(matches!(evaluate_line("1 +"), Err(Error::Format)));
        assert!(matches!(evaluate_line("1  + 2"), Err(Error::Format)));
    }
}
