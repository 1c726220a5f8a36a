//! Crate-level error type and `Result` alias.
//! Every pipeline stage returns one of these variants; the binary prints the
//! message and exits with a non-zero status.
use thiserror::Error;

use crate::types::Position;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("неверный формат ввода: {0}")]
    Io(#[from] std::io::Error),

    #[error("неверный формат ввода: пустой ввод")]
    EmptyInput,

    #[error("неверный формат ввода: строка не завершена переводом строки")]
    UnterminatedLine,

    #[error("неверный формат выражения. Должно быть два операнда и один оператор")]
    Format,

    #[error("нельзя смешивать римские и арабские числа")]
    MixedNumerals,

    #[error("неверное {position} число: {token:?}")]
    Parse { position: Position, token: String },

    #[error("неизвестное римское число: {token:?}")]
    UnknownRoman { token: String },

    #[error("число должно быть в диапазоне от 1 до 10, получено: {value}")]
    OutOfRange { value: i64 },

    #[error("неизвестная операция: {operator:?}")]
    UnknownOperator { operator: String },

    #[error("деление на 0 невозможно")]
    DivideByZero,

    #[error("результат римского числа должен быть больше 0, получено: {value}")]
    InvalidRomanResult { value: i64 },
}
