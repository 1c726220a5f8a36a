use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("ошибка вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Calc(#[from] romcalc::Error),
}
