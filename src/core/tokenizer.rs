use tracing::debug;

use crate::error::{Error, Result};

/// Split a line into `[left, operator, right]`.
///
/// Surrounding whitespace is trimmed, then the line is split on single ASCII
/// spaces only. Doubled spaces or tabs yield the wrong token count.
pub fn tokenize(line: &str) -> Result<[&str; 3]> {
    let parts: Vec<&str> = line.trim().split(' ').collect();
    debug!("Tokens: {:?}", parts);

    match parts.as_slice() {
        &[left, operator, right] => Ok([left, operator, right]),
        _ => Err(Error::Format),
    }
}
