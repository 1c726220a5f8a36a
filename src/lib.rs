#![doc = r#"
romcalc — a single-expression calculator for Roman and Arabic numerals.

The crate evaluates one expression of the form `<operand> <operator> <operand>`.
Operands are either Roman numerals `I`..`X` (any letter case) or Arabic
integers `1`..`10`; both operands must use the same notation, and the result
is rendered in that notation. It powers the `romcalc` binary and can be
embedded directly.

Quick start
-----------
```rust
fn main() -> romcalc::Result<()> {
    let evaluation = romcalc::evaluate_line("III + IV")?;
    assert_eq!(evaluation.rendered, "VII");
    assert_eq!(evaluation.to_string(), "Результат: VII");

    let evaluation = romcalc::evaluate_line("5 * 5")?;
    assert_eq!(evaluation.value, 25);
    Ok(())
}
```

Error handling
--------------
All public functions return `romcalc::Result<T>`; match on `romcalc::Error`
to handle specific cases.

```rust
use romcalc::{evaluate_line, Error};

match evaluate_line("X - X") {
    Err(Error::InvalidRomanResult { value }) => assert_eq!(value, 0),
    other => panic!("unexpected: {other:?}"),
}
assert!(matches!(evaluate_line("IV + 3"), Err(Error::MixedNumerals)));
```

Useful modules
--------------
- [`api`] — parse, evaluate and format entrypoints.
- [`core`](crate::core) — tokenizer, numeral tables and conversion, validation, arithmetic.
- [`types`] — `NumeralSystem`, `Operator`, `Operand`, `Position`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod types;

// Curated public API surface
pub use error::{Error, Result};
pub use types::{NumeralSystem, Operand, Operator, Position};

pub use crate::core::arithmetic::calculate;
pub use crate::core::numerals::{arabic_to_roman, classify, is_roman, parse_arabic, roman_to_arabic};
pub use crate::core::tokenizer::tokenize;
pub use crate::core::validate::validate_range;

pub use api::{
    Evaluation, Expression, RESULT_PREFIX, evaluate, evaluate_line, format_result,
    parse_expression, read_expression,
};
