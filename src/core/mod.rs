//! Core pipeline building blocks: tokenizer, numeral tables and conversion,
//! operand validation and arithmetic. These are internal primitives consumed
//! by the high-level `api` module.
pub mod arithmetic;
pub mod numerals;
pub mod tokenizer;
pub mod validate;
