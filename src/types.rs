//! Shared types used across the pipeline: `NumeralSystem`, `Operator`,
//! `Operand` and the operand `Position` used in error messages.
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Notation of an expression, taken from its first operand.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum NumeralSystem {
    Roman,
    Arabic,
}

impl fmt::Display for NumeralSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumeralSystem::Roman => write!(f, "Roman"),
            NumeralSystem::Arabic => write!(f, "Arabic"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "*" => Ok(Operator::Mul),
            "/" => Ok(Operator::Div),
            other => Err(Error::UnknownOperator {
                operator: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Which side of the operator a token came from.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Position {
    First,
    Second,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::First => write!(f, "первое"),
            Position::Second => write!(f, "второе"),
        }
    }
}

/// A resolved operand value. The numeral system is carried by the
/// enclosing `Expression`, not by each operand.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Operand(pub i64);

impl Operand {
    pub fn value(self) -> i64 {
        self.0
    }
}
