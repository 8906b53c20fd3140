//! Four-function arithmetic dispatch
//!
//! An operator character is turned into an [`Operator`] once, at the input
//! boundary. Everything after that is an exhaustive match, so an
//! unrecognized character can never fall through to some default arithmetic.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Cannot divide by zero!")]
    DivisionByZero,

    #[error("Invalid operation '{0}'")]
    UnknownOperator(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Apply the operator. Division by exactly zero (either sign) is rejected.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Subtract => Ok(lhs - rhs),
            Operator::Multiply => Ok(lhs * rhs),
            Operator::Divide if rhs == 0.0 => Err(CalcError::DivisionByZero),
            Operator::Divide => Ok(lhs / rhs),
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = CalcError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            other => Err(CalcError::UnknownOperator(other)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A completed calculation, printed as `10.00 + 3.00 = 13.00`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    pub lhs: f64,
    pub operator: Operator,
    pub rhs: f64,
    pub result: f64,
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} {} {:.2} = {:.2}",
            self.lhs, self.operator, self.rhs, self.result
        )
    }
}

/// Dispatch `lhs <op> rhs` where `op` is the raw operator character
pub fn evaluate(lhs: f64, op: char, rhs: f64) -> Result<Calculation, CalcError> {
    let operator = Operator::try_from(op)?;
    let result = operator.apply(lhs, rhs)?;
    Ok(Calculation {
        lhs,
        operator,
        rhs,
        result,
    })
}
