//! Integer arithmetic on based numbers
//!
//! Both operands are parsed in the requested base, the operation runs
//! on arbitrary-precision integers, and the result is rendered back in
//! the same base. Division truncates toward zero and the remainder
//! takes the sign of the dividend.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{Pow, ToPrimitive, Zero};

use crate::convert::{base_to_decimal, decimal_to_base};
use crate::error::{Error, Result};

/// The supported arithmetic operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
}

impl ArithOp {
    /// All operations, in display order
    pub const ALL: [ArithOp; 6] = [
        ArithOp::Add,
        ArithOp::Subtract,
        ArithOp::Multiply,
        ArithOp::Divide,
        ArithOp::Modulo,
        ArithOp::Power,
    ];

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            ArithOp::Add => "add",
            ArithOp::Subtract => "subtract",
            ArithOp::Multiply => "multiply",
            ArithOp::Divide => "divide",
            ArithOp::Modulo => "modulo",
            ArithOp::Power => "power",
        }
    }

    /// Operator symbol as written in expressions
    pub fn symbol(&self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Subtract => "-",
            ArithOp::Multiply => "*",
            ArithOp::Divide => "/",
            ArithOp::Modulo => "%",
            ArithOp::Power => "^",
        }
    }
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ArithOp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "add" | "+" | "plus" => Ok(ArithOp::Add),
            "subtract" | "sub" | "-" | "minus" => Ok(ArithOp::Subtract),
            "multiply" | "mul" | "*" | "x" => Ok(ArithOp::Multiply),
            "divide" | "div" | "/" => Ok(ArithOp::Divide),
            "modulo" | "mod" | "%" => Ok(ArithOp::Modulo),
            "power" | "pow" | "^" | "**" => Ok(ArithOp::Power),
            other => Err(Error::UnsupportedOperation {
                reason: format!("unknown operation '{}'", other),
            }),
        }
    }
}

/// Apply an operation to two decimal values.
pub fn apply(op: ArithOp, lhs: &BigInt, rhs: &BigInt) -> Result<BigInt> {
    match op {
        ArithOp::Add => Ok(lhs + rhs),
        ArithOp::Subtract => Ok(lhs - rhs),
        ArithOp::Multiply => Ok(lhs * rhs),
        ArithOp::Divide => {
            if rhs.is_zero() {
                return Err(Error::DivisionByZero);
            }
            Ok(lhs / rhs)
        }
        ArithOp::Modulo => {
            if rhs.is_zero() {
                return Err(Error::DivisionByZero);
            }
            Ok(lhs % rhs)
        }
        ArithOp::Power => {
            if rhs < &BigInt::zero() {
                return Err(Error::UnsupportedOperation {
                    reason: "power with a negative exponent (integer domain only)".to_string(),
                });
            }
            let exponent = rhs.to_u32().ok_or_else(|| Error::UnsupportedOperation {
                reason: format!("exponent {} is too large", rhs),
            })?;
            Ok(Pow::pow(lhs, exponent))
        }
    }
}

/// Evaluate `operand_a op operand_b` with both operands and the result
/// written in `base`.
pub fn arithmetic(op: ArithOp, operand_a: &str, operand_b: &str, base: u32) -> Result<String> {
    let lhs = base_to_decimal(operand_a, base)?;
    let rhs = base_to_decimal(operand_b, base)?;
    let result = apply(op, &lhs, &rhs)?;
    decimal_to_base(&result, base)
}
