//! radix — base conversion and integer arithmetic for bases 2-36
//!
//! A small library of pure functions over strings and
//! arbitrary-precision integers, consumed by the `radix` CLI and the
//! desktop GUI glue crate.

pub mod alphabet;
pub mod arith;
pub mod batch;
pub mod config;
pub mod convert;
pub mod detect;
pub mod error;
pub mod history;
pub mod repl;
pub mod validate;

pub use arith::{arithmetic, ArithOp};
pub use convert::{base_to_decimal, convert_base, decimal_to_base};
pub use detect::detect_base;
pub use error::{Error, Result};
pub use validate::validate;
