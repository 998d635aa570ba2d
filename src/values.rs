//! The numeric value tower and its dispatch/promotion engine.

mod decimal;
mod infinite;
mod number;
mod shorthands;

pub(crate) mod ops;

pub use decimal::{Decimal, DEFAULT_SCALE};
pub use number::{Kind, Native, Number};
