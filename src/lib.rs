//! Exact and arbitrary-precision arithmetic over a small numeric tower.
//!
//! Three finite kinds — exact integers, native floats ("reals"), and
//! scaled arbitrary-precision decimals — plus two interned signed
//! infinities that share the decimal contract. Mixed-kind operations
//! promote toward the more general kind (integer < real < decimal, with
//! infinity absorbing everything it meets), and every combination with no
//! single defined result — opposing infinities, zero denominators,
//! infinity times zero — surfaces as a typed error rather than a silent
//! default.

pub(crate) mod backend;

pub mod error;
pub mod values;

pub use error::{Error, Result};
pub use values::{Decimal, Kind, Native, Number, DEFAULT_SCALE};
