//! The delegation boundary to the arbitrary-precision backend.
//!
//! Every function takes the scale (count of fractional digits) the result
//! must honor; extra digits are truncated toward zero, bc-style. The digit
//! level work itself belongs to `bigdecimal` — this module only composes it.

use bigdecimal::BigDecimal;
use num_traits::{One, Zero};

pub(crate) fn add(lhs: &BigDecimal, rhs: &BigDecimal, scale: u32) -> BigDecimal {
    (lhs + rhs).with_scale(scale as i64)
}

pub(crate) fn sub(lhs: &BigDecimal, rhs: &BigDecimal, scale: u32) -> BigDecimal {
    (lhs - rhs).with_scale(scale as i64)
}

pub(crate) fn mul(lhs: &BigDecimal, rhs: &BigDecimal, scale: u32) -> BigDecimal {
    (lhs * rhs).with_scale(scale as i64)
}

/// Callers intercept zero denominators before delegating here; `bigdecimal`
/// has no recoverable division-by-zero report of its own.
pub(crate) fn div(lhs: &BigDecimal, rhs: &BigDecimal, scale: u32) -> BigDecimal {
    debug_assert!(!rhs.is_zero(), "zero denominators are intercepted by the caller");

    (lhs / rhs).with_scale(scale as i64)
}

/// Square-and-multiply over backend multiplication. A negative exponent is
/// the reciprocal of the positive power; a zero base with a negative
/// exponent is intercepted by the caller.
pub(crate) fn pow(base: &BigDecimal, exponent: i64, scale: u32) -> BigDecimal {
    if exponent == 0 {
        return BigDecimal::one().with_scale(scale as i64);
    }

    let mut acc = BigDecimal::one();
    let mut square = base.clone();
    let mut remaining = exponent.unsigned_abs();

    while remaining > 0 {
        if remaining & 1 == 1 {
            acc = &acc * &square;
        }
        remaining >>= 1;
        if remaining > 0 {
            square = &square * &square;
        }
    }

    if exponent < 0 {
        debug_assert!(!acc.is_zero(), "zero bases with negative exponents are intercepted by the caller");
        acc = BigDecimal::one() / acc;
    }

    acc.with_scale(scale as i64)
}

/// `None` is the backend's negative-radicand report.
pub(crate) fn sqrt(value: &BigDecimal, scale: u32) -> Option<BigDecimal> {
    value.sqrt().map(|root| root.with_scale(scale as i64))
}
