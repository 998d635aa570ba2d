//! The two infinite decimals and their special-value algebra.
//!
//! Infinity absorbs finite perturbations under add/sub, but opposing
//! infinities under add/sub and any pairing of infinities under mult/div
//! are indeterminate forms with no single defined value — those surface as
//! errors, never as a silent default.

use once_cell::sync::Lazy;

use super::decimal::{Decimal, Exp, Repr, Sign};
use crate::error::{Error, Result};

static INF_POSITIVE: Lazy<Decimal> = Lazy::new(|| Decimal {
    repr: Repr::Infinite(Sign::Positive),
});

static INF_NEGATIVE: Lazy<Decimal> = Lazy::new(|| Decimal {
    repr: Repr::Infinite(Sign::Negative),
});

impl Decimal {
    /// The positive-infinity value. Every call returns the same interned
    /// instance.
    pub fn inf_positive() -> &'static Decimal {
        &INF_POSITIVE
    }

    /// The negative-infinity value. Every call returns the same interned
    /// instance.
    pub fn inf_negative() -> &'static Decimal {
        &INF_NEGATIVE
    }

    pub(crate) fn infinity(sign: Sign) -> &'static Decimal {
        match sign {
            Sign::Positive => Self::inf_positive(),
            Sign::Negative => Self::inf_negative(),
        }
    }

    /// Only the two native infinity sentinels construct an infinite
    /// decimal; any finite magnitude is rejected.
    pub fn from_infinity(value: f64) -> Result<&'static Decimal> {
        if value == f64::INFINITY {
            Ok(Self::inf_positive())
        } else if value == f64::NEG_INFINITY {
            Ok(Self::inf_negative())
        } else {
            Err(Error::InvalidConstruction {
                kind: "infinity",
                given: value.to_string(),
            })
        }
    }

    pub(crate) fn add_infinite(&self, rhs: &Decimal) -> Result<Decimal> {
        match (&self.repr, &rhs.repr) {
            (Repr::Infinite(a), Repr::Infinite(b)) if a == b => Ok(self.clone()),
            (Repr::Infinite(_), Repr::Infinite(_)) => Err(Error::Indeterminate {
                op: "add",
                detail: "opposite infinities".into(),
            }),
            (Repr::Infinite(_), Repr::Finite { .. }) => Ok(self.clone()),
            (Repr::Finite { .. }, Repr::Infinite(sign)) => Ok(Self::infinity(*sign).clone()),
            (Repr::Finite { .. }, Repr::Finite { .. }) => {
                unreachable!("add_infinite requires an infinite operand")
            }
        }
    }

    pub(crate) fn sub_infinite(&self, rhs: &Decimal) -> Result<Decimal> {
        match (&self.repr, &rhs.repr) {
            (Repr::Infinite(a), Repr::Infinite(b)) if a != b => Ok(self.clone()),
            (Repr::Infinite(_), Repr::Infinite(_)) => Err(Error::Indeterminate {
                op: "sub",
                detail: "equal infinities".into(),
            }),
            (Repr::Infinite(_), Repr::Finite { .. }) => Ok(self.clone()),
            (Repr::Finite { .. }, Repr::Infinite(sign)) => Ok(Self::infinity(sign.opposite()).clone()),
            (Repr::Finite { .. }, Repr::Finite { .. }) => {
                unreachable!("sub_infinite requires an infinite operand")
            }
        }
    }

    pub(crate) fn mul_infinite(&self, rhs: &Decimal) -> Result<Decimal> {
        debug_assert!(self.is_infinite() || rhs.is_infinite());

        if self.is_zero() || rhs.is_zero() {
            return Err(Error::Indeterminate {
                op: "mul",
                detail: "infinity and zero".into(),
            });
        }

        Ok(Self::infinity(self.arith_sign().combine(rhs.arith_sign())).clone())
    }

    /// The exponent cases shared by every pow entry point of an infinite
    /// receiver. `Some` short-circuits; `None` falls through to the entry
    /// point's own handling.
    pub(crate) fn pow_special_cases_infinite(&self, exp: &Exp) -> Result<Option<Decimal>> {
        if exp.is_positive() {
            if self.is_positive() {
                return Ok(Some(self.clone()));
            }
            if exp.is_infinite() {
                return Err(Error::Indeterminate {
                    op: "pow",
                    detail: "negative base with infinite exponent".into(),
                });
            }
        } else if exp.is_negative() {
            return Ok(Some(Decimal::zero(0)));
        }

        Ok(None)
    }
}
