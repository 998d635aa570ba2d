use std::fmt::Display;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::backend;
use crate::error::{Error, Result};

/// Fractional digits honored when an integer or real is promoted to a
/// decimal without an explicit scale.
pub const DEFAULT_SCALE: u32 = 16;

/// An arbitrary-precision decimal value.
///
/// A finite decimal carries its magnitude plus the scale (count of
/// fractional digits) its operations honor; every binary operation accepts
/// an optional per-call scale that overrides the stored one for that single
/// computation. The two infinite values share this type but reject any
/// finite magnitude — they are only reachable through [`Decimal::inf_positive`],
/// [`Decimal::inf_negative`] and [`Decimal::from_infinity`].
#[derive(Debug, Clone)]
pub struct Decimal {
    pub(crate) repr: Repr,
}

#[derive(Debug, Clone)]
pub(crate) enum Repr {
    Finite { magnitude: BigDecimal, scale: u32 },
    Infinite(Sign),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub(crate) fn opposite(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    pub(crate) fn combine(self, other: Sign) -> Sign {
        if self == other {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// Exponent operand view shared by the pow special-case hooks.
pub(crate) enum Exp<'a> {
    Int(i64),
    Real(f64),
    Decimal(&'a Decimal),
}

impl Exp<'_> {
    fn is_zero(&self) -> bool {
        match self {
            Exp::Int(n) => *n == 0,
            Exp::Real(x) => *x == 0.0,
            Exp::Decimal(d) => d.is_zero(),
        }
    }

    pub(crate) fn is_positive(&self) -> bool {
        match self {
            Exp::Int(n) => *n > 0,
            Exp::Real(x) => *x > 0.0,
            Exp::Decimal(d) => d.is_positive(),
        }
    }

    pub(crate) fn is_negative(&self) -> bool {
        match self {
            Exp::Int(n) => *n < 0,
            Exp::Real(x) => *x < 0.0,
            Exp::Decimal(d) => d.is_negative(),
        }
    }

    pub(crate) fn is_infinite(&self) -> bool {
        match self {
            Exp::Int(_) => false,
            Exp::Real(x) => x.is_infinite(),
            Exp::Decimal(d) => d.is_infinite(),
        }
    }

    /// Integer part of the exponent, the portion the backend exponentiates.
    fn truncated(&self) -> Result<i64> {
        match self {
            Exp::Int(n) => Ok(*n),
            Exp::Real(x) => x.trunc().to_i64().ok_or(Error::Overflow { op: "pow" }),
            Exp::Decimal(d) => match &d.repr {
                Repr::Finite { magnitude, .. } => magnitude
                    .with_scale(0)
                    .to_i64()
                    .ok_or(Error::Overflow { op: "pow" }),
                Repr::Infinite(_) => unreachable!("infinite exponents are intercepted before truncation"),
            },
        }
    }
}

impl Decimal {
    /// A finite decimal, truncated to `scale` fractional digits.
    pub fn new(magnitude: BigDecimal, scale: u32) -> Self {
        Decimal {
            repr: Repr::Finite {
                magnitude: magnitude.with_scale(scale as i64),
                scale,
            },
        }
    }

    /// Parses a decimal literal. The scale defaults to the count of
    /// fractional digits in the input.
    pub fn parse(input: &str, scale: Option<u32>) -> Result<Self> {
        let magnitude = BigDecimal::from_str(input.trim()).map_err(|_| Error::InvalidConstruction {
            kind: "decimal",
            given: input.to_string(),
        })?;
        let scale = scale.unwrap_or_else(|| inferred_scale(&magnitude));

        Ok(Self::new(magnitude, scale))
    }

    /// Converts a native float. Finite values become finite decimals (at
    /// the inferred scale, floored to [`DEFAULT_SCALE`], unless one is
    /// given); the two infinity sentinels route to their singletons; there
    /// is no decimal rendition of a non-number.
    pub fn from_f64(value: f64, scale: Option<u32>) -> Result<Self> {
        if value.is_nan() {
            return Err(Error::InvalidConstruction {
                kind: "decimal",
                given: value.to_string(),
            });
        }
        if value.is_infinite() {
            return Ok(Self::from_infinity(value)?.clone());
        }

        let magnitude = big_from_f64(value);
        let scale = scale.unwrap_or_else(|| inferred_scale(&magnitude).max(DEFAULT_SCALE));

        Ok(Self::new(magnitude, scale))
    }

    pub fn from_i64(value: i64, scale: u32) -> Self {
        Self::new(BigDecimal::from(value), scale)
    }

    pub fn zero(scale: u32) -> Self {
        Self::new(BigDecimal::zero(), scale)
    }

    pub(crate) fn one(scale: u32) -> Self {
        Self::new(BigDecimal::one(), scale)
    }

    /// The stored scale; infinities have none.
    pub fn scale(&self) -> Option<u32> {
        match &self.repr {
            Repr::Finite { scale, .. } => Some(*scale),
            Repr::Infinite(_) => None,
        }
    }

    /// A copy of this value truncated to `scale` fractional digits.
    /// Infinities are unaffected.
    pub fn rescaled(&self, scale: u32) -> Self {
        match &self.repr {
            Repr::Finite { magnitude, .. } => Self::new(magnitude.clone(), scale),
            Repr::Infinite(_) => self.clone(),
        }
    }

    pub fn is_zero(&self) -> bool {
        match &self.repr {
            Repr::Finite { magnitude, .. } => magnitude.is_zero(),
            Repr::Infinite(_) => false,
        }
    }

    pub fn is_positive(&self) -> bool {
        match &self.repr {
            Repr::Finite { magnitude, .. } => magnitude.is_positive(),
            Repr::Infinite(sign) => *sign == Sign::Positive,
        }
    }

    pub fn is_negative(&self) -> bool {
        match &self.repr {
            Repr::Finite { magnitude, .. } => magnitude.is_negative(),
            Repr::Infinite(sign) => *sign == Sign::Negative,
        }
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self.repr, Repr::Infinite(_))
    }

    pub(crate) fn kind_name(&self) -> &'static str {
        match &self.repr {
            Repr::Finite { .. } => "decimal",
            Repr::Infinite(_) => "infinite decimal",
        }
    }

    /// Sign under the convention multiplication and division use once zero
    /// operands have been ruled out.
    pub(crate) fn arith_sign(&self) -> Sign {
        if self.is_negative() {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    pub(crate) fn eq_magnitude(&self, other: &BigDecimal) -> bool {
        match &self.repr {
            Repr::Finite { magnitude, .. } => magnitude == other,
            Repr::Infinite(_) => false,
        }
    }

    fn governing_scale(&self, scale: Option<u32>) -> u32 {
        scale.or(self.scale()).unwrap_or(DEFAULT_SCALE)
    }

    pub fn add(&self, rhs: &Decimal, scale: Option<u32>) -> Result<Decimal> {
        match (&self.repr, &rhs.repr) {
            (Repr::Finite { magnitude: a, .. }, Repr::Finite { magnitude: b, .. }) => {
                let scale = self.governing_scale(scale);
                Ok(Decimal::new(backend::add(a, b, scale), scale))
            }
            _ => self.add_infinite(rhs),
        }
    }

    pub fn sub(&self, rhs: &Decimal, scale: Option<u32>) -> Result<Decimal> {
        match (&self.repr, &rhs.repr) {
            (Repr::Finite { magnitude: a, .. }, Repr::Finite { magnitude: b, .. }) => {
                let scale = self.governing_scale(scale);
                Ok(Decimal::new(backend::sub(a, b, scale), scale))
            }
            _ => self.sub_infinite(rhs),
        }
    }

    pub fn mul(&self, rhs: &Decimal, scale: Option<u32>) -> Result<Decimal> {
        match (&self.repr, &rhs.repr) {
            (Repr::Finite { magnitude: a, .. }, Repr::Finite { magnitude: b, .. }) => {
                let scale = self.governing_scale(scale);
                Ok(Decimal::new(backend::mul(a, b, scale), scale))
            }
            _ => self.mul_infinite(rhs),
        }
    }

    pub fn div(&self, rhs: &Decimal, scale: Option<u32>) -> Result<Decimal> {
        self.div_special_cases(rhs)?;

        match (&self.repr, &rhs.repr) {
            (Repr::Finite { magnitude: a, .. }, Repr::Finite { magnitude: b, .. }) => {
                let scale = self.governing_scale(scale);
                Ok(Decimal::new(backend::div(a, b, scale), scale))
            }
            (Repr::Infinite(sign), _) => Ok(Self::infinity(sign.combine(rhs.arith_sign())).clone()),
            (Repr::Finite { .. }, Repr::Infinite(_)) => Ok(Decimal::zero(self.governing_scale(scale))),
        }
    }

    // The infinite-operand check runs before the zero-denominator check: an
    // infinite denominator is never zero-valued, but a finite one still
    // might be.
    fn div_special_cases(&self, rhs: &Decimal) -> Result<()> {
        if self.is_infinite() && rhs.is_infinite() {
            return Err(Error::Indeterminate {
                op: "div",
                detail: "infinity and infinity".into(),
            });
        }
        if rhs.is_zero() {
            log::error!("{self} / 0");

            return Err(Error::Indeterminate {
                op: "div",
                detail: "zero denominator".into(),
            });
        }

        Ok(())
    }

    pub fn pow_int(&self, exponent: i64, scale: Option<u32>) -> Result<Decimal> {
        let exp = Exp::Int(exponent);
        match &self.repr {
            Repr::Infinite(_) => {
                if let Some(value) = self.pow_special_cases_infinite(&exp)? {
                    return Ok(value);
                }
                Ok(if exponent % 2 == 0 {
                    Self::inf_positive().clone()
                } else {
                    Self::inf_negative().clone()
                })
            }
            Repr::Finite { .. } => self.pow_finite(&exp, scale),
        }
    }

    pub fn pow_real(&self, exponent: f64, scale: Option<u32>) -> Result<Decimal> {
        if exponent.is_nan() {
            return Err(Error::Indeterminate {
                op: "pow",
                detail: "exponent is not a number".into(),
            });
        }

        let exp = Exp::Real(exponent);
        match &self.repr {
            Repr::Infinite(_) => {
                if let Some(value) = self.pow_special_cases_infinite(&exp)? {
                    return Ok(value);
                }
                Err(Error::NotImplemented {
                    kind: "infinite decimal",
                    op: "pow_real",
                })
            }
            Repr::Finite { .. } => self.pow_finite(&exp, scale),
        }
    }

    pub fn pow_decimal(&self, exponent: &Decimal, scale: Option<u32>) -> Result<Decimal> {
        let exp = Exp::Decimal(exponent);
        match &self.repr {
            Repr::Infinite(_) => {
                if let Some(value) = self.pow_special_cases_infinite(&exp)? {
                    return Ok(value);
                }
                Err(Error::NotImplemented {
                    kind: "infinite decimal",
                    op: "pow_decimal",
                })
            }
            Repr::Finite { .. } => self.pow_finite(&exp, scale),
        }
    }

    fn pow_finite(&self, exp: &Exp, scale: Option<u32>) -> Result<Decimal> {
        let scale = self.governing_scale(scale);
        if let Some(value) = self.pow_special_cases(exp, scale)? {
            return Ok(value);
        }

        let Repr::Finite { magnitude, .. } = &self.repr else {
            unreachable!("pow_finite is only reached with a finite receiver");
        };

        // Non-integer exponents are truncated to their integer part before
        // delegation.
        Ok(Decimal::new(backend::pow(magnitude, exp.truncated()?, scale), scale))
    }

    /// Degenerate exponents intercepted before delegating: `Some` is a
    /// short-circuit result, `None` means the computation proceeds.
    fn pow_special_cases(&self, exp: &Exp, scale: u32) -> Result<Option<Decimal>> {
        if exp.is_infinite() {
            return Err(Error::NotImplemented {
                kind: "decimal",
                op: "pow",
            });
        }
        if exp.is_zero() {
            return Ok(Some(Decimal::one(scale)));
        }
        if self.is_zero() && exp.is_negative() {
            return Err(Error::Indeterminate {
                op: "pow",
                detail: "zero denominator".into(),
            });
        }

        Ok(None)
    }

    pub fn sqrt(&self, scale: Option<u32>) -> Result<Decimal> {
        match &self.repr {
            Repr::Infinite(_) => Err(Error::NotImplemented {
                kind: "infinite decimal",
                op: "sqrt",
            }),
            Repr::Finite { magnitude, .. } => {
                let scale = self.governing_scale(scale);
                let root = backend::sqrt(magnitude, scale).ok_or_else(|| Error::Backend {
                    op: "sqrt",
                    message: "negative radicand".into(),
                })?;

                Ok(Decimal::new(root, scale))
            }
        }
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        match (&self.repr, &other.repr) {
            (Repr::Finite { magnitude: a, .. }, Repr::Finite { magnitude: b, .. }) => a == b,
            (Repr::Infinite(a), Repr::Infinite(b)) => a == b,
            _ => false,
        }
    }
}

impl Display for Decimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.repr {
            Repr::Finite { magnitude, .. } => write!(f, "{magnitude}"),
            Repr::Infinite(Sign::Positive) => write!(f, "inf"),
            Repr::Infinite(Sign::Negative) => write!(f, "-inf"),
        }
    }
}

pub(crate) fn big_from_f64(value: f64) -> BigDecimal {
    debug_assert!(value.is_finite());

    value
        .to_string()
        .parse()
        .expect("finite floats format as decimal literals")
}

fn inferred_scale(magnitude: &BigDecimal) -> u32 {
    magnitude.fractional_digit_count().max(0) as u32
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_infers_the_scale_from_the_literal() {
        let value = Decimal::parse("2.555", None).unwrap();
        assert_eq!(value.scale(), Some(3));
    }

    #[test]
    fn parse_rejects_garbage() {
        let result = Decimal::parse("two and a half", None);
        assert!(matches!(result, Err(Error::InvalidConstruction { .. })));
    }

    #[test]
    fn construction_truncates_to_the_scale() {
        let value = Decimal::parse("2.559", Some(2)).unwrap();
        assert_eq!(value, Decimal::parse("2.55", None).unwrap());
    }

    #[test]
    fn stored_scale_governs_division() {
        let one = Decimal::from_i64(1, 4);
        let three = Decimal::from_i64(3, 0);
        let result = one.div(&three, None).unwrap();
        assert_eq!(result, Decimal::parse("0.3333", None).unwrap());
    }

    #[test]
    fn explicit_scale_overrides_the_stored_one() {
        let one = Decimal::from_i64(1, 4);
        let three = Decimal::from_i64(3, 0);
        let result = one.div(&three, Some(2)).unwrap();
        assert_eq!(result, Decimal::parse("0.33", None).unwrap());
    }

    #[test]
    fn zero_denominator_is_indeterminate() {
        let one = Decimal::from_i64(1, 2);
        let result = one.div(&Decimal::zero(2), None);
        assert!(matches!(result, Err(Error::Indeterminate { op: "div", .. })));
    }

    #[test]
    fn zeroth_power_is_one() {
        let value = Decimal::parse("7.5", None).unwrap();
        assert_eq!(value.pow_int(0, None).unwrap(), Decimal::one(1));
    }

    #[test]
    fn zero_base_with_negative_exponent_is_indeterminate() {
        let result = Decimal::zero(2).pow_int(-2, None);
        assert!(matches!(result, Err(Error::Indeterminate { op: "pow", .. })));
    }

    #[test]
    fn real_exponents_truncate() {
        let two = Decimal::from_i64(2, 0);
        assert_eq!(two.pow_real(3.7, None).unwrap(), Decimal::from_i64(8, 0));
    }

    #[test]
    fn equality_ignores_scale() {
        let coarse = Decimal::parse("2.5", None).unwrap();
        let fine = Decimal::parse("2.5", Some(8)).unwrap();
        assert_eq!(coarse, fine);
    }
}
