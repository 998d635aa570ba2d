use crate::error::{Error, Result};
use crate::values::ops::finite_real;
use crate::values::{Decimal, Number};

impl Number {
    /// Generic exponentiation: dispatches on the exponent's kind.
    pub fn pow(&self, rhs: &Number) -> Result<Number> {
        match rhs {
            Number::Int(x) => self.pow_int(*x),
            Number::Real(x) => self.pow_real(*x),
            Number::Decimal(x) => self.pow_decimal(x, None),
        }
    }

    /// A negative exponent leaves the integer kind: the result is the real
    /// reciprocal of the positive power.
    pub fn pow_int(&self, x: i64) -> Result<Number> {
        match self {
            Number::Decimal(d) => Ok(Number::Decimal(d.pow_int(x, None)?)),
            _ if self.is_zero() && x < 0 => Err(Error::Indeterminate {
                op: "pow",
                detail: "zero denominator".into(),
            }),
            Number::Int(base) => {
                if x >= 0 {
                    let exp = u32::try_from(x).map_err(|_| Error::Overflow { op: "pow" })?;
                    base.checked_pow(exp)
                        .map(Number::Int)
                        .ok_or(Error::Overflow { op: "pow" })
                } else {
                    finite_real((*base as f64).powf(x as f64), "pow")
                }
            }
            Number::Real(base) => finite_real(base.powf(x as f64), "pow"),
        }
    }

    pub fn pow_real(&self, x: f64) -> Result<Number> {
        if x.is_nan() {
            return Err(Error::Indeterminate {
                op: "pow",
                detail: "exponent is not a number".into(),
            });
        }

        match self {
            Number::Decimal(d) => Ok(Number::Decimal(d.pow_real(x, None)?)),
            _ if x.is_infinite() => Ok(Number::Decimal(self.promote(None).pow_real(x, None)?)),
            _ if self.is_zero() && x < 0.0 => Err(Error::Indeterminate {
                op: "pow",
                detail: "zero denominator".into(),
            }),
            Number::Int(base) => finite_real((*base as f64).powf(x), "pow"),
            Number::Real(base) => finite_real(base.powf(x), "pow"),
        }
    }

    pub fn pow_decimal(&self, x: &Decimal, scale: Option<u32>) -> Result<Number> {
        match self {
            Number::Decimal(d) => Ok(Number::Decimal(d.pow_decimal(x, scale)?)),
            _ => Ok(Number::Decimal(self.promote(None).pow_decimal(x, scale)?)),
        }
    }
}
