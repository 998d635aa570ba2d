use crate::apply_native_bin_op;
use crate::error::{Error, Result};
use crate::values::{Decimal, Number};

impl Number {
    /// Generic division: dispatches on the operand's kind. A zero-valued
    /// divisor is intercepted before any computation, whatever the kinds.
    pub fn div(&self, rhs: &Number) -> Result<Number> {
        match rhs {
            Number::Int(x) => self.div_int(*x),
            Number::Real(x) => self.div_real(*x),
            Number::Decimal(x) => self.div_decimal(x, None),
        }
    }

    pub fn div_int(&self, x: i64) -> Result<Number> {
        match self {
            Number::Decimal(d) => Ok(Number::Decimal(d.div(&Decimal::from_i64(x, 0), None)?)),
            _ => {
                if x == 0 {
                    log::error!("{self} / 0");

                    return Err(Error::Indeterminate {
                        op: "div",
                        detail: "zero denominator".into(),
                    });
                }
                let rhs = Number::Int(x);
                apply_native_bin_op!(self, &rhs, checked_div, /, "div")
            }
        }
    }

    pub fn div_real(&self, x: f64) -> Result<Number> {
        if !x.is_finite() {
            let inf = Decimal::from_infinity(x)?;
            return self.div_decimal(inf, None);
        }

        match self {
            Number::Decimal(d) => Ok(Number::Decimal(d.div(&Decimal::from_f64(x, None)?, None)?)),
            _ => {
                if x == 0.0 {
                    log::error!("{self} / 0");

                    return Err(Error::Indeterminate {
                        op: "div",
                        detail: "zero denominator".into(),
                    });
                }
                let rhs = Number::Real(x);
                apply_native_bin_op!(self, &rhs, checked_div, /, "div")
            }
        }
    }

    pub fn div_decimal(&self, x: &Decimal, scale: Option<u32>) -> Result<Number> {
        match self {
            Number::Decimal(d) => Ok(Number::Decimal(d.div(x, scale)?)),
            _ => Ok(Number::Decimal(self.promote(None).div(x, scale)?)),
        }
    }
}

impl std::ops::Div for Number {
    type Output = Result<Number>;

    fn div(self, rhs: Self) -> Self::Output {
        Number::div(&self, &rhs)
    }
}

impl std::ops::Div for &Number {
    type Output = Result<Number>;

    fn div(self, rhs: Self) -> Self::Output {
        Number::div(self, rhs)
    }
}
