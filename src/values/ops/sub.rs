use crate::apply_native_bin_op;
use crate::error::Result;
use crate::values::{Decimal, Number};

impl Number {
    /// Generic subtraction: dispatches on the operand's kind.
    pub fn sub(&self, rhs: &Number) -> Result<Number> {
        match rhs {
            Number::Int(x) => self.sub_int(*x),
            Number::Real(x) => self.sub_real(*x),
            Number::Decimal(x) => self.sub_decimal(x, None),
        }
    }

    pub fn sub_int(&self, x: i64) -> Result<Number> {
        match self {
            Number::Decimal(d) => Ok(Number::Decimal(d.sub(&Decimal::from_i64(x, 0), None)?)),
            _ => {
                let rhs = Number::Int(x);
                apply_native_bin_op!(self, &rhs, checked_sub, -, "sub")
            }
        }
    }

    pub fn sub_real(&self, x: f64) -> Result<Number> {
        if !x.is_finite() {
            let inf = Decimal::from_infinity(x)?;
            return self.sub_decimal(inf, None);
        }

        match self {
            Number::Decimal(d) => Ok(Number::Decimal(d.sub(&Decimal::from_f64(x, None)?, None)?)),
            _ => {
                let rhs = Number::Real(x);
                apply_native_bin_op!(self, &rhs, checked_sub, -, "sub")
            }
        }
    }

    pub fn sub_decimal(&self, x: &Decimal, scale: Option<u32>) -> Result<Number> {
        match self {
            Number::Decimal(d) => Ok(Number::Decimal(d.sub(x, scale)?)),
            _ => Ok(Number::Decimal(self.promote(None).sub(x, scale)?)),
        }
    }
}

impl std::ops::Sub for Number {
    type Output = Result<Number>;

    fn sub(self, rhs: Self) -> Self::Output {
        Number::sub(&self, &rhs)
    }
}

impl std::ops::Sub for &Number {
    type Output = Result<Number>;

    fn sub(self, rhs: Self) -> Self::Output {
        Number::sub(self, rhs)
    }
}
