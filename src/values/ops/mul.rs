use crate::apply_native_bin_op;
use crate::error::Result;
use crate::values::{Decimal, Number};

impl Number {
    /// Generic multiplication: dispatches on the operand's kind.
    pub fn mul(&self, rhs: &Number) -> Result<Number> {
        match rhs {
            Number::Int(x) => self.mul_int(*x),
            Number::Real(x) => self.mul_real(*x),
            Number::Decimal(x) => self.mul_decimal(x, None),
        }
    }

    pub fn mul_int(&self, x: i64) -> Result<Number> {
        match self {
            Number::Decimal(d) => Ok(Number::Decimal(d.mul(&Decimal::from_i64(x, 0), None)?)),
            _ => {
                let rhs = Number::Int(x);
                apply_native_bin_op!(self, &rhs, checked_mul, *, "mul")
            }
        }
    }

    pub fn mul_real(&self, x: f64) -> Result<Number> {
        if !x.is_finite() {
            let inf = Decimal::from_infinity(x)?;
            return self.mul_decimal(inf, None);
        }

        match self {
            Number::Decimal(d) => Ok(Number::Decimal(d.mul(&Decimal::from_f64(x, None)?, None)?)),
            _ => {
                let rhs = Number::Real(x);
                apply_native_bin_op!(self, &rhs, checked_mul, *, "mul")
            }
        }
    }

    pub fn mul_decimal(&self, x: &Decimal, scale: Option<u32>) -> Result<Number> {
        match self {
            Number::Decimal(d) => Ok(Number::Decimal(d.mul(x, scale)?)),
            _ => Ok(Number::Decimal(self.promote(None).mul(x, scale)?)),
        }
    }
}

impl std::ops::Mul for Number {
    type Output = Result<Number>;

    fn mul(self, rhs: Self) -> Self::Output {
        Number::mul(&self, &rhs)
    }
}

impl std::ops::Mul for &Number {
    type Output = Result<Number>;

    fn mul(self, rhs: Self) -> Self::Output {
        Number::mul(self, rhs)
    }
}

#[cfg(test)]
mod test {
    use crate::error::Error;
    use crate::values::Decimal;
    use crate::*;

    #[test]
    fn five_times_five() {
        let result = int!(5) * real!(5.0);
        assert_eq!(result.unwrap(), real!(25.0))
    }

    #[test]
    fn two_times_two_hundred() {
        let result = int!(2) * int!(200);
        assert_eq!(result.unwrap(), int!(400))
    }

    #[test]
    fn mul_integer_matches_mul_real() {
        let lhs = real!(2.5);
        assert_eq!(lhs.mul_int(3).unwrap(), lhs.mul_real(3.0).unwrap())
    }

    #[test]
    fn mul_decimal_matches_a_promoted_receiver() {
        let operand = Decimal::parse("1.25", None).unwrap();
        assert_eq!(
            real!(2.5).mul_decimal(&operand, None).unwrap(),
            real!(2.5).to_decimal(None).mul_decimal(&operand, None).unwrap()
        );
    }

    #[test]
    fn real_overflow_is_reported() {
        let result = real!(1e308) * real!(10.0);
        assert!(matches!(result, Err(Error::Overflow { op: "mul" })))
    }

    #[test]
    fn infinity_times_a_negative() {
        let result = infinite!(+) * int!(-3);
        assert_eq!(result.unwrap(), infinite!(-));
    }

    #[test]
    fn two_negatives_make_a_positive() {
        let result = infinite!(-) * real!(-0.5);
        assert_eq!(result.unwrap(), infinite!(+));
    }

    #[test]
    fn infinity_times_zero() {
        let result = infinite!(+) * int!(0);
        assert!(matches!(result, Err(Error::Indeterminate { op: "mul", .. })))
    }

    #[test]
    fn zero_times_infinity() {
        let result = decimal!(0) * infinite!(-);
        assert!(matches!(result, Err(Error::Indeterminate { op: "mul", .. })))
    }
}
