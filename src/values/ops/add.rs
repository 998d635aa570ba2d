use crate::apply_native_bin_op;
use crate::error::Result;
use crate::values::{Decimal, Number};

impl Number {
    /// Generic addition: dispatches on the operand's kind.
    pub fn add(&self, rhs: &Number) -> Result<Number> {
        match rhs {
            Number::Int(x) => self.add_int(*x),
            Number::Real(x) => self.add_real(*x),
            Number::Decimal(x) => self.add_decimal(x, None),
        }
    }

    pub fn add_int(&self, x: i64) -> Result<Number> {
        match self {
            Number::Decimal(d) => Ok(Number::Decimal(d.add(&Decimal::from_i64(x, 0), None)?)),
            _ => {
                let rhs = Number::Int(x);
                apply_native_bin_op!(self, &rhs, checked_add, +, "add")
            }
        }
    }

    pub fn add_real(&self, x: f64) -> Result<Number> {
        if !x.is_finite() {
            let inf = Decimal::from_infinity(x)?;
            return self.add_decimal(inf, None);
        }

        match self {
            Number::Decimal(d) => Ok(Number::Decimal(d.add(&Decimal::from_f64(x, None)?, None)?)),
            _ => {
                let rhs = Number::Real(x);
                apply_native_bin_op!(self, &rhs, checked_add, +, "add")
            }
        }
    }

    pub fn add_decimal(&self, x: &Decimal, scale: Option<u32>) -> Result<Number> {
        match self {
            Number::Decimal(d) => Ok(Number::Decimal(d.add(x, scale)?)),
            _ => Ok(Number::Decimal(self.promote(None).add(x, scale)?)),
        }
    }
}

impl std::ops::Add for Number {
    type Output = Result<Number>;

    fn add(self, rhs: Self) -> Self::Output {
        Number::add(&self, &rhs)
    }
}

impl std::ops::Add for &Number {
    type Output = Result<Number>;

    fn add(self, rhs: Self) -> Self::Output {
        Number::add(self, rhs)
    }
}

#[cfg(test)]
mod test {
    use crate::error::Error;
    use crate::values::Decimal;
    use crate::*;

    #[test]
    fn five_plus_five() {
        let result = int!(5) + real!(5.0);
        assert_eq!(result.unwrap(), real!(10.0))
    }

    #[test]
    fn int_plus_int_stays_exact() {
        let result = int!(2) + int!(200);
        assert_eq!(result.unwrap(), int!(202))
    }

    #[test]
    fn integer_limit_plus_one() {
        let result = int!(i64::MAX) + int!(1);
        assert!(matches!(result, Err(Error::Overflow { op: "add" })))
    }

    #[test]
    fn add_integer_matches_add_real() {
        let lhs = real!(2.5);
        assert_eq!(lhs.add_int(3).unwrap(), lhs.add_real(3.0).unwrap())
    }

    #[test]
    fn add_decimal_matches_a_promoted_receiver() {
        let operand = Decimal::parse("1.25", None).unwrap();
        assert_eq!(
            real!(2.5).add_decimal(&operand, None).unwrap(),
            real!(2.5).to_decimal(None).add_decimal(&operand, None).unwrap()
        );
        assert_eq!(
            real!(2.5).add_decimal(&operand, Some(2)).unwrap(),
            real!(2.5).to_decimal(None).add_decimal(&operand, Some(2)).unwrap()
        );
    }

    #[test]
    fn explicit_scale_overrides_the_stored_one() {
        let lhs = Decimal::parse("2.555", None).unwrap();
        let rhs = Decimal::parse("1.004", None).unwrap();
        assert_eq!(lhs.add(&rhs, None).unwrap(), Decimal::parse("3.559", None).unwrap());
        assert_eq!(lhs.add(&rhs, Some(2)).unwrap(), Decimal::parse("3.55", None).unwrap());
    }

    #[test]
    fn infinity_absorbs_finite_terms() {
        let result = infinite!(+) + int!(5);
        assert_eq!(result.unwrap(), infinite!(+));

        let result = int!(5) + infinite!(+);
        assert_eq!(result.unwrap(), infinite!(+));
    }

    #[test]
    fn equal_infinities_add() {
        let result = infinite!(+) + infinite!(+);
        assert_eq!(result.unwrap(), infinite!(+));
    }

    #[test]
    fn opposing_infinities_do_not() {
        let result = infinite!(+) + infinite!(-);
        assert!(matches!(result, Err(Error::Indeterminate { op: "add", .. })))
    }
}
