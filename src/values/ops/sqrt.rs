use crate::error::{Error, Result};
use crate::values::Number;

impl Number {
    /// Square root. With no scale the native kinds use the native float
    /// root; an explicit scale promotes the computation to the decimal
    /// backend at that scale.
    pub fn sqrt(&self, scale: Option<u32>) -> Result<Number> {
        match self {
            Number::Decimal(d) => Ok(Number::Decimal(d.sqrt(scale)?)),
            _ if scale.is_some() => Ok(Number::Decimal(self.promote(None).sqrt(scale)?)),
            Number::Int(n) => {
                if *n < 0 {
                    return Err(negative_radicand());
                }
                Ok(Number::Real((*n as f64).sqrt()))
            }
            Number::Real(x) => {
                if *x < 0.0 {
                    return Err(negative_radicand());
                }
                Ok(Number::Real(x.sqrt()))
            }
        }
    }
}

fn negative_radicand() -> Error {
    Error::Backend {
        op: "sqrt",
        message: "negative radicand".into(),
    }
}

#[cfg(test)]
mod test {
    use crate::error::Error;
    use crate::values::Decimal;
    use crate::*;

    #[test]
    fn sqrt_of_sixteen() {
        let result = int!(16).sqrt(None);
        assert_eq!(result.unwrap(), real!(4.0))
    }

    #[test]
    fn an_explicit_scale_delegates_to_the_backend() {
        let result = real!(2.0).sqrt(Some(2));
        assert_eq!(result.unwrap(), decimal!(1.41))
    }

    #[test]
    fn decimal_sqrt_at_the_stored_scale() {
        let value = Decimal::parse("6.25", None).unwrap();
        assert_eq!(value.sqrt(None).unwrap(), Decimal::parse("2.5", None).unwrap());
    }

    #[test]
    fn negative_radicands_are_rejected() {
        assert!(matches!(int!(-4).sqrt(None), Err(Error::Backend { op: "sqrt", .. })));
        assert!(matches!(decimal!(-4).sqrt(None), Err(Error::Backend { op: "sqrt", .. })));
    }

    #[test]
    fn sqrt_of_infinity_is_unsupported() {
        let result = infinite!(+).sqrt(None);
        assert!(matches!(result, Err(Error::NotImplemented { op: "sqrt", .. })))
    }
}
