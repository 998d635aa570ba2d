use std::fmt::Display;

use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;

use super::decimal::{big_from_f64, Decimal, Repr, Sign, DEFAULT_SCALE};
use crate::error::{Error, Result};

macro_rules! number {
    ($($variant:ident($type:ty)),+ $(,)?) => {
        /// A value of the numeric tower. Immutable; every operation
        /// returns a new value.
        #[derive(Debug, Clone)]
        pub enum Number {
            $(
                $variant($type),
            )*
        }

        /// The kind tag of a [`Number`] — the key of the second dispatch
        /// step that routes a binary operation to its kind-specific
        /// handler.
        #[derive(Debug, Eq, PartialEq, Clone, Copy)]
        pub enum Kind {
            $(
                $variant,
            )*
        }

        impl Number {
            pub fn kind(&self) -> Kind {
                match self {
                    $(
                        Number::$variant(_) => Kind::$variant,
                    )*
                }
            }
        }
    };
}

number! {
    Int(i64),
    Real(f64),
    Decimal(super::decimal::Decimal),
}

/// The natural host representation of each kind. Converting an infinity
/// yields the host's floating sentinel, never a finite magnitude.
#[derive(Debug, Clone, PartialEq)]
pub enum Native {
    Int(i64),
    Real(f64),
    Big(BigDecimal),
}

impl Number {
    /// Converts a native float: finite values become [`Number::Real`], the
    /// infinity sentinels become the matching infinite decimal, and a
    /// non-number is rejected.
    pub fn from_f64(value: f64) -> Result<Number> {
        if value.is_nan() {
            return Err(Error::InvalidConstruction {
                kind: "real",
                given: value.to_string(),
            });
        }
        if value.is_infinite() {
            return Ok(Number::Decimal(Decimal::from_infinity(value)?.clone()));
        }

        Ok(Number::Real(value))
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Number::Int(n) => *n == 0,
            Number::Real(x) => *x == 0.0,
            Number::Decimal(d) => d.is_zero(),
        }
    }

    pub fn is_positive(&self) -> bool {
        match self {
            Number::Int(n) => *n > 0,
            Number::Real(x) => *x > 0.0,
            Number::Decimal(d) => d.is_positive(),
        }
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Number::Int(n) => *n < 0,
            Number::Real(x) => *x < 0.0,
            Number::Decimal(d) => d.is_negative(),
        }
    }

    pub fn is_infinite(&self) -> bool {
        match self {
            Number::Int(_) | Number::Real(_) => false,
            Number::Decimal(d) => d.is_infinite(),
        }
    }

    /// Parity is an integer notion; asking it of the other kinds is a
    /// caller error.
    pub fn is_even(&self) -> Result<bool> {
        match self {
            Number::Int(n) => Ok(n % 2 == 0),
            _ => Err(Error::NotImplemented {
                kind: self.kind_name(),
                op: "is_even",
            }),
        }
    }

    pub fn to_native(&self) -> Native {
        match self {
            Number::Int(n) => Native::Int(*n),
            Number::Real(x) => Native::Real(*x),
            Number::Decimal(d) => match &d.repr {
                Repr::Finite { magnitude, .. } => Native::Big(magnitude.clone()),
                Repr::Infinite(Sign::Positive) => Native::Real(f64::INFINITY),
                Repr::Infinite(Sign::Negative) => Native::Real(f64::NEG_INFINITY),
            },
        }
    }

    /// Truncates toward zero.
    pub fn to_integer(&self) -> Result<Number> {
        match self {
            Number::Int(n) => Ok(Number::Int(*n)),
            Number::Real(x) => x
                .trunc()
                .to_i64()
                .map(Number::Int)
                .ok_or(Error::Overflow { op: "to_integer" }),
            Number::Decimal(d) => match &d.repr {
                Repr::Finite { magnitude, .. } => magnitude
                    .with_scale(0)
                    .to_i64()
                    .map(Number::Int)
                    .ok_or(Error::Overflow { op: "to_integer" }),
                Repr::Infinite(_) => Err(Error::NotImplemented {
                    kind: "infinite decimal",
                    op: "to_integer",
                }),
            },
        }
    }

    pub fn to_real(&self) -> Result<Number> {
        match self {
            Number::Int(n) => Ok(Number::Real(*n as f64)),
            Number::Real(x) => Ok(Number::Real(*x)),
            Number::Decimal(d) => match &d.repr {
                Repr::Finite { magnitude, .. } => {
                    let value = magnitude.to_f64().ok_or(Error::Overflow { op: "to_real" })?;
                    if value.is_finite() {
                        Ok(Number::Real(value))
                    } else {
                        Err(Error::Overflow { op: "to_real" })
                    }
                }
                Repr::Infinite(_) => Err(Error::Overflow { op: "to_real" }),
            },
        }
    }

    pub fn to_decimal(&self, scale: Option<u32>) -> Number {
        Number::Decimal(self.promote(scale))
    }

    /// Decimal rendition of any receiver, the conversion the mixed-kind
    /// handlers promote through.
    pub(crate) fn promote(&self, scale: Option<u32>) -> Decimal {
        match self {
            Number::Int(n) => Decimal::from_i64(*n, scale.unwrap_or(DEFAULT_SCALE)),
            Number::Real(x) => Decimal::from_f64(*x, scale).expect("real values are finite"),
            Number::Decimal(d) => match scale {
                Some(scale) => d.rescaled(scale),
                None => d.clone(),
            },
        }
    }

    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            Number::Int(_) => "integer",
            Number::Real(_) => "real",
            Number::Decimal(d) => d.kind_name(),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        use Number::*;

        match (self, other) {
            (Int(x), Int(y)) => x == y,
            (Real(x), Real(y)) => x == y,
            (Decimal(x), Decimal(y)) => x == y,
            (Int(x), Real(y)) | (Real(y), Int(x)) => (*x as f64) == *y,
            (Int(x), Decimal(d)) | (Decimal(d), Int(x)) => d.eq_magnitude(&BigDecimal::from(*x)),
            (Real(x), Decimal(d)) | (Decimal(d), Real(x)) => {
                x.is_finite() && d.eq_magnitude(&big_from_f64(*x))
            }
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{n}"),
            Number::Real(x) => write!(f, "{x}"),
            Number::Decimal(d) => write!(f, "{d}"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{decimal, infinite, int, real};

    #[test]
    fn kind_tags() {
        assert_eq!(int!(5).kind(), Kind::Int);
        assert_eq!(real!(5.0).kind(), Kind::Real);
        assert_eq!(decimal!(5).kind(), Kind::Decimal);
        assert_eq!(infinite!(+).kind(), Kind::Decimal);
    }

    #[test]
    fn equality_promotes_across_kinds() {
        assert_eq!(int!(5), real!(5.0));
        assert_eq!(int!(5), decimal!(5));
        assert_eq!(real!(2.5), decimal!(2.5));
        assert_ne!(int!(5), real!(5.5));
    }

    #[test]
    fn predicates() {
        assert!(int!(0).is_zero());
        assert!(real!(-2.5).is_negative());
        assert!(decimal!(0.01).is_positive());
        assert!(infinite!(-).is_negative());
        assert!(infinite!(+).is_infinite());
        assert!(!infinite!(+).is_zero());
    }

    #[test]
    fn parity_is_an_integer_notion() {
        assert!(int!(4).is_even().unwrap());
        assert!(!int!(-3).is_even().unwrap());
        assert!(matches!(
            real!(4.0).is_even(),
            Err(Error::NotImplemented { op: "is_even", .. })
        ));
    }

    #[test]
    fn truncating_conversions() {
        assert_eq!(real!(2.9).to_integer().unwrap(), int!(2));
        assert_eq!(real!(-2.9).to_integer().unwrap(), int!(-2));
        assert_eq!(decimal!(7.5).to_integer().unwrap(), int!(7));
    }

    #[test]
    fn infinity_has_no_integer_rendition() {
        assert!(matches!(
            infinite!(+).to_integer(),
            Err(Error::NotImplemented { .. })
        ));
    }

    #[test]
    fn native_rendition_of_infinity_is_the_float_sentinel() {
        assert_eq!(infinite!(+).to_native(), Native::Real(f64::INFINITY));
        assert_eq!(infinite!(-).to_native(), Native::Real(f64::NEG_INFINITY));
    }

    #[test]
    fn nan_is_not_constructible() {
        assert!(matches!(
            Number::from_f64(f64::NAN),
            Err(Error::InvalidConstruction { .. })
        ));
    }

    #[test]
    fn float_sentinels_construct_infinities() {
        assert_eq!(Number::from_f64(f64::INFINITY).unwrap(), infinite!(+));
        assert!(Number::from_f64(2.5).unwrap() == real!(2.5));
    }
}
