#[macro_export]
macro_rules! int {
    ($data:expr) => {{
        use $crate::values::Number;

        Number::Int($data)
    }};
}

#[macro_export]
macro_rules! real {
    ($data:expr) => {{
        use $crate::values::Number;

        Number::Real($data)
    }};
}

/// Decimal from a numeric literal. The plain form infers the scale the way
/// [`Decimal::from_f64`](crate::values::Decimal::from_f64) does; `scale`
/// pins it.
#[macro_export]
macro_rules! decimal {
    ($data:expr) => {{
        use $crate::values::{Decimal, Number};

        Number::Decimal(Decimal::from_f64($data as f64, None).expect("not a decimal literal"))
    }};
    ($data:expr, scale $scale:expr) => {{
        use $crate::values::{Decimal, Number};

        Number::Decimal(Decimal::from_f64($data as f64, Some($scale)).expect("not a decimal literal"))
    }};
}

#[macro_export]
macro_rules! infinite {
    (+) => {{
        use $crate::values::{Decimal, Number};

        Number::Decimal(Decimal::inf_positive().clone())
    }};
    (-) => {{
        use $crate::values::{Decimal, Number};

        Number::Decimal(Decimal::inf_negative().clone())
    }};
}

#[cfg(test)]
mod test {
    use crate::values::{Decimal, Number};
    use crate::*;

    #[test]
    pub fn ints() {
        assert_eq!(int!(5), Number::Int(5));
    }

    #[test]
    pub fn decimals() {
        assert_eq!(
            decimal!(2.5),
            Number::Decimal(Decimal::parse("2.5", None).unwrap())
        );
        assert_eq!(
            decimal!(2.559, scale 2),
            Number::Decimal(Decimal::parse("2.55", None).unwrap())
        );
    }

    #[test]
    pub fn infinities() {
        assert_eq!(infinite!(+), Number::Decimal(Decimal::inf_positive().clone()));
        assert_ne!(infinite!(+), infinite!(-));
    }

    #[test]
    pub fn display() {
        assert_eq!(int!(5).to_string(), "5");
        assert_eq!(real!(2.5).to_string(), "2.5");
        assert_eq!(infinite!(-).to_string(), "-inf");
    }
}
