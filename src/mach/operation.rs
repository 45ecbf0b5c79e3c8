use super::Val;
use crate::error;
use crate::lang::Error;
use std::cmp::Ordering;

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    pub fn power(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Number(lhs.to_number()?.powf(rhs.to_number()?)))
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Number(lhs.to_number()? * rhs.to_number()?))
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = (lhs.to_number()?, rhs.to_number()?);
        if r == 0.0 {
            return Err(error!(DivisionByZero));
        }
        Ok(Val::Number(l / r))
    }

    pub fn modulus(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = (lhs.to_number()?, rhs.to_number()?);
        if r == 0.0 {
            return Err(error!(DivisionByZero; "MODULO"));
        }
        Ok(Val::Number(l % r))
    }

    /// Numbers add. A string on either side turns this into concatenation.
    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Number(l), Number(r)) => Ok(Number(l + r)),
            (l, r) => Ok(String(format!("{}{}", l, r).into())),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Number(lhs.to_number()? - rhs.to_number()?))
    }

    pub fn equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Operation::equal_bool(&lhs, &rhs).into())
    }

    pub fn not_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok((!Operation::equal_bool(&lhs, &rhs)).into())
    }

    fn equal_bool(lhs: &Val, rhs: &Val) -> bool {
        use Val::*;
        match (lhs, rhs) {
            (String(l), String(r)) => l == r,
            _ => match (lhs.to_number(), rhs.to_number()) {
                (Ok(l), Ok(r)) => Operation::numbers_equal(l, r),
                _ => false,
            },
        }
    }

    /// Exact match, or within `EPSILON` relative to the larger magnitude.
    /// Zero therefore only equals zero.
    pub fn numbers_equal(l: f64, r: f64) -> bool {
        l == r || (l - r).abs() <= std::f64::EPSILON * l.abs().max(r.abs())
    }

    pub fn less(lhs: Val, rhs: Val) -> Result<Val> {
        let ord = Operation::compare(&lhs, &rhs)?;
        Ok(matches!(ord, Some(Ordering::Less)).into())
    }

    pub fn less_equal(lhs: Val, rhs: Val) -> Result<Val> {
        let ord = Operation::compare(&lhs, &rhs)?;
        Ok(matches!(ord, Some(Ordering::Less) | Some(Ordering::Equal)).into())
    }

    pub fn greater(lhs: Val, rhs: Val) -> Result<Val> {
        let ord = Operation::compare(&lhs, &rhs)?;
        Ok(matches!(ord, Some(Ordering::Greater)).into())
    }

    pub fn greater_equal(lhs: Val, rhs: Val) -> Result<Val> {
        let ord = Operation::compare(&lhs, &rhs)?;
        Ok(matches!(ord, Some(Ordering::Greater) | Some(Ordering::Equal)).into())
    }

    /// `None` when either side is NaN; every ordering test is then false.
    fn compare(lhs: &Val, rhs: &Val) -> Result<Option<Ordering>> {
        use Val::*;
        match (lhs, rhs) {
            (String(l), String(r)) => Ok(Some(l.cmp(r))),
            _ => {
                let (l, r) = (lhs.to_number()?, rhs.to_number()?);
                Ok(l.partial_cmp(&r))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sum() {
        assert_eq!(Operation::sum(1.into(), 2.into()), Ok(Val::from(3)));
        assert_eq!(Operation::sum("ab".into(), "cd".into()), Ok(Val::from("abcd")));
        assert_eq!(Operation::sum("x".into(), 1.into()), Ok(Val::from("x1")));
        assert_eq!(Operation::sum(1.5.into(), "y".into()), Ok(Val::from("1.5y")));
    }

    #[test]
    fn test_divide_by_zero() {
        let err = Operation::divide(1.into(), 0.into()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::DivisionByZero);
        let err = Operation::modulus(1.into(), 0.into()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::DivisionByZero);
        assert_eq!(Operation::modulus((-7).into(), 3.into()), Ok(Val::from(-1)));
        assert_eq!(Operation::divide(7.into(), 2.into()), Ok(Val::from(3.5)));
    }

    #[test]
    fn test_string_arithmetic() {
        assert_eq!(Operation::multiply("3".into(), 2.into()), Ok(Val::from(6)));
        let err = Operation::subtract("a".into(), 1.into()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::TypeMismatch);
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(Operation::less(1.into(), 2.into()), Ok(Val::from(1)));
        assert_eq!(Operation::less(2.into(), 1.into()), Ok(Val::from(0)));
        assert_eq!(Operation::greater(2.into(), 1.into()), Ok(Val::from(1)));
        assert_eq!(Operation::less_equal(2.into(), 2.into()), Ok(Val::from(1)));
        assert_eq!(Operation::greater_equal(1.into(), 2.into()), Ok(Val::from(0)));
        assert_eq!(Operation::less("abc".into(), "abd".into()), Ok(Val::from(1)));
    }

    #[test]
    fn test_equality() {
        assert_eq!(Operation::equal(0.into(), 0.into()), Ok(Val::from(1)));
        assert_eq!(Operation::equal("1".into(), 1.into()), Ok(Val::from(1)));
        assert_eq!(Operation::equal("a".into(), 1.into()), Ok(Val::from(0)));
        assert_eq!(Operation::not_equal("a".into(), "b".into()), Ok(Val::from(1)));
        assert_eq!(
            Operation::equal(Operation::sum(0.1.into(), 0.2.into()).unwrap(), 0.3.into()),
            Ok(Val::from(1))
        );
    }

    #[test]
    fn test_nan_orders_as_nothing() {
        let nan = || Val::from(std::f64::NAN);
        assert_eq!(Operation::less(nan(), 5.into()), Ok(Val::from(0)));
        assert_eq!(Operation::less_equal(nan(), 5.into()), Ok(Val::from(0)));
        assert_eq!(Operation::greater(nan(), 5.into()), Ok(Val::from(0)));
        assert_eq!(Operation::greater_equal(5.into(), nan()), Ok(Val::from(0)));
        assert_eq!(Operation::equal(nan(), nan()), Ok(Val::from(0)));
        assert_eq!(Operation::not_equal(nan(), nan()), Ok(Val::from(1)));
    }

    #[test]
    fn test_infinities_and_tiny_numbers() {
        let inf = || Val::from(std::f64::INFINITY);
        assert_eq!(Operation::equal(inf(), inf()), Ok(Val::from(1)));
        assert_eq!(Operation::not_equal(inf(), inf()), Ok(Val::from(0)));
        assert_eq!(Operation::equal(inf(), (-std::f64::INFINITY).into()), Ok(Val::from(0)));
        assert_eq!(Operation::equal(1e-17.into(), 0.into()), Ok(Val::from(0)));
        assert_eq!(Operation::equal(0.into(), 0.into()), Ok(Val::from(1)));
    }
}
