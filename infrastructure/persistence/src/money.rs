//! Conversion between domain minor units and `NUMERIC(12,2)` columns.

use bigdecimal::BigDecimal;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::Money;
use num_traits::ToPrimitive;

pub fn to_decimal(money: Money) -> BigDecimal {
    BigDecimal::new(money.minor_units().into(), 2)
}

pub fn from_decimal(value: &BigDecimal) -> Result<Money, RepositoryError> {
    let minor = (value.clone() * BigDecimal::from(100))
        .round(0)
        .to_i64()
        .ok_or(RepositoryError::DatabaseError)?;
    Ok(Money::from_minor(minor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn should_write_minor_units_with_two_decimals() {
        assert_eq!(to_decimal(Money::from_minor(450)).to_string(), "4.50");
        assert_eq!(to_decimal(Money::from_minor(5)).to_string(), "0.05");
    }

    #[test]
    fn should_read_numeric_column_into_minor_units() {
        let value = BigDecimal::from_str("4.85").unwrap();
        assert_eq!(from_decimal(&value).unwrap(), Money::from_minor(485));

        let whole = BigDecimal::from_str("12").unwrap();
        assert_eq!(from_decimal(&whole).unwrap(), Money::from_minor(1200));
    }
}
