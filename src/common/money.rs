use bigdecimal::BigDecimal;
use bigdecimal::*;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Sub, SubAssign};
const SCALE: i64 = 10_000;

#[derive(Debug, Clone, Copy, Default)]
/// A monetary value stored as a count of 1/10000 currency units.
///
/// Prices, balances and position values all go through `Money`, so a cost
/// such as `150.00 × 10` is exact integer arithmetic instead of a float
/// product. Text is parsed with `BigDecimal` and rounded to 4 decimal places.
///
/// # Examples
/// ```
/// use portfolio_sim::common::money::Money;
///
/// let price: Money = "150.00".parse().unwrap();
/// let cost = price.checked_mul(10).unwrap();
/// assert_eq!(cost.to_string_2dp(), "1500.00");
/// assert_eq!(cost.to_string_4dp(), "1500.0000");
/// assert_eq!(price.checked_mul(u64::MAX), None);
/// ```
pub struct Money(i64);

impl Money {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Whole currency units, e.g. `Money::from_units(10_000)` is 10000.0000.
    pub fn from_units(units: i64) -> Self {
        Money(units * SCALE)
    }

    /// Whole units plus hundredths, e.g. `Money::from_cents(175_50)` is 175.50.
    pub fn from_cents(cents: i64) -> Self {
        Money(cents * (SCALE / 100))
    }

    pub fn zero() -> Self {
        Money(0)
    }

    /// Price × share count, or `None` if the product does not fit.
    pub fn checked_mul(self, quantity: u64) -> Option<Money> {
        let quantity = i64::try_from(quantity).ok()?;
        self.0.checked_mul(quantity).map(Money)
    }

    /// Like `checked_mul`, clamped to the representable range. For valuations
    /// that are shown but never settled.
    pub fn saturating_mul(self, quantity: u64) -> Money {
        self.checked_mul(quantity).unwrap_or(if self.0 < 0 {
            Money(i64::MIN)
        } else {
            Money(i64::MAX)
        })
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn saturating_add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn to_string_4dp(&self) -> String {
        let bd = BigDecimal::from(self.0) / BigDecimal::from(SCALE);
        format!("{:.4}", bd)
    }

    /// Two decimal places, rounded half away from zero. Used for console output.
    pub fn to_string_2dp(&self) -> String {
        let bd = BigDecimal::from(self.0) / BigDecimal::from(SCALE);
        format!("{:.2}", bd.with_scale_round(2, RoundingMode::HalfUp))
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;

        let scaled = (bd * BigDecimal::from(SCALE)).with_scale_round(0, RoundingMode::HalfUp);
        let value: i64 = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_2dp())
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}

/// Saturating, like the valuations it is used for.
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Money::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_from_units() {
        assert_eq!(Money::from_units(10_000), Money(100_000_000));
        assert_eq!(Money::from_units(0), Money::zero());
    }

    #[test]
    fn test_from_str_valid() {
        assert_eq!(Money::from_str("1").unwrap(), Money(10000));
        assert_eq!(Money::from_str("175.50").unwrap(), Money(1_755_000));
        assert_eq!(Money::from_str("0.0001").unwrap(), Money(1));
        assert_eq!(Money::from_str("  2800 ").unwrap(), Money(28_000_000));
    }

    #[test]
    fn test_from_str_rounding() {
        assert_eq!(Money::from_str("1.99999").unwrap(), Money(20000));
        assert_eq!(Money::from_str("0.00001").unwrap(), Money(0));
    }

    #[test]
    fn test_from_str_rounds_ties_away_from_zero() {
        assert_eq!(Money::from_str("0.00005").unwrap(), Money(1));
        assert_eq!(Money::from_str("0.00015").unwrap(), Money(2));
        assert_eq!(Money::from_str("0.00025").unwrap(), Money(3));
        assert_eq!(Money::from_str("-0.00005").unwrap(), Money(-1));
    }

    #[test]
    fn test_from_str_invalid() {
        assert!(Money::from_str("").is_err());
        assert!(Money::from_str("   ").is_err());
        assert!(Money::from_str("abc").is_err());
        assert!(Money::from_str("1e30").is_err());
    }

    #[test]
    fn test_to_string_2dp() {
        assert_eq!(Money::from_str("8500").unwrap().to_string_2dp(), "8500.00");
        assert_eq!(Money::from_str("750.25").unwrap().to_string_2dp(), "750.25");
        assert_eq!(Money::from_str("0.005").unwrap().to_string_2dp(), "0.01");
        assert_eq!(Money::zero().to_string_2dp(), "0.00");
    }

    #[test]
    fn test_display_uses_two_decimals() {
        assert_eq!(Money(15_000).to_string(), "1.50");
        assert_eq!(Money(12_345).to_string_4dp(), "1.2345");
    }

    #[test]
    fn test_from_cents() {
        assert_eq!(Money::from_cents(175_50), Money::from_str("175.50").unwrap());
        assert_eq!(Money::from_cents(750_25), Money(7_502_500));
    }

    #[test]
    fn test_checked_mul_by_quantity() {
        let price = Money::from_str("150.00").unwrap();
        assert_eq!(price.checked_mul(10), Some(Money::from_str("1500").unwrap()));
        assert_eq!(price.checked_mul(0), Some(Money::zero()));
    }

    #[test]
    fn test_checked_mul_overflow() {
        let price = Money::from_str("175.50").unwrap();
        // wraps negative under unchecked multiplication
        assert_eq!(price.checked_mul(5_255_617_677_524), None);
        assert_eq!(price.checked_mul(i64::MAX as u64), None);
        // does not fit in i64 at all
        assert_eq!(Money(1).checked_mul(u64::MAX), None);
        assert_eq!(Money(1).checked_mul(i64::MAX as u64), Some(Money(i64::MAX)));
    }

    #[test]
    fn test_saturating_mul() {
        assert_eq!(Money(2).saturating_mul(3), Money(6));
        assert_eq!(Money(2).saturating_mul(u64::MAX), Money(i64::MAX));
        assert_eq!(Money(-2).saturating_mul(u64::MAX), Money(i64::MIN));
    }

    #[test]
    fn test_checked_add_and_sub_assign() {
        let mut m = Money::from_units(10_000);
        m -= Money::from_units(1_500);
        assert_eq!(m, Money::from_units(8_500));
        assert_eq!(m.checked_add(Money::from_units(750)), Some(Money::from_units(9_250)));
        assert_eq!(Money(i64::MAX).checked_add(Money(1)), None);
        assert_eq!(Money(i64::MAX).saturating_add(Money(1)), Money(i64::MAX));
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money(1), Money(2), Money(3)].into_iter().sum();
        assert_eq!(total, Money(6));
        let capped: Money = [Money(i64::MAX), Money(1)].into_iter().sum();
        assert_eq!(capped, Money(i64::MAX));
    }

    #[test]
    fn test_sign_checks() {
        assert!(Money(1).is_positive());
        assert!(!Money::zero().is_positive());
        assert!(Money(-1).is_negative());
    }

    #[test]
    fn test_ordering() {
        assert!(Money(10000) < Money(15000));
        assert!(Money(10000) >= Money(10000));
    }
}
