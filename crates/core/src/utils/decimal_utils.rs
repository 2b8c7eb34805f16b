use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// `part / whole * 100`, or zero when `whole` is not positive.
///
/// Results beyond the `Decimal` range saturate to `Decimal::MAX` (or `MIN`
/// for a negative part).
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .unwrap_or(if part.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_ratios() {
        assert_eq!(percent_of(dec!(50), dec!(200)), dec!(25));
        assert_eq!(percent_of(dec!(150), dec!(100)), dec!(150));
        assert_eq!(percent_of(dec!(10), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn overflow_saturates() {
        assert_eq!(percent_of(Decimal::from_i128_with_scale(10i128.pow(27), 0), dec!(1)), Decimal::MAX);
        assert_eq!(percent_of(Decimal::MAX, Decimal::new(1, 28)), Decimal::MAX);
        assert_eq!(percent_of(Decimal::MIN, Decimal::new(1, 28)), Decimal::MIN);
    }
}
