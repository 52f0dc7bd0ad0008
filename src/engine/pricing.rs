use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Price per unit when no policy overrides it
pub const UNIT_PRICE: Decimal = dec!(100);

/// Calculate the total price for a quantity at a given unit price
pub fn calculate_total(quantity: i64, unit_price: Decimal) -> Decimal {
    Decimal::from(quantity) * unit_price
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_at_default_unit_price() {
        assert_eq!(calculate_total(1, UNIT_PRICE), dec!(100));
        assert_eq!(calculate_total(3, UNIT_PRICE), dec!(300));
        assert_eq!(calculate_total(5, UNIT_PRICE), dec!(500));
    }

    #[test]
    fn test_total_keeps_fractional_prices() {
        assert_eq!(calculate_total(4, dec!(12.25)), dec!(49.00));
    }
}
