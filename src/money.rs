//! Display-price formatting.

/// Server-provided price, captured once after the product fetch and
/// immutable afterward.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayPrice {
    /// Amount in minor units (cents).
    pub amount_minor: u64,
    /// ISO 4217 code as sent by the backend, usually lowercase.
    pub currency: String,
}

impl DisplayPrice {
    /// The header line shown above the form, e.g. `"USD 10.00"`.
    pub fn label(&self) -> String {
        format_price(self.amount_minor, &self.currency)
    }
}

/// Render a minor-unit amount as `"<CODE> <major>.<minor>"`.
///
/// Integer arithmetic keeps the two fraction digits exact for any amount.
pub fn format_price(amount_minor: u64, currency: &str) -> String {
    format!(
        "{} {}.{:02}",
        currency.to_uppercase(),
        amount_minor / 100,
        amount_minor % 100
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_and_fractional_amounts() {
        assert_eq!(format_price(1000, "usd"), "USD 10.00");
        assert_eq!(format_price(1050, "usd"), "USD 10.50");
        assert_eq!(format_price(5, "eur"), "EUR 0.05");
    }

    #[test]
    fn uppercases_the_currency_code() {
        assert_eq!(format_price(123456, "gbp"), "GBP 1234.56");
        let price = DisplayPrice {
            amount_minor: 700,
            currency: "cad".into(),
        };
        assert_eq!(price.label(), "CAD 7.00");
    }

    #[test]
    fn zero_renders_with_two_digits() {
        assert_eq!(format_price(0, "usd"), "USD 0.00");
    }
}
