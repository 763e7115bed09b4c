// ============================================================================
// Currency Codes
// ISO codes offered by the currency panel
// ============================================================================

/// ISO codes offered by the currency selectors, in selector order
pub const CURRENCY_CODES: [&str; 11] = [
    "USD", "JPY", "EUR", "THB", "IDR", "BGN", "ILS", "GBP", "AUD", "CHF", "HKD",
];

pub const DEFAULT_FROM_CURRENCY: &str = "USD";
pub const DEFAULT_TO_CURRENCY: &str = "THB";

/// Selector entry for `code`, if offered
pub fn currency_code(code: &str) -> Option<&'static str> {
    CURRENCY_CODES.iter().copied().find(|c| *c == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_offered() {
        assert_eq!(currency_code(DEFAULT_FROM_CURRENCY), Some("USD"));
        assert_eq!(currency_code(DEFAULT_TO_CURRENCY), Some("THB"));
        assert_eq!(currency_code("usd"), None);
        assert_eq!(currency_code("XAU"), None);
    }
}
