//! Currency registry
//!
//! Known currency codes and their names, used to validate the base and
//! target currencies entered at the prompts.

pub mod codes;

pub use codes::CURRENCIES;

use serde::Serialize;

/// A currency known to the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Currency {
    /// Three-letter uppercase code (e.g. "USD")
    pub code: &'static str,
    /// Human-readable name of the currency
    pub name: &'static str,
}

/// Looks up a currency by its exact uppercase code.
///
/// Callers normalize case first; see `validate::parse_currency_code`.
pub fn get_currency_by_code(code: &str) -> Option<&'static Currency> {
    CURRENCIES
        .binary_search_by(|c| c.code.cmp(code))
        .ok()
        .map(|idx| &CURRENCIES[idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_sorted_and_unique() {
        for pair in CURRENCIES.windows(2) {
            assert!(
                pair[0].code < pair[1].code,
                "{} should sort before {}",
                pair[0].code,
                pair[1].code
            );
        }
    }

    #[test]
    fn test_all_codes_are_three_uppercase_letters() {
        for currency in CURRENCIES {
            assert_eq!(currency.code.len(), 3, "Bad code: {}", currency.code);
            assert!(currency.code.chars().all(|c| c.is_ascii_uppercase()));
            assert!(!currency.name.is_empty());
        }
    }

    #[test]
    fn test_get_currency_by_code_known() {
        let usd = get_currency_by_code("USD").expect("USD should be known");
        assert_eq!(usd.name, "United States Dollar");
        assert_eq!(get_currency_by_code("EUR").map(|c| c.name), Some("Euro"));
        assert_eq!(get_currency_by_code("JPY").map(|c| c.name), Some("Japanese Yen"));
    }

    #[test]
    fn test_get_currency_by_code_first_and_last() {
        assert!(get_currency_by_code(CURRENCIES[0].code).is_some());
        assert!(get_currency_by_code(CURRENCIES[CURRENCIES.len() - 1].code).is_some());
    }

    #[test]
    fn test_get_currency_by_code_unknown() {
        assert!(get_currency_by_code("XYZ").is_none());
        assert!(get_currency_by_code("").is_none());
        assert!(get_currency_by_code("usd").is_none());
    }
}
