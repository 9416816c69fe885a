//! Currency rendering for prices.

use rust_decimal::{Decimal, RoundingStrategy};

/// How a monetary amount is rendered: symbol prefix, thousands grouping, and
/// exactly two fractional digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub group_separator: String,
    pub decimal_separator: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            group_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
        }
    }
}

impl CurrencyFormat {
    pub fn new(
        symbol: impl Into<String>,
        group_separator: impl Into<String>,
        decimal_separator: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            group_separator: group_separator.into(),
            decimal_separator: decimal_separator.into(),
        }
    }

    /// Render `amount` as e.g. `$1,234.50`.
    ///
    /// The amount is rounded to 2 places, midpoint away from zero. Negative
    /// amounts get a leading `-` before the symbol.
    pub fn format(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let digits = format!("{:.2}", rounded.abs());
        let (whole, frac) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        format!(
            "{sign}{}{}{}{frac}",
            self.symbol,
            self.group(whole),
            self.decimal_separator
        )
    }

    fn group(&self, whole: &str) -> String {
        let len = whole.len();
        let mut out = String::with_capacity(len + len / 3 * self.group_separator.len());
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push_str(&self.group_separator);
            }
            out.push(ch);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn formats_two_decimal_places() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.format(dec("999.99")), "$999.99");
        assert_eq!(fmt.format(dec("20")), "$20.00");
        assert_eq!(fmt.format(dec("5.5")), "$5.50");
    }

    #[test]
    fn groups_thousands() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.format(dec("1000")), "$1,000.00");
        assert_eq!(fmt.format(dec("5000")), "$5,000.00");
        assert_eq!(fmt.format(dec("1234567.891")), "$1,234,567.89");
        assert_eq!(fmt.format(dec("100")), "$100.00");
    }

    #[test]
    fn rounds_midpoint_away_from_zero() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.format(dec("10.005")), "$10.01");
        assert_eq!(fmt.format(dec("10.004")), "$10.00");
        assert_eq!(fmt.format(dec("-10.005")), "-$10.01");
    }

    #[test]
    fn custom_separators() {
        let fmt = CurrencyFormat::new("€", ".", ",");
        assert_eq!(fmt.format(dec("4999.5")), "€4.999,50");
    }

    #[test]
    fn zero_has_no_sign() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.format(dec("-0.001")), "$0.00");
    }
}
