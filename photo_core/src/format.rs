//! # Display Formatting
//!
//! Helpers that turn calculation results into the strings shown to users:
//! thousands-grouped numbers, distances with the `∞` glyph, and currency
//! amounts.
//!
//! ## Example
//!
//! ```rust
//! use photo_core::format::{format_currency, format_distance, number_format};
//! use photo_core::catalog::Currency;
//! use photo_core::units::Distance;
//!
//! assert_eq!(number_format(1234567.891, 2), "1,234,567.89");
//! assert_eq!(format_distance(Distance::Infinite, "m", 2), "∞");
//! assert_eq!(format_distance(Distance::Finite(1.6947), "m", 2), "1.69m");
//! assert_eq!(format_currency(-1080.0, Currency::Eur), "€1,080.00");
//! ```

use crate::catalog::Currency;
use crate::units::{Distance, INFINITY_GLYPH};

/// Round to a number of decimal places, halves away from zero
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Format with a fixed number of decimals and comma thousands separators.
pub fn number_format(value: f64, decimals: u32) -> String {
    let rounded = round_to(value, decimals);
    let digits = format!("{:.*}", decimals as usize, rounded.abs());

    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits.as_str(), None),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if rounded < 0.0 {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Format a distance with its unit suffix, or `∞` when unbounded
pub fn format_distance(distance: Distance, unit_label: &str, decimals: u32) -> String {
    match distance {
        Distance::Finite(v) => format!("{}{}", number_format(v, decimals), unit_label),
        Distance::Infinite => INFINITY_GLYPH.to_string(),
    }
}

/// Currency symbol followed by the absolute amount with two decimals
pub fn format_currency(amount: f64, currency: Currency) -> String {
    format!("{}{}", currency.symbol(), number_format(amount.abs(), 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(16.666_666, 2), 16.67);
        assert_eq!(round_to(2.25, 1), 2.3);
        assert_eq!(round_to(-2.25, 1), -2.3);
        assert_eq!(round_to(7.0, 0), 7.0);
    }

    #[test]
    fn test_number_format_grouping() {
        assert_eq!(number_format(0.0, 2), "0.00");
        assert_eq!(number_format(999.999, 2), "1,000.00");
        assert_eq!(number_format(1000.0, 0), "1,000");
        assert_eq!(number_format(123456.0, 1), "123,456.0");
        assert_eq!(number_format(-98765.4321, 2), "-98,765.43");
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        assert_eq!(number_format(-0.001, 2), "0.00");
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(Distance::Finite(2.4394), "ft", 2), "2.44ft");
        assert_eq!(format_distance(Distance::Finite(1500.0), "cm", 1), "1,500.0cm");
        assert_eq!(format_distance(Distance::Infinite, "in", 2), "∞");
    }

    #[test]
    fn test_format_currency_uses_absolute_value() {
        assert_eq!(format_currency(720.0, Currency::Usd), "$720.00");
        assert_eq!(format_currency(-1234.5, Currency::Gbp), "£1,234.50");
        assert_eq!(format_currency(50000.0, Currency::Inr), "₹50,000.00");
    }
}
