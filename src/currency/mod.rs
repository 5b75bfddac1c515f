//! Display formatting for monetary amounts. No conversion happens here.

use serde::{Deserialize, Serialize};

use crate::income::Locale;

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

/// Separator conventions for rendering numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberStyle {
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl NumberStyle {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::English => Self {
                decimal_separator: '.',
                grouping_separator: ',',
            },
            Locale::Spanish => Self {
                decimal_separator: ',',
                grouping_separator: '.',
            },
        }
    }
}

impl Default for NumberStyle {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "MXN" => "MX$".into(),
        "AUD" => "A$".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

pub fn format_number(style: NumberStyle, value: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, value);
    let (int_part, fraction) = match body.split_once('.') {
        Some((int_part, fraction)) => (int_part, Some(fraction)),
        None => (body.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    let grouped = group_digits(digits, style.grouping_separator);
    match fraction {
        Some(fraction) => format!("{sign}{grouped}{}{fraction}", style.decimal_separator),
        None => format!("{sign}{grouped}"),
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

/// Renders `amount` with the currency symbol and its minor units.
pub fn format_amount(amount: f64, code: &CurrencyCode, style: NumberStyle) -> String {
    let precision = minor_units_for(code.as_str());
    let body = format_number(style, amount.abs(), precision);
    let symbol = symbol_for(code.as_str());
    if amount < 0.0 {
        format!("-{symbol}{body}")
    } else {
        format!("{symbol}{body}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        let style = NumberStyle::default();
        assert_eq!(format_number(style, 1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(style, -1234.4, 0), "-1,234");
        assert_eq!(format_number(style, 999.0, 2), "999.00");
    }

    #[test]
    fn spanish_swaps_separators() {
        let style = NumberStyle::for_locale(Locale::Spanish);
        assert_eq!(format_number(style, 2166.666, 2), "2.166,67");
    }

    #[test]
    fn formats_currency_amounts() {
        let usd = CurrencyCode::new("usd");
        assert_eq!(format_amount(2166.666, &usd, NumberStyle::default()), "$2,166.67");
        assert_eq!(format_amount(-5.0, &usd, NumberStyle::default()), "-$5.00");
        let jpy = CurrencyCode::new("JPY");
        assert_eq!(format_amount(150000.0, &jpy, NumberStyle::default()), "¥150,000");
        let chf = CurrencyCode::new("CHF");
        assert_eq!(format_amount(10.0, &chf, NumberStyle::default()), "CHF10.00");
    }
}
