//! Spanish (`es-ES`) display formatting for prices, dates and surfaces.

use crate::models::DATE_FORMAT;
use chrono::{Datelike, NaiveDate};

const NBSP: char = '\u{a0}';

fn currency_symbol(code: &str) -> &str {
    match code {
        "EUR" => "€",
        "USD" => "US$",
        "GBP" => "GB£",
        other => other,
    }
}

/// Group thousands with `.`; es-ES leaves four-digit numbers ungrouped
fn group_digits(digits: &str) -> String {
    if digits.len() < 5 {
        return digits.to_string();
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

/// Price rounded to whole units with its currency, e.g. `325.000 €`
pub fn format_price(price: f64, currency: &str) -> String {
    let rounded = price.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    format!(
        "{}{}{}{}",
        sign,
        group_digits(&digits),
        NBSP,
        currency_symbol(currency)
    )
}

/// `DD-MM-YYYY` as `D/M/YYYY`. Unparseable input is returned as-is.
pub fn format_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date.trim(), DATE_FORMAT) {
        Ok(day) => format!("{}/{}/{}", day.day(), day.month(), day.year()),
        Err(_) => date.to_string(),
    }
}

pub fn format_area(area: f64) -> String {
    format!("{} m²", area)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_only_from_five_digits() {
        assert_eq!(format_price(950.0, "EUR"), "950\u{a0}€");
        assert_eq!(format_price(1250.0, "EUR"), "1250\u{a0}€");
        assert_eq!(format_price(12_500.0, "EUR"), "12.500\u{a0}€");
        assert_eq!(format_price(1_850_000.0, "EUR"), "1.850.000\u{a0}€");
    }

    #[test]
    fn rounds_to_whole_units() {
        assert_eq!(format_price(99_999.6, "EUR"), "100.000\u{a0}€");
        assert_eq!(format_price(-25_000.0, "EUR"), "-25.000\u{a0}€");
    }

    #[test]
    fn falls_back_to_currency_code() {
        assert_eq!(format_price(300_000.0, "USD"), "300.000\u{a0}US$");
        assert_eq!(format_price(300_000.0, "CHF"), "300.000\u{a0}CHF");
    }

    #[test]
    fn dates_drop_leading_zeros() {
        assert_eq!(format_date("05-01-2024"), "5/1/2024");
        assert_eq!(format_date("30-12-2023"), "30/12/2023");
        assert_eq!(format_date("pronto"), "pronto");
    }

    #[test]
    fn area_keeps_fraction_only_when_present() {
        assert_eq!(format_area(95.0), "95 m²");
        assert_eq!(format_area(62.5), "62.5 m²");
    }
}
