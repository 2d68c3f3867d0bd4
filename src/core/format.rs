use crate::domain::model::{Estimate, PriceBand};
use serde::Serialize;

pub const NOT_FOUND_MESSAGE: &str = "No data available for the selected criteria.";
pub const INCOMPLETE_MESSAGE: &str = "Please fill in all fields.";

/// Pounds with thousands separators and two decimals, e.g. `£1,455,000.00`.
/// Rounds the exact binary value half-to-even, the same as `{:.2}`.
pub fn format_currency(value: f64) -> String {
    let sign = if value.is_sign_negative() && !value.is_nan() { "-" } else { "" };
    if value.is_nan() {
        return "£nan".to_string();
    }
    if value.is_infinite() {
        return format!("{}£inf", sign);
    }

    let digits = format!("{:.2}", value.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // -0.001 rounds to zero and prints unsigned
    let sign = if whole.bytes().chain(fraction.bytes()).all(|b| b == b'0') {
        ""
    } else {
        sign
    };
    format!("{}£{}.{}", sign, grouped, fraction)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// The user-facing text of an estimate, as shown on the form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateText {
    pub status: &'static str,
    pub headline: String,
    pub projection: Option<String>,
    pub current_price: Option<String>,
    pub future_price: Option<String>,
    pub growth: Option<String>,
    pub band: Option<PriceBand>,
}

impl EstimateText {
    pub fn from_estimate(estimate: &Estimate) -> Self {
        match estimate {
            Estimate::Quote(quote) => {
                let current_price = format_currency(quote.current);
                let future_price = format_currency(quote.future);
                Self {
                    status: "quote",
                    headline: format!(
                        "The estimated price for {} is: {}",
                        quote.neighborhood, current_price
                    ),
                    projection: Some(format!(
                        "The estimated property price for the next 5 years is: {}",
                        future_price
                    )),
                    current_price: Some(current_price),
                    future_price: Some(future_price),
                    growth: quote.growth_percent.map(format_percent),
                    band: Some(quote.band),
                }
            }
            Estimate::NotFound => Self::message("not_found", NOT_FOUND_MESSAGE),
            Estimate::Incomplete => Self::message("incomplete", INCOMPLETE_MESSAGE),
        }
    }

    fn message(status: &'static str, headline: &str) -> Self {
        Self {
            status,
            headline: headline.to_string(),
            projection: None,
            current_price: None,
            future_price: None,
            growth: None,
            band: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Quote;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "£0.00");
        assert_eq!(format_currency(999.5), "£999.50");
        assert_eq!(format_currency(1000.0), "£1,000.00");
        assert_eq!(format_currency(1_455_000.0), "£1,455,000.00");
        assert_eq!(format_currency(640_000.5), "£640,000.50");
        assert_eq!(format_currency(123_456_789.1), "£123,456,789.10");
        assert_eq!(format_currency(-2500.0), "-£2,500.00");
        assert_eq!(format_currency(-0.001), "£0.00");
    }

    #[test]
    fn test_format_currency_rounds_half_to_even_on_binary_value() {
        assert_eq!(format_currency(0.125), "£0.12");
        assert_eq!(format_currency(2.675), "£2.67");
        assert_eq!(format_currency(640_000.125), "£640,000.12");
        assert_eq!(format_currency(1_455_000.005), "£1,455,000.00");
    }

    #[test]
    fn test_format_currency_huge_and_non_finite() {
        let huge = format_currency(1e40);
        assert!(huge.starts_with("£10,000,000,000,000,000,"));
        assert!(huge.ends_with(".00"));
        assert_eq!(huge.len(), "£".len() + 41 + 13 + 3);

        assert_eq!(format_currency(f64::NAN), "£nan");
        assert_eq!(format_currency(f64::INFINITY), "£inf");
        assert_eq!(format_currency(f64::NEG_INFINITY), "-£inf");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(12.5), "12.50%");
        assert_eq!(format_percent(8.0), "8.00%");
    }

    #[test]
    fn test_quote_text() {
        let estimate = Estimate::Quote(Quote {
            neighborhood: "Camden".to_string(),
            current: 1_250_000.0,
            future: 2_500_000.0,
            growth_percent: None,
            band: PriceBand::Red,
        });
        let text = EstimateText::from_estimate(&estimate);
        assert_eq!(text.status, "quote");
        assert_eq!(text.headline, "The estimated price for Camden is: £1,250,000.00");
        assert_eq!(
            text.projection.as_deref(),
            Some("The estimated property price for the next 5 years is: £2,500,000.00")
        );
        assert_eq!(text.band, Some(PriceBand::Red));
    }

    #[test]
    fn test_message_text() {
        let text = EstimateText::from_estimate(&Estimate::NotFound);
        assert_eq!(text.headline, NOT_FOUND_MESSAGE);
        assert!(text.projection.is_none());

        let text = EstimateText::from_estimate(&Estimate::Incomplete);
        assert_eq!(text.status, "incomplete");
        assert_eq!(text.headline, INCOMPLETE_MESSAGE);
    }
}
