/// Price formatting and price-per-piece rating
use crate::config::{AVERAGE_BAND_PRICE_PER_PIECE, EXCELLENT_PRICE_PER_PIECE, GOOD_PRICE_PER_PIECE};

const GROUP_SEPARATOR: char = '\u{202f}';
const CURRENCY_SUFFIX: &str = "\u{a0}₽";

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingError {
    #[error("enter a positive price and piece count")]
    InvalidInput,
}

/// Format a ruble amount the way ru-RU locales do
///
/// Thousands are grouped with a narrow no-break space, kopecks are shown only
/// when present, and the ruble sign follows the amount.
///
/// Examples:
/// - 29999 → "29 999 ₽"
/// - 499 → "499 ₽"
/// - 14249.05 → "14 249,05 ₽"
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return "Price not available".to_string();
    }

    let kopecks = (price.abs() * 100.0).round() as u64;
    let rubles = kopecks / 100;
    let fraction = kopecks % 100;

    let mut formatted = String::new();
    if price < 0.0 && kopecks > 0 {
        formatted.push('-');
    }
    formatted.push_str(&group_thousands(rubles));

    if fraction > 0 {
        let digits = format!("{:02}", fraction);
        formatted.push(',');
        formatted.push_str(digits.trim_end_matches('0'));
    }

    formatted.push_str(CURRENCY_SUFFIX);
    formatted
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(c);
    }

    grouped
}

/// Whole count with ru-RU thousands grouping, e.g. "12 345"
pub fn format_count(value: u64) -> String {
    group_thousands(value)
}

/// Price divided by piece count; both must be positive
pub fn price_per_piece(price: f64, pieces: u32) -> Result<f64, PricingError> {
    if !price.is_finite() || price <= 0.0 || pieces == 0 {
        return Err(PricingError::InvalidInput);
    }
    Ok(price / f64::from(pieces))
}

/// "0.35 ₽"
pub fn format_price_per_piece(value: f64) -> String {
    format!("{:.2}{}", value, CURRENCY_SUFFIX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceRating {
    Excellent,
    Good,
    Average,
    Expensive,
}

impl PriceRating {
    pub fn from_price_per_piece(value: f64) -> PriceRating {
        if value < EXCELLENT_PRICE_PER_PIECE {
            PriceRating::Excellent
        } else if value < GOOD_PRICE_PER_PIECE {
            PriceRating::Good
        } else if value < AVERAGE_BAND_PRICE_PER_PIECE {
            PriceRating::Average
        } else {
            PriceRating::Expensive
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PriceRating::Excellent => "Excellent price! A great deal",
            PriceRating::Good => "Good price. Around the market average",
            PriceRating::Average => "Average price. You can find it cheaper",
            PriceRating::Expensive => "High price. Collectible or rare set",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            PriceRating::Excellent => "⭐",
            PriceRating::Good => "👍",
            PriceRating::Average => "⚖️",
            PriceRating::Expensive => "👑",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            PriceRating::Excellent => "#34a853",
            PriceRating::Good => "#4285f4",
            PriceRating::Average => "#f9ab00",
            PriceRating::Expensive => "#ea4335",
        }
    }
}
