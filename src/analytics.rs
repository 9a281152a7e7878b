/// Analytics tab data: trending sets and market price statistics
use crate::config::TRENDING_LIMIT;

#[derive(Debug, Clone, PartialEq)]
pub struct TrendingSet {
    pub rank: usize,
    pub number: &'static str,
    pub name: &'static str,
    pub price: f64,
}

const TRENDING: [(&str, &str, f64); 5] = [
    ("75367", "Venator", 29999.0),
    ("42154", "Ford GT", 21999.0),
    ("10316", "Rivendell", 45999.0),
    ("76269", "Avengers Tower", 37999.0),
    ("10297", "Boutique Hotel", 28999.0),
];

/// Most searched sets, ranked from 1
pub fn trending_sets() -> Vec<TrendingSet> {
    TRENDING
        .iter()
        .take(TRENDING_LIMIT)
        .enumerate()
        .map(|(i, &(number, name, price))| TrendingSet {
            rank: i + 1,
            number,
            name,
            price,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceStats {
    pub average: f64,
    pub median: f64,
    pub max: f64,
    pub min: f64,
}

pub fn market_price_stats() -> PriceStats {
    PriceStats {
        average: 4850.0,
        median: 3200.0,
        max: 89999.0,
        min: 499.0,
    }
}

const BASE_PRODUCT_COUNT: u32 = 12_000;
const PRODUCT_COUNT_SPREAD: u32 = 1_000;
const MIN_SAVINGS_PERCENT: u32 = 24;
const SAVINGS_SPREAD: u32 = 3;

/// Header counters: how many sets are tracked and the average saving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveStats {
    pub total_products: u32,
    pub avg_savings_percent: u32,
}

impl LiveStats {
    /// Counters from two random draws; any `u32` maps into range
    pub fn from_draws(product_draw: u32, savings_draw: u32) -> Self {
        LiveStats {
            total_products: BASE_PRODUCT_COUNT + product_draw % PRODUCT_COUNT_SPREAD,
            avg_savings_percent: MIN_SAVINGS_PERCENT + savings_draw % SAVINGS_SPREAD,
        }
    }

    pub fn sample() -> Self {
        let mut bytes = [0u8; 8];
        if let Err(e) = getrandom::getrandom(&mut bytes) {
            log::warn!("No randomness for live stats: {}", e);
        }
        let [a, b, c, d, e, f, g, h] = bytes;
        Self::from_draws(u32::from_le_bytes([a, b, c, d]), u32::from_le_bytes([e, f, g, h]))
    }
}
