/// Side-by-side set comparison
use crate::catalog::{OZON, Product, Retailer, WEB_SEARCH, WILDBERRIES, YANDEX_MARKET};
use crate::config::MIN_SETS_TO_COMPARE;
use crate::set_number::is_valid_set_number;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ComparisonError {
    #[error("enter a valid set number (4-5 digits)")]
    InvalidSetNumber,
    #[error("set {0} is already in the comparison")]
    AlreadyAdded(String),
    #[error("add at least {min} sets to compare")]
    NotEnoughSets { min: usize },
}

/// Short display name for a set in the comparison grid
pub fn set_display_name(number: &str) -> &'static str {
    match number {
        "75367" => "Venator",
        "10316" => "Rivendell",
        "42154" => "Ford GT",
        "76269" => "Avengers Tower",
        _ => "Set",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSet {
    pub number: String,
    pub name: &'static str,
}

/// Sets picked for comparison, in the order they were added
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SetsGrid {
    sets: Vec<GridSet>,
}

impl SetsGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, input: &str) -> Result<GridSet, ComparisonError> {
        let number = input.trim();
        if !is_valid_set_number(number) {
            return Err(ComparisonError::InvalidSetNumber);
        }
        if self.sets.iter().any(|s| s.number == number) {
            return Err(ComparisonError::AlreadyAdded(number.to_string()));
        }

        let set = GridSet {
            number: number.to_string(),
            name: set_display_name(number),
        };
        self.sets.push(set.clone());
        Ok(set)
    }

    pub fn remove(&mut self, number: &str) -> bool {
        let original_len = self.sets.len();
        self.sets.retain(|s| s.number != number);
        self.sets.len() < original_len
    }

    pub fn sets(&self) -> &[GridSet] {
        &self.sets
    }

    pub fn numbers(&self) -> Vec<String> {
        self.sets.iter().map(|s| s.number.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

/// One column of the comparison table
#[derive(Debug, Clone, PartialEq)]
pub struct ComparedSet {
    pub number: String,
    pub name: String,
    pub theme: &'static str,
    pub year: u16,
    pub pieces: u32,
    pub age_range: &'static str,
    pub price: f64,
    pub price_per_piece: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonAnalysis {
    /// Lowest price per piece
    pub best_value: ComparedSet,
    /// Most pieces
    pub largest_set: ComparedSet,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub sets: Vec<ComparedSet>,
    pub analysis: ComparisonAnalysis,
}

const COMPARISON_THEMES: [&str; 3] = ["Star Wars", "Technic", "Creator Expert"];

fn base_price(index: usize) -> f64 {
    15000.0 + index as f64 * 5000.0
}

fn base_pieces(index: usize) -> u32 {
    1000 + index as u32 * 500
}

fn require_enough(numbers: &[String]) -> Result<(), ComparisonError> {
    if numbers.len() < MIN_SETS_TO_COMPARE {
        return Err(ComparisonError::NotEnoughSets {
            min: MIN_SETS_TO_COMPARE,
        });
    }
    Ok(())
}

/// Build the comparison table and analysis for the given set numbers
pub fn compare_sets(numbers: &[String]) -> Result<Comparison, ComparisonError> {
    require_enough(numbers)?;

    let sets: Vec<ComparedSet> = numbers
        .iter()
        .enumerate()
        .map(|(i, number)| {
            let price = base_price(i);
            let pieces = base_pieces(i);
            ComparedSet {
                number: number.clone(),
                name: format!("LEGO Set #{}", number),
                theme: COMPARISON_THEMES[i % COMPARISON_THEMES.len()],
                year: 2020 + i as u16,
                pieces,
                age_range: "18+",
                price,
                price_per_piece: price / f64::from(pieces),
            }
        })
        .collect();

    // Earliest set wins ties in both picks
    let best_value = sets
        .iter()
        .reduce(|best, s| if s.price_per_piece < best.price_per_piece { s } else { best })
        .cloned();
    let largest_set = sets
        .iter()
        .reduce(|largest, s| if s.pieces > largest.pieces { s } else { largest })
        .cloned();

    match (best_value, largest_set) {
        (Some(best_value), Some(largest_set)) => Ok(Comparison {
            sets,
            analysis: ComparisonAnalysis {
                best_value,
                largest_set,
            },
        }),
        _ => Err(ComparisonError::NotEnoughSets {
            min: MIN_SETS_TO_COMPARE,
        }),
    }
}

const PRICE_CHECK_RETAILERS: [(Retailer, f64); 3] =
    [(OZON, 0.95), (WILDBERRIES, 0.97), (YANDEX_MARKET, 1.0)];

/// One offer per (set, retailer) for the search results view
pub fn compare_set_prices(numbers: &[String]) -> Result<Vec<Product>, ComparisonError> {
    require_enough(numbers)?;

    Ok(numbers
        .iter()
        .enumerate()
        .flat_map(|(i, number)| {
            let base = base_price(i);
            PRICE_CHECK_RETAILERS
                .iter()
                .map(move |(retailer, factor)| Product {
                    id: format!("compare_{}_{}", number, retailer.name),
                    title: format!("LEGO Set #{}", number),
                    price: base * factor,
                    retailer: retailer.name.to_string(),
                    rating: 4.5,
                    rating_count: 100,
                    in_stock: true,
                    theme: "Comparison".to_string(),
                    year: 2023,
                    pieces: 1000,
                    age_range: "18+".to_string(),
                    number: number.clone(),
                    url: WEB_SEARCH.search_url(number).unwrap_or_default(),
                })
        })
        .collect())
}
