/// Demo catalog: products, retailers and set details standing in for a search backend
use url::Url;

use crate::config::MIN_QUERY_LEN;
use crate::set_number::is_valid_set_number;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("enter at least {min} characters")]
    QueryTooShort { min: usize },
    #[error("enter a valid set number (4-5 digits)")]
    InvalidSetNumber,
    #[error("set #{0} was not found")]
    UnknownSet(String),
}

/// A shop selling sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Retailer {
    pub name: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    search_base: &'static str,
    query_param: &'static str,
}

impl Retailer {
    /// Retailer search page for a set, e.g. `https://www.ozon.ru/search/?text=lego+75367`
    pub fn search_url(&self, number: &str) -> Option<String> {
        Url::parse_with_params(self.search_base, &[(self.query_param, format!("lego {}", number))])
            .map(String::from)
            .map_err(|e| log::warn!("Bad search URL for {}: {}", self.name, e))
            .ok()
    }
}

pub const OZON: Retailer = Retailer {
    name: "OZON",
    color: "#005BFF",
    icon: "🛒",
    search_base: "https://www.ozon.ru/search/",
    query_param: "text",
};

pub const WILDBERRIES: Retailer = Retailer {
    name: "Wildberries",
    color: "#FF3366",
    icon: "📦",
    search_base: "https://www.wildberries.ru/catalog/0/search.aspx",
    query_param: "search",
};

pub const YANDEX_MARKET: Retailer = Retailer {
    name: "Яндекс.Маркет",
    color: "#FC3F1D",
    icon: "📊",
    search_base: "https://market.yandex.ru/search",
    query_param: "text",
};

pub const DNS: Retailer = Retailer {
    name: "ДНС",
    color: "#00A550",
    icon: "💻",
    search_base: "https://www.dns-shop.ru/search/",
    query_param: "q",
};

pub const CITILINK: Retailer = Retailer {
    name: "Ситилинк",
    color: "#FF6600",
    icon: "🏪",
    search_base: "https://www.citilink.ru/search/",
    query_param: "text",
};

/// Fallback when no retailer is known: a web search
pub const WEB_SEARCH: Retailer = Retailer {
    name: "Web",
    color: "#4285F4",
    icon: "🛍️",
    search_base: "https://www.google.com/search",
    query_param: "q",
};

pub fn retailer_by_name(name: &str) -> Option<Retailer> {
    [OZON, WILDBERRIES, YANDEX_MARKET, DNS, CITILINK]
        .into_iter()
        .find(|r| r.name == name)
}

pub fn retailer_icon(name: &str) -> &'static str {
    retailer_by_name(name).map_or(WEB_SEARCH.icon, |r| r.icon)
}

pub fn retailer_color(name: &str) -> &'static str {
    retailer_by_name(name).map_or(WEB_SEARCH.color, |r| r.color)
}

pub fn theme_icon(theme: &str) -> &'static str {
    match theme {
        "Star Wars" => "⭐",
        "Technic" => "⚙️",
        "City" => "🏙️",
        "Creator Expert" => "🎨",
        "Marvel" => "🦸",
        _ => "🧱",
    }
}

/// A product offer shown as a search result card
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub price: f64,
    pub retailer: String,
    pub rating: f64,
    pub rating_count: u32,
    pub in_stock: bool,
    pub theme: String,
    pub year: u16,
    pub pieces: u32,
    pub age_range: String,
    pub number: String,
    pub url: String,
}

impl Product {
    /// Five-star bar, e.g. 4.8 → "★★★★☆"
    pub fn stars(&self) -> String {
        let full = (self.rating.floor().clamp(0.0, 5.0)) as usize;
        format!("{}{}", "★".repeat(full), "☆".repeat(5 - full))
    }

    pub fn retailer_icon(&self) -> &'static str {
        retailer_icon(&self.retailer)
    }

    pub fn retailer_color(&self) -> &'static str {
        retailer_color(&self.retailer)
    }
}

struct DemoProduct {
    title: &'static str,
    price: f64,
    retailer: Retailer,
    rating: f64,
    rating_count: u32,
    theme: &'static str,
    year: u16,
    pieces: u32,
    number: &'static str,
}

const DEMO_PRODUCTS: [DemoProduct; 4] = [
    DemoProduct {
        title: "LEGO Star Wars Venator-Class Republic Attack Cruiser",
        price: 29999.0,
        retailer: OZON,
        rating: 4.8,
        rating_count: 156,
        theme: "Star Wars",
        year: 2023,
        pieces: 3294,
        number: "75367",
    },
    DemoProduct {
        title: "LEGO Technic 2022 Ford GT",
        price: 21999.0,
        retailer: WILDBERRIES,
        rating: 4.6,
        rating_count: 89,
        theme: "Technic",
        year: 2022,
        pieces: 1466,
        number: "42154",
    },
    DemoProduct {
        title: "LEGO Creator Expert The Lord of the Rings: Rivendell",
        price: 45999.0,
        retailer: YANDEX_MARKET,
        rating: 4.9,
        rating_count: 234,
        theme: "Creator Expert",
        year: 2023,
        pieces: 6167,
        number: "10316",
    },
    DemoProduct {
        title: "LEGO Marvel Avengers Tower",
        price: 37999.0,
        retailer: DNS,
        rating: 4.7,
        rating_count: 189,
        theme: "Marvel",
        year: 2023,
        pieces: 4051,
        number: "76269",
    },
];

/// Every product in the demo catalog
pub fn demo_products() -> Vec<Product> {
    DEMO_PRODUCTS
        .iter()
        .enumerate()
        .map(|(i, demo)| Product {
            id: (i + 1).to_string(),
            title: demo.title.to_string(),
            price: demo.price,
            retailer: demo.retailer.name.to_string(),
            rating: demo.rating,
            rating_count: demo.rating_count,
            in_stock: true,
            theme: demo.theme.to_string(),
            year: demo.year,
            pieces: demo.pieces,
            age_range: "18+".to_string(),
            number: demo.number.to_string(),
            url: demo.retailer.search_url(demo.number).unwrap_or_default(),
        })
        .collect()
}

/// Search the demo catalog
///
/// Matches case-insensitively on title or theme, or as a substring of the set number.
pub fn search(query: &str) -> Result<Vec<Product>, CatalogError> {
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_LEN {
        return Err(CatalogError::QueryTooShort { min: MIN_QUERY_LEN });
    }

    let query_lower = query.to_lowercase();
    Ok(demo_products()
        .into_iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&query_lower)
                || p.theme.to_lowercase().contains(&query_lower)
                || p.number.contains(query)
        })
        .collect())
}

/// Result ordering picked in the sort dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
    Rating,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::Relevance,
        SortOrder::PriceAsc,
        SortOrder::PriceDesc,
        SortOrder::Rating,
    ];

    pub fn value(self) -> &'static str {
        match self {
            SortOrder::Relevance => "relevance",
            SortOrder::PriceAsc => "price-asc",
            SortOrder::PriceDesc => "price-desc",
            SortOrder::Rating => "rating",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Relevance => "By relevance",
            SortOrder::PriceAsc => "Price: low to high",
            SortOrder::PriceDesc => "Price: high to low",
            SortOrder::Rating => "By rating",
        }
    }

    /// Unknown values fall back to relevance
    pub fn parse(value: &str) -> SortOrder {
        Self::ALL
            .into_iter()
            .find(|order| order.value() == value)
            .unwrap_or_default()
    }
}

/// Sorted copy of `products`; ties keep their input order
pub fn sort_products(products: &[Product], order: SortOrder) -> Vec<Product> {
    let mut sorted = products.to_vec();

    match order {
        SortOrder::Relevance => {}
        SortOrder::PriceAsc => sorted.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::PriceDesc => sorted.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortOrder::Rating => sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }

    sorted
}

/// Count and price range of a result list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultsSummary {
    pub count: usize,
    pub min_price: f64,
    pub max_price: f64,
    pub average_price: f64,
}

impl ResultsSummary {
    /// None for an empty list; the average is rounded to whole rubles
    pub fn from_products(products: &[Product]) -> Option<ResultsSummary> {
        if products.is_empty() {
            return None;
        }

        let prices = products.iter().map(|p| p.price);
        let min_price = prices.clone().fold(f64::INFINITY, f64::min);
        let max_price = prices.clone().fold(f64::NEG_INFINITY, f64::max);
        let total: f64 = prices.sum();

        Some(ResultsSummary {
            count: products.len(),
            min_price,
            max_price,
            average_price: (total / products.len() as f64).round(),
        })
    }
}

/// Reference data about a set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetDetails {
    pub number: String,
    pub name: &'static str,
    pub theme: &'static str,
    pub year: u16,
    pub pieces: u32,
    pub age_range: &'static str,
    pub description: &'static str,
}

/// Look up a set by its exact number
pub fn identify_set(number: &str) -> Result<SetDetails, CatalogError> {
    let number = number.trim();
    if !is_valid_set_number(number) {
        return Err(CatalogError::InvalidSetNumber);
    }

    let (name, theme, year, pieces, description) = match number {
        "75367" => (
            "Venator-Class Republic Attack Cruiser",
            "Star Wars",
            2023,
            3294,
            "Large-scale model of the Venator star destroyer",
        ),
        "10316" => (
            "The Lord of the Rings: Rivendell",
            "Creator Expert",
            2023,
            6167,
            "Detailed model of Rivendell",
        ),
        "42154" => (
            "2022 Ford GT",
            "Technic",
            2022,
            1466,
            "Detailed model of the Ford GT",
        ),
        _ => return Err(CatalogError::UnknownSet(number.to_string())),
    };

    Ok(SetDetails {
        number: number.to_string(),
        name,
        theme,
        year,
        pieces,
        age_range: "18+",
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_demo_products() {
        let products = demo_products();

        assert_eq!(products.len(), 4);
        assert_eq!(products[0].id, "1");
        assert_eq!(products[0].number, "75367");
        assert!(products.iter().all(|p| p.in_stock));
    }

    #[test]
    fn test_product_urls() {
        let products = demo_products();

        assert_eq!(products[0].url, "https://www.ozon.ru/search/?text=lego+75367");
        assert_eq!(
            products[1].url,
            "https://www.wildberries.ru/catalog/0/search.aspx?search=lego+42154"
        );
        assert_eq!(products[2].url, "https://market.yandex.ru/search?text=lego+10316");
        assert_eq!(products[3].url, "https://www.dns-shop.ru/search/?q=lego+76269");
    }

    #[test]
    fn test_search_by_theme_case_insensitive() {
        let results = search("star wars").unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].number, "75367");
    }

    #[test]
    fn test_search_by_number() {
        let results = search("4215").unwrap();

        assert_eq!(titles(&results), vec!["LEGO Technic 2022 Ford GT"]);
    }

    #[test]
    fn test_search_matches_all_lego() {
        assert_eq!(search("  lego ").unwrap().len(), 4);
    }

    #[test]
    fn test_search_no_results() {
        assert!(search("Duplo").unwrap().is_empty());
    }

    #[test]
    fn test_search_too_short() {
        assert_eq!(search("a"), Err(CatalogError::QueryTooShort { min: 2 }));
        assert_eq!(search("  "), Err(CatalogError::QueryTooShort { min: 2 }));
    }

    #[test]
    fn test_sort_products() {
        let products = demo_products();

        let by_price = sort_products(&products, SortOrder::PriceAsc);
        assert_eq!(by_price[0].number, "42154");
        assert_eq!(by_price[3].number, "10316");

        let by_price_desc = sort_products(&products, SortOrder::PriceDesc);
        assert_eq!(by_price_desc[0].number, "10316");

        let by_rating = sort_products(&products, SortOrder::Rating);
        assert_eq!(by_rating[0].number, "10316");
        assert_eq!(by_rating[3].number, "42154");

        assert_eq!(sort_products(&products, SortOrder::Relevance), products);
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!(SortOrder::parse("price-asc"), SortOrder::PriceAsc);
        assert_eq!(SortOrder::parse("rating"), SortOrder::Rating);
        assert_eq!(SortOrder::parse("newest"), SortOrder::Relevance);
    }

    #[test]
    fn test_results_summary() {
        let summary = ResultsSummary::from_products(&demo_products()).unwrap();

        assert_eq!(summary.count, 4);
        assert_eq!(summary.min_price, 21999.0);
        assert_eq!(summary.max_price, 45999.0);
        assert_eq!(summary.average_price, 33999.0);
    }

    #[test]
    fn test_results_summary_empty() {
        assert_eq!(ResultsSummary::from_products(&[]), None);
    }

    #[test]
    fn test_stars() {
        let mut product = demo_products().remove(0);
        assert_eq!(product.stars(), "★★★★☆");

        product.rating = 5.0;
        assert_eq!(product.stars(), "★★★★★");
    }

    #[test]
    fn test_icons() {
        assert_eq!(retailer_icon("OZON"), "🛒");
        assert_eq!(retailer_icon("Unknown"), "🛍️");
        assert_eq!(retailer_color("ДНС"), "#00A550");
        assert_eq!(theme_icon("Technic"), "⚙️");
        assert_eq!(theme_icon("Duplo"), "🧱");
    }

    #[test]
    fn test_identify_set() {
        let details = identify_set("75367").unwrap();

        assert_eq!(details.name, "Venator-Class Republic Attack Cruiser");
        assert_eq!(details.pieces, 3294);
    }

    #[test]
    fn test_identify_set_errors() {
        assert_eq!(identify_set("753"), Err(CatalogError::InvalidSetNumber));
        assert_eq!(identify_set("abcde"), Err(CatalogError::InvalidSetNumber));
        assert_eq!(
            identify_set("99999"),
            Err(CatalogError::UnknownSet("99999".to_string()))
        );
    }
}
