/// Static configuration for BrickMind

/// Storage slot holding the serialized wishlist
pub const WISHLIST_STORAGE_KEY: &str = "brickmind_wishlist";

/// Storage slot holding the light/dark preference
pub const THEME_STORAGE_KEY: &str = "theme";

/// Themes offered as quick search tags
pub const THEMES: [&str; 6] = [
    "Star Wars",
    "Technic",
    "City",
    "Creator Expert",
    "Ideas",
    "Architecture",
];

/// Shortest search query accepted (after trimming)
pub const MIN_QUERY_LEN: usize = 2;

/// Number of sets needed before a comparison can run
pub const MIN_SETS_TO_COMPARE: usize = 2;

/// Market average price per piece, shown as a hint in the calculator
pub const AVERAGE_PRICE_PER_PIECE: f64 = 0.35;

/// Upper bounds (exclusive) of the price-per-piece rating bands
pub const EXCELLENT_PRICE_PER_PIECE: f64 = 0.2;
pub const GOOD_PRICE_PER_PIECE: f64 = 0.4;
pub const AVERAGE_BAND_PRICE_PER_PIECE: f64 = 0.6;

/// How many trending sets the analytics tab shows
pub const TRENDING_LIMIT: usize = 5;
