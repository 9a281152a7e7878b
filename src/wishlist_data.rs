/// Data structures for the BrickMind wishlist
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved wishlist item, as persisted in local storage
///
/// Optional fields missing from older persisted data read back as `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WishlistEntry {
    pub id: String,
    pub query: String,
    pub added: DateTime<Utc>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub retailer: Option<String>,
}

/// Errors raised while building a [`WishlistCandidate`]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CandidateError {
    /// The query is empty or whitespace only.
    #[error("enter a set name or number")]
    EmptyQuery,
}

/// Input to `WishlistStore::add`
///
/// The query is trimmed and must be non-empty. Optional fields that are empty
/// strings are dropped, as are prices that are not positive and finite.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WishlistCandidate {
    query: String,
    price: Option<f64>,
    number: Option<String>,
    theme: Option<String>,
    retailer: Option<String>,
}

impl WishlistCandidate {
    pub fn new(query: &str) -> Result<Self, CandidateError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(CandidateError::EmptyQuery);
        }

        Ok(WishlistCandidate {
            query: query.to_string(),
            ..Default::default()
        })
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price).filter(|p| p.is_finite() && *p > 0.0);
        self
    }

    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = non_empty(number.into());
        self
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = non_empty(theme.into());
        self
    }

    pub fn with_retailer(mut self, retailer: impl Into<String>) -> Self {
        self.retailer = non_empty(retailer.into());
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn price(&self) -> Option<f64> {
        self.price
    }

    pub fn number(&self) -> Option<&str> {
        self.number.as_deref()
    }

    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    pub fn retailer(&self) -> Option<&str> {
        self.retailer.as_deref()
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Result of adding a candidate to the wishlist
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added(WishlistEntry),
    /// Rejected: an entry with the same query or set number exists
    Duplicate(WishlistEntry),
}

impl AddOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AddOutcome::Added(_))
    }

    pub fn message(&self) -> &'static str {
        match self {
            AddOutcome::Added(_) => "Added to wishlist",
            AddOutcome::Duplicate(_) => "This set is already in your wishlist",
        }
    }

    /// The new entry on success, the conflicting entry otherwise
    pub fn entry(&self) -> &WishlistEntry {
        match self {
            AddOutcome::Added(entry) | AddOutcome::Duplicate(entry) => entry,
        }
    }
}

/// Result of removing an entry by id; removing an unknown id is not an error
#[derive(Debug, Clone, PartialEq)]
pub struct RemoveOutcome {
    pub removed: Option<WishlistEntry>,
}

impl RemoveOutcome {
    pub fn is_success(&self) -> bool {
        true
    }

    pub fn message(&self) -> &'static str {
        "Removed from wishlist"
    }
}

/// Result of clearing the wishlist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearOutcome {
    pub removed_count: usize,
}

impl ClearOutcome {
    pub fn is_success(&self) -> bool {
        true
    }

    pub fn message(&self) -> &'static str {
        "Wishlist cleared"
    }
}

/// Result of the heart toggle on a product card
#[derive(Debug, Clone, PartialEq)]
pub enum ToggleOutcome {
    Added(WishlistEntry),
    Removed(WishlistEntry),
    Duplicate(WishlistEntry),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_trims_query() {
        let candidate = WishlistCandidate::new("  Venator 75367  ").unwrap();
        assert_eq!(candidate.query(), "Venator 75367");
    }

    #[test]
    fn test_candidate_rejects_empty_query() {
        assert_eq!(WishlistCandidate::new(""), Err(CandidateError::EmptyQuery));
        assert_eq!(WishlistCandidate::new("   "), Err(CandidateError::EmptyQuery));
    }

    #[test]
    fn test_candidate_drops_falsy_optionals() {
        let candidate = WishlistCandidate::new("Rivendell")
            .unwrap()
            .with_price(0.0)
            .with_number("")
            .with_theme("  ")
            .with_retailer("OZON");

        assert_eq!(candidate.price(), None);
        assert_eq!(candidate.number(), None);
        assert_eq!(candidate.theme(), None);
        assert_eq!(candidate.retailer(), Some("OZON"));
    }

    #[test]
    fn test_candidate_rejects_nan_price() {
        let candidate = WishlistCandidate::new("Rivendell").unwrap().with_price(f64::NAN);
        assert_eq!(candidate.price(), None);
    }

    #[test]
    fn test_entry_reads_legacy_json_with_missing_fields() {
        let json = r#"{"id":"wish_1_abc","query":"Ford GT","added":"2024-10-28T10:30:00.000Z"}"#;
        let entry: WishlistEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.query, "Ford GT");
        assert_eq!(entry.price, None);
        assert_eq!(entry.number, None);
        assert_eq!(entry.theme, None);
        assert_eq!(entry.retailer, None);
    }

    #[test]
    fn test_entry_reads_null_fields() {
        let json = r#"{"id":"wish_1_abc","query":"Ford GT","added":"2024-10-28T10:30:00Z","price":null,"number":"42154","theme":null,"retailer":null}"#;
        let entry: WishlistEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.number, Some("42154".to_string()));
        assert_eq!(entry.price, None);
    }

    #[test]
    fn test_add_outcome_message() {
        let entry: WishlistEntry = serde_json::from_str(
            r#"{"id":"wish_1_abc","query":"Ford GT","added":"2024-10-28T10:30:00Z"}"#,
        )
        .unwrap();

        assert!(AddOutcome::Added(entry.clone()).is_success());
        assert!(!AddOutcome::Duplicate(entry.clone()).is_success());
        assert_eq!(
            AddOutcome::Duplicate(entry).message(),
            "This set is already in your wishlist"
        );
    }
}
