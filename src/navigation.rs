/// Tab navigation: which section of the page is visible

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Search,
    SetsComparison,
    Analytics,
    Tools,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 4] = [
        ActiveTab::Search,
        ActiveTab::SetsComparison,
        ActiveTab::Analytics,
        ActiveTab::Tools,
    ];

    /// Tab name as used in `data-tab` attributes and links
    pub fn name(self) -> &'static str {
        match self {
            ActiveTab::Search => "search",
            ActiveTab::SetsComparison => "setsComparison",
            ActiveTab::Analytics => "analytics",
            ActiveTab::Tools => "tools",
        }
    }

    pub fn parse(name: &str) -> Option<ActiveTab> {
        Self::ALL.into_iter().find(|tab| tab.name() == name)
    }

    /// Id of the page section shown for this tab
    pub fn section_id(self) -> String {
        format!("{}Section", self.name())
    }

    pub fn label(self) -> &'static str {
        match self {
            ActiveTab::Search => "🔍 Search",
            ActiveTab::SetsComparison => "⚖️ Compare",
            ActiveTab::Analytics => "📊 Analytics",
            ActiveTab::Tools => "🧰 Tools",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_names() {
        for tab in ActiveTab::ALL {
            assert_eq!(ActiveTab::parse(tab.name()), Some(tab));
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(ActiveTab::parse("wishlist"), None);
        assert_eq!(ActiveTab::parse(""), None);
    }

    #[test]
    fn test_section_ids() {
        assert_eq!(ActiveTab::Search.section_id(), "searchSection");
        assert_eq!(ActiveTab::SetsComparison.section_id(), "setsComparisonSection");
        assert_eq!(ActiveTab::Analytics.section_id(), "analyticsSection");
        assert_eq!(ActiveTab::Tools.section_id(), "toolsSection");
    }

    #[test]
    fn test_default_tab_is_search() {
        assert_eq!(ActiveTab::default(), ActiveTab::Search);
    }
}
