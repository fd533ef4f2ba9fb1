use contracts::shared::filters::FilterSet;

/// Remembers the last `(tab, filters)` combination an options fetch was
/// issued for, so re-renders with unchanged filters don't refetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchGate {
    last_key: Option<String>,
}

impl FetchGate {
    /// Gate that already counts `issued` as fetched, for a page that started
    /// its first options request before the gated effect ran
    pub fn seeded(issued: Option<String>) -> Self {
        Self { last_key: issued }
    }

    pub fn gate_key(tab: &str, filters: &FilterSet) -> String {
        format!("{}-{}", tab, filters.cache_key())
    }

    /// Returns true (and remembers `key`) when it differs from the last one
    pub fn should_fetch(&mut self, key: String) -> bool {
        if self.last_key.as_deref() == Some(key.as_str()) {
            return false;
        }
        self.last_key = Some(key);
        true
    }

    pub fn reset(&mut self) {
        self.last_key = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_key_is_skipped() {
        let mut gate = FetchGate::default();
        let filters = FilterSet::new().with("categories", vec!["SurfaceCare".to_string()]);
        let key = FetchGate::gate_key("summary", &filters);

        assert!(gate.should_fetch(key.clone()));
        assert!(!gate.should_fetch(key));
    }

    #[test]
    fn test_tab_or_filter_change_fetches() {
        let mut gate = FetchGate::default();
        let filters = FilterSet::new().with("categories", vec!["SurfaceCare".to_string()]);

        assert!(gate.should_fetch(FetchGate::gate_key("summary", &filters)));
        assert!(gate.should_fetch(FetchGate::gate_key("simulation", &filters)));

        let narrowed = filters.clone().with("brands", vec!["Acme".to_string()]);
        assert!(gate.should_fetch(FetchGate::gate_key("simulation", &narrowed)));
    }

    #[test]
    fn test_seeded_gate_skips_the_mount_fetch() {
        let filters = FilterSet::new().with("categories", vec!["SurfaceCare".to_string()]);
        let key = FetchGate::gate_key("summary", &filters);

        let mut gate = FetchGate::seeded(Some(key.clone()));
        assert!(!gate.should_fetch(key));
        assert!(gate.should_fetch(FetchGate::gate_key("trend", &filters)));

        let mut unseeded = FetchGate::seeded(None);
        assert!(unseeded.should_fetch(FetchGate::gate_key("summary", &filters)));
    }

    #[test]
    fn test_reset_allows_refetch() {
        let mut gate = FetchGate::default();
        let key = FetchGate::gate_key("performance", &FilterSet::new());
        assert!(gate.should_fetch(key.clone()));
        gate.reset();
        assert!(gate.should_fetch(key));
    }
}
