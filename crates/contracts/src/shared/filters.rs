use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Multi-select filter state of one analytics page.
///
/// Maps a filter name (`categories`, `retailers`, ...) to the ordered list of
/// selected values. An empty list means "no restriction" and is sent to the
/// backend as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSet(BTreeMap<String, Vec<String>>);

impl FilterSet {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Filter set with every named field present and unrestricted
    pub fn with_fields(names: &[&str]) -> Self {
        Self(
            names
                .iter()
                .map(|name| (name.to_string(), Vec::new()))
                .collect(),
        )
    }

    /// Builder-style variant of [`FilterSet::set`]
    pub fn with(mut self, name: &str, values: Vec<String>) -> Self {
        self.set(name, values);
        self
    }

    /// Selected values of a field, empty when the field is unknown
    pub fn get(&self, name: &str) -> &[String] {
        self.0.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn set(&mut self, name: &str, values: Vec<String>) {
        self.0.insert(name.to_string(), values);
    }

    pub fn is_restricted(&self, name: &str) -> bool {
        !self.get(name).is_empty()
    }

    /// Number of fields with at least one selected value
    pub fn active_count(&self) -> usize {
        self.0.values().filter(|values| !values.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Request payload with every field, empty selections normalized to `null`
    pub fn to_payload(&self) -> Map<String, Value> {
        self.0
            .iter()
            .map(|(name, values)| (name.clone(), normalize(values)))
            .collect()
    }

    /// Request payload restricted to the fields an endpoint accepts.
    ///
    /// Fields missing from the set are sent as `null` as well.
    pub fn project(&self, names: &[&str]) -> Map<String, Value> {
        names
            .iter()
            .map(|name| (name.to_string(), normalize(self.get(name))))
            .collect()
    }

    /// Stable textual form used to detect "same filters as last time"
    pub fn cache_key(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_default()
    }
}

fn normalize(values: &[String]) -> Value {
    if values.is_empty() {
        Value::Null
    } else {
        Value::Array(values.iter().cloned().map(Value::String).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_selection_is_sent_as_null() {
        let filters = FilterSet::with_fields(&["categories", "retailers"])
            .with("categories", vec!["SurfaceCare".to_string()]);

        assert_eq!(
            Value::Object(filters.to_payload()),
            json!({ "categories": ["SurfaceCare"], "retailers": null })
        );
    }

    #[test]
    fn test_project_keeps_only_requested_fields() {
        let filters = FilterSet::with_fields(&["categories", "brands", "time_periods"])
            .with("brands", vec!["Acme".to_string(), "Brite".to_string()]);

        assert_eq!(
            Value::Object(filters.project(&["brands", "ppgs"])),
            json!({ "brands": ["Acme", "Brite"], "ppgs": null })
        );
    }

    #[test]
    fn test_active_count_ignores_empty_fields() {
        let mut filters = FilterSet::with_fields(&["categories", "brands", "ppgs"]);
        assert_eq!(filters.active_count(), 0);
        assert!(filters.is_empty());

        filters.set("ppgs", vec!["PPG-1".to_string()]);
        assert_eq!(filters.active_count(), 1);
        assert!(filters.is_restricted("ppgs"));
        assert!(!filters.is_restricted("brands"));
    }

    #[test]
    fn test_cache_key_is_order_independent() {
        let a = FilterSet::new()
            .with("brands", vec!["X".to_string()])
            .with("categories", vec!["Y".to_string()]);
        let b = FilterSet::new()
            .with("categories", vec!["Y".to_string()])
            .with("brands", vec!["X".to_string()]);

        assert_eq!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn test_unknown_field_reads_as_empty() {
        let filters = FilterSet::new();
        assert!(filters.get("segment").is_empty());
    }
}
