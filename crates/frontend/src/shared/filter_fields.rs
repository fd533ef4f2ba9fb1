//! Filter sidebar field definitions and the option lists they are filled with

use contracts::shared::filters::FilterSet;
use serde_json::Value;

/// Category preselected on every analytics page
pub const DEFAULT_CATEGORY: &str = "SurfaceCare";

/// Static description of one multi-select filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub label: &'static str,
    /// Request field and key of the options payload
    pub name: &'static str,
    /// Icon name understood by [`icon`](crate::shared::icons::icon)
    pub icon: &'static str,
}

impl FieldDef {
    pub const fn new(label: &'static str, name: &'static str, icon: &'static str) -> Self {
        Self { label, name, icon }
    }
}

/// A field definition together with the values the user can pick from
#[derive(Debug, Clone, PartialEq)]
pub struct FilterField {
    pub def: FieldDef,
    pub options: Vec<String>,
}

/// Pairs every definition with `options[def.name]`. Missing or non-list
/// entries give an empty option list; numbers (years, months) become text.
pub fn build_fields(defs: &[FieldDef], options: Option<&Value>) -> Vec<FilterField> {
    defs.iter()
        .map(|def| FilterField {
            def: *def,
            options: options
                .and_then(|data| data.get(def.name))
                .map(option_values)
                .unwrap_or_default(),
        })
        .collect()
}

fn option_values(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Category to preselect: `SurfaceCare` when offered, else the first offered
/// category, else `SurfaceCare`
pub fn preferred_category(options: Option<&Value>) -> String {
    let offered = options
        .and_then(|data| data.get("categories"))
        .map(option_values)
        .unwrap_or_default();
    if offered.iter().any(|c| c == DEFAULT_CATEGORY) {
        DEFAULT_CATEGORY.to_string()
    } else {
        offered
            .into_iter()
            .next()
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
    }
}

/// Fresh filter state of a page: every field unrestricted except the category
pub fn initial_filters(names: &[&str], category: String) -> FilterSet {
    FilterSet::with_fields(names).with("categories", vec![category])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const DEFS: [FieldDef; 2] = [
        FieldDef::new("Category", "categories", "list"),
        FieldDef::new("Year", "year", "clock"),
    ];

    #[test]
    fn test_build_fields_reads_options() {
        let options = json!({ "categories": ["SurfaceCare", "Laundry"], "year": [2022, 2023] });
        let fields = build_fields(&DEFS, Some(&options));

        assert_eq!(fields[0].options, vec!["SurfaceCare", "Laundry"]);
        assert_eq!(fields[1].options, vec!["2022", "2023"]);
        assert_eq!(fields[1].def.label, "Year");
    }

    #[test]
    fn test_build_fields_without_options() {
        let fields = build_fields(&DEFS, None);
        assert!(fields.iter().all(|f| f.options.is_empty()));

        let odd = json!({ "categories": "not a list" });
        assert!(build_fields(&DEFS, Some(&odd))[0].options.is_empty());
    }

    #[test]
    fn test_preferred_category() {
        assert_eq!(
            preferred_category(Some(&json!({ "categories": ["Laundry", "SurfaceCare"] }))),
            "SurfaceCare"
        );
        assert_eq!(
            preferred_category(Some(&json!({ "categories": ["Laundry", "Dish"] }))),
            "Laundry"
        );
        assert_eq!(preferred_category(Some(&json!({ "categories": [] }))), "SurfaceCare");
        assert_eq!(preferred_category(None), "SurfaceCare");
    }

    #[test]
    fn test_initial_filters() {
        let filters = initial_filters(&["categories", "brands"], "SurfaceCare".to_string());
        assert_eq!(filters.get("categories"), ["SurfaceCare".to_string()]);
        assert!(!filters.is_restricted("brands"));
        assert_eq!(filters.names().count(), 2);
    }
}
