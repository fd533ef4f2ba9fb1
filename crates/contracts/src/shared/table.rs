use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// KPI card: label plus a value the backend may send as number or text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Kpi {
    pub label: String,
    pub value: Value,
}

/// Tabular payload `{columns, rows}` used by summary, simulation and
/// performance endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DfTable {
    pub columns: Vec<String>,
    pub rows: Vec<Map<String, Value>>,
}

impl DfTable {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() || self.rows.is_empty()
    }

    /// Display text of one cell, empty when the row lacks the column
    pub fn cell_text(row: &Map<String, Value>, column: &str) -> String {
        row.get(column).map(value_text).unwrap_or_default()
    }

    /// Builds a table out of a list of flat JSON records.
    ///
    /// Columns follow the key order of the first record.
    pub fn from_records(records: &[Map<String, Value>]) -> Self {
        let columns = records
            .first()
            .map(|first| first.keys().cloned().collect())
            .unwrap_or_default();
        Self {
            columns,
            rows: records.to_vec(),
        }
    }
}

/// Renders a scalar JSON value for display
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_partial_table() {
        let table: DfTable = serde_json::from_value(json!({ "columns": ["ppg"] })).unwrap();
        assert_eq!(table.columns, vec!["ppg"]);
        assert!(table.rows.is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn test_cell_text() {
        let row = json!({ "ppg": "PPG-1", "roi": 1.5, "note": null });
        let row = row.as_object().unwrap();
        assert_eq!(DfTable::cell_text(row, "ppg"), "PPG-1");
        assert_eq!(DfTable::cell_text(row, "roi"), "1.5");
        assert_eq!(DfTable::cell_text(row, "note"), "");
        assert_eq!(DfTable::cell_text(row, "missing"), "");
    }

    #[test]
    fn test_from_records_takes_columns_from_first_record() {
        let records: Vec<Map<String, Value>> = serde_json::from_value(json!([
            { "date": "2024-01", "volume": 10 },
            { "date": "2024-02", "volume": 12 }
        ]))
        .unwrap();

        let table = DfTable::from_records(&records);
        assert_eq!(table.columns, vec!["date", "volume"]);
        assert_eq!(table.rows.len(), 2);
    }
}
