/// Утилиты сортировки строк таблиц, пришедших с сервера аналитики
use serde_json::{Map, Value};
use std::cmp::Ordering;

/// Числовое значение ячейки: число или строка вида "1,234.5", "12%", "$3.2"
pub fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let cleaned: String = s
                .trim()
                .chars()
                .filter(|c| !matches!(c, ',' | '%' | '$' | ' '))
                .collect();
            cleaned.parse::<f64>().ok()
        }
        _ => None,
    }
}

/// Сравнивает две ячейки: числа по значению, остальное как строки;
/// пустые значения всегда в конце
pub fn compare_cells(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => match (numeric_value(a), numeric_value(b)) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => contracts::shared::table::value_text(a)
                .to_lowercase()
                .cmp(&contracts::shared::table::value_text(b).to_lowercase()),
        },
    }
}

/// Сортирует строки по колонке; стабильная сортировка, пустые ячейки в конце
/// при любом направлении
pub fn sort_rows(rows: &mut [Map<String, Value>], column: &str, ascending: bool) {
    let is_empty = |row: &Map<String, Value>| row.get(column).map_or(true, Value::is_null);
    rows.sort_by(|a, b| match (is_empty(a), is_empty(b)) {
        (false, false) => {
            let cmp = compare_cells(a.get(column), b.get(column));
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        }
        (empty_a, empty_b) => empty_a.cmp(&empty_b),
    });
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows() -> Vec<Map<String, Value>> {
        vec![
            json!({ "ppg": "B", "roi": "1,200.5" }),
            json!({ "ppg": "a", "roi": null }),
            json!({ "ppg": "C", "roi": 3 }),
        ]
        .into_iter()
        .map(|v| v.as_object().cloned().unwrap())
        .collect()
    }

    fn column(rows: &[Map<String, Value>], name: &str) -> Vec<String> {
        rows.iter()
            .map(|r| contracts::shared::table::DfTable::cell_text(r, name))
            .collect()
    }

    #[test]
    fn test_numeric_value() {
        assert_eq!(numeric_value(&json!(2.5)), Some(2.5));
        assert_eq!(numeric_value(&json!("1,234.5")), Some(1234.5));
        assert_eq!(numeric_value(&json!("12%")), Some(12.0));
        assert_eq!(numeric_value(&json!("n/a")), None);
    }

    #[test]
    fn test_sort_numeric_column_nulls_last() {
        let mut rows = rows();
        sort_rows(&mut rows, "roi", true);
        assert_eq!(column(&rows, "ppg"), vec!["C", "B", "a"]);
        sort_rows(&mut rows, "roi", false);
        assert_eq!(column(&rows, "ppg"), vec!["B", "C", "a"]);
    }

    #[test]
    fn test_sort_text_column_case_insensitive() {
        let mut rows = rows();
        sort_rows(&mut rows, "ppg", false);
        assert_eq!(column(&rows, "ppg"), vec!["C", "B", "a"]);
        sort_rows(&mut rows, "ppg", true);
        assert_eq!(column(&rows, "ppg"), vec!["a", "B", "C"]);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("roi", "roi", true), " ▲");
        assert_eq!(get_sort_indicator("roi", "roi", false), " ▼");
        assert_eq!(get_sort_indicator("ppg", "roi", true), " ⇅");
    }
}
