//! Таблица `{columns, rows}` с сортировкой по клику на заголовок

use super::number_format::format_number_with_decimals;
use super::sortable_header_cell::SortableHeaderCell;
use crate::shared::list_utils::sort_rows;
use contracts::shared::table::{value_text, DfTable};
use leptos::prelude::*;
use serde_json::Value;
use thaw::*;

/// Текст ячейки: дробные числа округляются до 2 знаков с разделителем тысяч
pub fn display_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) if n.is_f64() => format_number_with_decimals(f, 2),
            _ => n.to_string(),
        },
        Some(other) => value_text(other),
    }
}

/// Следующее состояние сортировки после клика по `field`
pub fn next_sort(current: &(String, bool), field: String) -> (String, bool) {
    if current.0 == field {
        (field, !current.1)
    } else {
        (field, true)
    }
}

#[component]
pub fn DataTable(
    #[prop(into)]
    table: Signal<DfTable>,
    /// Текст при пустой таблице
    #[prop(optional, into)]
    empty_text: Option<String>,
) -> impl IntoView {
    let empty_text = empty_text.unwrap_or_else(|| "No data".to_string());
    // (column, ascending); empty column keeps the server order
    let sort = RwSignal::new((String::new(), true));

    let rows = Memo::new(move |_| {
        let (column, ascending) = sort.get();
        let mut rows = table.with(|t| t.rows.clone());
        if !column.is_empty() {
            sort_rows(&mut rows, &column, ascending);
        }
        rows
    });

    let on_sort = Callback::new(move |field: String| {
        sort.update(|s| *s = next_sort(s, field));
    });

    view! {
        {move || {
            let columns = table.with(|t| t.columns.clone());
            if table.with(|t| t.is_empty()) {
                return view! { <div class="data-table__empty">{empty_text.clone()}</div> }.into_any();
            }
            let header_columns = columns.clone();
            view! {
                <div class="data-table">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                {header_columns
                                    .into_iter()
                                    .map(|column| view! {
                                        <SortableHeaderCell
                                            label=column.clone()
                                            sort_field=column
                                            current_sort_field=Signal::derive(move || sort.with(|s| s.0.clone()))
                                            sort_ascending=Signal::derive(move || sort.with(|s| s.1))
                                            on_sort=on_sort
                                        />
                                    })
                                    .collect_view()}
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let columns = columns.clone();
                                rows.get()
                                    .into_iter()
                                    .map(|row| {
                                        let cells = columns
                                            .iter()
                                            .map(|column| {
                                                let text = display_cell(row.get(column));
                                                view! {
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>{text}</TableCellLayout>
                                                    </TableCell>
                                                }
                                            })
                                            .collect_view();
                                        view! { <TableRow>{cells}</TableRow> }
                                    })
                                    .collect_view()
                            }}
                        </TableBody>
                    </Table>
                </div>
            }
            .into_any()
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_cell() {
        assert_eq!(display_cell(None), "");
        assert_eq!(display_cell(Some(&json!(null))), "");
        assert_eq!(display_cell(Some(&json!(2024))), "2024");
        assert_eq!(display_cell(Some(&json!(1234.567))), "1,234.57");
        assert_eq!(display_cell(Some(&json!("Acme"))), "Acme");
    }

    #[test]
    fn test_next_sort() {
        let start = (String::new(), true);
        let by_revenue = next_sort(&start, "Revenue".to_string());
        assert_eq!(by_revenue, ("Revenue".to_string(), true));
        assert_eq!(next_sort(&by_revenue, "Revenue".to_string()), ("Revenue".to_string(), false));
        assert_eq!(next_sort(&by_revenue, "ROI".to_string()), ("ROI".to_string(), true));
    }
}
