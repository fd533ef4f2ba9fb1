//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Примеры
//!
//! ```text
//! <SortableHeaderCell
//!     label="Revenue"
//!     sort_field="Revenue"
//!     current_sort_field=Signal::derive(move || sort.with(|s| s.0.clone()))
//!     sort_ascending=Signal::derive(move || sort.with(|s| s.1))
//!     on_sort=Callback::new(move |field| toggle_sort(field))
//! />
//! ```

use crate::shared::list_utils::get_sort_indicator;
use leptos::prelude::*;
use thaw::*;

/// Компонент сортируемой ячейки заголовка таблицы
///
/// Добавляет индикатор сортировки (▲▼⇅) и по клику сообщает поле сортировки
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Поле для сортировки
    #[prop(into)]
    sort_field: String,

    /// Текущее поле сортировки
    #[prop(into)]
    current_sort_field: Signal<String>,

    /// Направление сортировки
    #[prop(into)]
    sort_ascending: Signal<bool>,

    /// Callback при клике на заголовок
    on_sort: Callback<String>,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView {
    let sort_field_for_click = sort_field.clone();
    let is_current = {
        let sort_field = sort_field.clone();
        move || current_sort_field.with(|current| current == &sort_field)
    };

    view! {
        <TableHeaderCell min_width=min_width>
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| on_sort.run(sort_field_for_click.clone())
            >
                {label}
                <span class=move || {
                    if is_current() {
                        "table__sort-icon table__sort-icon--active"
                    } else {
                        "table__sort-icon"
                    }
                }>
                    {move || {
                        get_sort_indicator(&current_sort_field.get(), &sort_field, sort_ascending.get())
                    }}
                </span>
            </div>
        </TableHeaderCell>
    }
}
