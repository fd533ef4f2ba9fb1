//! CardAnimated — обёртка над Thaw Card с анимацией появления и заголовком панели.
//!
//! Анимация определена в `layout.css` (`@keyframes card-appear`).
//!
//! # Пример
//! ```rust,ignore
//! <CardAnimated title="Revenue by Manufacturer" delay_ms=80>
//!     <DataTable table=table />
//! </CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Обёртка над Thaw [`Card`] с анимацией `card-appear` из `layout.css`.
///
/// # Props
/// - `title`    — заголовок панели (необязательный).
/// - `delay_ms` — задержка анимации в мс, для stagger-эффекта.
/// - `style`    — дополнительные inline-стили.
/// - `children` — содержимое карточки.
#[component]
pub fn CardAnimated(
    /// Заголовок панели
    #[prop(optional, into)]
    title: MaybeProp<String>,
    /// Задержка анимации в миллисекундах (для stagger-эффекта).
    #[prop(optional)]
    delay_ms: u32,
    /// Дополнительные inline-стили (добавляются после стилей анимации).
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let full_style = format!(
        "animation: card-appear 0.28s ease-out {}ms both; {}",
        delay_ms, style
    );

    view! {
        <Card class="panel-card" attr:style=full_style>
            {move || title.get().map(|t| view! { <h6 class="panel-card__title">{t}</h6> })}
            {children()}
        </Card>
    }
}
