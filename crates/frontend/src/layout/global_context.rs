use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use uuid::Uuid;
use web_sys::window;

/// How long a transient alert stays on screen
pub const ALERT_TIMEOUT_MS: u32 = 3_500;

/// Top-level pages of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPage {
    #[default]
    Home,
    Pricing,
    Promotion,
    Glossary,
}

impl AppPage {
    pub const ALL: [AppPage; 4] = [
        AppPage::Home,
        AppPage::Pricing,
        AppPage::Promotion,
        AppPage::Glossary,
    ];

    /// Value of the `?active=` query parameter
    pub fn key(self) -> &'static str {
        match self {
            AppPage::Home => "home",
            AppPage::Pricing => "pricing",
            AppPage::Promotion => "promotion",
            AppPage::Glossary => "glossary",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.key() == key)
    }

    pub fn title(self) -> &'static str {
        match self {
            AppPage::Home => "Home",
            AppPage::Pricing => "Smart Pricing",
            AppPage::Promotion => "Optimal Promotion",
            AppPage::Glossary => "Glossary",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            AppPage::Home => "home",
            AppPage::Pricing => "pricing",
            AppPage::Promotion => "promotion",
            AppPage::Glossary => "book",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Success,
    Danger,
}

impl AlertKind {
    pub fn class(self) -> &'static str {
        match self {
            AlertKind::Info => "alert alert--info",
            AlertKind::Success => "alert alert--success",
            AlertKind::Danger => "alert alert--danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub id: Uuid,
    pub message: String,
    pub kind: AlertKind,
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<AppPage>,
    pub left_open: RwSignal<bool>,
    pub alerts: RwSignal<Vec<Alert>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(AppPage::Home),
            left_open: RwSignal::new(true),
            alerts: RwSignal::new(vec![]),
        }
    }

    /// Restores the page from `?active=` and keeps the query in sync with it
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(page) = page_from_query(&search) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = query_for(this.active.get());
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, page: AppPage) {
        log::debug!("navigate: {}", page.key());
        self.active.set(page);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    /// Shows a transient alert that dismisses itself after [`ALERT_TIMEOUT_MS`]
    pub fn show_alert(&self, message: impl Into<String>, kind: AlertKind) {
        let alert = Alert {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
        };
        let id = alert.id;
        self.alerts.update(|alerts| alerts.push(alert));

        let this = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(ALERT_TIMEOUT_MS).await;
            this.dismiss_alert(id);
        });
    }

    pub fn dismiss_alert(&self, id: Uuid) {
        // The owner may be gone when a timer fires after unmount
        let _ = self.alerts.try_update(|alerts| alerts.retain(|a| a.id != id));
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn page_from_query(search: &str) -> Option<AppPage> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").and_then(|key| AppPage::from_key(key))
}

pub fn query_for(page: AppPage) -> String {
    let query_string = serde_qs::to_string(&HashMap::from([(
        "active".to_string(),
        page.key().to_string(),
    )]))
    .unwrap_or_default();
    format!("?{}", query_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_query() {
        assert_eq!(page_from_query("?active=pricing"), Some(AppPage::Pricing));
        assert_eq!(page_from_query("active=glossary"), Some(AppPage::Glossary));
        assert_eq!(page_from_query("?active=unknown"), None);
        assert_eq!(page_from_query(""), None);
    }

    #[test]
    fn test_query_round_trip() {
        for page in AppPage::ALL {
            assert_eq!(page_from_query(&query_for(page)), Some(page));
        }
        assert_eq!(query_for(AppPage::Promotion), "?active=promotion");
    }
}
