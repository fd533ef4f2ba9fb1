use super::promo_session::{PromoSimulationSession, SessionPatch, SimulationEvent};
use super::resource::ResourceSlice;
use super::resource_store::{request_body, ResourceStore};
use crate::shared::api_utils::api_url;
use crate::shared::http::post_json;
use contracts::dashboards::d500_smart_pricing::{OptionsTab, SimulationRequest, TrendRequest};
use contracts::dashboards::d501_optimal_promotion::{PromoSimulationRequest, PromotionTab};
use contracts::shared::endpoints::{Endpoint, ResourceKey};
use leptos::prelude::*;
use serde::Serialize;
use serde_json::{Map, Value};

/// Shared request state of both analytics tools.
///
/// Created once in `App` and handed to the pages as a prop. Every dispatcher
/// resolves to the response body, or `None` when the request failed or was
/// superseded by a newer one for the same resource; failures only surface
/// through the slice's `error`.
#[derive(Clone, Copy)]
pub struct AnalyticsStore {
    inner: RwSignal<ResourceStore>,
}

impl AnalyticsStore {
    pub fn new() -> Self {
        Self {
            inner: RwSignal::new(ResourceStore::default()),
        }
    }

    pub fn slice(&self, key: ResourceKey) -> Signal<ResourceSlice> {
        let inner = self.inner;
        Memo::new(move |_| inner.with(|store| store.state.slice(key).clone())).into()
    }

    pub fn slice_untracked(&self, key: ResourceKey) -> ResourceSlice {
        self.inner
            .with_untracked(|store| store.state.slice(key).clone())
    }

    pub fn promo_session(&self) -> Signal<PromoSimulationSession> {
        let inner = self.inner;
        Memo::new(move |_| inner.with(|store| store.state.promo_sim_state.clone())).into()
    }

    // ------------------------------------------------------------------
    // Smart pricing
    // ------------------------------------------------------------------

    pub async fn fetch_options(&self, filters: Map<String, Value>, tab: OptionsTab) -> Option<Value> {
        self.request(Endpoint::PricingOptions(tab), filters).await
    }

    pub async fn fetch_summary(&self, filters: Map<String, Value>) -> Option<Value> {
        self.request(Endpoint::Summary, filters).await
    }

    pub async fn run_simulation(&self, request: SimulationRequest) -> Option<Value> {
        self.request(Endpoint::PricingSimulation, request).await
    }

    pub async fn fetch_trend(&self, request: TrendRequest) -> Option<Value> {
        self.request(Endpoint::Trend, request).await
    }

    pub async fn fetch_trend_options(&self, filters: Map<String, Value>) -> Option<Value> {
        self.request(Endpoint::TrendOptions, filters).await
    }

    pub async fn get_contribution(&self, filters: Map<String, Value>) -> Option<Value> {
        self.request(Endpoint::Contribution, filters).await
    }

    // ------------------------------------------------------------------
    // Optimal promotion
    // ------------------------------------------------------------------

    pub async fn fetch_promo_options(
        &self,
        filters: Map<String, Value>,
        tab: PromotionTab,
    ) -> Option<Value> {
        self.request(Endpoint::PromoOptions(tab), filters).await
    }

    pub async fn fetch_performance(&self, filters: Map<String, Value>) -> Option<Value> {
        self.request(Endpoint::Performance, filters).await
    }

    pub async fn fetch_past_promotion(&self, filters: Map<String, Value>) -> Option<Value> {
        self.request(Endpoint::PastPromotion, filters).await
    }

    pub async fn run_promotion_simulation(&self, request: PromoSimulationRequest) -> Option<Value> {
        self.request(Endpoint::PromoSimulation, request).await
    }

    pub fn set_promo_simulation_state(&self, patch: SessionPatch) {
        self.inner.update(|store| store.set_promo_sim_state(patch));
    }

    pub fn reset_promotion_simulation(&self) {
        log::debug!("Promotion simulation reset");
        self.inner.update(|store| store.reset_promo_simulation());
    }

    /// Edits one event of the simulation draft in place
    pub fn update_promo_event(&self, index: usize, edit: impl FnOnce(&mut SimulationEvent)) {
        self.inner.update(|store| {
            let patch = SessionPatch::edit_event(&store.state.promo_sim_state, index, edit);
            store.set_promo_sim_state(patch);
        });
    }

    async fn request(&self, endpoint: Endpoint, payload: impl Serialize) -> Option<Value> {
        let key = endpoint.resource();
        let ticket = self.inner.try_update(|store| store.begin(key))?;
        log::debug!("{} -> {}", key.as_str(), endpoint.path());

        let outcome = match request_body(payload) {
            Ok(body) => {
                post_json(&api_url(endpoint.path()), &body, key.label())
                    .await
                    .map_err(|e| {
                        log::warn!("{} failed: {}", key.as_str(), e);
                        e.to_string()
                    })
            }
            Err(e) => {
                log::error!("{} payload could not be encoded: {}", key.as_str(), e);
                Err(e.to_string())
            }
        };

        let current = self
            .inner
            .try_with_untracked(|store| store.is_current(ticket))
            .unwrap_or(false);
        if !current {
            log::debug!("{} response #{} superseded, dropped", key.as_str(), ticket.seq);
            return None;
        }
        self.inner
            .try_update(|store| store.complete(ticket, outcome))
            .flatten()
    }
}

impl Default for AnalyticsStore {
    fn default() -> Self {
        Self::new()
    }
}
