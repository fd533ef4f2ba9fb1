use super::promo_session::{PromoSimulationSession, SessionPatch};
use super::resource::ResourceSlice;
use contracts::shared::endpoints::ResourceKey;
use serde_json::Value;

/// Everything the shared store holds: one slice per resource plus the
/// promotion simulation draft
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreState {
    slices: [ResourceSlice; 10],
    pub promo_sim_state: PromoSimulationSession,
}

impl StoreState {
    pub fn slice(&self, key: ResourceKey) -> &ResourceSlice {
        &self.slices[key as usize]
    }

    pub fn slice_mut(&mut self, key: ResourceKey) -> &mut ResourceSlice {
        &mut self.slices[key as usize]
    }
}

/// State transitions of the store
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    FetchStart { key: ResourceKey },
    FetchSuccess { key: ResourceKey, payload: Value },
    FetchError { key: ResourceKey, message: String },
    SetPromoSimState(SessionPatch),
    ResetPromoSimulation,
}

/// Applies one action. Pure: no I/O, no logging.
pub fn reducer(mut state: StoreState, action: Action) -> StoreState {
    match action {
        Action::FetchStart { key } => {
            let slice = state.slice_mut(key);
            // previous data stays visible while refreshing
            slice.loading = true;
            slice.error = None;
            slice.fetched = true;
        }
        Action::FetchSuccess { key, payload } => {
            let slice = state.slice_mut(key);
            slice.data = Some(payload);
            slice.loading = false;
            slice.error = None;
            slice.fetched = true;
        }
        Action::FetchError { key, message } => {
            let slice = state.slice_mut(key);
            slice.data = None;
            slice.loading = false;
            slice.error = Some(message);
            slice.fetched = true;
        }
        Action::SetPromoSimState(patch) => {
            state.promo_sim_state.merge(patch);
        }
        Action::ResetPromoSimulation => {
            *state.slice_mut(ResourceKey::PromoSimulation) = ResourceSlice::default();
            state.promo_sim_state = PromoSimulationSession::default();
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::state::promo_session::SimulationEvent;
    use serde_json::json;

    fn apply(state: StoreState, actions: Vec<Action>) -> StoreState {
        actions.into_iter().fold(state, reducer)
    }

    fn start(key: ResourceKey) -> Action {
        Action::FetchStart { key }
    }

    fn success(key: ResourceKey, payload: Value) -> Action {
        Action::FetchSuccess { key, payload }
    }

    fn failure(key: ResourceKey, message: &str) -> Action {
        Action::FetchError {
            key,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_initial_state_is_empty() {
        let state = StoreState::default();
        for key in ResourceKey::ALL {
            assert_eq!(state.slice(key), &ResourceSlice::default());
        }
        assert_eq!(state.promo_sim_state.num_events, 0);
    }

    #[test]
    fn test_summary_fetch_scenario() {
        let payload = json!({ "kpis": [{ "label": "Revenue", "value": "$1.2M" }] });
        let state = apply(
            StoreState::default(),
            vec![
                start(ResourceKey::Summary),
                success(ResourceKey::Summary, payload.clone()),
            ],
        );

        assert_eq!(
            state.slice(ResourceKey::Summary),
            &ResourceSlice {
                data: Some(payload),
                loading: false,
                error: None,
                fetched: true,
            }
        );
    }

    #[test]
    fn test_last_success_wins() {
        let state = apply(
            StoreState::default(),
            vec![
                start(ResourceKey::Trend),
                success(ResourceKey::Trend, json!(1)),
                start(ResourceKey::Trend),
                failure(ResourceKey::Trend, "boom"),
                start(ResourceKey::Trend),
                success(ResourceKey::Trend, json!(3)),
            ],
        );

        let slice = state.slice(ResourceKey::Trend);
        assert_eq!(slice.data, Some(json!(3)));
        assert!(!slice.loading);
        assert_eq!(slice.error, None);
        assert!(slice.fetched);
    }

    #[test]
    fn test_error_clears_data() {
        let state = apply(
            StoreState::default(),
            vec![
                start(ResourceKey::Options),
                success(ResourceKey::Options, json!({ "categories": [] })),
                start(ResourceKey::Options),
                failure(
                    ResourceKey::Options,
                    "Options request failed: Internal Server Error",
                ),
            ],
        );

        assert_eq!(
            state.slice(ResourceKey::Options),
            &ResourceSlice {
                data: None,
                loading: false,
                error: Some("Options request failed: Internal Server Error".to_string()),
                fetched: true,
            }
        );
    }

    #[test]
    fn test_start_keeps_stale_data() {
        let state = apply(
            StoreState::default(),
            vec![
                start(ResourceKey::Performance),
                success(ResourceKey::Performance, json!({ "metrics": [] })),
                start(ResourceKey::Performance),
            ],
        );

        let slice = state.slice(ResourceKey::Performance);
        assert_eq!(slice.data, Some(json!({ "metrics": [] })));
        assert!(slice.loading);
        assert_eq!(slice.error, None);
    }

    #[test]
    fn test_start_clears_error() {
        let state = apply(
            StoreState::default(),
            vec![
                start(ResourceKey::Contribution),
                failure(ResourceKey::Contribution, "Not Found"),
                start(ResourceKey::Contribution),
            ],
        );
        let slice = state.slice(ResourceKey::Contribution);
        assert_eq!(slice.error, None);
        assert!(slice.loading);
    }

    #[test]
    fn test_slices_are_independent() {
        let state = apply(
            StoreState::default(),
            vec![
                start(ResourceKey::Summary),
                success(ResourceKey::Summary, json!({})),
            ],
        );
        assert_eq!(state.slice(ResourceKey::Trend), &ResourceSlice::default());
        assert_eq!(state.slice(ResourceKey::Options), &ResourceSlice::default());
    }

    #[test]
    fn test_set_promo_sim_state_resizes_events() {
        let state = apply(
            StoreState::default(),
            vec![Action::SetPromoSimState(SessionPatch::num_events(3))],
        );
        assert_eq!(state.promo_sim_state.event_filters.len(), 3);
        assert!(state
            .promo_sim_state
            .event_filters
            .iter()
            .all(|event| *event == SimulationEvent::default()));
    }

    #[test]
    fn test_reset_promo_simulation_is_idempotent() {
        let busy = apply(
            StoreState::default(),
            vec![
                Action::SetPromoSimState(SessionPatch::num_events(2)),
                start(ResourceKey::PromoSimulation),
                success(ResourceKey::PromoSimulation, json!({ "events": [] })),
                start(ResourceKey::PastPromotion),
                success(ResourceKey::PastPromotion, json!({ "metrics": [] })),
            ],
        );

        let once = reducer(busy, Action::ResetPromoSimulation);
        let twice = reducer(once.clone(), Action::ResetPromoSimulation);

        assert_eq!(once, twice);
        assert_eq!(
            once.slice(ResourceKey::PromoSimulation),
            &ResourceSlice::default()
        );
        assert_eq!(once.promo_sim_state, PromoSimulationSession::default());
        // other slices are untouched
        assert_eq!(
            once.slice(ResourceKey::PastPromotion).data,
            Some(json!({ "metrics": [] }))
        );
    }
}
