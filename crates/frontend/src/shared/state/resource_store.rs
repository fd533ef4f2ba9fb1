use super::promo_session::SessionPatch;
use super::reducer::{reducer, Action, StoreState};
use super::request_tracker::{RequestTicket, RequestTracker};
use contracts::shared::endpoints::ResourceKey;
use serde::Serialize;
use serde_json::{Map, Value};

/// JSON body of a dispatcher request; an absent payload is sent as `{}`
pub fn request_body(payload: impl Serialize) -> Result<Value, serde_json::Error> {
    let body = serde_json::to_value(payload)?;
    Ok(if body.is_null() {
        Value::Object(Map::new())
    } else {
        body
    })
}

/// Store state plus the request sequence guard.
///
/// Signal-free so the request lifecycle can be driven synchronously in tests;
/// [`AnalyticsStore`](super::store::AnalyticsStore) wraps it in a signal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceStore {
    pub state: StoreState,
    tracker: RequestTracker,
}

impl ResourceStore {
    pub fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = reducer(state, action);
    }

    /// Marks `key` as loading and issues the ticket its response must carry
    pub fn begin(&mut self, key: ResourceKey) -> RequestTicket {
        self.dispatch(Action::FetchStart { key });
        self.tracker.issue(key)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.tracker.is_current(ticket)
    }

    /// Stores the outcome of a request. Responses of superseded requests are
    /// dropped without touching the state and yield `None`.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<Value, String>,
    ) -> Option<Value> {
        if !self.tracker.is_current(ticket) {
            return None;
        }
        match outcome {
            Ok(payload) => {
                self.dispatch(Action::FetchSuccess {
                    key: ticket.key,
                    payload: payload.clone(),
                });
                Some(payload)
            }
            Err(message) => {
                self.dispatch(Action::FetchError {
                    key: ticket.key,
                    message,
                });
                None
            }
        }
    }

    pub fn set_promo_sim_state(&mut self, patch: SessionPatch) {
        self.dispatch(Action::SetPromoSimState(patch));
    }

    /// Clears the simulation draft and result; a simulation still in flight
    /// can no longer write its result
    pub fn reset_promo_simulation(&mut self) {
        self.tracker.invalidate(ResourceKey::PromoSimulation);
        self.dispatch(Action::ResetPromoSimulation);
    }
}
