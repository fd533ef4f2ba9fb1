use contracts::shared::filters::FilterSet;

/// Multi-select fields of a simulated promotional event, named as in the
/// simulation options payload
pub const EVENT_SELECTIONS: [&str; 3] = ["promo_tactics", "offer_type", "offer_mechanic"];

/// Upper bound on events in one simulation, one per week of a year
pub const MAX_EVENTS: usize = 52;

/// Free-text inputs of a simulated promotional event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventInput {
    StartDate,
    Duration,
    Discount,
    RedemptionRate,
}

impl EventInput {
    pub const ALL: [EventInput; 4] = [
        EventInput::StartDate,
        EventInput::Duration,
        EventInput::Discount,
        EventInput::RedemptionRate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EventInput::StartDate => "Start Date",
            EventInput::Duration => "Promo Duration",
            EventInput::Discount => "Discount",
            EventInput::RedemptionRate => "Redemption Rate",
        }
    }

    /// HTML input type used to edit the value
    pub fn input_type(self) -> &'static str {
        match self {
            EventInput::StartDate => "date",
            _ => "number",
        }
    }
}

/// Draft of one promotional event as the user types it.
///
/// Inputs stay raw text until validation turns them into a request payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationEvent {
    pub promo_tactics: Vec<String>,
    pub offer_type: Vec<String>,
    pub offer_mechanic: Vec<String>,
    pub start_date: Option<String>,
    pub duration: Option<String>,
    pub discount: Option<String>,
    pub redemption_rate: Option<String>,
}

impl SimulationEvent {
    pub fn selection(&self, name: &str) -> &[String] {
        match name {
            "promo_tactics" => &self.promo_tactics,
            "offer_type" => &self.offer_type,
            "offer_mechanic" => &self.offer_mechanic,
            _ => &[],
        }
    }

    /// Replaces a multi-select field; unknown names are ignored
    pub fn set_selection(&mut self, name: &str, values: Vec<String>) {
        match name {
            "promo_tactics" => self.promo_tactics = values,
            "offer_type" => self.offer_type = values,
            "offer_mechanic" => self.offer_mechanic = values,
            other => log::warn!("Unknown event selection field: {}", other),
        }
    }

    pub fn input(&self, input: EventInput) -> Option<&str> {
        match input {
            EventInput::StartDate => self.start_date.as_deref(),
            EventInput::Duration => self.duration.as_deref(),
            EventInput::Discount => self.discount.as_deref(),
            EventInput::RedemptionRate => self.redemption_rate.as_deref(),
        }
    }

    /// Stores a text input; blank text clears it
    pub fn set_input(&mut self, input: EventInput, text: String) {
        let value = if text.trim().is_empty() { None } else { Some(text) };
        match input {
            EventInput::StartDate => self.start_date = value,
            EventInput::Duration => self.duration = value,
            EventInput::Discount => self.discount = value,
            EventInput::RedemptionRate => self.redemption_rate = value,
        }
    }
}

/// Working draft of a not yet submitted multi-event promotion simulation.
///
/// Kept in the shared store so it survives switching tabs.
/// `event_filters.len() == num_events` and `num_events <= MAX_EVENTS` hold
/// after every [`merge`](Self::merge).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromoSimulationSession {
    pub num_events: usize,
    pub event_filters: Vec<SimulationEvent>,
    pub global_filters: FilterSet,
}

impl PromoSimulationSession {
    /// Shallow merge of a partial update
    pub fn merge(&mut self, patch: SessionPatch) {
        if let Some(num_events) = patch.num_events {
            if num_events > MAX_EVENTS {
                log::warn!("Event count {} capped at {}", num_events, MAX_EVENTS);
            }
            self.num_events = num_events.min(MAX_EVENTS);
        }
        if let Some(event_filters) = patch.event_filters {
            self.event_filters = event_filters;
        }
        if let Some(global_filters) = patch.global_filters {
            self.global_filters = global_filters;
        }
        // pad with empty events or drop the tail, earlier events untouched
        self.event_filters
            .resize_with(self.num_events, SimulationEvent::default);
    }

    pub fn is_started(&self) -> bool {
        self.num_events > 0
    }

    pub fn event(&self, index: usize) -> Option<&SimulationEvent> {
        self.event_filters.get(index)
    }
}

/// Partial update of a [`PromoSimulationSession`]; `None` fields are kept
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionPatch {
    pub num_events: Option<usize>,
    pub event_filters: Option<Vec<SimulationEvent>>,
    pub global_filters: Option<FilterSet>,
}

impl SessionPatch {
    pub fn num_events(num_events: usize) -> Self {
        Self {
            num_events: Some(num_events),
            ..Self::default()
        }
    }

    pub fn global_filters(filters: FilterSet) -> Self {
        Self {
            global_filters: Some(filters),
            ..Self::default()
        }
    }

    /// Patch replacing one event with an edited copy of it
    pub fn edit_event(
        session: &PromoSimulationSession,
        index: usize,
        edit: impl FnOnce(&mut SimulationEvent),
    ) -> Self {
        let mut events = session.event_filters.clone();
        if let Some(event) = events.get_mut(index) {
            edit(event);
        }
        Self {
            event_filters: Some(events),
            ..Self::default()
        }
    }
}
