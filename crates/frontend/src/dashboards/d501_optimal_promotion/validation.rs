//! Pre-submit checks of the promotion simulation draft

use crate::shared::state::promo_session::SimulationEvent;
use chrono::NaiveDate;
use contracts::dashboards::d501_optimal_promotion::EventFilterPayload;
use thiserror::Error;

pub const MAX_DISCOUNT: f64 = 50.0;
pub const MAX_REDEMPTION_RATE: f64 = 100.0;

/// First problem found in the draft. `event` is 0-based, messages count
/// events from 1.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EventValidationError {
    #[error("Event {}: START DATE cannot be empty", .event + 1)]
    MissingStartDate { event: usize },
    #[error("Event {}: DURATION cannot be empty", .event + 1)]
    MissingDuration { event: usize },
    #[error("Event {}: START DATE must be a date (YYYY-MM-DD)", .event + 1)]
    InvalidStartDate { event: usize },
    #[error("Event {}: DURATION must be a whole number of weeks", .event + 1)]
    InvalidDuration { event: usize },
    #[error("Event {}: Discount must be a valid number", .event + 1)]
    DiscountNotNumber { event: usize },
    #[error("Event {}: Discount cannot be negative", .event + 1)]
    DiscountNegative { event: usize },
    #[error("Event {}: Discount cannot exceed 50%", .event + 1)]
    DiscountTooHigh { event: usize },
    #[error("Event {}: Redemption Rate must be a valid number", .event + 1)]
    RedemptionRateNotNumber { event: usize },
    #[error("Event {}: Redemption Rate must be between 0 and 100", .event + 1)]
    RedemptionRateOutOfRange { event: usize },
}

impl EventValidationError {
    /// Event the user should be sent to
    pub fn event(&self) -> usize {
        match self {
            Self::MissingStartDate { event }
            | Self::MissingDuration { event }
            | Self::InvalidStartDate { event }
            | Self::InvalidDuration { event }
            | Self::DiscountNotNumber { event }
            | Self::DiscountNegative { event }
            | Self::DiscountTooHigh { event }
            | Self::RedemptionRateNotNumber { event }
            | Self::RedemptionRateOutOfRange { event } => *event,
        }
    }
}

/// Checks events in order and stops at the first violation. On success
/// returns the wire form of every event.
pub fn validate_events(
    events: &[SimulationEvent],
) -> Result<Vec<EventFilterPayload>, EventValidationError> {
    events
        .iter()
        .enumerate()
        .map(|(index, event)| validate_event(index, event))
        .collect()
}

fn validate_event(
    event: usize,
    draft: &SimulationEvent,
) -> Result<EventFilterPayload, EventValidationError> {
    let start_date = present(&draft.start_date)
        .ok_or(EventValidationError::MissingStartDate { event })?;
    let duration =
        present(&draft.duration).ok_or(EventValidationError::MissingDuration { event })?;

    let discount = match present(&draft.discount) {
        None => None,
        Some(text) => {
            let value = parse_number(text)
                .ok_or(EventValidationError::DiscountNotNumber { event })?;
            if value < 0.0 {
                return Err(EventValidationError::DiscountNegative { event });
            }
            if value > MAX_DISCOUNT {
                return Err(EventValidationError::DiscountTooHigh { event });
            }
            Some(value)
        }
    };

    let redemption_rate = match present(&draft.redemption_rate) {
        None => None,
        Some(text) => {
            let value = parse_number(text)
                .ok_or(EventValidationError::RedemptionRateNotNumber { event })?;
            if !(0.0..=MAX_REDEMPTION_RATE).contains(&value) {
                return Err(EventValidationError::RedemptionRateOutOfRange { event });
            }
            Some(value)
        }
    };

    let start_date = NaiveDate::parse_from_str(start_date, "%Y-%m-%d")
        .map_err(|_| EventValidationError::InvalidStartDate { event })?;
    let duration = parse_weeks(duration).ok_or(EventValidationError::InvalidDuration { event })?;

    Ok(EventFilterPayload {
        promo_tactic: selection(&draft.promo_tactics),
        offer_type: selection(&draft.offer_type),
        offer_mechanic: selection(&draft.offer_mechanic),
        start_date,
        duration,
        discount,
        redemption_rate,
    })
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Positive whole number; "4" and "4.0" are both accepted
fn parse_weeks(text: &str) -> Option<u32> {
    let value = parse_number(text)?;
    if value >= 1.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Some(value as u32)
    } else {
        None
    }
}

fn selection(values: &[String]) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(discount: Option<&str>, redemption_rate: Option<&str>) -> SimulationEvent {
        SimulationEvent {
            start_date: Some("2024-03-04".to_string()),
            duration: Some("4".to_string()),
            discount: discount.map(str::to_string),
            redemption_rate: redemption_rate.map(str::to_string),
            ..SimulationEvent::default()
        }
    }

    #[test]
    fn test_discount_bounds() {
        assert!(validate_events(&[event(Some("50"), None)]).is_ok());
        assert!(validate_events(&[event(Some("0"), None)]).is_ok());
        assert_eq!(
            validate_events(&[event(Some("51"), None)]),
            Err(EventValidationError::DiscountTooHigh { event: 0 })
        );
        assert_eq!(
            validate_events(&[event(Some("-1"), None)]),
            Err(EventValidationError::DiscountNegative { event: 0 })
        );
    }

    #[test]
    fn test_redemption_rate_bounds() {
        assert!(validate_events(&[event(None, Some("0"))]).is_ok());
        assert!(validate_events(&[event(None, Some("100"))]).is_ok());
        assert_eq!(
            validate_events(&[event(None, Some("-1"))]),
            Err(EventValidationError::RedemptionRateOutOfRange { event: 0 })
        );
        assert_eq!(
            validate_events(&[event(None, Some("100.5"))]),
            Err(EventValidationError::RedemptionRateOutOfRange { event: 0 })
        );
    }

    #[test]
    fn test_not_a_number() {
        assert_eq!(
            validate_events(&[event(Some("ten"), None)]),
            Err(EventValidationError::DiscountNotNumber { event: 0 })
        );
        assert_eq!(
            validate_events(&[event(None, Some("NaN"))]),
            Err(EventValidationError::RedemptionRateNotNumber { event: 0 })
        );
    }

    #[test]
    fn test_required_fields_and_messages() {
        let mut missing_date = event(None, None);
        missing_date.start_date = None;
        let mut missing_duration = event(None, None);
        missing_duration.duration = Some("   ".to_string());

        let error = validate_events(&[event(None, None), missing_date]).unwrap_err();
        assert_eq!(error, EventValidationError::MissingStartDate { event: 1 });
        assert_eq!(error.to_string(), "Event 2: START DATE cannot be empty");
        assert_eq!(error.event(), 1);

        let error = validate_events(&[missing_duration]).unwrap_err();
        assert_eq!(error.to_string(), "Event 1: DURATION cannot be empty");
    }

    #[test]
    fn test_stops_at_first_violation() {
        let events = [
            event(Some("70"), None),
            event(None, Some("-5")),
        ];
        assert_eq!(
            validate_events(&events),
            Err(EventValidationError::DiscountTooHigh { event: 0 })
        );
    }

    #[test]
    fn test_typed_fields() {
        let mut bad_date = event(None, None);
        bad_date.start_date = Some("04/03/2024".to_string());
        assert_eq!(
            validate_events(&[bad_date]),
            Err(EventValidationError::InvalidStartDate { event: 0 })
        );

        let mut bad_duration = event(None, None);
        bad_duration.duration = Some("2.5".to_string());
        assert_eq!(
            validate_events(&[bad_duration]),
            Err(EventValidationError::InvalidDuration { event: 0 })
        );

        let mut zero_duration = event(None, None);
        zero_duration.duration = Some("0".to_string());
        assert!(validate_events(&[zero_duration]).is_err());
    }

    #[test]
    fn test_valid_event_payload() {
        let mut draft = event(Some("15"), Some("80"));
        draft.promo_tactics = vec!["Display".to_string()];

        let payload = validate_events(&[draft]).unwrap();

        assert_eq!(
            payload,
            vec![EventFilterPayload {
                promo_tactic: Some(vec!["Display".to_string()]),
                offer_type: None,
                offer_mechanic: None,
                start_date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
                duration: 4,
                discount: Some(15.0),
                redemption_rate: Some(80.0),
            }]
        );
    }

    #[test]
    fn test_empty_draft_is_valid() {
        assert_eq!(validate_events(&[]), Ok(vec![]));
    }
}
