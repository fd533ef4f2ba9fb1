//! What-if inputs of the price simulation and their baseline

use contracts::dashboards::d500_smart_pricing::{SimulationRequest, SimulationResponse};
use serde_json::{Map, Value};

/// Baseline values returned with every simulation run
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Baseline {
    pub price: f64,
    pub comp_price: f64,
    pub distribution: f64,
}

impl Baseline {
    pub fn from_response(response: &SimulationResponse) -> Self {
        Self {
            price: response.base_price(),
            comp_price: response.base_comp_price(),
            distribution: response.base_distribution(),
        }
    }
}

/// Raw text of the simulation form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationInputs {
    pub price_change_pct: String,
    pub new_price: String,
    pub comp_change_pct: String,
    pub new_comp_price: String,
    pub new_distribution: String,
}

impl SimulationInputs {
    /// Form reset to the baseline: no change, prices and distribution at base
    pub fn at_baseline(base: Baseline) -> Self {
        Self {
            price_change_pct: "0".to_string(),
            new_price: format!("{:.2}", base.price),
            comp_change_pct: "0".to_string(),
            new_comp_price: format!("{:.2}", base.comp_price),
            new_distribution: format!("{:.0}", base.distribution),
        }
    }

    /// Edits the price change and derives the new price from it
    pub fn set_price_change(&mut self, text: String, base: f64) {
        if let Some(pct) = parse(&text) {
            self.new_price = format!("{:.2}", price_from_pct(base, pct));
        }
        self.price_change_pct = text;
    }

    /// Edits the new price and derives the change from it
    pub fn set_new_price(&mut self, text: String, base: f64) {
        if let Some(pct) = parse(&text).and_then(|price| pct_from_price(base, price)) {
            self.price_change_pct = format!("{:.2}", pct);
        }
        self.new_price = text;
    }

    pub fn set_comp_change(&mut self, text: String, base: f64) {
        if let Some(pct) = parse(&text) {
            self.new_comp_price = format!("{:.2}", price_from_pct(base, pct));
        }
        self.comp_change_pct = text;
    }

    pub fn set_new_comp_price(&mut self, text: String, base: f64) {
        if let Some(pct) = parse(&text).and_then(|price| pct_from_price(base, price)) {
            self.comp_change_pct = format!("{:.2}", pct);
        }
        self.new_comp_price = text;
    }

    /// Request body of a what-if run. Prices count as manual overrides only
    /// when positive, distribution when not negative.
    pub fn to_request(&self, filters: Map<String, Value>) -> SimulationRequest {
        SimulationRequest {
            filters,
            price_change_pct: parse(&self.price_change_pct).unwrap_or(0.0),
            new_price: parse(&self.new_price).filter(|p| *p > 0.0),
            competitor_price_change_pct: parse(&self.comp_change_pct).unwrap_or(0.0),
            new_competitor_price: parse(&self.new_comp_price).filter(|p| *p > 0.0),
            new_distribution: parse(&self.new_distribution).filter(|d| *d >= 0.0),
        }
    }
}

pub fn price_from_pct(base: f64, pct: f64) -> f64 {
    base * (1.0 + pct / 100.0)
}

/// Change in percent that turns `base` into `price`; undefined for a zero base
pub fn pct_from_price(base: f64, price: f64) -> Option<f64> {
    if base == 0.0 {
        None
    } else {
        Some((price - base) / base * 100.0)
    }
}

fn parse(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const BASE: Baseline = Baseline {
        price: 4.0,
        comp_price: 5.0,
        distribution: 80.0,
    };

    #[test]
    fn test_at_baseline() {
        let inputs = SimulationInputs::at_baseline(BASE);
        assert_eq!(inputs.price_change_pct, "0");
        assert_eq!(inputs.new_price, "4.00");
        assert_eq!(inputs.new_comp_price, "5.00");
        assert_eq!(inputs.new_distribution, "80");
    }

    #[test]
    fn test_price_change_updates_new_price() {
        let mut inputs = SimulationInputs::at_baseline(BASE);
        inputs.set_price_change("10".to_string(), BASE.price);
        assert_eq!(inputs.new_price, "4.40");

        inputs.set_new_price("3.00".to_string(), BASE.price);
        assert_eq!(inputs.price_change_pct, "-25.00");
    }

    #[test]
    fn test_zero_base_keeps_change() {
        let mut inputs = SimulationInputs::default();
        inputs.set_new_comp_price("3".to_string(), 0.0);
        assert_eq!(inputs.comp_change_pct, "");
        assert_eq!(inputs.new_comp_price, "3");
        assert_eq!(pct_from_price(0.0, 3.0), None);
    }

    #[test]
    fn test_unparsable_text_is_kept() {
        let mut inputs = SimulationInputs::at_baseline(BASE);
        inputs.set_price_change("-".to_string(), BASE.price);
        assert_eq!(inputs.price_change_pct, "-");
        assert_eq!(inputs.new_price, "4.00");
    }

    #[test]
    fn test_to_request_overrides() {
        let inputs = SimulationInputs {
            price_change_pct: "5".to_string(),
            new_price: "0".to_string(),
            comp_change_pct: "".to_string(),
            new_comp_price: "6.5".to_string(),
            new_distribution: "0".to_string(),
        };
        let filters = json!({ "categories": ["SurfaceCare"] }).as_object().cloned().unwrap();

        let request = inputs.to_request(filters.clone());

        assert_eq!(request.filters, filters);
        assert_eq!(request.price_change_pct, 5.0);
        assert_eq!(request.new_price, None);
        assert_eq!(request.competitor_price_change_pct, 0.0);
        assert_eq!(request.new_competitor_price, Some(6.5));
        assert_eq!(request.new_distribution, Some(0.0));
    }

    #[test]
    fn test_baseline_from_response() {
        let response: SimulationResponse = serde_json::from_value(json!({
            "context": { "base_price": 4.0, "base_comp_price": 5.0, "base_distribution": 80.0 }
        }))
        .unwrap();
        assert_eq!(Baseline::from_response(&response), BASE);
    }
}
