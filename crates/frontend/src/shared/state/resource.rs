use serde::de::DeserializeOwned;
use serde_json::Value;

/// Request state of one logical resource (`summary`, `trend`, ...)
///
/// `data` is the last successful payload, kept while a refresh is in flight.
/// `fetched` turns true with the first request and only goes back to false on
/// an explicit reset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceSlice {
    pub data: Option<Value>,
    pub loading: bool,
    pub error: Option<String>,
    pub fetched: bool,
}

impl ResourceSlice {
    /// Typed view of the payload; `None` when absent or of another shape
    pub fn decode<T: DeserializeOwned>(&self) -> Option<T> {
        let data = self.data.as_ref()?;
        match serde_json::from_value(data.clone()) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                log::warn!("Unexpected payload shape: {}", e);
                None
            }
        }
    }

    /// True until the first request for this resource has been started
    pub fn needs_initial_fetch(&self) -> bool {
        !self.fetched && !self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Cards {
        kpis: Vec<String>,
    }

    #[test]
    fn test_decode_payload() {
        let slice = ResourceSlice {
            data: Some(json!({ "kpis": ["Revenue"] })),
            ..ResourceSlice::default()
        };
        let cards: Cards = slice.decode().unwrap();
        assert_eq!(cards.kpis, vec!["Revenue"]);
    }

    #[test]
    fn test_decode_mismatch_is_none() {
        let slice = ResourceSlice {
            data: Some(json!([1, 2, 3])),
            ..ResourceSlice::default()
        };
        assert!(slice.decode::<Cards>().is_none());
        assert!(ResourceSlice::default().decode::<Cards>().is_none());
    }

    #[test]
    fn test_needs_initial_fetch() {
        assert!(ResourceSlice::default().needs_initial_fetch());

        let loading = ResourceSlice {
            loading: true,
            ..ResourceSlice::default()
        };
        assert!(!loading.needs_initial_fetch());

        let fetched = ResourceSlice {
            fetched: true,
            ..ResourceSlice::default()
        };
        assert!(!fetched.needs_initial_fetch());
    }
}
