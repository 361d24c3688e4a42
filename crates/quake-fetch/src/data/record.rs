use serde::{Deserialize, Serialize};

/// One seismic event as reported by the upstream feed.
///
/// Fields are copied verbatim from the feature's `properties` object; no
/// validation happens here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    magnitude:   Option<f64>,
    location:    String,
    time_millis: i64,
    detail_url:  String,
}

impl Record {
    pub fn new(
        magnitude: Option<f64>,
        location: impl Into<String>,
        time_millis: i64,
        detail_url: impl Into<String>,
    ) -> Self {
        Self {
            magnitude,
            location: location.into(),
            time_millis,
            detail_url: detail_url.into(),
        }
    }

    pub fn magnitude(&self) -> Option<f64> { self.magnitude }

    /// Human-readable place description, e.g. `"10km SSE of Example"`.
    pub fn location(&self) -> &str { &self.location }

    /// Event time in milliseconds since the Unix epoch, UTC.
    pub fn time_millis(&self) -> i64 { self.time_millis }

    /// Link to the event's detail page.
    pub fn detail_url(&self) -> &str { &self.detail_url }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_constructed_values() {
        let record = Record::new(
            Some(6.7),
            "10km SSE of Example",
            1_609_459_200_000,
            "https://example.com/event/1",
        );

        assert_eq!(record.magnitude(), Some(6.7));
        assert_eq!(record.location(), "10km SSE of Example");
        assert_eq!(record.time_millis(), 1_609_459_200_000);
        assert_eq!(record.detail_url(), "https://example.com/event/1");
    }

    #[test]
    fn absent_magnitude_is_kept() {
        let record = Record::new(None, "Somewhere", 0, "");
        assert_eq!(record.magnitude(), None);
        assert_eq!(record.detail_url(), "");
    }

    #[test]
    fn records_compare_by_value() {
        let a = Record::new(Some(4.5), "Offshore", 42, "https://example.com/e");
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, Record::new(Some(4.6), "Offshore", 42, "https://example.com/e"));
    }

    #[test]
    fn serializes_with_field_names() {
        let record = Record::new(Some(5.0), "Ridge", 7, "https://example.com/r");
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "magnitude": 5.0,
                "location": "Ridge",
                "time_millis": 7,
                "detail_url": "https://example.com/r",
            })
        );
    }
}
