use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use yew::{Html, ToHtml, html};

/// RFC 3339 timestamp as the backend serializes it, renderable in views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp(pub DateTime<Utc>);

impl ToHtml for Timestamp {
    fn to_html(&self) -> Html {
        html! { self.0.format("%Y-%m-%d %H:%M:%S").to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_timestamp_formatting() {
        let dt = Utc.with_ymd_and_hms(2025, 6, 1, 9, 15, 0).unwrap();
        let timestamp = Timestamp(dt);

        assert_eq!(timestamp.to_html(), html! { "2025-06-01 09:15:00" });
    }

    #[test]
    fn test_timestamp_serialization() {
        let dt = Utc.with_ymd_and_hms(2025, 6, 1, 9, 15, 0).unwrap();
        let serialized = serde_json::to_string(&Timestamp(dt)).unwrap();

        assert_eq!(serialized, "\"2025-06-01T09:15:00Z\"");
    }

    #[test]
    fn test_timestamp_deserialization() {
        let deserialized: Timestamp = serde_json::from_str("\"2025-06-01T09:15:00Z\"").unwrap();

        let expected = Utc.with_ymd_and_hms(2025, 6, 1, 9, 15, 0).unwrap();
        assert_eq!(deserialized.0, expected);
    }

    #[test]
    fn test_timestamp_ordering_via_inner() {
        let earlier = Timestamp(Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap());
        let later = Timestamp(Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap());

        assert!(earlier.0 < later.0);
        assert_ne!(earlier, later);
    }
}
