use std::fmt;

use serde::{Deserialize, Serialize};

/// The published schedule document (`schedule.json`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EventDocument {
    /// Missing and `null` both mean "nothing scheduled"
    #[serde(default)]
    pub events: Option<Vec<EventRecord>>,
}

impl EventDocument {
    pub fn events(&self) -> &[EventRecord] {
        self.events.as_deref().unwrap_or_default()
    }

    pub fn into_events(self) -> Vec<EventRecord> {
        self.events.unwrap_or_default()
    }
}

/// One scheduled event. Every field except the last two is display text.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub title: String,
    pub status: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    pub capacity: Capacity,
    pub fee: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twipla_url: Option<String>,
}

impl EventRecord {
    /// Description text, if there is any to show
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// TwiPla sign-up link. Not validated: any non-empty string is used as-is.
    pub fn twipla_url(&self) -> Option<&str> {
        self.twipla_url.as_deref().filter(|u| !u.is_empty())
    }

    pub fn badge(&self) -> StatusBadge {
        StatusBadge::lookup(&self.status)
    }
}

/// Capacity is published either as a bare number or as free text ("20名")
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Capacity {
    Count(serde_json::Number),
    Text(String),
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::Count(n) => write!(f, "{}", n),
            Capacity::Text(t) => write!(f, "{}", t),
        }
    }
}

impl From<&str> for Capacity {
    fn from(value: &str) -> Self {
        Capacity::Text(value.to_string())
    }
}

impl From<u64> for Capacity {
    fn from(value: u64) -> Self {
        Capacity::Count(value.into())
    }
}

/// Badge colour for an event status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    Recruiting,
    Planned,
    Full,
    Finished,
    Unknown,
}

impl StatusBadge {
    /// Total over every input string. Accepts the English keys and the
    /// Japanese labels the organizer publishes.
    pub fn lookup(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "recruiting" | "募集中" => StatusBadge::Recruiting,
            "planned" | "募集予定" => StatusBadge::Planned,
            "full" | "満席" => StatusBadge::Full,
            "finished" | "開催済み" => StatusBadge::Finished,
            _ => StatusBadge::Unknown,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            StatusBadge::Recruiting => "bg-green-100 text-green-700",
            StatusBadge::Planned => "bg-blue-100 text-blue-700",
            StatusBadge::Full => "bg-red-100 text-red-700",
            StatusBadge::Finished | StatusBadge::Unknown => "bg-gray-100 text-gray-700",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_record() {
        let json = r#"{
            "title": "Board game night",
            "status": "募集中",
            "date": "2025/11/08 (土)",
            "time": "13:00-18:00",
            "venue": "Matsudo community hall",
            "capacity": 20,
            "fee": "500円",
            "description": "Beginners welcome",
            "twiplaUrl": "https://twipla.jp/events/123"
        }"#;

        let record: EventRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.title, "Board game night");
        assert_eq!(record.capacity.to_string(), "20");
        assert_eq!(record.description(), Some("Beginners welcome"));
        assert_eq!(record.twipla_url(), Some("https://twipla.jp/events/123"));
        assert_eq!(record.badge(), StatusBadge::Recruiting);
    }

    #[test]
    fn optional_fields_may_be_missing_or_empty() {
        let json = r#"{
            "title": "t", "status": "planned", "date": "d", "time": "t",
            "venue": "v", "capacity": "12名", "fee": "無料",
            "description": "", "twiplaUrl": ""
        }"#;

        let record: EventRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.capacity, Capacity::Text("12名".to_string()));
        assert_eq!(record.description(), None);
        assert_eq!(record.twipla_url(), None);
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let json = r#"{ "title": "no status" }"#;
        assert!(serde_json::from_str::<EventRecord>(json).is_err());
    }

    #[test]
    fn document_without_events_is_empty() {
        let missing: EventDocument = serde_json::from_str("{}").unwrap();
        let null: EventDocument = serde_json::from_str(r#"{"events": null}"#).unwrap();
        let empty: EventDocument = serde_json::from_str(r#"{"events": []}"#).unwrap();

        assert!(missing.events().is_empty());
        assert!(null.events().is_empty());
        assert!(empty.events().is_empty());
    }

    #[test]
    fn events_must_be_an_array() {
        assert!(serde_json::from_str::<EventDocument>(r#"{"events": "soon"}"#).is_err());
    }

    #[test]
    fn known_statuses_map_to_their_colours() {
        assert_eq!(StatusBadge::lookup("recruiting"), StatusBadge::Recruiting);
        assert_eq!(StatusBadge::lookup("募集予定"), StatusBadge::Planned);
        assert_eq!(StatusBadge::lookup("Full"), StatusBadge::Full);
        assert_eq!(StatusBadge::lookup(" 開催済み "), StatusBadge::Finished);
        assert_eq!(StatusBadge::Full.class(), "bg-red-100 text-red-700");
    }

    #[test]
    fn unknown_statuses_fall_back_to_neutral() {
        for status in ["", "cancelled", "🎲", "recruiting!", "中止"] {
            let badge = StatusBadge::lookup(status);
            assert_eq!(badge, StatusBadge::Unknown);
            assert_eq!(badge.class(), "bg-gray-100 text-gray-700");
        }
    }
}
