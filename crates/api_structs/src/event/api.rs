use crate::dtos::{CommunityEventDTO, EventInstanceDTO};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use veillee_domain::{
    date, CommunityEvent, EventInstance, RecurrencePattern, RecurrenceRule, ID,
};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityEventResponse {
    pub event: CommunityEventDTO,
}

impl CommunityEventResponse {
    pub fn new(event: CommunityEvent) -> Self {
        Self {
            event: CommunityEventDTO::new(event),
        }
    }
}

pub mod list_event_instances {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub start: DateTime<Utc>,
        pub end: DateTime<Utc>,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub instances: Vec<EventInstanceDTO>,
    }

    impl APIResponse {
        pub fn new(instances: Vec<EventInstance>) -> Self {
            Self {
                instances: instances.into_iter().map(EventInstanceDTO::new).collect(),
            }
        }
    }
}

pub mod get_event_instances {
    use super::*;

    #[derive(Serialize, Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub start: DateTime<Utc>,
        pub end: DateTime<Utc>,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub event: CommunityEventDTO,
        pub instances: Vec<EventInstanceDTO>,
    }

    impl APIResponse {
        pub fn new(event: CommunityEvent, instances: Vec<EventInstance>) -> Self {
            Self {
                event: CommunityEventDTO::new(event),
                instances: instances.into_iter().map(EventInstanceDTO::new).collect(),
            }
        }
    }
}

pub mod create_event {
    use super::*;

    /// Event submission as the web form posts it: recurrence fields flat and
    /// calendar dates as user-entered strings.
    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub title: String,
        pub description: Option<String>,
        pub location: Option<String>,
        pub category: Option<String>,
        pub timezone: Tz,
        pub starts_at: DateTime<Utc>,
        pub ends_at: Option<DateTime<Utc>>,
        pub recurrence_pattern: Option<RecurrencePattern>,
        pub recurrence_end_date: Option<String>,
        pub excluded_dates: Option<Vec<String>>,
    }

    impl RequestBody {
        pub fn into_event(self) -> anyhow::Result<CommunityEvent> {
            let mut event = CommunityEvent::new(&self.title, self.starts_at, self.timezone);
            event.description = self.description.unwrap_or_default();
            event.location = self.location;
            event.category = self.category;
            event.ends_at = self.ends_at;
            // An end date without a pattern does not make the event recur.
            event.recurrence = match self.recurrence_pattern {
                Some(pattern) => Some(RecurrenceRule {
                    pattern,
                    end_date: self
                        .recurrence_end_date
                        .as_deref()
                        .map(date::parse_date)
                        .transpose()?,
                }),
                None => None,
            };
            event.excluded_dates = self
                .excluded_dates
                .unwrap_or_default()
                .iter()
                .map(|datestr| date::parse_date(datestr))
                .collect::<anyhow::Result<_>>()?;
            Ok(event)
        }
    }

    pub type APIResponse = CommunityEventResponse;
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn create_event_body_builds_a_recurring_domain_event() {
        let body: create_event::RequestBody = serde_json::from_value(serde_json::json!({
            "title": "Atelier de tissage",
            "timezone": "America/New_York",
            "startsAt": "2025-06-02T18:00:00Z",
            "recurrencePattern": "weekly",
            "recurrenceEndDate": "2025-8-31",
            "excludedDates": ["2025-06-16"]
        }))
        .unwrap();

        let event = body.into_event().unwrap();

        assert_eq!(event.title, "Atelier de tissage");
        assert_eq!(event.timezone, chrono_tz::America::New_York);
        assert_eq!(
            event.starts_at,
            Utc.with_ymd_and_hms(2025, 6, 2, 18, 0, 0).unwrap()
        );
        assert_eq!(
            event.recurrence,
            Some(RecurrenceRule {
                pattern: RecurrencePattern::Weekly,
                end_date: NaiveDate::from_ymd_opt(2025, 8, 31),
            })
        );
        assert_eq!(
            event.excluded_dates,
            vec![NaiveDate::from_ymd_opt(2025, 6, 16).unwrap()]
        );
    }

    #[test]
    fn create_event_body_without_a_pattern_stays_non_recurring() {
        let body: create_event::RequestBody = serde_json::from_value(serde_json::json!({
            "title": "Vernissage",
            "timezone": "UTC",
            "startsAt": "2025-06-01T10:00:00Z",
            "recurrenceEndDate": "2025-8-31"
        }))
        .unwrap();

        let event = body.into_event().unwrap();
        assert_eq!(event.recurrence, None);
        assert!(event.excluded_dates.is_empty());
    }

    #[test]
    fn create_event_body_rejects_malformed_dates() {
        let body: create_event::RequestBody = serde_json::from_value(serde_json::json!({
            "title": "Vernissage",
            "timezone": "UTC",
            "startsAt": "2025-06-01T10:00:00Z",
            "recurrencePattern": "daily",
            "recurrenceEndDate": "2025-13-01"
        }))
        .unwrap();

        assert!(body.into_event().is_err());
    }
}
