use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use veillee_domain::{CommunityEvent, EventInstance, Metadata, RecurrenceRule, ID};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CommunityEventDTO {
    pub id: ID,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub category: Option<String>,
    pub metadata: Metadata,
    pub timezone: Tz,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub recurrence: Option<RecurrenceRule>,
    pub excluded_dates: Vec<NaiveDate>,
}

impl CommunityEventDTO {
    pub fn new(event: CommunityEvent) -> Self {
        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            location: event.location,
            category: event.category,
            metadata: event.metadata,
            timezone: event.timezone,
            starts_at: event.starts_at,
            ends_at: event.ends_at,
            recurrence: event.recurrence,
            excluded_dates: event.excluded_dates,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EventInstanceDTO {
    pub event: CommunityEventDTO,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub original_starts_at: DateTime<Utc>,
    pub instance_date: NaiveDate,
    pub is_recurring_instance: bool,
}

impl EventInstanceDTO {
    pub fn new(instance: EventInstance) -> Self {
        Self {
            event: CommunityEventDTO::new(instance.event),
            starts_at: instance.starts_at,
            ends_at: instance.ends_at,
            original_starts_at: instance.original_starts_at,
            instance_date: instance.instance_date,
            is_recurring_instance: instance.is_recurring_instance,
        }
    }
}
