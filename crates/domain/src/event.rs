use crate::{
    date,
    event_instance::EventInstance,
    shared::entity::ID,
    shared::metadata::Metadata,
    shared::recurrence::{RecurrenceRule, MAX_EXPANDED_INSTANCES},
    timespan::TimeSpan,
};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use std::collections::HashSet;
use tracing::warn;

/// A community happening shown on the events calendar.
///
/// `starts_at`/`ends_at` describe the anchor occurrence; `recurrence`
/// projects further occurrences from it. Dates in `excluded_dates` are
/// calendar dates in the event's own zone on which an otherwise-due
/// occurrence is suppressed.
#[derive(Debug, Clone, PartialEq)]
pub struct CommunityEvent {
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

impl CommunityEvent {
    pub fn new(title: &str, starts_at: DateTime<Utc>, timezone: Tz) -> Self {
        Self {
            id: Default::default(),
            title: title.into(),
            description: String::new(),
            location: None,
            category: None,
            metadata: Default::default(),
            timezone,
            starts_at,
            ends_at: None,
            recurrence: None,
            excluded_dates: Vec::new(),
        }
    }

    // Elapsed time of the anchor occurrence. An absent end, or a malformed
    // end at or before the start, means no span to carry onto instances.
    fn duration(&self) -> Option<Duration> {
        self.ends_at
            .map(|ends_at| ends_at - self.starts_at)
            .filter(|duration| *duration > Duration::zero())
    }

    /// Concrete occurrences of this event intersecting `timespan`,
    /// chronological, at most `MAX_EXPANDED_INSTANCES` of them.
    ///
    /// A non-recurring event always yields exactly one instance whether or
    /// not it falls inside the timespan; filtering it is the caller's job.
    pub fn expand(&self, timespan: &TimeSpan) -> Vec<EventInstance> {
        let rule = match &self.recurrence {
            Some(rule) => rule,
            None => {
                return vec![EventInstance {
                    event: self.clone(),
                    starts_at: self.starts_at,
                    ends_at: self.ends_at,
                    original_starts_at: self.starts_at,
                    instance_date: date::local_date(self.starts_at, &self.timezone),
                    is_recurring_instance: false,
                }]
            }
        };

        let tz = self.timezone;
        let anchor = self.starts_at.with_timezone(&tz);
        let anchor_date = anchor.date_naive();
        let anchor_time = anchor.time();
        let duration = self.duration();

        let excluded = self.excluded_dates.iter().copied().collect::<HashSet<_>>();

        let recurrence_end = match rule.end_date {
            Some(end_date) => date::end_of_day(end_date, &tz).with_timezone(&Utc),
            // Effectively unbounded: end of December of the year after the
            // queried range.
            None => {
                let year = timespan.end().with_timezone(&tz).year();
                let last_day =
                    NaiveDate::from_ymd_opt(year + 1, 12, 31).unwrap_or(NaiveDate::MAX);
                date::end_of_day(last_day, &tz).with_timezone(&Utc)
            }
        };

        let mut instances = Vec::new();
        let mut capped = true;
        for n in 0..MAX_EXPANDED_INSTANCES {
            let occurrence_date = match rule.pattern.nth_occurrence_date(anchor_date, n as u32)
            {
                Some(occurrence_date) => occurrence_date,
                None => {
                    capped = false;
                    break;
                }
            };
            // Re-anchor the wall-clock time so calendar steps over a DST
            // transition do not drift the hour.
            let starts_at = date::at_time(occurrence_date, anchor_time, &tz).with_timezone(&Utc);
            if starts_at > recurrence_end || starts_at > timespan.end() {
                capped = false;
                break;
            }

            // An occurrence beginning before the window still belongs to it
            // when its span reaches past the window start.
            let overlaps_window = starts_at >= timespan.start()
                || duration
                    .map(|duration| starts_at + duration >= timespan.start())
                    .unwrap_or(false);
            if !overlaps_window || excluded.contains(&occurrence_date) {
                continue;
            }

            instances.push(EventInstance {
                event: self.clone(),
                starts_at,
                ends_at: duration.map(|duration| starts_at + duration),
                original_starts_at: self.starts_at,
                instance_date: occurrence_date,
                is_recurring_instance: n > 0,
            });
        }
        if capped {
            warn!(event_id = %self.id, "event expansion hit the occurrence cap");
        }

        instances
    }
}

/// Expands every event against the same timespan and concatenates the
/// results in input order. Contributions stay grouped per source event; no
/// ordering holds across events and no deduplication is attempted.
pub fn expand_all(events: &[CommunityEvent], timespan: &TimeSpan) -> Vec<EventInstance> {
    events
        .iter()
        .flat_map(|event| event.expand(timespan))
        .collect()
}
