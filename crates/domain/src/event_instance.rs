use crate::event::CommunityEvent;
use chrono::{DateTime, NaiveDate, Utc};
use itertools::Itertools;

/// One concrete occurrence of a `CommunityEvent`.
///
/// The source event rides along whole so a flattened listing of instances
/// from many events stays self-describing.
#[derive(Debug, Clone, PartialEq)]
pub struct EventInstance {
    pub event: CommunityEvent,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub original_starts_at: DateTime<Utc>,
    pub instance_date: NaiveDate,
    pub is_recurring_instance: bool,
}

/// Instances sharing a calendar date, for the day-by-day listing view.
#[derive(Debug, PartialEq)]
pub struct EventInstancesDate {
    pub date: NaiveDate,
    pub instances: Vec<EventInstance>,
}

/// Groups instances by their calendar date, earliest date first. Instances
/// within a date are ordered by start time.
pub fn group_by_date(mut instances: Vec<EventInstance>) -> Vec<EventInstancesDate> {
    // earliest date first, then earliest start
    instances.sort_by(|i1, i2| {
        i1.instance_date
            .cmp(&i2.instance_date)
            .then(i1.starts_at.cmp(&i2.starts_at))
    });

    let mut dates = Vec::new();
    let groups = instances.into_iter().group_by(|instance| instance.instance_date);
    for (date, group) in &groups {
        dates.push(EventInstancesDate {
            date,
            instances: group.collect(),
        });
    }

    dates
}

/// Instances starting at or after `after`, soonest first, at most `limit`
/// of them.
pub fn upcoming(
    instances: Vec<EventInstance>,
    after: DateTime<Utc>,
    limit: usize,
) -> Vec<EventInstance> {
    let mut upcoming = instances
        .into_iter()
        .filter(|instance| instance.starts_at >= after)
        .collect::<Vec<_>>();
    upcoming.sort_by(|i1, i2| i1.starts_at.cmp(&i2.starts_at));
    upcoming.truncate(limit);
    upcoming
}
