pub mod date;
mod event;
mod event_instance;
mod shared;
mod timespan;

pub use event::{expand_all, CommunityEvent};
pub use event_instance::{group_by_date, upcoming, EventInstance, EventInstancesDate};
pub use shared::entity::{InvalidIDError, ID};
pub use shared::metadata::Metadata;
pub use shared::recurrence::{RecurrencePattern, RecurrenceRule, MAX_EXPANDED_INSTANCES};
pub use timespan::{InvalidTimeSpanError, TimeSpan};
