use chrono::{DateTime, Utc};
use thiserror::Error;

/// Queried window of time. Construction guarantees `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeSpan {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

#[derive(Error, Debug)]
pub enum InvalidTimeSpanError {
    #[error("Timespan start: {0} is after end: {1}")]
    StartAfterEnd(DateTime<Utc>, DateTime<Utc>),
}

impl TimeSpan {
    pub fn new(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Self, InvalidTimeSpanError> {
        if start > end {
            return Err(InvalidTimeSpanError::StartAfterEnd(start, end));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }
}
