use chrono::NaiveDate;

/// Clock abstraction for testability
pub trait Clock: Send + Sync {
    /// Get the current calendar date
    fn today(&self) -> NaiveDate;
}

/// System clock implementation, local time zone
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Clock pinned to a single date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
