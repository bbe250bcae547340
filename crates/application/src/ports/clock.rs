//! Clock port

use chrono::{DateTime, Local};

/// Source of the current time, used to stamp generated resource names.
pub trait Clock: Send + Sync {
    /// Returns the current local time.
    fn now(&self) -> DateTime<Local>;
}
