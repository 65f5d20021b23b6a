//! Clock port - source of the timestamp mixed into artifact names

use chrono::{DateTime, Utc};

/// Provides the current time
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
