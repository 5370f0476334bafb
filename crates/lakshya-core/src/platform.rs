//! Collaborators supplied by the host platform: unique ids and the clock.
//!
//! Production code uses [`RandomIds`] and [`SystemClock`]; tests inject
//! deterministic implementations.

use jiff::civil::Date;
use jiff::{Timestamp, Zoned};
use uuid::Uuid;

pub trait IdGenerator: Send + Sync {
    /// A fresh id, never returned before by this generator.
    fn next_id(&self) -> Uuid;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;

    /// The current calendar date in the user's time zone.
    fn today(&self) -> Date;
}

/// UUID v4 ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Wall clock in the system time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }

    fn today(&self) -> Date {
        Zoned::now().date()
    }
}
