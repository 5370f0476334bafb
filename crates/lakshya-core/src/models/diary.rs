use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::meal::Meal;
use crate::platform::{Clock, IdGenerator};

/// One logged instance of eating a meal on a calendar date.
///
/// `date` is fixed at creation and is the only key used for date queries;
/// it is never re-derived from `timestamp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiaryEntry {
    pub id: Uuid,
    pub date: Date,
    pub meal: Meal,
    pub timestamp: jiff::Timestamp,
}

impl DiaryEntry {
    /// Log `meal` on `date`. Mints both a new entry id and a new meal id, so
    /// the entry owns its own copy of the meal.
    pub fn log(meal: &Meal, date: Date, ids: &dyn IdGenerator, clock: &dyn Clock) -> Self {
        let id = ids.next_id();
        let meal = meal.copy_for_diary(ids.next_id());
        Self {
            id,
            date,
            meal,
            timestamp: clock.now(),
        }
    }
}
