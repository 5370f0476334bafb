//! Fallback profile used until the user saves their own goals.

use crate::models::profile::{Theme, Units, UserProfile};

pub const DEFAULT_CALORIE_GOAL: f64 = 2000.0;
pub const DEFAULT_PROTEIN_GOAL: f64 = 150.0;
pub const DEFAULT_CARBS_GOAL: f64 = 200.0;
pub const DEFAULT_FATS_GOAL: f64 = 65.0;

/// The profile returned when none has been persisted yet.
pub fn default_profile() -> UserProfile {
    UserProfile {
        daily_calorie_goal: DEFAULT_CALORIE_GOAL,
        protein_goal: DEFAULT_PROTEIN_GOAL,
        carbs_goal: DEFAULT_CARBS_GOAL,
        fats_goal: DEFAULT_FATS_GOAL,
        units: Units::Metric,
        theme: Theme::Dark,
    }
}
