use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::defaults;
use crate::error::CoreError;

/// Singleton per installation. Saved wholesale, never merged field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UserProfile {
    /// kcal
    pub daily_calorie_goal: f64,
    /// grams
    pub protein_goal: f64,
    /// grams
    pub carbs_goal: f64,
    /// grams
    pub fats_goal: f64,
    pub units: Units,
    pub theme: Theme,
}

impl UserProfile {
    pub fn validate(&self) -> Result<(), CoreError> {
        for (field, value) in [
            ("dailyCalorieGoal", self.daily_calorie_goal),
            ("proteinGoal", self.protein_goal),
            ("carbsGoal", self.carbs_goal),
            ("fatsGoal", self.fats_goal),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::InvalidGoal { field, value });
            }
        }
        Ok(())
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        defaults::default_profile()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Units {
    Metric,
    Imperial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Theme {
    Light,
    Dark,
}
