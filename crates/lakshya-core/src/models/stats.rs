use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::nutrition::NutritionInfo;

/// Totals for one calendar date. Derived on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DailyStats {
    pub date: Date,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fats: f64,
    pub meals_count: u32,
}

impl DailyStats {
    /// All-zero stats for a day with nothing logged.
    pub fn empty(date: Date) -> Self {
        Self {
            date,
            total_calories: 0.0,
            total_protein: 0.0,
            total_carbs: 0.0,
            total_fats: 0.0,
            meals_count: 0,
        }
    }

    pub fn totals(&self) -> NutritionInfo {
        NutritionInfo {
            calories: self.total_calories,
            protein: self.total_protein,
            carbs: self.total_carbs,
            fats: self.total_fats,
        }
    }
}
