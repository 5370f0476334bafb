use serde::{Deserialize, Serialize};
use ts_rs::TS;

use lakshya_core::models::{DailyStats, UserProfile};

/// Consumption against one goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MacroProgress {
    pub consumed: f64,
    pub goal: f64,
    /// `consumed / goal` as a percentage, capped at 100. A zero goal is
    /// already met, so it reads 100.
    pub percent: f64,
    /// Goal left to eat, never negative.
    pub remaining: f64,
}

impl MacroProgress {
    pub fn new(consumed: f64, goal: f64) -> Self {
        let percent = if goal > 0.0 {
            (consumed / goal * 100.0).min(100.0)
        } else {
            100.0
        };
        Self {
            consumed,
            goal,
            percent,
            remaining: (goal - consumed).max(0.0),
        }
    }

    pub fn is_met(&self) -> bool {
        self.consumed >= self.goal
    }
}

/// One day's totals measured against the profile's goals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GoalProgress {
    pub calories: MacroProgress,
    pub protein: MacroProgress,
    pub carbs: MacroProgress,
    pub fats: MacroProgress,
}

impl GoalProgress {
    pub fn new(profile: &UserProfile, stats: &DailyStats) -> Self {
        Self {
            calories: MacroProgress::new(stats.total_calories, profile.daily_calorie_goal),
            protein: MacroProgress::new(stats.total_protein, profile.protein_goal),
            carbs: MacroProgress::new(stats.total_carbs, profile.carbs_goal),
            fats: MacroProgress::new(stats.total_fats, profile.fats_goal),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WeeklySummary {
    pub total_calories: f64,
    /// Total spread over every day of the series, including empty days.
    pub average_calories: f64,
    /// Days with at least one entry.
    pub logged_days: u32,
}

impl WeeklySummary {
    pub fn from_days(days: &[DailyStats]) -> Self {
        let total_calories: f64 = days.iter().map(|d| d.total_calories).sum();
        let average_calories = if days.is_empty() {
            0.0
        } else {
            total_calories / days.len() as f64
        };
        let logged_days = days.iter().filter(|d| d.meals_count > 0).count() as u32;
        Self {
            total_calories,
            average_calories,
            logged_days,
        }
    }
}
