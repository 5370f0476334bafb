//! Validation boundary for values typed into the UI.
//!
//! The core models only accept validated numbers. Raw text is parsed here
//! with a fixed fallback policy: an empty, unparseable, negative, or
//! non-finite nutrient or goal becomes 0, and a portion that is not a positive
//! number becomes 1.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use lakshya_core::models::{Meal, MealCategory, NutritionInfo, UserProfile};
use lakshya_core::platform::{Clock, IdGenerator};

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("meal name must not be empty")]
    EmptyName,
}

/// The add-meal form, exactly as submitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MealForm {
    pub name: String,
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fats: String,
    pub portion: String,
    pub category: Option<MealCategory>,
}

impl MealForm {
    pub fn nutrition(&self) -> NutritionInfo {
        NutritionInfo {
            calories: parse_amount(&self.calories),
            protein: parse_amount(&self.protein),
            carbs: parse_amount(&self.carbs),
            fats: parse_amount(&self.fats),
        }
    }

    pub fn portion(&self) -> f64 {
        match self.portion.trim().parse::<f64>() {
            Ok(v) if v.is_finite() && v > 0.0 => v,
            _ => 1.0,
        }
    }

    /// Build a validated meal with a fresh id. The category defaults to
    /// breakfast, as on the form.
    pub fn into_meal(
        self,
        is_custom: bool,
        ids: &dyn IdGenerator,
        clock: &dyn Clock,
    ) -> Result<Meal, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::EmptyName);
        }
        Ok(Meal {
            id: ids.next_id(),
            name: name.to_string(),
            nutrition: self.nutrition(),
            portion: self.portion(),
            category: self.category.unwrap_or(MealCategory::Breakfast),
            is_custom,
            created_at: clock.now(),
        })
    }
}

/// The goals section of the profile page. Goals go through the same
/// fallback as nutrients: anything unparseable becomes 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProfileForm {
    pub daily_calorie_goal: String,
    pub protein_goal: String,
    pub carbs_goal: String,
    pub fats_goal: String,
}

impl ProfileForm {
    /// Apply the form to `current`. Units and theme are carried over.
    pub fn apply(&self, current: &UserProfile) -> UserProfile {
        UserProfile {
            daily_calorie_goal: parse_amount(&self.daily_calorie_goal),
            protein_goal: parse_amount(&self.protein_goal),
            carbs_goal: parse_amount(&self.carbs_goal),
            fats_goal: parse_amount(&self.fats_goal),
            ..current.clone()
        }
    }
}

fn parse_amount(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => 0.0,
    }
}
