use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::nutrition::NutritionInfo;
use crate::error::CoreError;

/// A meal, either a library template or the copy embedded in a diary entry.
///
/// Ids must be UUIDs. A stored document whose ids are other strings does
/// not decode, and its whole collection reads as malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Meal {
    pub id: Uuid,
    pub name: String,
    /// Per single serving.
    pub nutrition: NutritionInfo,
    /// Serving multiplier applied to `nutrition`.
    pub portion: f64,
    pub category: MealCategory,
    pub is_custom: bool,
    pub created_at: jiff::Timestamp,
}

impl Meal {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::EmptyName);
        }
        if !self.portion.is_finite() || self.portion <= 0.0 {
            return Err(CoreError::InvalidPortion(self.portion));
        }
        self.nutrition.validate()
    }

    /// Nutrition for the whole portion eaten.
    pub fn totals(&self) -> NutritionInfo {
        self.nutrition.scaled(self.portion)
    }

    /// A detached copy for embedding in a diary entry. Only the id changes;
    /// later edits to `self` never reach the copy.
    pub fn copy_for_diary(&self, id: Uuid) -> Self {
        Self {
            id,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealCategory {
    /// Display order used by the diary.
    pub const ALL: [MealCategory; 4] = [
        MealCategory::Breakfast,
        MealCategory::Lunch,
        MealCategory::Dinner,
        MealCategory::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealCategory::Breakfast => "breakfast",
            MealCategory::Lunch => "lunch",
            MealCategory::Dinner => "dinner",
            MealCategory::Snack => "snack",
        }
    }
}
