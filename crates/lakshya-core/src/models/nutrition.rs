use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Macro and calorie content of a single serving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NutritionInfo {
    /// kcal
    pub calories: f64,
    /// grams
    pub protein: f64,
    /// grams
    pub carbs: f64,
    /// grams
    pub fats: f64,
}

impl NutritionInfo {
    /// Build a validated value. Every field must be finite and non-negative.
    pub fn new(calories: f64, protein: f64, carbs: f64, fats: f64) -> Result<Self, CoreError> {
        let info = Self {
            calories,
            protein,
            carbs,
            fats,
        };
        info.validate()?;
        Ok(info)
    }

    pub const fn zero() -> Self {
        Self {
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fats: 0.0,
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        for (field, value) in [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fats", self.fats),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::InvalidNutrient { field, value });
            }
        }
        Ok(())
    }

    /// Every field multiplied by `portion`. No rounding.
    pub fn scaled(&self, portion: f64) -> Self {
        Self {
            calories: self.calories * portion,
            protein: self.protein * portion,
            carbs: self.carbs * portion,
            fats: self.fats * portion,
        }
    }
}

impl Add for NutritionInfo {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fats: self.fats + rhs.fats,
        }
    }
}

impl AddAssign for NutritionInfo {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for NutritionInfo {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}
