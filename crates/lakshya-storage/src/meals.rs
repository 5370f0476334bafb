use uuid::Uuid;

use lakshya_core::models::Meal;
use lakshya_core::store_keys;

use crate::error::StorageError;
use crate::repository::Repository;
use crate::store::DurableStore;

impl<S: DurableStore> Repository<S> {
    pub fn save_custom_meal(&self, meal: Meal) -> Result<(), StorageError> {
        meal.validate()?;
        tracing::info!(meal_id = %meal.id, name = %meal.name, "saving custom meal");
        self.append(store_keys::MEALS, meal)
    }

    pub fn custom_meals(&self) -> Result<Vec<Meal>, StorageError> {
        self.load_list(store_keys::MEALS)
    }

    pub fn custom_meal(&self, id: Uuid) -> Result<Option<Meal>, StorageError> {
        Ok(self.custom_meals()?.into_iter().find(|meal| meal.id == id))
    }

    /// Case-insensitive substring match on the meal name. The query is
    /// used as typed, so surrounding spaces must match too. An empty query
    /// matches everything.
    pub fn search_custom_meals(&self, query: &str) -> Result<Vec<Meal>, StorageError> {
        let needle = query.to_lowercase();
        let mut meals = self.custom_meals()?;
        if !needle.is_empty() {
            meals.retain(|meal| meal.name.to_lowercase().contains(&needle));
        }
        Ok(meals)
    }

    pub fn delete_custom_meal(&self, id: Uuid) -> Result<bool, StorageError> {
        let removed = self.remove_where(store_keys::MEALS, |meal: &Meal| meal.id == id)?;
        if !removed {
            tracing::warn!(meal_id = %id, "delete of unknown custom meal ignored");
        }
        Ok(removed)
    }

    pub fn update_custom_meal(&self, id: Uuid, updated: Meal) -> Result<bool, StorageError> {
        updated.validate()?;
        let replaced = self.replace_where(store_keys::MEALS, |meal: &Meal| meal.id == id, updated)?;
        if !replaced {
            tracing::warn!(meal_id = %id, "update of unknown custom meal ignored");
        }
        Ok(replaced)
    }
}
