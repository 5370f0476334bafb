use lakshya_core::defaults::default_profile;
use lakshya_core::models::UserProfile;
use lakshya_core::store_keys;

use crate::error::StorageError;
use crate::repository::Repository;
use crate::store::DurableStore;

impl<S: DurableStore> Repository<S> {
    /// The saved profile, or the defaults if none was ever saved. Reading
    /// never persists the defaults.
    pub fn user_profile(&self) -> Result<UserProfile, StorageError> {
        match self.load_document(store_keys::PROFILE)? {
            Some(profile) => Ok(profile),
            None => {
                tracing::debug!("no saved profile, using defaults");
                Ok(default_profile())
            }
        }
    }

    /// Replace the whole profile. Goals must be finite and non-negative.
    pub fn save_user_profile(&self, profile: &UserProfile) -> Result<(), StorageError> {
        profile.validate()?;
        let _guard = self.write_lock(store_keys::PROFILE);
        self.save_document(store_keys::PROFILE, profile)?;
        tracing::info!(calorie_goal = profile.daily_calorie_goal, "user profile saved");
        Ok(())
    }
}
