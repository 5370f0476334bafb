use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use lakshya_core::models::{DailyStats, DiaryEntry, Meal, MealCategory, UserProfile};
use lakshya_stats::{GoalProgress, WeeklySummary};
use lakshya_storage::DurableStore;

use crate::form::{MealForm, ProfileForm};
use crate::state::AppState;

/// One category section of the diary page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryGroup {
    pub category: MealCategory,
    pub entries: Vec<DiaryEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiaryDay {
    pub date: Date,
    pub groups: Vec<CategoryGroup>,
    pub stats: DailyStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Dashboard {
    pub profile: UserProfile,
    pub today: DailyStats,
    pub progress: GoalProgress,
    pub week: Vec<DailyStats>,
    pub summary: WeeklySummary,
}

fn day_or_today<S>(state: &AppState<S>, date: Option<Date>) -> Date {
    date.unwrap_or_else(|| state.clock.today())
}

/// Log a typed-in meal. The diary gets its own copy; with `save_as_custom`
/// the meal is also kept in the library as a reusable template. The
/// template is written first, so an `Err` never leaves a logged entry
/// behind.
pub fn add_meal<S: DurableStore>(
    state: &AppState<S>,
    form: MealForm,
    date: Option<Date>,
    save_as_custom: bool,
) -> Result<DiaryEntry, String> {
    let date = day_or_today(state, date);
    let meal = form
        .into_meal(save_as_custom, state.ids.as_ref(), state.clock.as_ref())
        .map_err(|e| e.to_string())?;

    let entry = DiaryEntry::log(&meal, date, state.ids.as_ref(), state.clock.as_ref());

    if save_as_custom {
        state.repo.save_custom_meal(meal).map_err(|e| e.to_string())?;
    }
    state
        .repo
        .save_diary_entry(entry.clone())
        .map_err(|e| e.to_string())?;

    tracing::info!(entry_id = %entry.id, %date, category = entry.meal.category.as_str(), "meal logged");
    Ok(entry)
}

/// Copy a library template into the diary. `Ok(None)` if no template has
/// `meal_id`.
pub fn log_custom_meal<S: DurableStore>(
    state: &AppState<S>,
    meal_id: Uuid,
    date: Option<Date>,
) -> Result<Option<DiaryEntry>, String> {
    let Some(template) = state.repo.custom_meal(meal_id).map_err(|e| e.to_string())? else {
        tracing::warn!(%meal_id, "custom meal not found");
        return Ok(None);
    };

    let date = day_or_today(state, date);
    let entry = DiaryEntry::log(&template, date, state.ids.as_ref(), state.clock.as_ref());
    state
        .repo
        .save_diary_entry(entry.clone())
        .map_err(|e| e.to_string())?;

    tracing::info!(entry_id = %entry.id, %meal_id, %date, "custom meal logged");
    Ok(Some(entry))
}

pub fn diary_day<S: DurableStore>(
    state: &AppState<S>,
    date: Option<Date>,
) -> Result<DiaryDay, String> {
    let date = day_or_today(state, date);
    let entries = state
        .repo
        .diary_entries_by_date(date)
        .map_err(|e| e.to_string())?;

    let stats = lakshya_stats::summarize(date, &entries);
    let groups = lakshya_stats::entries_by_category(&entries)
        .into_iter()
        .map(|(category, entries)| CategoryGroup { category, entries })
        .collect();

    Ok(DiaryDay {
        date,
        groups,
        stats,
    })
}

pub fn dashboard<S: DurableStore>(
    state: &AppState<S>,
    date: Option<Date>,
) -> Result<Dashboard, String> {
    let date = day_or_today(state, date);
    let profile = state.repo.user_profile().map_err(|e| e.to_string())?;
    let week = lakshya_stats::weekly_stats(&state.repo, date).map_err(|e| e.to_string())?;
    let today = week
        .last()
        .cloned()
        .unwrap_or_else(|| DailyStats::empty(date));

    Ok(Dashboard {
        progress: GoalProgress::new(&profile, &today),
        summary: WeeklySummary::from_days(&week),
        profile,
        today,
        week,
    })
}

pub fn previous_day(date: Date) -> Result<Date, String> {
    date.yesterday().map_err(|e| e.to_string())
}

pub fn next_day(date: Date) -> Result<Date, String> {
    date.tomorrow().map_err(|e| e.to_string())
}

pub fn delete_diary_entry<S: DurableStore>(state: &AppState<S>, id: Uuid) -> Result<bool, String> {
    state.repo.delete_diary_entry(id).map_err(|e| e.to_string())
}

pub fn update_diary_entry<S: DurableStore>(
    state: &AppState<S>,
    id: Uuid,
    entry: DiaryEntry,
) -> Result<bool, String> {
    entry.meal.validate().map_err(|e| e.to_string())?;
    state
        .repo
        .update_diary_entry(id, entry)
        .map_err(|e| e.to_string())
}

pub fn custom_meals<S: DurableStore>(state: &AppState<S>, query: &str) -> Result<Vec<Meal>, String> {
    state
        .repo
        .search_custom_meals(query)
        .map_err(|e| e.to_string())
}

pub fn update_custom_meal<S: DurableStore>(
    state: &AppState<S>,
    id: Uuid,
    meal: Meal,
) -> Result<bool, String> {
    meal.validate().map_err(|e| e.to_string())?;
    state
        .repo
        .update_custom_meal(id, meal)
        .map_err(|e| e.to_string())
}

pub fn delete_custom_meal<S: DurableStore>(state: &AppState<S>, id: Uuid) -> Result<bool, String> {
    state.repo.delete_custom_meal(id).map_err(|e| e.to_string())
}

pub fn profile<S: DurableStore>(state: &AppState<S>) -> Result<UserProfile, String> {
    state.repo.user_profile().map_err(|e| e.to_string())
}

pub fn save_profile<S: DurableStore>(
    state: &AppState<S>,
    profile: UserProfile,
) -> Result<(), String> {
    profile.validate().map_err(|e| e.to_string())?;
    state
        .repo
        .save_user_profile(&profile)
        .map_err(|e| e.to_string())
}

/// Apply the goals form on top of the current profile and save the result.
pub fn update_goals<S: DurableStore>(
    state: &AppState<S>,
    form: ProfileForm,
) -> Result<UserProfile, String> {
    let current = state.repo.user_profile().map_err(|e| e.to_string())?;
    let updated = form.apply(&current);
    save_profile(state, updated.clone())?;
    Ok(updated)
}
