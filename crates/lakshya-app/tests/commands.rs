use std::sync::atomic::{AtomicU64, Ordering};

use jiff::Timestamp;
use jiff::civil::{Date, date};
use lakshya_app::commands;
use lakshya_app::config::AppConfig;
use lakshya_app::form::{MealForm, ProfileForm};
use lakshya_app::state::AppState;
use lakshya_core::models::{MealCategory, UserProfile};
use lakshya_core::platform::{Clock, IdGenerator};
use lakshya_storage::error::StorageError;
use lakshya_storage::{DurableStore, MemoryStore};
use uuid::Uuid;

struct SeqIds(AtomicU64);

impl IdGenerator for SeqIds {
    fn next_id(&self) -> Uuid {
        Uuid::from_u128(u128::from(self.0.fetch_add(1, Ordering::SeqCst) + 1))
    }
}

struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        "2024-03-02T18:00:00Z".parse().unwrap()
    }

    fn today(&self) -> Date {
        date(2024, 3, 2)
    }
}

fn state() -> AppState<MemoryStore> {
    AppState::with_parts(MemoryStore::new(), SeqIds(AtomicU64::new(0)), FixedClock)
}

fn form(name: &str, calories: &str, portion: &str, category: MealCategory) -> MealForm {
    MealForm {
        name: name.to_string(),
        calories: calories.to_string(),
        protein: "10".to_string(),
        carbs: "20".to_string(),
        fats: "5".to_string(),
        portion: portion.to_string(),
        category: Some(category),
    }
}

#[test]
fn add_meal_logs_today_by_default() {
    let state = state();
    let entry = commands::add_meal(
        &state,
        form("Pasta", "600", "1", MealCategory::Dinner),
        None,
        false,
    )
    .unwrap();

    assert_eq!(entry.date, date(2024, 3, 2));
    assert!(commands::custom_meals(&state, "").unwrap().is_empty());

    let day = commands::diary_day(&state, None).unwrap();
    assert_eq!(day.stats.total_calories, 600.0);
    assert_eq!(day.stats.meals_count, 1);
    let dinner = day
        .groups
        .iter()
        .find(|g| g.category == MealCategory::Dinner)
        .unwrap();
    assert_eq!(dinner.entries, vec![entry]);
}

#[test]
fn saving_as_custom_keeps_library_and_diary_separate() {
    let state = state();
    let entry = commands::add_meal(
        &state,
        form("Shake", "200", "2", MealCategory::Snack),
        Some(date(2024, 3, 1)),
        true,
    )
    .unwrap();

    let library = commands::custom_meals(&state, "shake").unwrap();
    assert_eq!(library.len(), 1);
    let template = library[0].clone();
    assert!(template.is_custom);
    assert_ne!(template.id, entry.meal.id);

    let mut edited = template.clone();
    edited.nutrition.calories = 500.0;
    assert!(commands::update_custom_meal(&state, template.id, edited).unwrap());

    let day = commands::diary_day(&state, Some(date(2024, 3, 1))).unwrap();
    assert_eq!(day.stats.total_calories, 400.0);
}

#[test]
fn log_custom_meal_copies_template() {
    let state = state();
    commands::add_meal(&state, form("Oats", "150", "2", MealCategory::Breakfast), None, true)
        .unwrap();
    let template = commands::custom_meals(&state, "").unwrap().remove(0);

    let logged = commands::log_custom_meal(&state, template.id, Some(date(2024, 2, 28)))
        .unwrap()
        .unwrap();
    assert_eq!(logged.date, date(2024, 2, 28));
    assert_ne!(logged.meal.id, template.id);
    assert_eq!(logged.meal.totals().calories, 300.0);

    assert!(
        commands::log_custom_meal(&state, Uuid::from_u128(9999), None)
            .unwrap()
            .is_none()
    );
}

#[test]
fn blank_meal_name_is_reported() {
    let state = state();
    let err = commands::add_meal(&state, form(" ", "1", "1", MealCategory::Lunch), None, false)
        .unwrap_err();
    assert_eq!(err, "meal name must not be empty");
    assert!(commands::diary_day(&state, None).unwrap().stats.meals_count == 0);
}

#[test]
fn dashboard_covers_the_week() {
    let state = state();
    commands::add_meal(&state, form("A", "1000", "1", MealCategory::Lunch), None, false).unwrap();
    commands::add_meal(
        &state,
        form("B", "400", "1", MealCategory::Lunch),
        Some(date(2024, 2, 26)),
        false,
    )
    .unwrap();

    let dash = commands::dashboard(&state, None).unwrap();
    assert_eq!(dash.profile, UserProfile::default());
    assert_eq!(dash.today.date, date(2024, 3, 2));
    assert_eq!(dash.today.total_calories, 1000.0);
    assert_eq!(dash.progress.calories.percent, 50.0);
    assert_eq!(dash.progress.calories.remaining, 1000.0);
    assert_eq!(dash.week.len(), 7);
    assert_eq!(dash.week[0].date, date(2024, 2, 25));
    assert_eq!(dash.week[1].total_calories, 400.0);
    assert_eq!(dash.summary.total_calories, 1400.0);
    assert_eq!(dash.summary.average_calories, 200.0);
    assert_eq!(dash.summary.logged_days, 2);
}

#[test]
fn delete_and_update_diary_entries() {
    let state = state();
    let entry = commands::add_meal(&state, form("Soup", "250", "1", MealCategory::Lunch), None, false)
        .unwrap();

    let mut edited = entry.clone();
    edited.meal.portion = 2.0;
    assert!(commands::update_diary_entry(&state, entry.id, edited).unwrap());
    assert_eq!(commands::diary_day(&state, None).unwrap().stats.total_calories, 500.0);

    let mut invalid = entry.clone();
    invalid.meal.portion = 0.0;
    assert!(commands::update_diary_entry(&state, entry.id, invalid).is_err());

    assert!(commands::delete_diary_entry(&state, entry.id).unwrap());
    assert!(!commands::delete_diary_entry(&state, entry.id).unwrap());
    assert_eq!(commands::diary_day(&state, None).unwrap().stats.meals_count, 0);
}

#[test]
fn profile_round_trip_and_goal_form() {
    let state = state();
    assert_eq!(commands::profile(&state).unwrap(), UserProfile::default());

    let updated = commands::update_goals(
        &state,
        ProfileForm {
            daily_calorie_goal: "2200".to_string(),
            protein_goal: "x".to_string(),
            carbs_goal: "180".to_string(),
            fats_goal: "".to_string(),
        },
    )
    .unwrap();
    assert_eq!(updated.daily_calorie_goal, 2200.0);
    assert_eq!(updated.protein_goal, 0.0);
    assert_eq!(updated.carbs_goal, 180.0);
    assert_eq!(updated.fats_goal, 0.0);
    assert_eq!(commands::profile(&state).unwrap(), updated);

    let mut bad = updated.clone();
    bad.fats_goal = -1.0;
    assert!(commands::save_profile(&state, bad).is_err());
    assert_eq!(commands::profile(&state).unwrap(), updated);
}

#[test]
fn day_navigation_rolls_over_months() {
    assert_eq!(commands::previous_day(date(2024, 3, 1)).unwrap(), date(2024, 2, 29));
    assert_eq!(commands::next_day(date(2023, 12, 31)).unwrap(), date(2024, 1, 1));
}

#[test]
fn file_backed_state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::new(dir.path().join("data"));
    let day = Some(date(2024, 1, 15));

    let state = AppState::open(&config);
    commands::add_meal(&state, form("Curry", "700", "1", MealCategory::Dinner), day, true)
        .unwrap();
    drop(state);

    let reopened = AppState::open(&config);
    assert_eq!(commands::diary_day(&reopened, day).unwrap().stats.total_calories, 700.0);
    assert_eq!(commands::custom_meals(&reopened, "curry").unwrap().len(), 1);
}

/// Memory store whose writes to one key always fail.
struct FailingKey {
    inner: MemoryStore,
    key: &'static str,
}

impl DurableStore for FailingKey {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
        if key == self.key {
            return Err(StorageError::Io {
                key: key.to_string(),
                source: std::io::Error::other("disk full"),
            });
        }
        self.inner.set(key, body)
    }
}

#[test]
fn failed_template_save_logs_nothing() {
    let state = AppState::with_parts(
        FailingKey {
            inner: MemoryStore::new(),
            key: "meals",
        },
        SeqIds(AtomicU64::new(0)),
        FixedClock,
    );

    let err = commands::add_meal(&state, form("Wrap", "350", "1", MealCategory::Lunch), None, true)
        .unwrap_err();
    assert!(err.contains("disk full"));
    assert_eq!(commands::diary_day(&state, None).unwrap().stats.meals_count, 0);

    commands::add_meal(&state, form("Wrap", "350", "1", MealCategory::Lunch), None, false).unwrap();
    assert_eq!(commands::diary_day(&state, None).unwrap().stats.meals_count, 1);
}
