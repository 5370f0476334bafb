use jiff::ToSpan;
use jiff::civil::Date;

use lakshya_core::models::{DailyStats, DiaryEntry, MealCategory, NutritionInfo};
use lakshya_storage::{DurableStore, Repository};

use crate::error::StatsError;

/// Number of days in the rolling series.
pub const WEEK_LEN: usize = 7;

/// Fold the entries logged on `date` into one day's totals. Entries for
/// other dates are ignored. Sums are left unrounded.
pub fn summarize<'a>(date: Date, entries: impl IntoIterator<Item = &'a DiaryEntry>) -> DailyStats {
    let mut totals = NutritionInfo::zero();
    let mut meals_count = 0u32;
    for entry in entries.into_iter().filter(|e| e.date == date) {
        totals += entry.meal.totals();
        meals_count += 1;
    }

    DailyStats {
        date,
        total_calories: totals.calories,
        total_protein: totals.protein,
        total_carbs: totals.carbs,
        total_fats: totals.fats,
        meals_count,
    }
}

/// Totals for `date`, read fresh from the repository.
pub fn calculate_daily_stats<S: DurableStore>(
    repo: &Repository<S>,
    date: Date,
) -> Result<DailyStats, StatsError> {
    let entries = repo.diary_entries_by_date(date)?;
    let stats = summarize(date, &entries);
    tracing::debug!(%date, meals = stats.meals_count, calories = stats.total_calories, "daily stats");
    Ok(stats)
}

/// The seven calendar dates `end - 6 ..= end`, ascending.
pub fn week_dates(end: Date) -> Result<[Date; WEEK_LEN], StatsError> {
    let start = end
        .checked_sub((WEEK_LEN as i64 - 1).days())
        .map_err(|source| StatsError::DateOutOfRange { end, source })?;

    let mut dates = [start; WEEK_LEN];
    for (offset, slot) in dates.iter_mut().enumerate() {
        *slot = start
            .checked_add((offset as i64).days())
            .map_err(|source| StatsError::DateOutOfRange { end, source })?;
    }
    Ok(dates)
}

/// One `DailyStats` per day for the week ending on `end`, ascending. Each
/// day is computed independently.
pub fn weekly_stats<S: DurableStore>(
    repo: &Repository<S>,
    end: Date,
) -> Result<Vec<DailyStats>, StatsError> {
    week_dates(end)?
        .into_iter()
        .map(|date| calculate_daily_stats(repo, date))
        .collect()
}

/// A day's entries split by category, in diary display order. Each group
/// keeps insertion order.
pub fn entries_by_category(entries: &[DiaryEntry]) -> Vec<(MealCategory, Vec<DiaryEntry>)> {
    MealCategory::ALL
        .into_iter()
        .map(|category| {
            let group = entries
                .iter()
                .filter(|e| e.meal.category == category)
                .cloned()
                .collect();
            (category, group)
        })
        .collect()
}
