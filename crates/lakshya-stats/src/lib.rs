//! lakshya-stats
//!
//! Derived statistics over the diary: per-day totals, the 7-day series,
//! goal progress, and weekly summaries. Nothing here is persisted.

pub mod aggregate;
pub mod error;
pub mod progress;

pub use aggregate::{calculate_daily_stats, entries_by_category, summarize, week_dates, weekly_stats};
pub use progress::{GoalProgress, MacroProgress, WeeklySummary};
