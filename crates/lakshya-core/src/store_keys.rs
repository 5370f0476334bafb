//! Durable store key conventions.
//!
//! Each persisted collection lives under its own key, so a write to one
//! never touches another.

/// Ordered sequence of `DiaryEntry`, in insertion order.
pub const DIARY: &str = "diary";

/// Ordered sequence of custom `Meal` templates.
pub const MEALS: &str = "meals";

/// The singleton `UserProfile` document.
pub const PROFILE: &str = "profile";
