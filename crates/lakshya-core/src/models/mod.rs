pub mod diary;
pub mod meal;
pub mod nutrition;
pub mod profile;
pub mod stats;

pub use diary::DiaryEntry;
pub use meal::{Meal, MealCategory};
pub use nutrition::NutritionInfo;
pub use profile::{Theme, Units, UserProfile};
pub use stats::DailyStats;
