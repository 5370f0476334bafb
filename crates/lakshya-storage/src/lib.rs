//! lakshya-storage
//!
//! Durable key-value store abstraction and the repository that keeps the
//! diary, custom meals, and profile documents in it.

pub mod diary;
pub mod error;
pub mod meals;
pub mod profile;
pub mod repository;
pub mod state;
pub mod store;

pub use repository::Repository;
pub use store::{DurableStore, FileStore, MemoryStore};
