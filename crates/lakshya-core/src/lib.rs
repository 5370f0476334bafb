//! lakshya-core
//!
//! Pure domain types, profile defaults, store key conventions, and the
//! platform collaborators (ids, clock). No I/O. This is the shared
//! vocabulary of the Lakshya system.

pub mod defaults;
pub mod error;
pub mod models;
pub mod platform;
pub mod store_keys;
