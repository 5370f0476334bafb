//! lakshya-app library root.
//!
//! The service layer the presentation shell binds to: configuration,
//! logging setup, form validation, application state, and the command
//! functions. Every command returns plain data.

pub mod commands;
pub mod config;
pub mod form;
pub mod state;
pub mod telemetry;
