//! wikiquiz - a terminal client that turns Wikipedia articles into quizzes
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod state;
pub mod traits;
pub mod ui;
