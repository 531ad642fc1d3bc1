//! Library surface for cafe-api, re-exported for integration tests.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod forms;
pub mod models;
pub mod state;
pub mod views;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
