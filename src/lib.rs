//! GearGuard Maintenance Tracking System
//!
//! A Rust REST API server for tracking equipment and maintenance requests:
//! equipment registry, kanban-style request lifecycle, preventive
//! maintenance calendar and dashboard statistics.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
