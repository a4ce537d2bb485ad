pub mod app;
pub mod auth;
pub mod config;
pub mod database;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod middleware;

pub use app::{app, AppState, API_BASE_PATH};
