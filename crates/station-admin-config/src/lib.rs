//! Configuration and file management for station-admin
//!
//! This crate provides:
//! - File path utilities for config and cache files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)
//! - Session persistence for the signed-in user

pub mod app_config;
pub mod config_file;
pub mod paths;
pub mod session;

pub use app_config::{AppConfig, API_URL_ENV};
pub use config_file::load_config_file;
pub use paths::{cache_dir, config_dir, session_path};
pub use session::SessionStore;
