//! Mock REST API client for the station admin application
//!
//! This crate provides a trait-based client for the remote data source of
//! record: the `category` and `station` collections and the `auth` endpoints.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │            RemoteDataSource trait                │
//! │  - list / create / update / delete  (per Entity) │
//! │  - login / register                              │
//! └─────────────────────────────────────────────────┘
//!                        │
//!        ┌───────────────┴───────────────┐
//!        ▼                               ▼
//! ┌─────────────────┐         ┌─────────────────────┐
//! │ MockApiClient   │         │ test doubles        │
//! │ (reqwest)       │         │ (canned responses)  │
//! └─────────────────┘         └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use station_admin_client::{Category, MockApiClient, RemoteDataSource};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), station_admin_client::ApiError> {
//! let api = MockApiClient::new("https://example.mockapi.io", Duration::from_secs(30))?;
//! let categories = api.list::<Category>().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http_client;
pub mod types;

pub use client::{ApiResult, RemoteDataSource};
pub use error::ApiError;
pub use http_client::MockApiClient;
pub use types::{Category, Credentials, Entity, EntityDraft, Registration, Station, User};
