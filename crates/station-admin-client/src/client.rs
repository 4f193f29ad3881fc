//! Remote data source trait
//!
//! Defines the REST contract the application relies on. The trait is generic
//! over [`Entity`] so the same four collection operations serve categories and
//! stations.

use crate::error::ApiError;
use crate::types::{Credentials, Entity, EntityDraft, Registration, User};
use async_trait::async_trait;

/// Result alias for remote calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Remote data source of record for entities and accounts
///
/// Implementations can be direct (hitting the API) or test doubles serving
/// canned responses.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so they can be shared with tasks
/// spawned on the middleware's runtime.
///
/// # Example
///
/// ```rust,ignore
/// use station_admin_client::{Category, RemoteDataSource};
///
/// async fn names(api: &impl RemoteDataSource) -> Vec<String> {
///     api.list::<Category>()
///         .await
///         .map(|all| all.into_iter().map(|c| c.name).collect())
///         .unwrap_or_default()
/// }
/// ```
#[async_trait]
pub trait RemoteDataSource: Send + Sync + 'static {
    /// `GET /<entity>`: every record of the collection
    async fn list<E: Entity>(&self) -> ApiResult<Vec<E>>;

    /// `POST /<entity>`: create a record, returns it with its new id
    async fn create<E: Entity>(&self, draft: &EntityDraft) -> ApiResult<E>;

    /// `PUT /<entity>/<id>`: update fields of a record, returns the stored record
    async fn update<E: Entity>(&self, id: &str, patch: &EntityDraft) -> ApiResult<E>;

    /// `DELETE /<entity>/<id>`: success is signaled by a 2xx status alone
    async fn delete<E: Entity>(&self, id: &str) -> ApiResult<()>;

    /// `POST /auth/login`
    async fn login(&self, credentials: &Credentials) -> ApiResult<User>;

    /// `POST /auth/register`
    async fn register(&self, registration: &Registration) -> ApiResult<User>;
}
