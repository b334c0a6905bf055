//! Delivery log service
//!
//! Orchestrates the two public operations over an abstract store:
//! appending a log to a delivery and viewing a delivery with its
//! history. Composes input validation, the access policy and the
//! lifecycle rules; persistence stays behind [`DeliveryStore`].

use async_trait::async_trait;
use sqlx::SqlitePool;
use thiserror::Error;

use shared::models::{Delivery, DeliveryLog, DeliveryWithLogs};

use crate::db::repository::{self, RepoError};
use crate::deliveries::lifecycle;
use crate::deliveries::policy::{self, Actor};
use crate::utils::AppError;
use crate::utils::validation::{MAX_NOTE_LEN, validate_required_text};

/// Outcomes of the core operations besides success. Total: nothing in
/// this module swallows an error or commits partial state before the
/// final store write.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("Delivery not found")]
    NotFound,

    #[error("{0}")]
    InvalidTransition(&'static str),

    #[error("The user can only view their own deliveries")]
    Unauthorized,

    #[error("Store failure: {0}")]
    Store(String),
}

impl From<RepoError> for ServiceError {
    fn from(err: RepoError) -> Self {
        ServiceError::Store(err.to_string())
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(msg) => AppError::Validation(msg),
            ServiceError::NotFound => AppError::NotFound("Delivery not found".to_string()),
            ServiceError::InvalidTransition(msg) => AppError::BusinessRule(msg.to_string()),
            ServiceError::Unauthorized => {
                AppError::Forbidden("The user can only view their own deliveries".to_string())
            }
            ServiceError::Store(msg) => AppError::Database(msg),
        }
    }
}

/// Abstract delivery store. The service suspends on these calls and
/// propagates failures unchanged; it holds no cache and no state of its
/// own.
#[async_trait]
pub trait DeliveryStore: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Delivery>, RepoError>;

    async fn find_with_logs_and_owner(
        &self,
        id: &str,
    ) -> Result<Option<DeliveryWithLogs>, RepoError>;

    async fn append_log(&self, delivery_id: &str, description: &str)
    -> Result<DeliveryLog, RepoError>;
}

/// SQLite-backed store used by the HTTP handlers
#[derive(Clone)]
pub struct SqliteDeliveryStore {
    pool: SqlitePool,
}

impl SqliteDeliveryStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DeliveryStore for SqliteDeliveryStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<Delivery>, RepoError> {
        repository::delivery::find_by_id(&self.pool, id).await
    }

    async fn find_with_logs_and_owner(
        &self,
        id: &str,
    ) -> Result<Option<DeliveryWithLogs>, RepoError> {
        repository::delivery::find_with_logs_and_owner(&self.pool, id).await
    }

    async fn append_log(
        &self,
        delivery_id: &str,
        description: &str,
    ) -> Result<DeliveryLog, RepoError> {
        repository::delivery_log::create(&self.pool, delivery_id, description).await
    }
}

/// The orchestration layer for delivery logs
pub struct DeliveryLogService<S> {
    store: S,
}

impl<S: DeliveryStore> DeliveryLogService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Append a log entry to a delivery.
    ///
    /// Validation runs before any store access, so a malformed request
    /// leaves no side effects. Either exactly one log row is created or
    /// none.
    ///
    /// Known accepted race: no transaction spans the status read and
    /// the insert, so a concurrent transition can land between them.
    pub async fn append_log(
        &self,
        delivery_id: &str,
        description: &str,
    ) -> Result<DeliveryLog, ServiceError> {
        validate_required_text(description, "description", MAX_NOTE_LEN).map_err(|e| {
            match e {
                AppError::Validation(msg) => ServiceError::Validation(msg),
                other => ServiceError::Validation(other.to_string()),
            }
        })?;

        let delivery = self
            .store
            .find_by_id(delivery_id)
            .await?
            .ok_or(ServiceError::NotFound)?;

        if let Some(reason) = lifecycle::append_rejection(delivery.status) {
            return Err(ServiceError::InvalidTransition(reason));
        }

        Ok(self.store.append_log(delivery_id, description).await?)
    }

    /// View a delivery with its full log history, in creation order.
    ///
    /// An absent delivery is not an error here: the operation yields
    /// `None` (the append path, by contrast, reports NotFound loudly).
    /// A customer asking for a delivery they do not own is rejected
    /// whether or not it exists; existence is not hidden from them
    /// beyond that.
    pub async fn view_delivery(
        &self,
        actor: &Actor,
        delivery_id: &str,
    ) -> Result<Option<DeliveryWithLogs>, ServiceError> {
        let view = self.store.find_with_logs_and_owner(delivery_id).await?;

        let owner_id = view.as_ref().map(|v| v.delivery.user_id.as_str());
        if !policy::can_view_delivery(actor, owner_id) {
            return Err(ServiceError::Unauthorized);
        }

        Ok(view)
    }
}
