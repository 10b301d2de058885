//! Repository layer for database operations

pub mod equipment;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::equipment::{Equipment, EquipmentChanges, EquipmentStatus, NewEquipment};

pub use equipment::EquipmentRepository;

/// Storage seam for equipment records.
///
/// Each method is a single statement against a pooled connection. Write
/// methods return the number of rows affected so callers can tell a missing
/// record apart from a successful write.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EquipmentStore: Send + Sync {
    /// All records, highest identifier first
    async fn list(&self) -> Result<Vec<Equipment>, sqlx::Error>;

    /// Insert a record and return the identifier storage assigned to it
    async fn insert(&self, data: &NewEquipment) -> Result<i64, sqlx::Error>;

    /// Overwrite every mutable column of a record
    async fn replace(&self, id: i64, data: &EquipmentChanges) -> Result<u64, sqlx::Error>;

    async fn set_status(
        &self,
        id: i64,
        status: EquipmentStatus,
        at: DateTime<Utc>,
    ) -> Result<u64, sqlx::Error>;

    async fn delete(&self, id: i64) -> Result<u64, sqlx::Error>;

    /// Round-trip to storage, used by the readiness probe
    async fn ping(&self) -> Result<(), sqlx::Error>;
}
