//! PostgreSQL-backed equipment repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};

use super::EquipmentStore;
use crate::models::equipment::{Equipment, EquipmentChanges, EquipmentStatus, NewEquipment};

/// Equipment table access over a shared connection pool.
///
/// Every call checks a connection out of the pool for the duration of one
/// statement; the connection goes back to the pool when the future completes
/// or is dropped.
#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Postgres>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EquipmentStore for EquipmentRepository {
    async fn list(&self) -> Result<Vec<Equipment>, sqlx::Error> {
        sqlx::query_as::<_, Equipment>(
            r#"
            SELECT id, name, manager, status, location, updated_at
            FROM equipment
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn insert(&self, data: &NewEquipment) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            INSERT INTO equipment (name, manager, status, location, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&data.name)
        .bind(&data.manager)
        .bind(data.status)
        .bind(&data.location)
        .bind(data.last_updated)
        .fetch_one(&self.pool)
        .await
    }

    async fn replace(&self, id: i64, data: &EquipmentChanges) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE equipment
            SET name = $1, manager = $2, status = $3, location = $4, updated_at = $5
            WHERE id = $6
            "#,
        )
        .bind(&data.name)
        .bind(&data.manager)
        .bind(data.status)
        .bind(&data.location)
        .bind(data.last_updated)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn set_status(
        &self,
        id: i64,
        status: EquipmentStatus,
        at: DateTime<Utc>,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE equipment SET status = $1, updated_at = $2 WHERE id = $3")
            .bind(status)
            .bind(at)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| ())
    }
}
