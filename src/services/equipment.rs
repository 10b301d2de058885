//! Equipment service

use std::sync::Arc;

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::equipment::{
        CreateEquipment, Equipment, EquipmentChanges, EquipmentStatus, NewEquipment, UpdateEquipment,
        UpdateEquipmentStatus,
    },
    repository::EquipmentStore,
};

fn not_found(id: i64) -> AppError {
    tracing::debug!(id, "No equipment matched");
    AppError::NotFound("Equipment not found".to_string())
}

/// Validates requests and stamps `last_updated` before handing them to storage
#[derive(Clone)]
pub struct EquipmentService {
    store: Arc<dyn EquipmentStore>,
}

impl EquipmentService {
    pub fn new(store: Arc<dyn EquipmentStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        self.store
            .list()
            .await
            .map_err(|e| AppError::storage("Failed to retrieve equipment list", e))
    }

    /// Register new equipment and return its identifier
    pub async fn create(&self, data: &CreateEquipment) -> AppResult<i64> {
        let name = data.name.as_deref().map(str::trim).unwrap_or_default();
        if name.is_empty() {
            return Err(AppError::Validation("Equipment name is required".to_string()));
        }

        // A blank status counts as omitted.
        let status = match data.status.as_deref().map(str::trim) {
            None | Some("") => EquipmentStatus::default(),
            Some(raw) => EquipmentStatus::parse_field(raw)?,
        };

        let row = NewEquipment {
            name: name.to_string(),
            manager: data.manager.clone(),
            status,
            location: data.location.clone(),
            last_updated: Utc::now(),
        };

        let id = self
            .store
            .insert(&row)
            .await
            .map_err(|e| AppError::storage("Failed to register equipment", e))?;

        tracing::info!(id, name = %row.name, status = %row.status, "Equipment registered");
        Ok(id)
    }

    /// Replace every field of a record. Fields are written as given, with no requiredness check.
    pub async fn update(&self, id: i64, data: &UpdateEquipment) -> AppResult<()> {
        // Blank clears the column, like an omitted status.
        let status = match data.status.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(EquipmentStatus::parse_field(raw)?),
        };

        let changes = EquipmentChanges {
            name: data.name.clone(),
            manager: data.manager.clone(),
            status,
            location: data.location.clone(),
            last_updated: Utc::now(),
        };

        let affected = self
            .store
            .replace(id, &changes)
            .await
            .map_err(|e| AppError::storage("Failed to update equipment", e))?;
        if affected == 0 {
            return Err(not_found(id));
        }

        tracing::info!(id, "Equipment updated");
        Ok(())
    }

    pub async fn update_status(&self, id: i64, data: &UpdateEquipmentStatus) -> AppResult<()> {
        let status = EquipmentStatus::parse_field(data.status.as_deref().unwrap_or_default())?;

        let affected = self
            .store
            .set_status(id, status, Utc::now())
            .await
            .map_err(|e| AppError::storage("Failed to change equipment status", e))?;
        if affected == 0 {
            return Err(not_found(id));
        }

        tracing::info!(id, %status, "Equipment status changed");
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let affected = self
            .store
            .delete(id)
            .await
            .map_err(|e| AppError::storage("Failed to delete equipment", e))?;
        if affected == 0 {
            return Err(not_found(id));
        }

        tracing::info!(id, "Equipment deleted");
        Ok(())
    }

    /// Check that storage answers
    pub async fn ping(&self) -> AppResult<()> {
        self.store
            .ping()
            .await
            .map_err(|e| AppError::storage("Storage unavailable", e))
    }
}
