//! Shared helpers for router-level tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::{DateTime, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use equipment_directory::{
    api,
    models::{Equipment, EquipmentChanges, EquipmentStatus, NewEquipment},
    repository::EquipmentStore,
    services::Services,
    AppConfig, AppState,
};

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: Vec<Equipment>,
}

/// Equipment table kept in memory. Identifiers grow monotonically and are never reused.
#[derive(Default)]
pub struct InMemoryStore {
    table: Mutex<Table>,
    failing: AtomicBool,
    calls: Mutex<Vec<&'static str>>,
}

impl InMemoryStore {
    /// Make every subsequent call fail as if the database were unreachable
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// Names of the store methods invoked so far
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn rows(&self) -> Vec<Equipment> {
        self.table.lock().unwrap().rows.clone()
    }

    fn enter(&self, call: &'static str) -> Result<(), sqlx::Error> {
        self.calls.lock().unwrap().push(call);
        if self.failing.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(())
    }
}

#[async_trait]
impl EquipmentStore for InMemoryStore {
    async fn list(&self) -> Result<Vec<Equipment>, sqlx::Error> {
        self.enter("list")?;
        let mut rows = self.rows();
        rows.sort_by(|a, b| b.identifier.cmp(&a.identifier));
        Ok(rows)
    }

    async fn insert(&self, data: &NewEquipment) -> Result<i64, sqlx::Error> {
        self.enter("insert")?;
        let mut table = self.table.lock().unwrap();
        table.next_id += 1;
        let id = table.next_id;
        table.rows.push(Equipment {
            identifier: id,
            name: Some(data.name.clone()),
            manager: data.manager.clone(),
            status: Some(data.status),
            location: data.location.clone(),
            last_updated: data.last_updated,
        });
        Ok(id)
    }

    async fn replace(&self, id: i64, data: &EquipmentChanges) -> Result<u64, sqlx::Error> {
        self.enter("replace")?;
        let mut table = self.table.lock().unwrap();
        let Some(row) = table.rows.iter_mut().find(|r| r.identifier == id) else {
            return Ok(0);
        };
        row.name = data.name.clone();
        row.manager = data.manager.clone();
        row.status = data.status;
        row.location = data.location.clone();
        row.last_updated = data.last_updated;
        Ok(1)
    }

    async fn set_status(
        &self,
        id: i64,
        status: EquipmentStatus,
        at: DateTime<Utc>,
    ) -> Result<u64, sqlx::Error> {
        self.enter("set_status")?;
        let mut table = self.table.lock().unwrap();
        let Some(row) = table.rows.iter_mut().find(|r| r.identifier == id) else {
            return Ok(0);
        };
        row.status = Some(status);
        row.last_updated = at;
        Ok(1)
    }

    async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        self.enter("delete")?;
        let mut table = self.table.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|r| r.identifier != id);
        Ok((before - table.rows.len()) as u64)
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        self.enter("ping")
    }
}

/// Build the production router over the given store.
pub fn build_test_app(store: Arc<InMemoryStore>) -> Router {
    build_test_app_with_config(store, AppConfig::default())
}

pub fn build_test_app_with_config(store: Arc<InMemoryStore>, config: AppConfig) -> Router {
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(Services::new(store)),
    };
    api::create_router(state)
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
