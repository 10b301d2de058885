//! Repository tests against a real PostgreSQL database.
//!
//! Run with: DATABASE_URL=postgres://... cargo test -- --ignored

use chrono::{Duration, Utc};
use sqlx::postgres::PgPoolOptions;

use equipment_directory::{
    models::{EquipmentChanges, EquipmentStatus, NewEquipment},
    repository::{EquipmentRepository, EquipmentStore},
};

async fn repository() -> EquipmentRepository {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("Failed to connect to database");

    sqlx::query(include_str!("../schema/equipment.sql"))
        .execute(&pool)
        .await
        .expect("Failed to create equipment table");

    EquipmentRepository::new(pool)
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_equipment_lifecycle() {
    let repo = repository().await;
    repo.ping().await.expect("ping");

    let created_at = Utc::now() - Duration::seconds(5);
    let id = repo
        .insert(&NewEquipment {
            name: "Press-01".to_string(),
            manager: None,
            status: EquipmentStatus::Normal,
            location: Some("Line A".to_string()),
            last_updated: created_at,
        })
        .await
        .expect("insert");

    let rows = repo.list().await.expect("list");
    let row = rows.iter().find(|r| r.identifier == id).expect("inserted row listed");
    assert_eq!(row.name.as_deref(), Some("Press-01"));
    assert_eq!(row.status, Some(EquipmentStatus::Normal));
    assert!(rows.windows(2).all(|w| w[0].identifier > w[1].identifier));

    let changed = repo
        .set_status(id, EquipmentStatus::UnderMaintenance, Utc::now())
        .await
        .expect("set_status");
    assert_eq!(changed, 1);

    let replaced = repo
        .replace(
            id,
            &EquipmentChanges {
                name: Some("Press-02".to_string()),
                manager: Some("Kim".to_string()),
                status: None,
                location: None,
                last_updated: Utc::now(),
            },
        )
        .await
        .expect("replace");
    assert_eq!(replaced, 1);

    let rows = repo.list().await.expect("list");
    let row = rows.iter().find(|r| r.identifier == id).expect("row still listed");
    assert_eq!(row.status, None);
    assert_eq!(row.manager.as_deref(), Some("Kim"));
    assert!(row.last_updated > created_at);

    assert_eq!(repo.delete(id).await.expect("delete"), 1);
    assert_eq!(repo.delete(id).await.expect("second delete"), 0);
    assert_eq!(repo.set_status(id, EquipmentStatus::Faulty, Utc::now()).await.expect("set_status"), 0);
}
