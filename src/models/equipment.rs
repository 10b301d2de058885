//! Equipment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Rendering of `lastUpdated` in API responses
pub const LAST_UPDATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Operational condition of a piece of equipment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum EquipmentStatus {
    #[default]
    Normal,
    UnderMaintenance,
    Faulty,
}

impl EquipmentStatus {
    pub const ALL: [EquipmentStatus; 3] = [
        EquipmentStatus::Normal,
        EquipmentStatus::UnderMaintenance,
        EquipmentStatus::Faulty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentStatus::Normal => "Normal",
            EquipmentStatus::UnderMaintenance => "UnderMaintenance",
            EquipmentStatus::Faulty => "Faulty",
        }
    }

    /// Validate a status supplied in a request body
    pub fn parse_field(raw: &str) -> AppResult<Self> {
        raw.parse().map_err(|_: String| {
            AppError::Validation(format!(
                "Status must be one of [{}]",
                Self::ALL.map(|s| s.as_str()).join(", ")
            ))
        })
    }
}

impl std::fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EquipmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Normal" => Ok(EquipmentStatus::Normal),
            "UnderMaintenance" => Ok(EquipmentStatus::UnderMaintenance),
            "Faulty" => Ok(EquipmentStatus::Faulty),
            _ => Err(format!("Invalid equipment status: {}", s)),
        }
    }
}

// Stored as TEXT
impl sqlx::Type<Postgres> for EquipmentStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<Postgres>>::compatible(ty)
    }
}

impl<'r> Decode<'r, Postgres> for EquipmentStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for EquipmentStatus {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        <&str as Encode<Postgres>>::encode(self.as_str(), buf)
    }
}

/// Equipment record
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    /// Storage-assigned identifier
    #[sqlx(rename = "id")]
    pub identifier: i64,
    pub name: Option<String>,
    pub manager: Option<String>,
    pub status: Option<EquipmentStatus>,
    pub location: Option<String>,
    /// Time of the most recent create or update
    #[sqlx(rename = "updated_at")]
    #[serde(serialize_with = "serialize_last_updated")]
    #[schema(value_type = String, example = "2024-03-18 14:05:09")]
    pub last_updated: DateTime<Utc>,
}

fn serialize_last_updated<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&value.format(LAST_UPDATED_FORMAT))
}

/// Create equipment request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateEquipment {
    /// Required, must not be blank
    #[serde(alias = "equipName")]
    pub name: Option<String>,
    pub manager: Option<String>,
    /// Defaults to `Normal` when omitted
    pub status: Option<String>,
    pub location: Option<String>,
}

/// Full update request; every field replaces the stored value, omitted fields become null
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateEquipment {
    #[serde(alias = "equipName")]
    pub name: Option<String>,
    pub manager: Option<String>,
    pub status: Option<String>,
    pub location: Option<String>,
}

/// Status change request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateEquipmentStatus {
    pub status: Option<String>,
}

/// Validated row to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewEquipment {
    pub name: String,
    pub manager: Option<String>,
    pub status: EquipmentStatus,
    pub location: Option<String>,
    pub last_updated: DateTime<Utc>,
}

/// Validated replacement values for an existing row
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentChanges {
    pub name: Option<String>,
    pub manager: Option<String>,
    pub status: Option<EquipmentStatus>,
    pub location: Option<String>,
    pub last_updated: DateTime<Utc>,
}

/// Parse an identifier taken from the request path. Only positive integers are accepted.
pub fn parse_equipment_id(raw: &str) -> AppResult<i64> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::Validation("Invalid equipment id".to_string())),
    }
}
