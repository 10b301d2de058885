//! Data models for the equipment directory

pub mod equipment;

pub use equipment::{
    parse_equipment_id, CreateEquipment, Equipment, EquipmentChanges, EquipmentStatus, NewEquipment,
    UpdateEquipment, UpdateEquipmentStatus,
};
