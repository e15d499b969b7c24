//! Equipment model matching the persisted `gearguard_equipment` blob.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Operational state of a piece of equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentStatus {
    Operational,
    Maintenance,
    Broken,
    Scrapped,
}

impl EquipmentStatus {
    /// Convert to the wire/storage string.
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentStatus::Operational => "operational",
            EquipmentStatus::Maintenance => "maintenance",
            EquipmentStatus::Broken => "broken",
            EquipmentStatus::Scrapped => "scrapped",
        }
    }

    /// Parse from the wire/storage string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "operational" => Some(EquipmentStatus::Operational),
            "maintenance" => Some(EquipmentStatus::Maintenance),
            "broken" => Some(EquipmentStatus::Broken),
            "scrapped" => Some(EquipmentStatus::Scrapped),
            _ => None,
        }
    }
}

impl Default for EquipmentStatus {
    // Equipment without an explicit status counts as operational everywhere.
    fn default() -> Self {
        EquipmentStatus::Operational
    }
}

/// A registered piece of equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: String,
    pub name: String,
    pub serial_number: String,
    pub category: String,
    pub department: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee: Option<String>,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,
    pub warranty_info: String,
    /// Responsible team, referenced by name.
    pub maintenance_team: String,
    /// Default technician, referenced by member name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_technician: Option<String>,
    #[serde(default)]
    pub status: EquipmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Set only when a scrap-stage request retires this equipment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrapped_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrapped_reason: Option<String>,
}

/// Payload for registering equipment. The store assigns id and status.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEquipment {
    pub name: String,
    pub serial_number: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub employee: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
    #[serde(default)]
    pub warranty_info: String,
    #[serde(default)]
    pub maintenance_team: String,
    #[serde(default)]
    pub assigned_technician: Option<String>,
}

/// Patch payload for equipment updates; absent fields keep their values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEquipment {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub employee: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
    #[serde(default)]
    pub warranty_info: Option<String>,
    #[serde(default)]
    pub maintenance_team: Option<String>,
    #[serde(default)]
    pub assigned_technician: Option<String>,
    #[serde(default)]
    pub status: Option<EquipmentStatus>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub scrapped_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub scrapped_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            EquipmentStatus::Operational,
            EquipmentStatus::Maintenance,
            EquipmentStatus::Broken,
            EquipmentStatus::Scrapped,
        ] {
            assert_eq!(EquipmentStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(EquipmentStatus::from_str("retired"), None);
    }

    #[test]
    fn test_serializes_camel_case_lowercase_status() {
        let item = Equipment {
            id: "EQ-001".to_string(),
            name: "Hydraulic Press A1".to_string(),
            serial_number: "HP-A1-2023".to_string(),
            category: "Heating & Cooling".to_string(),
            department: "Production".to_string(),
            employee: None,
            location: "Building A, Floor 2".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2023, 1, 15),
            warranty_info: "2 years warranty".to_string(),
            maintenance_team: "Mechanics Alpha".to_string(),
            assigned_technician: None,
            status: EquipmentStatus::Operational,
            image: None,
            scrapped_date: None,
            scrapped_reason: None,
        };

        let json: serde_json::Value = serde_json::to_value(&item).unwrap();
        assert_eq!(json["serialNumber"], "HP-A1-2023");
        assert_eq!(json["purchaseDate"], "2023-01-15");
        assert_eq!(json["status"], "operational");
        assert!(json.get("employee").is_none());
        assert!(json.get("scrappedDate").is_none());
    }

    #[test]
    fn test_status_defaults_to_operational_when_absent() {
        let json = r#"{
            "id": "EQ-009",
            "name": "Pump 1",
            "serialNumber": "P-1",
            "category": "",
            "department": "",
            "location": "",
            "warrantyInfo": "",
            "maintenanceTeam": ""
        }"#;
        let item: Equipment = serde_json::from_str(json).unwrap();
        assert_eq!(item.status, EquipmentStatus::Operational);
        assert_eq!(item.employee, None);
    }
}
