//! Maintenance request (ticket) model matching the persisted
//! `gearguard_requests` blob.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Kind of maintenance work a ticket asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestType {
    Corrective,
    Preventive,
}

impl RequestType {
    /// Convert to the wire/storage string.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::Corrective => "Corrective",
            RequestType::Preventive => "Preventive",
        }
    }

    /// Parse from the wire/storage string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Corrective" => Some(RequestType::Corrective),
            "Preventive" => Some(RequestType::Preventive),
            _ => None,
        }
    }
}

impl Default for RequestType {
    fn default() -> Self {
        RequestType::Corrective
    }
}

/// Ticket priority, ranked High over Medium over Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Convert to the wire/storage string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Parse from the wire/storage string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "High" => Some(Priority::High),
            "Medium" => Some(Priority::Medium),
            "Low" => Some(Priority::Low),
            _ => None,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

/// Kanban stage of a ticket.
///
/// Every transition is legal, including moves out of Repaired and Scrap;
/// the two are terminal only in the sense that open-request counting and
/// the overdue rule treat them as closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    New,
    #[serde(rename = "In Progress")]
    InProgress,
    Repaired,
    Scrap,
}

impl RequestStatus {
    /// Convert to the wire/storage string.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::New => "New",
            RequestStatus::InProgress => "In Progress",
            RequestStatus::Repaired => "Repaired",
            RequestStatus::Scrap => "Scrap",
        }
    }

    /// Parse from the wire/storage string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "New" => Some(RequestStatus::New),
            "In Progress" => Some(RequestStatus::InProgress),
            "Repaired" => Some(RequestStatus::Repaired),
            "Scrap" => Some(RequestStatus::Scrap),
            _ => None,
        }
    }
}

/// A maintenance ticket raised against one piece of equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequest {
    pub id: String,
    /// Display id: `#` followed by the record id.
    pub ticket_id: String,
    pub subject: String,
    pub equipment_id: String,
    /// Equipment name snapshot taken at creation; not kept in sync if the
    /// equipment is later renamed.
    pub equipment_name: String,
    #[serde(rename = "type")]
    pub request_type: RequestType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours_spent: Option<f64>,
    pub priority: Priority,
    pub status: RequestStatus,
    /// Assigned team, referenced by name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_team: Option<String>,
    /// Assigned technician, referenced by member name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_technician: Option<String>,
    pub description: String,
    pub created_at: DateTime<Utc>,
    /// Recomputed by the store after every update while the ticket is open;
    /// frozen at its last value once the status is terminal.
    pub overdue: bool,
}

/// Payload for raising a ticket.
///
/// The store assigns id, ticketId, createdAt, status (always New) and
/// overdue (always false); a status in the payload is accepted and ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequest {
    pub subject: String,
    pub equipment_id: String,
    #[serde(default)]
    pub equipment_name: String,
    #[serde(rename = "type", default)]
    pub request_type: RequestType,
    #[serde(default)]
    pub scheduled_date: Option<NaiveDate>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub hours_spent: Option<f64>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: Option<RequestStatus>,
    #[serde(default)]
    pub assigned_team: Option<String>,
    #[serde(default)]
    pub assigned_technician: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// Patch payload for ticket updates; absent fields keep their values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub equipment_id: Option<String>,
    #[serde(default)]
    pub equipment_name: Option<String>,
    #[serde(rename = "type", default)]
    pub request_type: Option<RequestType>,
    #[serde(default)]
    pub scheduled_date: Option<NaiveDate>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub hours_spent: Option<f64>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub status: Option<RequestStatus>,
    #[serde(default)]
    pub assigned_team: Option<String>,
    #[serde(default)]
    pub assigned_technician: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_request() -> MaintenanceRequest {
        MaintenanceRequest {
            id: "REQ-2024".to_string(),
            ticket_id: "#REQ-2024".to_string(),
            subject: "Fluid Leakage".to_string(),
            equipment_id: "EQ-001".to_string(),
            equipment_name: "Hydraulic Press A1".to_string(),
            request_type: RequestType::Corrective,
            scheduled_date: NaiveDate::from_ymd_opt(2024, 10, 24),
            duration: None,
            hours_spent: None,
            priority: Priority::High,
            status: RequestStatus::InProgress,
            assigned_team: Some("Mechanics Alpha".to_string()),
            assigned_technician: None,
            description: "Leaking oil from hydraulic system".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 10, 20, 9, 30, 0).unwrap(),
            overdue: false,
        }
    }

    #[test]
    fn test_wire_field_names() {
        let json: serde_json::Value = serde_json::to_value(sample_request()).unwrap();
        assert_eq!(json["ticketId"], "#REQ-2024");
        assert_eq!(json["equipmentId"], "EQ-001");
        assert_eq!(json["type"], "Corrective");
        assert_eq!(json["status"], "In Progress");
        assert_eq!(json["scheduledDate"], "2024-10-24");
        assert_eq!(json["createdAt"], "2024-10-20T09:30:00Z");
        assert!(json.get("assignedTechnician").is_none());
    }

    #[test]
    fn test_json_round_trip_is_lossless() {
        let original = sample_request();
        let raw = serde_json::to_string(&original).unwrap();
        let restored: MaintenanceRequest = serde_json::from_str(&raw).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_status_strings_round_trip() {
        for status in [
            RequestStatus::New,
            RequestStatus::InProgress,
            RequestStatus::Repaired,
            RequestStatus::Scrap,
        ] {
            assert_eq!(RequestStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(RequestStatus::from_str("Done"), None);
    }

    #[test]
    fn test_update_payload_tolerates_sparse_json() {
        let patch: UpdateRequest = serde_json::from_str(r#"{"priority": "High"}"#).unwrap();
        assert_eq!(patch.priority, Some(Priority::High));
        assert!(patch.status.is_none());
        assert!(patch.scheduled_date.is_none());
    }
}
