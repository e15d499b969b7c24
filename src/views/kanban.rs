//! Board screen: tickets grouped into fixed status columns.
//!
//! Dropping a card on another column maps to
//! [`AppStore::transition_request_status`]; the board itself is a pure
//! projection.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{MaintenanceRequest, Priority, RequestStatus};
use crate::policy;
use crate::store::AppStore;

/// Column order on the board, left to right.
pub const COLUMN_ORDER: [RequestStatus; 4] = [
    RequestStatus::New,
    RequestStatus::InProgress,
    RequestStatus::Repaired,
    RequestStatus::Scrap,
];

/// Display title for a board column.
pub fn column_title(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::New => "New Requests",
        RequestStatus::InProgress => "In Progress",
        RequestStatus::Repaired => "Repaired",
        RequestStatus::Scrap => "Scrap / Salvage",
    }
}

/// Optional narrowing applied before grouping. Unset fields match
/// everything.
#[derive(Debug, Clone, Default)]
pub struct KanbanFilters {
    pub equipment_id: Option<String>,
    pub technician: Option<String>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
}

/// One column of the board.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KanbanColumn<'a> {
    pub status: RequestStatus,
    pub title: &'static str,
    pub requests: Vec<&'a MaintenanceRequest>,
}

/// Group the filtered tickets into the four fixed columns. Columns are
/// always present, empty or not.
pub fn build_board<'a>(store: &'a AppStore, filters: &KanbanFilters) -> Vec<KanbanColumn<'a>> {
    let cards: Vec<&MaintenanceRequest> = store
        .requests()
        .iter()
        .filter(|r| matches_filters(store, r, filters))
        .collect();
    COLUMN_ORDER
        .iter()
        .map(|&status| KanbanColumn {
            status,
            title: column_title(status),
            requests: cards
                .iter()
                .copied()
                .filter(|r| r.status == status)
                .collect(),
        })
        .collect()
}

fn matches_filters(store: &AppStore, request: &MaintenanceRequest, filters: &KanbanFilters) -> bool {
    if let Some(id) = &filters.equipment_id {
        if &request.equipment_id != id {
            return false;
        }
    }
    if let Some(name) = &filters.technician {
        if request.assigned_technician.as_deref() != Some(name.as_str()) {
            return false;
        }
    }
    if let Some(priority) = filters.priority {
        if request.priority != priority {
            return false;
        }
    }
    if let Some(category) = &filters.category {
        // A category nothing in the fleet carries filters nothing out.
        let known = store.equipment().iter().any(|e| &e.category == category);
        if known {
            let card_category = store
                .get_equipment_by_id(&request.equipment_id)
                .map(|e| e.category.as_str());
            if card_category != Some(category.as_str()) {
                return false;
            }
        }
    }
    true
}

/// Whether a card renders with the overdue accent. The live schedule check
/// catches tickets whose stored flag has not been refreshed yet.
pub fn card_overdue(request: &MaintenanceRequest, today: NaiveDate) -> bool {
    request.overdue
        || matches!(request.scheduled_date, Some(d) if d < today && policy::is_open(request.status))
}

/// Every technician name across all teams, first appearance first.
pub fn technician_names(store: &AppStore) -> Vec<String> {
    let mut names = Vec::new();
    for team in store.teams() {
        for member in &team.members {
            if !names.contains(&member.name) {
                names.push(member.name.clone());
            }
        }
    }
    names
}

/// Every non-empty equipment category, first appearance first.
pub fn asset_categories(store: &AppStore) -> Vec<String> {
    let mut categories = Vec::new();
    for eq in store.equipment() {
        if !eq.category.is_empty() && !categories.contains(&eq.category) {
            categories.push(eq.category.clone());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::RequestType;

    fn card(scheduled: Option<NaiveDate>, status: RequestStatus, overdue: bool) -> MaintenanceRequest {
        MaintenanceRequest {
            id: "REQ-1".to_string(),
            ticket_id: "#REQ-1".to_string(),
            subject: "Belt misaligned".to_string(),
            equipment_id: "EQ-001".to_string(),
            equipment_name: "Conveyor".to_string(),
            request_type: RequestType::Corrective,
            scheduled_date: scheduled,
            duration: None,
            hours_spent: None,
            priority: Priority::Medium,
            status,
            assigned_team: None,
            assigned_technician: None,
            description: String::new(),
            created_at: Utc::now(),
            overdue,
        }
    }

    #[test]
    fn test_card_overdue_live_check() {
        let today = NaiveDate::from_ymd_opt(2024, 10, 22).unwrap();
        let yesterday = NaiveDate::from_ymd_opt(2024, 10, 21).unwrap();

        // Past schedule on an open card reads as overdue even before the
        // stored flag is refreshed.
        let stale = card(Some(yesterday), RequestStatus::New, false);
        assert!(card_overdue(&stale, today));

        // Terminal cards fall back to the stored flag alone.
        let repaired = card(Some(yesterday), RequestStatus::Repaired, false);
        assert!(!card_overdue(&repaired, today));
        let flagged = card(Some(yesterday), RequestStatus::Repaired, true);
        assert!(card_overdue(&flagged, today));

        let undated = card(None, RequestStatus::New, false);
        assert!(!card_overdue(&undated, today));
    }
}
