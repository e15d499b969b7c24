//! Aggregate tallies for the analytics screen.
//!
//! Rows keep first-appearance order so charts render stably across
//! reloads. Tallies that chart a fixed axis pre-seed their rows at zero.

use serde::Serialize;

use crate::models::{Priority, RequestType};
use crate::policy;
use crate::store::AppStore;

/// Headline numbers for the summary cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_requests: usize,
    pub open_requests: usize,
    pub total_equipment: usize,
    pub total_teams: usize,
}

/// One labelled bar or pie slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatRow {
    pub name: String,
    pub count: usize,
}

pub fn summary(store: &AppStore) -> ReportSummary {
    ReportSummary {
        total_requests: store.requests().len(),
        open_requests: store
            .requests()
            .iter()
            .filter(|r| policy::is_open(r.status))
            .count(),
        total_equipment: store.equipment().len(),
        total_teams: store.teams().len(),
    }
}

/// Ticket count per assigned team; blank assignments pool under
/// "Unassigned".
pub fn requests_per_team(store: &AppStore) -> Vec<StatRow> {
    let mut rows = Vec::new();
    for request in store.requests() {
        let name = request
            .assigned_team
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or("Unassigned");
        bump(&mut rows, name);
    }
    rows
}

/// Ticket count per equipment category, resolved through the live
/// equipment record. Missing equipment and blank categories pool under
/// "Unknown".
pub fn requests_per_category(store: &AppStore) -> Vec<StatRow> {
    let mut rows = Vec::new();
    for request in store.requests() {
        let category = store
            .get_equipment_by_id(&request.equipment_id)
            .map(|e| e.category.as_str())
            .filter(|c| !c.is_empty())
            .unwrap_or("Unknown");
        bump(&mut rows, category);
    }
    rows
}

/// Ticket count per kanban stage.
pub fn requests_by_status(store: &AppStore) -> Vec<StatRow> {
    let mut rows = Vec::new();
    for request in store.requests() {
        bump(&mut rows, request.status.as_str());
    }
    rows
}

/// Corrective versus preventive split. Both rows are always present.
pub fn requests_by_type(store: &AppStore) -> Vec<StatRow> {
    let mut rows = seeded(&[
        RequestType::Corrective.as_str(),
        RequestType::Preventive.as_str(),
    ]);
    for request in store.requests() {
        bump(&mut rows, request.request_type.as_str());
    }
    rows
}

/// Ticket count per priority. All three rows are always present.
pub fn requests_by_priority(store: &AppStore) -> Vec<StatRow> {
    let mut rows = seeded(&[
        Priority::High.as_str(),
        Priority::Medium.as_str(),
        Priority::Low.as_str(),
    ]);
    for request in store.requests() {
        bump(&mut rows, request.priority.as_str());
    }
    rows
}

/// Fleet count per equipment status.
pub fn equipment_status_distribution(store: &AppStore) -> Vec<StatRow> {
    let mut rows = Vec::new();
    for eq in store.equipment() {
        bump(&mut rows, eq.status.as_str());
    }
    rows
}

fn bump(rows: &mut Vec<StatRow>, name: &str) {
    match rows.iter_mut().find(|row| row.name == name) {
        Some(row) => row.count += 1,
        None => rows.push(StatRow {
            name: name.to_string(),
            count: 1,
        }),
    }
}

fn seeded(names: &[&str]) -> Vec<StatRow> {
    names
        .iter()
        .map(|name| StatRow {
            name: name.to_string(),
            count: 0,
        })
        .collect()
}
