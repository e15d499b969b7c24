//! Overview screen: headline counters, asset health, and ticket teasers.

use std::cmp::Reverse;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::models::{EquipmentStatus, MaintenanceRequest, Priority, RequestType};
use crate::policy;
use crate::store::AppStore;

/// Headline counters across the whole facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_equipment: usize,
    pub open_requests: usize,
    pub high_priority_requests: usize,
    pub active_teams: usize,
    pub total_teams: usize,
    pub maintenance_due: usize,
}

/// Fleet counts per status with rounded percentages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetStatusSummary {
    pub operational: usize,
    pub in_maintenance: usize,
    pub broken: usize,
    pub operational_percent: u8,
    pub maintenance_percent: u8,
    pub broken_percent: u8,
}

/// Compute the headline counters. `today` anchors the 48-hour
/// maintenance-due window.
pub fn build_stats(store: &AppStore, today: NaiveDate) -> DashboardStats {
    let requests = store.requests();
    let teams = store.teams();
    // Date-only schedules count today as already past, so the due window
    // runs from tomorrow through the day after.
    let due_end = today + Duration::days(2);
    let maintenance_due = requests
        .iter()
        .filter(|r| r.request_type == RequestType::Preventive && policy::is_open(r.status))
        .filter(|r| matches!(r.scheduled_date, Some(d) if d > today && d <= due_end))
        .count();
    DashboardStats {
        total_equipment: store.equipment().len(),
        open_requests: requests.iter().filter(|r| policy::is_open(r.status)).count(),
        high_priority_requests: requests
            .iter()
            .filter(|r| r.priority == Priority::High && policy::is_open(r.status))
            .count(),
        active_teams: teams.iter().filter(|t| !t.members.is_empty()).count(),
        total_teams: teams.len(),
        maintenance_due,
    }
}

/// Tally the fleet by status. Percentages round to the nearest whole and
/// are all zero for an empty fleet.
pub fn asset_status_summary(store: &AppStore) -> AssetStatusSummary {
    let equipment = store.equipment();
    let total = equipment.len();
    let count = |status: EquipmentStatus| equipment.iter().filter(|e| e.status == status).count();
    let operational = count(EquipmentStatus::Operational);
    let in_maintenance = count(EquipmentStatus::Maintenance);
    let broken = count(EquipmentStatus::Broken);
    AssetStatusSummary {
        operational,
        in_maintenance,
        broken,
        operational_percent: percent(operational, total),
        maintenance_percent: percent(in_maintenance, total),
        broken_percent: percent(broken, total),
    }
}

/// Open tickets ordered high priority first, at most `limit`. Ties keep
/// their list order.
pub fn priority_requests(store: &AppStore, limit: usize) -> Vec<&MaintenanceRequest> {
    let mut open: Vec<&MaintenanceRequest> = store
        .requests()
        .iter()
        .filter(|r| policy::is_open(r.status))
        .collect();
    open.sort_by_key(|r| Reverse(policy::priority_rank(r.priority)));
    open.truncate(limit);
    open
}

/// Newest tickets first, open or not, at most `limit`.
pub fn recent_activity(store: &AppStore, limit: usize) -> Vec<&MaintenanceRequest> {
    let mut all: Vec<&MaintenanceRequest> = store.requests().iter().collect();
    all.sort_by_key(|r| Reverse(r.created_at));
    all.truncate(limit);
    all
}

fn percent(count: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u8
}
