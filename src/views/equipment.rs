//! Fleet screen helpers: free-text search and grouping.

use crate::models::Equipment;
use crate::store::AppStore;

/// Field the fleet list can be grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    Department,
    Employee,
    Team,
}

/// Case-insensitive substring match over name, serial number, department,
/// employee, and location. An empty query matches everything.
pub fn search_equipment<'a>(store: &'a AppStore, query: &str) -> Vec<&'a Equipment> {
    let needle = query.to_lowercase();
    store
        .equipment()
        .iter()
        .filter(|eq| {
            contains(&eq.name, &needle)
                || contains(&eq.serial_number, &needle)
                || contains(&eq.department, &needle)
                || eq
                    .employee
                    .as_deref()
                    .map(|e| contains(e, &needle))
                    .unwrap_or(false)
                || contains(&eq.location, &needle)
        })
        .collect()
}

/// Group the fleet by the chosen field, preserving list order within and
/// across groups. Blank fields pool under "Unassigned".
pub fn group_equipment<'a>(
    store: &'a AppStore,
    key: GroupKey,
) -> Vec<(String, Vec<&'a Equipment>)> {
    let mut groups: Vec<(String, Vec<&'a Equipment>)> = Vec::new();
    for eq in store.equipment() {
        let label = group_label(eq, key);
        match groups.iter_mut().find(|(name, _)| name == label) {
            Some((_, members)) => members.push(eq),
            None => groups.push((label.to_string(), vec![eq])),
        }
    }
    groups
}

fn group_label(eq: &Equipment, key: GroupKey) -> &str {
    let raw = match key {
        GroupKey::Department => eq.department.as_str(),
        GroupKey::Employee => eq.employee.as_deref().unwrap_or(""),
        GroupKey::Team => eq.maintenance_team.as_str(),
    };
    if raw.is_empty() {
        "Unassigned"
    } else {
        raw
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
