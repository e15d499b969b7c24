//! Month view over scheduled preventive maintenance.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::models::{MaintenanceRequest, RequestType};
use crate::policy;
use crate::store::AppStore;

/// One cell of the month grid.
#[derive(Debug)]
pub struct CalendarDay<'a> {
    pub date: NaiveDate,
    /// False for the leading and trailing cells that pad the grid to whole
    /// weeks.
    pub in_month: bool,
    pub requests: Vec<&'a MaintenanceRequest>,
}

/// Open preventive tickets keyed by schedule date. Undated tickets stay
/// off the calendar.
pub fn scheduled_by_date(store: &AppStore) -> BTreeMap<NaiveDate, Vec<&MaintenanceRequest>> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&MaintenanceRequest>> = BTreeMap::new();
    for request in store.requests() {
        if request.request_type != RequestType::Preventive || !policy::is_open(request.status) {
            continue;
        }
        if let Some(date) = request.scheduled_date {
            by_date.entry(date).or_default().push(request);
        }
    }
    by_date
}

/// Build the grid for the month containing `anchor`: whole weeks from the
/// Sunday on or before the 1st through the Saturday on or after the last
/// day, so the cell count is always a multiple of seven.
pub fn month_grid<'a>(store: &'a AppStore, anchor: NaiveDate) -> Vec<CalendarDay<'a>> {
    let Some(month_start) = anchor.checked_sub_days(Days::new(anchor.day0() as u64)) else {
        return Vec::new();
    };
    let Some(next_month) = month_start.checked_add_months(Months::new(1)) else {
        return Vec::new();
    };
    let Some(month_end) = next_month.checked_sub_days(Days::new(1)) else {
        return Vec::new();
    };
    let back = month_start.weekday().num_days_from_sunday() as u64;
    let forward = 6 - month_end.weekday().num_days_from_sunday() as u64;
    let Some(grid_start) = month_start.checked_sub_days(Days::new(back)) else {
        return Vec::new();
    };
    let Some(grid_end) = month_end.checked_add_days(Days::new(forward)) else {
        return Vec::new();
    };

    let by_date = scheduled_by_date(store);
    grid_start
        .iter_days()
        .take_while(|d| *d <= grid_end)
        .map(|date| CalendarDay {
            date,
            in_month: date.year() == anchor.year() && date.month() == anchor.month(),
            requests: by_date.get(&date).cloned().unwrap_or_default(),
        })
        .collect()
}

/// Open preventive tickets ordered by schedule, at most `limit`. Undated
/// tickets sort last.
pub fn upcoming(store: &AppStore, limit: usize) -> Vec<&MaintenanceRequest> {
    let mut upcoming: Vec<&MaintenanceRequest> = store
        .requests()
        .iter()
        .filter(|r| r.request_type == RequestType::Preventive && policy::is_open(r.status))
        .collect();
    upcoming.sort_by_key(|r| r.scheduled_date.unwrap_or(NaiveDate::MAX));
    upcoming.truncate(limit);
    upcoming
}
