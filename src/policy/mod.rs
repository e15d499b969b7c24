//! Ticket lifecycle rules.
//!
//! Pure functions over request status, priority, and scheduling. The store
//! calls these from its mutators, so the rules stay testable without any
//! storage in the picture.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{EquipmentStatus, Priority, RequestStatus, UpdateEquipment};

/// True when a status still counts as open on the board.
pub fn is_open(status: RequestStatus) -> bool {
    !is_terminal(status)
}

/// True for the two closed stages, Repaired and Scrap.
pub fn is_terminal(status: RequestStatus) -> bool {
    matches!(status, RequestStatus::Repaired | RequestStatus::Scrap)
}

/// Sort weight for priorities: High outranks Medium outranks Low.
pub fn priority_rank(priority: Priority) -> u8 {
    match priority {
        Priority::High => 3,
        Priority::Medium => 2,
        Priority::Low => 1,
    }
}

/// Recompute a ticket's overdue flag after a patch has been merged.
///
/// An open ticket with a scheduled date is overdue once that date is
/// strictly before today. In every other case (no date, or a terminal
/// status) the previous value is returned unchanged: the flag freezes when
/// a ticket closes instead of resetting to false.
pub fn compute_overdue(
    scheduled_date: Option<NaiveDate>,
    status: RequestStatus,
    previous: bool,
    today: NaiveDate,
) -> bool {
    match scheduled_date {
        Some(date) if !is_terminal(status) => date < today,
        _ => previous,
    }
}

/// Equipment patch applied when a ticket reaches the Scrap stage.
pub fn scrap_update(ticket_id: &str, now: DateTime<Utc>) -> UpdateEquipment {
    UpdateEquipment {
        status: Some(EquipmentStatus::Scrapped),
        scrapped_date: Some(now),
        scrapped_reason: Some(format!("Request {} moved to Scrap stage", ticket_id)),
        ..UpdateEquipment::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_is_open_matches_terminal_statuses() {
        assert!(is_open(RequestStatus::New));
        assert!(is_open(RequestStatus::InProgress));
        assert!(!is_open(RequestStatus::Repaired));
        assert!(!is_open(RequestStatus::Scrap));
    }

    #[test]
    fn test_priority_rank_ordering() {
        assert_eq!(priority_rank(Priority::High), 3);
        assert_eq!(priority_rank(Priority::Medium), 2);
        assert_eq!(priority_rank(Priority::Low), 1);
        assert!(priority_rank(Priority::High) > priority_rank(Priority::Medium));
        assert!(priority_rank(Priority::Medium) > priority_rank(Priority::Low));
    }

    #[test]
    fn test_overdue_when_scheduled_in_past_and_open() {
        let today = date(2024, 10, 24);
        assert!(compute_overdue(
            Some(date(2024, 10, 23)),
            RequestStatus::New,
            false,
            today
        ));
        assert!(compute_overdue(
            Some(date(2024, 10, 1)),
            RequestStatus::InProgress,
            false,
            today
        ));
    }

    #[test]
    fn test_not_overdue_today_or_future() {
        let today = date(2024, 10, 24);
        assert!(!compute_overdue(
            Some(today),
            RequestStatus::New,
            true,
            today
        ));
        assert!(!compute_overdue(
            Some(date(2024, 10, 25)),
            RequestStatus::New,
            true,
            today
        ));
    }

    #[test]
    fn test_overdue_frozen_for_terminal_status() {
        let today = date(2024, 10, 24);
        let past = Some(date(2024, 10, 1));
        assert!(compute_overdue(past, RequestStatus::Repaired, true, today));
        assert!(!compute_overdue(past, RequestStatus::Repaired, false, today));
        assert!(compute_overdue(past, RequestStatus::Scrap, true, today));
        assert!(!compute_overdue(past, RequestStatus::Scrap, false, today));
    }

    #[test]
    fn test_overdue_unchanged_without_scheduled_date() {
        let today = date(2024, 10, 24);
        assert!(compute_overdue(None, RequestStatus::New, true, today));
        assert!(!compute_overdue(None, RequestStatus::New, false, today));
    }

    #[test]
    fn test_scrap_update_names_the_ticket() {
        let now = Utc::now();
        let patch = scrap_update("#REQ-2024", now);
        assert_eq!(patch.status, Some(EquipmentStatus::Scrapped));
        assert_eq!(patch.scrapped_date, Some(now));
        let reason = patch.scrapped_reason.unwrap();
        assert!(reason.contains("#REQ-2024"));
        assert_eq!(reason, "Request #REQ-2024 moved to Scrap stage");
        assert!(patch.name.is_none());
    }
}
