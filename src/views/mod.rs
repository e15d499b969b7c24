//! Read models derived from the domain store.
//!
//! Each submodule backs one screen of the dashboard. Views never mutate
//! state: they borrow the store, resolve name-based references where a
//! screen needs live data, and hand back plain serializable rows.

pub mod calendar;
pub mod dashboard;
pub mod equipment;
pub mod forms;
pub mod kanban;
pub mod reports;
