//! Data models for the GearGuard domain core.
//!
//! These models match the persisted JSON blob shapes exactly, so whole
//! collections round-trip through the storage adapter field for field.

mod category;
mod equipment;
mod request;
mod team;
mod user;
mod work_center;

pub use category::*;
pub use equipment::*;
pub use request::*;
pub use team::*;
pub use user::*;
pub use work_center::*;
