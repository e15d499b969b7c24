//! Work center model for the production settings screens.

use serde::{Deserialize, Serialize};

/// Capacity block of a work center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkCenterCapacity {
    pub unit: f64,
    pub efficiency: f64,
}

/// A production work center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkCenter {
    pub id: String,
    pub name: String,
    pub cost: f64,
    pub time: f64,
    pub cost_per_hour: f64,
    pub capacity: WorkCenterCapacity,
    pub cost_target: f64,
    #[serde(default)]
    pub alternative_work_centers: Vec<String>,
}

/// Payload for creating a work center. Blank numeric form inputs arrive as
/// zero.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkCenter {
    pub name: String,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub time: f64,
    #[serde(default)]
    pub cost_per_hour: f64,
    #[serde(default)]
    pub capacity: WorkCenterCapacity,
    #[serde(default)]
    pub cost_target: f64,
    #[serde(default)]
    pub alternative_work_centers: Vec<String>,
}

/// Patch payload for work center updates; absent fields keep their values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkCenter {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub time: Option<f64>,
    #[serde(default)]
    pub cost_per_hour: Option<f64>,
    #[serde(default)]
    pub capacity: Option<WorkCenterCapacity>,
    #[serde(default)]
    pub cost_target: Option<f64>,
    #[serde(default)]
    pub alternative_work_centers: Option<Vec<String>>,
}
