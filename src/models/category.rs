//! Equipment category model for the configuration screens.

use serde::{Deserialize, Serialize};

/// A category grouping equipment for reporting and kanban filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default = "default_company")]
    pub company: String,
}

/// Payload for creating a category. The store assigns the id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategory {
    pub name: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default = "default_company")]
    pub company: String,
}

/// Patch payload for category updates; absent fields keep their values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategory {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

fn default_company() -> String {
    "My Company (Our Branch)".to_string()
}
