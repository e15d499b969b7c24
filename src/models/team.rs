//! Team and team member models matching the persisted `gearguard_teams` blob.

use serde::{Deserialize, Serialize};

/// Availability of a single technician.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Available,
    Busy,
}

impl MemberStatus {
    /// Convert to the wire/storage string.
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Available => "available",
            MemberStatus::Busy => "busy",
        }
    }

    /// Parse from the wire/storage string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "available" => Some(MemberStatus::Available),
            "busy" => Some(MemberStatus::Busy),
            _ => None,
        }
    }
}

/// One technician inside a maintenance team.
///
/// The member's name doubles as the foreign key in equipment and request
/// assignments; renaming a member does not cascade to those records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub status: MemberStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// A maintenance team. The name is unique and referenced by name from
/// equipment and requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub team_lead: String,
    pub members: Vec<TeamMember>,
}

/// Payload for creating a team. The store assigns the id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeam {
    pub name: String,
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub team_lead: String,
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

/// Patch payload for team updates; absent fields keep their values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeam {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub team_lead: Option<String>,
    #[serde(default)]
    pub members: Option<Vec<TeamMember>>,
}
