use serde::{Deserialize, Serialize};

/// Lifecycle status of administrative entities (clients, organizations,
/// dealer slots)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityStatus {
    #[default]
    Active,
    Inactive,
    Suspended,
    #[serde(other)]
    Unknown,
}

impl EntityStatus {
    pub fn code(&self) -> &'static str {
        match self {
            EntityStatus::Active => "active",
            EntityStatus::Inactive => "inactive",
            EntityStatus::Suspended => "suspended",
            EntityStatus::Unknown => "unknown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EntityStatus::Active => "Active",
            EntityStatus::Inactive => "Inactive",
            EntityStatus::Suspended => "Suspended",
            EntityStatus::Unknown => "Unknown",
        }
    }

    /// Badge variant used by list views
    pub fn badge_variant(&self) -> &'static str {
        match self {
            EntityStatus::Active => "success",
            EntityStatus::Inactive => "neutral",
            EntityStatus::Suspended => "error",
            EntityStatus::Unknown => "warning",
        }
    }

    /// Selectable values for forms and filters
    pub fn all() -> Vec<EntityStatus> {
        vec![
            EntityStatus::Active,
            EntityStatus::Inactive,
            EntityStatus::Suspended,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" => Some(EntityStatus::Active),
            "inactive" => Some(EntityStatus::Inactive),
            "suspended" => Some(EntityStatus::Suspended),
            _ => None,
        }
    }
}
