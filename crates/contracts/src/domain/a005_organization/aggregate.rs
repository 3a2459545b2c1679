use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::lenient::{
    f64_lenient, i64_lenient, opt_datetime_lenient, string_lenient,
};
use crate::domain::common::{Address, AggregateRoot};
use crate::enums::EntityStatus;
use crate::shared::validation::{require_email, require_text, ValidationResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganizationStats {
    #[serde(alias = "clientCount", deserialize_with = "i64_lenient")]
    pub clients_count: i64,
    #[serde(alias = "dealerCount", deserialize_with = "i64_lenient")]
    pub dealers_count: i64,
    #[serde(alias = "userCount", deserialize_with = "i64_lenient")]
    pub users_count: i64,
    #[serde(deserialize_with = "f64_lenient")]
    pub total_sales: f64,
}

/// Tenant organization provisioned by a superadmin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(deserialize_with = "string_lenient")]
    pub id: String,
    #[serde(default, deserialize_with = "string_lenient")]
    pub name: String,
    #[serde(default, alias = "slug", deserialize_with = "string_lenient")]
    pub code: String,
    #[serde(default)]
    pub status: EntityStatus,
    #[serde(default, alias = "contactEmail", deserialize_with = "string_lenient")]
    pub admin_email: String,
    #[serde(default, deserialize_with = "string_lenient")]
    pub admin_name: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default, alias = "statistics")]
    pub stats: OrganizationStats,
    #[serde(default, deserialize_with = "opt_datetime_lenient")]
    pub created_at: Option<DateTime<Utc>>,
}

impl AggregateRoot for Organization {
    fn id(&self) -> &str {
        &self.id
    }

    fn collection_name() -> &'static str {
        "organizations"
    }

    fn element_name() -> &'static str {
        "Organization"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Provisioning form: the server creates the organization together with its
/// first admin account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub code: String,
    pub status: EntityStatus,
    pub admin_name: String,
    pub admin_email: String,
    pub address: Address,
}

impl OrganizationDto {
    pub fn validate(&self) -> ValidationResult {
        require_text("name", "Organization name", &self.name)?;
        require_email("admin_email", &self.admin_email)?;
        Ok(())
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }
}

impl From<&Organization> for OrganizationDto {
    fn from(o: &Organization) -> Self {
        Self {
            id: Some(o.id.clone()),
            name: o.name.clone(),
            code: o.code.clone(),
            status: o.status,
            admin_name: o.admin_name.clone(),
            admin_email: o.admin_email.clone(),
            address: o.address.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_organization() {
        let o: Organization = serde_json::from_value(json!({
            "id": "o1",
            "name": "North Region",
            "slug": "north",
            "contactEmail": "ops@north.example",
            "stats": {"clientCount": 12, "totalSales": 9000}
        }))
        .unwrap();
        assert_eq!(o.code, "north");
        assert_eq!(o.admin_email, "ops@north.example");
        assert_eq!(o.stats.clients_count, 12);
        assert_eq!(o.status, EntityStatus::Active);
    }

    #[test]
    fn test_provisioning_requires_name_and_admin_email() {
        let mut dto = OrganizationDto::default();
        assert_eq!(dto.validate().unwrap_err().field, "name");
        dto.name = "North".into();
        assert_eq!(dto.validate().unwrap_err().field, "admin_email");
        dto.admin_email = "ops@north.example".into();
        assert!(dto.validate().is_ok());
    }
}
