use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::lenient::{
    f64_lenient, i64_lenient, opt_datetime_lenient, opt_string_nonblank, string_lenient,
};
use crate::domain::common::{Address, AggregateRoot, Company};
use crate::enums::EntityStatus;
use crate::shared::validation::{optional_phone, require_email, require_text, ValidationResult};

/// Aggregates computed server-side and displayed as-is
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientStats {
    #[serde(alias = "totalRevenue", deserialize_with = "f64_lenient")]
    pub total_sales: f64,
    #[serde(alias = "ordersCount", deserialize_with = "i64_lenient")]
    pub total_orders: i64,
    #[serde(alias = "pointsBalance", deserialize_with = "i64_lenient")]
    pub total_points: i64,
    #[serde(alias = "dealersCount", deserialize_with = "i64_lenient")]
    pub active_dealers: i64,
}

/// Client account (a business enrolled in the loyalty program)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[serde(deserialize_with = "string_lenient")]
    pub id: String,
    #[serde(default, alias = "clientName", deserialize_with = "string_lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "string_lenient")]
    pub email: String,
    #[serde(default, deserialize_with = "string_lenient")]
    pub phone: String,
    #[serde(default)]
    pub status: EntityStatus,
    #[serde(default)]
    pub company: Company,
    #[serde(default)]
    pub address: Address,
    #[serde(default, deserialize_with = "opt_string_nonblank")]
    pub organization_id: Option<String>,
    #[serde(default, alias = "statistics")]
    pub stats: ClientStats,
    #[serde(default, deserialize_with = "opt_datetime_lenient")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Client {
    /// Company name when set, otherwise the contact name
    pub fn display_name(&self) -> &str {
        if self.company.name.trim().is_empty() {
            &self.name
        } else {
            &self.company.name
        }
    }
}

impl AggregateRoot for Client {
    fn id(&self) -> &str {
        &self.id
    }

    fn collection_name() -> &'static str {
        "clients"
    }

    fn element_name() -> &'static str {
        "Client"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create/update form for a client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: EntityStatus,
    pub company: Company,
    pub address: Address,
}

impl ClientDto {
    pub fn validate(&self) -> ValidationResult {
        require_text("name", "Name", &self.name)?;
        require_email("email", &self.email)?;
        optional_phone("phone", &self.phone)?;
        Ok(())
    }
}

impl From<&Client> for ClientDto {
    fn from(c: &Client) -> Self {
        Self {
            id: Some(c.id.clone()),
            name: c.name.clone(),
            email: c.email.clone(),
            phone: c.phone.clone(),
            status: c.status,
            company: c.company.clone(),
            address: c.address.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_client_with_stats() {
        let c: Client = serde_json::from_value(json!({
            "id": "c1",
            "name": "Jane Roe",
            "email": "jane@example.com",
            "phone": null,
            "status": "suspended",
            "company": {"name": "Roe Motors", "taxId": "TX-1"},
            "address": {"city": "Austin", "zipCode": "73301"},
            "statistics": {"totalRevenue": "1200.5", "ordersCount": 4}
        }))
        .unwrap();
        assert_eq!(c.status, EntityStatus::Suspended);
        assert_eq!(c.display_name(), "Roe Motors");
        assert_eq!(c.address.zip_code, "73301");
        assert_eq!(c.stats.total_sales, 1200.5);
        assert_eq!(c.stats.total_orders, 4);
        assert_eq!(c.phone, "");
    }

    #[test]
    fn test_dto_validation() {
        let mut dto = ClientDto {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        dto.email = "jane".into();
        assert_eq!(dto.validate().unwrap_err().field, "email");
        dto.email = "jane@example.com".into();
        dto.phone = "12".into();
        assert_eq!(dto.validate().unwrap_err().field, "phone");
    }
}
