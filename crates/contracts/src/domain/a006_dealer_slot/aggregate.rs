use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::lenient::{
    f64_lenient, i64_lenient, opt_datetime_lenient, string_lenient,
};
use crate::domain::common::{Address, AggregateRoot, EntityRef};
use crate::enums::EntityStatus;
use crate::shared::validation::{
    require_email, require_text, ValidationError, ValidationResult,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DealerSlotStats {
    #[serde(deserialize_with = "f64_lenient")]
    pub total_sales: f64,
    #[serde(alias = "totalOrders", deserialize_with = "i64_lenient")]
    pub orders_count: i64,
    #[serde(alias = "totalPoints", deserialize_with = "i64_lenient")]
    pub points_earned: i64,
}

/// Dealer seat allotted to a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealerSlot {
    #[serde(deserialize_with = "string_lenient")]
    pub id: String,
    #[serde(default, alias = "slotNo", deserialize_with = "i64_lenient")]
    pub slot_number: i64,
    #[serde(default, alias = "name", deserialize_with = "string_lenient")]
    pub dealer_name: String,
    #[serde(default, alias = "email", deserialize_with = "string_lenient")]
    pub dealer_email: String,
    #[serde(default, deserialize_with = "string_lenient")]
    pub phone: String,
    #[serde(default, alias = "clientId")]
    pub client: EntityRef,
    #[serde(default)]
    pub status: EntityStatus,
    #[serde(default)]
    pub address: Address,
    #[serde(default, alias = "statistics")]
    pub stats: DealerSlotStats,
    #[serde(default, deserialize_with = "opt_datetime_lenient")]
    pub created_at: Option<DateTime<Utc>>,
}

impl AggregateRoot for DealerSlot {
    fn id(&self) -> &str {
        &self.id
    }

    fn collection_name() -> &'static str {
        "dealer-slots"
    }

    fn element_name() -> &'static str {
        "Dealer slot"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealerSlotDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub slot_number: i64,
    pub dealer_name: String,
    pub dealer_email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    pub status: EntityStatus,
    pub address: Address,
}

impl DealerSlotDto {
    pub fn validate(&self) -> ValidationResult {
        require_text("dealer_name", "Dealer name", &self.dealer_name)?;
        if self.slot_number < 1 {
            return Err(ValidationError::new(
                "slot_number",
                "Slot number must be at least 1",
            ));
        }
        if !self.dealer_email.trim().is_empty() {
            require_email("dealer_email", &self.dealer_email)?;
        }
        Ok(())
    }
}

impl From<&DealerSlot> for DealerSlotDto {
    fn from(d: &DealerSlot) -> Self {
        Self {
            id: Some(d.id.clone()),
            slot_number: d.slot_number,
            dealer_name: d.dealer_name.clone(),
            dealer_email: d.dealer_email.clone(),
            phone: d.phone.clone(),
            client_id: (!d.client.is_empty()).then(|| d.client.id.clone()),
            status: d.status,
            address: d.address.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_dealer_slot() {
        let d: DealerSlot = serde_json::from_value(json!({
            "id": "d1",
            "slotNumber": "3",
            "dealerName": "Speedy Parts",
            "clientId": {"_id": "c1", "companyName": "Roe Motors"},
            "status": "inactive",
            "stats": {"totalSales": 150.25, "totalOrders": 2}
        }))
        .unwrap();
        assert_eq!(d.slot_number, 3);
        assert_eq!(d.client.label(), "Roe Motors");
        assert_eq!(d.status, EntityStatus::Inactive);
        assert_eq!(d.stats.orders_count, 2);
    }

    #[test]
    fn test_dto_validation() {
        let mut dto = DealerSlotDto {
            slot_number: 1,
            dealer_name: "Speedy".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        dto.slot_number = 0;
        assert_eq!(dto.validate().unwrap_err().field, "slot_number");
        dto.slot_number = 2;
        dto.dealer_email = "bad".into();
        assert_eq!(dto.validate().unwrap_err().field, "dealer_email");
    }
}
