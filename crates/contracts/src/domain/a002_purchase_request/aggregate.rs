use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::lenient::{
    f64_lenient, i64_lenient, opt_datetime_lenient, opt_string_nonblank, string_lenient,
};
use crate::domain::common::{AggregateRoot, EntityRef};
use crate::shared::validation::{require_text, ValidationError, ValidationResult};

/// Purchase request status; transitions happen on the server only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseRequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl PurchaseRequestStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PurchaseRequestStatus::Pending => "pending",
            PurchaseRequestStatus::Approved => "approved",
            PurchaseRequestStatus::Rejected => "rejected",
            PurchaseRequestStatus::Unknown => "unknown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PurchaseRequestStatus::Pending => "Pending",
            PurchaseRequestStatus::Approved => "Approved",
            PurchaseRequestStatus::Rejected => "Rejected",
            PurchaseRequestStatus::Unknown => "Unknown",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            PurchaseRequestStatus::Pending => "warning",
            PurchaseRequestStatus::Approved => "success",
            PurchaseRequestStatus::Rejected => "error",
            PurchaseRequestStatus::Unknown => "neutral",
        }
    }

    pub fn all() -> Vec<PurchaseRequestStatus> {
        vec![
            PurchaseRequestStatus::Pending,
            PurchaseRequestStatus::Approved,
            PurchaseRequestStatus::Rejected,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(PurchaseRequestStatus::Pending),
            "approved" => Some(PurchaseRequestStatus::Approved),
            "rejected" => Some(PurchaseRequestStatus::Rejected),
            _ => None,
        }
    }
}

/// Client request to purchase stock of a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    #[serde(deserialize_with = "string_lenient")]
    pub id: String,
    #[serde(default, alias = "productId")]
    pub product: EntityRef,
    #[serde(default, alias = "clientId")]
    pub client: EntityRef,
    #[serde(default, deserialize_with = "i64_lenient")]
    pub quantity: i64,
    /// Unit price at the time of the request
    #[serde(default, alias = "unitPrice", deserialize_with = "f64_lenient")]
    pub price: f64,
    #[serde(default)]
    pub status: PurchaseRequestStatus,
    #[serde(default, alias = "reason", deserialize_with = "opt_string_nonblank")]
    pub rejection_reason: Option<String>,
    #[serde(default, deserialize_with = "opt_string_nonblank")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "opt_datetime_lenient")]
    pub created_at: Option<DateTime<Utc>>,
}

impl PurchaseRequest {
    pub fn total(&self) -> f64 {
        self.quantity as f64 * self.price
    }

    pub fn is_pending(&self) -> bool {
        self.status == PurchaseRequestStatus::Pending
    }

    /// Rejected without a reason on the record itself
    pub fn needs_rejection_reason(&self) -> bool {
        self.status == PurchaseRequestStatus::Rejected && self.rejection_reason.is_none()
    }
}

impl AggregateRoot for PurchaseRequest {
    fn id(&self) -> &str {
        &self.id
    }

    fn collection_name() -> &'static str {
        "purchase-requests"
    }

    fn element_name() -> &'static str {
        "Purchase request"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// New purchase request form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePurchaseRequestDto {
    pub product_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CreatePurchaseRequestDto {
    /// `available` is the product's available stock when the page knows it
    pub fn validate(&self, available: Option<i64>) -> ValidationResult {
        require_text("product_id", "Product", &self.product_id)?;
        if self.quantity < 1 {
            return Err(ValidationError::new(
                "quantity",
                "Quantity must be at least 1",
            ));
        }
        if let Some(available) = available {
            if self.quantity > available {
                return Err(ValidationError::new(
                    "quantity",
                    format!("Only {} units are available", available.max(0)),
                ));
            }
        }
        Ok(())
    }
}

/// Rejection submitted by an admin
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectPurchaseRequestDto {
    pub reason: String,
}

impl RejectPurchaseRequestDto {
    pub fn validate(&self) -> ValidationResult {
        require_text("reason", "Rejection reason", &self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_populated_request() {
        let r: PurchaseRequest = serde_json::from_value(json!({
            "id": "r1",
            "productId": {"_id": "p1", "name": "Cap"},
            "clientId": "c1",
            "quantity": 3,
            "price": "4.50",
            "status": "rejected",
            "rejectionReason": "",
            "createdAt": "2024-06-01T08:00:00Z"
        }))
        .unwrap();
        assert_eq!(r.product.id, "p1");
        assert_eq!(r.product.label(), "Cap");
        assert_eq!(r.client.id, "c1");
        assert_eq!(r.total(), 13.5);
        assert!(r.needs_rejection_reason());
    }

    #[test]
    fn test_unknown_status_is_kept() {
        let r: PurchaseRequest =
            serde_json::from_value(json!({"id": "r2", "status": "on_hold"})).unwrap();
        assert_eq!(r.status, PurchaseRequestStatus::Unknown);
    }

    #[test]
    fn test_create_validation() {
        let mut dto = CreatePurchaseRequestDto {
            product_id: "p1".into(),
            client_id: None,
            quantity: 0,
            notes: None,
        };
        assert_eq!(dto.validate(None).unwrap_err().field, "quantity");
        dto.quantity = 5;
        assert!(dto.validate(None).is_ok());
        assert!(dto.validate(Some(5)).is_ok());
        let err = dto.validate(Some(4)).unwrap_err();
        assert_eq!(err.to_string(), "Only 4 units are available");
        dto.product_id = String::new();
        assert_eq!(dto.validate(None).unwrap_err().field, "product_id");
    }

    #[test]
    fn test_reject_requires_reason() {
        assert!(RejectPurchaseRequestDto::default().validate().is_err());
        assert!(RejectPurchaseRequestDto {
            reason: "Budget".into()
        }
        .validate()
        .is_ok());
    }
}
