use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::common::lenient::{
    bool_lenient, opt_datetime_lenient, reference_id, string_lenient,
};
use crate::domain::common::AggregateRoot;

/// Notification category.
///
/// The backend is not consistent about the spelling of the type
/// (`purchase_request_rejected`, `REQUEST_REJECTED`, `rejection`), so the
/// value is classified by keyword rather than matched exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NotificationType {
    PurchaseRequestRejected,
    PurchaseRequestApproved,
    InventoryLow,
    #[default]
    General,
    Other(String),
}

impl NotificationType {
    pub fn from_code(code: &str) -> Self {
        let lower = code.trim().to_ascii_lowercase();
        if lower.is_empty() || lower == "general" || lower == "info" {
            NotificationType::General
        } else if lower.contains("reject") {
            NotificationType::PurchaseRequestRejected
        } else if lower.contains("approv") {
            NotificationType::PurchaseRequestApproved
        } else if lower.contains("low") && (lower.contains("stock") || lower.contains("inventory"))
        {
            NotificationType::InventoryLow
        } else {
            NotificationType::Other(code.trim().to_string())
        }
    }

    pub fn code(&self) -> &str {
        match self {
            NotificationType::PurchaseRequestRejected => "purchase_request_rejected",
            NotificationType::PurchaseRequestApproved => "purchase_request_approved",
            NotificationType::InventoryLow => "inventory_low",
            NotificationType::General => "general",
            NotificationType::Other(code) => code,
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, NotificationType::PurchaseRequestRejected)
    }
}

impl Serialize for NotificationType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for NotificationType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = Option::<String>::deserialize(deserializer)?;
        Ok(code
            .as_deref()
            .map(NotificationType::from_code)
            .unwrap_or_default())
    }
}

/// User notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(deserialize_with = "string_lenient")]
    pub id: String,
    #[serde(default, rename = "type")]
    pub kind: NotificationType,
    #[serde(default, deserialize_with = "string_lenient")]
    pub title: String,
    #[serde(default, deserialize_with = "string_lenient")]
    pub message: String,
    /// Id of the record the notification is about (e.g. a purchase request)
    #[serde(
        default,
        alias = "requestId",
        alias = "relatedEntityId",
        deserialize_with = "reference_id"
    )]
    pub related_id: String,
    #[serde(default, alias = "isRead", deserialize_with = "bool_lenient")]
    pub read: bool,
    #[serde(default, deserialize_with = "opt_datetime_lenient")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Notification {
    /// Rejection reason carried by this notification, if it is a rejection
    pub fn rejection_reason(&self) -> Option<String> {
        if !self.kind.is_rejection() {
            return None;
        }
        extract_rejection_reason(&self.message)
    }
}

impl AggregateRoot for Notification {
    fn id(&self) -> &str {
        &self.id
    }

    fn collection_name() -> &'static str {
        "notifications"
    }

    fn element_name() -> &'static str {
        "Notification"
    }
}

const REJECTED_MARKER: &str = "rejected:";
const REASON_MARKER: &str = "reason:";

/// Pull the human-readable reason out of a rejection message.
///
/// `"Request X was rejected: Insufficient stock"` → `"Insufficient stock"`.
/// The text after the first `rejected:` marker is used, otherwise the text
/// after `reason:`, otherwise the whole message. Markers are matched
/// case-insensitively. Blank results are `None`.
pub fn extract_rejection_reason(message: &str) -> Option<String> {
    // ASCII lowercasing keeps byte offsets aligned with `message`.
    let lower = message.to_ascii_lowercase();
    let tail = if let Some(pos) = lower.find(REJECTED_MARKER) {
        &message[pos + REJECTED_MARKER.len()..]
    } else if let Some(pos) = lower.find(REASON_MARKER) {
        &message[pos + REASON_MARKER.len()..]
    } else {
        message
    };

    let reason = tail.trim();
    // "... rejected: Reason: X" carries both markers
    let reason = if reason.to_ascii_lowercase().starts_with(REASON_MARKER) {
        reason[REASON_MARKER.len()..].trim()
    } else {
        reason
    };

    if reason.is_empty() {
        None
    } else {
        Some(reason.to_string())
    }
}
