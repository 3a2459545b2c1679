use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::lenient::{
    f64_lenient, i64_lenient, opt_datetime_lenient, string_lenient,
};
use crate::domain::common::{AggregateRoot, EntityRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    #[serde(alias = "canceled")]
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Unknown => "unknown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Unknown => "Unknown",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "warning",
            OrderStatus::Processing => "primary",
            OrderStatus::Completed => "success",
            OrderStatus::Cancelled => "error",
            OrderStatus::Unknown => "neutral",
        }
    }

    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(OrderStatus::Pending),
            "processing" => Some(OrderStatus::Processing),
            "completed" => Some(OrderStatus::Completed),
            "cancelled" | "canceled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default, alias = "productId")]
    pub product: EntityRef,
    #[serde(default, deserialize_with = "i64_lenient")]
    pub quantity: i64,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub price: f64,
    #[serde(default, deserialize_with = "i64_lenient")]
    pub points: i64,
}

/// Dealer order; read-only in the front-end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(deserialize_with = "string_lenient")]
    pub id: String,
    #[serde(default, alias = "orderNo", deserialize_with = "string_lenient")]
    pub order_number: String,
    #[serde(default, alias = "dealerId", alias = "dealerSlot")]
    pub dealer: EntityRef,
    #[serde(default, alias = "clientId")]
    pub client: EntityRef,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default, alias = "total", deserialize_with = "f64_lenient")]
    pub total_amount: f64,
    #[serde(default, alias = "loyaltyPoints", deserialize_with = "i64_lenient")]
    pub points: i64,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default, deserialize_with = "opt_datetime_lenient")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Server total, or the sum of line totals when the server sent none
    pub fn total(&self) -> f64 {
        if self.total_amount > 0.0 {
            self.total_amount
        } else {
            self.items
                .iter()
                .map(|i| i.quantity as f64 * i.price)
                .sum()
        }
    }

    /// Server points, or the sum of line points when the server sent none
    pub fn total_points(&self) -> i64 {
        if self.points > 0 {
            self.points
        } else {
            self.items.iter().map(|i| i.points * i.quantity).sum()
        }
    }

    /// Order number, or a shortened id
    pub fn display_number(&self) -> String {
        if self.order_number.trim().is_empty() {
            let short: String = self.id.chars().take(8).collect();
            format!("#{}", short)
        } else {
            self.order_number.clone()
        }
    }
}

impl AggregateRoot for Order {
    fn id(&self) -> &str {
        &self.id
    }

    fn collection_name() -> &'static str {
        "orders"
    }

    fn element_name() -> &'static str {
        "Order"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_totals_fall_back_to_items() {
        let o: Order = serde_json::from_value(json!({
            "id": "0123456789abcdef",
            "items": [
                {"productId": "p1", "quantity": 2, "price": 5.0, "points": 10},
                {"product": {"_id": "p2", "name": "Mug"}, "quantity": 1, "price": "2.5", "points": 4}
            ],
            "status": "canceled"
        }))
        .unwrap();
        assert_eq!(o.total(), 12.5);
        assert_eq!(o.total_points(), 24);
        assert_eq!(o.display_number(), "#01234567");
        assert_eq!(o.items[1].product.label(), "Mug");
        assert_eq!(o.status, OrderStatus::Cancelled);
    }

    #[test]
    fn test_server_totals_win() {
        let o: Order = serde_json::from_value(json!({
            "id": "o1", "orderNumber": "ORD-1", "total": 99.0, "loyaltyPoints": 120,
            "items": [{"quantity": 1, "price": 1.0, "points": 1}]
        }))
        .unwrap();
        assert_eq!(o.total(), 99.0);
        assert_eq!(o.total_points(), 120);
        assert_eq!(o.display_number(), "ORD-1");
    }
}
