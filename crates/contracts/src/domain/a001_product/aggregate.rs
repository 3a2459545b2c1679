use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::lenient::{
    f64_lenient, i64_lenient, opt_datetime_lenient, opt_string_nonblank, string_lenient,
};
use crate::domain::common::AggregateRoot;
use crate::shared::validation::{
    require_non_negative, require_text, ValidationError, ValidationResult,
};

// ============================================================================
// Derived status
// ============================================================================

/// Stock status shown next to every inventory row.
///
/// Always derived from `stock` and `reorder_level` when read; a `status`
/// field sent by the backend is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InventoryStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl InventoryStatus {
    pub fn code(&self) -> &'static str {
        match self {
            InventoryStatus::InStock => "in_stock",
            InventoryStatus::LowStock => "low_stock",
            InventoryStatus::OutOfStock => "out_of_stock",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            InventoryStatus::InStock => "In stock",
            InventoryStatus::LowStock => "Low stock",
            InventoryStatus::OutOfStock => "Out of stock",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            InventoryStatus::InStock => "success",
            InventoryStatus::LowStock => "warning",
            InventoryStatus::OutOfStock => "error",
        }
    }

    pub fn all() -> Vec<InventoryStatus> {
        vec![
            InventoryStatus::InStock,
            InventoryStatus::LowStock,
            InventoryStatus::OutOfStock,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "in_stock" => Some(InventoryStatus::InStock),
            "low_stock" => Some(InventoryStatus::LowStock),
            "out_of_stock" => Some(InventoryStatus::OutOfStock),
            _ => None,
        }
    }
}

/// `stock <= 0` is out of stock, `stock <= reorder_level` is low stock
pub fn derive_status(stock: i64, reorder_level: i64) -> InventoryStatus {
    if stock <= 0 {
        InventoryStatus::OutOfStock
    } else if stock <= reorder_level {
        InventoryStatus::LowStock
    } else {
        InventoryStatus::InStock
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Product / inventory item.
///
/// Raw products (`/api/products`) and client-scoped inventory rows
/// (`/api/clients/{id}/inventory`) both decode into this type; the aliases
/// cover the field names used by either endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(deserialize_with = "string_lenient")]
    pub id: String,
    #[serde(default, alias = "productName", deserialize_with = "string_lenient")]
    pub name: String,
    #[serde(default, alias = "SKU", deserialize_with = "string_lenient")]
    pub sku: String,
    #[serde(default, deserialize_with = "string_lenient")]
    pub category: String,
    #[serde(default, alias = "unitPrice", deserialize_with = "f64_lenient")]
    pub price: f64,
    #[serde(
        default,
        alias = "quantity",
        alias = "stockQuantity",
        deserialize_with = "i64_lenient"
    )]
    pub stock: i64,
    #[serde(default, alias = "minStock", alias = "reorderPoint", deserialize_with = "i64_lenient")]
    pub reorder_level: i64,
    #[serde(default, alias = "reservedQuantity", deserialize_with = "i64_lenient")]
    pub reserved: i64,
    #[serde(default, alias = "pointsValue", deserialize_with = "i64_lenient")]
    pub points: i64,
    #[serde(default, deserialize_with = "opt_string_nonblank")]
    pub description: Option<String>,
    #[serde(
        default,
        alias = "updatedAt",
        alias = "lastUpdated",
        deserialize_with = "opt_datetime_lenient"
    )]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Product {
    /// Status recomputed from the current stock fields
    pub fn status(&self) -> InventoryStatus {
        derive_status(self.stock, self.reorder_level)
    }

    /// Stock not held by pending requests
    pub fn available(&self) -> i64 {
        (self.stock - self.reserved).max(0)
    }

    /// Stock value at list price
    pub fn stock_value(&self) -> f64 {
        self.stock.max(0) as f64 * self.price
    }
}

impl AggregateRoot for Product {
    fn id(&self) -> &str {
        &self.id
    }

    fn collection_name() -> &'static str {
        "products"
    }

    fn element_name() -> &'static str {
        "Product"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Stock adjustment submitted from the inventory page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAdjustmentDto {
    /// New absolute stock quantity
    pub quantity: i64,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl StockAdjustmentDto {
    /// Checks run before any network call.
    ///
    /// A reason is mandatory whenever the quantity differs from the current
    /// stock.
    pub fn validate(&self, current_stock: i64) -> ValidationResult {
        if self.quantity < 0 {
            return Err(ValidationError::new(
                "quantity",
                "Quantity cannot be negative",
            ));
        }
        if self.quantity != current_stock && self.reason.trim().is_empty() {
            return Err(ValidationError::new(
                "reason",
                "A reason is required when changing stock",
            ));
        }
        Ok(())
    }

    /// Signed change relative to the current stock
    pub fn delta(&self, current_stock: i64) -> i64 {
        self.quantity - current_stock
    }
}

/// Create/update form for a catalog product
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: f64,
    pub stock: i64,
    pub reorder_level: i64,
    pub points: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProductDto {
    pub fn validate(&self) -> ValidationResult {
        require_text("name", "Name", &self.name)?;
        require_text("sku", "SKU", &self.sku)?;
        require_text("category", "Category", &self.category)?;
        require_non_negative("price", "Price", self.price)?;
        if self.stock < 0 {
            return Err(ValidationError::new("stock", "Stock cannot be negative"));
        }
        if self.reorder_level < 0 {
            return Err(ValidationError::new(
                "reorder_level",
                "Reorder level cannot be negative",
            ));
        }
        if self.points < 0 {
            return Err(ValidationError::new("points", "Points cannot be negative"));
        }
        Ok(())
    }
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        Self {
            id: Some(p.id.clone()),
            name: p.name.clone(),
            sku: p.sku.clone(),
            category: p.category.clone(),
            price: p.price,
            stock: p.stock,
            reorder_level: p.reorder_level,
            points: p.points,
            description: p.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(stock: i64, reorder_level: i64) -> Product {
        Product {
            id: "p1".into(),
            name: "Cap".into(),
            sku: "CAP-1".into(),
            category: "Apparel".into(),
            price: 10.0,
            stock,
            reorder_level,
            reserved: 0,
            points: 0,
            description: None,
            last_updated: None,
        }
    }

    #[test]
    fn test_status_thresholds() {
        assert_eq!(product(0, 5).status(), InventoryStatus::OutOfStock);
        assert_eq!(product(3, 5).status(), InventoryStatus::LowStock);
        assert_eq!(product(10, 5).status(), InventoryStatus::InStock);
        assert_eq!(product(5, 5).status(), InventoryStatus::LowStock);
        assert_eq!(product(-2, 0).status(), InventoryStatus::OutOfStock);
    }

    #[test]
    fn test_status_follows_stock_after_patch() {
        let mut p = product(10, 5);
        assert_eq!(p.status(), InventoryStatus::InStock);
        p.stock = 2;
        assert_eq!(p.status(), InventoryStatus::LowStock);
    }

    #[test]
    fn test_server_status_field_is_ignored() {
        let p: Product = serde_json::from_value(json!({
            "id": "p1", "name": "Cap", "stock": 0, "reorderLevel": 5, "status": "in_stock"
        }))
        .unwrap();
        assert_eq!(p.status(), InventoryStatus::OutOfStock);
    }

    #[test]
    fn test_client_inventory_shape_decodes() {
        let p: Product = serde_json::from_value(json!({
            "id": "inv-9",
            "productName": "Mug",
            "quantity": "12",
            "minStock": 4,
            "unitPrice": "3.5",
            "updatedAt": "2024-05-01T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(p.name, "Mug");
        assert_eq!(p.stock, 12);
        assert_eq!(p.reorder_level, 4);
        assert_eq!(p.price, 3.5);
        assert!(p.last_updated.is_some());
    }

    #[test]
    fn test_available_never_negative() {
        let mut p = product(3, 1);
        p.reserved = 5;
        assert_eq!(p.available(), 0);
    }

    #[test]
    fn test_adjustment_requires_reason_when_quantity_changes() {
        let dto = StockAdjustmentDto {
            quantity: 8,
            reason: "  ".into(),
            notes: None,
        };
        let err = dto.validate(10).unwrap_err();
        assert_eq!(err.field, "reason");

        let unchanged = StockAdjustmentDto {
            quantity: 10,
            reason: String::new(),
            notes: None,
        };
        assert!(unchanged.validate(10).is_ok());

        let with_reason = StockAdjustmentDto {
            quantity: 8,
            reason: "Damaged".into(),
            notes: None,
        };
        assert!(with_reason.validate(10).is_ok());
        assert_eq!(with_reason.delta(10), -2);
    }

    #[test]
    fn test_adjustment_rejects_negative_quantity() {
        let dto = StockAdjustmentDto {
            quantity: -1,
            reason: "Recount".into(),
            notes: None,
        };
        assert_eq!(dto.validate(0).unwrap_err().field, "quantity");
    }

    #[test]
    fn test_product_dto_validation() {
        let mut dto = ProductDto::from(&product(1, 1));
        assert!(dto.validate().is_ok());
        dto.sku = String::new();
        assert_eq!(dto.validate().unwrap_err().field, "sku");
        dto.sku = "X".into();
        dto.price = -1.0;
        assert_eq!(dto.validate().unwrap_err().field, "price");
    }
}
