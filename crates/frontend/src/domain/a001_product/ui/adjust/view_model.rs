use contracts::domain::a001_product::{Product, StockAdjustmentDto};
use contracts::shared::validation::ValidationError;
use leptos::prelude::*;

use crate::domain::a001_product::api;
use crate::shared::api_utils::ApiClient;

/// Reasons offered in the dialog; free text is accepted as well
pub const ADJUSTMENT_REASONS: &[&str] = &[
    "Restock",
    "Damaged",
    "Returned",
    "Inventory count correction",
    "Other",
];

/// Build the adjustment from raw form input.
///
/// Runs the same checks the save command runs before any request is sent.
pub fn parse_adjustment(
    quantity: &str,
    reason: &str,
    notes: &str,
    current_stock: i64,
) -> Result<StockAdjustmentDto, ValidationError> {
    let quantity = quantity
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::new("quantity", "Quantity must be a whole number"))?;
    let notes = notes.trim();
    let dto = StockAdjustmentDto {
        quantity,
        reason: reason.trim().to_string(),
        notes: (!notes.is_empty()).then(|| notes.to_string()),
    };
    dto.validate(current_stock)?;
    Ok(dto)
}

#[derive(Clone)]
pub struct StockAdjustmentViewModel {
    pub product: Product,
    pub quantity: RwSignal<String>,
    pub reason: RwSignal<String>,
    pub notes: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl StockAdjustmentViewModel {
    pub fn new(product: Product) -> Self {
        Self {
            quantity: RwSignal::new(product.stock.to_string()),
            reason: RwSignal::new(String::new()),
            notes: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            product,
        }
    }

    /// Signed change shown under the quantity field
    pub fn delta_label(&self) -> Signal<String> {
        let quantity = self.quantity;
        let current = self.product.stock;
        Signal::derive(move || match quantity.get().trim().parse::<i64>() {
            Ok(q) if q > current => format!("+{}", q - current),
            Ok(q) if q < current => format!("{}", q - current),
            Ok(_) => "no change".to_string(),
            Err(_) => String::new(),
        })
    }

    /// Validate, then submit. The list receives the server's copy of the
    /// product, or `None` if it must refetch.
    pub fn save_command(&self, client: ApiClient, on_saved: Callback<Option<Product>>) {
        let dto = match parse_adjustment(
            &self.quantity.get_untracked(),
            &self.reason.get_untracked(),
            &self.notes.get_untracked(),
            self.product.stock,
        ) {
            Ok(dto) => dto,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                return;
            }
        };

        let product_id = self.product.id.clone();
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::adjust_stock(&client, &product_id, &dto).await {
                Ok(returned) => {
                    log::info!("stock of {} set to {}", product_id, dto.quantity);
                    saving.set(false);
                    on_saved.try_run(returned);
                }
                Err(e) => {
                    log::warn!("stock adjustment of {} failed: {}", product_id, e);
                    error.set(Some(e.to_string()));
                    saving.set(false);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changed_quantity_without_reason_is_blocked() {
        let err = parse_adjustment("12", "  ", "", 10).unwrap_err();
        assert_eq!(err.field, "reason");
    }

    #[test]
    fn test_negative_and_garbage_quantity() {
        assert_eq!(parse_adjustment("-1", "Damaged", "", 10).unwrap_err().field, "quantity");
        assert_eq!(parse_adjustment("ten", "Damaged", "", 10).unwrap_err().field, "quantity");
    }

    #[test]
    fn test_valid_adjustment() {
        let dto = parse_adjustment(" 4 ", "Damaged", " crushed pallet ", 10).unwrap();
        assert_eq!(dto.quantity, 4);
        assert_eq!(dto.delta(10), -6);
        assert_eq!(dto.notes.as_deref(), Some("crushed pallet"));

        let unchanged = parse_adjustment("10", "", "", 10).unwrap();
        assert_eq!(unchanged.notes, None);
    }
}
