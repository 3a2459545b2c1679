use contracts::domain::a001_product::Product;
use contracts::domain::a002_purchase_request::{CreatePurchaseRequestDto, PurchaseRequest};
use contracts::shared::validation::ValidationError;
use leptos::prelude::*;

use crate::domain::a002_purchase_request::api;
use crate::shared::api_utils::ApiClient;

/// Build the request from raw form input. Quantity is checked against the
/// selected product's available stock when the product is in `products`.
pub fn build_request(
    product_id: &str,
    quantity: &str,
    notes: &str,
    client_id: Option<&str>,
    products: &[Product],
) -> Result<CreatePurchaseRequestDto, ValidationError> {
    let quantity = quantity
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::new("quantity", "Quantity must be a whole number"))?;
    let notes = notes.trim();
    let dto = CreatePurchaseRequestDto {
        product_id: product_id.trim().to_string(),
        client_id: client_id.map(str::to_string),
        quantity,
        notes: (!notes.is_empty()).then(|| notes.to_string()),
    };
    let available = products
        .iter()
        .find(|p| p.id == dto.product_id)
        .map(Product::available);
    dto.validate(available)?;
    Ok(dto)
}

#[derive(Clone)]
pub struct CreatePurchaseRequestViewModel {
    pub products: Vec<Product>,
    pub client_id: Option<String>,
    pub product_id: RwSignal<String>,
    pub quantity: RwSignal<String>,
    pub notes: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl CreatePurchaseRequestViewModel {
    pub fn new(products: Vec<Product>, preselected: Option<&Product>, client_id: Option<String>) -> Self {
        Self {
            product_id: RwSignal::new(preselected.map(|p| p.id.clone()).unwrap_or_default()),
            quantity: RwSignal::new("1".to_string()),
            notes: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            products,
            client_id,
        }
    }

    pub fn save_command(&self, client: ApiClient, on_created: Callback<Option<PurchaseRequest>>) {
        let dto = match build_request(
            &self.product_id.get_untracked(),
            &self.quantity.get_untracked(),
            &self.notes.get_untracked(),
            self.client_id.as_deref(),
            &self.products,
        ) {
            Ok(dto) => dto,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                return;
            }
        };

        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::create_request(&client, &dto).await {
                Ok(created) => {
                    log::info!("purchase request for {} x{} submitted", dto.product_id, dto.quantity);
                    saving.set(false);
                    on_created.try_run(created);
                }
                Err(e) => {
                    log::warn!("purchase request submission failed: {}", e);
                    error.set(Some(e.to_string()));
                    saving.set(false);
                }
            }
        });
    }
}
