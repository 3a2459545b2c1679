use contracts::domain::a001_product::{Product, ProductDto};
use leptos::prelude::*;

use crate::domain::a001_product::api;
use crate::shared::api_utils::ApiClient;

/// ViewModel for the product form
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ProductDetailsViewModel {
    pub fn new(existing: Option<&Product>) -> Self {
        Self {
            form: RwSignal::new(existing.map(ProductDto::from).unwrap_or_default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with_untracked(|f| f.id.is_some())
    }

    pub fn save_command(&self, client: ApiClient, on_saved: Callback<Option<Product>>) {
        let current = self.form.get_untracked();
        if let Err(e) = current.validate() {
            self.error.set(Some(e.to_string()));
            return;
        }

        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::save_product(&client, &current).await {
                Ok(returned) => {
                    log::info!("product {} saved", current.sku);
                    saving.set(false);
                    on_saved.try_run(returned);
                }
                Err(e) => {
                    log::warn!("saving product {} failed: {}", current.sku, e);
                    error.set(Some(e.to_string()));
                    saving.set(false);
                }
            }
        });
    }
}
