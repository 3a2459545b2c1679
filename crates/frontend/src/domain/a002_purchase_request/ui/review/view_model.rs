use contracts::domain::a002_purchase_request::{PurchaseRequest, RejectPurchaseRequestDto};
use leptos::prelude::*;

use crate::domain::a002_purchase_request::api;
use crate::shared::api_utils::ApiClient;
use crate::system::auth::storage;

/// Approve `id`. On success the inventory page is told to refetch, since
/// approval moves stock server-side.
pub fn approve_command(
    client: ApiClient,
    id: String,
    busy: RwSignal<Option<String>>,
    error: RwSignal<Option<String>>,
    on_done: Callback<Option<PurchaseRequest>>,
) {
    busy.set(Some(id.clone()));
    error.set(None);
    wasm_bindgen_futures::spawn_local(async move {
        match api::approve_request(&client, &id).await {
            Ok(updated) => {
                log::info!("purchase request {} approved", id);
                storage::raise_inventory_refresh();
                busy.set(None);
                on_done.try_run(updated);
            }
            Err(e) => {
                log::warn!("approving purchase request {} failed: {}", id, e);
                error.set(Some(e.to_string()));
                busy.set(None);
            }
        }
    });
}

#[derive(Clone)]
pub struct RejectRequestViewModel {
    pub request: PurchaseRequest,
    pub reason: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl RejectRequestViewModel {
    pub fn new(request: PurchaseRequest) -> Self {
        Self {
            request,
            reason: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn save_command(&self, client: ApiClient, on_done: Callback<Option<PurchaseRequest>>) {
        let dto = RejectPurchaseRequestDto {
            reason: self.reason.get_untracked().trim().to_string(),
        };
        if let Err(e) = dto.validate() {
            self.error.set(Some(e.to_string()));
            return;
        }

        let id = self.request.id.clone();
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::reject_request(&client, &id, &dto).await {
                Ok(updated) => {
                    log::info!("purchase request {} rejected", id);
                    saving.set(false);
                    on_done.try_run(updated);
                }
                Err(e) => {
                    log::warn!("rejecting purchase request {} failed: {}", id, e);
                    error.set(Some(e.to_string()));
                    saving.set(false);
                }
            }
        });
    }
}
