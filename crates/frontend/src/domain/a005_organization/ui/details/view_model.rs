use contracts::domain::a005_organization::{Organization, OrganizationDto};
use leptos::prelude::*;

use crate::domain::a005_organization::api;
use crate::shared::api_utils::ApiClient;

#[derive(Clone, Copy)]
pub struct OrganizationDetailsViewModel {
    pub form: RwSignal<OrganizationDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl OrganizationDetailsViewModel {
    pub fn new(existing: Option<&Organization>) -> Self {
        Self {
            form: RwSignal::new(existing.map(OrganizationDto::from).unwrap_or_default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn save_command(&self, client: ApiClient, on_saved: Callback<Option<Organization>>) {
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
            match api::save_organization(&client, &current).await {
                Ok(returned) => {
                    if current.is_edit() {
                        log::info!("organization {} updated", current.name);
                    } else {
                        log::info!("organization {} provisioned", current.name);
                    }
                    saving.set(false);
                    on_saved.try_run(returned);
                }
                Err(e) => {
                    log::warn!("saving organization {} failed: {}", current.name, e);
                    error.set(Some(e.to_string()));
                    saving.set(false);
                }
            }
        });
    }
}
