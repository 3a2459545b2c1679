use contracts::domain::a004_client::{Client, ClientDto};
use leptos::prelude::*;

use crate::domain::a004_client::api;
use crate::shared::api_utils::ApiClient;

#[derive(Clone, Copy)]
pub struct ClientDetailsViewModel {
    pub form: RwSignal<ClientDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ClientDetailsViewModel {
    pub fn new(existing: Option<&Client>) -> Self {
        Self {
            form: RwSignal::new(existing.map(ClientDto::from).unwrap_or_default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with_untracked(|f| f.id.is_some())
    }

    pub fn save_command(&self, client: ApiClient, on_saved: Callback<Option<Client>>) {
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
            match api::save_client(&client, &current).await {
                Ok(returned) => {
                    log::info!("client {} saved", current.email);
                    saving.set(false);
                    on_saved.try_run(returned);
                }
                Err(e) => {
                    log::warn!("saving client {} failed: {}", current.email, e);
                    error.set(Some(e.to_string()));
                    saving.set(false);
                }
            }
        });
    }
}
