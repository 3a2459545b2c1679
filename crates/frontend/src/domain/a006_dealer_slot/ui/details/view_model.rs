use contracts::domain::a006_dealer_slot::{DealerSlot, DealerSlotDto};
use leptos::prelude::*;

use crate::domain::a006_dealer_slot::api;
use crate::shared::api_utils::ApiClient;

#[derive(Clone, Copy)]
pub struct DealerSlotDetailsViewModel {
    pub form: RwSignal<DealerSlotDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl DealerSlotDetailsViewModel {
    /// New slots are pre-filled with `next_slot` and, for client users,
    /// their own client id
    pub fn new(existing: Option<&DealerSlot>, next_slot: i64, client_id: Option<String>) -> Self {
        let dto = match existing {
            Some(slot) => DealerSlotDto::from(slot),
            None => DealerSlotDto {
                slot_number: next_slot,
                client_id,
                ..Default::default()
            },
        };
        Self {
            form: RwSignal::new(dto),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with_untracked(|f| f.id.is_some())
    }

    pub fn save_command(&self, client: ApiClient, on_saved: Callback<Option<DealerSlot>>) {
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
            match api::save_dealer_slot(&client, &current).await {
                Ok(returned) => {
                    log::info!("dealer slot #{} saved", current.slot_number);
                    saving.set(false);
                    on_saved.try_run(returned);
                }
                Err(e) => {
                    log::warn!("saving dealer slot #{} failed: {}", current.slot_number, e);
                    error.set(Some(e.to_string()));
                    saving.set(false);
                }
            }
        });
    }
}
