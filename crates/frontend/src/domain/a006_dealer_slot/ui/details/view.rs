use contracts::domain::a006_dealer_slot::DealerSlot;
use contracts::enums::EntityStatus;
use leptos::prelude::*;
use thaw::*;

use super::view_model::DealerSlotDetailsViewModel;
use crate::shared::api_utils::ApiClient;
use crate::shared::icons::icon;

#[component]
pub fn DealerSlotDetails(
    existing: Option<DealerSlot>,
    next_slot: i64,
    /// Fixed client for client-scoped users
    client_id: Option<String>,
    client: ApiClient,
    #[prop(into)] on_saved: Callback<Option<DealerSlot>>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let client_fixed = client_id.is_some();
    let vm = DealerSlotDetailsViewModel::new(existing.as_ref(), next_slot, client_id);
    let form = vm.form;
    let saving = vm.saving;
    let title = if vm.is_edit_mode() { "Edit dealer slot" } else { "New dealer slot" };

    let on_save = move |_| vm.save_command(client.clone(), on_saved);

    view! {
        <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_cancel.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body details-form">
                    {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__row">
                        <div class="form__group">
                            <label for="slot_number">"Slot #"</label>
                            <input
                                type="number"
                                min="1"
                                id="slot_number"
                                prop:value=move || form.get().slot_number.to_string()
                                on:input=move |ev| {
                                    let v = event_target_value(&ev).trim().parse::<i64>().unwrap_or(0);
                                    form.update(|f| f.slot_number = v);
                                }
                            />
                        </div>
                        <div class="form__group">
                            <label for="status">"Status"</label>
                            <select
                                id="status"
                                prop:value=move || form.with(|f| f.status.code().to_string())
                                on:change=move |ev| {
                                    if let Some(s) = EntityStatus::from_code(&event_target_value(&ev)) {
                                        form.update(|f| f.status = s);
                                    }
                                }
                            >
                                {EntityStatus::all()
                                    .into_iter()
                                    .map(|s| view! { <option value=s.code()>{s.display_name()}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                    </div>

                    <div class="form__group">
                        <label for="dealer_name">"Dealer name"</label>
                        <input
                            type="text"
                            id="dealer_name"
                            prop:value=move || form.get().dealer_name
                            on:input=move |ev| form.update(|f| f.dealer_name = event_target_value(&ev))
                        />
                    </div>

                    <div class="form__row">
                        <div class="form__group">
                            <label for="dealer_email">"Email"</label>
                            <input
                                type="email"
                                id="dealer_email"
                                prop:value=move || form.get().dealer_email
                                on:input=move |ev| form.update(|f| f.dealer_email = event_target_value(&ev))
                            />
                        </div>
                        <div class="form__group">
                            <label for="phone">"Phone"</label>
                            <input
                                type="tel"
                                id="phone"
                                prop:value=move || form.get().phone
                                on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <Show when=move || !client_fixed>
                        <div class="form__group">
                            <label for="client_id">"Client ID"</label>
                            <input
                                type="text"
                                id="client_id"
                                prop:value=move || form.get().client_id.unwrap_or_default()
                                on:input=move |ev| {
                                    let text = event_target_value(&ev);
                                    form.update(|f| {
                                        f.client_id = (!text.trim().is_empty()).then(|| text.trim().to_string())
                                    });
                                }
                            />
                        </div>
                    </Show>

                    <div class="form__row">
                        <div class="form__group">
                            <label for="city">"City"</label>
                            <input
                                type="text"
                                id="city"
                                prop:value=move || form.get().address.city
                                on:input=move |ev| form.update(|f| f.address.city = event_target_value(&ev))
                            />
                        </div>
                        <div class="form__group">
                            <label for="state">"State"</label>
                            <input
                                type="text"
                                id="state"
                                prop:value=move || form.get().address.state
                                on:input=move |ev| form.update(|f| f.address.state = event_target_value(&ev))
                            />
                        </div>
                    </div>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                        disabled=Signal::derive(move || saving.get())
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_save
                        disabled=Signal::derive(move || saving.get())
                    >
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
