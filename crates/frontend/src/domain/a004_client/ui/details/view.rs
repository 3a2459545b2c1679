use contracts::domain::a004_client::Client;
use contracts::enums::EntityStatus;
use leptos::prelude::*;
use thaw::*;

use super::view_model::ClientDetailsViewModel;
use crate::shared::api_utils::ApiClient;
use crate::shared::icons::icon;

#[component]
pub fn ClientDetails(
    existing: Option<Client>,
    client: ApiClient,
    #[prop(into)] on_saved: Callback<Option<Client>>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ClientDetailsViewModel::new(existing.as_ref());
    let form = vm.form;
    let saving = vm.saving;
    let title = if vm.is_edit_mode() { "Edit client" } else { "New client" };

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
                            <label for="name">"Contact name"</label>
                            <input
                                type="text"
                                id="name"
                                prop:value=move || form.get().name
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
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

                    <div class="form__row">
                        <div class="form__group">
                            <label for="email">"Email"</label>
                            <input
                                type="email"
                                id="email"
                                prop:value=move || form.get().email
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
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

                    <h3 class="details-form__section">"Company"</h3>
                    <div class="form__row">
                        <div class="form__group">
                            <label for="company_name">"Company name"</label>
                            <input
                                type="text"
                                id="company_name"
                                prop:value=move || form.get().company.name
                                on:input=move |ev| form.update(|f| f.company.name = event_target_value(&ev))
                            />
                        </div>
                        <div class="form__group">
                            <label for="tax_id">"Tax ID"</label>
                            <input
                                type="text"
                                id="tax_id"
                                prop:value=move || form.get().company.tax_id
                                on:input=move |ev| form.update(|f| f.company.tax_id = event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <h3 class="details-form__section">"Address"</h3>
                    <div class="form__group">
                        <label for="street">"Street"</label>
                        <input
                            type="text"
                            id="street"
                            prop:value=move || form.get().address.street
                            on:input=move |ev| form.update(|f| f.address.street = event_target_value(&ev))
                        />
                    </div>
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
                            <label for="zip">"Zip code"</label>
                            <input
                                type="text"
                                id="zip"
                                prop:value=move || form.get().address.zip_code
                                on:input=move |ev| form.update(|f| f.address.zip_code = event_target_value(&ev))
                            />
                        </div>
                        <div class="form__group">
                            <label for="country">"Country"</label>
                            <input
                                type="text"
                                id="country"
                                prop:value=move || form.get().address.country
                                on:input=move |ev| form.update(|f| f.address.country = event_target_value(&ev))
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
