use contracts::domain::a005_organization::Organization;
use contracts::enums::EntityStatus;
use leptos::prelude::*;
use thaw::*;

use super::view_model::OrganizationDetailsViewModel;
use crate::shared::api_utils::ApiClient;
use crate::shared::icons::icon;

#[component]
pub fn OrganizationDetails(
    existing: Option<Organization>,
    client: ApiClient,
    #[prop(into)] on_saved: Callback<Option<Organization>>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = OrganizationDetailsViewModel::new(existing.as_ref());
    let form = vm.form;
    let saving = vm.saving;
    let is_edit = form.with_untracked(|f| f.is_edit());
    let title = if is_edit { "Edit organization" } else { "Provision organization" };

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
                            <label for="name">"Organization name"</label>
                            <input
                                type="text"
                                id="name"
                                prop:value=move || form.get().name
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            />
                        </div>
                        <div class="form__group">
                            <label for="code">"Code"</label>
                            <input
                                type="text"
                                id="code"
                                prop:value=move || form.get().code
                                on:input=move |ev| form.update(|f| f.code = event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="form__row">
                        <div class="form__group">
                            <label for="admin_name">"Admin name"</label>
                            <input
                                type="text"
                                id="admin_name"
                                prop:value=move || form.get().admin_name
                                on:input=move |ev| form.update(|f| f.admin_name = event_target_value(&ev))
                            />
                        </div>
                        <div class="form__group">
                            <label for="admin_email">"Admin email"</label>
                            <input
                                type="email"
                                id="admin_email"
                                prop:value=move || form.get().admin_email
                                on:input=move |ev| form.update(|f| f.admin_email = event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <Show when=move || is_edit>
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
                        {move || if saving.get() { "Saving..." } else if is_edit { "Save" } else { "Provision" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
