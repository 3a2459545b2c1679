use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use thaw::*;

use super::view_model::ProductDetailsViewModel;
use crate::shared::api_utils::ApiClient;
use crate::shared::icons::icon;
use crate::shared::list_utils::parse_opt_f64;

#[component]
pub fn ProductDetails(
    existing: Option<Product>,
    client: ApiClient,
    #[prop(into)] on_saved: Callback<Option<Product>>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new(existing.as_ref());
    let form = vm.form;
    let saving = vm.saving;
    let title = if vm.is_edit_mode() { "Edit product" } else { "New product" };

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

                    <div class="form__group">
                        <label for="name">"Name"</label>
                        <input
                            type="text"
                            id="name"
                            prop:value=move || form.get().name
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </div>

                    <div class="form__group">
                        <label for="sku">"SKU"</label>
                        <input
                            type="text"
                            id="sku"
                            prop:value=move || form.get().sku
                            on:input=move |ev| form.update(|f| f.sku = event_target_value(&ev))
                        />
                    </div>

                    <div class="form__group">
                        <label for="category">"Category"</label>
                        <input
                            type="text"
                            id="category"
                            prop:value=move || form.get().category
                            on:input=move |ev| form.update(|f| f.category = event_target_value(&ev))
                        />
                    </div>

                    <div class="form__row">
                        <div class="form__group">
                            <label for="price">"Price"</label>
                            <input
                                type="number"
                                step="0.01"
                                id="price"
                                prop:value=move || form.get().price.to_string()
                                on:input=move |ev| {
                                    if let Some(v) = parse_opt_f64(&event_target_value(&ev)) {
                                        form.update(|f| f.price = v);
                                    }
                                }
                            />
                        </div>
                        <div class="form__group">
                            <label for="points">"Points"</label>
                            <input
                                type="number"
                                id="points"
                                prop:value=move || form.get().points.to_string()
                                on:input=move |ev| {
                                    if let Ok(v) = event_target_value(&ev).trim().parse::<i64>() {
                                        form.update(|f| f.points = v);
                                    }
                                }
                            />
                        </div>
                    </div>

                    <div class="form__row">
                        <div class="form__group">
                            <label for="stock">"Stock"</label>
                            <input
                                type="number"
                                id="stock"
                                prop:value=move || form.get().stock.to_string()
                                disabled=move || form.with(|f| f.id.is_some())
                                on:input=move |ev| {
                                    if let Ok(v) = event_target_value(&ev).trim().parse::<i64>() {
                                        form.update(|f| f.stock = v);
                                    }
                                }
                            />
                        </div>
                        <div class="form__group">
                            <label for="reorder_level">"Reorder level"</label>
                            <input
                                type="number"
                                id="reorder_level"
                                prop:value=move || form.get().reorder_level.to_string()
                                on:input=move |ev| {
                                    if let Ok(v) = event_target_value(&ev).trim().parse::<i64>() {
                                        form.update(|f| f.reorder_level = v);
                                    }
                                }
                            />
                        </div>
                    </div>

                    <div class="form__group">
                        <label for="description">"Description"</label>
                        <textarea
                            id="description"
                            prop:value=move || form.get().description.unwrap_or_default()
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                form.update(|f| {
                                    f.description = (!text.trim().is_empty()).then_some(text)
                                });
                            }
                        />
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
