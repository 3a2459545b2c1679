use contracts::domain::a001_product::Product;
use contracts::domain::a002_purchase_request::PurchaseRequest;
use leptos::prelude::*;
use thaw::*;

use super::view_model::CreatePurchaseRequestViewModel;
use crate::shared::api_utils::ApiClient;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_int, format_money};
use crate::system::auth::context::Session;

#[component]
pub fn CreatePurchaseRequestDialog(
    /// Products the client can choose from
    products: Vec<Product>,
    #[prop(optional)] preselected: Option<Product>,
    client: ApiClient,
    session: Session,
    #[prop(into)] on_created: Callback<Option<PurchaseRequest>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let vm = CreatePurchaseRequestViewModel::new(
        products,
        preselected.as_ref(),
        session.client_id().map(str::to_string),
    );
    let product_id = vm.product_id;
    let quantity = vm.quantity;
    let notes = vm.notes;
    let error = vm.error;
    let saving = vm.saving;

    let options: Vec<(String, String)> = vm
        .products
        .iter()
        .filter(|p| p.available() > 0 || Some(&p.id) == preselected.as_ref().map(|s| &s.id))
        .map(|p| (p.id.clone(), format!("{} ({}), {} available", p.name, p.sku, format_int(p.available()))))
        .collect();

    let selected_summary = {
        let products = vm.products.clone();
        Signal::derive(move || {
            let id = product_id.get();
            let qty = quantity.get().trim().parse::<i64>().unwrap_or(0);
            products
                .iter()
                .find(|p| p.id == id)
                .map(|p| {
                    format!(
                        "Total {} / {} points",
                        format_money(p.price * qty as f64),
                        format_int(p.points * qty)
                    )
                })
                .unwrap_or_default()
        })
    };

    let on_submit = move |_| vm.save_command(client.clone(), on_created);

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">"New purchase request"</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <Label>"Product"</Label>
                        <select
                            prop:value=move || product_id.get()
                            on:change=move |ev| product_id.set(event_target_value(&ev))
                            disabled=move || saving.get()
                        >
                            <option value="">"Select a product"</option>
                            {options
                                .into_iter()
                                .map(|(id, label)| view! { <option value=id>{label}</option> })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="form__group">
                        <Label>"Quantity"</Label>
                        <Input
                            value=quantity
                            input_type=InputType::Number
                            disabled=Signal::derive(move || saving.get())
                        />
                        <span class="form__hint">{move || selected_summary.get()}</span>
                    </div>

                    <div class="form__group">
                        <Label>"Notes"</Label>
                        <Textarea value=notes disabled=Signal::derive(move || saving.get()) />
                    </div>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                        disabled=Signal::derive(move || saving.get())
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_submit
                        disabled=Signal::derive(move || saving.get())
                    >
                        {move || if saving.get() { "Submitting..." } else { "Submit request" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
