use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use thaw::*;

use super::view_model::{StockAdjustmentViewModel, ADJUSTMENT_REASONS};
use crate::shared::api_utils::ApiClient;
use crate::shared::icons::icon;
use crate::shared::number_format::format_int;

#[component]
pub fn StockAdjustmentDialog(
    product: Product,
    client: ApiClient,
    #[prop(into)] on_saved: Callback<Option<Product>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let vm = StockAdjustmentViewModel::new(product);
    let title = format!("Adjust stock: {}", vm.product.name);
    let current = format_int(vm.product.stock);
    let saving = vm.saving;
    let error = vm.error;
    let quantity = vm.quantity;
    let reason = vm.reason;
    let notes = vm.notes;
    let delta = vm.delta_label();

    let on_save = move |_| vm.save_command(client.clone(), on_saved);

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <Label>"Current stock"</Label>
                        <span>{current}</span>
                    </div>

                    <div class="form__group">
                        <Label>"New quantity"</Label>
                        <Input
                            value=quantity
                            input_type=InputType::Number
                            disabled=Signal::derive(move || saving.get())
                        />
                        <span class="form__hint">{move || delta.get()}</span>
                    </div>

                    <div class="form__group">
                        <Label>"Reason"</Label>
                        <select
                            prop:value=move || reason.get()
                            on:change=move |ev| reason.set(event_target_value(&ev))
                            disabled=move || saving.get()
                        >
                            <option value="">"Select a reason"</option>
                            {ADJUSTMENT_REASONS
                                .iter()
                                .map(|r| view! { <option value=*r>{*r}</option> })
                                .collect_view()}
                        </select>
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
