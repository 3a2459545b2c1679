use contracts::domain::a002_purchase_request::PurchaseRequest;
use leptos::prelude::*;
use thaw::*;

use super::view_model::RejectRequestViewModel;
use crate::shared::api_utils::ApiClient;
use crate::shared::icons::icon;

#[component]
pub fn RejectRequestDialog(
    request: PurchaseRequest,
    client: ApiClient,
    #[prop(into)] on_done: Callback<Option<PurchaseRequest>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let vm = RejectRequestViewModel::new(request);
    let summary = format!(
        "{} x{} for {}",
        vm.request.product.label(),
        vm.request.quantity,
        vm.request.client.label()
    );
    let reason = vm.reason;
    let error = vm.error;
    let saving = vm.saving;

    let on_reject = move |_| vm.save_command(client.clone(), on_done);

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">"Reject request"</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>
                <div class="modal-body">
                    <p>{summary}</p>
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                    <div class="form__group">
                        <Label>"Reason"</Label>
                        <Textarea
                            value=reason
                            placeholder="Shown to the client"
                            disabled=Signal::derive(move || saving.get())
                        />
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
                        on_click=on_reject
                        disabled=Signal::derive(move || saving.get() || reason.with(|r| r.trim().is_empty()))
                    >
                        {move || if saving.get() { "Rejecting..." } else { "Reject" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
