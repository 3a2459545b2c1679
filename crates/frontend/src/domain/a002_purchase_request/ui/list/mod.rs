mod state;

pub use state::{create_state, status_counts, PurchaseRequestListState};

use contracts::domain::a001_product::Product;
use contracts::domain::a002_purchase_request::{PurchaseRequest, PurchaseRequestStatus};
use contracts::enums::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_product::api as product_api;
use crate::domain::a002_purchase_request::api;
use crate::domain::a002_purchase_request::ui::create::CreatePurchaseRequestDialog;
use crate::domain::a002_purchase_request::ui::review::{approve_command, RejectRequestDialog};
use crate::shared::api_utils::ApiClient;
use crate::shared::components::ui::Badge;
use crate::shared::components::{ActionErrorBanner, ErrorBanner, FilterPanel, PageHeader};
use crate::shared::config::use_config;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_resource::ListResource;
use crate::shared::list_utils::{toggle_sort, SearchInput, SortableHeaderCell};
use crate::shared::number_format::{format_int, format_money};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::polling::poll_while_mounted;
use crate::system::auth::context::{sign_out, use_auth, Session};

#[component]
pub fn PurchaseRequestList(session: Session) -> impl IntoView {
    let config = use_config();
    let auth_state = use_auth();
    let min_search_len = config.list.min_search_len;
    let client = ApiClient::for_session(&config, &session);
    let resource = ListResource::<PurchaseRequest>::new(config.auth.relogin_after_failures);
    let state = create_state();
    let filters_expanded = RwSignal::new(false);

    let can_review = session.is_admin_level();
    let can_create = session.role() == Role::Client;

    let products: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
    let creating = RwSignal::new(false);
    let rejecting: RwSignal<Option<PurchaseRequest>> = RwSignal::new(None);
    let approving: RwSignal<Option<String>> = RwSignal::new(None);

    let load_data = {
        let client = client.clone();
        let session = session.clone();
        Callback::new(move |_: ()| {
            let ticket = resource.begin();
            let client = client.clone();
            let session = session.clone();
            spawn_local(async move {
                let resolved = api::fetch_requests(&client, &session).await;
                resource.finish(ticket, resolved);
            });
        })
    };
    load_data.run(());

    if can_create {
        let client = client.clone();
        let session = session.clone();
        spawn_local(async move {
            let resolved = product_api::fetch_inventory(&client, &session).await;
            products.set(resolved.items);
        });
    }

    // Re-run the same fetch periodically until the page is unmounted
    if let Some(period) = config.auto_refresh_millis() {
        poll_while_mounted(period, move || {
            log::debug!("auto-refreshing purchase requests");
            load_data.run(());
        });
    }

    let visible = Memo::new(move |_| {
        state.with(|s| resource.items.with(|items| s.apply(items, min_search_len)))
    });
    let counts = Memo::new(move |_| resource.items.with(|items| status_counts(items)));

    let on_changed = Callback::new(move |updated: Option<PurchaseRequest>| {
        rejecting.set(None);
        creating.set(false);
        // A rejection echoed back without its reason still needs the enriched fetch
        match updated {
            Some(request) if !request.needs_rejection_reason() => resource.upsert(request),
            _ => load_data.run(()),
        }
    });

    let sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort_ascending));
    let on_sort = Callback::new(move |field: &'static str| {
        state.update(|s| {
            let (f, asc) = toggle_sort(&s.sort_field, s.sort_ascending, field);
            s.sort_field = f;
            s.sort_ascending = asc;
        })
    });

    let search = Signal::derive(move || state.with(|s| s.search.clone()));
    let active_filters = Signal::derive(move || state.with(|s| s.active_filter_count()));

    let action_client = client.clone();
    let reject_client = client.clone();
    let create_client = client.clone();
    let create_session = session.clone();

    view! {
        <PageFrame page_id="a002_purchase_request--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Purchase requests"
                subtitle=Signal::derive(move || {
                    let (pending, approved, rejected) = counts.get();
                    format!("{} pending, {} approved, {} rejected", pending, approved, rejected)
                })
            >
                <Show when=move || can_create>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| creating.set(true)>
                        {icon("plus")}
                        " New request"
                    </Button>
                </Show>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_data.run(())
                    disabled=Signal::derive(move || resource.loading.get())
                >
                    {icon("refresh")}
                    {move || if resource.loading.get() { " Loading..." } else { " Refresh" }}
                </Button>
            </PageHeader>

            <div class="page__content">
                <ErrorBanner
                    error=resource.error_signal()
                    on_retry=load_data
                    relogin=resource.needs_relogin()
                    on_relogin=Callback::new(move |_: ()| sign_out(auth_state))
                />
                <ActionErrorBanner error=resource.action_error />

                <FilterPanel
                    is_expanded=filters_expanded
                    active_filters_count=active_filters
                    on_clear=Callback::new(move |_: ()| state.update(|s| s.clear_filters()))
                >
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput
                            value=search
                            on_change=Callback::new(move |text: String| state.update(|s| s.search = text))
                            placeholder="Product, client, notes or reason"
                        />
                        <select
                            prop:value=move || state.with(|s| s.status.clone())
                            on:change=move |ev| state.update(|s| s.status = event_target_value(&ev))
                        >
                            <option value="">"All statuses"</option>
                            {PurchaseRequestStatus::all()
                                .into_iter()
                                .map(|st| view! { <option value=st.code()>{st.display_name()}</option> })
                                .collect_view()}
                        </select>
                        <input
                            type="date"
                            prop:value=move || state.with(|s| s.date_from.clone())
                            on:change=move |ev| state.update(|s| s.date_from = event_target_value(&ev))
                        />
                        <input
                            type="date"
                            prop:value=move || state.with(|s| s.date_to.clone())
                            on:change=move |ev| state.update(|s| s.date_to = event_target_value(&ev))
                        />
                    </Flex>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Created" field="created_at" sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                <SortableHeaderCell label="Product" field="product" sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                <TableHeaderCell>"Client"</TableHeaderCell>
                                <SortableHeaderCell label="Quantity" field="quantity" sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                <SortableHeaderCell label="Total" field="total" sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                <SortableHeaderCell label="Status" field="status" sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                <TableHeaderCell>"Notes / reason"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|r| (r.id.clone(), r.status, r.rejection_reason.clone())
                                children=move |request| {
                                    let status = request.status;
                                    let pending = request.is_pending();
                                    let detail = request
                                        .rejection_reason
                                        .clone()
                                        .map(|r| format!("Rejected: {}", r))
                                        .or_else(|| request.notes.clone())
                                        .unwrap_or_default();
                                    let id = request.id.clone();
                                    let for_reject = request.clone();
                                    let row_client = action_client.clone();
                                    let client_label = request.client.label().to_string();
                                    let created_at = format_datetime(request.created_at.as_ref());
                                    let product_label = request.product.label().to_string();
                                    let quantity = format_int(request.quantity);
                                    let total = format_money(request.total());
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{created_at}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{product_label}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{client_label}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{quantity}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{total}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge variant=status.badge_variant()>{status.display_name()}</Badge>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout truncate=true>{detail}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <Show when=move || can_review && pending>
                                                    <Button
                                                        appearance=ButtonAppearance::Primary
                                                        disabled=Signal::derive(move || approving.get().is_some())
                                                        on_click={
                                                            let id = id.clone();
                                                            let client = row_client.clone();
                                                            move |_| approve_command(
                                                                client.clone(),
                                                                id.clone(),
                                                                approving,
                                                                resource.action_error,
                                                                on_changed,
                                                            )
                                                        }
                                                    >
                                                        {icon("check")}
                                                        " Approve"
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Secondary
                                                        on_click={
                                                            let r = for_reject.clone();
                                                            move |_| rejecting.set(Some(r.clone()))
                                                        }
                                                    >
                                                        {icon("x")}
                                                        " Reject"
                                                    </Button>
                                                </Show>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || resource.is_loaded.get() && visible.with(|v| v.is_empty())>
                        <div class="empty-state">"No purchase requests."</div>
                    </Show>
                </div>

                {move || rejecting.get().map(|request| view! {
                    <RejectRequestDialog
                        request=request
                        client=reject_client.clone()
                        on_done=on_changed
                        on_close=Callback::new(move |_: ()| rejecting.set(None))
                    />
                })}

                {move || creating.get().then(|| view! {
                    <CreatePurchaseRequestDialog
                        products=products.get_untracked()
                        client=create_client.clone()
                        session=create_session.clone()
                        on_created=on_changed
                        on_close=Callback::new(move |_: ()| creating.set(false))
                    />
                })}
            </div>
        </PageFrame>
    }
}
