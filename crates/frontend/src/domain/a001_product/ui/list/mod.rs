mod state;

pub use state::{categories, create_state, ProductListState};

use contracts::domain::a001_product::{InventoryStatus, Product};
use contracts::domain::a002_purchase_request::PurchaseRequest;
use contracts::enums::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_product::api;
use crate::domain::a001_product::ui::adjust::StockAdjustmentDialog;
use crate::domain::a001_product::ui::details::ProductDetails;
use crate::domain::a002_purchase_request::ui::create::CreatePurchaseRequestDialog;
use crate::shared::api_utils::ApiClient;
use crate::shared::components::ui::Badge;
use crate::shared::components::{ErrorBanner, FilterPanel, PageHeader};
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
use crate::system::auth::storage;

#[component]
pub fn ProductList(session: Session) -> impl IntoView {
    let config = use_config();
    let auth_state = use_auth();
    let min_search_len = config.list.min_search_len;
    let client = ApiClient::for_session(&config, &session);
    let resource = ListResource::<Product>::new(config.auth.relogin_after_failures);
    let state = create_state();
    let filters_expanded = RwSignal::new(false);

    let is_admin = session.is_admin_level();
    let can_request = session.role() == Role::Client;

    let adjusting: RwSignal<Option<Product>> = RwSignal::new(None);
    // Some(None) opens the form for a new product
    let editing: RwSignal<Option<Option<Product>>> = RwSignal::new(None);
    let requesting: RwSignal<Option<Product>> = RwSignal::new(None);

    let load_data = {
        let client = client.clone();
        let session = session.clone();
        Callback::new(move |_: ()| {
            let ticket = resource.begin();
            let client = client.clone();
            let session = session.clone();
            spawn_local(async move {
                let resolved = api::fetch_inventory(&client, &session).await;
                resource.finish(ticket, resolved);
            });
        })
    };

    // Mounting fetches anyway, so a flag raised before now is stale
    storage::take_inventory_refresh();
    load_data.run(());

    // Approvals move stock server-side; pick them up while this page is open
    if let Some(period) = config.auto_refresh_millis() {
        poll_while_mounted(period, move || {
            if storage::take_inventory_refresh() {
                log::info!("inventory refresh requested by a purchase request approval");
                load_data.run(());
            }
        });
    }

    let visible = Memo::new(move |_| {
        state.with(|s| resource.items.with(|items| s.apply(items, min_search_len)))
    });
    let category_options = Memo::new(move |_| resource.items.with(|items| categories(items)));
    let low_count = Memo::new(move |_| {
        resource
            .items
            .with(|items| items.iter().filter(|p| p.status() != InventoryStatus::InStock).count())
    });

    let stock_value = Memo::new(move |_| {
        resource.items.with(|items| items.iter().map(Product::stock_value).sum::<f64>())
    });

    let on_record_saved = Callback::new(move |returned: Option<Product>| {
        adjusting.set(None);
        editing.set(None);
        match returned {
            Some(product) => resource.upsert(product),
            None => load_data.run(()),
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
    let min_price = RwSignal::new(String::new());
    let max_price = RwSignal::new(String::new());
    Effect::new(move |_| {
        let (min, max) = (min_price.get(), max_price.get());
        state.update(|s| {
            s.min_price = min;
            s.max_price = max;
        });
    });

    let dialog_client = client.clone();
    let details_client = client.clone();
    let request_client = client.clone();
    let request_session = session.clone();

    view! {
        <PageFrame page_id="a001_product--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Inventory"
                subtitle=Signal::derive(move || format!(
                    "{} products, {} need attention, {} in stock",
                    resource.items.with(|i| i.len()),
                    low_count.get(),
                    format_money(stock_value.get())
                ))
            >
                <Show when=move || is_admin>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(Some(None))
                    >
                        {icon("plus")}
                        " New product"
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

                <FilterPanel
                    is_expanded=filters_expanded
                    active_filters_count=active_filters
                    on_clear=Callback::new(move |_: ()| {
                        min_price.set(String::new());
                        max_price.set(String::new());
                        state.update(|s| s.clear_filters());
                    })
                >
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput
                            value=search
                            on_change=Callback::new(move |text: String| state.update(|s| s.search = text))
                            placeholder="Name, SKU or description"
                        />
                        <select
                            prop:value=move || state.with(|s| s.category.clone())
                            on:change=move |ev| state.update(|s| s.category = event_target_value(&ev))
                        >
                            <option value="">"All categories"</option>
                            {move || category_options
                                .get()
                                .into_iter()
                                .map(|c| view! { <option value=c.clone()>{c.clone()}</option> })
                                .collect_view()}
                        </select>
                        <select
                            prop:value=move || state.with(|s| s.status.clone())
                            on:change=move |ev| state.update(|s| s.status = event_target_value(&ev))
                        >
                            <option value="">"All statuses"</option>
                            {InventoryStatus::all()
                                .into_iter()
                                .map(|st| view! { <option value=st.code()>{st.display_name()}</option> })
                                .collect_view()}
                        </select>
                        <div style="max-width: 120px;">
                            <Input value=min_price placeholder="Min price" />
                        </div>
                        <div style="max-width: 120px;">
                            <Input value=max_price placeholder="Max price" />
                        </div>
                    </Flex>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Name" field="name" sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                <SortableHeaderCell label="SKU" field="sku" sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                <SortableHeaderCell label="Category" field="category" sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                <SortableHeaderCell label="Price" field="price" sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                <SortableHeaderCell label="Stock" field="stock" sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                <TableHeaderCell>"Reorder at"</TableHeaderCell>
                                <SortableHeaderCell label="Status" field="status" sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                <SortableHeaderCell label="Updated" field="last_updated" sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|p| (p.id.clone(), p.stock, p.last_updated)
                                children=move |product| {
                                    let status = product.status();
                                    let for_adjust = product.clone();
                                    let for_edit = product.clone();
                                    let for_request = product.clone();
                                    let out_of_stock = status == InventoryStatus::OutOfStock;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{product.name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{product.sku.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{product.category.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{format_money(product.price)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{format_int(product.stock)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{format_int(product.reorder_level)}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge variant=status.badge_variant()>{status.display_name()}</Badge>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_datetime(product.last_updated.as_ref())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Show when=move || is_admin>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click={
                                                            let p = for_adjust.clone();
                                                            move |_| adjusting.set(Some(p.clone()))
                                                        }
                                                        attr:title="Adjust stock"
                                                    >
                                                        {icon("inventory")}
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click={
                                                            let p = for_edit.clone();
                                                            move |_| editing.set(Some(Some(p.clone())))
                                                        }
                                                        attr:title="Edit"
                                                    >
                                                        {icon("edit")}
                                                    </Button>
                                                </Show>
                                                <Show when=move || can_request>
                                                    <Button
                                                        appearance=ButtonAppearance::Secondary
                                                        disabled=out_of_stock
                                                        on_click={
                                                            let p = for_request.clone();
                                                            move |_| requesting.set(Some(p.clone()))
                                                        }
                                                    >
                                                        "Request"
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
                        <div class="empty-state">"No products match the current filters."</div>
                    </Show>
                </div>

                {move || adjusting.get().map(|product| view! {
                    <StockAdjustmentDialog
                        product=product
                        client=dialog_client.clone()
                        on_saved=on_record_saved
                        on_close=Callback::new(move |_: ()| adjusting.set(None))
                    />
                })}

                {move || editing.get().map(|existing| view! {
                    <ProductDetails
                        existing=existing
                        client=details_client.clone()
                        on_saved=on_record_saved
                        on_cancel=Callback::new(move |_: ()| editing.set(None))
                    />
                })}

                {move || requesting.get().map(|product| view! {
                    <CreatePurchaseRequestDialog
                        products=resource.items.get_untracked()
                        preselected=product
                        client=request_client.clone()
                        session=request_session.clone()
                        on_created=Callback::new(move |_: Option<PurchaseRequest>| {
                            requesting.set(None);
                            load_data.run(());
                        })
                        on_close=Callback::new(move |_: ()| requesting.set(None))
                    />
                })}
            </div>
        </PageFrame>
    }
}
