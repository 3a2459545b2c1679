mod state;

pub use state::{create_state, totals, OrderListState};

use contracts::domain::a007_order::{Order, OrderStatus};
use contracts::enums::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a007_order::api;
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
use crate::system::auth::context::{sign_out, use_auth, Session};

fn items_summary(order: &Order) -> String {
    match order.items.as_slice() {
        [] => String::new(),
        [only] => format!("{} x{}", only.product.label(), only.quantity),
        [first, rest @ ..] => format!("{} x{} +{} more", first.product.label(), first.quantity, rest.len()),
    }
}

#[component]
pub fn OrderList(session: Session) -> impl IntoView {
    let config = use_config();
    let auth_state = use_auth();
    let min_search_len = config.list.min_search_len;
    let client = ApiClient::for_session(&config, &session);
    let resource = ListResource::<Order>::new(config.auth.relogin_after_failures);
    let state = create_state();
    let filters_expanded = RwSignal::new(false);
    let show_dealer = session.role() != Role::Dealer;

    let load_data = {
        let session = session.clone();
        Callback::new(move |_: ()| {
            let ticket = resource.begin();
            let client = client.clone();
            let session = session.clone();
            spawn_local(async move {
                let resolved = api::fetch_orders(&client, &session).await;
                resource.finish(ticket, resolved);
            });
        })
    };
    load_data.run(());

    let visible = Memo::new(move |_| {
        state.with(|s| resource.items.with(|items| s.apply(items, min_search_len)))
    });
    let visible_totals = Memo::new(move |_| visible.with(|v| totals(v)));

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
    let min_points = RwSignal::new(String::new());
    let max_points = RwSignal::new(String::new());
    Effect::new(move |_| {
        let (min, max) = (min_points.get(), max_points.get());
        state.update(|s| {
            s.min_points = min;
            s.max_points = max;
        });
    });

    view! {
        <PageFrame page_id="a007_order--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Orders"
                subtitle=Signal::derive(move || {
                    let (amount, points) = visible_totals.get();
                    format!(
                        "{} orders, {} total, {} points",
                        visible.with(|v| v.len()),
                        format_money(amount),
                        format_int(points)
                    )
                })
            >
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
                        min_points.set(String::new());
                        max_points.set(String::new());
                        state.update(|s| s.clear_filters());
                    })
                >
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput
                            value=search
                            on_change=Callback::new(move |text: String| state.update(|s| s.search = text))
                            placeholder="Order #, dealer, client or product"
                        />
                        <select
                            prop:value=move || state.with(|s| s.status.clone())
                            on:change=move |ev| state.update(|s| s.status = event_target_value(&ev))
                        >
                            <option value="">"All statuses"</option>
                            {OrderStatus::all()
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
                        <div style="max-width: 120px;">
                            <Input value=min_points placeholder="Min points" />
                        </div>
                        <div style="max-width: 120px;">
                            <Input value=max_points placeholder="Max points" />
                        </div>
                    </Flex>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Order #" field="order_number" sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                <SortableHeaderCell label="Created" field="created_at" sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                <Show when=move || show_dealer>
                                    <SortableHeaderCell label="Dealer" field="dealer" sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                </Show>
                                <TableHeaderCell>"Items"</TableHeaderCell>
                                <SortableHeaderCell label="Total" field="total" sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                <SortableHeaderCell label="Points" field="points" sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                <SortableHeaderCell label="Status" field="status" sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|o| (o.id.clone(), o.status)
                                children=move |order| {
                                    let status = order.status;
                                    let dealer = order.dealer.label().to_string();
                                    let display_number = order.display_number();
                                    let created_at = format_datetime(order.created_at.as_ref());
                                    let items = items_summary(&order);
                                    let total = format_money(order.total());
                                    let points = format_int(order.total_points());
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-weight: 500;">{display_number}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{created_at}</TableCellLayout></TableCell>
                                            <Show when=move || show_dealer>
                                                <TableCell clone:dealer><TableCellLayout>{dealer.clone()}</TableCellLayout></TableCell>
                                            </Show>
                                            <TableCell><TableCellLayout truncate=true>{items}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{total}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{points}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge variant=status.badge_variant()>{status.display_name()}</Badge>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || resource.is_loaded.get() && visible.with(|v| v.is_empty())>
                        <div class="empty-state">"No orders match the current filters."</div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
