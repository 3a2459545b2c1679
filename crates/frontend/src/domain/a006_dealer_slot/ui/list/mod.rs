mod state;

pub use state::{create_state, next_slot_number, DealerSlotListState};

use contracts::domain::a006_dealer_slot::DealerSlot;
use contracts::enums::EntityStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a006_dealer_slot::api;
use crate::domain::a006_dealer_slot::ui::details::DealerSlotDetails;
use crate::shared::api_utils::ApiClient;
use crate::shared::components::ui::Badge;
use crate::shared::components::{ErrorBanner, FilterPanel, PageHeader};
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::list_resource::ListResource;
use crate::shared::list_utils::{toggle_sort, SearchInput, SortableHeaderCell};
use crate::shared::number_format::{format_int, format_money};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::{sign_out, use_auth, Session};

#[component]
pub fn DealerSlotList(session: Session) -> impl IntoView {
    let config = use_config();
    let auth_state = use_auth();
    let min_search_len = config.list.min_search_len;
    let client = ApiClient::for_session(&config, &session);
    let resource = ListResource::<DealerSlot>::new(config.auth.relogin_after_failures);
    let state = create_state();
    let filters_expanded = RwSignal::new(false);

    let is_admin = session.is_admin_level();
    let own_client_id = if is_admin {
        None
    } else {
        session.client_id().map(str::to_string)
    };

    // Some(None) opens the form for a new slot
    let editing: RwSignal<Option<Option<DealerSlot>>> = RwSignal::new(None);

    let load_data = {
        let client = client.clone();
        let session = session.clone();
        Callback::new(move |_: ()| {
            let ticket = resource.begin();
            let client = client.clone();
            let session = session.clone();
            spawn_local(async move {
                let resolved = api::fetch_dealer_slots(&client, &session).await;
                resource.finish(ticket, resolved);
            });
        })
    };
    load_data.run(());

    let visible = Memo::new(move |_| {
        state.with(|s| resource.items.with(|items| s.apply(items, min_search_len)))
    });

    let on_saved = Callback::new(move |returned: Option<DealerSlot>| {
        editing.set(None);
        match returned {
            Some(saved) => resource.upsert(saved),
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
    let details_client = client.clone();

    view! {
        <PageFrame page_id="a006_dealer_slot--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Dealer slots"
                subtitle=Signal::derive(move || format!("{} slots", resource.items.with(|i| i.len())))
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(None))>
                    {icon("plus")}
                    " New slot"
                </Button>
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
                    on_clear=Callback::new(move |_: ()| state.update(|s| s.clear_filters()))
                >
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput
                            value=search
                            on_change=Callback::new(move |text: String| state.update(|s| s.search = text))
                            placeholder="Dealer, client or slot #"
                        />
                        <select
                            prop:value=move || state.with(|s| s.status.clone())
                            on:change=move |ev| state.update(|s| s.status = event_target_value(&ev))
                        >
                            <option value="">"All statuses"</option>
                            {EntityStatus::all()
                                .into_iter()
                                .map(|st| view! { <option value=st.code()>{st.display_name()}</option> })
                                .collect_view()}
                        </select>
                    </Flex>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Slot #" field="slot_number" sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                <SortableHeaderCell label="Dealer" field="dealer_name" sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                <TableHeaderCell>"Contact"</TableHeaderCell>
                                <Show when=move || is_admin>
                                    <SortableHeaderCell label="Client" field="client" sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                </Show>
                                <SortableHeaderCell label="Status" field="status" sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                <SortableHeaderCell label="Sales" field="total_sales" sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                <TableHeaderCell>"Orders"</TableHeaderCell>
                                <SortableHeaderCell label="Points" field="points" sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|d| (d.id.clone(), d.slot_number, d.dealer_name.clone(), d.status)
                                children=move |slot| {
                                    let status = slot.status;
                                    let contact = [slot.dealer_email.as_str(), slot.phone.as_str()]
                                        .iter()
                                        .filter(|s| !s.trim().is_empty())
                                        .copied()
                                        .collect::<Vec<_>>()
                                        .join(" / ");
                                    let client_label = slot.client.label().to_string();
                                    let for_edit = slot.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{format!("#{}", slot.slot_number)}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{slot.dealer_name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout truncate=true>{contact}</TableCellLayout></TableCell>
                                            <Show when=move || is_admin>
                                                <TableCell clone:client_label><TableCellLayout>{client_label.clone()}</TableCellLayout></TableCell>
                                            </Show>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge variant=status.badge_variant()>{status.display_name()}</Badge>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{format_money(slot.stats.total_sales)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{format_int(slot.stats.orders_count)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{format_int(slot.stats.points_earned)}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing.set(Some(Some(for_edit.clone())))
                                                    attr:title="Edit"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || resource.is_loaded.get() && visible.with(|v| v.is_empty())>
                        <div class="empty-state">"No dealer slots yet."</div>
                    </Show>
                </div>

                {move || editing.get().map(|existing| view! {
                    <DealerSlotDetails
                        existing=existing
                        next_slot=resource.items.with_untracked(|items| next_slot_number(items))
                        client_id=own_client_id.clone()
                        client=details_client.clone()
                        on_saved=on_saved
                        on_cancel=Callback::new(move |_: ()| editing.set(None))
                    />
                })}
            </div>
        </PageFrame>
    }
}
