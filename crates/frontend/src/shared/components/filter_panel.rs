use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapsible filter panel; the header shows the number of active filters
#[component]
pub fn FilterPanel(
    #[prop(into)] is_expanded: RwSignal<bool>,
    #[prop(into)] active_filters_count: Signal<usize>,
    /// Clears every filter of the page
    #[prop(optional, into)]
    on_clear: Option<Callback<()>>,
    children: ChildrenFn,
) -> impl IntoView {
    let toggle_expanded = move |_| is_expanded.update(|e| *e = !*e);

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left" on:click=toggle_expanded>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </div>
                {on_clear.map(|clear| view! {
                    <button
                        class="filter-panel__clear"
                        disabled=move || active_filters_count.get() == 0
                        on:click=move |_| clear.run(())
                    >
                        "Clear filters"
                    </button>
                })}
            </div>
            <Show when=move || is_expanded.get()>
                <div class="filter-panel-content">{children()}</div>
            </Show>
        </div>
    }
}
