use contracts::enums::Role;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::{pages_for, resolve_active};
use crate::shared::icons::icon;

/// Navigation entries for the signed-in role
#[component]
pub fn Sidebar(role: Role) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let is_active = move |key: &'static str| {
        ctx.active
            .with(|active| resolve_active(active.as_deref(), role).map(|p| p.key) == Some(key))
    };

    view! {
        <div class="app-sidebar__content">
            {pages_for(role)
                .into_iter()
                .map(|page| {
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || is_active(page.key)
                            on:click=move |_| ctx.activate(page.key)
                        >
                            <div class="app-sidebar__item-content">
                                {icon(page.icon)}
                                <span>{page.title}</span>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
