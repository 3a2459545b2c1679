use contracts::domain::a003_notification::Notification;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_notification::api;
use crate::shared::api_utils::ApiClient;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::system::auth::context::Session;

fn unread_count(items: &[Notification]) -> usize {
    items.iter().filter(|n| !n.read).count()
}

/// Bell with the unread count; the list is fetched once per session
#[component]
pub fn NotificationBell(session: Session) -> impl IntoView {
    let config = use_config();
    let client = ApiClient::for_session(&config, &session);
    let unread = RwSignal::new(0usize);
    let latest: RwSignal<Vec<String>> = RwSignal::new(Vec::new());
    let open = RwSignal::new(false);

    spawn_local(async move {
        let resolved = api::fetch_notifications(&client, &session).await;
        if let Some(e) = resolved.error.as_deref() {
            log::debug!("notifications unavailable: {}", e);
        }
        unread.set(unread_count(&resolved.items));
        latest.set(
            resolved
                .items
                .iter()
                .filter(|n| !n.read)
                .take(5)
                .map(|n| if n.title.trim().is_empty() { n.message.clone() } else { n.title.clone() })
                .collect(),
        );
    });

    view! {
        <div class="top-header__notifications">
            <button
                class="top-header__icon-btn"
                title="Notifications"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {icon("bell")}
                <Show when=move || { unread.get() > 0 }>
                    <span class="top-header__badge">{move || unread.get()}</span>
                </Show>
            </button>
            <Show when=move || open.get()>
                <div class="top-header__dropdown">
                    {move || {
                        let items = latest.get();
                        if items.is_empty() {
                            view! { <div class="top-header__dropdown-empty">"No unread notifications"</div> }.into_any()
                        } else {
                            items
                                .into_iter()
                                .map(|text| view! { <div class="top-header__dropdown-item">{text}</div> })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unread_count() {
        let items: Vec<Notification> = serde_json::from_value(json!([
            {"id": "n1", "type": "purchase_request_rejected", "message": "m", "read": false},
            {"id": "n2", "type": "inventory_low", "message": "m", "read": true},
            {"id": "n3", "type": "other", "message": "m"}
        ]))
        .unwrap();
        assert_eq!(unread_count(&items), 2);
    }
}
