//! Top bar: sidebar toggle, title, notification bell, signed-in user and
//! logout.

mod notifications;

use notifications::NotificationBell;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{sign_out, use_auth, Session};
use leptos::prelude::*;

#[component]
pub fn TopHeader(session: Session) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let auth_state = use_auth();

    let user_label = format!(
        "{} ({})",
        session.user.display_name(),
        session.role().display_name()
    );

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("filter")}
                </button>
                <span class="top-header__title">"Loyalty Program"</span>
            </div>

            <div class="top-header__actions">
                <NotificationBell session=session.clone() />

                <div class="top-header__user">
                    <span>{user_label}</span>
                </div>

                <button
                    class="top-header__icon-btn"
                    on:click=move |_| sign_out(auth_state)
                    title="Log out"
                >
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
