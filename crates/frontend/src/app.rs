use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::config::{load_config, use_config};
use crate::system::auth::context::{use_session, AuthProvider};
use crate::system::pages::login::LoginPage;

#[component]
pub fn App() -> impl IntoView {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("invalid configuration, using defaults: {:#}", e);
            use_config()
        }
    };
    provide_context(config);

    let ctx = AppGlobalContext::new();
    ctx.init_router_integration();
    provide_context(ctx);

    view! {
        <AuthProvider>
            <Root />
        </AuthProvider>
    }
}

/// Login page while signed out, the shell otherwise
#[component]
fn Root() -> impl IntoView {
    let session = use_session();

    move || match session.get() {
        Some(session) => view! { <Shell session=session /> }.into_any(),
        None => view! { <LoginPage /> }.into_any(),
    }
}
