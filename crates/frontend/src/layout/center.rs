use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::{render_page, resolve_active};
use crate::system::auth::context::Session;
use crate::system::auth::guard::RequireRole;

/// Active page, guarded by its role list
#[component]
pub fn Center(session: Session) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let role = session.role();

    view! {
        <div data-zone="center" class="app-main" style="flex: 1; overflow: auto;">
            {move || {
                let requested = ctx.active.get();
                match resolve_active(requested.as_deref(), role) {
                    Some(page) => {
                        let session = session.clone();
                        view! {
                            <RequireRole roles=page.roles>
                                {render_page(page.key, session.clone())}
                            </RequireRole>
                        }
                        .into_any()
                    }
                    None => view! {
                        <div class="alert alert--error">"No pages are available for your role."</div>
                    }
                    .into_any(),
                }
            }}
        </div>
    }
}
