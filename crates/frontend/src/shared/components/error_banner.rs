use crate::shared::icons::icon;
use leptos::prelude::*;

/// Inline error with a retry button. When `relogin` is set the banner also
/// offers to sign in again.
#[component]
pub fn ErrorBanner(
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] on_retry: Callback<()>,
    #[prop(optional, into)] relogin: Signal<bool>,
    #[prop(optional, into)] on_relogin: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        {move || error.get().map(|message| {
            let show_relogin = relogin.get();
            view! {
                <div class="error-banner" role="alert">
                    {icon("alert")}
                    <span class="error-banner__message">{message}</span>
                    <button class="error-banner__retry" on:click=move |_| on_retry.run(())>
                        "Retry"
                    </button>
                    {on_relogin.filter(|_| show_relogin).map(|cb| view! {
                        <button class="error-banner__relogin" on:click=move |_| cb.run(())>
                            "Sign in again"
                        </button>
                    })}
                </div>
            }
        })}
    }
}

/// Failure of a write action. Stays until dismissed; refetches do not clear it.
#[component]
pub fn ActionErrorBanner(error: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        {move || error.get().map(|message| view! {
            <div class="error-banner error-banner--action" role="alert">
                {icon("alert")}
                <span class="error-banner__message">{message}</span>
                <button class="error-banner__dismiss" on:click=move |_| error.set(None)>
                    {icon("x")}
                </button>
            </div>
        })}
    }
}
