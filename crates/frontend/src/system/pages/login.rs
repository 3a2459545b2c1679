use contracts::shared::validation::{require_email, require_text};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api_utils::ApiClient;
use crate::shared::config::use_config;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::{api, context};

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);

    let auth_state = context::use_auth();
    let config = use_config();

    let submit = move || {
        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();

        if let Err(e) = require_email("email", &email_val)
            .and_then(|_| require_text("password", "Password", &password_val))
        {
            error_message.set(Some(e.to_string()));
            return;
        }

        is_loading.set(true);
        error_message.set(None);
        let client = ApiClient::anonymous(&config);

        spawn_local(async move {
            match api::login(&client, email_val, password_val).await {
                Ok(response) => {
                    is_loading.set(false);
                    context::sign_in(auth_state, response);
                }
                Err(e) => {
                    log::warn!("login failed: {}", e);
                    error_message.set(Some(format!("Login failed: {}", e)));
                    is_loading.set(false);
                }
            }
        });
    };

    view! {
        <PageFrame page_id="login--system" category=PAGE_CAT_SYSTEM>
            <div class="login-container">
                <form
                    class="login-box"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit();
                    }
                >
                    <h1>"Loyalty Portal"</h1>
                    <h2>"Sign in"</h2>

                    {move || error_message.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <Label>"Email"</Label>
                        <Input
                            value=email
                            input_type=InputType::Email
                            placeholder="you@company.com"
                            disabled=Signal::derive(move || is_loading.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Password"</Label>
                        <Input
                            value=password
                            input_type=InputType::Password
                            disabled=Signal::derive(move || is_loading.get())
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </PageFrame>
    }
}
