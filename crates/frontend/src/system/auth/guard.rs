use contracts::enums::Role;
use leptos::prelude::*;

use super::context::use_auth;

/// True when `role` is one of `allowed`
pub fn role_allowed(role: Role, allowed: &[Role]) -> bool {
    allowed.contains(&role)
}

/// Renders children only for a signed-in user holding one of `roles`
#[component]
pub fn RequireRole(roles: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let auth_state = use_auth();

    view! {
        <Show
            when=move || {
                auth_state.with(|s| {
                    s.session
                        .as_ref()
                        .map(|session| role_allowed(session.role(), roles))
                        .unwrap_or(false)
                })
            }
            fallback=|| view! { <div class="alert alert--error">"Access denied for your role."</div> }
        >
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_allowed() {
        let admins = &[Role::Superadmin, Role::Admin];
        assert!(role_allowed(Role::Admin, admins));
        assert!(!role_allowed(Role::Client, admins));
        assert!(!role_allowed(Role::Unknown, admins));
    }
}
