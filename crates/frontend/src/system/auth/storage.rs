use contracts::system::auth::SessionUser;
use web_sys::window;

use super::context::Session;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";
const FORCE_INVENTORY_REFRESH_KEY: &str = "forceInventoryRefresh";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist the session under `token` and `user`
pub fn save_session(session: &Session) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, &session.token);
        match serde_json::to_string(&session.user) {
            Ok(json) => {
                let _ = storage.set_item(USER_KEY, &json);
            }
            Err(e) => log::warn!("failed to serialize session user: {}", e),
        }
    }
}

/// Session restored from browser storage, if both keys are usable
pub fn load_session() -> Option<Session> {
    let storage = get_local_storage()?;
    let token = storage.get_item(TOKEN_KEY).ok()??;
    let user = storage.get_item(USER_KEY).ok()??;
    session_from_stored(&token, &user)
}

pub fn session_from_stored(token: &str, user_json: &str) -> Option<Session> {
    if token.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<SessionUser>(user_json) {
        Ok(user) => Some(Session {
            token: token.to_string(),
            user,
        }),
        Err(e) => {
            log::warn!("stored user is not readable: {}", e);
            None
        }
    }
}

/// Remove `token` and `user`
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}

/// Ask the inventory page to refetch on its next mount
pub fn raise_inventory_refresh() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(FORCE_INVENTORY_REFRESH_KEY, "true");
    }
}

fn refresh_flag_raised(stored: Option<&str>) -> bool {
    stored == Some("true")
}

/// Read and clear the inventory refresh flag
pub fn take_inventory_refresh() -> bool {
    let Some(storage) = get_local_storage() else {
        return false;
    };
    let stored = storage
        .get_item(FORCE_INVENTORY_REFRESH_KEY)
        .ok()
        .flatten();
    let raised = refresh_flag_raised(stored.as_deref());
    if raised {
        let _ = storage.remove_item(FORCE_INVENTORY_REFRESH_KEY);
    }
    raised
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::Role;

    #[test]
    fn test_session_from_stored() {
        let session = session_from_stored(
            "tok",
            r#"{"_id":"u1","name":"Ann","email":"ann@example.com","role":"admin"}"#,
        )
        .unwrap();
        assert_eq!(session.token, "tok");
        assert_eq!(session.user.role, Role::Admin);

        assert!(session_from_stored("", r#"{"id":"u1","role":"admin"}"#).is_none());
        assert!(session_from_stored("tok", "not json").is_none());
    }

    #[test]
    fn test_refresh_flag_raised() {
        assert!(refresh_flag_raised(Some("true")));
        assert!(!refresh_flag_raised(Some("false")));
        assert!(!refresh_flag_raised(Some("")));
        assert!(!refresh_flag_raised(None));
    }
}
