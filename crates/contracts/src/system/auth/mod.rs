use serde::{Deserialize, Serialize};

use crate::domain::common::lenient::{opt_string_nonblank, string_lenient};
use crate::enums::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "accessToken", alias = "access_token")]
    pub token: String,
    pub user: SessionUser,
}

/// Signed-in user as stored under the `user` browser storage key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(alias = "_id", deserialize_with = "string_lenient")]
    pub id: String,
    #[serde(default, alias = "fullName", deserialize_with = "string_lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "string_lenient")]
    pub email: String,
    pub role: Role,
    /// Client account the user acts for (client and dealer roles)
    #[serde(default, deserialize_with = "opt_string_nonblank")]
    pub client_id: Option<String>,
    #[serde(default, deserialize_with = "opt_string_nonblank")]
    pub organization_id: Option<String>,
}

impl SessionUser {
    /// Name for the header, falling back to the e-mail
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    /// Client id used to scope inventory and request lookups.
    ///
    /// Client users without an explicit `clientId` act for their own
    /// account, so their user id is used.
    pub fn scoped_client_id(&self) -> Option<&str> {
        match (self.client_id.as_deref(), self.role) {
            (Some(id), _) => Some(id),
            (None, Role::Client) => Some(self.id.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_response_token_aliases() {
        let r: LoginResponse = serde_json::from_value(json!({
            "accessToken": "t0k",
            "user": {"_id": "u1", "email": "a@b.co", "role": "client"}
        }))
        .unwrap();
        assert_eq!(r.token, "t0k");
        assert_eq!(r.user.role, Role::Client);
        assert_eq!(r.user.display_name(), "a@b.co");
    }

    #[test]
    fn test_scoped_client_id() {
        let mut user = SessionUser {
            id: "u1".into(),
            name: "Ann".into(),
            email: "ann@example.com".into(),
            role: Role::Client,
            client_id: None,
            organization_id: None,
        };
        assert_eq!(user.scoped_client_id(), Some("u1"));
        user.client_id = Some("c9".into());
        assert_eq!(user.scoped_client_id(), Some("c9"));
        user.role = Role::Admin;
        user.client_id = None;
        assert_eq!(user.scoped_client_id(), None);
    }

    #[test]
    fn test_session_user_roundtrips_through_storage_format() {
        let user = SessionUser {
            id: "u1".into(),
            name: "Ann".into(),
            email: "ann@example.com".into(),
            role: Role::Dealer,
            client_id: Some("c1".into()),
            organization_id: None,
        };
        let stored = serde_json::to_string(&user).unwrap();
        let restored: SessionUser = serde_json::from_str(&stored).unwrap();
        assert_eq!(restored, user);
    }
}
