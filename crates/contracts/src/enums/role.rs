use serde::{Deserialize, Serialize};

/// Account role carried in the session user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[serde(alias = "super_admin", alias = "super-admin")]
    Superadmin,
    Admin,
    Client,
    Dealer,
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Wire code
    pub fn code(&self) -> &'static str {
        match self {
            Role::Superadmin => "superadmin",
            Role::Admin => "admin",
            Role::Client => "client",
            Role::Dealer => "dealer",
            Role::Unknown => "unknown",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Superadmin => "Super admin",
            Role::Admin => "Administrator",
            Role::Client => "Client",
            Role::Dealer => "Dealer",
            Role::Unknown => "Unknown",
        }
    }

    /// Admin-level roles manage catalog and review requests
    pub fn is_admin_level(&self) -> bool {
        matches!(self, Role::Superadmin | Role::Admin)
    }

    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "superadmin" | "super_admin" | "super-admin" => Role::Superadmin,
            "admin" => Role::Admin,
            "client" => Role::Client,
            "dealer" => Role::Dealer,
            _ => Role::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_deserialize() {
        let r: Role = serde_json::from_str("\"superadmin\"").unwrap();
        assert_eq!(r, Role::Superadmin);
        let r: Role = serde_json::from_str("\"super_admin\"").unwrap();
        assert_eq!(r, Role::Superadmin);
        let r: Role = serde_json::from_str("\"auditor\"").unwrap();
        assert_eq!(r, Role::Unknown);
    }

    #[test]
    fn test_admin_level() {
        assert!(Role::Superadmin.is_admin_level());
        assert!(Role::Admin.is_admin_level());
        assert!(!Role::Client.is_admin_level());
        assert!(!Role::Dealer.is_admin_level());
        assert_eq!(Role::from_code(" Dealer "), Role::Dealer);
    }
}
