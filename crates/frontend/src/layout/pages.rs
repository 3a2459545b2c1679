//! Page registry: the single mapping from page key to title, icon, allowed
//! roles and view.

use contracts::enums::Role;
use leptos::prelude::*;

use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_purchase_request::ui::list::PurchaseRequestList;
use crate::domain::a004_client::ui::list::ClientList;
use crate::domain::a005_organization::ui::list::OrganizationList;
use crate::domain::a006_dealer_slot::ui::list::DealerSlotList;
use crate::domain::a007_order::ui::list::OrderList;
use crate::system::auth::context::Session;
use crate::system::auth::guard::role_allowed;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageDef {
    pub key: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub roles: &'static [Role],
}

const ALL: &[Role] = &[Role::Superadmin, Role::Admin, Role::Client, Role::Dealer];
const MANAGERS: &[Role] = &[Role::Superadmin, Role::Admin, Role::Client];

pub const PAGES: &[PageDef] = &[
    PageDef {
        key: "a005_organization",
        title: "Organizations",
        icon: "organizations",
        roles: &[Role::Superadmin],
    },
    PageDef {
        key: "a004_client",
        title: "Clients",
        icon: "clients",
        roles: &[Role::Superadmin, Role::Admin],
    },
    PageDef {
        key: "a001_product",
        title: "Inventory",
        icon: "inventory",
        roles: MANAGERS,
    },
    PageDef {
        key: "a002_purchase_request",
        title: "Purchase requests",
        icon: "purchases",
        roles: MANAGERS,
    },
    PageDef {
        key: "a006_dealer_slot",
        title: "Dealer slots",
        icon: "dealers",
        roles: MANAGERS,
    },
    PageDef {
        key: "a007_order",
        title: "Orders",
        icon: "orders",
        roles: ALL,
    },
];

pub fn find_page(key: &str) -> Option<&'static PageDef> {
    PAGES.iter().find(|p| p.key == key)
}

/// Pages visible to `role`, in menu order
pub fn pages_for(role: Role) -> Vec<&'static PageDef> {
    PAGES.iter().filter(|p| role_allowed(role, p.roles)).collect()
}

/// Landing page for `role`
pub fn default_page(role: Role) -> Option<&'static PageDef> {
    match role {
        Role::Client => find_page("a001_product"),
        Role::Dealer => find_page("a007_order"),
        _ => pages_for(role).into_iter().next(),
    }
}

/// Page to show for a requested key: the key itself when `role` may open
/// it, otherwise the role's landing page
pub fn resolve_active(requested: Option<&str>, role: Role) -> Option<&'static PageDef> {
    requested
        .and_then(find_page)
        .filter(|p| role_allowed(role, p.roles))
        .or_else(|| default_page(role))
}

pub fn render_page(key: &str, session: Session) -> AnyView {
    match key {
        "a005_organization" => view! { <OrganizationList session=session /> }.into_any(),
        "a004_client" => view! { <ClientList session=session /> }.into_any(),
        "a001_product" => view! { <ProductList session=session /> }.into_any(),
        "a002_purchase_request" => view! { <PurchaseRequestList session=session /> }.into_any(),
        "a006_dealer_slot" => view! { <DealerSlotList session=session /> }.into_any(),
        "a007_order" => view! { <OrderList session=session /> }.into_any(),
        other => {
            log::warn!("unknown page key '{}'", other);
            view! { <div class="empty-state">"Page not found."</div> }.into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(role: Role) -> Vec<&'static str> {
        pages_for(role).iter().map(|p| p.key).collect()
    }

    #[test]
    fn test_role_matrix() {
        assert_eq!(keys(Role::Superadmin).len(), 6);
        assert_eq!(
            keys(Role::Admin),
            vec!["a004_client", "a001_product", "a002_purchase_request", "a006_dealer_slot", "a007_order"]
        );
        assert_eq!(
            keys(Role::Client),
            vec!["a001_product", "a002_purchase_request", "a006_dealer_slot", "a007_order"]
        );
        assert_eq!(keys(Role::Dealer), vec!["a007_order"]);
        assert!(keys(Role::Unknown).is_empty());
    }

    #[test]
    fn test_resolve_active_falls_back_to_landing_page() {
        assert_eq!(resolve_active(Some("a004_client"), Role::Admin).map(|p| p.key), Some("a004_client"));
        assert_eq!(resolve_active(Some("a005_organization"), Role::Client).map(|p| p.key), Some("a001_product"));
        assert_eq!(resolve_active(None, Role::Superadmin).map(|p| p.key), Some("a005_organization"));
        assert_eq!(resolve_active(Some("nope"), Role::Dealer).map(|p| p.key), Some("a007_order"));
        assert!(resolve_active(None, Role::Unknown).is_none());
    }
}
