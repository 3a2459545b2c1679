use contracts::domain::a007_order::Order;
use contracts::domain::common::AggregateRoot;
use contracts::enums::Role;

use crate::shared::endpoint_resolver::{resolve_list, EndpointCandidate, JsonTransport, Resolved};
use crate::system::auth::context::Session;

/// Order endpoints in the order they are tried.
///
/// Dealers see the orders they placed, client users the orders of their
/// dealers, admins everything.
pub fn order_candidates(session: &Session) -> Vec<EndpointCandidate> {
    if session.role() == Role::Dealer {
        let dealer_id = session.user.id.as_str();
        return vec![
            EndpointCandidate::new(Order::collection_path()).query("dealerId", dealer_id),
            EndpointCandidate::new(format!(
                "/api/dealer-slots/{}/orders",
                urlencoding::encode(dealer_id)
            )),
            EndpointCandidate::new("/api/orders/my"),
        ];
    }
    match session.client_id().filter(|_| !session.is_admin_level()) {
        Some(client_id) => vec![
            EndpointCandidate::new(Order::collection_path())
                .query("clientId", client_id)
                .header("X-Client-ID", session.token.as_str()),
            EndpointCandidate::new(format!(
                "/api/clients/{}/orders",
                urlencoding::encode(client_id)
            ))
            .header("X-Client-ID", session.token.as_str()),
        ],
        None => vec![
            EndpointCandidate::new(Order::collection_path()),
            EndpointCandidate::new("/api/admin/orders"),
        ],
    }
}

pub async fn fetch_orders<Tr: JsonTransport + ?Sized>(
    transport: &Tr,
    session: &Session,
) -> Resolved<Order> {
    resolve_list(transport, "orders", &order_candidates(session)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_error::ApiError;
    use crate::shared::endpoint_resolver::testing::FakeTransport;
    use crate::system::auth::context::test_session as session;
    use serde_json::json;

    fn targets(session: &Session) -> Vec<String> {
        order_candidates(session).iter().map(EndpointCandidate::target).collect()
    }

    #[test]
    fn test_candidates_per_role() {
        assert_eq!(
            targets(&session(Role::Dealer, None)),
            vec!["/api/orders?dealerId=u1", "/api/dealer-slots/u1/orders", "/api/orders/my"]
        );
        assert_eq!(
            targets(&session(Role::Client, Some("c1"))),
            vec!["/api/orders?clientId=c1", "/api/clients/c1/orders"]
        );
        assert_eq!(
            targets(&session(Role::Admin, None)),
            vec!["/api/orders", "/api/admin/orders"]
        );
    }

    #[tokio::test]
    async fn test_all_candidates_failing_reports_each() {
        let transport = FakeTransport::default()
            .with("/api/orders", Err(ApiError::Network("offline".into())));
        let resolved = fetch_orders(&transport, &session(Role::Admin, None)).await;
        assert!(resolved.items.is_empty());
        let error = resolved.error.unwrap_or_default();
        assert!(error.starts_with("Unable to load orders."));
        assert!(error.contains("/api/orders:"));
        assert!(error.contains("/api/admin/orders:"));
        assert!(!resolved.auth_failed);
    }
}
