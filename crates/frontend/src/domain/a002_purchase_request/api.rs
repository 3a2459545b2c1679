use contracts::domain::a002_purchase_request::{
    enrich_in_place, CreatePurchaseRequestDto, PurchaseRequest, RejectPurchaseRequestDto,
};
use contracts::domain::common::AggregateRoot;
use serde_json::json;

use crate::domain::a003_notification::api::fetch_notifications;
use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{returned_record, ApiClient};
use crate::shared::endpoint_resolver::{resolve_list, EndpointCandidate, JsonTransport, Resolved};
use crate::system::auth::context::Session;

const RECORD_KEYS: &[&str] = &["request", "purchaseRequest"];

/// Purchase request endpoints in the order they are tried
pub fn request_candidates(session: &Session) -> Vec<EndpointCandidate> {
    let collection = PurchaseRequest::collection_path();
    match session.client_id().filter(|_| !session.is_admin_level()) {
        Some(client_id) => vec![
            EndpointCandidate::new(collection.clone())
                .query("clientId", client_id)
                .header("X-Client-ID", session.token.as_str()),
            EndpointCandidate::new(format!(
                "/api/clients/{}/purchase-requests",
                urlencoding::encode(client_id)
            ))
            .header("X-Client-ID", session.token.as_str()),
            EndpointCandidate::new(format!("{}/my", collection)),
        ],
        None => vec![
            EndpointCandidate::new(collection),
            EndpointCandidate::new("/api/admin/purchase-requests"),
        ],
    }
}

/// Fetch the requests, then backfill missing rejection reasons from the
/// user's notifications. Notifications are fetched only when a rejected
/// request lacks its reason.
pub async fn fetch_requests<Tr: JsonTransport + ?Sized>(
    transport: &Tr,
    session: &Session,
) -> Resolved<PurchaseRequest> {
    let mut resolved: Resolved<PurchaseRequest> =
        resolve_list(transport, "purchase requests", &request_candidates(session)).await;

    if resolved.items.iter().any(PurchaseRequest::needs_rejection_reason) {
        let notifications = fetch_notifications(transport, session).await;
        let filled = enrich_in_place(&mut resolved.items, &notifications.items);
        log::debug!("filled {} rejection reason(s) from notifications", filled);
    }
    resolved
}

pub async fn create_request(
    client: &ApiClient,
    dto: &CreatePurchaseRequestDto,
) -> Result<Option<PurchaseRequest>, ApiError> {
    let body = client.post(&PurchaseRequest::collection_path(), dto).await?;
    Ok(returned_record(body, RECORD_KEYS))
}

pub async fn approve_request(
    client: &ApiClient,
    id: &str,
) -> Result<Option<PurchaseRequest>, ApiError> {
    let target = format!("{}/approve", PurchaseRequest::item_path(id));
    let body = client.put(&target, &json!({})).await?;
    Ok(returned_record(body, RECORD_KEYS))
}

pub async fn reject_request(
    client: &ApiClient,
    id: &str,
    dto: &RejectPurchaseRequestDto,
) -> Result<Option<PurchaseRequest>, ApiError> {
    let target = format!("{}/reject", PurchaseRequest::item_path(id));
    let body = client.put(&target, dto).await?;
    Ok(returned_record(body, RECORD_KEYS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::endpoint_resolver::testing::FakeTransport;
    use crate::system::auth::context::test_session;
    use contracts::enums::Role;
    use serde_json::json;

    #[test]
    fn test_client_candidates() {
        let targets: Vec<String> = request_candidates(&test_session(Role::Client, Some("c1")))
            .iter()
            .map(EndpointCandidate::target)
            .collect();
        assert_eq!(
            targets,
            vec![
                "/api/purchase-requests?clientId=c1",
                "/api/clients/c1/purchase-requests",
                "/api/purchase-requests/my"
            ]
        );
    }

    #[tokio::test]
    async fn test_rejection_reason_recovered_from_notification() {
        let transport = FakeTransport::default()
            .with(
                "/api/purchase-requests?clientId=c1",
                Ok(json!({"requests": [
                    {"_id": "r1", "productId": "p1", "quantity": 2, "status": "rejected"},
                    {"_id": "r2", "productId": "p1", "quantity": 1, "status": "pending"}
                ]})),
            )
            .with(
                "/api/notifications",
                Ok(json!({"notifications": [{
                    "_id": "n1",
                    "type": "purchase_request_rejected",
                    "message": "Request r1 was rejected: Insufficient stock",
                    "relatedId": "r1"
                }]})),
            );

        let session = test_session(Role::Client, Some("c1"));
        let resolved = fetch_requests(&transport, &session).await;
        assert_eq!(resolved.items.len(), 2);
        assert_eq!(
            resolved.items[0].rejection_reason.as_deref(),
            Some("Insufficient stock")
        );
        assert_eq!(resolved.items[1].rejection_reason, None);
    }

    #[tokio::test]
    async fn test_notifications_skipped_when_nothing_to_fill() {
        let transport = FakeTransport::default().with(
            "/api/purchase-requests",
            Ok(json!([{"id": "r1", "status": "approved"}])),
        );
        let session = test_session(Role::Admin, None);
        let resolved = fetch_requests(&transport, &session).await;
        assert_eq!(resolved.items.len(), 1);
        assert_eq!(transport.called(), vec!["/api/purchase-requests"]);
    }

    #[tokio::test]
    async fn test_all_candidates_failing() {
        let transport = FakeTransport::default();
        let session = test_session(Role::Client, Some("c1"));
        let resolved = fetch_requests(&transport, &session).await;
        assert!(resolved.items.is_empty());
        assert!(resolved.error.is_some_and(|e| !e.is_empty()));
    }
}
