use contracts::domain::a006_dealer_slot::{DealerSlot, DealerSlotDto};
use contracts::domain::common::AggregateRoot;

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{returned_record, ApiClient};
use crate::shared::endpoint_resolver::{resolve_list, EndpointCandidate, JsonTransport, Resolved};
use crate::system::auth::context::Session;

const RECORD_KEYS: &[&str] = &["dealerSlot", "slot"];

/// Client users read their own slots; admins read every slot.
pub fn dealer_slot_candidates(session: &Session) -> Vec<EndpointCandidate> {
    match session.client_id().filter(|_| !session.is_admin_level()) {
        Some(client_id) => vec![
            EndpointCandidate::new(DealerSlot::collection_path())
                .query("clientId", client_id)
                .header("X-Client-ID", session.token.as_str()),
            EndpointCandidate::new(format!(
                "/api/clients/{}/dealer-slots",
                urlencoding::encode(client_id)
            ))
            .header("X-Client-ID", session.token.as_str()),
        ],
        None => vec![
            EndpointCandidate::new(DealerSlot::collection_path()),
            EndpointCandidate::new("/api/admin/dealer-slots"),
        ],
    }
}

pub async fn fetch_dealer_slots<Tr: JsonTransport + ?Sized>(
    transport: &Tr,
    session: &Session,
) -> Resolved<DealerSlot> {
    resolve_list(transport, "dealer slots", &dealer_slot_candidates(session)).await
}

pub async fn save_dealer_slot(
    client: &ApiClient,
    dto: &DealerSlotDto,
) -> Result<Option<DealerSlot>, ApiError> {
    let body = match dto.id.as_deref() {
        Some(id) => client.put(&DealerSlot::item_path(id), dto).await?,
        None => client.post(&DealerSlot::collection_path(), dto).await?,
    };
    Ok(returned_record(body, RECORD_KEYS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::endpoint_resolver::testing::FakeTransport;
    use crate::system::auth::context::test_session as session;
    use contracts::enums::Role;
    use serde_json::json;

    #[test]
    fn test_candidates_by_role() {
        let client_targets: Vec<String> = dealer_slot_candidates(&session(Role::Client, Some("c1")))
            .iter()
            .map(EndpointCandidate::target)
            .collect();
        assert_eq!(
            client_targets,
            vec!["/api/dealer-slots?clientId=c1", "/api/clients/c1/dealer-slots"]
        );

        let admin = dealer_slot_candidates(&session(Role::Superadmin, None));
        assert_eq!(admin[0].target(), "/api/dealer-slots");
        assert!(admin[0].headers.is_empty());
    }

    #[tokio::test]
    async fn test_empty_list_is_not_an_error() {
        let transport = FakeTransport::default()
            .with("/api/dealer-slots?clientId=c1", Ok(json!({"slots": []})));
        let resolved = fetch_dealer_slots(&transport, &session(Role::Client, Some("c1"))).await;
        assert!(resolved.is_success());
        assert!(resolved.items.is_empty());
        assert!(resolved.error.is_none());
        assert_eq!(transport.called().len(), 1);
    }
}
