use contracts::domain::a004_client::{Client, ClientDto};
use contracts::domain::common::AggregateRoot;

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{returned_record, ApiClient};
use crate::shared::endpoint_resolver::{resolve_list, EndpointCandidate, JsonTransport, Resolved};

const RECORD_KEYS: &[&str] = &["client"];

pub fn client_candidates() -> Vec<EndpointCandidate> {
    vec![
        EndpointCandidate::new(Client::collection_path()),
        EndpointCandidate::new("/api/admin/clients"),
    ]
}

pub async fn fetch_clients<Tr: JsonTransport + ?Sized>(transport: &Tr) -> Resolved<Client> {
    resolve_list(transport, "clients", &client_candidates()).await
}

pub async fn save_client(client: &ApiClient, dto: &ClientDto) -> Result<Option<Client>, ApiError> {
    let body = match dto.id.as_deref() {
        Some(id) => client.put(&Client::item_path(id), dto).await?,
        None => client.post(&Client::collection_path(), dto).await?,
    };
    Ok(returned_record(body, RECORD_KEYS))
}

pub async fn delete_client(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&Client::item_path(id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::endpoint_resolver::testing::FakeTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_falls_back_to_admin_route() {
        let transport = FakeTransport::default().with(
            "/api/admin/clients",
            Ok(json!({"data": [{"_id": "c1", "name": "Jane", "email": "jane@example.com"}]})),
        );
        let resolved = fetch_clients(&transport).await;
        assert!(resolved.is_success());
        assert_eq!(resolved.source.as_deref(), Some("/api/admin/clients"));
        assert_eq!(resolved.items[0].id, "c1");
        assert_eq!(transport.called(), vec!["/api/clients", "/api/admin/clients"]);
    }

    #[test]
    fn test_saved_client_unwrapped_from_either_envelope() {
        let record = json!({"_id": "c9", "name": "Jane", "email": "jane@example.com"});
        for body in [json!({"client": record.clone()}), json!({"data": record.clone()}), record] {
            let client: Option<Client> = returned_record(body, RECORD_KEYS);
            assert_eq!(client.map(|c| c.id).as_deref(), Some("c9"));
        }
    }
}
