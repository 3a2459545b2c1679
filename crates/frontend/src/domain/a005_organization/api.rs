use contracts::domain::a005_organization::{Organization, OrganizationDto};
use contracts::domain::common::AggregateRoot;

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{returned_record, ApiClient};
use crate::shared::endpoint_resolver::{resolve_list, EndpointCandidate, JsonTransport, Resolved};

const RECORD_KEYS: &[&str] = &["organization"];

pub fn organization_candidates() -> Vec<EndpointCandidate> {
    vec![
        EndpointCandidate::new(Organization::collection_path()),
        EndpointCandidate::new("/api/admin/organizations"),
    ]
}

pub async fn fetch_organizations<Tr: JsonTransport + ?Sized>(
    transport: &Tr,
) -> Resolved<Organization> {
    resolve_list(transport, "organizations", &organization_candidates()).await
}

/// Provisioning (`POST`) creates the organization together with its admin
/// account; existing organizations are updated with `PUT`.
pub async fn save_organization(
    client: &ApiClient,
    dto: &OrganizationDto,
) -> Result<Option<Organization>, ApiError> {
    let body = match dto.id.as_deref() {
        Some(id) => client.put(&Organization::item_path(id), dto).await?,
        None => client.post(&Organization::collection_path(), dto).await?,
    };
    Ok(returned_record(body, RECORD_KEYS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::endpoint_resolver::testing::FakeTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_forbidden_then_admin_route() {
        let transport = FakeTransport::default()
            .with("/api/organizations", Err(ApiError::Unauthorized(403)))
            .with(
                "/api/admin/organizations",
                Ok(json!({"organizations": [{"id": "o1", "name": "North"}]})),
            );
        let resolved = fetch_organizations(&transport).await;
        assert!(resolved.auth_failed);
        assert_eq!(resolved.items.len(), 1);
        assert!(resolved.error.is_none());
    }
}
