use contracts::domain::a001_product::{Product, ProductDto, StockAdjustmentDto};
use contracts::domain::common::AggregateRoot;

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{returned_record, ApiClient};
use crate::shared::endpoint_resolver::{resolve_list, EndpointCandidate, JsonTransport, Resolved};
use crate::system::auth::context::Session;

const RECORD_KEYS: &[&str] = &["product", "item", "inventory"];

/// Inventory endpoints in the order they are tried.
///
/// Client-scoped users go through the client inventory routes first; admins
/// read the catalog.
pub fn inventory_candidates(session: &Session) -> Vec<EndpointCandidate> {
    match session.client_id().filter(|_| !session.is_admin_level()) {
        Some(client_id) => vec![
            EndpointCandidate::new(format!(
                "/api/clients/{}/inventory",
                urlencoding::encode(client_id)
            ))
            .header("X-Client-ID", session.token.as_str()),
            EndpointCandidate::new("/api/inventory")
                .query("clientId", client_id)
                .header("X-Client-ID", session.token.as_str()),
            EndpointCandidate::new(Product::collection_path()).query("clientId", client_id),
        ],
        None => vec![
            EndpointCandidate::new(Product::collection_path()),
            EndpointCandidate::new("/api/inventory"),
        ],
    }
}

pub async fn fetch_inventory<Tr: JsonTransport + ?Sized>(
    transport: &Tr,
    session: &Session,
) -> Resolved<Product> {
    resolve_list(transport, "inventory", &inventory_candidates(session)).await
}

/// `PUT /api/products/{id}/stock`; `Ok(None)` when the server did not echo
/// the product back
pub async fn adjust_stock(
    client: &ApiClient,
    product_id: &str,
    dto: &StockAdjustmentDto,
) -> Result<Option<Product>, ApiError> {
    let target = format!("{}/stock", Product::item_path(product_id));
    let body = client.put(&target, dto).await?;
    Ok(returned_record(body, RECORD_KEYS))
}

/// Create (`POST`) or update (`PUT`) a catalog product
pub async fn save_product(client: &ApiClient, dto: &ProductDto) -> Result<Option<Product>, ApiError> {
    let body = match dto.id.as_deref() {
        Some(id) => client.put(&Product::item_path(id), dto).await?,
        None => client.post(&Product::collection_path(), dto).await?,
    };
    Ok(returned_record(body, RECORD_KEYS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::Role;
    use crate::system::auth::context::test_session as session;

    #[test]
    fn test_client_candidates_are_scoped() {
        let candidates = inventory_candidates(&session(Role::Client, Some("c 7")));
        let targets: Vec<String> = candidates.iter().map(EndpointCandidate::target).collect();
        assert_eq!(
            targets,
            vec![
                "/api/clients/c%207/inventory",
                "/api/inventory?clientId=c%207",
                "/api/products?clientId=c%207"
            ]
        );
        assert_eq!(
            candidates[0].headers,
            vec![("X-Client-ID".to_string(), "t".to_string())]
        );
    }

    #[test]
    fn test_client_without_client_id_uses_own_id() {
        let candidates = inventory_candidates(&session(Role::Client, None));
        assert_eq!(candidates[0].target(), "/api/clients/u1/inventory");
    }

    #[test]
    fn test_admin_reads_catalog() {
        let candidates = inventory_candidates(&session(Role::Admin, Some("c1")));
        assert_eq!(candidates[0].target(), "/api/products");
        assert_eq!(candidates.len(), 2);
    }
}
