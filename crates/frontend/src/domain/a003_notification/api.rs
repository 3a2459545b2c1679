use contracts::domain::a003_notification::Notification;

use crate::shared::endpoint_resolver::{resolve_list, EndpointCandidate, JsonTransport, Resolved};
use crate::system::auth::context::Session;

/// Notification endpoints in the order they are tried
pub fn notification_candidates(session: &Session) -> Vec<EndpointCandidate> {
    let mut candidates = vec![EndpointCandidate::new("/api/notifications")];
    if let Some(client_id) = session.client_id() {
        candidates.push(
            EndpointCandidate::new("/api/notifications")
                .query("clientId", client_id)
                .header("X-Client-ID", session.token.as_str()),
        );
    }
    candidates.push(EndpointCandidate::new(format!(
        "/api/users/{}/notifications",
        urlencoding::encode(&session.user.id)
    )));
    candidates
}

pub async fn fetch_notifications<Tr: JsonTransport + ?Sized>(
    transport: &Tr,
    session: &Session,
) -> Resolved<Notification> {
    resolve_list(transport, "notifications", &notification_candidates(session)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::Role;
    use crate::system::auth::context::test_session as session;

    #[test]
    fn test_candidates_for_client() {
        let targets: Vec<String> = notification_candidates(&session(Role::Client, Some("c1")))
            .iter()
            .map(EndpointCandidate::target)
            .collect();
        assert_eq!(
            targets,
            vec![
                "/api/notifications",
                "/api/notifications?clientId=c1",
                "/api/users/u1/notifications"
            ]
        );
    }

    #[test]
    fn test_candidates_for_admin() {
        assert_eq!(notification_candidates(&session(Role::Admin, None)).len(), 2);
    }
}
