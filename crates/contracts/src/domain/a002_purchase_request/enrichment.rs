//! Backfill of rejection reasons from notifications.
//!
//! Rejected requests do not always carry `rejectionReason`; the backend does
//! send the reason inside the rejection notification it emits. The merge
//! only fills an empty field, so running it again with the same inputs
//! changes nothing.

use super::aggregate::PurchaseRequest;
use crate::domain::a003_notification::Notification;

/// Fill missing rejection reasons in place.
///
/// For each rejected request without a reason, the first rejection
/// notification (in list order) whose `related_id` equals the request id
/// supplies the reason. A request without an id matches nothing, so a
/// notification lacking `related_id` is never attached. Returns how many
/// requests were filled.
pub fn enrich_in_place(requests: &mut [PurchaseRequest], notifications: &[Notification]) -> usize {
    let mut filled = 0;
    for request in requests
        .iter_mut()
        .filter(|r| r.needs_rejection_reason() && !r.id.is_empty())
    {
        let reason = notifications
            .iter()
            .filter(|n| n.kind.is_rejection() && n.related_id == request.id)
            .find_map(Notification::rejection_reason);
        if let Some(reason) = reason {
            request.rejection_reason = Some(reason);
            filled += 1;
        }
    }
    filled
}

/// Owned variant of [`enrich_in_place`]
pub fn enrich_with_notifications(
    mut requests: Vec<PurchaseRequest>,
    notifications: &[Notification],
) -> Vec<PurchaseRequest> {
    enrich_in_place(&mut requests, notifications);
    requests
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_purchase_request::PurchaseRequestStatus;
    use crate::domain::a003_notification::NotificationType;
    use crate::domain::common::EntityRef;
    use crate::shared::list_response::decode_list;
    use serde_json::json;

    fn request(id: &str, status: PurchaseRequestStatus, reason: Option<&str>) -> PurchaseRequest {
        PurchaseRequest {
            id: id.into(),
            product: EntityRef {
                id: "p1".into(),
                name: None,
            },
            client: EntityRef::default(),
            quantity: 1,
            price: 1.0,
            status,
            rejection_reason: reason.map(str::to_string),
            notes: None,
            created_at: None,
        }
    }

    fn notification(id: &str, kind: NotificationType, related: &str, message: &str) -> Notification {
        Notification {
            id: id.into(),
            kind,
            title: String::new(),
            message: message.into(),
            related_id: related.into(),
            read: false,
            created_at: None,
        }
    }

    #[test]
    fn test_fills_reason_from_matching_rejection() {
        let requests = vec![request("X", PurchaseRequestStatus::Rejected, None)];
        let notifications = vec![notification(
            "n1",
            NotificationType::PurchaseRequestRejected,
            "X",
            "Request X was rejected: Insufficient stock",
        )];
        let enriched = enrich_with_notifications(requests, &notifications);
        assert_eq!(
            enriched[0].rejection_reason.as_deref(),
            Some("Insufficient stock")
        );
    }

    #[test]
    fn test_keeps_existing_reason() {
        let requests = vec![request(
            "X",
            PurchaseRequestStatus::Rejected,
            Some("Over budget"),
        )];
        let notifications = vec![notification(
            "n1",
            NotificationType::PurchaseRequestRejected,
            "X",
            "Request X was rejected: Insufficient stock",
        )];
        let enriched = enrich_with_notifications(requests, &notifications);
        assert_eq!(enriched[0].rejection_reason.as_deref(), Some("Over budget"));
    }

    #[test]
    fn test_ignores_non_matching_notifications() {
        let mut requests = vec![
            request("X", PurchaseRequestStatus::Rejected, None),
            request("Y", PurchaseRequestStatus::Pending, None),
        ];
        let notifications = vec![
            notification(
                "n1",
                NotificationType::PurchaseRequestApproved,
                "X",
                "Request X was approved",
            ),
            notification(
                "n2",
                NotificationType::PurchaseRequestRejected,
                "Z",
                "Request Z was rejected: Other",
            ),
            notification(
                "n3",
                NotificationType::PurchaseRequestRejected,
                "Y",
                "Request Y was rejected: Stale",
            ),
        ];
        assert_eq!(enrich_in_place(&mut requests, &notifications), 0);
        assert!(requests.iter().all(|r| r.rejection_reason.is_none()));
    }

    #[test]
    fn test_enrichment_is_idempotent() {
        let requests = vec![
            request("X", PurchaseRequestStatus::Rejected, None),
            request("Y", PurchaseRequestStatus::Rejected, None),
            request("Z", PurchaseRequestStatus::Approved, None),
        ];
        let notifications = vec![
            notification(
                "n1",
                NotificationType::PurchaseRequestRejected,
                "X",
                "Request X was rejected: Insufficient stock",
            ),
            notification(
                "n2",
                NotificationType::PurchaseRequestRejected,
                "Y",
                "Reason: Duplicate request",
            ),
        ];
        let once = enrich_with_notifications(requests, &notifications);
        let twice = enrich_with_notifications(once.clone(), &notifications);
        assert_eq!(once, twice);
        assert_eq!(once[1].rejection_reason.as_deref(), Some("Duplicate request"));
    }

    #[test]
    fn test_first_matching_notification_wins() {
        let mut requests = vec![request("X", PurchaseRequestStatus::Rejected, None)];
        let notifications = vec![
            notification(
                "n1",
                NotificationType::PurchaseRequestRejected,
                "X",
                "Request X was rejected: Newest",
            ),
            notification(
                "n0",
                NotificationType::PurchaseRequestRejected,
                "X",
                "Request X was rejected: Oldest",
            ),
        ];
        assert_eq!(enrich_in_place(&mut requests, &notifications), 1);
        assert_eq!(requests[0].rejection_reason.as_deref(), Some("Newest"));
    }

    #[test]
    fn test_blank_ids_never_match() {
        let requests = decode_list::<PurchaseRequest>(&json!([
            {"id": "", "status": "rejected"},
            {"_id": null, "status": "rejected"}
        ]))
        .unwrap()
        .items;
        let notifications = decode_list::<Notification>(&json!([{
            "id": "n1",
            "type": "purchase_request_rejected",
            "message": "Request Q was rejected: Unrelated"
        }]))
        .unwrap()
        .items;
        assert_eq!(requests.len(), 2);
        assert!(notifications[0].related_id.is_empty());

        let enriched = enrich_with_notifications(requests, &notifications);
        assert!(enriched.iter().all(|r| r.rejection_reason.is_none()));
    }
}
