use contracts::domain::a002_purchase_request::{PurchaseRequest, PurchaseRequestStatus};
use leptos::prelude::*;
use std::cmp::Ordering;

use crate::shared::date_utils::{in_date_range, parse_date_input};
use crate::shared::list_utils::{
    cmp_f64, cmp_text, contains_ci, filter_list, sort_list, Searchable, Sortable,
};

impl Searchable for PurchaseRequest {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.product.label(), filter)
            || contains_ci(&self.client.label(), filter)
            || self.notes.as_deref().is_some_and(|n| contains_ci(n, filter))
            || self
                .rejection_reason
                .as_deref()
                .is_some_and(|r| contains_ci(r, filter))
    }
}

impl Sortable for PurchaseRequest {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "product" => cmp_text(&self.product.label(), &other.product.label()),
            "quantity" => self.quantity.cmp(&other.quantity),
            "total" => cmp_f64(self.total(), other.total()),
            "status" => self.status.code().cmp(other.status.code()),
            _ => self.created_at.cmp(&other.created_at),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PurchaseRequestListState {
    pub search: String,
    /// Status code, empty for all
    pub status: String,
    /// `YYYY-MM-DD` bounds from the date inputs
    pub date_from: String,
    pub date_to: String,
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for PurchaseRequestListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: String::new(),
            date_from: String::new(),
            date_to: String::new(),
            sort_field: "created_at".to_string(),
            sort_ascending: false,
        }
    }
}

impl PurchaseRequestListState {
    pub fn active_filter_count(&self) -> usize {
        [
            !self.search.trim().is_empty(),
            !self.status.is_empty(),
            parse_date_input(&self.date_from).is_some(),
            parse_date_input(&self.date_to).is_some(),
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }

    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.status.clear();
        self.date_from.clear();
        self.date_to.clear();
    }

    pub fn apply(&self, items: &[PurchaseRequest], min_search_len: usize) -> Vec<PurchaseRequest> {
        let status = PurchaseRequestStatus::from_code(&self.status);
        let from = parse_date_input(&self.date_from);
        let to = parse_date_input(&self.date_to);

        let mut out: Vec<PurchaseRequest> = filter_list(items.to_vec(), &self.search, min_search_len)
            .into_iter()
            .filter(|r| status.map_or(true, |s| r.status == s))
            .filter(|r| in_date_range(r.created_at.as_ref(), from, to))
            .collect();
        sort_list(&mut out, &self.sort_field, self.sort_ascending);
        out
    }
}

/// Counts per status for the header
pub fn status_counts(items: &[PurchaseRequest]) -> (usize, usize, usize) {
    items.iter().fold((0, 0, 0), |(p, a, r), item| match item.status {
        PurchaseRequestStatus::Pending => (p + 1, a, r),
        PurchaseRequestStatus::Approved => (p, a + 1, r),
        PurchaseRequestStatus::Rejected => (p, a, r + 1),
        PurchaseRequestStatus::Unknown => (p, a, r),
    })
}

pub fn create_state() -> RwSignal<PurchaseRequestListState> {
    RwSignal::new(PurchaseRequestListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use contracts::domain::common::EntityRef;

    fn request(id: &str, product: &str, status: PurchaseRequestStatus, day: u32) -> PurchaseRequest {
        PurchaseRequest {
            id: id.into(),
            product: EntityRef {
                id: format!("p-{}", id),
                name: Some(product.into()),
            },
            client: EntityRef::default(),
            quantity: day as i64,
            price: 2.0,
            status,
            rejection_reason: None,
            notes: None,
            created_at: Utc.with_ymd_and_hms(2024, 5, day, 9, 0, 0).single(),
        }
    }

    fn items() -> Vec<PurchaseRequest> {
        vec![
            request("a", "Cap", PurchaseRequestStatus::Pending, 3),
            request("b", "Mug", PurchaseRequestStatus::Rejected, 10),
            request("c", "Cap XL", PurchaseRequestStatus::Approved, 20),
        ]
    }

    fn ids(list: &[PurchaseRequest]) -> Vec<&str> {
        list.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_default_sort_newest_first() {
        let state = PurchaseRequestListState::default();
        assert_eq!(ids(&state.apply(&items(), 1)), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_filters() {
        let mut state = PurchaseRequestListState::default();
        state.sort_field.clear();
        state.search = "cap".into();
        assert_eq!(ids(&state.apply(&items(), 1)), vec!["a", "c"]);

        state.status = "approved".into();
        assert_eq!(ids(&state.apply(&items(), 1)), vec!["c"]);

        state.clear_filters();
        state.date_from = "2024-05-10".into();
        state.date_to = "2024-05-10".into();
        assert_eq!(ids(&state.apply(&items(), 1)), vec!["b"]);
        assert_eq!(state.active_filter_count(), 2);
    }

    #[test]
    fn test_status_counts() {
        assert_eq!(status_counts(&items()), (1, 1, 1));
    }
}
