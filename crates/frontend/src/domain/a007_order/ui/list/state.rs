use contracts::domain::a007_order::{Order, OrderStatus};
use leptos::prelude::*;
use std::cmp::Ordering;

use crate::shared::date_utils::{in_date_range, parse_date_input};
use crate::shared::list_utils::{
    cmp_f64, cmp_text, contains_ci, filter_list, in_range, parse_opt_f64, sort_list, Searchable,
    Sortable,
};

impl Searchable for Order {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.display_number(), filter)
            || contains_ci(self.dealer.label(), filter)
            || contains_ci(self.client.label(), filter)
            || self
                .items
                .iter()
                .any(|item| contains_ci(item.product.label(), filter))
    }
}

impl Sortable for Order {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "order_number" => cmp_text(&self.display_number(), &other.display_number()),
            "dealer" => cmp_text(self.dealer.label(), other.dealer.label()),
            "total" => cmp_f64(self.total(), other.total()),
            "points" => self.total_points().cmp(&other.total_points()),
            "status" => self.status.code().cmp(other.status.code()),
            _ => self.created_at.cmp(&other.created_at),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrderListState {
    pub search: String,
    pub status: String,
    pub date_from: String,
    pub date_to: String,
    pub min_points: String,
    pub max_points: String,
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for OrderListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: String::new(),
            date_from: String::new(),
            date_to: String::new(),
            min_points: String::new(),
            max_points: String::new(),
            sort_field: "created_at".to_string(),
            sort_ascending: false,
        }
    }
}

impl OrderListState {
    pub fn active_filter_count(&self) -> usize {
        [
            !self.search.trim().is_empty(),
            !self.status.is_empty(),
            parse_date_input(&self.date_from).is_some(),
            parse_date_input(&self.date_to).is_some(),
            parse_opt_f64(&self.min_points).is_some(),
            parse_opt_f64(&self.max_points).is_some(),
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
        self.min_points.clear();
        self.max_points.clear();
    }

    pub fn apply(&self, items: &[Order], min_search_len: usize) -> Vec<Order> {
        let status = OrderStatus::from_code(&self.status);
        let from = parse_date_input(&self.date_from);
        let to = parse_date_input(&self.date_to);
        let min_points = parse_opt_f64(&self.min_points);
        let max_points = parse_opt_f64(&self.max_points);

        let mut out: Vec<Order> = filter_list(items.to_vec(), &self.search, min_search_len)
            .into_iter()
            .filter(|o| status.map_or(true, |s| o.status == s))
            .filter(|o| in_date_range(o.created_at.as_ref(), from, to))
            .filter(|o| in_range(o.total_points() as f64, min_points, max_points))
            .collect();
        sort_list(&mut out, &self.sort_field, self.sort_ascending);
        out
    }
}

/// Total amount and points over `orders`
pub fn totals(orders: &[Order]) -> (f64, i64) {
    orders
        .iter()
        .fold((0.0, 0), |(amount, points), o| (amount + o.total(), points + o.total_points()))
}

pub fn create_state() -> RwSignal<OrderListState> {
    RwSignal::new(OrderListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn items() -> Vec<Order> {
        serde_json::from_value(json!([
            {"id": "o1", "orderNumber": "ORD-1", "dealer": {"_id": "d1", "dealerName": "Speedy"},
             "total": 100.0, "points": 50, "status": "completed", "createdAt": "2024-03-01T10:00:00Z",
             "items": [{"product": {"_id": "p1", "name": "Brake pads"}, "quantity": 2, "price": 50.0}]},
            {"id": "o2", "orderNumber": "ORD-2", "dealer": "d2",
             "total": 20.0, "points": 5, "status": "pending", "createdAt": "2024-03-05T10:00:00Z"},
            {"id": "o3", "orderNumber": "ORD-3", "dealer": {"_id": "d1", "dealerName": "Speedy"},
             "total": 60.0, "points": 30, "status": "canceled", "createdAt": "2024-02-20T10:00:00Z"}
        ]))
        .unwrap()
    }

    fn ids(list: &[Order]) -> Vec<&str> {
        list.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn test_newest_first_by_default() {
        let state = OrderListState::default();
        assert_eq!(ids(&state.apply(&items(), 1)), vec!["o2", "o1", "o3"]);
    }

    #[test]
    fn test_search_matches_dealer_and_products() {
        let mut state = OrderListState::default();
        state.search = "speedy".into();
        assert_eq!(ids(&state.apply(&items(), 1)), vec!["o1", "o3"]);
        state.search = "brake".into();
        assert_eq!(ids(&state.apply(&items(), 1)), vec!["o1"]);
    }

    #[test]
    fn test_status_date_and_points_ranges() {
        let mut state = OrderListState::default();
        state.status = "cancelled".into();
        assert_eq!(ids(&state.apply(&items(), 1)), vec!["o3"]);

        state.status.clear();
        state.date_from = "2024-03-01".into();
        assert_eq!(ids(&state.apply(&items(), 1)), vec!["o2", "o1"]);

        state.min_points = "10".into();
        state.max_points = "50".into();
        assert_eq!(ids(&state.apply(&items(), 1)), vec!["o1"]);
        assert_eq!(state.active_filter_count(), 3);

        state.clear_filters();
        assert_eq!(state.active_filter_count(), 0);
    }

    #[test]
    fn test_totals() {
        assert_eq!(totals(&items()), (180.0, 85));
    }
}
