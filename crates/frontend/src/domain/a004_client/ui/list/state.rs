use contracts::domain::a004_client::Client;
use contracts::enums::EntityStatus;
use leptos::prelude::*;
use std::cmp::Ordering;

use crate::shared::list_utils::{
    cmp_f64, cmp_text, contains_ci, filter_list, sort_list, Searchable, Sortable,
};

impl Searchable for Client {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter)
            || contains_ci(&self.email, filter)
            || contains_ci(&self.company.name, filter)
            || contains_ci(&self.phone, filter)
            || contains_ci(&self.address.city, filter)
    }
}

impl Sortable for Client {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "email" => cmp_text(&self.email, &other.email),
            "status" => self.status.code().cmp(other.status.code()),
            "total_sales" => cmp_f64(self.stats.total_sales, other.stats.total_sales),
            "total_orders" => self.stats.total_orders.cmp(&other.stats.total_orders),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => cmp_text(self.display_name(), other.display_name()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClientListState {
    pub search: String,
    pub status: String,
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for ClientListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: String::new(),
            sort_field: String::new(),
            sort_ascending: true,
        }
    }
}

impl ClientListState {
    pub fn active_filter_count(&self) -> usize {
        usize::from(!self.search.trim().is_empty()) + usize::from(!self.status.is_empty())
    }

    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.status.clear();
    }

    pub fn apply(&self, items: &[Client], min_search_len: usize) -> Vec<Client> {
        let status = EntityStatus::from_code(&self.status);
        let mut out: Vec<Client> = filter_list(items.to_vec(), &self.search, min_search_len)
            .into_iter()
            .filter(|c| status.map_or(true, |s| c.status == s))
            .collect();
        sort_list(&mut out, &self.sort_field, self.sort_ascending);
        out
    }
}

pub fn create_state() -> RwSignal<ClientListState> {
    RwSignal::new(ClientListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn items() -> Vec<Client> {
        serde_json::from_value(json!([
            {"id": "1", "name": "Jane", "email": "jane@roe.example", "company": {"name": "Roe Motors"},
             "stats": {"totalSales": 500}},
            {"id": "2", "name": "Ann", "email": "ann@ace.example", "status": "suspended",
             "stats": {"totalSales": 1500}},
            {"id": "3", "name": "Bob", "email": "bob@roe.example", "status": "inactive",
             "address": {"city": "Austin"}}
        ]))
        .unwrap()
    }

    fn ids(list: &[Client]) -> Vec<&str> {
        list.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_search_and_status() {
        let mut state = ClientListState::default();
        state.search = "roe".into();
        assert_eq!(ids(&state.apply(&items(), 1)), vec!["1", "3"]);
        state.status = "inactive".into();
        assert_eq!(ids(&state.apply(&items(), 1)), vec!["3"]);
        assert_eq!(state.active_filter_count(), 2);
        state.search = "austin".into();
        state.status.clear();
        assert_eq!(ids(&state.apply(&items(), 1)), vec!["3"]);
    }

    #[test]
    fn test_sort_by_sales_then_clear() {
        let mut state = ClientListState::default();
        state.sort_field = "total_sales".into();
        state.sort_ascending = false;
        assert_eq!(ids(&state.apply(&items(), 1)), vec!["2", "1", "3"]);
        state.search = "x".into();
        state.clear_filters();
        assert_eq!(state.active_filter_count(), 0);
        assert_eq!(state.sort_field, "total_sales");
    }

    #[test]
    fn test_default_sort_uses_company_name() {
        let mut state = ClientListState::default();
        state.sort_field = "name".into();
        assert_eq!(ids(&state.apply(&items(), 1)), vec!["2", "3", "1"]);
    }
}
