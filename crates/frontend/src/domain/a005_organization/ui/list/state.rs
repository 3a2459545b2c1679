use contracts::domain::a005_organization::Organization;
use contracts::enums::EntityStatus;
use leptos::prelude::*;
use std::cmp::Ordering;

use crate::shared::list_utils::{
    cmp_f64, cmp_text, contains_ci, filter_list, sort_list, Searchable, Sortable,
};

impl Searchable for Organization {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter)
            || contains_ci(&self.code, filter)
            || contains_ci(&self.admin_email, filter)
            || contains_ci(&self.admin_name, filter)
    }
}

impl Sortable for Organization {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => cmp_text(&self.code, &other.code),
            "status" => self.status.code().cmp(other.status.code()),
            "clients" => self.stats.clients_count.cmp(&other.stats.clients_count),
            "dealers" => self.stats.dealers_count.cmp(&other.stats.dealers_count),
            "total_sales" => cmp_f64(self.stats.total_sales, other.stats.total_sales),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => cmp_text(&self.name, &other.name),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrganizationListState {
    pub search: String,
    pub status: String,
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for OrganizationListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: String::new(),
            sort_field: "name".into(),
            sort_ascending: true,
        }
    }
}

impl OrganizationListState {
    pub fn active_filter_count(&self) -> usize {
        usize::from(!self.search.trim().is_empty()) + usize::from(!self.status.is_empty())
    }

    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.status.clear();
    }

    pub fn apply(&self, items: &[Organization], min_search_len: usize) -> Vec<Organization> {
        let status = EntityStatus::from_code(&self.status);
        let mut out: Vec<Organization> = filter_list(items.to_vec(), &self.search, min_search_len)
            .into_iter()
            .filter(|o| status.map_or(true, |s| o.status == s))
            .collect();
        sort_list(&mut out, &self.sort_field, self.sort_ascending);
        out
    }
}

pub fn create_state() -> RwSignal<OrganizationListState> {
    RwSignal::new(OrganizationListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn items() -> Vec<Organization> {
        serde_json::from_value(json!([
            {"id": "1", "name": "south", "code": "s", "adminEmail": "ops@south.example",
             "stats": {"clientsCount": 2}},
            {"id": "2", "name": "North", "code": "n", "status": "inactive",
             "stats": {"clientsCount": 9}},
            {"id": "3", "name": "East", "code": "e", "adminName": "Kim"}
        ]))
        .unwrap()
    }

    fn ids(list: &[Organization]) -> Vec<&str> {
        list.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn test_default_sort_is_by_name() {
        let state = OrganizationListState::default();
        assert_eq!(ids(&state.apply(&items(), 1)), vec!["3", "2", "1"]);
    }

    #[test]
    fn test_filters() {
        let mut state = OrganizationListState::default();
        state.search = "KIM".into();
        assert_eq!(ids(&state.apply(&items(), 1)), vec!["3"]);
        state.search.clear();
        state.status = "active".into();
        assert_eq!(ids(&state.apply(&items(), 1)), vec!["3", "1"]);
        state.sort_field = "clients".into();
        state.sort_ascending = false;
        state.status.clear();
        assert_eq!(ids(&state.apply(&items(), 1)), vec!["2", "1", "3"]);
    }
}
