use contracts::domain::a006_dealer_slot::DealerSlot;
use contracts::enums::EntityStatus;
use leptos::prelude::*;
use std::cmp::Ordering;

use crate::shared::list_utils::{
    cmp_f64, cmp_text, contains_ci, filter_list, sort_list, Searchable, Sortable,
};

impl Searchable for DealerSlot {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.dealer_name, filter)
            || contains_ci(&self.dealer_email, filter)
            || contains_ci(self.client.label(), filter)
            || self.slot_number.to_string() == filter.trim()
    }
}

impl Sortable for DealerSlot {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "dealer_name" => cmp_text(&self.dealer_name, &other.dealer_name),
            "client" => cmp_text(self.client.label(), other.client.label()),
            "status" => self.status.code().cmp(other.status.code()),
            "total_sales" => cmp_f64(self.stats.total_sales, other.stats.total_sales),
            "points" => self.stats.points_earned.cmp(&other.stats.points_earned),
            _ => self.slot_number.cmp(&other.slot_number),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DealerSlotListState {
    pub search: String,
    pub status: String,
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for DealerSlotListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: String::new(),
            sort_field: "slot_number".into(),
            sort_ascending: true,
        }
    }
}

impl DealerSlotListState {
    pub fn active_filter_count(&self) -> usize {
        usize::from(!self.search.trim().is_empty()) + usize::from(!self.status.is_empty())
    }

    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.status.clear();
    }

    pub fn apply(&self, items: &[DealerSlot], min_search_len: usize) -> Vec<DealerSlot> {
        let status = EntityStatus::from_code(&self.status);
        let mut out: Vec<DealerSlot> = filter_list(items.to_vec(), &self.search, min_search_len)
            .into_iter()
            .filter(|d| status.map_or(true, |s| d.status == s))
            .collect();
        sort_list(&mut out, &self.sort_field, self.sort_ascending);
        out
    }
}

/// Slot number offered for a new dealer
pub fn next_slot_number(items: &[DealerSlot]) -> i64 {
    items.iter().map(|d| d.slot_number).max().unwrap_or(0).max(0) + 1
}

pub fn create_state() -> RwSignal<DealerSlotListState> {
    RwSignal::new(DealerSlotListState::default())
}
