use contracts::domain::a001_product::{InventoryStatus, Product};
use leptos::prelude::*;
use std::cmp::Ordering;

use crate::shared::list_utils::{
    cmp_f64, cmp_text, contains_ci, filter_list, in_range, matches_choice, parse_opt_f64,
    sort_list, Searchable, Sortable,
};

impl Searchable for Product {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter)
            || contains_ci(&self.sku, filter)
            || self
                .description
                .as_deref()
                .is_some_and(|d| contains_ci(d, filter))
    }
}

impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "sku" => cmp_text(&self.sku, &other.sku),
            "category" => cmp_text(&self.category, &other.category),
            "price" => cmp_f64(self.price, other.price),
            "stock" => self.stock.cmp(&other.stock),
            "status" => self.status().code().cmp(other.status().code()),
            "last_updated" => self.last_updated.cmp(&other.last_updated),
            _ => cmp_text(&self.name, &other.name),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProductListState {
    pub search: String,
    /// Exact category, empty for all
    pub category: String,
    /// Status code, empty for all
    pub status: String,
    pub min_price: String,
    pub max_price: String,
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: String::new(),
            status: String::new(),
            min_price: String::new(),
            max_price: String::new(),
            sort_field: String::new(),
            sort_ascending: true,
        }
    }
}

impl ProductListState {
    pub fn active_filter_count(&self) -> usize {
        [
            !self.search.trim().is_empty(),
            !self.category.is_empty(),
            !self.status.is_empty(),
            parse_opt_f64(&self.min_price).is_some(),
            parse_opt_f64(&self.max_price).is_some(),
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }

    pub fn clear_filters(&mut self) {
        *self = Self {
            sort_field: std::mem::take(&mut self.sort_field),
            sort_ascending: self.sort_ascending,
            ..Self::default()
        };
    }

    /// Filtered and sorted view of `items`; input order is kept when no
    /// sort column is selected
    pub fn apply(&self, items: &[Product], min_search_len: usize) -> Vec<Product> {
        let status = InventoryStatus::from_code(&self.status);
        let min = parse_opt_f64(&self.min_price);
        let max = parse_opt_f64(&self.max_price);

        let mut out: Vec<Product> = filter_list(items.to_vec(), &self.search, min_search_len)
            .into_iter()
            .filter(|p| matches_choice(&p.category, &self.category))
            .filter(|p| status.map_or(true, |s| p.status() == s))
            .filter(|p| in_range(p.price, min, max))
            .collect();
        sort_list(&mut out, &self.sort_field, self.sort_ascending);
        out
    }
}

/// Distinct non-empty categories in first-seen order
pub fn categories(items: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for p in items {
        let category = p.category.trim();
        if !category.is_empty() && !seen.iter().any(|c| c.eq_ignore_ascii_case(category)) {
            seen.push(category.to_string());
        }
    }
    seen
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, category: &str, price: f64, stock: i64) -> Product {
        Product {
            id: id.into(),
            name: name.into(),
            sku: format!("SKU-{}", id),
            category: category.into(),
            price,
            stock,
            reorder_level: 5,
            reserved: 0,
            points: 0,
            description: None,
            last_updated: None,
        }
    }

    fn items() -> Vec<Product> {
        vec![
            product("1", "Cap", "Apparel", 10.0, 0),
            product("2", "Mug", "Kitchen", 7.5, 3),
            product("3", "Hoodie", "Apparel", 45.0, 20),
            product("4", "Bottle", "Kitchen", 12.0, 40),
        ]
    }

    fn ids(list: &[Product]) -> Vec<&str> {
        list.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_no_filters_keeps_order() {
        let state = ProductListState::default();
        assert_eq!(ids(&state.apply(&items(), 1)), vec!["1", "2", "3", "4"]);
        assert_eq!(state.active_filter_count(), 0);
    }

    #[test]
    fn test_search_matches_name_and_sku() {
        let mut state = ProductListState::default();
        state.search = "sku-3".into();
        assert_eq!(ids(&state.apply(&items(), 1)), vec!["3"]);
        state.search = "MUG".into();
        assert_eq!(ids(&state.apply(&items(), 1)), vec!["2"]);
    }

    #[test]
    fn test_category_status_and_price() {
        let mut state = ProductListState::default();
        state.category = "apparel".into();
        assert_eq!(ids(&state.apply(&items(), 1)), vec!["1", "3"]);

        state.category.clear();
        state.status = "low_stock".into();
        assert_eq!(ids(&state.apply(&items(), 1)), vec!["2"]);

        state.status.clear();
        state.min_price = "10".into();
        state.max_price = "12".into();
        assert_eq!(ids(&state.apply(&items(), 1)), vec!["1", "4"]);
        assert_eq!(state.active_filter_count(), 2);
    }

    #[test]
    fn test_sort_and_clear() {
        let mut state = ProductListState::default();
        state.sort_field = "price".into();
        state.sort_ascending = false;
        state.search = "o".into();
        assert_eq!(ids(&state.apply(&items(), 1)), vec!["3", "4"]);
        state.clear_filters();
        assert_eq!(state.active_filter_count(), 0);
        assert_eq!(state.sort_field, "price");
        assert_eq!(ids(&state.apply(&items(), 1)), vec!["3", "4", "1", "2"]);
    }

    #[test]
    fn test_categories_distinct() {
        assert_eq!(categories(&items()), vec!["Apparel", "Kitchen"]);
    }
}
