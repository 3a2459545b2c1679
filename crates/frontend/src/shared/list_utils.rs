//! List helpers shared by every list page: search, range filters, sorting
//! and the search box component.
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::cmp::Ordering;

/// Rows that take part in the free-text search
pub trait Searchable {
    /// Case-insensitive match of `filter` against the row's text fields
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Rows sortable by a named column
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Case-insensitive substring test; an empty needle matches everything
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Inclusive range test with open ends
pub fn in_range<T: PartialOrd>(value: T, min: Option<T>, max: Option<T>) -> bool {
    min.map_or(true, |min| value >= min) && max.map_or(true, |max| value <= max)
}

/// Parse a numeric filter input; blank or invalid input means "no bound"
pub fn parse_opt_f64(input: &str) -> Option<f64> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    input.replace(',', "").parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Equality filter on a code; an empty selection matches everything
pub fn matches_choice(value: &str, selected: &str) -> bool {
    selected.is_empty() || value.eq_ignore_ascii_case(selected)
}

/// Keep rows matching `filter`. Text shorter than `min_len` does not filter.
/// Relative order is preserved.
pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str, min_len: usize) -> Vec<T> {
    let filter = filter.trim();
    if filter.is_empty() || filter.chars().count() < min_len {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Stable sort by column; ties keep their input order
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    if field.is_empty() {
        return;
    }
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// `f64` ordering for sort comparators; NaN sorts last
pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| b.is_nan().cmp(&a.is_nan()).reverse())
}

pub fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Indicator shown next to a column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Next `(field, ascending)` after a header click
pub fn toggle_sort(current_field: &str, ascending: bool, clicked: &str) -> (String, bool) {
    if current_field == clicked {
        (clicked.to_string(), !ascending)
    } else {
        (clicked.to_string(), true)
    }
}

/// Clickable table header that drives a `(field, ascending)` sort pair
#[component]
pub fn SortableHeaderCell(
    label: &'static str,
    field: &'static str,
    sort_field: Signal<String>,
    sort_ascending: Signal<bool>,
    #[prop(into)] on_sort: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <thaw::TableHeaderCell>
            <div class="table__sortable-header" on:click=move |_| on_sort.run(field)>
                {label}
                <span class="table__sort-indicator">
                    {move || get_sort_indicator(&sort_field.get(), field, sort_ascending.get())}
                </span>
            </div>
        </thaw::TableHeaderCell>
    }
}

/// Search box with a 300 ms debounce and a clear button
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input = move |new_value: String| {
        set_input_value.set(new_value.clone());
        pending.update_value(|slot| {
            if let Some(timer) = slot.take() {
                timer.cancel();
            }
            *slot = Some(Timeout::new(300, move || on_change.run(new_value)));
        });
    };

    let clear = move |_| {
        pending.update_value(|slot| {
            if let Some(timer) = slot.take() {
                timer.cancel();
            }
        });
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                class:search-input__field--active=move || !value.get().trim().is_empty()
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        price: f64,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ci(self.name, filter)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "price" => cmp_f64(self.price, other.price),
                _ => cmp_text(self.name, other.name),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Widget", price: 5.0 },
            Row { name: "gadget", price: 2.0 },
            Row { name: "Wide Gadget", price: 5.0 },
        ]
    }

    #[test]
    fn test_filter_preserves_order() {
        let out = filter_list(rows(), "GADGET", 1);
        assert_eq!(out.iter().map(|r| r.name).collect::<Vec<_>>(), vec!["gadget", "Wide Gadget"]);
        assert_eq!(filter_list(rows(), "ga", 3).len(), 3);
        assert_eq!(filter_list(rows(), "zzz", 1).len(), 0);
    }

    #[test]
    fn test_filter_is_deterministic() {
        assert_eq!(filter_list(rows(), "wid", 1), filter_list(rows(), "wid", 1));
    }

    #[test]
    fn test_sort_is_stable() {
        let mut items = rows();
        sort_list(&mut items, "price", false);
        assert_eq!(
            items.iter().map(|r| r.name).collect::<Vec<_>>(),
            vec!["Widget", "Wide Gadget", "gadget"]
        );
        let mut untouched = rows();
        sort_list(&mut untouched, "", true);
        assert_eq!(untouched, rows());
    }

    #[test]
    fn test_ranges_and_parsing() {
        assert!(in_range(5.0, Some(5.0), Some(10.0)));
        assert!(!in_range(11.0, None, Some(10.0)));
        assert!(in_range(3, None, None));
        assert_eq!(parse_opt_f64(" 1,250.5 "), Some(1250.5));
        assert_eq!(parse_opt_f64("abc"), None);
        assert_eq!(parse_opt_f64(""), None);
    }

    #[test]
    fn test_choice_and_sort_toggle() {
        assert!(matches_choice("pending", ""));
        assert!(matches_choice("Pending", "pending"));
        assert!(!matches_choice("approved", "pending"));
        assert_eq!(toggle_sort("name", true, "name"), ("name".to_string(), false));
        assert_eq!(toggle_sort("name", false, "price"), ("price".to_string(), true));
        assert_eq!(get_sort_indicator("name", "price", true), " ⇅");
    }
}
