//! Local list patching from server-returned records.
//!
//! After a successful write the page either refetches the collection or
//! patches its canonical list with the object the server returned. The
//! locally held pre-submission values are never used for the patch.

use super::AggregateRoot;

/// Replace the element with the same id as `returned`, or append it
pub fn upsert_canonical<T: AggregateRoot>(list: &mut Vec<T>, returned: T) {
    match list.iter().position(|item| item.id() == returned.id()) {
        Some(pos) => list[pos] = returned,
        None => list.push(returned),
    }
}

/// Remove the element with `id`; returns whether anything was removed
pub fn remove_by_id<T: AggregateRoot>(list: &mut Vec<T>, id: &str) -> bool {
    let before = list.len();
    list.retain(|item| item.id() != id);
    list.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        value: i32,
    }

    impl AggregateRoot for Row {
        fn id(&self) -> &str {
            &self.id
        }
        fn collection_name() -> &'static str {
            "rows"
        }
        fn element_name() -> &'static str {
            "Row"
        }
    }

    fn row(id: &str, value: i32) -> Row {
        Row {
            id: id.to_string(),
            value,
        }
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut list = vec![row("a", 1), row("b", 2), row("c", 3)];
        upsert_canonical(&mut list, row("b", 20));
        assert_eq!(list, vec![row("a", 1), row("b", 20), row("c", 3)]);
    }

    #[test]
    fn test_upsert_appends_new() {
        let mut list = vec![row("a", 1)];
        upsert_canonical(&mut list, row("z", 9));
        assert_eq!(list.len(), 2);
        assert_eq!(list[1], row("z", 9));
    }

    #[test]
    fn test_remove_by_id() {
        let mut list = vec![row("a", 1), row("b", 2)];
        assert!(remove_by_id(&mut list, "a"));
        assert!(!remove_by_id(&mut list, "missing"));
        assert_eq!(list, vec![row("b", 2)]);
    }
}
