//! Page categories used by `PageFrame`.
//!
//! Every page declares an HTML `id` of the form `{entity}--{category}`
//! (e.g. `"a001_product--list"`) so the DOM id leads straight to the
//! `domain/a001_product/` directory.

/// Table of records with filters
pub const PAGE_CAT_LIST: &str = "list";

/// Create/edit form for one record
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Login and other shell pages
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Split `"{entity}--{category}"`; `None` if the id is malformed or the
/// category is not one of the constants above.
pub fn parse_page_id(id: &str) -> Option<(&str, &str)> {
    let (entity, category) = id.split_once("--")?;
    if entity.is_empty() {
        return None;
    }
    [PAGE_CAT_LIST, PAGE_CAT_DETAIL, PAGE_CAT_SYSTEM]
        .contains(&category)
        .then_some((entity, category))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_id() {
        assert_eq!(parse_page_id("a001_product--list"), Some(("a001_product", "list")));
        assert_eq!(parse_page_id("login--system"), Some(("login", "system")));
        assert_eq!(parse_page_id("a001_product--dashboard"), None);
        assert_eq!(parse_page_id("--list"), None);
        assert_eq!(parse_page_id("a001_product"), None);
    }
}
