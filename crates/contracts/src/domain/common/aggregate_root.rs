/// Trait for a server-owned aggregate as seen by the front-end.
///
/// Records are created and mutated by the backend; the client only needs a
/// stable string id to reconcile local copies with the server's returned
/// representation, plus static metadata for routing and UI labels.
pub trait AggregateRoot {
    // ============================================================================
    // Instance methods
    // ============================================================================

    /// Server-assigned id of the record
    fn id(&self) -> &str;

    // ============================================================================
    // Static aggregate metadata
    // ============================================================================

    /// REST collection segment (e.g. "products" for `/api/products`)
    fn collection_name() -> &'static str;

    /// Singular UI label (e.g. "Product")
    fn element_name() -> &'static str;

    /// Collection path under `/api`
    fn collection_path() -> String {
        format!("/api/{}", Self::collection_name())
    }

    /// Item path under `/api`; the id is percent-encoded
    fn item_path(id: &str) -> String {
        format!("/api/{}/{}", Self::collection_name(), urlencoding::encode(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Widget;

    impl AggregateRoot for Widget {
        fn id(&self) -> &str {
            "x"
        }
        fn collection_name() -> &'static str {
            "widgets"
        }
        fn element_name() -> &'static str {
            "Widget"
        }
    }

    #[test]
    fn test_paths() {
        assert_eq!(Widget::collection_path(), "/api/widgets");
        assert_eq!(Widget::item_path("abc-123"), "/api/widgets/abc-123");
        assert_eq!(Widget::item_path("a b/c"), "/api/widgets/a%20b%2Fc");
    }
}
