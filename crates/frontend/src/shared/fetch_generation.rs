use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Monotonic counter guarding a page's fetches. Each fetch takes a ticket;
/// a response is applied only if no newer fetch started since.
#[derive(Debug, Clone, Default)]
pub struct FetchGeneration(Arc<AtomicU64>);

impl FetchGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch and get its ticket
    pub fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.load(Ordering::SeqCst) == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_ticket_rejected() {
        let generation = FetchGeneration::new();
        let first = generation.begin();
        assert!(generation.is_current(first));
        let second = generation.clone().begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }
}
