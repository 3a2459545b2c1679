/// Counts consecutive 401/403 answers. Any success resets the count; once
/// the threshold is reached the page offers to sign in again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthFailureTracker {
    consecutive: u32,
    threshold: u32,
}

impl AuthFailureTracker {
    pub fn new(threshold: u32) -> Self {
        Self {
            consecutive: 0,
            threshold: threshold.max(1),
        }
    }

    pub fn record_failure(&mut self) {
        self.consecutive = self.consecutive.saturating_add(1);
    }

    pub fn record_success(&mut self) {
        self.consecutive = 0;
    }

    /// Feed the outcome of one fetch
    pub fn record(&mut self, auth_failed: bool) {
        if auth_failed {
            self.record_failure();
        } else {
            self.record_success();
        }
    }

    pub fn consecutive(&self) -> u32 {
        self.consecutive
    }

    pub fn should_prompt_relogin(&self) -> bool {
        self.consecutive >= self.threshold
    }
}

impl Default for AuthFailureTracker {
    fn default() -> Self {
        Self::new(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_after_threshold() {
        let mut tracker = AuthFailureTracker::default();
        tracker.record(true);
        tracker.record(true);
        assert!(!tracker.should_prompt_relogin());
        tracker.record(true);
        assert!(tracker.should_prompt_relogin());
    }

    #[test]
    fn test_success_resets() {
        let mut tracker = AuthFailureTracker::new(2);
        tracker.record_failure();
        tracker.record_success();
        tracker.record_failure();
        assert_eq!(tracker.consecutive(), 1);
        assert!(!tracker.should_prompt_relogin());
    }

    #[test]
    fn test_zero_threshold_is_one() {
        let mut tracker = AuthFailureTracker::new(0);
        assert!(!tracker.should_prompt_relogin());
        tracker.record_failure();
        assert!(tracker.should_prompt_relogin());
    }
}
