/// One-shot visibility flag. Goes from hidden to revealed on the first
/// intersection and stays there.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds one intersection reading. Returns `true` only for the reading
    /// that flips the latch.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }
}

/// Delay in seconds for the n-th item of a staggered group.
pub fn stagger(index: usize, step_secs: f64) -> f64 {
    index as f64 * step_secs
}

pub fn transition_delay(secs: f64) -> String {
    format!("transition-delay: {:.2}s;", secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_starts_hidden() {
        assert!(!RevealLatch::default().is_revealed());
    }

    #[test]
    fn test_latch_flips_once() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(!latch.observe(true));
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_latch_never_reverts() {
        let mut latch = RevealLatch::default();
        latch.observe(true);
        latch.observe(false);
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(transition_delay(stagger(0, 0.1)), "transition-delay: 0.00s;");
        assert_eq!(transition_delay(stagger(3, 0.1)), "transition-delay: 0.30s;");
        assert_eq!(transition_delay(0.45), "transition-delay: 0.45s;");
    }
}
