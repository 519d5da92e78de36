//! Monotonic request numbering.
//!
//! Overlapping requests for the same resource may resolve in any order. Tagging
//! each with [`RequestSequence::issue`] and applying a response only when
//! [`RequestSequence::is_latest`] holds makes the most recently *issued* request
//! win, regardless of arrival order.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next sequence number, invalidating all earlier ones.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }

    pub fn is_latest(&self, seq: u64) -> bool {
        seq != 0 && seq == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_is_monotonic() {
        let mut sequence = RequestSequence::new();
        let first = sequence.issue();
        let second = sequence.issue();
        assert!(second > first);
        assert_eq!(sequence.latest(), second);
    }

    #[test]
    fn test_only_latest_is_current() {
        let mut sequence = RequestSequence::new();
        let stale = sequence.issue();
        let current = sequence.issue();
        assert!(!sequence.is_latest(stale));
        assert!(sequence.is_latest(current));
    }

    #[test]
    fn test_nothing_issued_yet() {
        let sequence = RequestSequence::new();
        assert!(!sequence.is_latest(0));
    }
}
