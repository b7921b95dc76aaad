//! Turn tracking: which mark moves next.

use super::types::Mark;
use tracing::{debug, instrument};

/// Hands out marks in strict alternation for one game session.
///
/// Owned by the game loop and passed by `&mut`. The board and rule
/// functions never see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnTracker {
    next: Mark,
}

impl TurnTracker {
    /// Creates a tracker whose first call to [`next_mark`](Self::next_mark) returns `first`.
    #[instrument]
    pub fn new(first: Mark) -> Self {
        Self { next: first }
    }

    /// Returns the mark for the current move and advances to the other one.
    #[instrument(skip(self), fields(mark = %self.next))]
    pub fn next_mark(&mut self) -> Mark {
        let mark = self.next;
        self.next = mark.opponent();
        debug!(next = %self.next, "Turn advanced");
        mark
    }

    /// Returns the mark the next call will hand out, without advancing.
    pub fn peek_next(&self) -> Mark {
        self.next
    }
}

impl Default for TurnTracker {
    fn default() -> Self {
        Self::new(Mark::X)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_consecutive_marks_differ() {
        let mut tracker = TurnTracker::default();
        let marks: Vec<Mark> = (0..10).map(|_| tracker.next_mark()).collect();

        for window in marks.windows(2) {
            assert_ne!(window[0], window[1]);
        }
        assert!(marks.iter().all(|m| Mark::iter().any(|known| known == *m)));
    }

    #[test]
    fn test_first_mark_is_configurable() {
        assert_eq!(TurnTracker::new(Mark::X).next_mark(), Mark::X);
        assert_eq!(TurnTracker::new(Mark::O).next_mark(), Mark::O);
    }

    #[test]
    fn test_peek_does_not_advance() {
        let mut tracker = TurnTracker::new(Mark::O);
        assert_eq!(tracker.peek_next(), Mark::O);
        assert_eq!(tracker.peek_next(), Mark::O);
        assert_eq!(tracker.next_mark(), Mark::O);
        assert_eq!(tracker.peek_next(), Mark::X);
    }
}
