//! Bounded snapshot history.

use std::{collections::VecDeque, num::NonZero};

/// A bounded stack of pre-change snapshots.
///
/// Every placement-changing action pushes the value that was current
/// *before* the change, so popping restores exactly the state preceding
/// the most recent action. When the stack is full the oldest snapshot is
/// dropped: undo depth is bounded, never the ability to keep playing.
///
/// Undo itself and reset never push; reset clears the stack instead.
#[derive(Debug, Clone)]
pub struct HistoryStack<T> {
    stack: VecDeque<T>,
    capacity: NonZero<usize>,
}

impl<T> HistoryStack<T> {
    /// Default number of snapshots retained.
    pub const DEFAULT_CAPACITY: NonZero<usize> = NonZero::new(256).unwrap();

    /// Creates an empty stack with [`Self::DEFAULT_CAPACITY`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates an empty stack retaining at most `capacity` snapshots.
    #[must_use]
    pub fn with_capacity(capacity: NonZero<usize>) -> Self {
        Self {
            stack: VecDeque::new(),
            capacity,
        }
    }

    /// Returns the maximum number of retained snapshots.
    #[must_use]
    pub fn capacity(&self) -> NonZero<usize> {
        self.capacity
    }

    /// Returns the number of stored snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Returns `true` if no snapshots are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Pushes a snapshot, dropping the oldest one when at capacity.
    pub fn push(&mut self, item: T) {
        if self.stack.len() == self.capacity.get() {
            self.stack.pop_front();
        }
        self.stack.push_back(item);
    }

    /// Removes and returns the most recent snapshot, if any.
    pub fn pop(&mut self) -> Option<T> {
        self.stack.pop_back()
    }

    /// Discards all snapshots.
    pub fn clear(&mut self) {
        self.stack.clear();
    }
}

impl<T> Default for HistoryStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use super::HistoryStack;

    #[test]
    fn push_pop_is_lifo() {
        let mut history = HistoryStack::new();
        history.push(1);
        history.push(2);
        history.push(3);

        assert_eq!(history.pop(), Some(3));
        assert_eq!(history.pop(), Some(2));
        assert_eq!(history.pop(), Some(1));
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn pop_on_empty_returns_none() {
        let mut history: HistoryStack<i32> = HistoryStack::new();
        assert!(history.is_empty());
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn capacity_drops_oldest_snapshot() {
        let mut history = HistoryStack::with_capacity(NonZero::new(3).unwrap());
        history.push(1);
        history.push(2);
        history.push(3);
        history.push(4);

        assert_eq!(history.len(), 3);
        assert_eq!(history.pop(), Some(4));
        assert_eq!(history.pop(), Some(3));
        assert_eq!(history.pop(), Some(2));
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn clear_empties_the_stack() {
        let mut history = HistoryStack::new();
        history.push(1);
        history.push(2);

        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.pop(), None);
    }
}
