use crate::error::{Operation, Result, SequenceError, check_entry_index, check_insert_index};
use crate::traits::{SequenceKernel, SequenceSecondary};

/// Sequence kept as two stacks meeting at a cursor.
///
/// The entries are `left` bottom-to-top followed by `right` top-to-bottom, so the top of
/// `right` is the entry just after the cursor. `add` and `remove` first move the cursor to the
/// requested position and then push or pop `right`; cost is proportional to the cursor travel.
#[derive(Clone)]
pub struct TwoStackSequence<T> {
    left: Vec<T>,
    right: Vec<T>,
}

impl<T> TwoStackSequence<T> {
    pub const fn new() -> Self {
        Self {
            left: Vec::new(),
            right: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            left: Vec::with_capacity(capacity),
            right: Vec::with_capacity(capacity),
        }
    }

    /// Number of entries before the cursor.
    pub fn cursor(&self) -> usize {
        self.left.len()
    }

    fn move_cursor(&mut self, position: usize) {
        debug_assert!(position <= self.left.len() + self.right.len());
        let left_len = self.left.len();
        if position < left_len {
            let moved = self.left.drain(position..).rev();
            self.right.extend(moved);
        } else if position > left_len {
            let split = self.right.len() - (position - left_len);
            let moved = self.right.drain(split..).rev();
            self.left.extend(moved);
        }
    }
}

impl<T> SequenceKernel for TwoStackSequence<T> {
    type Item = T;

    fn new() -> Self {
        TwoStackSequence::new()
    }

    fn length(&self) -> usize {
        self.left.len() + self.right.len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        let left_len = self.left.len();
        if index < left_len {
            return self.left.get(index);
        }
        let offset = index - left_len;
        if offset >= self.right.len() {
            return None;
        }
        self.right.get(self.right.len() - 1 - offset)
    }

    fn try_add(&mut self, index: usize, value: T) -> Result<()> {
        check_insert_index(Operation::Add, index, self.length())?;
        self.move_cursor(index);
        self.right.push(value);
        Ok(())
    }

    fn try_remove(&mut self, index: usize) -> Result<T> {
        let len = self.length();
        check_entry_index(Operation::Remove, index, len)?;
        self.move_cursor(index);
        self.right.pop().ok_or(SequenceError::IndexOutOfRange {
            op: Operation::Remove,
            index,
            len,
        })
    }
}

impl<T> SequenceSecondary for TwoStackSequence<T> {
    fn clear(&mut self) {
        self.left.clear();
        self.right.clear();
    }
}

impl_sequence_traits!(TwoStackSequence);
