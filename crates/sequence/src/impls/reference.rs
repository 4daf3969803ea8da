use std::collections::VecDeque;

use crate::error::{
    Operation, Result, SequenceError, check_insert_index, check_range, contract,
};
use crate::traits::{SequenceKernel, SequenceSecondary};

/// Oracle implementation for comparing other sequences against.
///
/// Every operation, secondary ones included, maps directly onto a `VecDeque` call.
#[derive(Clone)]
pub struct ReferenceSequence<T> {
    data: VecDeque<T>,
}

impl<T> ReferenceSequence<T> {
    pub const fn new() -> Self {
        Self {
            data: VecDeque::new(),
        }
    }
}

impl<T> SequenceKernel for ReferenceSequence<T> {
    type Item = T;

    fn new() -> Self {
        ReferenceSequence::new()
    }

    fn length(&self) -> usize {
        self.data.len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    fn try_add(&mut self, index: usize, value: T) -> Result<()> {
        check_insert_index(Operation::Add, index, self.data.len())?;
        self.data.insert(index, value);
        Ok(())
    }

    fn try_remove(&mut self, index: usize) -> Result<T> {
        let len = self.data.len();
        self.data.remove(index).ok_or(SequenceError::IndexOutOfRange {
            op: Operation::Remove,
            index,
            len,
        })
    }
}

impl<T> SequenceSecondary for ReferenceSequence<T> {
    fn replace_entry(&mut self, index: usize, value: T) -> T {
        let len = self.data.len();
        match self.data.get_mut(index) {
            Some(slot) => std::mem::replace(slot, value),
            None => panic!(
                "{}",
                SequenceError::IndexOutOfRange {
                    op: Operation::ReplaceEntry,
                    index,
                    len,
                }
            ),
        }
    }

    fn append(&mut self, other: &mut Self) {
        self.data.append(&mut other.data);
    }

    fn insert(&mut self, index: usize, other: &mut Self) {
        contract(check_insert_index(Operation::Insert, index, self.data.len()));
        let mut tail = self.data.split_off(index);
        self.data.append(&mut other.data);
        self.data.append(&mut tail);
    }

    fn extract(&mut self, start: usize, end: usize) -> Self {
        contract(check_range(start, end, self.data.len()));
        Self {
            data: self.data.drain(start..end).collect(),
        }
    }

    fn flip(&mut self) {
        self.data.make_contiguous().reverse();
    }

    fn clear(&mut self) {
        self.data.clear();
    }
}

impl_sequence_traits!(ReferenceSequence);
