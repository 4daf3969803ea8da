use crate::error::{
    Operation, Result, check_entry_index, check_insert_index, check_range, contract,
};
use crate::traits::{SequenceKernel, SequenceSecondary};

/// Contiguous sequence; `add` and `remove` shift the tail.
#[derive(Clone)]
pub struct ArraySequence<T> {
    data: Vec<T>,
}

impl<T> ArraySequence<T> {
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> From<Vec<T>> for ArraySequence<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> SequenceKernel for ArraySequence<T> {
    type Item = T;

    fn new() -> Self {
        ArraySequence::new()
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
        check_entry_index(Operation::Remove, index, self.data.len())?;
        Ok(self.data.remove(index))
    }
}

impl<T> SequenceSecondary for ArraySequence<T> {
    fn replace_entry(&mut self, index: usize, value: T) -> T {
        contract(check_entry_index(
            Operation::ReplaceEntry,
            index,
            self.data.len(),
        ));
        std::mem::replace(&mut self.data[index], value)
    }

    fn append(&mut self, other: &mut Self) {
        self.data.append(&mut other.data);
    }

    fn insert(&mut self, index: usize, other: &mut Self) {
        contract(check_insert_index(Operation::Insert, index, self.data.len()));
        self.data.splice(index..index, other.data.drain(..));
    }

    fn extract(&mut self, start: usize, end: usize) -> Self {
        contract(check_range(start, end, self.data.len()));
        Self {
            data: self.data.drain(start..end).collect(),
        }
    }

    fn flip(&mut self) {
        self.data.reverse();
    }

    fn clear(&mut self) {
        self.data.clear();
    }
}

impl_sequence_traits!(ArraySequence);
