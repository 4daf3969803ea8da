use std::iter::FusedIterator;

use crate::error::{
    Operation, Result, SequenceError, check_entry_index, check_insert_index, check_range, contract,
};

/// Kernel of the sequence abstraction.
///
/// - Positions are zero-based.
/// - `try_add` accepts `index` in `0..=length()`, `try_remove` accepts `index` in `0..length()`.
/// - A call that fails leaves the sequence unchanged.
/// - `add` and `remove` treat an out-of-range index as a caller bug and panic.
pub trait SequenceKernel {
    type Item;

    fn new() -> Self
    where
        Self: Sized;

    fn length(&self) -> usize;

    fn get(&self, index: usize) -> Option<&Self::Item>;

    fn try_add(&mut self, index: usize, value: Self::Item) -> Result<()>;

    fn try_remove(&mut self, index: usize) -> Result<Self::Item>;

    fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Inserts `value` at `index`, shifting later entries right.
    ///
    /// # Panics
    ///
    /// Panics if `index > self.length()`.
    #[track_caller]
    fn add(&mut self, index: usize, value: Self::Item) {
        contract(self.try_add(index, value));
    }

    /// Removes and returns the entry at `index`, shifting later entries left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.length()`.
    #[track_caller]
    fn remove(&mut self, index: usize) -> Self::Item {
        contract(self.try_remove(index))
    }

    #[track_caller]
    fn entry(&self, index: usize) -> &Self::Item {
        let len = self.length();
        match self.get(index) {
            Some(value) => value,
            None => panic!(
                "{}",
                SequenceError::IndexOutOfRange {
                    op: Operation::Entry,
                    index,
                    len,
                }
            ),
        }
    }

    fn iter(&self) -> Iter<'_, Self> {
        Iter::new(self)
    }

    /// Builds a sequence by appending each value at the end.
    fn from_entries<I: IntoIterator<Item = Self::Item>>(entries: I) -> Self
    where
        Self: Sized,
    {
        let mut seq = Self::new();
        for value in entries {
            let end = seq.length();
            seq.add(end, value);
        }
        seq
    }
}

/// Operations layered on the kernel.
///
/// Every method has a kernel-only default; implementations override the ones their
/// representation does better. Methods that move entries between two sequences leave the
/// source empty.
pub trait SequenceSecondary: SequenceKernel + Sized {
    #[track_caller]
    fn replace_entry(&mut self, index: usize, value: Self::Item) -> Self::Item {
        contract(check_entry_index(
            Operation::ReplaceEntry,
            index,
            self.length(),
        ));
        let old = self.remove(index);
        self.add(index, value);
        old
    }

    fn append(&mut self, other: &mut Self) {
        while !other.is_empty() {
            let value = other.remove(0);
            let end = self.length();
            self.add(end, value);
        }
    }

    #[track_caller]
    fn insert(&mut self, index: usize, other: &mut Self) {
        contract(check_insert_index(Operation::Insert, index, self.length()));
        let mut at = index;
        while !other.is_empty() {
            let value = other.remove(0);
            self.add(at, value);
            at += 1;
        }
    }

    /// Removes `[start, end)` and returns it as a new sequence.
    #[track_caller]
    fn extract(&mut self, start: usize, end: usize) -> Self {
        contract(check_range(start, end, self.length()));
        let mut out = Self::new();
        for _ in start..end {
            let value = self.remove(start);
            let tail = out.length();
            out.add(tail, value);
        }
        out
    }

    fn flip(&mut self) {
        let len = self.length();
        for i in 0..len {
            let last = self.remove(len - 1);
            self.add(i, last);
        }
    }

    fn clear(&mut self) {
        while !self.is_empty() {
            let last = self.length() - 1;
            self.remove(last);
        }
    }
}

/// Position-wise equality between any two sequence implementations.
pub fn entries_eq<A, B>(left: &A, right: &B) -> bool
where
    A: SequenceKernel + ?Sized,
    B: SequenceKernel<Item = A::Item> + ?Sized,
    A::Item: PartialEq,
{
    left.length() == right.length() && left.iter().zip(right.iter()).all(|(l, r)| l == r)
}

/// Front-to-back iterator over a sequence, driven by [`SequenceKernel::get`].
pub struct Iter<'a, S: ?Sized> {
    seq: &'a S,
    front: usize,
    back: usize,
}

impl<'a, S: SequenceKernel + ?Sized> Iter<'a, S> {
    fn new(seq: &'a S) -> Self {
        Self {
            seq,
            front: 0,
            back: seq.length(),
        }
    }
}

impl<S: ?Sized> Clone for Iter<'_, S> {
    fn clone(&self) -> Self {
        Self {
            seq: self.seq,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, S: SequenceKernel + ?Sized> Iterator for Iter<'a, S> {
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.seq.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<S: SequenceKernel + ?Sized> DoubleEndedIterator for Iter<'_, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.seq.get(self.back)
    }
}

impl<S: SequenceKernel + ?Sized> ExactSizeIterator for Iter<'_, S> {}

impl<S: SequenceKernel + ?Sized> FusedIterator for Iter<'_, S> {}
