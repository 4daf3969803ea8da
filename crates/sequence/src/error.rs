use std::fmt;

use thiserror::Error;

/// The positional operation that rejected an index.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Operation {
    Add,
    Remove,
    Entry,
    ReplaceEntry,
    Insert,
    Extract,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Entry => "entry",
            Self::ReplaceEntry => "replace_entry",
            Self::Insert => "insert",
            Self::Extract => "extract",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum SequenceError {
    #[error("{op}: index {index} out of range for sequence of length {len}")]
    IndexOutOfRange {
        op: Operation,
        index: usize,
        len: usize,
    },
    #[error("extract: range {start}..{end} out of range for sequence of length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, SequenceError>;

/// Valid insertion points are `0..=len`.
pub(crate) fn check_insert_index(op: Operation, index: usize, len: usize) -> Result<()> {
    if index > len {
        return Err(SequenceError::IndexOutOfRange { op, index, len });
    }
    Ok(())
}

/// Valid element positions are `0..len`.
pub(crate) fn check_entry_index(op: Operation, index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(SequenceError::IndexOutOfRange { op, index, len });
    }
    Ok(())
}

/// Unwraps a checked result, treating an error as a broken caller contract.
#[track_caller]
pub(crate) fn contract<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

pub(crate) fn check_range(start: usize, end: usize, len: usize) -> Result<()> {
    if start > end || end > len {
        return Err(SequenceError::InvalidRange { start, end, len });
    }
    Ok(())
}
