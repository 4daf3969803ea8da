#[macro_use]
mod macros;
mod error;
mod traits;

pub mod impls;

pub use error::{Operation, Result, SequenceError};
pub use impls::{ArraySequence, ReferenceSequence, TreapSequence, TwoStackSequence};
pub use traits::{Iter, SequenceKernel, SequenceSecondary, entries_eq};
