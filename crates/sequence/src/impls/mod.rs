pub mod array;
pub mod reference;
pub mod treap;
pub mod two_stack;

pub use array::ArraySequence;
pub use reference::ReferenceSequence;
pub use treap::TreapSequence;
pub use two_stack::TwoStackSequence;
