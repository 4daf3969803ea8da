use crate::error::{
    Operation, Result, SequenceError, check_entry_index, check_insert_index, check_range,
    contract,
};
use crate::traits::{SequenceKernel, SequenceSecondary};

const DEFAULT_SEED: u64 = 0x5EED_5E90;

#[derive(Clone, Copy)]
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        // xorshift is stuck at zero
        Self {
            state: if seed == 0 { DEFAULT_SEED } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn fork(&mut self) -> Self {
        Self::new(self.next_u64())
    }
}

/// Implicit treap: a randomized tree ordered by position instead of by key.
///
/// Every positional operation is a split and merge by subtree size, expected `O(log n)`.
#[derive(Clone)]
pub struct TreapSequence<T> {
    root: Link<T>,
    len: u32,
    rng: XorShift64,
}

#[derive(Clone)]
struct Node<T> {
    value: T,
    size: u32,
    prio: u32,
    left: Link<T>,
    right: Link<T>,
}

type Link<T> = Option<Box<Node<T>>>;

impl<T> Node<T> {
    fn new(value: T, prio: u32) -> Self {
        Self {
            value,
            size: 1,
            prio,
            left: None,
            right: None,
        }
    }

    fn size(node: &Link<T>) -> u32 {
        node.as_ref().map(|n| n.size).unwrap_or(0)
    }

    fn recalc(&mut self) {
        self.size = 1 + Self::size(&self.left) + Self::size(&self.right);
    }
}

impl<T> TreapSequence<T> {
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Fixes the priority stream, making the tree shape reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            root: None,
            len: 0,
            rng: XorShift64::new(seed),
        }
    }

    /// Depth of the deepest node; an empty treap has height 0.
    pub fn height(&self) -> usize {
        fn walk<T>(node: &Link<T>) -> usize {
            match node {
                Some(node) => 1 + walk(&node.left).max(walk(&node.right)),
                None => 0,
            }
        }
        walk(&self.root)
    }

    fn split(root: Link<T>, left_count: usize) -> (Link<T>, Link<T>) {
        let mut node = match root {
            Some(node) => node,
            None => return (None, None),
        };
        if left_count == 0 {
            return (None, Some(node));
        }
        if left_count >= node.size as usize {
            return (Some(node), None);
        }

        let left_size = Node::size(&node.left) as usize;
        if left_count <= left_size {
            let (left, right) = Self::split(node.left.take(), left_count);
            node.left = right;
            node.recalc();
            (left, Some(node))
        } else {
            let (left, right) = Self::split(node.right.take(), left_count - left_size - 1);
            node.right = left;
            node.recalc();
            (Some(node), right)
        }
    }

    fn merge(left: Link<T>, right: Link<T>) -> Link<T> {
        match (left, right) {
            (None, right) => right,
            (left, None) => left,
            (Some(mut left), Some(mut right)) => {
                if left.prio > right.prio {
                    left.right = Self::merge(left.right.take(), Some(right));
                    left.recalc();
                    Some(left)
                } else {
                    right.left = Self::merge(Some(left), right.left.take());
                    right.recalc();
                    Some(right)
                }
            }
        }
    }

    fn get_node(node: &Link<T>, index: usize) -> Option<&T> {
        let node_ref = node.as_deref()?;
        let left_size = Node::size(&node_ref.left) as usize;
        if index < left_size {
            Self::get_node(&node_ref.left, index)
        } else if index == left_size {
            Some(&node_ref.value)
        } else {
            Self::get_node(&node_ref.right, index - left_size - 1)
        }
    }

    fn sync_len(&mut self) {
        self.len = Node::size(&self.root);
    }
}

impl<T> SequenceKernel for TreapSequence<T> {
    type Item = T;

    fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    fn length(&self) -> usize {
        self.len as usize
    }

    fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len as usize {
            return None;
        }
        Self::get_node(&self.root, index)
    }

    fn try_add(&mut self, index: usize, value: T) -> Result<()> {
        check_insert_index(Operation::Add, index, self.len as usize)?;
        let prio = self.rng.next_u64() as u32;
        let node = Some(Box::new(Node::new(value, prio)));
        let (left, right) = Self::split(self.root.take(), index);
        self.root = Self::merge(Self::merge(left, node), right);
        self.len += 1;
        Ok(())
    }

    fn try_remove(&mut self, index: usize) -> Result<T> {
        check_entry_index(Operation::Remove, index, self.len as usize)?;
        let (left, rest) = Self::split(self.root.take(), index);
        let (target, right) = Self::split(rest, 1);
        self.root = Self::merge(left, right);
        self.len -= 1;
        target
            .map(|node| node.value)
            .ok_or(SequenceError::IndexOutOfRange {
                op: Operation::Remove,
                index,
                len: self.len as usize + 1,
            })
    }
}

impl<T> SequenceSecondary for TreapSequence<T> {
    fn append(&mut self, other: &mut Self) {
        self.root = Self::merge(self.root.take(), other.root.take());
        self.sync_len();
        other.len = 0;
    }

    fn insert(&mut self, index: usize, other: &mut Self) {
        contract(check_insert_index(Operation::Insert, index, self.len as usize));
        let (left, right) = Self::split(self.root.take(), index);
        self.root = Self::merge(Self::merge(left, other.root.take()), right);
        self.sync_len();
        other.len = 0;
    }

    fn extract(&mut self, start: usize, end: usize) -> Self {
        contract(check_range(start, end, self.len as usize));
        let (left, rest) = Self::split(self.root.take(), start);
        let (mid, right) = Self::split(rest, end - start);
        self.root = Self::merge(left, right);
        self.sync_len();
        let len = Node::size(&mid);
        Self {
            root: mid,
            len,
            rng: self.rng.fork(),
        }
    }

    fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }
}

impl_sequence_traits!(TreapSequence);
