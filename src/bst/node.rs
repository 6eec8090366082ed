use crate::bst::tree;
use crate::entry::Entry;

/// A struct representing an internal node of a binary search tree.
pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub left: tree::Tree<T, U>,
    pub right: tree::Tree<T, U>,
}

impl<T, U> Node<T, U> {
    pub fn new(key: T, value: U) -> Self {
        Node::from_entry(Entry::new(key, value))
    }

    pub fn from_entry(entry: Entry<T, U>) -> Self {
        Node {
            entry,
            left: None,
            right: None,
        }
    }
}
