use crate::bst::node::Node;
use crate::entry::Entry;
use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::collections::VecDeque;

pub type Tree<T, U> = Option<Box<Node<T, U>>>;

// precondition: `entries` yields at least `len` entries in strictly ascending key order
fn build_range<T, U, I>(entries: &mut I, len: usize) -> Tree<T, U>
where
    I: Iterator<Item = Entry<T, U>>,
{
    if len == 0 {
        return None;
    }

    let mid = (len - 1) / 2;
    let left = build_range(entries, mid);
    let entry = entries
        .next()
        .expect("Expected an entry for every position in the range.");
    let right = build_range(entries, len - mid - 1);
    Some(Box::new(Node { entry, left, right }))
}

/// Builds a minimal-height tree from entries that are already sorted and unique. The node at
/// each level holds the lower midpoint of its range.
pub fn build<T, U, I>(entries: I) -> Tree<T, U>
where
    I: IntoIterator<Item = Entry<T, U>>,
    I::IntoIter: ExactSizeIterator,
{
    let mut entries = entries.into_iter();
    let len = entries.len();
    build_range(&mut entries, len)
}

/// Consumes the tree and appends its entries to `entries` in ascending order.
pub fn drain_inorder<T, U>(tree: Tree<T, U>, entries: &mut Vec<Entry<T, U>>) {
    let mut stack = Vec::new();
    let mut curr = tree;
    loop {
        while let Some(mut node) = curr {
            curr = node.left.take();
            stack.push(node);
        }
        match stack.pop() {
            Some(node) => {
                let Node { entry, right, .. } = *node;
                entries.push(entry);
                curr = right;
            },
            None => break,
        }
    }
}

/// Frees the nodes of the tree one at a time, leaving it empty.
pub fn dispose<T, U>(tree: &mut Tree<T, U>) {
    let mut stack: Vec<Box<Node<T, U>>> = tree.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

// Computes subtree heights bottom-up with an explicit stack. `combine` receives the heights of the
// left and right subtrees of a node and returns the height of the node, or `None` to give up.
fn fold_height<T, U, F>(tree: &Tree<T, U>, mut combine: F) -> Option<isize>
where
    F: FnMut(isize, isize) -> Option<isize>,
{
    let mut stack = vec![(tree, false)];
    let mut heights = Vec::new();
    while let Some((tree, children_done)) = stack.pop() {
        match tree {
            None => heights.push(-1),
            Some(node) if !children_done => {
                stack.push((tree, true));
                stack.push((&node.right, false));
                stack.push((&node.left, false));
            },
            Some(_) => {
                let right_height = heights.pop()?;
                let left_height = heights.pop()?;
                heights.push(combine(left_height, right_height)?);
            },
        }
    }
    heights.pop()
}

/// Number of edges on the longest path from the root down to a leaf. An empty tree has height
/// -1, so a single node has height 0.
pub fn height<T, U>(tree: &Tree<T, U>) -> isize {
    fold_height(tree, |left_height, right_height| {
        Some(cmp::max(left_height, right_height) + 1)
    })
    .unwrap_or(-1)
}

pub fn node_height<T, U>(node: &Node<T, U>) -> isize {
    cmp::max(height(&node.left), height(&node.right)) + 1
}

pub fn is_balanced<T, U>(tree: &Tree<T, U>) -> bool {
    fold_height(tree, |left_height, right_height| {
        if (left_height - right_height).abs() > 1 {
            None
        } else {
            Some(cmp::max(left_height, right_height) + 1)
        }
    })
    .is_some()
}

/// Inserts a node unless its key is already present, in which case the tree is left untouched
/// and the rejected entry is handed back.
pub fn insert<T, U>(tree: &mut Tree<T, U>, new_node: Node<T, U>) -> Option<Entry<T, U>>
where
    T: Ord,
{
    let mut curr = tree;
    while let Some(node) = curr {
        match new_node.entry.key.cmp(&node.entry.key) {
            Ordering::Less => curr = &mut node.left,
            Ordering::Greater => curr = &mut node.right,
            Ordering::Equal => return Some(new_node.entry),
        }
    }
    *curr = Some(Box::new(new_node));
    None
}

// Returns the link that holds `key`, or the empty link where it would be attached.
fn find_link<'a, T, U, V>(tree: &'a mut Tree<T, U>, key: &V) -> &'a mut Tree<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    while let Some(ordering) = curr.as_ref().map(|node| key.cmp(node.entry.key.borrow())) {
        if ordering == Ordering::Equal {
            break;
        }
        if let Some(node) = curr {
            curr = match ordering {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }
    }
    curr
}

// Detaches the leftmost node of a subtree and returns its entry. Its right child takes its place.
fn remove_min<T, U>(tree: &mut Tree<T, U>) -> Option<Entry<T, U>> {
    let mut curr = tree;
    while curr.as_ref().map_or(false, |node| node.left.is_some()) {
        if let Some(node) = curr {
            curr = &mut node.left;
        }
    }
    let node = curr.take()?;
    let Node { entry, right, .. } = *node;
    *curr = right;
    Some(entry)
}

/// Removes the entry with a particular key and returns it, if there was one. A node with two
/// children is replaced by a node holding its in-order successor.
pub fn remove<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> Option<Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let link = find_link(tree, key);
    let node = link.take()?;
    let Node {
        entry,
        left,
        mut right,
    } = *node;
    *link = match left {
        None => right,
        Some(left) => match remove_min(&mut right) {
            None => Some(left),
            Some(successor) => Some(Box::new(Node {
                entry: successor,
                left: Some(left),
                right,
            })),
        },
    };
    Some(entry)
}

pub fn get<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    get_node(tree, key).map(|node| &node.entry)
}

pub fn get_node<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Node<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    while let Some(ref node) = curr {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return Some(&**node),
        }
    }
    None
}

pub fn get_mut<'a, T, U, V>(tree: &'a mut Tree<T, U>, key: &V) -> Option<&'a mut Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    find_link(tree, key).as_mut().map(|node| &mut node.entry)
}

/// Number of edges between the root and the node holding `key`.
pub fn depth<T, U, V>(tree: &Tree<T, U>, key: &V) -> Option<usize>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    let mut depth = 0;
    while let Some(ref node) = curr {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return Some(depth),
        }
        depth += 1;
    }
    None
}

pub fn min<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.entry
    })
}

pub fn max<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.entry
    })
}

pub fn preorder<'a, T, U>(tree: &'a Tree<T, U>, keys: &mut Vec<&'a T>) {
    let mut stack = vec![tree];
    while let Some(tree) = stack.pop() {
        if let Some(ref node) = tree {
            keys.push(&node.entry.key);
            stack.push(&node.right);
            stack.push(&node.left);
        }
    }
}

pub fn inorder<'a, T, U>(tree: &'a Tree<T, U>, keys: &mut Vec<&'a T>) {
    let mut stack: Vec<&'a Node<T, U>> = Vec::new();
    let mut curr = tree;
    loop {
        while let Some(ref node) = curr {
            stack.push(node);
            curr = &node.left;
        }
        match stack.pop() {
            Some(node) => {
                keys.push(&node.entry.key);
                curr = &node.right;
            },
            None => break,
        }
    }
}

// Visits node, right, left and then reverses, which yields left, right, node.
pub fn postorder<'a, T, U>(tree: &'a Tree<T, U>, keys: &mut Vec<&'a T>) {
    let start = keys.len();
    let mut stack = vec![tree];
    while let Some(tree) = stack.pop() {
        if let Some(ref node) = tree {
            keys.push(&node.entry.key);
            stack.push(&node.left);
            stack.push(&node.right);
        }
    }
    keys[start..].reverse();
}

pub fn level_order<'a, T, U>(tree: &'a Tree<T, U>, keys: &mut Vec<&'a T>) {
    let mut queue = VecDeque::new();
    if let Some(ref node) = tree {
        queue.push_back(&**node);
    }

    while let Some(node) = queue.pop_front() {
        keys.push(&node.entry.key);
        if let Some(ref left) = node.left {
            queue.push_back(&**left);
        }
        if let Some(ref right) = node.right {
            queue.push_back(&**right);
        }
    }
}
