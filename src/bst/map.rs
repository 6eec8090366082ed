use crate::bst::node::Node;
use crate::bst::tree;
use crate::entry::Entry;
use std::borrow::Borrow;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};
use tracing::debug;

/// An ordered map implemented using a plain binary search tree.
///
/// Every key in the left subtree of a node is smaller than the node's key and every key in its
/// right subtree is larger. The tree is only guaranteed to be balanced right after `build` or
/// `rebalance`; insertions and removals never restructure it.
///
/// # Examples
///
/// ```
/// use basic_collections::bst::BstMap;
///
/// let mut map = BstMap::build(vec![(4, "d"), (1, "a"), (7, "g")]);
/// assert_eq!(map.level_order(), vec![&4, &1, &7]);
///
/// map.insert(9, "i");
/// assert_eq!(map[&9], "i");
/// assert_eq!(map.depth(&9), Some(2));
/// assert_eq!(map.height(), 2);
///
/// assert_eq!(map.remove(&4), Some((4, "d")));
/// assert_eq!(map.inorder(), vec![&1, &7, &9]);
/// ```
pub struct BstMap<T, U> {
    tree: tree::Tree<T, U>,
    len: usize,
}

impl<T, U> BstMap<T, U> {
    /// Constructs a new, empty `BstMap<T, U>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstMap;
    ///
    /// let map: BstMap<u32, u32> = BstMap::new();
    /// ```
    pub fn new() -> Self {
        BstMap { tree: None, len: 0 }
    }

    /// Constructs a balanced `BstMap<T, U>` from a batch of key-value pairs. The pairs are sorted
    /// by key and, for keys that appear more than once, only the first pair is kept. Each subtree
    /// is rooted at the lower midpoint of its sorted range.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstMap;
    ///
    /// let map = BstMap::build(vec![(3, 'a'), (1, 'b'), (3, 'c'), (2, 'd')]);
    /// assert_eq!(map.len(), 3);
    /// assert_eq!(map.get(&3), Some(&'a'));
    /// assert_eq!(map.preorder(), vec![&2, &1, &3]);
    /// assert!(map.is_balanced());
    /// ```
    pub fn build<I>(pairs: I) -> Self
    where
        T: Ord,
        I: IntoIterator<Item = (T, U)>,
    {
        let mut entries: Vec<Entry<T, U>> = pairs
            .into_iter()
            .map(|(key, value)| Entry::new(key, value))
            .collect();
        entries.sort();
        entries.dedup();
        let len = entries.len();
        BstMap {
            tree: tree::build(entries),
            len,
        }
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, the map is
    /// left unchanged and the rejected pair is returned. Use `get_mut` to update the value of an
    /// existing key.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2), Some((1, 2)));
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Option<(T, U)>
    where
        T: Ord,
    {
        let BstMap {
            ref mut tree,
            ref mut len,
        } = self;
        let new_node = Node::new(key, value);
        match tree::insert(tree, new_node) {
            Some(entry) => Some(entry.into_pair()),
            None => {
                *len += 1;
                None
            },
        }
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated key-value pair. Otherwise it will return `None`.
    ///
    /// A node with two children takes over the entry of its in-order successor, which is then
    /// unlinked from the right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<(T, U)>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::remove(&mut self.tree, key).map(|entry| {
            self.len -= 1;
            entry.into_pair()
        })
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns the stored key that is equal to a particular key. Returns `None` if such a key does
    /// not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstMap;
    ///
    /// let map = BstMap::build(vec![(String::from("a"), 1)]);
    /// assert_eq!(map.find("a"), Some(&String::from("a")));
    /// assert_eq!(map.find("b"), None);
    /// ```
    pub fn find<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get(&self.tree, key).map(|entry| &entry.key)
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get<V>(&self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get(&self.tree, key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut<V>(&mut self, key: &V) -> Option<&mut U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get_mut(&mut self.tree, key).map(|entry| &mut entry.value)
    }

    /// Returns the number of edges between the root and the node holding a particular key.
    /// Returns `None` if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstMap;
    ///
    /// let map = BstMap::build(vec![(1, ()), (2, ()), (3, ())]);
    /// assert_eq!(map.depth(&2), Some(0));
    /// assert_eq!(map.depth(&3), Some(1));
    /// assert_eq!(map.depth(&4), None);
    /// ```
    pub fn depth<V>(&self, key: &V) -> Option<usize>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::depth(&self.tree, key)
    }

    /// Returns the height of the tree: the number of edges on the longest path from the root to a
    /// leaf. An empty map has height -1 and a map with one entry has height 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// assert_eq!(map.height(), -1);
    /// map.insert(1, 1);
    /// assert_eq!(map.height(), 0);
    /// map.insert(2, 2);
    /// assert_eq!(map.height(), 1);
    /// ```
    pub fn height(&self) -> isize {
        tree::height(&self.tree)
    }

    /// Returns the height of the subtree rooted at the node holding a particular key. Returns
    /// `None` if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstMap;
    ///
    /// let map = BstMap::build(vec![(1, ()), (2, ()), (3, ()), (4, ())]);
    /// assert_eq!(map.height_of(&2), Some(2));
    /// assert_eq!(map.height_of(&3), Some(1));
    /// assert_eq!(map.height_of(&4), Some(0));
    /// assert_eq!(map.height_of(&5), None);
    /// ```
    pub fn height_of<V>(&self, key: &V) -> Option<isize>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get_node(&self.tree, key).map(tree::node_height)
    }

    /// Returns `true` if the heights of the two subtrees of every node differ by at most one.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// assert!(map.is_balanced());
    /// map.insert(3, 3);
    /// assert!(!map.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        tree::is_balanced(&self.tree)
    }

    /// Rebuilds the tree into a minimal-height shape from its in-order sequence of entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// for key in 0..7 {
    ///     map.insert(key, key);
    /// }
    /// assert_eq!(map.height(), 6);
    ///
    /// map.rebalance();
    /// assert_eq!(map.height(), 2);
    /// assert!(map.is_balanced());
    /// assert_eq!(map.level_order(), vec![&3, &1, &5, &0, &2, &4, &6]);
    /// ```
    pub fn rebalance(&mut self) {
        debug!(len = self.len, height = self.height(), "rebalancing tree");
        let mut entries = Vec::with_capacity(self.len);
        tree::drain_inorder(self.tree.take(), &mut entries);
        self.tree = tree::build(entries);
    }

    /// Returns the keys of the map in preorder: each node before its left and right subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstMap;
    ///
    /// let map = BstMap::build(vec![(1, ()), (2, ()), (3, ()), (4, ())]);
    /// assert_eq!(map.preorder(), vec![&2, &1, &3, &4]);
    /// ```
    pub fn preorder(&self) -> Vec<&T> {
        let mut keys = Vec::with_capacity(self.len);
        tree::preorder(&self.tree, &mut keys);
        keys
    }

    /// Returns the keys of the map in-order, which is ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstMap;
    ///
    /// let map = BstMap::build(vec![(3, ()), (1, ()), (2, ())]);
    /// assert_eq!(map.inorder(), vec![&1, &2, &3]);
    /// ```
    pub fn inorder(&self) -> Vec<&T> {
        let mut keys = Vec::with_capacity(self.len);
        tree::inorder(&self.tree, &mut keys);
        keys
    }

    /// Returns the keys of the map in postorder: both subtrees of a node before the node itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstMap;
    ///
    /// let map = BstMap::build(vec![(1, ()), (2, ()), (3, ()), (4, ())]);
    /// assert_eq!(map.postorder(), vec![&1, &4, &3, &2]);
    /// ```
    pub fn postorder(&self) -> Vec<&T> {
        let mut keys = Vec::with_capacity(self.len);
        tree::postorder(&self.tree, &mut keys);
        keys
    }

    /// Returns the keys of the map level by level, starting at the root and going left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstMap;
    ///
    /// let map = BstMap::build(vec![(1, ()), (2, ()), (3, ()), (4, ())]);
    /// assert_eq!(map.level_order(), vec![&2, &1, &3, &4]);
    /// ```
    pub fn level_order(&self) -> Vec<&T> {
        let mut keys = Vec::with_capacity(self.len);
        tree::level_order(&self.tree, &mut keys);
        keys
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstMap;
    ///
    /// let map: BstMap<u32, u32> = BstMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        tree::dispose(&mut self.tree);
        self.len = 0;
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree).map(|entry| &entry.key)
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree).map(|entry| &entry.key)
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(2, 2);
    /// map.insert(1, 1);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> BstMapIter<T, U> {
        BstMapIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }

    /// Returns a mutable iterator over the map. The iterator will yield key-value pairs using
    /// in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// for (key, value) in &mut map {
    ///     *value += 1;
    /// }
    ///
    /// let mut iterator = map.iter_mut();
    /// assert_eq!(iterator.next(), Some((&1, &mut 2)));
    /// assert_eq!(iterator.next(), Some((&2, &mut 3)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter_mut(&mut self) -> BstMapIterMut<T, U> {
        BstMapIterMut {
            current: self.tree.as_mut().map(|node| &mut **node),
            stack: Vec::new(),
        }
    }
}

impl<T, U> FromIterator<(T, U)> for BstMap<T, U>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (T, U)>,
    {
        BstMap::build(iter)
    }
}

impl<T, U> IntoIterator for BstMap<T, U> {
    type IntoIter = BstMapIntoIter<T, U>;
    type Item = (T, U);

    fn into_iter(mut self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree.take(),
            stack: Vec::new(),
        }
    }
}

impl<'a, T, U> IntoIterator for &'a BstMap<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = BstMapIter<'a, T, U>;
    type Item = (&'a T, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, U> IntoIterator for &'a mut BstMap<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = BstMapIterMut<'a, T, U>;
    type Item = (&'a T, &'a mut U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, U> Drop for BstMap<T, U> {
    fn drop(&mut self) {
        tree::dispose(&mut self.tree);
    }
}

/// An owning iterator for `BstMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields owned entries.
pub struct BstMapIntoIter<T, U> {
    current: tree::Tree<T, U>,
    stack: Vec<Node<T, U>>,
}

impl<T, U> Iterator for BstMapIntoIter<T, U> {
    type Item = (T, U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { entry, right, .. } = node;
            self.current = right;
            entry.into_pair()
        })
    }
}

impl<T, U> Drop for BstMapIntoIter<T, U> {
    fn drop(&mut self) {
        tree::dispose(&mut self.current);
        for mut node in self.stack.drain(..) {
            tree::dispose(&mut node.right);
        }
    }
}

/// An iterator for `BstMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields immutable references.
pub struct BstMapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    current: &'a tree::Tree<T, U>,
    stack: Vec<&'a Node<T, U>>,
}

impl<'a, T, U> Iterator for BstMapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let Node {
                entry: Entry { ref key, ref value },
                ref right,
                ..
            } = node;
            self.current = right;
            (key, value)
        })
    }
}

type BorrowedIterEntryMut<'a, T, U> = (&'a mut Entry<T, U>, BorrowedTreeMut<'a, T, U>);
type BorrowedTreeMut<'a, T, U> = Option<&'a mut Node<T, U>>;

/// A mutable iterator for `BstMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields mutable references.
pub struct BstMapIterMut<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    current: BorrowedTreeMut<'a, T, U>,
    stack: Vec<BorrowedIterEntryMut<'a, T, U>>,
}

impl<'a, T, U> Iterator for BstMapIterMut<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a mut U);

    fn next(&mut self) -> Option<Self::Item> {
        let BstMapIterMut {
            ref mut current,
            ref mut stack,
        } = self;
        while let Some(node) = current.take() {
            let Node { entry, left, right } = node;
            *current = left.as_mut().map(|node| &mut **node);
            stack.push((entry, right.as_mut().map(|node| &mut **node)));
        }
        stack.pop().map(|(entry, right)| {
            *current = right;
            let Entry { key, value } = entry;
            (&*key, value)
        })
    }
}

impl<T, U> Default for BstMap<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T, U, V> Index<&'a V> for BstMap<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    type Output = U;

    fn index(&self, key: &V) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

impl<'a, T, U, V> IndexMut<&'a V> for BstMap<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    fn index_mut(&mut self, key: &V) -> &mut Self::Output {
        self.get_mut(key).expect("Error: key does not exist.")
    }
}
