use crate::bst::map::{BstMap, BstMapIntoIter, BstMapIter};
use std::borrow::Borrow;
use std::iter::FromIterator;

/// An ordered set implemented using a plain binary search tree.
///
/// The set is built balanced from a batch of keys. Later insertions and removals keep the binary
/// search tree ordering but do not restore balance; call `rebalance` to do that.
///
/// # Examples
///
/// ```
/// use basic_collections::bst::BstSet;
///
/// let mut set = BstSet::build(vec![1, 7, 4, 23, 8, 9, 67, 6345, 324]);
/// assert_eq!(set.inorder(), vec![&1, &4, &7, &8, &9, &23, &67, &324, &6345]);
/// assert!(set.is_balanced());
///
/// set.insert(10);
/// set.insert(11);
/// assert!(!set.is_balanced());
///
/// set.rebalance();
/// assert!(set.is_balanced());
/// ```
pub struct BstSet<T> {
    map: BstMap<T, ()>,
}

impl<T> BstSet<T> {
    /// Constructs a new, empty `BstSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstSet;
    ///
    /// let set: BstSet<u32> = BstSet::new();
    /// ```
    pub fn new() -> Self {
        BstSet { map: BstMap::new() }
    }

    /// Constructs a balanced `BstSet<T>` from a batch of keys. Duplicate keys are collapsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstSet;
    ///
    /// let set = BstSet::build(vec![3, 1, 3, 2]);
    /// assert_eq!(set.len(), 3);
    /// assert_eq!(set.level_order(), vec![&2, &1, &3]);
    /// ```
    pub fn build<I>(keys: I) -> Self
    where
        T: Ord,
        I: IntoIterator<Item = T>,
    {
        BstSet {
            map: BstMap::build(keys.into_iter().map(|key| (key, ()))),
        }
    }

    /// Inserts a key into the set. If the key already exists in the set, the set is left
    /// unchanged and the rejected key is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// assert_eq!(set.insert(1), None);
    /// assert!(set.contains(&1));
    /// assert_eq!(set.insert(1), Some(1));
    /// ```
    pub fn insert(&mut self, key: T) -> Option<T>
    where
        T: Ord,
    {
        self.map.insert(key, ()).map(|pair| pair.0)
    }

    /// Removes a key from the set. If the key exists in the set, it will return the associated
    /// key. Otherwise it will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.remove(key).map(|pair| pair.0)
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Returns the stored key that is equal to a particular key. Returns `None` if such a key does
    /// not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstSet;
    ///
    /// let set = BstSet::build(vec![1, 7, 4]);
    /// assert_eq!(set.find(&7), Some(&7));
    /// assert_eq!(set.find(&70), None);
    /// ```
    pub fn find<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.find(key)
    }

    /// Returns the number of edges between the root and a particular key. Returns `None` if the
    /// key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstSet;
    ///
    /// let set = BstSet::build(vec![1, 2, 3]);
    /// assert_eq!(set.depth(&1), Some(1));
    /// assert_eq!(set.depth(&0), None);
    /// ```
    pub fn depth<V>(&self, key: &V) -> Option<usize>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.depth(key)
    }

    /// Returns the height of the tree. An empty set has height -1.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstSet;
    ///
    /// let set = BstSet::build(vec![1]);
    /// assert_eq!(set.height(), 0);
    /// ```
    pub fn height(&self) -> isize {
        self.map.height()
    }

    /// Returns the height of the subtree rooted at a particular key. Returns `None` if the key
    /// does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstSet;
    ///
    /// let set = BstSet::build(vec![1, 7, 4, 23, 8, 9, 67, 6345, 324]);
    /// assert_eq!(set.height_of(&8), Some(0));
    /// assert_eq!(set.height_of(&9), Some(3));
    /// ```
    pub fn height_of<V>(&self, key: &V) -> Option<isize>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.height_of(key)
    }

    /// Returns `true` if the heights of the two subtrees of every node differ by at most one.
    pub fn is_balanced(&self) -> bool {
        self.map.is_balanced()
    }

    /// Rebuilds the tree into a minimal-height shape.
    pub fn rebalance(&mut self) {
        self.map.rebalance();
    }

    /// Returns the keys of the set in preorder.
    pub fn preorder(&self) -> Vec<&T> {
        self.map.preorder()
    }

    /// Returns the keys of the set in ascending order.
    pub fn inorder(&self) -> Vec<&T> {
        self.map.inorder()
    }

    /// Returns the keys of the set in postorder.
    pub fn postorder(&self) -> Vec<&T> {
        self.map.postorder()
    }

    /// Returns the keys of the set level by level, starting at the root.
    pub fn level_order(&self) -> Vec<&T> {
        self.map.level_order()
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstSet;
    ///
    /// let set: BstSet<u32> = BstSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    pub fn min(&self) -> Option<&T> {
        self.map.min()
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    pub fn max(&self) -> Option<&T> {
        self.map.max()
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bst::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// set.insert(3);
    /// set.insert(1);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> BstSetIter<T> {
        BstSetIter {
            map_iter: self.map.iter(),
        }
    }
}

impl<T> FromIterator<T> for BstSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        BstSet::build(iter)
    }
}

impl<T> IntoIterator for BstSet<T> {
    type Item = T;
    type IntoIter = BstSetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            map_iter: self.map.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a BstSet<T>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = BstSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `BstSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct BstSetIntoIter<T> {
    map_iter: BstMapIntoIter<T, ()>,
}

impl<T> Iterator for BstSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|pair| pair.0)
    }
}

/// An iterator for `BstSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct BstSetIter<'a, T>
where
    T: 'a,
{
    map_iter: BstMapIter<'a, T, ()>,
}

impl<'a, T> Iterator for BstSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|pair| pair.0)
    }
}

impl<T> Default for BstSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::BstSet;

    #[test]
    fn test_len_empty() {
        let set: BstSet<u32> = BstSet::new();
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let set: BstSet<u32> = BstSet::new();
        assert!(set.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let set: BstSet<u32> = BstSet::new();
        assert_eq!(set.min(), None);
        assert_eq!(set.max(), None);
    }

    #[test]
    fn test_build() {
        let set = BstSet::build(vec![1, 7, 4, 23, 8, 9, 67, 6345, 324]);
        assert_eq!(
            set.inorder(),
            vec![&1, &4, &7, &8, &9, &23, &67, &324, &6345],
        );
        assert_eq!(
            set.preorder(),
            vec![&9, &4, &1, &7, &8, &67, &23, &324, &6345],
        );
        assert_eq!(
            set.postorder(),
            vec![&1, &8, &7, &4, &23, &6345, &324, &67, &9],
        );
    }

    #[test]
    fn test_build_strings() {
        let set: BstSet<String> = vec!["pear", "apple", "fig", "apple"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(set.len(), 3);
        assert_eq!(set.level_order(), vec!["fig", "apple", "pear"]);
        assert!(set.contains("fig"));
        assert_eq!(set.depth("pear"), Some(1));
    }

    #[test]
    fn test_insert() {
        let mut set = BstSet::new();
        assert_eq!(set.insert(1), None);
        assert!(set.contains(&1));
    }

    #[test]
    fn test_insert_duplicate() {
        let mut set = BstSet::new();
        assert_eq!(set.insert(1), None);
        assert_eq!(set.insert(1), Some(1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut set = BstSet::new();
        set.insert(1);
        assert_eq!(set.remove(&1), Some(1));
        assert!(!set.contains(&1));
    }

    #[test]
    fn test_remove_missing() {
        let mut set = BstSet::build(vec![1, 2, 3]);
        assert_eq!(set.remove(&4), None);
        assert_eq!(set.len(), 3);
        assert_eq!(set.preorder(), vec![&2, &1, &3]);
    }

    #[test]
    fn test_min_max() {
        let mut set = BstSet::new();
        set.insert(3);
        set.insert(1);
        set.insert(5);

        assert_eq!(set.min(), Some(&1));
        assert_eq!(set.max(), Some(&5));
    }

    #[test]
    fn test_rebalance_idempotent() {
        let mut set = BstSet::new();
        for key in (0..20).rev() {
            set.insert(key);
        }
        assert_eq!(set.height(), 19);

        set.rebalance();
        let first = set.level_order().into_iter().cloned().collect::<Vec<u32>>();
        set.rebalance();
        let second = set.level_order().into_iter().cloned().collect::<Vec<u32>>();
        assert_eq!(first, second);
        assert_eq!(set.height(), 4);
    }

    #[test]
    fn test_into_iter() {
        let mut set = BstSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.into_iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_iter() {
        let mut set = BstSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &3, &5]);
    }
}
