use crate::bucket_map::hash::hash;
use crate::entry::Entry;
use crate::error::{Error, Result};
use std::mem;
use std::ops::{Index, IndexMut};
use std::slice;
use std::vec;
use tracing::{debug, trace, warn};

/// Number of buckets allocated by `BucketMap::new`.
pub const DEFAULT_CAPACITY: usize = 16;
/// Ratio of entries to buckets above which `BucketMap::new` maps grow.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;
/// Largest number of buckets a map will allocate.
pub const MAX_CAPACITY: usize = isize::MAX as usize / mem::size_of::<Vec<()>>();

type Bucket<T, U> = Vec<Entry<T, U>>;

fn empty_buckets<T, U>(capacity: usize) -> Vec<Bucket<T, U>> {
    (0..capacity).map(|_| Vec::new()).collect()
}

/// A hash map keyed by character sequences, implemented using an array of buckets.
///
/// A key lives in the bucket at `hash(key, capacity)`, and entries that share a bucket are kept
/// in insertion order. Once the number of entries divided by the number of buckets exceeds the
/// load factor, the bucket array doubles and every entry is rehashed against the new capacity.
///
/// # Examples
///
/// ```
/// use basic_collections::bucket_map::BucketMap;
///
/// let mut map = BucketMap::new();
/// map.insert("apple", 1);
/// map.insert("banana", 2);
///
/// assert_eq!(map["apple"], 1);
/// assert_eq!(map.get("cherry"), None);
/// assert_eq!(map.len(), 2);
///
/// map["apple"] = 3;
/// assert_eq!(map.remove("apple"), Some(3));
/// assert_eq!(map.remove("apple"), None);
/// ```
pub struct BucketMap<T, U> {
    buckets: Vec<Bucket<T, U>>,
    len: usize,
    initial_capacity: usize,
    load_factor: f64,
}

impl<T, U> BucketMap<T, U> {
    /// Constructs a new, empty `BucketMap<T, U>` with `DEFAULT_CAPACITY` buckets and a load factor
    /// of `DEFAULT_LOAD_FACTOR`.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bucket_map::BucketMap;
    ///
    /// let map: BucketMap<String, u32> = BucketMap::new();
    /// assert_eq!(map.capacity(), 16);
    /// ```
    pub fn new() -> Self {
        BucketMap {
            buckets: empty_buckets(DEFAULT_CAPACITY),
            len: 0,
            initial_capacity: DEFAULT_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }

    /// Constructs a new, empty `BucketMap<T, U>` with a specific number of buckets and load
    /// factor. Returns an error if the capacity is zero or above `MAX_CAPACITY`, if the load
    /// factor is not a positive finite number, or if the load factor is so small that a single
    /// entry would need more than `MAX_CAPACITY` buckets.
    ///
    /// # Examples
    ///
    /// ```
    /// # use basic_collections::Result;
    /// # fn foo() -> Result<()> {
    /// use basic_collections::bucket_map::BucketMap;
    ///
    /// let map: BucketMap<String, u32> = BucketMap::with_capacity(4, 0.5)?;
    /// assert_eq!(map.capacity(), 4);
    /// assert!(BucketMap::<String, u32>::with_capacity(0, 0.5).is_err());
    /// # Ok(())
    /// # }
    /// # foo().unwrap();
    /// ```
    pub fn with_capacity(capacity: usize, load_factor: f64) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidArgument("capacity must be non-zero"));
        }
        if capacity > MAX_CAPACITY {
            return Err(Error::InvalidArgument("capacity exceeds the maximum capacity"));
        }
        if !load_factor.is_finite() || load_factor <= 0.0 {
            return Err(Error::InvalidArgument(
                "load factor must be a positive finite number",
            ));
        }
        if load_factor * (MAX_CAPACITY as f64) < 1.0 {
            return Err(Error::InvalidArgument(
                "load factor is too small to hold a single entry",
            ));
        }
        Ok(BucketMap {
            buckets: empty_buckets(capacity),
            len: 0,
            initial_capacity: capacity,
            load_factor,
        })
    }

    /// Inserts a key-value pair into the map, rejecting a missing key. Returns the previous value
    /// if the key was already present.
    ///
    /// # Examples
    ///
    /// ```
    /// # use basic_collections::Result;
    /// # fn foo() -> Result<()> {
    /// use basic_collections::bucket_map::BucketMap;
    ///
    /// let mut map = BucketMap::new();
    /// assert_eq!(map.set(Some("a"), 1)?, None);
    /// assert_eq!(map.set(Some("a"), 2)?, Some(1));
    /// assert!(map.set(None, 3).is_err());
    /// assert_eq!(map.len(), 1);
    /// # Ok(())
    /// # }
    /// # foo().unwrap();
    /// ```
    pub fn set(&mut self, key: Option<T>, value: U) -> Result<Option<U>>
    where
        T: AsRef<str>,
    {
        match key {
            Some(key) => Ok(self.insert(key, value)),
            None => Err(Error::InvalidArgument("key must be present")),
        }
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, its value is
    /// replaced in place and the old value is returned.
    ///
    /// Adding a new key that pushes the load above the load factor doubles the bucket array, as
    /// many times as needed, and rehashes every entry into it.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bucket_map::BucketMap;
    ///
    /// let mut map = BucketMap::new();
    /// assert_eq!(map.insert("a", 1), None);
    /// assert_eq!(map.insert("a", 2), Some(1));
    /// assert_eq!(map.get("a"), Some(&2));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Option<U>
    where
        T: AsRef<str>,
    {
        let address = hash(key.as_ref(), self.capacity());
        let bucket = &mut self.buckets[address];
        if let Some(entry) = bucket
            .iter_mut()
            .find(|entry| entry.key.as_ref() == key.as_ref())
        {
            return Some(mem::replace(&mut entry.value, value));
        }

        bucket.push(Entry::new(key, value));
        self.len += 1;
        if self.load() > self.load_factor {
            self.resize();
        }
        None
    }

    fn resize(&mut self)
    where
        T: AsRef<str>,
    {
        // a single doubling only suffices when `load_factor * capacity >= 1`
        let mut capacity = self.capacity();
        while self.len as f64 / capacity as f64 > self.load_factor {
            match capacity.checked_mul(2).filter(|doubled| *doubled <= MAX_CAPACITY) {
                Some(doubled) => capacity = doubled,
                None => {
                    warn!(capacity, len = self.len, "bucket map cannot grow any further");
                    break;
                },
            }
        }
        if capacity == self.capacity() {
            return;
        }
        debug!(
            old_capacity = self.capacity(),
            new_capacity = capacity,
            len = self.len,
            "resizing bucket map"
        );
        let old_buckets = mem::replace(&mut self.buckets, empty_buckets(capacity));
        for entry in old_buckets.into_iter().flatten() {
            let address = hash(entry.key.as_ref(), capacity);
            self.buckets[address].push(entry);
        }
    }

    fn bucket(&self, key: &str) -> &Bucket<T, U> {
        &self.buckets[hash(key, self.capacity())]
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bucket_map::BucketMap;
    ///
    /// let mut map = BucketMap::new();
    /// map.insert(String::from("a"), 1);
    /// assert_eq!(map.get("a"), Some(&1));
    /// assert_eq!(map.get("b"), None);
    /// ```
    pub fn get<V>(&self, key: &V) -> Option<&U>
    where
        T: AsRef<str>,
        V: AsRef<str> + ?Sized,
    {
        let key = key.as_ref();
        self.bucket(key)
            .iter()
            .find(|entry| entry.key.as_ref() == key)
            .map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bucket_map::BucketMap;
    ///
    /// let mut map = BucketMap::new();
    /// map.insert("a", 1);
    /// *map.get_mut("a").unwrap() = 2;
    /// assert_eq!(map.get("a"), Some(&2));
    /// ```
    pub fn get_mut<V>(&mut self, key: &V) -> Option<&mut U>
    where
        T: AsRef<str>,
        V: AsRef<str> + ?Sized,
    {
        let key = key.as_ref();
        let address = hash(key, self.capacity());
        self.buckets[address]
            .iter_mut()
            .find(|entry| entry.key.as_ref() == key)
            .map(|entry| &mut entry.value)
    }

    /// Checks if a key exists in the map. Other keys that happen to share the key's bucket do not
    /// count.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bucket_map::BucketMap;
    ///
    /// let mut map = BucketMap::new();
    /// map.insert("a", 1);
    /// assert!(map.contains_key("a"));
    /// // "q" lands in the same bucket as "a"
    /// assert!(!map.contains_key("q"));
    /// ```
    pub fn contains_key<V>(&self, key: &V) -> bool
    where
        T: AsRef<str>,
        V: AsRef<str> + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated value. Otherwise it will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bucket_map::BucketMap;
    ///
    /// let mut map = BucketMap::new();
    /// map.insert("x", 1);
    /// assert_eq!(map.remove("x"), Some(1));
    /// assert_eq!(map.remove("x"), None);
    /// assert!(!map.contains_key("x"));
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<U>
    where
        T: AsRef<str>,
        V: AsRef<str> + ?Sized,
    {
        let key = key.as_ref();
        let address = hash(key, self.capacity());
        let bucket = &mut self.buckets[address];
        let index = bucket.iter().position(|entry| entry.key.as_ref() == key)?;
        self.len -= 1;
        Some(bucket.remove(index).value)
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bucket_map::BucketMap;
    ///
    /// let mut map = BucketMap::new();
    /// map.insert("a", 1);
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
    /// use basic_collections::bucket_map::BucketMap;
    ///
    /// let map: BucketMap<String, u32> = BucketMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the load factor the map was constructed with.
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Returns the current ratio of entries to buckets.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bucket_map::BucketMap;
    ///
    /// let mut map = BucketMap::new();
    /// map.insert("a", 1);
    /// map.insert("b", 2);
    /// assert_eq!(map.load(), 0.125);
    /// ```
    pub fn load(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// Clears the map, removing all values. The bucket array shrinks back to the capacity the map
    /// was constructed with.
    ///
    /// # Examples
    ///
    /// ```
    /// # use basic_collections::Result;
    /// # fn foo() -> Result<()> {
    /// use basic_collections::bucket_map::BucketMap;
    ///
    /// let mut map = BucketMap::with_capacity(2, 1.0)?;
    /// map.insert("a", 1);
    /// map.insert("b", 2);
    /// map.insert("c", 3);
    /// assert_eq!(map.capacity(), 4);
    ///
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert_eq!(map.capacity(), 2);
    /// # Ok(())
    /// # }
    /// # foo().unwrap();
    /// ```
    pub fn clear(&mut self) {
        trace!(len = self.len, capacity = self.initial_capacity, "clearing bucket map");
        self.buckets = empty_buckets(self.initial_capacity);
        self.len = 0;
    }

    /// Returns the keys of the map, bucket by bucket.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bucket_map::BucketMap;
    ///
    /// let mut map = BucketMap::new();
    /// map.insert("b", 1);
    /// map.insert("a", 2);
    /// map.insert("q", 3);
    /// assert_eq!(map.keys(), vec![&"a", &"q", &"b"]);
    /// ```
    pub fn keys(&self) -> Vec<&T> {
        self.iter().map(|(key, _)| key).collect()
    }

    /// Returns the values of the map in the same order as `keys`.
    pub fn values(&self) -> Vec<&U> {
        self.iter().map(|(_, value)| value).collect()
    }

    /// Returns the key-value pairs of the map in the same order as `keys`.
    pub fn entries(&self) -> Vec<(&T, &U)> {
        self.iter().collect()
    }

    /// Returns an iterator over the map. The iterator walks the buckets in order and yields each
    /// bucket's entries in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_collections::bucket_map::BucketMap;
    ///
    /// let mut map = BucketMap::new();
    /// map.insert("a", 1);
    /// map.insert("b", 2);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&"a", &1)));
    /// assert_eq!(iterator.next(), Some((&"b", &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> BucketMapIter<T, U> {
        BucketMapIter {
            buckets: self.buckets.iter(),
            entries: Default::default(),
        }
    }
}

impl<T, U> IntoIterator for BucketMap<T, U> {
    type IntoIter = BucketMapIntoIter<T, U>;
    type Item = (T, U);

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            buckets: self.buckets.into_iter(),
            entries: Vec::new().into_iter(),
        }
    }
}

impl<'a, T, U> IntoIterator for &'a BucketMap<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = BucketMapIter<'a, T, U>;
    type Item = (&'a T, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `BucketMap<T, U>`.
///
/// This iterator walks the buckets in order and yields owned entries.
pub struct BucketMapIntoIter<T, U> {
    buckets: vec::IntoIter<Bucket<T, U>>,
    entries: vec::IntoIter<Entry<T, U>>,
}

impl<T, U> Iterator for BucketMapIntoIter<T, U> {
    type Item = (T, U);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.entries.next() {
                return Some(entry.into_pair());
            }
            self.entries = self.buckets.next()?.into_iter();
        }
    }
}

/// An iterator for `BucketMap<T, U>`.
///
/// This iterator walks the buckets in order and yields immutable references.
pub struct BucketMapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    buckets: slice::Iter<'a, Bucket<T, U>>,
    entries: slice::Iter<'a, Entry<T, U>>,
}

impl<'a, T, U> Iterator for BucketMapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.entries.next() {
                return Some((&entry.key, &entry.value));
            }
            self.entries = self.buckets.next()?.iter();
        }
    }
}

impl<T, U> Default for BucketMap<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T, U, V> Index<&'a V> for BucketMap<T, U>
where
    T: AsRef<str>,
    V: AsRef<str> + ?Sized,
{
    type Output = U;

    fn index(&self, key: &V) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

impl<'a, T, U, V> IndexMut<&'a V> for BucketMap<T, U>
where
    T: AsRef<str>,
    V: AsRef<str> + ?Sized,
{
    fn index_mut(&mut self, key: &V) -> &mut Self::Output {
        self.get_mut(key).expect("Error: key does not exist.")
    }
}

#[cfg(test)]
mod tests {
    use super::{BucketMap, MAX_CAPACITY};
    use crate::bucket_map::hash;
    use crate::Error;

    #[test]
    fn test_len_empty() {
        let map: BucketMap<String, u32> = BucketMap::new();
        assert_eq!(map.len(), 0);
        assert_eq!(map.capacity(), 16);
        assert_eq!(map.load_factor(), 0.75);
    }

    #[test]
    fn test_is_empty() {
        let map: BucketMap<String, u32> = BucketMap::new();
        assert!(map.is_empty());
    }

    #[test]
    fn test_with_capacity_invalid() {
        assert_eq!(
            BucketMap::<String, u32>::with_capacity(0, 0.75).err(),
            Some(Error::InvalidArgument("capacity must be non-zero")),
        );
        assert!(BucketMap::<String, u32>::with_capacity(8, 0.0).is_err());
        assert!(BucketMap::<String, u32>::with_capacity(8, -1.0).is_err());
        assert!(BucketMap::<String, u32>::with_capacity(8, f64::NAN).is_err());
        assert!(BucketMap::<String, u32>::with_capacity(8, f64::INFINITY).is_err());
        assert!(BucketMap::<String, u32>::with_capacity(MAX_CAPACITY + 1, 0.75).is_err());
    }

    #[test]
    fn test_with_capacity_tiny_load_factor() {
        assert_eq!(
            BucketMap::<String, u32>::with_capacity(1, 1e-300).err(),
            Some(Error::InvalidArgument(
                "load factor is too small to hold a single entry"
            )),
        );
        assert!(BucketMap::<String, u32>::with_capacity(1, 0.5 / MAX_CAPACITY as f64).is_err());
        assert!(BucketMap::<String, u32>::with_capacity(1, 2.0 / MAX_CAPACITY as f64).is_ok());

        let mut map = BucketMap::with_capacity(1, 1e-3).unwrap();
        assert_eq!(map.insert("a", 1), None);
        assert_eq!(map.capacity(), 1024);
        assert_eq!(map.get("a"), Some(&1));
    }

    #[test]
    fn test_insert() {
        let mut map = BucketMap::new();
        assert_eq!(map.insert("a", 1), None);
        assert!(map.contains_key("a"));
        assert_eq!(map.get("a"), Some(&1));
    }

    #[test]
    fn test_insert_replace() {
        let mut map = BucketMap::new();
        assert_eq!(map.insert("a", 1), None);
        assert_eq!(map.insert("a", 2), Some(1));
        assert_eq!(map.get("a"), Some(&2));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_set_missing_key() {
        let mut map: BucketMap<&str, u32> = BucketMap::new();
        map.insert("a", 1);
        assert_eq!(
            map.set(None, 1),
            Err(Error::InvalidArgument("key must be present")),
        );
        assert_eq!(map.len(), 1);
        assert_eq!(map.keys(), vec![&"a"]);
    }

    #[test]
    fn test_set() {
        let mut map = BucketMap::new();
        assert_eq!(map.set(Some(String::from("a")), 1), Ok(None));
        assert_eq!(map.set(Some(String::from("a")), 2), Ok(Some(1)));
        assert_eq!(map.get("a"), Some(&2));
    }

    #[test]
    fn test_remove() {
        let mut map = BucketMap::new();
        map.insert("x", 1);
        assert_eq!(map.remove("x"), Some(1));
        assert_eq!(map.get("x"), None);
        assert!(!map.contains_key("x"));
        assert!(map.is_empty());
    }

    #[test]
    fn test_remove_missing() {
        let mut map = BucketMap::new();
        assert_eq!(map.remove("x"), None);
        map.insert("x", 1);
        assert_eq!(map.remove("y"), None);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_collisions() {
        let mut map = BucketMap::new();
        assert_eq!(hash("a", 16), hash("q", 16));

        map.insert("a", 1);
        assert!(!map.contains_key("q"));
        assert_eq!(map.get("q"), None);
        assert_eq!(map.remove("q"), None);

        map.insert("q", 2);
        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.get("q"), Some(&2));

        assert_eq!(map.remove("a"), Some(1));
        assert_eq!(map.get("q"), Some(&2));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_resize() {
        let mut map = BucketMap::new();
        for i in 0..12 {
            map.insert(i.to_string(), i);
        }
        assert_eq!(map.capacity(), 16);

        map.insert(String::from("12"), 12);
        assert_eq!(map.capacity(), 32);
        assert!(map.load() <= map.load_factor());

        for i in 0..13 {
            assert_eq!(map.get(&i.to_string()), Some(&i));
        }
        assert_eq!(map.len(), 13);
    }

    #[test]
    fn test_resize_rehashes_against_new_capacity() {
        let mut map = BucketMap::with_capacity(1, 1.0).unwrap();
        map.insert("c", 3);
        map.insert("b", 2);
        map.insert("a", 1);
        assert_eq!(map.capacity(), 4);

        // 97, 98 and 99 modulo 4
        assert_eq!(map.keys(), vec![&"a", &"b", &"c"]);
        assert_eq!(map.values(), vec![&1, &2, &3]);
    }

    #[test]
    fn test_resize_small_load_factor() {
        let mut map = BucketMap::with_capacity(1, 0.1).unwrap();
        map.insert("a", 1);
        assert_eq!(map.capacity(), 16);
        assert!(map.load() <= map.load_factor());
        assert_eq!(map.get("a"), Some(&1));
    }

    #[test]
    fn test_replace_does_not_resize() {
        let mut map = BucketMap::with_capacity(2, 1.0).unwrap();
        map.insert("a", 1);
        map.insert("b", 2);
        map.insert("a", 3);
        map.insert("b", 4);
        assert_eq!(map.capacity(), 2);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut map = BucketMap::with_capacity(4, 0.75).unwrap();
        for key in &["a", "b", "c", "d"] {
            map.insert(*key, ());
        }
        assert_eq!(map.capacity(), 8);

        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.capacity(), 4);
        assert_eq!(map.get("a"), None);
        assert_eq!(map.keys(), Vec::<&&str>::new());

        map.insert("a", ());
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_keys_values_entries() {
        let mut map = BucketMap::new();
        map.insert("b", 1);
        map.insert("a", 2);
        map.insert("q", 3);

        assert_eq!(map.keys(), vec![&"a", &"q", &"b"]);
        assert_eq!(map.values(), vec![&2, &3, &1]);
        assert_eq!(map.entries(), vec![(&"a", &2), (&"q", &3), (&"b", &1)]);
    }

    #[test]
    fn test_get_mut() {
        let mut map = BucketMap::new();
        map.insert("a", 1);
        {
            let value = map.get_mut("a");
            *value.unwrap() = 3;
        }
        assert_eq!(map.get("a"), Some(&3));
        assert_eq!(map.get_mut("b"), None);
    }

    #[test]
    fn test_index() {
        let mut map = BucketMap::new();
        map.insert(String::from("a"), 1);
        map["a"] += 1;
        assert_eq!(map["a"], 2);
    }

    #[test]
    fn test_into_iter() {
        let mut map = BucketMap::new();
        map.insert("b", 2);
        map.insert("a", 1);

        assert_eq!(
            map.into_iter().collect::<Vec<(&str, u32)>>(),
            vec![("a", 1), ("b", 2)],
        );
    }

    #[test]
    fn test_iter_skips_empty_buckets() {
        let mut map = BucketMap::with_capacity(64, 0.75).unwrap();
        map.insert("z", 26);
        map.insert("A", 1);

        assert_eq!(
            (&map).into_iter().collect::<Vec<(&&str, &u32)>>(),
            vec![(&"A", &1), (&"z", &26)],
        );
    }
}
