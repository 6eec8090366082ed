const MULTIPLIER: u128 = 31;

/// Computes the bucket address of a key for a bucket array of length `capacity`.
///
/// The key is read as a polynomial in base 31 over its characters' scalar values, reduced modulo
/// `capacity`. Reducing after every character gives the same address as reducing the exact value
/// once at the end.
///
/// # Panics
///
/// Panics if `capacity` is zero.
///
/// # Examples
///
/// ```
/// use basic_collections::bucket_map::hash;
///
/// assert_eq!(hash("", 16), 0);
/// assert_eq!(hash("a", 16), 97 % 16);
/// assert_eq!(hash("ab", 1000), (31 * 97 + 98) % 1000);
/// ```
pub fn hash(key: &str, capacity: usize) -> usize {
    assert!(capacity > 0, "Expected a non-zero capacity.");
    let capacity = capacity as u128;
    let address = key.chars().fold(0, |address, c| {
        (address * MULTIPLIER + u128::from(u32::from(c))) % capacity
    });
    address as usize
}
