//! Hash map keyed by character sequences, built on an array of buckets where each bucket holds the
//! entries whose keys hash to the same address.
//!
//! The bucket array doubles and every entry is rehashed as soon as the ratio of entries to buckets
//! exceeds the map's load factor.

mod hash;
mod map;

pub use self::hash::hash;
pub use self::map::{
    BucketMap, BucketMapIntoIter, BucketMapIter, DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR,
    MAX_CAPACITY,
};
