use alloc::vec::Vec;
use core::fmt::Debug;

use crate::error::Error;
use crate::error::InvalidArgument;
use crate::error::Result;
use crate::hash_table;
use crate::hash_table::HashTable;
use crate::hash_table::MAXIMUM_CAPACITY;

/// Number of buckets allocated by [`LongMap::new`].
pub const DEFAULT_CAPACITY: usize = 16;

/// Load factor used by [`LongMap::new`] and [`LongMap::with_capacity`].
pub const DEFAULT_LOAD_FACTOR: f32 = 0.75;

/// Computes the bucket hash of a key.
///
/// The high and low 32 bits are folded together with XOR and the absolute
/// value of the resulting signed 32-bit integer is taken. The single folded
/// value without a positive counterpart, `i32::MIN`, maps to `2^31`, which
/// falls into bucket 0 for every supported capacity.
///
/// ```rust
/// # use long_map::hash_key;
/// assert_eq!(hash_key(16), 16);
/// assert_eq!(hash_key(-16), 15);
/// assert_eq!(hash_key(1 << 32), 1);
/// ```
#[inline]
pub fn hash_key(key: i64) -> u32 {
    let folded = (key ^ ((key as u64) >> 32) as i64) as i32;
    folded.unsigned_abs()
}

/// A hash map from `i64` keys to values of type `V`.
///
/// `LongMap` uses separate chaining: each bucket holds a singly linked chain
/// of entries whose keys hash to it. The bucket count is always a power of
/// two; it doubles once the number of entries reaches
/// `floor(capacity * load_factor)` and never shrinks.
///
/// Values only need [`PartialEq`] for insertion and
/// [`contains_value`](LongMap::contains_value). Lookups return `Option<&V>`,
/// so a key mapped to `None` in a `LongMap<Option<T>>` is still reported by
/// [`contains_key`](LongMap::contains_key).
///
/// # Examples
///
/// ```rust
/// use long_map::LongMap;
///
/// let mut map = LongMap::new();
/// map.put(0, "zero");
/// map.put(16, "sixteen");
/// map.put(32, "thirty-two");
///
/// assert_eq!(map.remove(16), Some("sixteen"));
/// assert_eq!(map.get(0), Some(&"zero"));
/// assert_eq!(map.get(16), None);
/// assert_eq!(map.len(), 2);
/// ```
#[derive(Clone)]
pub struct LongMap<V> {
    table: HashTable<V>,
}

impl<V> Debug for LongMap<V>
where
    V: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V> Default for LongMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> LongMap<V> {
    /// Creates an empty map with 16 buckets and a load factor of 0.75.
    ///
    /// No memory is allocated until the first insertion.
    pub fn new() -> Self {
        Self {
            table: HashTable::new(DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR),
        }
    }

    /// Creates an empty map with at least `capacity` buckets and the default
    /// load factor.
    ///
    /// The bucket count is `capacity` rounded up to a power of two, capped at
    /// 2^30.
    ///
    /// ```rust
    /// # use long_map::LongMap;
    /// let map: LongMap<String> = LongMap::with_capacity(100);
    /// assert_eq!(map.capacity(), 128);
    /// assert_eq!(map.threshold(), 96);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: HashTable::new(table_size_for(capacity), DEFAULT_LOAD_FACTOR),
        }
    }

    /// Creates an empty map with the requested bucket count and load factor.
    ///
    /// The capacity is clamped to 2^30 and rounded up to a power of two
    /// (`0` becomes `1`). The resize threshold is
    /// `floor(capacity * load_factor)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `capacity` is negative or if
    /// `load_factor` is not a finite number greater than zero.
    ///
    /// ```rust
    /// # use long_map::{Error, InvalidArgument, LongMap};
    /// let map = LongMap::<u8>::with_capacity_and_load_factor(10, 0.5).unwrap();
    /// assert_eq!(map.capacity(), 16);
    /// assert_eq!(map.threshold(), 8);
    ///
    /// assert_eq!(
    ///     LongMap::<u8>::with_capacity_and_load_factor(-1, 0.5).unwrap_err(),
    ///     Error::InvalidArgument(InvalidArgument::Capacity(-1)),
    /// );
    /// assert!(LongMap::<u8>::with_capacity_and_load_factor(10, f32::NAN).is_err());
    /// ```
    pub fn with_capacity_and_load_factor(capacity: isize, load_factor: f32) -> Result<Self> {
        let Ok(capacity) = usize::try_from(capacity) else {
            return Err(InvalidArgument::Capacity(capacity).into());
        };
        // Negated so that NaN is rejected as well.
        if !(load_factor > 0.0) || load_factor.is_infinite() {
            return Err(InvalidArgument::LoadFactor(load_factor).into());
        }

        Ok(Self {
            table: HashTable::new(table_size_for(capacity), load_factor),
        })
    }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the current number of buckets.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Returns the load factor the map was created with.
    pub fn load_factor(&self) -> f32 {
        self.table.load_factor()
    }

    /// Returns the entry count at which the map next grows.
    ///
    /// Once the map holds 2^30 buckets and reaches its threshold, growth is
    /// disabled and this returns `usize::MAX`.
    pub fn threshold(&self) -> usize {
        self.table.threshold()
    }

    /// Removes all entries, keeping the current bucket count.
    ///
    /// ```rust
    /// # use long_map::LongMap;
    /// let mut map: LongMap<_> = (0..40).map(|k| (k, k)).collect();
    /// let capacity = map.capacity();
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert_eq!(map.capacity(), capacity);
    /// ```
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Returns a reference to the value stored under `key`.
    pub fn get(&self, key: i64) -> Option<&V> {
        self.table.find(hash_key(key), key)
    }

    /// Returns a mutable reference to the value stored under `key`.
    ///
    /// ```rust
    /// # use long_map::LongMap;
    /// let mut map = LongMap::new();
    /// map.put(1, 10);
    /// if let Some(value) = map.get_mut(1) {
    ///     *value += 1;
    /// }
    /// assert_eq!(map.get(1), Some(&11));
    /// ```
    pub fn get_mut(&mut self, key: i64) -> Option<&mut V> {
        self.table.find_mut(hash_key(key), key)
    }

    /// Returns `true` if the map holds an entry for `key`.
    pub fn contains_key(&self, key: i64) -> bool {
        self.get(key).is_some()
    }

    /// Removes the entry for `key`, returning its value.
    ///
    /// ```rust
    /// # use long_map::LongMap;
    /// let mut map = LongMap::new();
    /// map.put(1, "a");
    /// assert_eq!(map.remove(1), Some("a"));
    /// assert_eq!(map.remove(1), None);
    /// ```
    pub fn remove(&mut self, key: i64) -> Option<V> {
        self.table.remove(hash_key(key), key)
    }

    /// Returns every key, in iteration order.
    ///
    /// The output is allocated with exactly [`len`](LongMap::len) slots. Its
    /// order matches [`values`](LongMap::values) as long as the map is not
    /// modified between the two calls.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooManyEntries`] if the output buffer cannot be
    /// reserved.
    pub fn keys(&self) -> Result<Vec<i64>> {
        collect_exact(self.len(), self.iter().map(|(key, _)| key))
    }

    /// Returns a reference to every value, in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooManyEntries`] if the output buffer cannot be
    /// reserved.
    pub fn values(&self) -> Result<Vec<&V>> {
        collect_exact(self.len(), self.iter().map(|(_, value)| value))
    }

    /// Returns an iterator over `(key, &value)` pairs.
    ///
    /// Entries are visited bucket by bucket and, within a bucket, in chain
    /// order. The order changes when the map grows.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.table.iter(),
        }
    }

    /// Returns an iterator over `(key, &mut value)` pairs.
    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut {
            inner: self.table.iter_mut(),
        }
    }
}

impl<V> LongMap<V>
where
    V: PartialEq,
{
    /// Inserts `value` under `key`.
    ///
    /// Returns `None` if the key was absent, otherwise the value it held. When
    /// the stored value already equals `value` the map is left untouched and
    /// `value` itself is returned. Replacing a value does not change
    /// [`len`](LongMap::len).
    ///
    /// ```rust
    /// # use long_map::LongMap;
    /// let mut map = LongMap::new();
    /// assert_eq!(map.put(37, "a"), None);
    /// assert_eq!(map.put(37, "b"), Some("a"));
    /// assert_eq!(map.get(37), Some(&"b"));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn put(&mut self, key: i64, value: V) -> Option<V> {
        self.table.insert(hash_key(key), key, value)
    }

    /// Returns `true` if any entry holds a value equal to `value`.
    ///
    /// This scans every bucket.
    pub fn contains_value(&self, value: &V) -> bool {
        self.iter().any(|(_, v)| v == value)
    }
}

impl<V> Extend<(i64, V)> for LongMap<V>
where
    V: PartialEq,
{
    fn extend<I: IntoIterator<Item = (i64, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<V> FromIterator<(i64, V)> for LongMap<V>
where
    V: PartialEq,
{
    fn from_iter<I: IntoIterator<Item = (i64, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<'a, V> IntoIterator for &'a LongMap<V> {
    type IntoIter = Iter<'a, V>;
    type Item = (i64, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V> IntoIterator for &'a mut LongMap<V> {
    type IntoIter = IterMut<'a, V>;
    type Item = (i64, &'a mut V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An iterator over the entries of a [`LongMap`].
///
/// Created by [`LongMap::iter`].
pub struct Iter<'a, V> {
    inner: hash_table::Iter<'a, V>,
}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (i64, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

/// A mutable iterator over the entries of a [`LongMap`].
///
/// Created by [`LongMap::iter_mut`].
pub struct IterMut<'a, V> {
    inner: hash_table::IterMut<'a, V>,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (i64, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for IterMut<'_, V> {}

fn table_size_for(capacity: usize) -> usize {
    capacity.min(MAXIMUM_CAPACITY).next_power_of_two()
}

fn collect_exact<T>(len: usize, items: impl Iterator<Item = T>) -> Result<Vec<T>> {
    let mut out = Vec::new();
    out.try_reserve_exact(len)
        .map_err(|_| Error::TooManyEntries { len })?;
    out.extend(items);
    debug_assert_eq!(out.len(), len);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::format;
    use alloc::string::String;
    use alloc::string::ToString;
    use alloc::vec;

    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn string_map() -> LongMap<String> {
        LongMap::new()
    }

    #[test]
    fn hash_folds_high_and_low_words() {
        assert_eq!(hash_key(0), 0);
        assert_eq!(hash_key(11), 11);
        // -1 folds to 0.
        assert_eq!(hash_key(-1), 0);
        assert_eq!(hash_key(-16), 15);
        assert_eq!(hash_key((7 << 32) | 7), 0);
        assert_eq!(hash_key(i32::MIN as u32 as i64), 1 << 31);
        assert_eq!(hash_key(i32::MIN as u32 as i64) as usize & (MAXIMUM_CAPACITY - 1), 0);
    }

    #[test]
    fn table_size_rounds_up_to_power_of_two() {
        assert_eq!(table_size_for(0), 1);
        assert_eq!(table_size_for(1), 1);
        assert_eq!(table_size_for(10), 16);
        assert_eq!(table_size_for(16), 16);
        assert_eq!(table_size_for(17), 32);
        assert_eq!(table_size_for(MAXIMUM_CAPACITY + 1), MAXIMUM_CAPACITY);
        assert_eq!(table_size_for(usize::MAX), MAXIMUM_CAPACITY);
    }

    #[test]
    fn construction_defaults() {
        let map = string_map();
        assert!(map.is_empty());
        assert_eq!(map.capacity(), 16);
        assert_eq!(map.load_factor(), 0.75);
        assert_eq!(map.threshold(), 12);

        let map = LongMap::<String>::default();
        assert_eq!(map.capacity(), 16);
    }

    #[test]
    fn construction_with_parameters() {
        let map = LongMap::<String>::with_capacity_and_load_factor(10, 10.0).unwrap();
        assert_eq!(map.capacity(), 16);
        assert_eq!(map.threshold(), 160);

        let map = LongMap::<String>::with_capacity_and_load_factor(0, 0.75).unwrap();
        assert_eq!(map.capacity(), 1);
        assert_eq!(map.threshold(), 0);

        let map =
            LongMap::<String>::with_capacity_and_load_factor(isize::MAX, 0.75).unwrap();
        assert_eq!(map.capacity(), MAXIMUM_CAPACITY);
    }

    #[test]
    fn negative_capacity_is_rejected() {
        assert_eq!(
            LongMap::<String>::with_capacity_and_load_factor(-10, 10.0).unwrap_err(),
            Error::InvalidArgument(InvalidArgument::Capacity(-10))
        );
    }

    #[test]
    fn bad_load_factor_is_rejected() {
        for load_factor in [0.0, -10.0, f32::INFINITY, f32::NEG_INFINITY] {
            assert_eq!(
                LongMap::<String>::with_capacity_and_load_factor(10, load_factor).unwrap_err(),
                Error::InvalidArgument(InvalidArgument::LoadFactor(load_factor))
            );
        }
        assert!(matches!(
            LongMap::<String>::with_capacity_and_load_factor(10, f32::NAN),
            Err(Error::InvalidArgument(InvalidArgument::LoadFactor(lf))) if lf.is_nan()
        ));
    }

    #[test]
    fn put() {
        let mut map = string_map();
        for i in 0..16 {
            assert_eq!(map.put(i, i.to_string()), None);
        }

        assert_eq!(map.len(), 16);
        assert_eq!(map.get(15).map(String::as_str), Some("15"));
        assert_eq!(map.get(0).map(String::as_str), Some("0"));
    }

    #[test]
    fn put_replaces_without_counting() {
        let mut map = string_map();
        map.put(7, "a".to_string());
        assert_eq!(map.put(7, "b".to_string()), Some("a".to_string()));
        assert_eq!(map.get(7).map(String::as_str), Some("b"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn put_equal_value_reports_it() {
        let mut map = string_map();
        map.put(7, "same".to_string());
        assert_eq!(map.put(7, "same".to_string()), Some("same".to_string()));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn get() {
        let mut map: LongMap<Option<&str>> = LongMap::new();
        assert_eq!(map.get(0), None);

        map.put(0, Some("0"));
        map.put(1, Some("1"));
        map.put(10, Some("10"));
        map.put(11, None);
        map.put(32, Some("32"));
        map.put(16, Some("16"));
        map.put(-16, Some("-16"));

        assert_eq!(map.get(0), Some(&Some("0")));
        assert_eq!(map.get(1), Some(&Some("1")));
        assert_eq!(map.get(10), Some(&Some("10")));
        assert_eq!(map.get(11), Some(&None));
        assert_eq!(map.get(32), Some(&Some("32")));
        assert_eq!(map.get(16), Some(&Some("16")));
        assert_eq!(map.get(-16), Some(&Some("-16")));
        assert_eq!(map.get(2), None);
    }

    #[test]
    fn key_mapped_to_none_is_present() {
        let mut map: LongMap<Option<&str>> = LongMap::new();
        map.put(11, None);
        assert_eq!(map.get(11), Some(&None));
        assert!(map.contains_key(11));
        assert!(!map.contains_key(12));
    }

    #[test]
    fn remove_bucket_head() {
        let mut map = string_map();
        for key in [0, 16, 32, 1] {
            map.put(key, key.to_string());
        }

        assert_eq!(map.remove(0).as_deref(), Some("0"));
        assert_eq!(map.get(0), None);
        assert_eq!(map.get(16).map(String::as_str), Some("16"));
        assert_eq!(map.get(32).map(String::as_str), Some("32"));

        assert_eq!(map.remove(1).as_deref(), Some("1"));
        assert_eq!(map.get(1), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn remove_inside_chain() {
        let mut map = string_map();
        for key in [0, 16, 32, 48] {
            map.put(key, key.to_string());
        }

        assert_eq!(map.remove(16).as_deref(), Some("16"));
        assert_eq!(map.get(0).map(String::as_str), Some("0"));
        assert_eq!(map.get(16), None);
        assert_eq!(map.get(32).map(String::as_str), Some("32"));
        assert_eq!(map.get(48).map(String::as_str), Some("48"));

        assert_eq!(map.remove(32).as_deref(), Some("32"));
        assert_eq!(map.get(0).map(String::as_str), Some("0"));
        assert_eq!(map.get(32), None);
        assert_eq!(map.get(48).map(String::as_str), Some("48"));
    }

    #[test]
    fn remove_absent_key() {
        let mut map = string_map();
        assert_eq!(map.remove(3), None);
        map.put(3, "3".to_string());
        assert_eq!(map.remove(19), None);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn is_empty() {
        let mut map = string_map();
        assert!(map.is_empty());
        map.put(1, "1".to_string());
        assert!(!map.is_empty());

        map.put(17, "17".to_string());
        map.remove(1);
        map.remove(17);
        assert!(map.is_empty());
    }

    #[test]
    fn contains_key() {
        let mut map = string_map();
        assert!(!map.contains_key(0));
        assert!(!map.contains_key(16));
        map.put(0, "0".to_string());
        map.put(16, "16".to_string());
        assert!(map.contains_key(0));
        assert!(map.contains_key(16));
    }

    #[test]
    fn contains_value() {
        let mut map: LongMap<Option<&str>> = LongMap::new();
        assert!(!map.contains_value(&Some("1")));
        map.put(1, Some("1"));
        assert!(map.contains_value(&Some("1")));

        assert!(!map.contains_value(&None));
        map.put(1, None);
        assert!(map.contains_value(&None));
        assert!(!map.contains_value(&Some("1")));
    }

    #[test]
    fn keys() {
        let mut map = string_map();
        for i in 0..100 {
            map.put(i, i.to_string());
        }
        let expected: Vec<i64> = (0..100).collect();
        assert_eq!(map.keys().unwrap(), expected);
    }

    #[test]
    fn values() {
        let mut map = string_map();
        for i in 0..100 {
            map.put(i, i.to_string());
        }
        let expected: Vec<String> = (0..100).map(|i: i64| i.to_string()).collect();
        let values = map.values().unwrap();
        assert_eq!(values.len(), 100);
        assert!(values.iter().zip(&expected).all(|(a, b)| *a == b));
    }

    #[test]
    fn keys_and_values_line_up() {
        let mut map = string_map();
        for key in [5, -3, 21, 37, 1 << 40, -(1 << 40), 0] {
            map.put(key, format!("v{key}"));
        }
        let keys = map.keys().unwrap();
        let values = map.values().unwrap();
        assert_eq!(keys.len(), map.len());
        assert_eq!(values.len(), map.len());
        for (key, value) in keys.iter().zip(values) {
            assert_eq!(*value, format!("v{key}"));
        }
    }

    #[test]
    fn oversized_collection_is_rejected() {
        let err = collect_exact::<u64>(usize::MAX, core::iter::empty()).unwrap_err();
        assert_eq!(err, Error::TooManyEntries { len: usize::MAX });
    }

    #[test]
    fn size() {
        let mut map: LongMap<Option<String>> = LongMap::new();
        assert_eq!(map.len(), 0);
        for i in 0..200 {
            map.put(i, None);
        }
        assert_eq!(map.len(), 200);
        for i in 50..150 {
            map.remove(i);
        }
        assert_eq!(map.len(), 100);
    }

    #[test]
    fn clear() {
        let mut map: LongMap<Option<String>> = LongMap::new();
        assert!(map.is_empty());
        map.put(1, None);
        map.put(16, None);
        assert!(!map.is_empty());

        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert_eq!(map.get(1), None);
        assert_eq!(map.get(16), None);

        assert_eq!(map.put(1, Some("again".to_string())), None);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(1), Some(&Some("again".to_string())));
    }

    #[test]
    fn growth_keeps_every_key() {
        let mut map = string_map();
        for i in 0..100 {
            map.put(i, i.to_string());
        }
        assert_eq!(map.len(), 100);
        assert_eq!(map.capacity(), 256);
        for i in 0..100 {
            assert_eq!(map.get(i), Some(&i.to_string()));
        }
    }

    #[test]
    fn iter_mut_updates_in_place() {
        let mut map: LongMap<i64> = (0..50).map(|k| (k, k)).collect();
        for (key, value) in &mut map {
            *value = key * 2;
        }
        assert_eq!(map.iter().len(), 50);
        for (key, value) in &map {
            assert_eq!(*value, key * 2);
        }
    }

    #[test]
    fn debug_lists_entries() {
        let mut map = LongMap::new();
        map.put(3, 'c');
        assert_eq!(format!("{map:?}"), "{3: 'c'}");
    }

    #[test]
    fn clone_is_independent() {
        let mut map: LongMap<i64> = (0..20).map(|k| (k, k)).collect();
        let copy = map.clone();
        map.clear();
        assert_eq!(copy.len(), 20);
        assert_eq!(copy.keys().unwrap(), (0..20).collect::<Vec<_>>());
    }

    #[test]
    #[cfg_attr(miri, ignore)]
    fn random_operations_match_model() {
        let mut rng = SmallRng::seed_from_u64(0x10_9a_3a95);
        let mut map = LongMap::with_capacity_and_load_factor(2, 0.5).unwrap();
        let mut model = BTreeMap::new();

        for _ in 0..20_000 {
            let key = rng.random_range(-512i64..512) << rng.random_range(0u32..40);
            match rng.random_range(0..4) {
                0 | 1 => {
                    let value = rng.random_range(0u8..4);
                    assert_eq!(map.put(key, value), model.insert(key, value));
                }
                2 => assert_eq!(map.remove(key), model.remove(&key)),
                _ => assert_eq!(map.get(key), model.get(&key)),
            }
            assert_eq!(map.len(), model.len());
        }

        let mut pairs: Vec<(i64, u8)> = map.iter().map(|(k, v)| (k, *v)).collect();
        pairs.sort_unstable();
        assert_eq!(pairs, model.into_iter().collect::<Vec<_>>());
        assert!(map.len() < map.threshold());
        assert!(map.capacity().is_power_of_two());
    }

    #[test]
    fn negative_and_extreme_keys() {
        let mut map = LongMap::new();
        let keys = vec![i64::MIN, i64::MAX, -1, 0, 1, i32::MIN as i64, i32::MAX as i64];
        for (i, key) in keys.iter().enumerate() {
            map.put(*key, i);
        }
        for (i, key) in keys.iter().enumerate() {
            assert_eq!(map.get(*key), Some(&i));
        }
        assert_eq!(map.len(), keys.len());
    }
}
