use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

/// Largest number of buckets a table will ever allocate.
pub(crate) const MAXIMUM_CAPACITY: usize = 1 << 30;

type Link<V> = Option<Box<Node<V>>>;

/// A single entry in a bucket's collision chain.
///
/// Each node exclusively owns its successor; the bucket slot owns the head.
struct Node<V> {
    /// Bucket hash computed when the key was first inserted. Rehashing reuses
    /// it instead of hashing the key again.
    hash: u32,
    key: i64,
    value: V,
    next: Link<V>,
}

#[inline(always)]
fn bucket_index(hash: u32, buckets: usize) -> usize {
    debug_assert!(buckets.is_power_of_two());
    hash as usize & (buckets - 1)
}

#[inline(always)]
fn threshold_for(capacity: usize, load_factor: f32) -> usize {
    // Float to int casts saturate, which keeps huge load factors in range.
    (capacity as f64 * load_factor as f64) as usize
}

fn empty_buckets<V>(len: usize) -> Box<[Link<V>]> {
    core::iter::repeat_with(|| None).take(len).collect()
}

fn push_back<V>(link: &mut Link<V>, node: Box<Node<V>>) {
    let mut cursor = link;
    while let Some(next) = cursor {
        cursor = &mut next.next;
    }
    *cursor = Some(node);
}

fn reverse<V>(mut chain: Link<V>) -> Link<V> {
    let mut reversed = None;
    while let Some(mut node) = chain {
        chain = node.next.take();
        node.next = reversed;
        reversed = Some(node);
    }
    reversed
}

/// Unlinks a chain node by node so long chains never drop recursively.
fn unlink<V>(mut chain: Link<V>) {
    while let Some(mut node) = chain {
        chain = node.next.take();
    }
}

/// A separately chained hash table of `i64` keys.
///
/// `HashTable` owns an array of bucket slots, each holding the head of a
/// singly linked chain of nodes. The caller supplies the bucket hash for every
/// operation; the table only masks it against the current bucket count and
/// compares keys.
///
/// The bucket array is allocated on the first insertion and doubles whenever
/// the number of entries reaches the threshold
/// (`floor(capacity * load_factor)`), up to [`MAXIMUM_CAPACITY`] buckets.
pub(crate) struct HashTable<V> {
    buckets: Box<[Link<V>]>,

    capacity: usize,
    load_factor: f32,
    threshold: usize,
    populated: usize,
}

impl<V> Debug for HashTable<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HashTable")
            .field("chains", &ChainLengths(&self.buckets))
            .field("populated", &self.populated)
            .field("capacity", &self.capacity)
            .field("threshold", &self.threshold)
            .field("load_factor", &self.load_factor)
            .finish()
    }
}

struct ChainLengths<'a, V>(&'a [Link<V>]);

impl<V> Debug for ChainLengths<'_, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut list = f.debug_list();
        for link in self.0 {
            let mut len = 0usize;
            let mut cursor = link.as_deref();
            while let Some(node) = cursor {
                len += 1;
                cursor = node.next.as_deref();
            }
            list.entry(&len);
        }
        list.finish()
    }
}

impl<V> Clone for HashTable<V>
where
    V: Clone,
{
    fn clone(&self) -> Self {
        let buckets = self
            .buckets
            .iter()
            .map(|link| {
                let mut nodes = Vec::new();
                let mut cursor = link.as_deref();
                while let Some(node) = cursor {
                    nodes.push((node.hash, node.key, node.value.clone()));
                    cursor = node.next.as_deref();
                }
                nodes
                    .into_iter()
                    .rev()
                    .fold(None, |next, (hash, key, value)| {
                        Some(Box::new(Node {
                            hash,
                            key,
                            value,
                            next,
                        }))
                    })
            })
            .collect();

        Self {
            buckets,
            capacity: self.capacity,
            load_factor: self.load_factor,
            threshold: self.threshold,
            populated: self.populated,
        }
    }
}

impl<V> Drop for HashTable<V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<V> HashTable<V> {
    /// Creates an empty table that will allocate `capacity` buckets on first
    /// insertion.
    ///
    /// `capacity` must be a power of two no larger than [`MAXIMUM_CAPACITY`]
    /// and `load_factor` must be finite and positive; the public constructor
    /// validates both.
    pub(crate) fn new(capacity: usize, load_factor: f32) -> Self {
        debug_assert!(capacity.is_power_of_two() && capacity <= MAXIMUM_CAPACITY);
        debug_assert!(load_factor.is_finite() && load_factor > 0.0);

        Self {
            buckets: Box::default(),
            capacity,
            load_factor,
            threshold: threshold_for(capacity, load_factor),
            populated: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.populated
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.populated == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn load_factor(&self) -> f32 {
        self.load_factor
    }

    pub(crate) fn threshold(&self) -> usize {
        self.threshold
    }

    /// Drops every entry while keeping the bucket array and capacity.
    pub(crate) fn clear(&mut self) {
        for slot in self.buckets.iter_mut() {
            unlink(slot.take());
        }
        self.populated = 0;
    }

    pub(crate) fn find(&self, hash: u32, key: i64) -> Option<&V> {
        if self.buckets.is_empty() {
            return None;
        }

        let head = self.buckets[bucket_index(hash, self.buckets.len())].as_deref()?;
        if head.key == key {
            return Some(&head.value);
        }

        let mut cursor = head.next.as_deref();
        while let Some(node) = cursor {
            if node.key == key {
                return Some(&node.value);
            }
            cursor = node.next.as_deref();
        }
        None
    }

    pub(crate) fn find_mut(&mut self, hash: u32, key: i64) -> Option<&mut V> {
        if self.buckets.is_empty() {
            return None;
        }

        let index = bucket_index(hash, self.buckets.len());
        let mut cursor = self.buckets[index].as_deref_mut();
        while let Some(node) = cursor {
            if node.key == key {
                return Some(&mut node.value);
            }
            cursor = node.next.as_deref_mut();
        }
        None
    }

    /// Inserts `value` under `key`, returning the value previously stored.
    ///
    /// When the stored value already equals `value` nothing is written and the
    /// new value is handed back as the previous one. Replacing a value never
    /// changes the entry count. The growth check runs after every call.
    pub(crate) fn insert(&mut self, hash: u32, key: i64, value: V) -> Option<V>
    where
        V: PartialEq,
    {
        if self.buckets.is_empty() {
            log::trace!("allocating {} buckets", self.capacity);
            self.buckets = empty_buckets(self.capacity);
        }

        let index = bucket_index(hash, self.buckets.len());
        let previous = {
            let mut cursor = self.buckets[index].as_deref_mut();
            let mut found = None;
            while let Some(node) = cursor {
                if node.key == key {
                    found = Some(node);
                    break;
                }
                cursor = node.next.as_deref_mut();
            }

            match found {
                Some(node) if node.value == value => Some(value),
                Some(node) => Some(core::mem::replace(&mut node.value, value)),
                None => {
                    push_back(
                        &mut self.buckets[index],
                        Box::new(Node {
                            hash,
                            key,
                            value,
                            next: None,
                        }),
                    );
                    self.populated += 1;
                    None
                }
            }
        };

        self.maybe_resize_rehash();
        previous
    }

    pub(crate) fn remove(&mut self, hash: u32, key: i64) -> Option<V> {
        if self.buckets.is_empty() {
            return None;
        }

        let index = bucket_index(hash, self.buckets.len());
        let mut cursor = &mut self.buckets[index];
        while cursor.as_ref().is_some_and(|node| node.key != key) {
            cursor = &mut cursor.as_mut()?.next;
        }

        let mut node = cursor.take()?;
        *cursor = node.next.take();
        self.populated -= 1;
        Some(node.value)
    }

    pub(crate) fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: self.buckets.iter(),
            node: None,
            remaining: self.populated,
        }
    }

    pub(crate) fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut {
            buckets: self.buckets.iter_mut(),
            node: None,
            remaining: self.populated,
        }
    }

    fn maybe_resize_rehash(&mut self) {
        if self.populated < self.threshold {
            return;
        }

        if self.capacity >= MAXIMUM_CAPACITY {
            if self.threshold != usize::MAX {
                log::warn!(
                    "table reached {} buckets with {} entries, growth disabled",
                    self.capacity,
                    self.populated
                );
                self.threshold = usize::MAX;
            }
            return;
        }

        let capacity = self.capacity << 1;
        log::debug!(
            "growing table from {} to {} buckets at {} entries",
            self.capacity,
            capacity,
            self.populated
        );
        self.capacity = capacity;
        self.threshold = threshold_for(capacity, self.load_factor);
        self.do_resize_rehash(capacity);
    }

    /// Moves every node into a fresh array of `capacity` buckets.
    ///
    /// Old buckets are visited in array order and each chain head to tail;
    /// every node lands at the tail of its new chain.
    fn do_resize_rehash(&mut self, capacity: usize) {
        let mut buckets = empty_buckets::<V>(capacity);

        // Pushing to the front and reversing once afterwards gives tail
        // appends without walking each new chain.
        for slot in self.buckets.iter_mut() {
            let mut chain = slot.take();
            while let Some(mut node) = chain {
                chain = node.next.take();
                let index = bucket_index(node.hash, capacity);
                node.next = buckets[index].take();
                buckets[index] = Some(node);
            }
        }
        for slot in buckets.iter_mut() {
            *slot = reverse(slot.take());
        }

        self.buckets = buckets;
    }

    #[cfg(test)]
    fn chain_keys(&self, bucket: usize) -> Vec<i64> {
        let mut keys = Vec::new();
        let mut cursor = self.buckets.get(bucket).and_then(|link| link.as_deref());
        while let Some(node) = cursor {
            keys.push(node.key);
            cursor = node.next.as_deref();
        }
        keys
    }
}

/// An iterator over the entries of a [`HashTable`] in bucket order, then
/// chain order.
pub(crate) struct Iter<'a, V> {
    buckets: core::slice::Iter<'a, Link<V>>,
    node: Option<&'a Node<V>>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (i64, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.node.take() {
                self.node = node.next.as_deref();
                self.remaining -= 1;
                return Some((node.key, &node.value));
            }
            self.node = self.buckets.next()?.as_deref();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            node: self.node,
            remaining: self.remaining,
        }
    }
}

/// A mutable iterator over the entries of a [`HashTable`].
pub(crate) struct IterMut<'a, V> {
    buckets: core::slice::IterMut<'a, Link<V>>,
    node: Option<&'a mut Node<V>>,
    remaining: usize,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (i64, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.node.take() {
                let Node {
                    key, value, next, ..
                } = node;
                self.node = next.as_deref_mut();
                self.remaining -= 1;
                return Some((*key, value));
            }
            self.node = self.buckets.next()?.as_deref_mut();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IterMut<'_, V> {}
