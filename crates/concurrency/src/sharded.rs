//! Sharded concurrent map
//!
//! A fixed arena of independently locked shards with deterministic key routing.
//! Used by parallel ranking to accumulate per-document scores without a
//! single global lock.
//!
//! # Design
//!
//! - Shard: `parking_lot::Mutex` around an `FxHashMap`
//! - Routing: `FxHash(key) % shard_count`, so a key always lands in one shard
//! - Access: a mapped guard that keeps the shard locked until it is dropped
//!
//! # Thread Safety
//!
//! - access()/erase(): only lock the target shard
//! - Keys routed to different shards never contend
//! - snapshot_merge(): locks shards one at a time, so the result is a rolling
//!   snapshot rather than a single point-in-time view of the whole map

use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};
use rustc_hash::{FxHashMap, FxHasher};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Scoped mutable access to one value
///
/// The owning shard stays locked for as long as the guard lives and is
/// released when it drops, including on early return or unwinding.
pub type Access<'a, V> = MappedMutexGuard<'a, V>;

/// Generic `K -> V` map partitioned into independently locked shards
///
/// # Example
///
/// ```
/// use scout_concurrency::ShardedMap;
///
/// let map: ShardedMap<i32, f64> = ShardedMap::new(4);
/// *map.access(7) += 0.5;
/// *map.access(7) += 0.25;
/// map.erase(&3);
///
/// let merged = map.snapshot_merge();
/// assert_eq!(merged.get(&7), Some(&0.75));
/// ```
pub struct ShardedMap<K, V> {
    shards: Vec<Mutex<FxHashMap<K, V>>>,
}

impl<K: Hash + Eq, V> ShardedMap<K, V> {
    /// Create a map with `shard_count` empty shards
    ///
    /// # Panics
    ///
    /// Panics if `shard_count` is zero.
    pub fn new(shard_count: usize) -> Self {
        assert!(shard_count > 0, "ShardedMap requires at least one shard");
        let shards = (0..shard_count)
            .map(|_| Mutex::new(FxHashMap::default()))
            .collect();
        Self { shards }
    }

    /// Number of shards
    #[inline]
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Index of the shard owning `key`
    #[inline]
    pub fn shard_index(&self, key: &K) -> usize {
        let mut hasher = FxHasher::default();
        key.hash(&mut hasher);
        (hasher.finish() % self.shards.len() as u64) as usize
    }

    #[inline]
    fn shard(&self, key: &K) -> &Mutex<FxHashMap<K, V>> {
        &self.shards[self.shard_index(key)]
    }

    /// Lock the owning shard and return the value for `key`
    ///
    /// A default value is inserted if the key is absent. Holding two guards for
    /// keys on the same shard from one thread deadlocks.
    pub fn access(&self, key: K) -> Access<'_, V>
    where
        V: Default,
    {
        let shard = self.shard(&key).lock();
        MutexGuard::map(shard, |map| map.entry(key).or_default())
    }

    /// Run `f` on the value for `key` while its shard is locked
    pub fn with<R>(&self, key: K, f: impl FnOnce(&mut V) -> R) -> R
    where
        V: Default,
    {
        let mut value = self.access(key);
        f(&mut value)
    }

    /// Remove `key` if present, returning its value
    pub fn erase(&self, key: &K) -> Option<V> {
        self.shard(key).lock().remove(key)
    }

    /// Clone the current value for `key` without inserting a default
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.shard(key).lock().get(key).cloned()
    }

    /// Total number of entries across shards
    ///
    /// Shards are counted one after another, so concurrent writers may make
    /// this stale by the time it returns.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.lock().len()).sum()
    }

    /// True if every shard is empty
    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|shard| shard.lock().is_empty())
    }

    /// Merge all shards into an ordinary ordered map
    ///
    /// For each shard in index order: lock, copy, unlock, then union the copy
    /// into the result. Routing is deterministic, so no key appears in two
    /// shards and the union never overwrites.
    pub fn snapshot_merge(&self) -> BTreeMap<K, V>
    where
        K: Ord + Clone,
        V: Clone,
    {
        let mut merged = BTreeMap::new();
        for shard in &self.shards {
            let copy: Vec<(K, V)> = {
                let guard = shard.lock();
                guard
                    .iter()
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect()
            };
            merged.extend(copy);
        }
        merged
    }
}

impl<K, V> fmt::Debug for ShardedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShardedMap")
            .field("shard_count", &self.shards.len())
            .field(
                "entries",
                &self.shards.iter().map(|s| s.lock().len()).sum::<usize>(),
            )
            .finish()
    }
}
