//! PolygonRegistry — in-memory geofence region store.
//!
//! A thread-safe mapping from [`PolygonId`] to [`Polygon`], shared by
//! provisioning writers and concurrent resolution readers.
//!
//! # Thread Safety
//!
//! A single coarse `RwLock` protects the id → polygon map. That is exactly
//! what the consistency contract requires: bulk mutations
//! ([`PolygonRegistry::insert_many`], [`PolygonRegistry::remove_many`],
//! [`PolygonRegistry::populate`]) hold the write lock for the whole batch,
//! so a reader sees either none or all of a batch, never a partial one.
//! Lock hold times are proportional to the batch size, never unbounded.
//!
//! # Atomicity
//!
//! - `populate()` builds the replacement map outside the lock, swaps with a
//!   brief write acquisition; readers see the old set or the new set.
//! - Polygons are stored as `Arc<Polygon>`: snapshots and lookups hand out
//!   cheap read-only views that stay valid after the entry is removed.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::geometry::{Polygon, PolygonId};

/// In-memory geofence region store.
///
/// Holds every known region polygon keyed by its caller-assigned id. One
/// instance is constructed at startup and shared (via `Arc`) between the
/// provisioning side, which adds and removes regions, and any number of
/// resolvers, which read snapshots. There is deliberately no hidden global
/// instance; sharing is explicit.
///
/// Re-adding an id replaces the prior polygon; removing an unknown id is a
/// no-op. Both follow from the map semantics and are part of the contract.
pub struct PolygonRegistry {
    polygons: RwLock<HashMap<PolygonId, Arc<Polygon>>>,
}

impl PolygonRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            polygons: RwLock::new(HashMap::new()),
        }
    }

    /// Snapshot of all currently registered polygons.
    ///
    /// Reflects the state at call time; later mutations do not affect the
    /// returned vector. No ordering guarantee.
    pub fn all(&self) -> Vec<Arc<Polygon>> {
        let polygons = self.polygons.read().expect("PolygonRegistry lock poisoned");
        polygons.values().cloned().collect()
    }

    /// Look up a polygon by id.
    ///
    /// Returns `None` for an unregistered id; absence is a normal case,
    /// not an error.
    pub fn get(&self, id: PolygonId) -> Option<Arc<Polygon>> {
        let polygons = self.polygons.read().expect("PolygonRegistry lock poisoned");
        polygons.get(&id).cloned()
    }

    /// Check whether an id is registered.
    pub fn contains(&self, id: PolygonId) -> bool {
        let polygons = self.polygons.read().expect("PolygonRegistry lock poisoned");
        polygons.contains_key(&id)
    }

    /// Insert a polygon, replacing any prior entry with the same id.
    ///
    /// Returns the replaced polygon when one existed.
    pub fn insert(&self, polygon: Polygon) -> Option<Arc<Polygon>> {
        let mut polygons = self.polygons.write().expect("PolygonRegistry lock poisoned");
        polygons.insert(polygon.id(), Arc::new(polygon))
    }

    /// Insert a batch of polygons under one write-lock acquisition.
    ///
    /// Readers see either none or all of the batch. When the batch contains
    /// two polygons with the same id, the later one in iteration order
    /// wins, matching single-`insert` replacement semantics.
    pub fn insert_many(&self, batch: impl IntoIterator<Item = Polygon>) {
        let mut polygons = self.polygons.write().expect("PolygonRegistry lock poisoned");
        let before = polygons.len();
        for polygon in batch {
            polygons.insert(polygon.id(), Arc::new(polygon));
        }
        debug!(
            added = polygons.len() - before,
            total = polygons.len(),
            "registered polygon batch"
        );
    }

    /// Remove a polygon by id.
    ///
    /// Returns the removed polygon, or `None` if the id was not registered
    /// (a no-op, not an error).
    pub fn remove(&self, id: PolygonId) -> Option<Arc<Polygon>> {
        let mut polygons = self.polygons.write().expect("PolygonRegistry lock poisoned");
        polygons.remove(&id)
    }

    /// Remove a batch of ids under one write-lock acquisition.
    ///
    /// Absent ids are skipped; readers see either none or all of the batch
    /// applied.
    pub fn remove_many(&self, ids: impl IntoIterator<Item = PolygonId>) {
        let mut polygons = self.polygons.write().expect("PolygonRegistry lock poisoned");
        let before = polygons.len();
        for id in ids {
            polygons.remove(&id);
        }
        debug!(
            removed = before - polygons.len(),
            total = polygons.len(),
            "removed polygon batch"
        );
    }

    /// Atomic wholesale replacement — the provisioning-refresh operation.
    ///
    /// Builds the new map outside the lock (readers are not blocked during
    /// the build), then swaps with a brief write acquisition. Readers see
    /// the complete old set or the complete new set, never a mix.
    pub fn populate(&self, batch: impl IntoIterator<Item = Polygon>) {
        let mut fresh = HashMap::new();
        for polygon in batch {
            fresh.insert(polygon.id(), Arc::new(polygon));
        }
        let count = fresh.len();

        let mut polygons = self.polygons.write().expect("PolygonRegistry lock poisoned");
        *polygons = fresh;
        debug!(total = count, "repopulated polygon registry");
    }

    /// Number of registered polygons.
    pub fn len(&self) -> usize {
        let polygons = self.polygons.read().expect("PolygonRegistry lock poisoned");
        polygons.len()
    }

    /// True when no polygons are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every polygon.
    pub fn clear(&self) {
        let mut polygons = self.polygons.write().expect("PolygonRegistry lock poisoned");
        polygons.clear();
    }
}

impl Default for PolygonRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    /// Small triangular fence whose vertices are offset by the id, so
    /// polygons with different ids have different contents.
    fn fence(id: u64) -> Polygon {
        let offset = id as f64;
        Polygon::new(
            PolygonId::new(id),
            vec![
                Point::new(offset, 0.0),
                Point::new(offset + 1.0, 0.0),
                Point::new(offset, 1.0),
            ],
        )
    }

    // =========================================================================
    // Basic CRUD
    // =========================================================================

    #[test]
    fn test_new_empty() {
        let registry = PolygonRegistry::new();
        assert_eq!(registry.len(), 0);
        assert!(registry.is_empty());
        assert!(registry.all().is_empty());
    }

    #[test]
    fn test_insert_then_get_returns_same_polygon() {
        let registry = PolygonRegistry::new();
        let polygon = fence(1);

        registry.insert(polygon.clone());

        let got = registry.get(PolygonId::new(1)).expect("polygon registered");
        assert_eq!(*got, polygon);
    }

    #[test]
    fn test_get_missing_returns_none() {
        let registry = PolygonRegistry::new();
        assert!(registry.get(PolygonId::new(42)).is_none());
    }

    #[test]
    fn test_contains() {
        let registry = PolygonRegistry::new();
        registry.insert(fence(1));

        assert!(registry.contains(PolygonId::new(1)));
        assert!(!registry.contains(PolygonId::new(2)));
    }

    #[test]
    fn test_insert_first_time_returns_none() {
        let registry = PolygonRegistry::new();
        assert!(registry.insert(fence(1)).is_none());
    }

    #[test]
    fn test_insert_same_id_replaces_and_returns_previous() {
        let registry = PolygonRegistry::new();
        let old = fence(1);
        let new = Polygon::named(
            PolygonId::new(1),
            "replacement",
            vec![Point::new(5.0, 5.0), Point::new(6.0, 5.0), Point::new(5.0, 6.0)],
        );

        registry.insert(old.clone());
        let replaced = registry.insert(new.clone()).expect("prior entry replaced");

        assert_eq!(*replaced, old);
        assert_eq!(registry.len(), 1);
        let got = registry.get(PolygonId::new(1)).expect("still registered");
        assert_eq!(*got, new);
    }

    #[test]
    fn test_remove_returns_polygon() {
        let registry = PolygonRegistry::new();
        let polygon = fence(1);
        registry.insert(polygon.clone());

        let removed = registry.remove(PolygonId::new(1)).expect("was registered");
        assert_eq!(*removed, polygon);
        assert!(registry.get(PolygonId::new(1)).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let registry = PolygonRegistry::new();
        registry.insert(fence(1));

        assert!(registry.remove(PolygonId::new(99)).is_none());
        assert_eq!(registry.len(), 1);
    }

    // =========================================================================
    // Bulk operations
    // =========================================================================

    #[test]
    fn test_insert_many_registers_every_element() {
        let registry = PolygonRegistry::new();
        registry.insert_many(vec![fence(1), fence(2), fence(3)]);

        assert_eq!(registry.len(), 3);
        for id in 1..=3 {
            assert!(registry.contains(PolygonId::new(id)), "id {} missing", id);
        }
    }

    #[test]
    fn test_insert_many_last_wins_on_id_collision() {
        let registry = PolygonRegistry::new();
        let first = Polygon::named(
            PolygonId::new(7),
            "first",
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)],
        );
        let second = Polygon::named(
            PolygonId::new(7),
            "second",
            vec![Point::new(2.0, 2.0), Point::new(3.0, 2.0), Point::new(2.0, 3.0)],
        );

        registry.insert_many(vec![first, second.clone()]);

        assert_eq!(registry.len(), 1);
        let got = registry.get(PolygonId::new(7)).expect("registered");
        assert_eq!(got.name(), Some("second"));
        assert_eq!(*got, second);
    }

    #[test]
    fn test_remove_many_skips_absent_ids() {
        let registry = PolygonRegistry::new();
        registry.insert_many(vec![fence(1), fence(2), fence(3)]);

        registry.remove_many(vec![
            PolygonId::new(1),
            PolygonId::new(99), // absent, skipped
            PolygonId::new(3),
        ]);

        assert_eq!(registry.len(), 1);
        assert!(registry.contains(PolygonId::new(2)));
    }

    #[test]
    fn test_populate_replaces_previous_set() {
        let registry = PolygonRegistry::new();
        registry.insert_many(vec![fence(1), fence(2)]);

        registry.populate(vec![fence(10), fence(11), fence(12)]);

        assert_eq!(registry.len(), 3);
        assert!(!registry.contains(PolygonId::new(1)));
        assert!(!registry.contains(PolygonId::new(2)));
        assert!(registry.contains(PolygonId::new(10)));
    }

    #[test]
    fn test_clear() {
        let registry = PolygonRegistry::new();
        registry.insert_many(vec![fence(1), fence(2)]);

        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.get(PolygonId::new(1)).is_none());
    }

    // =========================================================================
    // Snapshot semantics
    // =========================================================================

    #[test]
    fn test_all_is_a_point_in_time_snapshot() {
        let registry = PolygonRegistry::new();
        registry.insert_many(vec![fence(1), fence(2)]);

        let snapshot = registry.all();
        registry.insert(fence(3));
        registry.remove(PolygonId::new(1));

        // The snapshot still reflects the state at call time.
        assert_eq!(snapshot.len(), 2);
        let ids: Vec<u64> = snapshot.iter().map(|p| p.id().value()).collect();
        assert!(ids.contains(&1));
        assert!(ids.contains(&2));
    }

    #[test]
    fn test_snapshot_entries_survive_removal() {
        let registry = PolygonRegistry::new();
        registry.insert(fence(1));

        let got = registry.get(PolygonId::new(1)).expect("registered");
        registry.remove(PolygonId::new(1));

        // The Arc keeps the removed polygon's contents readable.
        assert_eq!(got.id(), PolygonId::new(1));
        assert_eq!(got.vertices().len(), 3);
    }

    // =========================================================================
    // Concurrency
    // =========================================================================

    #[test]
    fn test_concurrent_reads() {
        use std::sync::Arc;
        use std::thread;

        let registry = Arc::new(PolygonRegistry::new());
        registry.insert_many((0..100).map(fence));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let reg = Arc::clone(&registry);
                thread::spawn(move || {
                    for id in 0..100 {
                        assert!(reg.contains(PolygonId::new(id)));
                    }
                    assert_eq!(reg.all().len(), 100);
                })
            })
            .collect();

        for h in handles {
            h.join().expect("reader thread panicked");
        }
    }

    #[test]
    fn test_concurrent_disjoint_writers_never_lose_updates() {
        use std::sync::Arc;
        use std::thread;

        let registry = Arc::new(PolygonRegistry::new());

        // Each writer owns a disjoint id range: inserts 50 polygons, then
        // removes the first 25 of them.
        let writers: Vec<_> = (0u64..4)
            .map(|w| {
                let reg = Arc::clone(&registry);
                thread::spawn(move || {
                    let base = w * 100;
                    for id in base..base + 50 {
                        reg.insert(fence(id));
                    }
                    for id in base..base + 25 {
                        reg.remove(PolygonId::new(id));
                    }
                })
            })
            .collect();

        for h in writers {
            h.join().expect("writer thread panicked");
        }

        // Final state matches the serial composition in every range.
        assert_eq!(registry.len(), 4 * 25);
        for w in 0u64..4 {
            let base = w * 100;
            for id in base..base + 25 {
                assert!(!registry.contains(PolygonId::new(id)), "id {} lingers", id);
            }
            for id in base + 25..base + 50 {
                assert!(registry.contains(PolygonId::new(id)), "id {} lost", id);
            }
        }
    }

    #[test]
    fn test_insert_many_is_atomic_to_readers() {
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::Arc;
        use std::thread;

        let registry = Arc::new(PolygonRegistry::new());
        let done = Arc::new(AtomicBool::new(false));

        // Readers may observe the registry before or after the batch, but
        // never a partially-applied batch.
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let reg = Arc::clone(&registry);
                let done = Arc::clone(&done);
                thread::spawn(move || {
                    while !done.load(Ordering::Relaxed) {
                        let n = reg.len();
                        assert!(n == 0 || n == 200, "observed partial batch: {}", n);
                    }
                })
            })
            .collect();

        let writer = {
            let reg = Arc::clone(&registry);
            thread::spawn(move || {
                reg.insert_many((0..200).map(fence));
            })
        };

        writer.join().expect("writer thread panicked");
        done.store(true, Ordering::Relaxed);
        for h in readers {
            h.join().expect("reader thread panicked");
        }

        assert_eq!(registry.len(), 200);
    }

    #[test]
    fn test_populate_is_atomic_to_readers() {
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::Arc;
        use std::thread;

        let registry = Arc::new(PolygonRegistry::new());
        registry.populate((0..50).map(fence));

        let done = Arc::new(AtomicBool::new(false));
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let reg = Arc::clone(&registry);
                let done = Arc::clone(&done);
                thread::spawn(move || {
                    while !done.load(Ordering::Relaxed) {
                        let n = reg.len();
                        assert!(n == 50 || n == 80, "observed mixed set: {}", n);
                    }
                })
            })
            .collect();

        let writer = {
            let reg = Arc::clone(&registry);
            thread::spawn(move || {
                reg.populate((100..180).map(fence));
            })
        };

        writer.join().expect("writer thread panicked");
        done.store(true, Ordering::Relaxed);
        for h in readers {
            h.join().expect("reader thread panicked");
        }

        assert_eq!(registry.len(), 80);
        assert!(registry.contains(PolygonId::new(100)));
        assert!(!registry.contains(PolygonId::new(0)));
    }

    // =========================================================================
    // Default trait
    // =========================================================================

    #[test]
    fn test_default() {
        let registry = PolygonRegistry::default();
        assert!(registry.is_empty());
    }
}
