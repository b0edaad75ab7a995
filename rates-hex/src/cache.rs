//! Shared last-known-good rate cell.

use std::sync::{PoisonError, RwLock};

use rust_decimal::Decimal;

use rates_types::RateSnapshot;

/// A single mutable cell holding the last successfully fetched rate.
///
/// Shared via `Arc` between the refresh loop (writer) and any number of
/// concurrent readers (conversion calls, stream samplers). Reads copy the
/// snapshot out; the write critical section is a single replace, so no
/// reader ever observes a partially written value. Overlapping writes
/// resolve last-write-wins.
///
/// A populated cache is never reset to empty: a failed refresh simply
/// does not write, leaving the previous snapshot authoritative.
#[derive(Debug, Default)]
pub struct RateCache {
    cell: RwLock<Option<RateSnapshot>>,
}

impl RateCache {
    /// Creates an empty cache ("no rate yet known").
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the current snapshot, if any. Non-blocking
    /// beyond the brief guard acquisition; never waits on IO.
    pub fn read(&self) -> Option<RateSnapshot> {
        // A poisoned guard still holds a coherent snapshot: writes are a
        // single replace and cannot be observed half-done.
        *self.cell.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the snapshot with a freshly stamped one.
    pub fn write(&self, value: Decimal) {
        let snapshot = RateSnapshot::new(value);
        *self.cell.write().unwrap_or_else(PoisonError::into_inner) = Some(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cache_starts_empty() {
        let cache = RateCache::new();
        assert!(cache.read().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let cache = RateCache::new();
        cache.write(dec!(600.00));
        assert_eq!(cache.read().unwrap().value(), dec!(600.00));
    }

    #[test]
    fn test_last_write_wins() {
        let cache = RateCache::new();
        cache.write(dec!(600.00));
        cache.write(dec!(601.50));
        assert_eq!(cache.read().unwrap().value(), dec!(601.50));
    }

    #[test]
    fn test_reads_are_independent_copies() {
        let cache = RateCache::new();
        cache.write(dec!(600.00));
        let first = cache.read().unwrap();
        cache.write(dec!(700.00));
        // The earlier snapshot is a copy, untouched by the later write.
        assert_eq!(first.value(), dec!(600.00));
        assert_eq!(cache.read().unwrap().value(), dec!(700.00));
    }

    #[test]
    fn test_concurrent_readers_and_writer() {
        use std::sync::Arc;

        let cache = Arc::new(RateCache::new());
        cache.write(dec!(600.00));

        let writer = {
            let cache = Arc::clone(&cache);
            std::thread::spawn(move || {
                for i in 0..1000 {
                    cache.write(Decimal::from(i));
                }
            })
        };
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        // Every read observes some complete snapshot.
                        assert!(cache.read().is_some());
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
    }
}
