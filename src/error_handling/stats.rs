//! Drop statistics.
//!
//! Thread-safe counters for run references that were dropped during a lookup,
//! one counter per [`DropReason`].

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::DropReason;

/// Thread-safe drop counter.
///
/// Every reason is initialized to zero on creation, so concurrent resolution
/// branches only ever touch existing atomics.
#[derive(Debug)]
pub struct DropStats {
    drops: HashMap<DropReason, AtomicUsize>,
}

impl DropStats {
    pub fn new() -> Self {
        let drops = DropReason::iter()
            .map(|reason| (reason, AtomicUsize::new(0)))
            .collect();
        DropStats { drops }
    }

    pub fn record(&self, reason: DropReason) {
        if let Some(counter) = self.drops.get(&reason) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to record drop reason {:?} which is not in the map. \
                 This indicates a bug in DropStats initialization.",
                reason
            );
        }
    }

    pub fn count(&self, reason: DropReason) -> usize {
        self.drops
            .get(&reason)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.drops.values().map(|c| c.load(Ordering::SeqCst)).sum()
    }

    /// Non-zero counters in declaration order.
    pub fn non_zero(&self) -> Vec<(DropReason, usize)> {
        DropReason::iter()
            .map(|reason| (reason, self.count(reason)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    /// Logs a one-line-per-reason summary when anything was dropped.
    pub fn log_summary(&self, subject: &str) {
        let total = self.total();
        if total == 0 {
            log::debug!("{subject}: no runs dropped");
            return;
        }
        log::info!("{subject}: {total} run(s) dropped");
        for (reason, count) in self.non_zero() {
            log::info!("   {reason}: {count}");
        }
    }
}

impl Default for DropStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_initialized_to_zero() {
        let stats = DropStats::new();
        for reason in DropReason::iter() {
            assert_eq!(stats.count(reason), 0);
        }
        assert_eq!(stats.total(), 0);
        assert!(stats.non_zero().is_empty());
    }

    #[test]
    fn test_record_and_totals() {
        let stats = DropStats::new();
        stats.record(DropReason::BelowMinimumLevel);
        stats.record(DropReason::BelowMinimumLevel);
        stats.record(DropReason::SummaryTooShort);

        assert_eq!(stats.count(DropReason::BelowMinimumLevel), 2);
        assert_eq!(stats.total(), 3);
        assert_eq!(
            stats.non_zero(),
            vec![
                (DropReason::BelowMinimumLevel, 2),
                (DropReason::SummaryTooShort, 1)
            ]
        );
    }

    #[tokio::test]
    async fn test_concurrent_records() {
        let stats = Arc::new(DropStats::new());
        let mut handles = Vec::new();
        for _ in 0..16 {
            let stats = Arc::clone(&stats);
            handles.push(tokio::spawn(async move {
                stats.record(DropReason::FightNotFound);
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(stats.count(DropReason::FightNotFound), 16);
    }
}
