use std::sync::Arc;

use model::base_types::OperationalLimits;

use crate::windows::WeatherWindowSet;

/// Window sets already computed in this scheduling session, keyed by their
/// operational limits. Lookup is tolerance-based (a linear scan, no exact
/// keys): limits within the configured absolute per-condition tolerance of a
/// cached entry reuse its windows. Owned by one optimizer instance; there is
/// no shared state across scheduling sessions.
pub struct WindowCache {
    entries: Vec<(OperationalLimits, Arc<WeatherWindowSet>)>,
    tolerance: f64,
}

// static functions:
impl WindowCache {
    pub fn new(tolerance: f64) -> WindowCache {
        WindowCache {
            entries: Vec::new(),
            tolerance,
        }
    }
}

// methods:
impl WindowCache {
    pub fn get(&self, limits: &OperationalLimits) -> Option<Arc<WeatherWindowSet>> {
        self.entries
            .iter()
            .find(|(cached, _)| cached.matches_within(limits, self.tolerance))
            .map(|(_, windows)| windows.clone())
    }

    pub fn insert(&mut self, limits: OperationalLimits, windows: Arc<WeatherWindowSet>) {
        self.entries.push((limits, windows));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_matches_within_the_tolerance() {
        let mut cache = WindowCache::new(0.1);
        let limits = OperationalLimits::new(1.5, 8.0, 15.0, 1.0);
        cache.insert(limits, Arc::new(WeatherWindowSet::default()));

        let close = OperationalLimits::new(1.55, 7.95, 15.05, 1.0);
        assert!(cache.get(&close).is_some());

        let off = OperationalLimits::new(1.5, 8.0, 15.0, 1.5);
        assert!(cache.get(&off).is_none());
        assert_eq!(cache.len(), 1);
    }
}
