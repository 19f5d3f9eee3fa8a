use std::time::{Duration, Instant};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::models::FluxSeries;

struct CacheEntry {
    energy_band: String,
    series: FluxSeries,
    stored_at: Instant,
}

/// Time-bounded memoization of the last live series.
///
/// There is exactly one energy band, so a single slot keyed by that band is
/// enough. Entries expire on their own once `ttl` has elapsed. Only live
/// series are stored: a failed fetch is retried on the next refresh.
pub struct FluxCache {
    ttl: Duration,
    entry: Option<CacheEntry>,
}

impl FluxCache {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entry: None }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn get(&self, energy_band: &str, now: Instant) -> Option<&FluxSeries> {
        let entry = self.entry.as_ref()?;
        if entry.energy_band != energy_band {
            return None;
        }
        let age = now.saturating_duration_since(entry.stored_at);
        if age >= self.ttl {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_cache_events {
                log::info!("Flux cache expired after {:?}", age);
            }
            return None;
        }
        Some(&entry.series)
    }

    pub fn store(&mut self, series: FluxSeries, now: Instant) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_cache_events {
            log::info!(
                "Flux cache stored {} samples for '{}'",
                series.len(),
                series.energy_band()
            );
        }
        self.entry = Some(CacheEntry {
            energy_band: series.energy_band().to_string(),
            series,
            stored_at: now,
        });
    }

    /// Age of the cached series, if it is still valid.
    pub fn age(&self, now: Instant) -> Option<Duration> {
        let entry = self.entry.as_ref()?;
        let age = now.saturating_duration_since(entry.stored_at);
        (age < self.ttl).then_some(age)
    }
}

impl Default for FluxCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(crate::config::FEED.cache.ttl_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FluxSample;
    use chrono::Utc;

    fn series(band: &str) -> FluxSeries {
        let sample = FluxSample {
            timestamp: Utc::now(),
            energy_band: band.to_string(),
            flux: 1.0,
        };
        FluxSeries::new(band, vec![sample]).unwrap()
    }

    #[test]
    fn hit_within_window_miss_after_expiry() {
        let start = Instant::now();
        let mut cache = FluxCache::new(Duration::from_secs(600));
        assert!(cache.get(">=10 MeV", start).is_none());

        cache.store(series(">=10 MeV"), start);
        assert!(cache.get(">=10 MeV", start + Duration::from_secs(599)).is_some());
        assert!(cache.get(">=10 MeV", start + Duration::from_secs(600)).is_none());
        assert_eq!(cache.age(start + Duration::from_secs(30)), Some(Duration::from_secs(30)));
        assert_eq!(cache.age(start + Duration::from_secs(601)), None);
    }

    #[test]
    fn keyed_by_energy_band() {
        let start = Instant::now();
        let mut cache = FluxCache::default();
        cache.store(series(">=10 MeV"), start);
        assert!(cache.get(">=50 MeV", start).is_none());
    }

    #[test]
    fn store_replaces_previous_entry() {
        let start = Instant::now();
        let mut cache = FluxCache::new(Duration::from_secs(10));
        cache.store(series(">=10 MeV"), start);
        let later = start + Duration::from_secs(9);
        cache.store(series(">=10 MeV"), later);
        assert!(cache.get(">=10 MeV", later + Duration::from_secs(5)).is_some());
    }
}
