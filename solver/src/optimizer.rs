use std::sync::Arc;

use model::base_types::{JourneyIdx, OperationalLimits};
use model::config::Config;
use model::diagnostics::{Diagnostics, Warning};
use model::metocean::MetoceanSeries;
use time::{is_leap_year, DateTime, Duration};

use crate::cache::WindowCache;
use crate::error::SchedulingError;
use crate::windows::{extract_windows, WeatherWindow, WeatherWindowSet};

/// the optimized start of one journey: hours of delay after the desired
/// start date, and hours spent waiting between windows (None when a single
/// window covers the whole operation)
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct JourneyTiming {
    pub start_delay: Duration,
    pub waiting_time: Option<Duration>,
}

/// Finds the minimum start delay and/or waiting time for a required
/// continuous sea time.
///
/// A single uninterrupted window is operationally preferable (no
/// re-mobilization risk), so the whole-window strategy is attempted first.
/// The combined-window strategy is the fallback that tolerates safe-harbor
/// gaps between windows; with `optimise_delay` it replaces the whole-window
/// strategy altogether and picks the first feasible start.
pub struct WaitingOptimizer {
    series: Arc<MetoceanSeries>,
    cache: WindowCache,
    optimise_delay: bool,
    maximum_start_delay: Option<Duration>,
    short_window_threshold: Duration,
    long_wait_threshold: Duration,
}

// static functions:
impl WaitingOptimizer {
    pub fn new(series: Arc<MetoceanSeries>, config: &Config) -> WaitingOptimizer {
        WaitingOptimizer {
            series,
            cache: WindowCache::new(config.weather.olc_match_tolerance),
            optimise_delay: config.scheduling.optimise_delay,
            maximum_start_delay: config.scheduling.maximum_start_delay,
            short_window_threshold: config.weather.short_window_threshold,
            long_wait_threshold: config.weather.long_wait_threshold,
        }
    }
}

// methods:
impl WaitingOptimizer {
    /// the windows for the given limits, computed once per scheduling
    /// session and afterwards served from the cache
    pub fn windows_for(
        &mut self,
        limits: &OperationalLimits,
        diagnostics: &mut Diagnostics,
    ) -> Arc<WeatherWindowSet> {
        if let Some(windows) = self.cache.get(limits) {
            return windows;
        }
        let windows = Arc::new(extract_windows(
            limits,
            &self.series,
            self.short_window_threshold,
            diagnostics,
        ));
        self.cache.insert(*limits, windows.clone());
        windows
    }

    /// number of distinct window sets computed so far
    pub fn cached_window_sets(&self) -> usize {
        self.cache.len()
    }

    /// `Ok(None)` means no feasible start exists within the configured
    /// maximum start delay; an empty window set always yields `Ok(None)`.
    pub fn schedule_journey(
        &mut self,
        journey: JourneyIdx,
        required_sea_time: Duration,
        desired_start: DateTime,
        limits: &OperationalLimits,
        diagnostics: &mut Diagnostics,
    ) -> Result<Option<JourneyTiming>, SchedulingError> {
        let windows = self.windows_for(limits, diagnostics);
        if windows.is_empty() {
            return Ok(None);
        }

        let mut timing = None;
        if !self.optimise_delay {
            timing = self
                .whole_window_delay(&windows, required_sea_time, desired_start)?
                .map(|start_delay| JourneyTiming {
                    start_delay,
                    waiting_time: None,
                });
        }
        if timing.is_none() {
            timing = self.combined_window_timing(&windows, required_sea_time, desired_start)?;
        }

        if let Some(t) = &timing {
            if t.start_delay > self.long_wait_threshold {
                diagnostics.warn(Warning::LongStartDelay {
                    journey,
                    delay: t.start_delay,
                });
            }
            if let Some(waiting) = t.waiting_time {
                if waiting > self.long_wait_threshold {
                    diagnostics.warn(Warning::LongWaitingTime { journey, waiting });
                }
            }
        }

        Ok(timing)
    }

    /// Whole-window strategy: per metocean year, the earliest window starting
    /// on/after the start date aligned into that year whose duration alone
    /// covers the required sea time. The per-year delays are averaged.
    fn whole_window_delay(
        &self,
        windows: &WeatherWindowSet,
        required_sea_time: Duration,
        desired_start: DateTime,
    ) -> Result<Option<Duration>, SchedulingError> {
        let mut delays: Vec<Duration> = Vec::new();
        for &year in self.series.years() {
            let aligned = align_into_year(desired_start, year);
            let candidate = windows
                .iter()
                .find(|w| w.start() >= aligned && w.duration() >= required_sea_time);
            if let Some(window) = candidate {
                delays.push(delay_of(window, aligned)?);
            }
        }
        if delays.is_empty() {
            return Ok(None);
        }

        let total_minutes: u64 = delays.iter().map(|d| d.in_min() as u64).sum();
        let count = delays.len() as u64;
        let average = Duration::from_minutes(((total_minutes + count / 2) / count) as u32);

        if let Some(cap) = self.maximum_start_delay {
            if average > cap {
                return Ok(None);
            }
        }
        Ok(Some(average))
    }

    /// Combined-window strategy: accumulate window durations and the gaps
    /// between them from each candidate starting window until the required
    /// sea time is covered. Candidates are explored chronologically, so their
    /// delays are strictly increasing; the best candidate is the one with the
    /// minimum waiting time, or the first feasible one under `optimise_delay`.
    fn combined_window_timing(
        &self,
        windows: &WeatherWindowSet,
        required_sea_time: Duration,
        desired_start: DateTime,
    ) -> Result<Option<JourneyTiming>, SchedulingError> {
        let first_year = self.series.years()[0];
        let aligned = align_into_year(desired_start, first_year);
        let candidates: Vec<&WeatherWindow> =
            windows.iter().filter(|w| w.start() >= aligned).collect();

        let mut best: Option<JourneyTiming> = None;
        for start_index in 0..candidates.len() {
            let start_delay = delay_of(candidates[start_index], aligned)?;
            if let Some(cap) = self.maximum_start_delay {
                if start_delay > cap {
                    break; // delays only grow from here
                }
            }

            let mut cumulative_duration = Duration::zero();
            let mut waiting_time = Duration::zero();
            let mut covered = false;
            for index in start_index..candidates.len() {
                if index > start_index {
                    // safe-harbor gap between the previous window and this one
                    waiting_time =
                        waiting_time + (candidates[index].start() - candidates[index - 1].end());
                }
                cumulative_duration = cumulative_duration + candidates[index].duration();
                if cumulative_duration >= required_sea_time {
                    covered = true;
                    break;
                }
            }
            if !covered {
                // the remaining windows are a subset of this chain, so no
                // later candidate can cover the required time either
                break;
            }

            let timing = JourneyTiming {
                start_delay,
                waiting_time: Some(waiting_time),
            };
            if self.optimise_delay {
                return Ok(Some(timing)); // first feasible start wins
            }
            let improves = match &best {
                None => true,
                Some(b) => Some(waiting_time) < b.waiting_time,
            };
            if improves {
                best = Some(timing);
            }
        }
        Ok(best)
    }
}

/// move the requested start date into the given metocean year; a Feb 29
/// start snaps to Mar 1 when the target year has no leap day
fn align_into_year(start: DateTime, year: u32) -> DateTime {
    let (month, day) = if start.month() == 2 && start.day() == 29 && !is_leap_year(year) {
        (3, 1)
    } else {
        (start.month(), start.day())
    };
    DateTime::from_calendar(year, month, day, start.hour())
        + Duration::from_minutes(start.minute() as u32)
}

fn delay_of(window: &WeatherWindow, aligned_start: DateTime) -> Result<Duration, SchedulingError> {
    if window.start() < aligned_start {
        return Err(SchedulingError::NegativeStartDelay {
            window_start: window.start(),
            requested_start: aligned_start,
        });
    }
    Ok(window.start() - aligned_start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use model::config::Config;
    use model::metocean::SeaStateRecord;

    /// Four years where every odd month opens a 12h window starting on day 1,
    /// 14:00, and every even month a 24h window starting on day 1, 06:00.
    /// The first year is a non-leap year.
    fn four_year_series() -> Arc<MetoceanSeries> {
        let mut records = Vec::new();
        for year in 2001..=2004 {
            for month in 1..=12 {
                let (open_from, open_hours) = if month % 2 == 1 { (14, 12) } else { (6, 24) };
                for day in 1..=time::days_in_month(year, month) {
                    for hour in 0..24u8 {
                        let since_month_start = (day as u32 - 1) * 24 + hour as u32;
                        let open = since_month_start >= open_from
                            && since_month_start <= open_from + open_hours;
                        let value = if open { 0.1 } else { 1.0 };
                        records.push(SeaStateRecord {
                            year,
                            month,
                            day,
                            hour,
                            hs: value,
                            tp: value,
                            ws: value,
                            cs: value,
                        });
                    }
                }
            }
        }
        let mut diagnostics = Diagnostics::new();
        Arc::new(MetoceanSeries::normalise(records, 4, &mut diagnostics).unwrap())
    }

    fn limits() -> OperationalLimits {
        OperationalLimits::new(0.5, 0.5, 0.5, 0.5)
    }

    fn start() -> DateTime {
        DateTime::new("2000-01-01T00:00")
    }

    #[test]
    fn whole_window_strategy_picks_the_first_sufficient_window() {
        let mut optimizer = WaitingOptimizer::new(four_year_series(), &Config::default());
        let mut diagnostics = Diagnostics::new();
        let timing = optimizer
            .schedule_journey(
                JourneyIdx(0),
                Duration::from_hours(20),
                start(),
                &limits(),
                &mut diagnostics,
            )
            .unwrap()
            .unwrap();

        // the January window is too short, the February window (day 1,
        // 06:00) is the first 24h one: 31 days and 6 hours of delay
        assert_eq!(timing.start_delay, Duration::from_hours(750));
        assert_eq!(timing.waiting_time, None);
        // 750h exceed the 30-day sanity threshold
        assert!(diagnostics.contains(&Warning::LongStartDelay {
            journey: JourneyIdx(0),
            delay: Duration::from_hours(750),
        }));
    }

    #[test]
    fn combined_window_strategy_bridges_gaps_with_minimum_waiting() {
        let mut optimizer = WaitingOptimizer::new(four_year_series(), &Config::default());
        let mut diagnostics = Diagnostics::new();
        let timing = optimizer
            .schedule_journey(
                JourneyIdx(0),
                Duration::from_hours(36),
                start(),
                &limits(),
                &mut diagnostics,
            )
            .unwrap()
            .unwrap();

        // no single window covers 36h; starting at the February window
        // (delay 750h) and bridging to the March window gives the minimum
        // waiting time of 656h
        assert_eq!(timing.start_delay, Duration::from_hours(750));
        assert_eq!(timing.waiting_time, Some(Duration::from_hours(656)));
    }

    #[test]
    fn optimise_delay_takes_the_first_feasible_start() {
        let mut config = Config::default();
        config.scheduling.optimise_delay = true;
        let mut optimizer = WaitingOptimizer::new(four_year_series(), &config);
        let mut diagnostics = Diagnostics::new();
        let timing = optimizer
            .schedule_journey(
                JourneyIdx(0),
                Duration::from_hours(36),
                start(),
                &limits(),
                &mut diagnostics,
            )
            .unwrap()
            .unwrap();

        // the January window starts 14h in; bridging its 724h gap to the
        // February window is accepted because only the delay matters
        assert_eq!(timing.start_delay, Duration::from_hours(14));
        assert_eq!(timing.waiting_time, Some(Duration::from_hours(724)));
    }

    #[test]
    fn maximum_start_delay_discards_the_whole_window_result() {
        let mut config = Config::default();
        config.scheduling.maximum_start_delay = Some(Duration::from_hours(100));
        let mut optimizer = WaitingOptimizer::new(four_year_series(), &config);
        let mut diagnostics = Diagnostics::new();
        let timing = optimizer
            .schedule_journey(
                JourneyIdx(0),
                Duration::from_hours(20),
                start(),
                &limits(),
                &mut diagnostics,
            )
            .unwrap()
            .unwrap();

        // the 750h whole-window delay exceeds the cap; the only candidate
        // within the cap is the January window, which needs the February
        // window to accumulate 20h
        assert_eq!(timing.start_delay, Duration::from_hours(14));
        assert_eq!(timing.waiting_time, Some(Duration::from_hours(724)));
    }

    #[test]
    fn no_feasible_combination_yields_none() {
        let mut optimizer = WaitingOptimizer::new(four_year_series(), &Config::default());
        let mut diagnostics = Diagnostics::new();
        let timing = optimizer
            .schedule_journey(
                JourneyIdx(0),
                Duration::from_hours(100000),
                start(),
                &limits(),
                &mut diagnostics,
            )
            .unwrap();
        assert_eq!(timing, None);
    }

    #[test]
    fn blocked_series_yields_an_empty_window_set() {
        let mut optimizer = WaitingOptimizer::new(four_year_series(), &Config::default());
        let mut diagnostics = Diagnostics::new();
        // nothing is ever below 0.05
        let blocked = OperationalLimits::new(0.05, 0.05, 0.05, 0.05);
        let windows = optimizer.windows_for(&blocked, &mut diagnostics);
        assert!(windows.is_empty());
        let timing = optimizer
            .schedule_journey(
                JourneyIdx(0),
                Duration::from_hours(1),
                start(),
                &blocked,
                &mut diagnostics,
            )
            .unwrap();
        assert_eq!(timing, None);
    }

    #[test]
    fn repeated_calls_hit_the_cache_and_are_idempotent() {
        let mut optimizer = WaitingOptimizer::new(four_year_series(), &Config::default());
        let mut diagnostics = Diagnostics::new();
        let first = optimizer
            .schedule_journey(
                JourneyIdx(0),
                Duration::from_hours(20),
                start(),
                &limits(),
                &mut diagnostics,
            )
            .unwrap();
        assert_eq!(optimizer.cached_window_sets(), 1);

        let second = optimizer
            .schedule_journey(
                JourneyIdx(0),
                Duration::from_hours(20),
                start(),
                &limits(),
                &mut diagnostics,
            )
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(optimizer.cached_window_sets(), 1);

        // limits within the match tolerance reuse the cached windows
        let close = OperationalLimits::new(0.55, 0.45, 0.5, 0.5);
        let third = optimizer
            .schedule_journey(
                JourneyIdx(0),
                Duration::from_hours(20),
                start(),
                &close,
                &mut diagnostics,
            )
            .unwrap();
        assert_eq!(first, third);
        assert_eq!(optimizer.cached_window_sets(), 1);
    }

    #[test]
    fn candidate_delays_increase_monotonically() {
        let mut optimizer = WaitingOptimizer::new(four_year_series(), &Config::default());
        let mut diagnostics = Diagnostics::new();
        let windows = optimizer.windows_for(&limits(), &mut diagnostics);
        let aligned = align_into_year(start(), 2001);
        let delays: Vec<Duration> = windows
            .iter()
            .filter(|w| w.start() >= aligned)
            .map(|w| w.start() - aligned)
            .collect();
        assert!(!delays.is_empty());
        assert!(delays.iter().tuple_windows().all(|(a, b)| a < b));
    }

    #[test]
    fn feb_29_start_snaps_to_mar_1_in_non_leap_years() {
        let start = DateTime::new("2004-02-29T08:00");
        assert_eq!(
            align_into_year(start, 2001),
            DateTime::new("2001-03-01T08:00")
        );
        assert_eq!(
            align_into_year(start, 2004),
            DateTime::new("2004-02-29T08:00")
        );
    }
}
