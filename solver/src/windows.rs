use model::base_types::limits::{is_limiting, SEA_CONDITIONS};
use model::base_types::{OperationalLimits, SeaCondition};
use model::diagnostics::{Diagnostics, Warning};
use model::metocean::{MetoceanSeries, SeaStateRecord};
use time::{DateTime, Duration};

/// a maximal contiguous interval in which all four conditions are satisfied
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct WeatherWindow {
    start: DateTime,
    duration: Duration,
}

impl WeatherWindow {
    pub fn new(start: DateTime, duration: Duration) -> WeatherWindow {
        WeatherWindow { start, duration }
    }

    pub fn start(&self) -> DateTime {
        self.start
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn end(&self) -> DateTime {
        self.start + self.duration
    }
}

/// all weather windows of one operational-limit combination, in
/// chronological order
#[derive(Clone, PartialEq, Debug, Default)]
pub struct WeatherWindowSet {
    windows: Vec<WeatherWindow>,
}

impl WeatherWindowSet {
    pub fn new(windows: Vec<WeatherWindow>) -> WeatherWindowSet {
        WeatherWindowSet { windows }
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WeatherWindow> + '_ {
        self.windows.iter()
    }
}

/// Convert the operational limits and the normalized metocean series into
/// weather windows.
///
/// Per condition an observation grants access iff it lies strictly below the
/// threshold. An unconstrained condition (threshold zero/absent) grants
/// access everywhere, its effective threshold being the maximum observed
/// value. A condition that never grants access makes any window impossible,
/// so extraction stops early with an empty set and the remaining conditions
/// are not evaluated.
pub fn extract_windows(
    limits: &OperationalLimits,
    series: &MetoceanSeries,
    short_window_threshold: Duration,
    diagnostics: &mut Diagnostics,
) -> WeatherWindowSet {
    let mut combined = vec![true; series.len()];

    for condition in SEA_CONDITIONS {
        let threshold = limits.threshold(condition);
        if !is_limiting(threshold) {
            continue; // unconstrained, grants access everywhere
        }
        let mut any_access = false;
        for (i, record) in series.records().iter().enumerate() {
            let accessible = observation(record, condition) < threshold;
            any_access |= accessible;
            combined[i] &= accessible;
        }
        if !any_access {
            return WeatherWindowSet::default();
        }
    }

    let step = series.step();
    let mut windows = Vec::new();
    let mut run_start: Option<usize> = None;
    for i in 0..=combined.len() {
        let accessible = i < combined.len() && combined[i];
        match (run_start, accessible) {
            (None, true) => run_start = Some(i),
            (Some(start), false) => {
                let run_length = i - start;
                // a single accessible step spans no time at all
                if run_length > 1 {
                    let duration = step * (run_length - 1) as u32;
                    let window = WeatherWindow::new(series.timestamp(start), duration);
                    if duration < short_window_threshold {
                        diagnostics.warn(Warning::ShortWeatherWindow {
                            start: window.start(),
                            duration,
                        });
                    }
                    windows.push(window);
                }
                run_start = None;
            }
            _ => {}
        }
    }

    WeatherWindowSet::new(windows)
}

fn observation(record: &SeaStateRecord, condition: SeaCondition) -> f64 {
    match condition {
        SeaCondition::WaveHeight => record.hs,
        SeaCondition::PeakPeriod => record.tp,
        SeaCondition::WindSpeed => record.ws,
        SeaCondition::CurrentSpeed => record.cs,
    }
}
