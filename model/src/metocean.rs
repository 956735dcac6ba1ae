use time::{DateTime, Duration};

use crate::base_types::OperationalLimits;
use crate::diagnostics::{Diagnostics, Warning};
use crate::error::ModelError;

/// one row of the metocean table
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SeaStateRecord {
    pub year: u32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub hs: f64, // significant wave height [m]
    pub tp: f64, // peak wave period [s]
    pub ws: f64, // wind speed [m/s]
    pub cs: f64, // current speed [m/s]
}

impl SeaStateRecord {
    pub fn timestamp(&self) -> DateTime {
        DateTime::from_calendar(self.year, self.month, self.day, self.hour)
    }
}

/// A normalized multi-year sea-state time series: strictly increasing
/// timestamps, constant step, whole calendar years only, years consecutive.
/// Built once by `normalise` and read-only afterwards.
pub struct MetoceanSeries {
    records: Vec<SeaStateRecord>,
    step: Duration,
    years: Vec<u32>,
}

// static functions:
impl MetoceanSeries {
    /// Trim and extend raw records to a minimum window of complete years.
    ///
    /// Incomplete years are dropped with a warning (a year is complete iff it
    /// has a record at Jan 1, hour 0 and at Dec 31, hour 24 - step). The
    /// remaining years must be exactly consecutive. If fewer than
    /// `minimum_years` remain, the series is extended by whole-year repeats
    /// (re-labelled `year + k * n_years`) and then by a partial copy of the
    /// first years, until exactly `minimum_years` distinct years exist.
    pub fn normalise(
        records: Vec<SeaStateRecord>,
        minimum_years: usize,
        diagnostics: &mut Diagnostics,
    ) -> Result<MetoceanSeries, ModelError> {
        if records.len() < 2 {
            return Err(ModelError::EmptySeries);
        }

        for (row, pair) in records.windows(2).enumerate() {
            if pair[1].timestamp() <= pair[0].timestamp() {
                return Err(ModelError::NonMonotonicSeries { row: row + 1 });
            }
        }

        let step = median_step(&records);
        let step_minutes = step.in_min();
        if step_minutes == 0 || step_minutes % 60 != 0 || 24 % step.in_hours() != 0 {
            return Err(ModelError::IrregularStep { step_minutes });
        }
        let last_hour_of_day = 24 - step.in_hours() as u8;

        // keep only complete calendar years
        let mut kept: Vec<SeaStateRecord> = Vec::with_capacity(records.len());
        let mut years: Vec<u32> = Vec::new();
        for year in distinct_years(&records) {
            let of_year = records.iter().filter(|r| r.year == year);
            let has_first = of_year
                .clone()
                .any(|r| r.month == 1 && r.day == 1 && r.hour == 0);
            let has_last = of_year
                .clone()
                .any(|r| r.month == 12 && r.day == 31 && r.hour == last_hour_of_day);
            if has_first && has_last {
                kept.extend(of_year);
                years.push(year);
            } else {
                diagnostics.warn(Warning::IncompleteYearDropped { year });
            }
        }

        if years.is_empty() {
            return Err(ModelError::NoCompleteYears);
        }
        if years.windows(2).any(|pair| pair[1] != pair[0] + 1) {
            return Err(ModelError::InvalidMetoceanYears { years });
        }

        let n_years = years.len();
        if n_years < minimum_years {
            let originals = kept.clone();
            let full_blocks = minimum_years / n_years;
            for k in 1..full_blocks {
                kept.extend(originals.iter().map(|r| SeaStateRecord {
                    year: r.year + (k * n_years) as u32,
                    ..*r
                }));
            }
            let partial = minimum_years % n_years;
            let partial_years: Vec<u32> = years.iter().take(partial).copied().collect();
            kept.extend(
                originals
                    .iter()
                    .filter(|r| partial_years.contains(&r.year))
                    .map(|r| SeaStateRecord {
                        year: r.year + (full_blocks * n_years) as u32,
                        ..*r
                    }),
            );
            let first = years[0];
            years = (0..minimum_years).map(|k| first + k as u32).collect();
        }

        debug_assert!(years.len() == n_years.max(minimum_years));
        debug_assert!(years.windows(2).all(|pair| pair[1] == pair[0] + 1));

        Ok(MetoceanSeries {
            records: kept,
            step,
            years,
        })
    }
}

// methods:
impl MetoceanSeries {
    pub fn records(&self) -> &[SeaStateRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// the distinct years covered, in increasing order
    pub fn years(&self) -> &[u32] {
        &self.years
    }

    pub fn timestamp(&self, index: usize) -> DateTime {
        self.records[index].timestamp()
    }

    /// the maximum observed value per condition; substitutes the threshold of
    /// unconstrained conditions so they never deny access
    pub fn maxima(&self) -> OperationalLimits {
        let mut maxima = OperationalLimits::UNLIMITED;
        for record in &self.records {
            maxima.max_hs = maxima.max_hs.max(record.hs);
            maxima.max_tp = maxima.max_tp.max(record.tp);
            maxima.max_ws = maxima.max_ws.max(record.ws);
            maxima.max_cs = maxima.max_cs.max(record.cs);
        }
        maxima
    }
}

/// the median of all consecutive timestamp differences
fn median_step(records: &[SeaStateRecord]) -> Duration {
    let mut diffs: Vec<u32> = records
        .windows(2)
        .map(|pair| (pair[1].timestamp() - pair[0].timestamp()).in_min())
        .collect();
    diffs.sort_unstable();
    Duration::from_minutes(diffs[diffs.len() / 2])
}

fn distinct_years(records: &[SeaStateRecord]) -> Vec<u32> {
    let mut years: Vec<u32> = Vec::new();
    for record in records {
        if !years.contains(&record.year) {
            years.push(record.year);
        }
    }
    years.sort_unstable();
    years
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: u32, month: u8, day: u8, hour: u8) -> SeaStateRecord {
        SeaStateRecord {
            year,
            month,
            day,
            hour,
            hs: 1.0,
            tp: 8.0,
            ws: 10.0,
            cs: 0.5,
        }
    }

    /// a full hourly calendar year
    fn hourly_year(year: u32) -> Vec<SeaStateRecord> {
        let mut records = Vec::new();
        for month in 1..=12 {
            for day in 1..=time::days_in_month(year, month) {
                for hour in 0..24 {
                    records.push(record(year, month, day, hour));
                }
            }
        }
        records
    }

    #[test]
    fn single_year_is_repeated_to_the_requested_minimum() {
        let mut diagnostics = Diagnostics::new();
        let series = MetoceanSeries::normalise(hourly_year(2005), 3, &mut diagnostics).unwrap();
        assert_eq!(series.years(), &[2005, 2006, 2007]);
        assert_eq!(series.len(), 3 * 365 * 24);
        assert_eq!(series.step(), Duration::from_hours(1));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn two_years_extended_to_five() {
        let mut records = hourly_year(2001);
        records.extend(hourly_year(2002));
        let mut diagnostics = Diagnostics::new();
        let series = MetoceanSeries::normalise(records, 5, &mut diagnostics).unwrap();
        assert_eq!(series.years(), &[2001, 2002, 2003, 2004, 2005]);
        // 2003/2004 relabel 2001/2002, 2005 relabels 2001 again
        assert_eq!(series.len(), 5 * 365 * 24);
    }

    #[test]
    fn already_long_series_is_kept_as_is() {
        let mut records = hourly_year(2001);
        records.extend(hourly_year(2002));
        records.extend(hourly_year(2003));
        let mut diagnostics = Diagnostics::new();
        let series = MetoceanSeries::normalise(records, 2, &mut diagnostics).unwrap();
        assert_eq!(series.years(), &[2001, 2002, 2003]);
    }

    #[test]
    fn incomplete_year_is_dropped_with_warning() {
        let mut records = hourly_year(2001);
        let mut second = hourly_year(2002);
        second.pop(); // 2002 misses its last record
        records.extend(second);
        let mut diagnostics = Diagnostics::new();
        let series = MetoceanSeries::normalise(records, 1, &mut diagnostics).unwrap();
        assert_eq!(series.years(), &[2001]);
        assert!(diagnostics.contains(&Warning::IncompleteYearDropped { year: 2002 }));
    }

    #[test]
    fn non_consecutive_years_are_fatal() {
        let mut records = hourly_year(2000);
        records.extend(hourly_year(2002));
        let mut diagnostics = Diagnostics::new();
        let result = MetoceanSeries::normalise(records, 1, &mut diagnostics);
        assert_eq!(
            result.err(),
            Some(ModelError::InvalidMetoceanYears {
                years: vec![2000, 2002]
            })
        );
    }

    #[test]
    fn non_monotonic_series_is_fatal() {
        let records = vec![
            record(2001, 1, 1, 0),
            record(2001, 1, 1, 2),
            record(2001, 1, 1, 1),
        ];
        let mut diagnostics = Diagnostics::new();
        let result = MetoceanSeries::normalise(records, 1, &mut diagnostics);
        assert_eq!(result.err(), Some(ModelError::NonMonotonicSeries { row: 2 }));
    }

    #[test]
    fn three_hourly_step_is_inferred() {
        let mut records = Vec::new();
        for month in 1..=12 {
            for day in 1..=time::days_in_month(2001, month) {
                for hour in [0, 3, 6, 9, 12, 15, 18, 21] {
                    records.push(record(2001, month, day, hour));
                }
            }
        }
        let mut diagnostics = Diagnostics::new();
        let series = MetoceanSeries::normalise(records, 1, &mut diagnostics).unwrap();
        assert_eq!(series.step(), Duration::from_hours(3));
        assert_eq!(series.years(), &[2001]);
    }

    #[test]
    fn maxima_report_the_observed_extremes() {
        let mut records = hourly_year(2001);
        records[100].hs = 4.5;
        records[200].ws = 25.0;
        let mut diagnostics = Diagnostics::new();
        let series = MetoceanSeries::normalise(records, 1, &mut diagnostics).unwrap();
        let maxima = series.maxima();
        assert_eq!(maxima.max_hs, 4.5);
        assert_eq!(maxima.max_ws, 25.0);
        assert_eq!(maxima.max_tp, 8.0);
    }
}
