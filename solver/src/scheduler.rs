use std::sync::Arc;

use model::base_types::Position;
use model::config::Config;
use model::diagnostics::Diagnostics;
use model::elements::Elements;
use model::metocean::{MetoceanSeries, SeaStateRecord};
use model::operations::OperationPlan;
use model::vessels::VesselCombination;
use solution::{Schedule, ScheduleStatus};
use time::DateTime;

use crate::assembler::assemble_journey_durations;
use crate::batching::batch_elements;
use crate::error::SchedulingError;
use crate::optimizer::WaitingOptimizer;

/// Schedule one logistic phase: normalize the metocean series, batch the
/// elements into journeys, resolve every journey's operation durations and
/// find each journey's feasible start.
///
/// The returned status is `NoWeatherWindows` as soon as one journey's
/// combined operational limits admit no weather window at all; journeys are
/// still assembled in that case so the caller can audit them. Fatal
/// configuration errors propagate as `Err` and must not be caught here.
pub fn schedule_phase(
    elements: &Elements,
    combination: &VesselCombination,
    plan: &OperationPlan,
    entry_point: &Position,
    metocean_records: Vec<SeaStateRecord>,
    desired_start: DateTime,
    config: &Config,
) -> Result<(Schedule, Diagnostics), SchedulingError> {
    let mut diagnostics = Diagnostics::new();

    let series = MetoceanSeries::normalise(
        metocean_records,
        config.scheduling.minimum_metocean_years,
        &mut diagnostics,
    )?;
    let mut optimizer = WaitingOptimizer::new(Arc::new(series), config);

    let mut journeys = batch_elements(elements, combination.deck_capacity())?;
    let mut status = ScheduleStatus::WeatherWindowsFound;

    for (i, journey) in journeys.iter_mut().enumerate() {
        assemble_journey_durations(
            journey,
            plan,
            combination,
            elements,
            entry_point,
            i == 0,
            &mut diagnostics,
        );

        let limits = journey.combined_sea_limits();
        let windows = optimizer.windows_for(&limits, &mut diagnostics);
        if windows.is_empty() {
            status = ScheduleStatus::NoWeatherWindows;
            continue;
        }

        let timing = optimizer.schedule_journey(
            journey.idx(),
            journey.required_sea_time(),
            desired_start,
            &limits,
            &mut diagnostics,
        )?;
        match timing {
            Some(t) => journey.set_timing(Some(t.start_delay), t.waiting_time),
            None => journey.set_timing(None, None),
        }
    }

    Ok((Schedule::new(journeys, status), diagnostics))
}
