use model::base_types::{Meter, OperationalLimits, Position};
use model::diagnostics::{Diagnostics, Warning};
use model::elements::Elements;
use model::operations::{
    DurationFunction, DurationRule, DurationSource, Operation, OperationPhase, OperationPlan,
};
use model::vessels::VesselCombination;
use solution::{Journey, ScheduledTask};
use time::Duration;

/// Resolve the duration of every operation of the plan for one journey and
/// record the resolved tasks (with their operational limits) on the journey.
///
/// Preparation happens onshore before departure, sea work offshore, and
/// demobilisation at the end of the phase. Operations without a supported
/// duration mode are skipped with a warning.
pub fn assemble_journey_durations(
    journey: &mut Journey,
    plan: &OperationPlan,
    combination: &VesselCombination,
    elements: &Elements,
    entry_point: &Position,
    first_journey: bool,
    diagnostics: &mut Diagnostics,
) {
    for operation in &plan.preparation {
        if let Some(task) = resolve(
            operation,
            journey,
            combination,
            elements,
            entry_point,
            first_journey,
            diagnostics,
        ) {
            journey.add_preparation_task(task);
        }
    }
    for operation in &plan.sea {
        if let Some(task) = resolve(
            operation,
            journey,
            combination,
            elements,
            entry_point,
            first_journey,
            diagnostics,
        ) {
            journey.add_sea_task(task);
        }
    }
    for operation in &plan.demobilisation {
        if let Some(task) = resolve(
            operation,
            journey,
            combination,
            elements,
            entry_point,
            first_journey,
            diagnostics,
        ) {
            journey.add_demobilisation_task(task);
        }
    }
}

fn resolve(
    operation: &Operation,
    journey: &Journey,
    combination: &VesselCombination,
    elements: &Elements,
    entry_point: &Position,
    first_journey: bool,
    diagnostics: &mut Diagnostics,
) -> Option<ScheduledTask> {
    let duration = match operation.rule() {
        DurationRule::Fixed(duration) => *duration,
        DurationRule::FixedPerElement(duration) => {
            *duration * journey.element_count() as u32
        }
        DurationRule::Function(DurationFunction::Transit) => {
            transit_duration(journey, elements, entry_point, combination)
        }
        DurationRule::External(DurationSource::Mobilisation) => {
            // later journeys of the phase reuse the already mobilised fleet
            if !first_journey {
                return None;
            }
            for vessel in combination.vessels() {
                if vessel.mobilisation_time().is_none() {
                    diagnostics.warn(Warning::MissingMobilisationTime {
                        vessel: vessel.name().to_string(),
                    });
                }
            }
            combination.max_mobilisation_time()
        }
        DurationRule::Unsupported(name) => {
            diagnostics.warn(Warning::UnsupportedOperation { name: name.clone() });
            return None;
        }
    };

    let limits = task_limits(operation, combination);
    Some(ScheduledTask::new(
        operation.name().to_string(),
        duration,
        limits,
    ))
}

/// round-trip transit time: entry point to the first element, element to
/// element in installation order, last element back to the entry point, at
/// the slowest vessel's transit speed
fn transit_duration(
    journey: &Journey,
    elements: &Elements,
    entry_point: &Position,
    combination: &VesselCombination,
) -> Duration {
    let positions: Vec<&Position> = journey
        .elements()
        .iter()
        .filter_map(|idx| elements.get(*idx))
        .map(|e| e.position())
        .collect();

    let mut distance: Meter = 0.0;
    let mut previous = entry_point;
    for position in positions {
        distance += previous.distance_to(position);
        previous = position;
    }
    distance += previous.distance_to(entry_point);

    let speed = combination.slowest_transit_speed();
    Duration::from_hours_f64(distance / speed / 3600.0)
}

fn task_limits(
    operation: &Operation,
    combination: &VesselCombination,
) -> Option<OperationalLimits> {
    // per-task limits override the fleet's ambient transit limits
    if let Some(limits) = operation.limits() {
        return Some(*limits);
    }
    match operation.rule() {
        DurationRule::Function(DurationFunction::Transit) => Some(combination.transit_limits()),
        _ => None,
    }
}
