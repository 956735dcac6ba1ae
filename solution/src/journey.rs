use std::fmt;

use itertools::Itertools;

use model::base_types::{ElementIdx, JourneyIdx, OperationalLimits, SquareMeter, Tonne};
use time::Duration;

/// one resolved logistic task of a journey, with the operational limits under
/// which it may be executed (None = unconstrained)
#[derive(Clone, PartialEq, Debug)]
pub struct ScheduledTask {
    name: String,
    duration: Duration,
    limits: Option<OperationalLimits>,
}

impl ScheduledTask {
    pub fn new(name: String, duration: Duration, limits: Option<OperationalLimits>) -> Self {
        ScheduledTask {
            name,
            duration,
            limits,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn limits(&self) -> Option<&OperationalLimits> {
        self.limits.as_ref()
    }
}

/// One vessel round trip carrying a contiguous batch of elements from port to
/// site and back. Created by the batcher, filled in by the duration
/// assembler, finally timed by the waiting-time optimizer. Journeys are never
/// destroyed within a scheduling run; they are kept for audit.
#[derive(Clone, PartialEq, Debug)]
pub struct Journey {
    idx: JourneyIdx,
    elements: Vec<ElementIdx>, // assignment order preserved
    loaded_area: SquareMeter,
    loaded_mass: Tonne,

    preparation: Vec<ScheduledTask>,
    sea: Vec<ScheduledTask>,
    demobilisation: Vec<ScheduledTask>,

    start_delay: Option<Duration>,
    waiting_time: Option<Duration>,
}

// static functions:
impl Journey {
    pub fn new(
        idx: JourneyIdx,
        elements: Vec<ElementIdx>,
        loaded_area: SquareMeter,
        loaded_mass: Tonne,
    ) -> Journey {
        assert!(!elements.is_empty(), "A journey carries at least one element.");
        Journey {
            idx,
            elements,
            loaded_area,
            loaded_mass,
            preparation: Vec::new(),
            sea: Vec::new(),
            demobilisation: Vec::new(),
            start_delay: None,
            waiting_time: None,
        }
    }
}

// basic public methods
impl Journey {
    pub fn idx(&self) -> JourneyIdx {
        self.idx
    }

    pub fn elements(&self) -> &[ElementIdx] {
        &self.elements
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn loaded_area(&self) -> SquareMeter {
        self.loaded_area
    }

    pub fn loaded_mass(&self) -> Tonne {
        self.loaded_mass
    }

    pub fn preparation_tasks(&self) -> &[ScheduledTask] {
        &self.preparation
    }

    pub fn sea_tasks(&self) -> &[ScheduledTask] {
        &self.sea
    }

    pub fn demobilisation_tasks(&self) -> &[ScheduledTask] {
        &self.demobilisation
    }

    pub fn preparation_duration(&self) -> Duration {
        self.preparation.iter().map(|t| t.duration()).sum()
    }

    /// the continuous offshore time the journey needs, i.e. the sea time the
    /// weather must allow for
    pub fn required_sea_time(&self) -> Duration {
        self.sea.iter().map(|t| t.duration()).sum()
    }

    pub fn demobilisation_duration(&self) -> Duration {
        self.demobilisation.iter().map(|t| t.duration()).sum()
    }

    pub fn total_duration(&self) -> Duration {
        self.preparation_duration() + self.required_sea_time() + self.demobilisation_duration()
    }

    /// reduce the per-task limits of the sea work to one combined limit
    /// (per condition, the minimum of all strictly positive thresholds)
    pub fn combined_sea_limits(&self) -> OperationalLimits {
        OperationalLimits::most_restrictive(self.sea.iter().filter_map(|t| t.limits()))
    }

    pub fn start_delay(&self) -> Option<Duration> {
        self.start_delay
    }

    pub fn waiting_time(&self) -> Option<Duration> {
        self.waiting_time
    }
}

// modification methods (used while the schedule is being built)
impl Journey {
    pub fn add_preparation_task(&mut self, task: ScheduledTask) {
        self.preparation.push(task);
    }

    pub fn add_sea_task(&mut self, task: ScheduledTask) {
        self.sea.push(task);
    }

    pub fn add_demobilisation_task(&mut self, task: ScheduledTask) {
        self.demobilisation.push(task);
    }

    pub fn set_timing(&mut self, start_delay: Option<Duration>, waiting_time: Option<Duration>) {
        self.start_delay = start_delay;
        self.waiting_time = waiting_time;
    }
}

impl fmt::Display for Journey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} [{}] prep: {}, sea: {}, demob: {}",
            self.idx,
            self.elements.iter().map(|e| e.to_string()).join(", "),
            self.preparation_duration(),
            self.required_sea_time(),
            self.demobilisation_duration(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn journey_with_tasks() -> Journey {
        let mut journey = Journey::new(
            JourneyIdx(0),
            vec![ElementIdx(0), ElementIdx(1)],
            20.0,
            10.0,
        );
        journey.add_preparation_task(ScheduledTask::new(
            String::from("load-out"),
            Duration::from_hours(12),
            None,
        ));
        journey.add_sea_task(ScheduledTask::new(
            String::from("transit"),
            Duration::from_hours(3),
            Some(OperationalLimits::new(2.5, 0.0, 15.0, 0.0)),
        ));
        journey.add_sea_task(ScheduledTask::new(
            String::from("lowering"),
            Duration::from_hours(8),
            Some(OperationalLimits::new(1.5, 8.0, 0.0, 0.75)),
        ));
        journey.add_demobilisation_task(ScheduledTask::new(
            String::from("demob"),
            Duration::from_hours(24),
            None,
        ));
        journey
    }

    #[test]
    fn durations_accumulate_per_phase() {
        let journey = journey_with_tasks();
        assert_eq!(journey.preparation_duration(), Duration::from_hours(12));
        assert_eq!(journey.required_sea_time(), Duration::from_hours(11));
        assert_eq!(journey.demobilisation_duration(), Duration::from_hours(24));
        assert_eq!(journey.total_duration(), Duration::from_hours(47));
    }

    #[test]
    fn combined_limits_take_the_positive_minimum_per_condition() {
        let journey = journey_with_tasks();
        let combined = journey.combined_sea_limits();
        assert_eq!(combined, OperationalLimits::new(1.5, 8.0, 15.0, 0.75));
    }

    #[test]
    fn timing_is_unset_until_the_optimizer_ran() {
        let mut journey = journey_with_tasks();
        assert_eq!(journey.start_delay(), None);
        assert_eq!(journey.waiting_time(), None);
        journey.set_timing(Some(Duration::from_hours(750)), None);
        assert_eq!(journey.start_delay(), Some(Duration::from_hours(750)));
    }
}
