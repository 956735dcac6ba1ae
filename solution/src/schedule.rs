use std::fmt;

use im::Vector;

use model::base_types::{ElementIdx, JourneyIdx};

use crate::journey::Journey;

/// the only two exit codes the scheduling core returns
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ScheduleStatus {
    WeatherWindowsFound,
    NoWeatherWindows,
}

impl fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // sentinel strings consumed by the downstream cost/reporting modules
        match self {
            ScheduleStatus::WeatherWindowsFound => write!(f, "WeatherWindowsFound"),
            ScheduleStatus::NoWeatherWindows => write!(f, "NoWWindows"),
        }
    }
}

/// The scheduling solution of one logistic phase: all journeys with their
/// realized durations and timing. Cheap to clone, so callers can keep
/// several candidate solutions around while comparing strategies.
#[derive(Clone)]
pub struct Schedule {
    journeys: Vector<Journey>,
    status: ScheduleStatus,
}

// static functions:
impl Schedule {
    pub fn new(journeys: Vec<Journey>, status: ScheduleStatus) -> Schedule {
        Schedule {
            journeys: Vector::from(journeys),
            status,
        }
    }
}

// methods:
impl Schedule {
    pub fn status(&self) -> ScheduleStatus {
        self.status
    }

    pub fn number_of_journeys(&self) -> usize {
        self.journeys.len()
    }

    pub fn journeys_iter(&self) -> impl Iterator<Item = &Journey> + '_ {
        self.journeys.iter()
    }

    pub fn get_journey(&self, idx: JourneyIdx) -> Result<&Journey, String> {
        self.journeys
            .iter()
            .find(|j| j.idx() == idx)
            .ok_or_else(|| format!("{} is not a journey of this schedule.", idx))
    }

    /// element ids per journey, in assignment order
    pub fn elements_per_journey(&self) -> Vec<Vec<ElementIdx>> {
        self.journeys
            .iter()
            .map(|j| j.elements().to_vec())
            .collect()
    }

    pub fn print(&self) {
        println!("{} with {} journeys:", self.status, self.journeys.len());
        for journey in self.journeys.iter() {
            println!("\t* {}", journey);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_sentinels_render_exactly() {
        assert_eq!(
            ScheduleStatus::WeatherWindowsFound.to_string(),
            "WeatherWindowsFound"
        );
        assert_eq!(ScheduleStatus::NoWeatherWindows.to_string(), "NoWWindows");
    }

    #[test]
    fn journeys_are_kept_in_creation_order() {
        let journeys = vec![
            Journey::new(JourneyIdx(0), vec![ElementIdx(0), ElementIdx(1)], 20.0, 10.0),
            Journey::new(JourneyIdx(1), vec![ElementIdx(2)], 10.0, 5.0),
        ];
        let schedule = Schedule::new(journeys, ScheduleStatus::WeatherWindowsFound);
        assert_eq!(schedule.number_of_journeys(), 2);
        assert_eq!(
            schedule.elements_per_journey(),
            vec![
                vec![ElementIdx(0), ElementIdx(1)],
                vec![ElementIdx(2)]
            ]
        );
        assert!(schedule.get_journey(JourneyIdx(1)).is_ok());
        assert!(schedule.get_journey(JourneyIdx(7)).is_err());
    }
}
