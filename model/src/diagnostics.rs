use std::fmt;

use time::{DateTime, Duration};

use crate::base_types::JourneyIdx;

/// A recoverable condition observed during scheduling. Fatal conditions are
/// errors, not warnings; everything here degrades the result but does not
/// abort it.
#[derive(Clone, PartialEq, Debug)]
pub enum Warning {
    IncompleteYearDropped {
        year: u32,
    },
    UnsupportedOperation {
        name: String,
    },
    MissingMobilisationTime {
        vessel: String,
    },
    ShortWeatherWindow {
        start: DateTime,
        duration: Duration,
    },
    LongStartDelay {
        journey: JourneyIdx,
        delay: Duration,
    },
    LongWaitingTime {
        journey: JourneyIdx,
        waiting: Duration,
    },
}

/// Collects warnings as a value, so recoverable-error accumulation is
/// explicit in function signatures instead of living in ambient state.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

// static functions:
impl Diagnostics {
    pub fn new() -> Diagnostics {
        Diagnostics::default()
    }
}

// methods:
impl Diagnostics {
    pub fn warn(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Warning> + '_ {
        self.warnings.iter()
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn contains(&self, warning: &Warning) -> bool {
        self.warnings.contains(warning)
    }

    pub fn print(&self) {
        for warning in &self.warnings {
            println!("\x1b[93mwarning:\x1b[0m {}", warning);
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Warning::IncompleteYearDropped { year } => {
                write!(f, "metocean year {} is incomplete and was dropped", year)
            }
            Warning::UnsupportedOperation { name } => {
                write!(f, "operation '{}' has no supported duration mode and was skipped", name)
            }
            Warning::MissingMobilisationTime { vessel } => {
                write!(f, "vessel '{}' has no mobilisation time, assuming zero", vessel)
            }
            Warning::ShortWeatherWindow { start, duration } => {
                write!(f, "weather window at {} lasts only {}", start, duration)
            }
            Warning::LongStartDelay { journey, delay } => {
                write!(f, "{} starts {} late (more than 30 days)", journey, delay)
            }
            Warning::LongWaitingTime { journey, waiting } => {
                write!(f, "{} waits {} between windows (more than 30 days)", journey, waiting)
            }
        }
    }
}
