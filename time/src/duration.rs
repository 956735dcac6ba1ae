use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::ops::Mul;
use std::ops::Sub;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)] // care the ordering of the variants is important
pub enum Duration {
    Length(DurationLength),
    Infinity, // always longer than all other Durations
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)] // care the ordering of attributes is important
pub struct DurationLength {
    pub(super) hours: u32,
    pub(super) minutes: u8,
}

////////////////////////////////////////////////////////////////////
////////////////////////// Duration ////////////////////////////////
////////////////////////////////////////////////////////////////////

impl Duration {
    pub fn in_min(&self) -> u32 {
        match self {
            Duration::Infinity => panic!("Cannot get minutes of Duration::Infinity."),
            Duration::Length(l) => l.hours * 60 + (l.minutes as u32),
        }
    }

    /// duration in hours, rounded down to whole hours
    pub fn in_hours(&self) -> u32 {
        match self {
            Duration::Infinity => panic!("Cannot get hours of Duration::Infinity."),
            Duration::Length(l) => l.hours,
        }
    }

    pub fn as_hours_f64(&self) -> f64 {
        match self {
            Duration::Infinity => f64::INFINITY,
            Duration::Length(l) => l.hours as f64 + l.minutes as f64 / 60.0,
        }
    }

    /// true iff the duration is a whole multiple of the (non-zero) step
    pub fn is_multiple_of(&self, step: Duration) -> bool {
        match (self, step) {
            (Duration::Length(_), Duration::Length(_)) => {
                step.in_min() > 0 && self.in_min() % step.in_min() == 0
            }
            _ => false,
        }
    }
}

impl Duration {
    pub fn new(string: &str) -> Duration {
        // "hh:mm"
        let splitted: Vec<&str> = string.split(':').collect();
        assert!(
            splitted.len() == 2,
            "Wrong duration format! string: {}",
            string
        );

        let hours: u32 = splitted[0].parse().expect("Error at hour.");
        let minutes: u8 = splitted[1].parse().expect("Error at minute.");
        assert!(minutes < 60, "Wrong minute format.");

        Duration::Length(DurationLength { hours, minutes })
    }

    pub fn from_hours(hours: u32) -> Duration {
        Duration::Length(DurationLength { hours, minutes: 0 })
    }

    pub fn from_minutes(minutes: u32) -> Duration {
        Duration::Length(DurationLength {
            hours: minutes / 60,
            minutes: (minutes % 60) as u8,
        })
    }

    /// rounded to the nearest minute; negative or non-finite input is treated as zero
    pub fn from_hours_f64(hours: f64) -> Duration {
        if !hours.is_finite() || hours <= 0.0 {
            return Duration::zero();
        }
        Duration::from_minutes((hours * 60.0).round() as u32)
    }

    pub fn zero() -> Duration {
        Duration::Length(DurationLength {
            hours: 0,
            minutes: 0,
        })
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        match self {
            Duration::Infinity => Duration::Infinity,
            Duration::Length(l1) => match other {
                Duration::Infinity => Duration::Infinity,
                Duration::Length(l2) => Duration::Length(l1 + l2),
            },
        }
    }
}

impl Sub for Duration {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        assert!(
            self >= other,
            "Cannot subtract a longer duration ({}) from a shorter duration ({}).",
            other,
            self
        );
        match self {
            Duration::Infinity => Duration::Infinity,
            Duration::Length(l1) => match other {
                Duration::Infinity => panic!("Cannot subtract Infinity"),
                Duration::Length(l2) => Duration::Length(l1 - l2),
            },
        }
    }
}

impl Mul<u32> for Duration {
    type Output = Self;

    fn mul(self, factor: u32) -> Self {
        match self {
            Duration::Infinity => Duration::Infinity,
            Duration::Length(_) => Duration::from_minutes(self.in_min() * factor),
        }
    }
}

impl Sum for Duration {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Duration::zero(), |a, b| a + b)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Duration::Length(l) => write!(f, "{:02}:{:02}h", l.hours, l.minutes),
            Duration::Infinity => write!(f, "Inf"),
        }
    }
}

////////////////////////////////////////////////////////////////////
/////////////////////// DurationLength /////////////////////////////
////////////////////////////////////////////////////////////////////

impl Add for DurationLength {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let sum_of_minutes = self.minutes + other.minutes;
        let minutes = sum_of_minutes % 60;
        let hours = self.hours + other.hours + (sum_of_minutes / 60) as u32;
        DurationLength { hours, minutes }
    }
}

impl Sub for DurationLength {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        assert!(
            self >= other,
            "Cannot subtract a longer duration from a shorter duration."
        );
        let mut self_minutes = self.minutes;
        let mut self_hours = self.hours;
        if self.minutes < other.minutes {
            self_minutes += 60;
            self_hours -= 1;
        }
        let minutes = self_minutes - other.minutes;
        let hours = self_hours - other.hours;
        DurationLength { hours, minutes }
    }
}
