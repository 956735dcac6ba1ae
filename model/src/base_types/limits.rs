use std::fmt;

/// Operational limit conditions: the sea-state thresholds below which an
/// operation may proceed. A zero, negative or non-finite entry means that the
/// condition is not limiting.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct OperationalLimits {
    pub max_hs: f64, // significant wave height [m]
    pub max_tp: f64, // peak wave period [s]
    pub max_ws: f64, // wind speed [m/s]
    pub max_cs: f64, // current speed [m/s]
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SeaCondition {
    WaveHeight,
    PeakPeriod,
    WindSpeed,
    CurrentSpeed,
}

pub const SEA_CONDITIONS: [SeaCondition; 4] = [
    SeaCondition::WaveHeight,
    SeaCondition::PeakPeriod,
    SeaCondition::WindSpeed,
    SeaCondition::CurrentSpeed,
];

// static functions:
impl OperationalLimits {
    pub const UNLIMITED: OperationalLimits = OperationalLimits {
        max_hs: 0.0,
        max_tp: 0.0,
        max_ws: 0.0,
        max_cs: 0.0,
    };

    pub fn new(max_hs: f64, max_tp: f64, max_ws: f64, max_cs: f64) -> OperationalLimits {
        OperationalLimits {
            max_hs,
            max_tp,
            max_ws,
            max_cs,
        }
    }

    /// combine limits by taking, per condition, the minimum of all strictly
    /// positive finite thresholds. Conditions without any positive threshold
    /// stay unconstrained.
    pub fn most_restrictive<'a>(
        limits: impl Iterator<Item = &'a OperationalLimits>,
    ) -> OperationalLimits {
        let mut combined = OperationalLimits::UNLIMITED;
        for l in limits {
            for condition in SEA_CONDITIONS {
                let threshold = l.threshold(condition);
                if !is_limiting(threshold) {
                    continue;
                }
                let current = combined.threshold_mut(condition);
                if !is_limiting(*current) || threshold < *current {
                    *current = threshold;
                }
            }
        }
        combined
    }
}

// methods:
impl OperationalLimits {
    pub fn threshold(&self, condition: SeaCondition) -> f64 {
        match condition {
            SeaCondition::WaveHeight => self.max_hs,
            SeaCondition::PeakPeriod => self.max_tp,
            SeaCondition::WindSpeed => self.max_ws,
            SeaCondition::CurrentSpeed => self.max_cs,
        }
    }

    fn threshold_mut(&mut self, condition: SeaCondition) -> &mut f64 {
        match condition {
            SeaCondition::WaveHeight => &mut self.max_hs,
            SeaCondition::PeakPeriod => &mut self.max_tp,
            SeaCondition::WindSpeed => &mut self.max_ws,
            SeaCondition::CurrentSpeed => &mut self.max_cs,
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        SEA_CONDITIONS
            .iter()
            .all(|&c| !is_limiting(self.threshold(c)))
    }

    /// absolute per-condition comparison, used by the weather-window cache
    pub fn matches_within(&self, other: &OperationalLimits, tolerance: f64) -> bool {
        SEA_CONDITIONS
            .iter()
            .all(|&c| (self.threshold(c) - other.threshold(c)).abs() <= tolerance)
    }
}

pub fn is_limiting(threshold: f64) -> bool {
    threshold.is_finite() && threshold > 0.0
}

impl fmt::Display for SeaCondition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SeaCondition::WaveHeight => write!(f, "Hs"),
            SeaCondition::PeakPeriod => write!(f, "Tp"),
            SeaCondition::WindSpeed => write!(f, "Ws"),
            SeaCondition::CurrentSpeed => write!(f, "Cs"),
        }
    }
}

impl fmt::Display for OperationalLimits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Hs<{} Tp<{} Ws<{} Cs<{}",
            self.max_hs, self.max_tp, self.max_ws, self.max_cs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_restrictive_ignores_non_positive_thresholds() {
        let transit = OperationalLimits::new(2.5, 0.0, 15.0, f64::NAN);
        let towing = OperationalLimits::new(1.5, 8.0, 0.0, 1.0);
        let combined =
            OperationalLimits::most_restrictive([transit, towing].iter());
        assert_eq!(combined, OperationalLimits::new(1.5, 8.0, 15.0, 1.0));
    }

    #[test]
    fn most_restrictive_of_nothing_is_unconstrained() {
        let combined = OperationalLimits::most_restrictive(std::iter::empty());
        assert!(combined.is_unconstrained());
    }

    #[test]
    fn tolerance_matching_is_absolute_per_condition() {
        let a = OperationalLimits::new(1.5, 8.0, 15.0, 1.0);
        let b = OperationalLimits::new(1.55, 7.95, 15.1, 0.9);
        assert!(a.matches_within(&b, 0.1));
        let c = OperationalLimits::new(1.5, 8.0, 15.0, 1.2);
        assert!(!a.matches_within(&c, 0.1));
    }
}
