use std::fmt;

use time::Duration;

use crate::base_types::OperationalLimits;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum OperationPhase {
    Preparation,    // onshore, before departure
    Sea,            // offshore, per journey
    Demobilisation, // end of phase
}

/// the named computations an operation can resolve its duration from
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DurationFunction {
    /// great-circle route distance divided by the slowest transit speed
    Transit,
}

/// duration values taken from outside the operation table
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DurationSource {
    /// maximum vessel mobilisation time, charged on the first journey only
    Mobilisation,
}

/// How an operation's duration is resolved. Exactly one mode applies per
/// operation; `Unsupported` keeps a place for genuinely open-ended future
/// operation kinds, which are skipped with a warning instead of failing the
/// phase.
#[derive(Clone, PartialEq, Debug)]
pub enum DurationRule {
    Fixed(Duration),
    /// literal duration once per element carried by the journey
    FixedPerElement(Duration),
    Function(DurationFunction),
    External(DurationSource),
    Unsupported(String),
}

/// One logistic task within a phase (e.g. "seafloor preparation", "lower
/// cable to seabed"). An unset limit means the operation is unconstrained;
/// the weather-window extractor then substitutes the maximum observed site
/// condition so the filter never excludes it.
#[derive(Clone, PartialEq, Debug)]
pub struct Operation {
    name: String,
    phase: OperationPhase,
    rule: DurationRule,
    limits: Option<OperationalLimits>,
}

impl Operation {
    pub fn new(
        name: String,
        phase: OperationPhase,
        rule: DurationRule,
        limits: Option<OperationalLimits>,
    ) -> Operation {
        Operation {
            name,
            phase,
            rule,
            limits,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phase(&self) -> OperationPhase {
        self.phase
    }

    pub fn rule(&self) -> &DurationRule {
        &self.rule
    }

    pub fn limits(&self) -> Option<&OperationalLimits> {
        self.limits.as_ref()
    }
}

/// the ordered operation sequences of one logistic phase, partitioned into
/// preparation (before departure), sea work (per journey) and demobilisation
#[derive(Clone, PartialEq, Debug, Default)]
pub struct OperationPlan {
    pub preparation: Vec<Operation>,
    pub sea: Vec<Operation>,
    pub demobilisation: Vec<Operation>,
}

impl OperationPlan {
    pub fn new(operations: Vec<Operation>) -> OperationPlan {
        let mut plan = OperationPlan::default();
        for operation in operations {
            match operation.phase() {
                OperationPhase::Preparation => plan.preparation.push(operation),
                OperationPhase::Sea => plan.sea.push(operation),
                OperationPhase::Demobilisation => plan.demobilisation.push(operation),
            }
        }
        plan
    }
}

impl fmt::Display for OperationPhase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OperationPhase::Preparation => write!(f, "preparation"),
            OperationPhase::Sea => write!(f, "sea"),
            OperationPhase::Demobilisation => write!(f, "demobilisation"),
        }
    }
}
