use thiserror::Error;

/// Fatal configuration errors. These abort the whole scheduling run and are
/// never caught within the core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("metocean series has fewer than two records")]
    EmptySeries,

    #[error("metocean timestamps are not strictly increasing at record {row}")]
    NonMonotonicSeries { row: usize },

    #[error("metocean step of {step_minutes} minutes is not a whole number of hours dividing a day")]
    IrregularStep { step_minutes: u32 },

    #[error("no complete calendar year in the metocean series")]
    NoCompleteYears,

    #[error("complete metocean years are not consecutive: {years:?}")]
    InvalidMetoceanYears { years: Vec<u32> },
}
