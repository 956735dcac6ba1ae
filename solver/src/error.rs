use thiserror::Error;

use model::base_types::ElementIdx;
use model::error::ModelError;
use time::DateTime;

/// Fatal scheduling errors; these abort the phase and propagate to the
/// caller unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchedulingError {
    #[error("element {element} alone exceeds the deck capacity, it can never be transported")]
    NoElementFits { element: ElementIdx },

    #[error("window at {window_start} lies before the requested start {requested_start}, the start delay would be negative")]
    NegativeStartDelay {
        window_start: DateTime,
        requested_start: DateTime,
    },

    #[error(transparent)]
    Model(#[from] ModelError),
}
