use std::{error, result};

use ndarray::ShapeError;
use thiserror::Error;

/// Broad classes of failure, used by callers to decide how to recover.
///
/// A `Configuration` error is fatal to the accumulator being built. An `Alignment` error leaves
/// the accumulator untouched and the offending snapshot may be corrected and stored again. A
/// `Lookup` error never changes state.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Alignment,
    Lookup,
    Export,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("initial snapshot is missing coordinate field `{0}`")]
    MissingCoordinate(&'static str),

    #[error("coordinate field `{name}` must have {expected} non-empty dimension(s), got shape {found:?}")]
    CoordinateRank {
        name: &'static str,
        expected: usize,
        found: Vec<usize>,
    },

    #[error("need at least 2 interface levels to compute mid levels, got {0}")]
    TooFewLevels(usize),

    #[error("tracked variable `{0}` is missing from the initial snapshot")]
    MissingInitialVariable(String),

    #[error("initial variable `{name}` has shape {found:?}, which doesn't fit the grid {expected:?}")]
    InitialShapeMismatch {
        name: String,
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    #[error("invalid accumulator configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("snapshot at time {time} is missing tracked variable `{name}`")]
    MissingVariable { name: String, time: i64 },

    #[error("variable `{name}` has shape {found:?}, expected {expected:?}")]
    ShapeMismatch {
        name: String,
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    #[error("cannot append to time series: {0}")]
    Shape(#[from] ShapeError),

    #[error("no tracked variable named `{0}`")]
    UnknownVariable(String),

    #[error("export failed: {0}")]
    Export(Box<dyn error::Error + Send + Sync>),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingCoordinate(_)
            | Self::CoordinateRank { .. }
            | Self::TooFewLevels(_)
            | Self::MissingInitialVariable(_)
            | Self::InitialShapeMismatch { .. }
            | Self::InvalidConfig(_) => ErrorKind::Configuration,
            Self::MissingVariable { .. } | Self::ShapeMismatch { .. } | Self::Shape(_) => {
                ErrorKind::Alignment
            }
            Self::UnknownVariable(_) => ErrorKind::Lookup,
            Self::Export(_) => ErrorKind::Export,
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
