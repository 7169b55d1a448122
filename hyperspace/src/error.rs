//! Configuration errors.
//!
//! Every variant describes a caller mistake that is reported at the call
//! which introduced it. Degenerate geometry (parallel intersections, zero
//! total mass) is not an error and is modelled with `Option` or NaN vectors.

use std::fmt;

use crate::render::FramePhase;

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// A tunable that must be strictly positive was given something else.
    NonPositive {
        /// Name of the parameter
        name: &'static str,
        /// Rejected value
        value: f64,
    },
    /// A flat body description had the wrong number of values.
    StatsLength { expected: usize, found: usize },
    /// A world or camera chain was requested for a dimension it cannot handle.
    UnsupportedDimension { dimension: usize },
    /// Two vectors of a camera were built with different dimensions.
    DimensionMismatch { expected: usize, found: usize },
    /// A compositor call arrived out of order within a frame.
    FramePhase {
        expected: &'static str,
        found: FramePhase,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { name, value } => {
                write!(f, "{name} is {value} when it should be greater than zero")
            }
            Self::StatsLength { expected, found } => {
                write!(f, "stats length is {found} when it should be {expected}")
            }
            Self::UnsupportedDimension { dimension } => {
                write!(f, "dimension {dimension} is not supported, use 2 or more")
            }
            Self::DimensionMismatch { expected, found } => {
                write!(f, "vector has dimension {found}, expected {expected}")
            }
            Self::FramePhase { expected, found } => {
                write!(f, "compositor expected {expected} but frame is {found:?}")
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

/// Reject anything that is not a finite, strictly positive number.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<f64> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonPositive { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_values_pass_through() {
        assert_eq!(ensure_positive("density", 2.5), Ok(2.5));
    }

    #[test]
    fn zero_negative_and_nan_are_rejected() {
        for value in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(ensure_positive("time step", value).is_err());
        }
    }

    #[test]
    fn messages_name_the_parameter() {
        let err = ensure_positive("time step", -0.5).unwrap_err();
        assert_eq!(
            err.to_string(),
            "time step is -0.5 when it should be greater than zero"
        );
    }
}
