//! Argument validation errors.
//!
//! Every public operation validates its inputs at the entry boundary and
//! reports the first violation as an [`InvalidArgument`]. Computation is
//! pure, so there is no partial failure and nothing to recover: a
//! rejected call has done no work.

use std::convert::Infallible;
use std::error::Error;
use std::fmt;

/// A caller-supplied argument failed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidArgument {
    /// The rule index is not an integer in `[0, 19682]`.
    RuleIndexOutOfRange {
        /// The rejected value, as supplied by the caller.
        value: String,
    },
    /// A configuration cell is outside `{0, 1, 2}`.
    InvalidSymbol {
        /// Position of the first offending cell.
        index: usize,
        /// The rejected cell value.
        value: String,
    },
    /// The step count is negative or not convertible to a non-negative
    /// integer.
    InvalidTimeSteps {
        /// The rejected value, as supplied by the caller.
        value: String,
    },
    /// A row appended to a spacetime field does not match its width.
    RowWidthMismatch {
        /// The field's width.
        expected: usize,
        /// The width of the rejected row.
        actual: usize,
    },
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RuleIndexOutOfRange { value } => {
                write!(f, "rule index out of range: {value} is not in [0, 19682]")
            }
            Self::InvalidSymbol { index, value } => {
                write!(
                    f,
                    "initial condition must contain only 0, 1, 2 (cell {index} is {value})"
                )
            }
            Self::InvalidTimeSteps { value } => {
                write!(f, "time_steps must be a non-negative integer, got {value}")
            }
            Self::RowWidthMismatch { expected, actual } => {
                write!(f, "row has {actual} cells, field width is {expected}")
            }
        }
    }
}

impl Error for InvalidArgument {}

// Lets `TryInto<T, Error = Infallible>` conversions (e.g. `TimeSteps`
// into itself) flow through the same `?` paths as fallible ones.
impl From<Infallible> for InvalidArgument {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_violated_constraint() {
        let e = InvalidArgument::RuleIndexOutOfRange {
            value: "19683".into(),
        };
        assert!(e.to_string().starts_with("rule index out of range"));

        let e = InvalidArgument::InvalidSymbol {
            index: 2,
            value: "3".into(),
        };
        assert!(e
            .to_string()
            .starts_with("initial condition must contain only 0, 1, 2"));
        assert!(e.to_string().contains("cell 2 is 3"));

        let e = InvalidArgument::InvalidTimeSteps { value: "-1".into() };
        assert!(e
            .to_string()
            .starts_with("time_steps must be a non-negative integer"));

        let e = InvalidArgument::RowWidthMismatch {
            expected: 3,
            actual: 2,
        };
        assert_eq!(e.to_string(), "row has 2 cells, field width is 3");
    }

    #[test]
    fn has_no_source() {
        let e = InvalidArgument::InvalidTimeSteps { value: "x".into() };
        assert!(e.source().is_none());
    }
}
