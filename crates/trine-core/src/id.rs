//! Strongly-typed rule indices and step counts.
//!
//! Both types are built through `TryFrom` from any primitive integer so
//! that negative or oversized caller values surface as typed
//! [`InvalidArgument`]s instead of wrapping silently.

use std::fmt;
use std::str::FromStr;

use crate::error::InvalidArgument;
use crate::symbol::{Neighbourhood, Symbol};

/// A rule number in `[0, 19682]` (= 3^9 − 1).
///
/// Read as a 9-digit base-3 number, one digit per
/// [`Neighbourhood`]; every index names a distinct rule.
///
/// # Examples
///
/// ```
/// use trine_core::RuleIndex;
///
/// let rule = RuleIndex::try_from(8711).unwrap();
/// assert_eq!(rule.get(), 8711);
/// assert!(RuleIndex::try_from(19683).is_err());
/// assert!(RuleIndex::try_from(-1).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleIndex(u16);

impl RuleIndex {
    /// The identically-zero rule.
    pub const MIN: RuleIndex = RuleIndex(0);
    /// The identically-two rule.
    pub const MAX: RuleIndex = RuleIndex(19682);
    /// Number of distinct rules.
    pub const COUNT: u32 = 19683;

    /// Checked constructor usable in const contexts.
    pub const fn new(value: u16) -> Option<Self> {
        if value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// The numeric value.
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Encode nine base-3 digits, most significant first.
    ///
    /// Nine digits in `{0, 1, 2}` never exceed [`RuleIndex::MAX`], so
    /// this cannot fail.
    pub fn from_ternary(digits: [Symbol; Neighbourhood::COUNT]) -> Self {
        Self(
            digits
                .iter()
                .fold(0u16, |acc, d| acc * Symbol::COUNT as u16 + d.value() as u16),
        )
    }

    /// Every rule index in ascending order.
    pub fn all() -> impl Iterator<Item = RuleIndex> {
        (Self::MIN.0..=Self::MAX.0).map(RuleIndex)
    }
}

impl fmt::Display for RuleIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<RuleIndex> for u16 {
    fn from(r: RuleIndex) -> Self {
        r.0
    }
}

macro_rules! rule_index_try_from {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for RuleIndex {
                type Error = InvalidArgument;

                fn try_from(value: $t) -> Result<Self, Self::Error> {
                    u16::try_from(value)
                        .ok()
                        .and_then(RuleIndex::new)
                        .ok_or_else(|| InvalidArgument::RuleIndexOutOfRange {
                            value: value.to_string(),
                        })
                }
            }
        )*
    };
}

rule_index_try_from!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl FromStr for RuleIndex {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<i128>()
            .map_err(|_| InvalidArgument::RuleIndexOutOfRange {
                value: trimmed.to_string(),
            })
            .and_then(RuleIndex::try_from)
    }
}

/// A non-negative number of evolution steps.
///
/// Integers convert exactly; negative values are rejected. Floats are
/// sign-checked, then truncated toward zero (`2.7` becomes `2`); NaN
/// and infinities are rejected. Text is parsed as an integer first and
/// as a float second.
///
/// # Examples
///
/// ```
/// use trine_core::TimeSteps;
///
/// assert_eq!(TimeSteps::try_from(5u32).unwrap().get(), 5);
/// assert_eq!(TimeSteps::try_from(2.7f64).unwrap().get(), 2);
/// assert_eq!("12".parse::<TimeSteps>().unwrap().get(), 12);
/// assert!(TimeSteps::try_from(-1i64).is_err());
/// assert!("ten".parse::<TimeSteps>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeSteps(usize);

impl TimeSteps {
    /// No steps.
    pub const ZERO: TimeSteps = TimeSteps(0);

    /// Wrap an already non-negative count.
    pub const fn new(steps: usize) -> Self {
        Self(steps)
    }

    /// The step count.
    pub const fn get(self) -> usize {
        self.0
    }

    fn rejected(value: impl fmt::Display) -> InvalidArgument {
        InvalidArgument::InvalidTimeSteps {
            value: value.to_string(),
        }
    }
}

impl fmt::Display for TimeSteps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! time_steps_try_from_int {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for TimeSteps {
                type Error = InvalidArgument;

                fn try_from(value: $t) -> Result<Self, Self::Error> {
                    usize::try_from(value)
                        .map(TimeSteps)
                        .map_err(|_| TimeSteps::rejected(value))
                }
            }
        )*
    };
}

time_steps_try_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl TryFrom<f64> for TimeSteps {
    type Error = InvalidArgument;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        // `usize::MAX as f64` rounds up, so `<` keeps the cast in range.
        if value.is_finite() && value >= 0.0 && value.trunc() < usize::MAX as f64 {
            Ok(TimeSteps(value.trunc() as usize))
        } else {
            Err(Self::rejected(value))
        }
    }
}

impl TryFrom<f32> for TimeSteps {
    type Error = InvalidArgument;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::try_from(f64::from(value))
    }
}

impl FromStr for TimeSteps {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<i128>() {
            return TimeSteps::try_from(n);
        }
        match trimmed.parse::<f64>() {
            Ok(x) => TimeSteps::try_from(x).map_err(|_| Self::rejected(trimmed)),
            Err(_) => Err(Self::rejected(trimmed)),
        }
    }
}

impl TryFrom<&str> for TimeSteps {
    type Error = InvalidArgument;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
