//! Life-stage classification.
//!
//! # Responsibility
//! - Map a numeric age onto the ordered `Stage` enum.
//! - Provide per-stage progress percentages for journey display.
//!
//! # Invariants
//! - Stage boundaries are half-open intervals `[lo, hi)`; the top stage is
//!   open-ended.
//! - `classify` is pure and total over `age >= 0`; negative ages are an
//!   input-validation error, never coerced.
//! - Enum ordering (`Child < Youth < Adult < Senior`) drives cumulative
//!   content composition and must not change.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// First age (inclusive) of the youth stage.
pub const YOUTH_MIN_AGE: i32 = 16;
/// First age (inclusive) of the adult stage.
pub const ADULT_MIN_AGE: i32 = 22;
/// First age (inclusive) of the senior stage.
pub const SENIOR_MIN_AGE: i32 = 46;

/// Life stage derived from age.
///
/// Ordered: later stages compare greater than earlier ones, which the
/// composer relies on for cumulative inclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Ages 0-15: childhood and early education.
    Child,
    /// Ages 16-21: adolescence and early adulthood.
    Youth,
    /// Ages 22-45: career and family life.
    Adult,
    /// Ages 46 and up: midlife and beyond.
    Senior,
}

/// All stages in ascending order.
pub const ALL_STAGES: [Stage; 4] = [Stage::Child, Stage::Youth, Stage::Adult, Stage::Senior];

impl Stage {
    /// Human-readable age span for this stage, e.g. `16-21 Years`.
    pub fn age_span_label(self) -> &'static str {
        match self {
            Self::Child => "0-15 Years",
            Self::Youth => "16-21 Years",
            Self::Adult => "22-45 Years",
            Self::Senior => "46+ Years",
        }
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Child => "child",
            Self::Youth => "youth",
            Self::Adult => "adult",
            Self::Senior => "senior",
        };
        f.write_str(name)
    }
}

/// Rejected age input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidAgeError {
    /// The offending value.
    pub age: i32,
}

impl Display for InvalidAgeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid age {}: must be zero or positive", self.age)
    }
}

impl Error for InvalidAgeError {}

/// Classifies an age into its life stage.
///
/// # Contract
/// - Pure, no side effects.
/// - Total over `age >= 0`; returns `InvalidAgeError` for negative input.
pub fn classify(age: i32) -> Result<Stage, InvalidAgeError> {
    if age < 0 {
        return Err(InvalidAgeError { age });
    }
    let stage = if age < YOUTH_MIN_AGE {
        Stage::Child
    } else if age < ADULT_MIN_AGE {
        Stage::Youth
    } else if age < SENIOR_MIN_AGE {
        Stage::Adult
    } else {
        Stage::Senior
    };
    Ok(stage)
}

/// Percent progress through one stage's age span, clamped to `[0, 100]`.
///
/// Before the span the result is 0; at or after its end it is 100. The
/// open-ended senior span is measured against an assumed horizon of 80
/// years, matching the journey display this feeds.
pub fn stage_progress(stage: Stage, age: i32) -> u8 {
    let (start, span) = match stage {
        // Childhood is measured from birth to the last child age.
        Stage::Child => (0, 15),
        Stage::Youth => (YOUTH_MIN_AGE, ADULT_MIN_AGE - YOUTH_MIN_AGE - 1),
        Stage::Adult => (ADULT_MIN_AGE, SENIOR_MIN_AGE - ADULT_MIN_AGE - 1),
        Stage::Senior => (SENIOR_MIN_AGE, 34),
    };
    if age < start {
        return 0;
    }
    let into = f64::from(age - start);
    let pct = (into / f64::from(span) * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}
