//! Aggregation of log file sizes and their human-readable rendering.

use std::fmt::{self, Display, Formatter};

use crate::cloud_provider::LogFileInfo;

const STEP: f64 = 1024.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Unit {
    B,
    KB,
    MB,
    GB,
    TB,
    PB,
}

impl Unit {
    pub const ALL: [Unit; 6] = [Unit::B, Unit::KB, Unit::MB, Unit::GB, Unit::TB, Unit::PB];

    /// Power of 1024 this unit stands for.
    pub fn exponent(self) -> i32 {
        self as i32
    }

    fn next(self) -> Option<Unit> {
        Unit::ALL.get(self as usize + 1).copied()
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let value = match self {
            Unit::B => "B",
            Unit::KB => "KB",
            Unit::MB => "MB",
            Unit::GB => "GB",
            Unit::TB => "TB",
            Unit::PB => "PB",
        };
        write!(f, "{}", value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HumanSize {
    /// Already rounded to two decimals.
    pub value: f64,
    pub unit: Unit,
}

impl HumanSize {
    pub fn from_bytes(bytes: u64) -> Self {
        let mut value = bytes as f64;
        let mut unit = Unit::B;

        while value >= STEP {
            match unit.next() {
                Some(next) => {
                    value /= STEP;
                    unit = next;
                }
                // PB is the last unit; larger totals stay in PB.
                None => break,
            }
        }

        if unit == Unit::B {
            // Below 1024 the byte count is exact.
            return Self { value, unit };
        }

        Self {
            value: round_to_cents(value),
            unit,
        }
    }
}

/// Rounds to two decimals with exact halves going to the even digit, which
/// is what `{:.2}` does on the exact binary value.
fn round_to_cents(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

impl Display for HumanSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.unit == Unit::B {
            write!(f, "{} {}", self.value as u64, self.unit)
        } else if self.value.fract() == 0.0 {
            write!(f, "{:.1} {}", self.value, self.unit)
        } else {
            write!(f, "{} {}", self.value, self.unit)
        }
    }
}

/// Sums descriptor sizes into a byte total.
///
/// Negative sizes contribute nothing and the total saturates at `u64::MAX`.
pub fn total_size(log_files: &[LogFileInfo]) -> u64 {
    log_files
        .iter()
        .map(|log_file| u64::try_from(log_file.size).unwrap_or(0))
        .fold(0u64, u64::saturating_add)
}
