use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};

/// First hour of the bookable day.
pub const DAY_START: i32 = 0;
/// End of the bookable day (exclusive bound of the last slot).
pub const DAY_END: i32 = 24;
/// Every appointment occupies exactly this many hours.
pub const SLOT_LENGTH: i32 = 1;

/// Half-open hour interval `[start_time, end_time)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub start_time: i32,
    pub end_time: i32,
}

impl Slot {
    /// Builds a slot without validation. Used for free-slot gaps, which may
    /// span several hours.
    pub const fn new(start_time: i32, end_time: i32) -> Self {
        Self { start_time, end_time }
    }

    /// Builds a bookable slot: exactly one hour long and inside the day.
    pub fn bookable(start_time: i32, end_time: i32) -> BookingResult<Self> {
        // Widen before subtracting so extreme inputs cannot overflow.
        if i64::from(end_time) - i64::from(start_time) != i64::from(SLOT_LENGTH) {
            return Err(BookingError::Validation(
                "Appointments must be exactly 1 hour long.".to_string(),
            ));
        }

        if start_time < DAY_START || end_time > DAY_END {
            return Err(BookingError::Validation(format!(
                "Appointments must fall within hours {} to {}.",
                DAY_START, DAY_END
            )));
        }

        Ok(Self { start_time, end_time })
    }

    pub fn is_empty(&self) -> bool {
        self.end_time <= self.start_time
    }

    /// Half-open overlap: `[s1,e1)` and `[s2,e2)` overlap iff `s1 < e2 && s2 < e1`.
    pub fn overlaps(&self, other: &Slot) -> bool {
        self.start_time < other.end_time && other.start_time < self.end_time
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start_time, self.end_time)
    }
}
