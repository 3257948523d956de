//! # Operator Timeline
//!
//! Pure functions over one operator's appointments on a single day. Nothing in
//! here touches storage; callers fetch the active set and hand it in.
//!
//! ## Conflict detection
//!
//! A candidate slot `[s, e)` is rejected if any active appointment `[s2, e2)`
//! satisfies `s2 < e && s < e2`. When rescheduling, the appointment being moved
//! is excluded by id so it cannot conflict with itself.
//!
//! ## Free-slot computation
//!
//! The free slots are the complement of the booked intervals within
//! `[DAY_START, DAY_END)`:
//!
//! 1. Sort booked intervals by start (then end)
//! 2. Sweep a cursor from `DAY_START`, emitting the gap before each interval
//! 3. Emit the tail gap up to `DAY_END` if the cursor has not reached it
//!
//! The sweep assumes booked intervals do not overlap and does not check it.

use crate::models::appointment::{Appointment, AppointmentId};
use crate::models::slot::{Slot, DAY_END, DAY_START};

/// Returns the first active appointment that overlaps `candidate`, skipping
/// `exclude` if given.
pub fn find_conflict<'a, I>(
    candidate: Slot,
    existing: I,
    exclude: Option<AppointmentId>,
) -> Option<&'a Appointment>
where
    I: IntoIterator<Item = &'a Appointment>,
{
    existing.into_iter().find(|appointment| {
        appointment.is_active()
            && Some(appointment.id) != exclude
            && appointment.slot.overlaps(&candidate)
    })
}

/// Whether `candidate` overlaps any active appointment other than `exclude`.
pub fn conflicts<'a, I>(candidate: Slot, existing: I, exclude: Option<AppointmentId>) -> bool
where
    I: IntoIterator<Item = &'a Appointment>,
{
    find_conflict(candidate, existing, exclude).is_some()
}

/// Computes the maximal free gaps of the day around `booked`.
///
/// The result is ordered by start time and holds at most `booked.len() + 1`
/// entries. With nothing booked it is the whole day.
pub fn free_slots<I>(booked: I) -> Vec<Slot>
where
    I: IntoIterator<Item = Slot>,
{
    let mut booked: Vec<Slot> = booked.into_iter().collect();
    booked.sort_unstable();

    let mut free = Vec::with_capacity(booked.len() + 1);
    let mut cursor = DAY_START;

    for slot in booked {
        let gap = Slot::new(cursor, slot.start_time);
        if !gap.is_empty() {
            free.push(gap);
        }
        cursor = cursor.max(slot.end_time);
    }

    let tail = Slot::new(cursor, DAY_END);
    if !tail.is_empty() {
        free.push(tail);
    }

    free
}

/// Free slots for a set of appointments, ignoring cancelled ones.
pub fn free_slots_for<'a, I>(appointments: I) -> Vec<Slot>
where
    I: IntoIterator<Item = &'a Appointment>,
{
    free_slots(
        appointments
            .into_iter()
            .filter(|appointment| appointment.is_active())
            .map(|appointment| appointment.slot),
    )
}
