//! # Slotbook Core
//!
//! Domain types and scheduling logic for hourly operator appointments:
//! the error taxonomy, the appointment and slot models, the timeline
//! algorithms (conflict detection, free slots), the storage seam and the
//! lifecycle manager that ties them together.

pub mod errors;
pub mod locks;
pub mod models;
pub mod service;
pub mod store;
pub mod timeline;
