//! # QR Attendance Core
//!
//! Domain types and logic shared by the storage and API crates:
//!
//! - **Slot keys**: the rotating access key derived from wall-clock time
//! - **Recorder**: attendance submission with same-day duplicate suppression
//! - **Store**: the storage abstraction the recorder writes through
//! - **Issuer**: the QR ticket for the current slot
//! - **Clock**: the source of "now", injectable for tests

pub mod clock;
pub mod errors;
pub mod issuer;
pub mod models;
pub mod recorder;
pub mod slot;
pub mod store;
