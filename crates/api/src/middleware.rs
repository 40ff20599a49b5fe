pub mod error_handling;
pub mod slot_guard;
