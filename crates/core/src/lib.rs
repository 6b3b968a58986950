//! Functional core for recordbox.
//!
//! Pure record types, intake validation rules, and the storage contracts the
//! server's backends implement. Nothing in this crate performs I/O.

pub mod record;
pub mod storage;
