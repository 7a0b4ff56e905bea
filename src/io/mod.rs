//! I/O module
//!
//! Handles data-file persistence.
//!
//! # Components
//!
//! - `persistence` - Whole-file JSON load/save of the account store

pub mod persistence;

pub use persistence::{load, save};
