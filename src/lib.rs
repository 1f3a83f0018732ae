//! Courtside - interactive venue seat picker demo.
//!
//! The UI-agnostic seat map model lives in the `courtside-core` crate; this
//! crate adds configuration, the picker state machine, and the egui shell.

pub mod config;
pub mod error;
pub mod gui;

pub use error::{CourtsideError, Result};
