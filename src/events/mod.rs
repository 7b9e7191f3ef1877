//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Terminal events: user input and UI ticks
//! - Timer events: simulated operations that complete after a delay

pub mod terminal;
pub mod timer;
