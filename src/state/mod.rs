//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that owns the session store and the page on screen
//! - Route table
//! - Transient notices
//! - State error handling

mod error;
mod navigation;
mod notice;

pub use error::StateError;
pub use navigation::Route;
pub use notice::{Notice, NoticeKind};

#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
