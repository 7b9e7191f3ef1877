//! Reusable UI widget components.
//!
//! This module contains styling utilities and the form view shared by every
//! page that edits data.

pub mod form_view;
pub mod styling;
