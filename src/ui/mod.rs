//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Layout of header, page body, log panel and footer
//! - Theme management
//! - Shared styling helpers
//! - One renderer per page

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod theme;
mod widgets;

pub use render::render;
pub use theme::{ColorSpec, Theme};
