//! Terminal onboarding for the Freeness freelance marketplace.
//!
//! Freelancers walk through a six-step wizard that builds a profile draft;
//! clients fill in a job posting. All data lives in an in-memory session
//! store for the lifetime of the process.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod form;
pub mod logger;
pub mod pages;
pub mod profile;
pub mod session;
pub mod state;
pub mod ui;
pub mod wizard;
