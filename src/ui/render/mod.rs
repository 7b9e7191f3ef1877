mod all;
mod auth;
mod dashboard;
mod footer;
mod landing;
mod log;
mod not_found;
mod onboarding;
mod post_job;
mod wizard;

use self::log::log;
use super::*;
use footer::footer;

pub use all::all as render;
