//! Shared numeric helpers.

pub mod decimal_utils;

pub use decimal_utils::{clamp_display, guarded_ratio, percentage_of};
