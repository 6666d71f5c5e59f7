//! Scroll module
//!
//! Decides when the end-of-list sentinel is visible and carries that signal
//! to the pagination controller.
//!
//! # Overview
//!
//! - `Span` / `IntersectionOptions` - viewport intersection with root margin and threshold
//! - `SentinelHandle` - the opaque handle a view reports visibility through

mod geometry;
mod sentinel;

pub use geometry::{IntersectionOptions, Span};
pub use sentinel::SentinelHandle;
