//! View module
//!
//! Thin text rendering of the controller's state. Nothing here decides when
//! to fetch; it only draws what a [`crate::pagination::ListView`] says.

mod components;
mod screen;
mod splash;

pub use components::{end_of_list, error_state, header, loading_skeleton, user_card};
pub use screen::{footer, render, Screen};
pub use splash::{play_splash, splash_frame};

#[cfg(test)]
mod tests;
