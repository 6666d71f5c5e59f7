//! Pagination module
//!
//! The infinite-scroll state machine.
//!
//! # Overview
//!
//! - `PaginationController` - owns the list state and sequences page fetches
//! - `ListState` / `ListView` - the state and its read-only projection
//! - `FetchPhase` - the single-flight guard (`Idle` or `Fetching`)
//! - `TriggerOutcome` / `Update` - what a trigger or an applied event did
//!
//! # Triggers
//!
//! | Trigger                | Effect                                          |
//! |------------------------|-------------------------------------------------|
//! | `initialize`           | fetch page 1 once                               |
//! | `scroll_trigger_visible` | advance `current_page`, which fetches it      |
//! | `retry`                | reset everything, fetch page 1                  |

mod controller;
mod types;

pub use controller::PaginationController;
pub(crate) use types::ControllerEvent;
pub use types::{
    ControllerConfig, FetchKind, FetchPhase, IgnoreReason, ListState, ListView, TriggerOutcome,
    Update,
};
