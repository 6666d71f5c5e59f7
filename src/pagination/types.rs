//! Pagination types
//!
//! List state, the fetch phase that serves as the single-flight guard,
//! and the values the controller reports back to its caller.

use crate::config::{DirectoryConfig, ErrorMessages};
use crate::error::Result;
use crate::scroll::IntersectionOptions;
use crate::types::{PageResult, User};
use std::time::Duration;

// ============================================================================
// List State
// ============================================================================

/// Everything the controller knows about the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    /// Users in fetch order; appended to, never reordered
    pub items: Vec<User>,
    /// Page most recently requested (starts at 1)
    pub current_page: u32,
    /// Whether the latest page said more pages exist
    pub has_more: bool,
    /// User-facing message of the last failed fetch
    pub error: Option<String>,
    /// Set once the settle delay after the first page has elapsed
    pub initial_load_settled: bool,
    /// Last visibility the sentinel reported
    pub sentinel_visible: bool,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ListState {
    /// Fresh state: page 1, no users, more pages assumed
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            has_more: true,
            error: None,
            initial_load_settled: false,
            sentinel_visible: false,
        }
    }
}

// ============================================================================
// Fetch Phase
// ============================================================================

/// Which trigger a fetch was issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// Page 1, replacing the list
    Initial,
    /// A later page, appended to the list
    NextPage,
}

/// Single-flight guard: at most one fetch is outstanding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    /// No fetch in flight
    #[default]
    Idle,
    /// A fetch for `page` is in flight
    Fetching {
        /// Page being fetched
        page: u32,
        /// Trigger that issued it
        kind: FetchKind,
    },
}

impl FetchPhase {
    /// Check if a fetch is in flight
    pub fn is_fetching(&self) -> bool {
        matches!(self, Self::Fetching { .. })
    }
}

// ============================================================================
// Trigger Outcomes
// ============================================================================

/// What a trigger did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// A fetch for `page` was started
    Fetching {
        /// Page requested
        page: u32,
    },
    /// Nothing happened
    Ignored(IgnoreReason),
}

impl TriggerOutcome {
    /// Check if a fetch was started
    pub fn started(&self) -> bool {
        matches!(self, Self::Fetching { .. })
    }
}

/// Why a trigger did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Another fetch is still outstanding
    FetchInFlight,
    /// The last page has been loaded
    NoMorePages,
    /// The first page has not settled yet
    NotSettled,
    /// A failed fetch is waiting for a retry
    ErrorPending,
    /// Initialize already ran; use retry to start over
    AlreadyInitialized,
}

/// What applying one controller event changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    /// A page arrived and was merged into the list
    PageLoaded {
        /// Page number
        page: u32,
        /// Users on the page
        count: usize,
        /// Whether more pages remain
        has_more: bool,
    },
    /// A fetch failed; the list is showing `message`
    FetchFailed {
        /// Page that failed
        page: u32,
        /// User-facing message
        message: String,
    },
    /// The settle delay elapsed; infinite scroll is enabled
    Settled,
    /// The sentinel reported a new visibility
    SentinelChanged {
        /// Reported visibility
        visible: bool,
    },
    /// An event from before the last reset was discarded
    Stale {
        /// Generation the event belonged to
        generation: u64,
    },
}

// ============================================================================
// View Projection
// ============================================================================

/// Read-only snapshot of the list for rendering
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListView {
    /// Users in fetch order
    pub items: Vec<User>,
    /// Whether a fetch is in flight
    pub is_loading: bool,
    /// Message of the last failed fetch
    pub error: Option<String>,
    /// Whether more pages remain
    pub has_more: bool,
    /// Whether infinite scroll is enabled
    pub initial_load_settled: bool,
    /// Page most recently requested
    pub current_page: u32,
}

// ============================================================================
// Controller Config
// ============================================================================

/// Settings for the pagination controller
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Pause after the first page before infinite scroll is enabled
    pub settle_delay: Duration,
    /// Sentinel visibility rules
    pub intersection: IntersectionOptions,
    /// Messages stored in the list state on failure
    pub messages: ErrorMessages,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::from_config(&DirectoryConfig::default())
    }
}

impl ControllerConfig {
    /// Build controller settings from the full config
    pub fn from_config(config: &DirectoryConfig) -> Self {
        Self {
            settle_delay: config.ui.infinite_scroll_delay(),
            intersection: IntersectionOptions::from_ui(&config.ui),
            messages: config.messages.clone(),
        }
    }

    /// Set the settle delay
    #[must_use]
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Set the messages
    #[must_use]
    pub fn with_messages(mut self, messages: ErrorMessages) -> Self {
        self.messages = messages;
        self
    }
}

// ============================================================================
// Internal Events
// ============================================================================

/// Events posted to the controller's loop by fetch tasks, timers and the sentinel
#[derive(Debug)]
pub(crate) enum ControllerEvent {
    Fetched {
        generation: u64,
        page: u32,
        kind: FetchKind,
        result: Result<PageResult>,
    },
    Settled {
        generation: u64,
    },
    SentinelVisibility(bool),
}
