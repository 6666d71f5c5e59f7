// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # User Directory
//!
//! An infinite-scroll client for a paginated users API.
//!
//! ## Features
//!
//! - **Fetch Client**: one GET per page, fixed deadline, four error categories
//! - **Single-flight pagination**: at most one page request outstanding
//! - **Settle delay**: infinite scroll starts only after the first page has settled
//! - **Retry**: full reset to page 1, with stale responses discarded
//! - **Text view**: splash screen, skeletons, user cards, end-of-list banner
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_directory::http::{HttpClient, HttpClientConfig};
//! use user_directory::pagination::{ControllerConfig, PaginationController};
//!
//! #[tokio::main]
//! async fn main() -> user_directory::Result<()> {
//!     let client = HttpClient::with_config(HttpClientConfig::default())?;
//!     let mut controller =
//!         PaginationController::new(Arc::new(client), ControllerConfig::default());
//!     let sentinel = controller.sentinel();
//!
//!     controller.initialize();
//!     while let Some(update) = controller.next_update().await {
//!         // Render controller.view(); report scrolling through `sentinel`.
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    View (text renderers)                     │
//! │   splash · skeleton · user card · error state · end of list  │
//! └──────────────────────────────────────────────────────────────┘
//!            ▲ ListView                     │ retry() / sentinel
//! ┌──────────┴──────────────────────────────▼────────────────────┐
//! │                   Pagination Controller                      │
//! │  Idle ⇄ Fetching · generations · settle timer · sentinel     │
//! └──────────────────────────────────────────────────────────────┘
//!                               │ PageFetcher
//! ┌─────────────────────────────▼────────────────────────────────┐
//! │   Fetch Client: GET {base_url}/users?page={n} (reqwest)      │
//! └──────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Users and pages
pub mod types;

/// Configuration
pub mod config;

/// HTTP fetch client
pub mod http;

/// Infinite-scroll state machine
pub mod pagination;

/// Sentinel visibility
pub mod scroll;

/// Text rendering
pub mod view;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use config::DirectoryConfig;
pub use pagination::{ListView, PaginationController};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
