//! Pagination controller
//!
//! Owns the list state and decides when page 1, page N+1, or a fresh start
//! is fetched. Fetches and the settle timer run as spawned tasks that post
//! events back onto the controller's channel; [`PaginationController::next_update`]
//! applies them one at a time, so every state change happens on the owner's
//! task.
//!
//! Every reset bumps a generation counter. Events carry the generation they
//! were issued under and anything older than the current one is dropped, so
//! a response that lands after a retry can never overwrite the new list.

use super::types::{
    ControllerConfig, ControllerEvent, FetchKind, FetchPhase, IgnoreReason, ListState, ListView,
    TriggerOutcome, Update,
};
use crate::error::Error;
use crate::http::PageFetcher;
use crate::scroll::SentinelHandle;
use crate::types::PageResult;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Drives infinite scroll over a [`PageFetcher`]
pub struct PaginationController {
    fetcher: Arc<dyn PageFetcher>,
    config: ControllerConfig,
    state: ListState,
    phase: FetchPhase,
    generation: u64,
    initialized: bool,
    events_tx: mpsc::UnboundedSender<ControllerEvent>,
    events_rx: mpsc::UnboundedReceiver<ControllerEvent>,
    fetch_task: Option<JoinHandle<()>>,
    settle_task: Option<JoinHandle<()>>,
    view_tx: watch::Sender<ListView>,
}

impl PaginationController {
    /// Create a controller; nothing is fetched until [`Self::initialize`]
    pub fn new(fetcher: Arc<dyn PageFetcher>, config: ControllerConfig) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let state = ListState::new();
        let (view_tx, _) = watch::channel(project(&state, FetchPhase::Idle));

        Self {
            fetcher,
            config,
            state,
            phase: FetchPhase::Idle,
            generation: 0,
            initialized: false,
            events_tx,
            events_rx,
            fetch_task: None,
            settle_task: None,
            view_tx,
        }
    }

    /// Get the current list state
    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Get the current fetch phase
    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    /// Whether a fetch is in flight
    pub fn is_loading(&self) -> bool {
        self.phase.is_fetching()
    }

    /// Current reset generation
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Snapshot of the list for rendering
    pub fn view(&self) -> ListView {
        project(&self.state, self.phase)
    }

    /// Receive a fresh [`ListView`] after every transition
    pub fn subscribe(&self) -> watch::Receiver<ListView> {
        self.view_tx.subscribe()
    }

    /// Handle the view reports sentinel visibility through
    pub fn sentinel(&self) -> SentinelHandle {
        SentinelHandle::new(self.config.intersection, self.events_tx.clone())
    }

    // ========================================================================
    // Triggers
    // ========================================================================

    /// Fetch page 1; only the first call does anything
    pub fn initialize(&mut self) -> TriggerOutcome {
        if self.phase.is_fetching() {
            return TriggerOutcome::Ignored(IgnoreReason::FetchInFlight);
        }
        if self.initialized {
            return TriggerOutcome::Ignored(IgnoreReason::AlreadyInitialized);
        }

        self.initialized = true;
        self.start_fetch(1, FetchKind::Initial)
    }

    /// The sentinel came into view: advance to the next page if allowed
    ///
    /// The page advance is what starts the fetch, so calling this again while
    /// that fetch is outstanding is a no-op.
    pub fn scroll_trigger_visible(&mut self) -> TriggerOutcome {
        if let Some(reason) = self.scroll_blocker() {
            debug!("Scroll trigger ignored: {:?}", reason);
            return TriggerOutcome::Ignored(reason);
        }

        self.state.current_page += 1;
        self.page_advanced()
    }

    /// Throw the list away and start again from page 1
    ///
    /// Aborts any outstanding fetch and pending settle timer. Late events from
    /// before the reset are discarded.
    pub fn retry(&mut self) -> TriggerOutcome {
        self.cancel_pending();
        self.generation += 1;
        self.phase = FetchPhase::Idle;

        let sentinel_visible = self.state.sentinel_visible;
        self.state = ListState::new();
        self.state.sentinel_visible = sentinel_visible;
        self.initialized = true;

        info!("Retrying from page 1 (generation {})", self.generation);
        self.start_fetch(1, FetchKind::Initial)
    }

    // ========================================================================
    // Event loop
    // ========================================================================

    /// Wait for the next event and apply it
    ///
    /// Returns `None` only if the event channel has closed, which cannot happen
    /// while the controller is alive.
    pub async fn next_update(&mut self) -> Option<Update> {
        let event = self.events_rx.recv().await?;
        Some(self.apply(event))
    }

    /// Apply an already queued event without waiting
    pub fn try_next_update(&mut self) -> Option<Update> {
        let event = self.events_rx.try_recv().ok()?;
        Some(self.apply(event))
    }

    fn apply(&mut self, event: ControllerEvent) -> Update {
        let update = match event {
            ControllerEvent::Fetched { generation, .. } | ControllerEvent::Settled { generation }
                if generation != self.generation =>
            {
                warn!(
                    "Discarding stale event from generation {} (current {})",
                    generation, self.generation
                );
                return Update::Stale { generation };
            }
            ControllerEvent::Fetched {
                page, kind, result, ..
            } => {
                self.phase = FetchPhase::Idle;
                self.fetch_task = None;
                match result {
                    Ok(result) => self.on_page_loaded(kind, result),
                    Err(err) => self.on_fetch_failed(page, &err),
                }
            }
            ControllerEvent::Settled { .. } => {
                self.settle_task = None;
                self.state.initial_load_settled = true;
                debug!("Initial load settled, infinite scroll enabled");
                self.retrigger_if_visible();
                Update::Settled
            }
            ControllerEvent::SentinelVisibility(visible) => {
                self.state.sentinel_visible = visible;
                if visible {
                    self.scroll_trigger_visible();
                }
                Update::SentinelChanged { visible }
            }
        };

        self.publish();
        update
    }

    fn on_page_loaded(&mut self, kind: FetchKind, result: PageResult) -> Update {
        let page = result.page_number;
        let count = result.items.len();
        self.state.has_more = result.has_more();

        match kind {
            FetchKind::Initial => {
                self.state.items = result.items;
                self.state.current_page = 1;
                self.schedule_settle();
            }
            FetchKind::NextPage => {
                self.state.items.extend(result.items);
            }
        }

        info!(
            "Loaded page {} ({} users, {} total, has_more={})",
            page,
            count,
            self.state.items.len(),
            self.state.has_more
        );

        if kind == FetchKind::NextPage {
            self.retrigger_if_visible();
        }

        Update::PageLoaded {
            page,
            count,
            has_more: self.state.has_more,
        }
    }

    fn on_fetch_failed(&mut self, page: u32, err: &Error) -> Update {
        let message = self.config.messages.describe(err);
        warn!("Fetching page {} failed: {}", page, err);
        self.state.error = Some(message.clone());
        Update::FetchFailed { page, message }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn scroll_blocker(&self) -> Option<IgnoreReason> {
        if !self.state.initial_load_settled {
            Some(IgnoreReason::NotSettled)
        } else if self.state.error.is_some() {
            Some(IgnoreReason::ErrorPending)
        } else if self.phase.is_fetching() {
            Some(IgnoreReason::FetchInFlight)
        } else if !self.state.has_more {
            Some(IgnoreReason::NoMorePages)
        } else {
            None
        }
    }

    /// `current_page` moved past 1: fetch it
    fn page_advanced(&mut self) -> TriggerOutcome {
        let page = self.state.current_page;
        debug_assert!(page > 1, "page 1 is only fetched by initialize or retry");
        self.start_fetch(page, FetchKind::NextPage)
    }

    fn retrigger_if_visible(&mut self) {
        if self.state.sentinel_visible {
            self.scroll_trigger_visible();
        }
    }

    fn start_fetch(&mut self, page: u32, kind: FetchKind) -> TriggerOutcome {
        if let FetchPhase::Fetching { page: outstanding, .. } = self.phase {
            warn!(
                "Refusing to fetch page {} while page {} is in flight",
                page, outstanding
            );
            return TriggerOutcome::Ignored(IgnoreReason::FetchInFlight);
        }

        self.phase = FetchPhase::Fetching { page, kind };
        self.state.error = None;

        let fetcher = Arc::clone(&self.fetcher);
        let tx = self.events_tx.clone();
        let generation = self.generation;
        debug!("Fetching page {} ({:?}, generation {})", page, kind, generation);

        self.fetch_task = Some(tokio::spawn(async move {
            let result = fetcher.fetch_page(page).await;
            let _ = tx.send(ControllerEvent::Fetched {
                generation,
                page,
                kind,
                result,
            });
        }));

        self.publish();
        TriggerOutcome::Fetching { page }
    }

    fn schedule_settle(&mut self) {
        if let Some(task) = self.settle_task.take() {
            task.abort();
        }

        let tx = self.events_tx.clone();
        let generation = self.generation;
        let delay = self.config.settle_delay;

        self.settle_task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(ControllerEvent::Settled { generation });
        }));
    }

    fn cancel_pending(&mut self) {
        if let Some(task) = self.fetch_task.take() {
            task.abort();
        }
        if let Some(task) = self.settle_task.take() {
            task.abort();
        }
    }

    fn publish(&self) {
        self.view_tx.send_replace(self.view());
    }
}

impl Drop for PaginationController {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

impl std::fmt::Debug for PaginationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginationController")
            .field("state", &self.state)
            .field("phase", &self.phase)
            .field("generation", &self.generation)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn project(state: &ListState, phase: FetchPhase) -> ListView {
    ListView {
        items: state.items.clone(),
        is_loading: phase.is_fetching(),
        error: state.error.clone(),
        has_more: state.has_more,
        initial_load_settled: state.initial_load_settled,
        current_page: state.current_page,
    }
}
