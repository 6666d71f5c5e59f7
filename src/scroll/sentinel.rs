//! Handle the view uses to report sentinel visibility

use super::geometry::{IntersectionOptions, Span};
use crate::pagination::ControllerEvent;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

/// Opaque handle for the end-of-list sentinel
///
/// Cloneable; every clone reports to the same controller. Only changes in
/// visibility are forwarded, so calling [`SentinelHandle::observe`] on every
/// scroll event is cheap. Reports sent after the controller is dropped are
/// discarded.
#[derive(Debug, Clone)]
pub struct SentinelHandle {
    options: IntersectionOptions,
    events: UnboundedSender<ControllerEvent>,
    last: Arc<Mutex<Option<bool>>>,
}

impl SentinelHandle {
    pub(crate) fn new(options: IntersectionOptions, events: UnboundedSender<ControllerEvent>) -> Self {
        Self {
            options,
            events,
            last: Arc::new(Mutex::new(None)),
        }
    }

    /// Intersection options used by [`SentinelHandle::observe`]
    pub fn options(&self) -> IntersectionOptions {
        self.options
    }

    /// Report the sentinel and viewport positions; returns the computed visibility
    pub fn observe(&self, sentinel: Span, viewport: Span) -> bool {
        let visible = self.options.is_visible(sentinel, viewport);
        self.set_visible(visible);
        visible
    }

    /// Report visibility directly
    pub fn set_visible(&self, visible: bool) {
        {
            let mut last = match self.last.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            if *last == Some(visible) {
                return;
            }
            *last = Some(visible);
        }

        debug!("Sentinel visibility changed: {}", visible);
        let _ = self.events.send(ControllerEvent::SentinelVisibility(visible));
    }

    /// Last reported visibility, if any
    pub fn last_reported(&self) -> Option<bool> {
        match self.last.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
