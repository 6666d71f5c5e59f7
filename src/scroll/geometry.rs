//! Intersection test for the scroll sentinel
//!
//! Works on vertical extents only. The viewport is grown by `margin` pixels
//! on both edges, then the sentinel counts as visible when it touches the
//! grown viewport and the visible fraction of it reaches `threshold`.
//! A zero-height sentinel is fully visible as soon as it touches.

use crate::config::UiConfig;

/// A vertical extent in pixels, `start <= end`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    /// Top edge
    pub start: f64,
    /// Bottom edge
    pub end: f64,
}

impl Span {
    /// Create a span from its top edge and height
    pub fn new(start: f64, height: f64) -> Self {
        Self {
            start,
            end: start + height.max(0.0),
        }
    }

    /// Height of the span
    pub fn height(&self) -> f64 {
        self.end - self.start
    }

    /// Grow the span by `amount` on both edges
    #[must_use]
    pub fn expand(&self, amount: f64) -> Self {
        Self {
            start: self.start - amount,
            end: self.end + amount,
        }
    }
}

/// How sentinel visibility is decided
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionOptions {
    /// Pixels added to each viewport edge
    pub margin: f64,
    /// Required visible fraction of the sentinel, in `[0, 1]`
    pub threshold: f64,
}

impl Default for IntersectionOptions {
    fn default() -> Self {
        Self::from_ui(&UiConfig::default())
    }
}

impl IntersectionOptions {
    /// Create options from the UI config
    pub fn from_ui(ui: &UiConfig) -> Self {
        Self {
            margin: ui.intersection_margin,
            threshold: ui.intersection_threshold.clamp(0.0, 1.0),
        }
    }

    /// Visible fraction of `target`, or `None` when it does not touch the viewport
    pub fn intersection_ratio(&self, target: Span, viewport: Span) -> Option<f64> {
        let root = viewport.expand(self.margin);
        let top = target.start.max(root.start);
        let bottom = target.end.min(root.end);

        if top > bottom {
            return None;
        }

        let height = target.height();
        if height <= 0.0 {
            Some(1.0)
        } else {
            Some((bottom - top) / height)
        }
    }

    /// Whether `target` counts as visible inside `viewport`
    pub fn is_visible(&self, target: Span, viewport: Span) -> bool {
        self.intersection_ratio(target, viewport)
            .is_some_and(|ratio| ratio >= self.threshold)
    }
}
