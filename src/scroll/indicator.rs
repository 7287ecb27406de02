//! Scroll progress indication.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use super::progress::{ScrollMetrics, ShortPagePolicy};
use crate::events::EventSource;
use crate::surface::ProgressSurface;

/// Resizes a progress bar in step with the page's scroll position.
///
/// Each scroll event is handled in isolation: the metrics fully determine
/// the published percentage, nothing is accumulated between events.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollProgressIndicator {
    short_page: ShortPagePolicy,
}

impl ScrollProgressIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the policy for pages that cannot scroll, returning an updated
    /// indicator for chaining.
    pub fn short_page(mut self, policy: ShortPagePolicy) -> Self {
        self.short_page = policy;
        self
    }

    /// Applies one scroll event: computes the clamped percentage and writes
    /// it to the surface.
    pub fn handle_scroll<S: ProgressSurface>(&self, metrics: ScrollMetrics, surface: &mut S) {
        surface.set_progress(metrics.percent(self.short_page));
    }

    /// Registers the scroll handler on the host's event source.
    pub fn attach<E, S>(self, events: &mut E, surface: Rc<RefCell<S>>)
    where
        E: EventSource,
        S: ProgressSurface + 'static,
    {
        debug!("scroll progress indicator attached");
        events.on_scroll(Box::new(move |metrics| {
            self.handle_scroll(metrics, &mut *surface.borrow_mut());
        }));
    }
}
