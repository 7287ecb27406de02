//! Event-source capability of the host page.
//!
//! The host owns scheduling and dispatch; this crate only registers
//! callbacks. Handlers stay registered for the life of the host, and each
//! runs to completion before the next is dispatched (single-threaded
//! cooperative dispatch), which is why attached surfaces are shared through
//! `Rc<RefCell<_>>` rather than anything heavier.

use crate::scroll::ScrollMetrics;

/// Registration points exposed by the host's event loop.
///
/// `on_change` delivers the mode toggle's checked state after each change
/// event; `on_scroll` delivers the scroll metrics for each scroll event.
pub trait EventSource {
    fn on_change(&mut self, handler: Box<dyn FnMut(bool)>);
    fn on_scroll(&mut self, handler: Box<dyn FnMut(ScrollMetrics)>);
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;

    /// In-memory event source for tests: stores handlers and lets the test
    /// fire events by hand.
    #[derive(Default)]
    pub struct FakeEvents {
        change: Option<Box<dyn FnMut(bool)>>,
        scroll: Option<Box<dyn FnMut(ScrollMetrics)>>,
    }

    impl FakeEvents {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn fire_change(&mut self, checked: bool) {
            if let Some(handler) = self.change.as_mut() {
                handler(checked);
            }
        }

        pub fn fire_scroll(&mut self, metrics: ScrollMetrics) {
            if let Some(handler) = self.scroll.as_mut() {
                handler(metrics);
            }
        }
    }

    impl EventSource for FakeEvents {
        fn on_change(&mut self, handler: Box<dyn FnMut(bool)>) {
            self.change = Some(handler);
        }

        fn on_scroll(&mut self, handler: Box<dyn FnMut(ScrollMetrics)>) {
            self.scroll = Some(handler);
        }
    }
}
