//! Page chrome behaviors for generated document sites.
//!
//! Two independent, stateless behaviors:
//!
//! - [`ThemeSwitcher`]: picks the dark or light stylesheet from the OS
//!   color-scheme preference at startup and from the mode toggle control
//!   afterwards
//! - [`ScrollProgressIndicator`]: resizes a progress bar in step with how
//!   far the page is scrolled
//!
//! Both are written against small traits instead of a concrete document:
//! [`ThemeSurface`] and [`ProgressSurface`] are the writable attributes the
//! behaviors own, and [`EventSource`] is the host's callback registration.
//! That keeps the core logic a pure function of event payloads, testable
//! without a rendering environment. The `web` feature adds a
//! [`web::DomChrome`] binding that implements the surfaces over a real
//! browser document.
//!
//! # Example
//!
//! ```rust
//! use pagechrome::{
//!     ProgressPercent, ProgressSurface, ScrollMetrics, ScrollProgressIndicator,
//!     ShortPagePolicy,
//! };
//!
//! struct Bar {
//!     width: String,
//! }
//!
//! impl ProgressSurface for Bar {
//!     fn set_progress(&mut self, percent: ProgressPercent) {
//!         self.width = percent.width_style();
//!     }
//! }
//!
//! let mut bar = Bar { width: "0%".into() };
//! let indicator = ScrollProgressIndicator::new().short_page(ShortPagePolicy::Empty);
//!
//! indicator.handle_scroll(ScrollMetrics::new(50.0, 200.0), &mut bar);
//! assert_eq!(bar.width, "25%");
//! ```

mod events;
mod scroll;
mod surface;
mod theme;

#[cfg(feature = "web")]
pub mod web;

pub use events::EventSource;
pub use scroll::{ProgressPercent, ScrollMetrics, ScrollProgressIndicator, ShortPagePolicy};
pub use surface::{ProgressSurface, ThemeSurface};
pub use theme::{
    detect_color_mode, set_mode_detector, ColorMode, ModeDetector, StylesheetPair,
    StylesheetVariant, ThemeSwitcher,
};
