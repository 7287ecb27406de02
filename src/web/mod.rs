//! Browser document binding.
//!
//! Wires [`ThemeSwitcher`] and [`ScrollProgressIndicator`] to a real DOM
//! through `web-sys`: element lookup, the `prefers-color-scheme` media
//! query, and `change`/`scroll` listener registration. The listeners stay
//! registered for the life of the page, so their closures are leaked with
//! [`Closure::forget`].
//!
//! # Example
//!
//! ```rust,no_run
//! use pagechrome::web::DomChrome;
//!
//! DomChrome::new().bind().expect("page markup is missing an element");
//! ```

mod error;

pub use error::BindError;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlLinkElement, Window};

use crate::scroll::{ScrollMetrics, ScrollProgressIndicator, ShortPagePolicy};
use crate::surface::{ProgressSurface, ThemeSurface};
use crate::theme::{
    set_mode_detector, ColorMode, StylesheetPair, StylesheetVariant, ThemeSwitcher,
};

/// Configuration for binding the page behaviors to the document.
///
/// Defaults match the conventional markup: a `.switch-mode` label wrapping
/// the `#mode` checkbox, a `#theme-link` stylesheet link, and a `#scroller`
/// progress bar.
#[derive(Debug, Clone)]
pub struct DomChrome {
    toggle_selector: String,
    toggle_id: String,
    stylesheet_id: String,
    bar_id: String,
    stylesheets: StylesheetPair,
    short_page: ShortPagePolicy,
}

impl DomChrome {
    pub fn new() -> Self {
        Self {
            toggle_selector: ".switch-mode".to_string(),
            toggle_id: "mode".to_string(),
            stylesheet_id: "theme-link".to_string(),
            bar_id: "scroller".to_string(),
            stylesheets: StylesheetPair::new(),
            short_page: ShortPagePolicy::default(),
        }
    }

    /// Sets the selector for the element receiving `change` events.
    pub fn toggle_selector(mut self, selector: impl Into<String>) -> Self {
        self.toggle_selector = selector.into();
        self
    }

    /// Sets the id of the mode toggle checkbox.
    pub fn toggle_id(mut self, id: impl Into<String>) -> Self {
        self.toggle_id = id.into();
        self
    }

    /// Sets the id of the stylesheet link element.
    pub fn stylesheet_id(mut self, id: impl Into<String>) -> Self {
        self.stylesheet_id = id.into();
        self
    }

    /// Sets the id of the progress-bar element.
    pub fn bar_id(mut self, id: impl Into<String>) -> Self {
        self.bar_id = id.into();
        self
    }

    /// Sets the stylesheet asset pair.
    pub fn stylesheets(mut self, pair: StylesheetPair) -> Self {
        self.stylesheets = pair;
        self
    }

    /// Sets the policy for pages that cannot scroll.
    pub fn short_page(mut self, policy: ShortPagePolicy) -> Self {
        self.short_page = policy;
        self
    }

    /// Binds both behaviors.
    pub fn bind(&self) -> Result<(), BindError> {
        self.bind_theme()?;
        self.bind_scroll()
    }

    /// Binds the theme switcher: applies the OS preference, then follows
    /// the toggle control.
    pub fn bind_theme(&self) -> Result<(), BindError> {
        let document = document()?;

        let listener_target = query(&document, &self.toggle_selector)?;
        let toggle: HtmlInputElement = by_id(&document, &self.toggle_id)?
            .dyn_into()
            .map_err(|_| BindError::ElementType {
                selector: format!("#{}", self.toggle_id),
                expected: "checkbox input",
            })?;
        let link: HtmlLinkElement = by_id(&document, &self.stylesheet_id)?
            .dyn_into()
            .map_err(|_| BindError::ElementType {
                selector: format!("#{}", self.stylesheet_id),
                expected: "stylesheet link",
            })?;

        set_mode_detector(media_query_detector);

        let mut surface = DomThemeSurface {
            toggle: toggle.clone(),
            link,
            stylesheets: self.stylesheets.clone(),
        };
        let switcher = ThemeSwitcher::new();
        switcher.initialize(&mut surface);

        let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            switcher.handle_toggle(toggle.checked(), &mut surface);
        });
        listener_target
            .add_event_listener_with_callback("change", handler.as_ref().unchecked_ref())
            .map_err(|_| BindError::Listener { event: "change" })?;
        handler.forget();

        debug!("theme switcher bound to '{}'", self.toggle_selector);
        Ok(())
    }

    /// Binds the scroll progress indicator to the window's scroll events.
    pub fn bind_scroll(&self) -> Result<(), BindError> {
        let window = window()?;
        let document = window.document().ok_or(BindError::NoDocument)?;
        let bar: HtmlElement = by_id(&document, &self.bar_id)?
            .dyn_into()
            .map_err(|_| BindError::ElementType {
                selector: format!("#{}", self.bar_id),
                expected: "styleable element",
            })?;

        let indicator = ScrollProgressIndicator::new().short_page(self.short_page);
        let mut surface = DomProgressSurface { bar };

        let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            indicator.handle_scroll(read_metrics(&document), &mut surface);
        });
        window
            .add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref())
            .map_err(|_| BindError::Listener { event: "scroll" })?;
        handler.forget();

        debug!("scroll progress bound to '#{}'", self.bar_id);
        Ok(())
    }
}

impl Default for DomChrome {
    fn default() -> Self {
        Self::new()
    }
}

struct DomThemeSurface {
    toggle: HtmlInputElement,
    link: HtmlLinkElement,
    stylesheets: StylesheetPair,
}

impl ThemeSurface for DomThemeSurface {
    fn set_stylesheet(&mut self, variant: StylesheetVariant) {
        self.link.set_href(self.stylesheets.href(variant));
    }

    fn set_toggle_checked(&mut self, checked: bool) {
        self.toggle.set_checked(checked);
    }
}

struct DomProgressSurface {
    bar: HtmlElement,
}

impl ProgressSurface for DomProgressSurface {
    fn set_progress(&mut self, percent: crate::scroll::ProgressPercent) {
        let _ = self
            .bar
            .style()
            .set_property("width", &percent.width_style());
    }
}

/// Reads the current scroll metrics from the document.
///
/// The offset comes from the body when it scrolls, falling back to the
/// document element; the scrollable height is the document element's
/// content height minus its viewport height.
fn read_metrics(document: &Document) -> ScrollMetrics {
    let body_top = document.body().map(|body| body.scroll_top()).unwrap_or(0);
    let (root_top, height) = match document.document_element() {
        Some(root) => (root.scroll_top(), root.scroll_height() - root.client_height()),
        None => (0, 0),
    };
    let offset = if body_top != 0 { body_top } else { root_top };
    ScrollMetrics::new(f64::from(offset), f64::from(height))
}

fn media_query_detector() -> Option<ColorMode> {
    let query = web_sys::window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()??;
    if query.matches() {
        Some(ColorMode::Dark)
    } else {
        Some(ColorMode::Light)
    }
}

fn window() -> Result<Window, BindError> {
    web_sys::window().ok_or(BindError::NoWindow)
}

fn document() -> Result<Document, BindError> {
    window()?.document().ok_or(BindError::NoDocument)
}

fn by_id(document: &Document, id: &str) -> Result<Element, BindError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| BindError::MissingElement {
            selector: format!("#{}", id),
        })
}

fn query(document: &Document, selector: &str) -> Result<Element, BindError> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or_else(|| BindError::MissingElement {
            selector: selector.to_string(),
        })
}
