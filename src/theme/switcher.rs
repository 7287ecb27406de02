//! Dark/light theme switching driven by the mode toggle control.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use super::detect::{detect_color_mode, ColorMode};
use super::stylesheet::StylesheetVariant;
use crate::events::EventSource;
use crate::surface::ThemeSurface;

/// Switches the page between its dark and light stylesheets.
///
/// On [`initialize`](ThemeSwitcher::initialize) the host's color-mode
/// preference decides the starting state: a dark preference checks the
/// toggle and activates the dark stylesheet, anything else leaves the
/// surface's light defaults untouched. After that, every toggle event fully
/// determines the active stylesheet from the control's checked state alone,
/// so rapid toggling needs no debouncing.
///
/// # Example
///
/// ```rust
/// use pagechrome::{
///     set_mode_detector, ColorMode, StylesheetVariant, ThemeSurface, ThemeSwitcher,
/// };
///
/// struct Page {
///     stylesheet: StylesheetVariant,
///     toggle_checked: bool,
/// }
///
/// impl ThemeSurface for Page {
///     fn set_stylesheet(&mut self, variant: StylesheetVariant) {
///         self.stylesheet = variant;
///     }
///     fn set_toggle_checked(&mut self, checked: bool) {
///         self.toggle_checked = checked;
///     }
/// }
///
/// let mut page = Page {
///     stylesheet: StylesheetVariant::Light,
///     toggle_checked: false,
/// };
///
/// set_mode_detector(|| Some(ColorMode::Dark));
/// ThemeSwitcher::new().initialize(&mut page);
/// assert_eq!(page.stylesheet, StylesheetVariant::Dark);
/// assert!(page.toggle_checked);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeSwitcher;

impl ThemeSwitcher {
    pub fn new() -> Self {
        Self
    }

    /// Applies the host's color-mode preference to the surface.
    ///
    /// Only a reported dark preference mutates anything; a light preference,
    /// or a host without the preference capability, leaves the default light
    /// state as is. This never fails.
    pub fn initialize<S: ThemeSurface>(&self, surface: &mut S) {
        match detect_color_mode() {
            Some(ColorMode::Dark) => {
                debug!("dark color-mode preference detected");
                surface.set_toggle_checked(true);
                surface.set_stylesheet(StylesheetVariant::Dark);
            }
            Some(ColorMode::Light) | None => {}
        }
    }

    /// Applies one toggle event: checked activates the dark stylesheet,
    /// unchecked the light one.
    pub fn handle_toggle<S: ThemeSurface>(&self, checked: bool, surface: &mut S) {
        surface.set_stylesheet(StylesheetVariant::for_toggle(checked));
    }

    /// Initializes the surface, then registers the toggle handler on the
    /// host's event source.
    pub fn attach<E, S>(self, events: &mut E, surface: Rc<RefCell<S>>)
    where
        E: EventSource,
        S: ThemeSurface + 'static,
    {
        self.initialize(&mut *surface.borrow_mut());
        debug!("theme switcher attached");
        events.on_change(Box::new(move |checked| {
            self.handle_toggle(checked, &mut *surface.borrow_mut());
        }));
    }
}
