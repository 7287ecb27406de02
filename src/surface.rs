//! Surfaces: the writable attributes the behaviors own on the host page.
//!
//! Each handler holds exclusive write access to its surface, so no
//! coordination is needed between the two behaviors.

use crate::scroll::ProgressPercent;
use crate::theme::StylesheetVariant;

/// The page attributes written by [`ThemeSwitcher`](crate::ThemeSwitcher).
pub trait ThemeSurface {
    /// Activates one of the two stylesheets.
    fn set_stylesheet(&mut self, variant: StylesheetVariant);

    /// Sets the checked state of the mode toggle control.
    fn set_toggle_checked(&mut self, checked: bool);
}

/// The page attribute written by
/// [`ScrollProgressIndicator`](crate::ScrollProgressIndicator).
pub trait ProgressSurface {
    /// Sets the progress-bar fill to the given percentage.
    fn set_progress(&mut self, percent: ProgressPercent);
}
