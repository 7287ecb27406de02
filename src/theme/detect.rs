//! Color-mode preference detection.

use dark_light::{detect as detect_os_mode, Mode as OsMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

/// A function that reports the host's color-mode preference.
///
/// Returns `None` when the host has no preference capability at all;
/// callers treat that the same as a light preference.
pub type ModeDetector = fn() -> Option<ColorMode>;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides the detector used to determine whether the user prefers a light or dark mode.
///
/// This is useful for testing or when the host supplies its own preference
/// capability (the browser binding installs a media-query detector).
///
/// # Example
///
/// ```rust
/// use pagechrome::{set_mode_detector, detect_color_mode, ColorMode};
///
/// set_mode_detector(|| Some(ColorMode::Dark));
/// assert_eq!(detect_color_mode(), Some(ColorMode::Dark));
///
/// // A host without the capability reports None; callers fall back to light.
/// set_mode_detector(|| None);
/// assert_eq!(detect_color_mode(), None);
/// ```
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR.lock().unwrap();
    *guard = detector;
}

/// Queries the current color-mode preference through the installed detector.
pub fn detect_color_mode() -> Option<ColorMode> {
    let detector = MODE_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_mode_detector() -> Option<ColorMode> {
    match detect_os_mode() {
        OsMode::Dark => Some(ColorMode::Dark),
        OsMode::Light => Some(ColorMode::Light),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_detector_override() {
        set_mode_detector(|| Some(ColorMode::Dark));
        assert_eq!(detect_color_mode(), Some(ColorMode::Dark));

        set_mode_detector(|| Some(ColorMode::Light));
        assert_eq!(detect_color_mode(), Some(ColorMode::Light));

        // Reset to default for other tests
        set_mode_detector(|| Some(ColorMode::Light));
    }

    #[test]
    #[serial]
    fn test_absent_capability_reports_none() {
        set_mode_detector(|| None);
        assert_eq!(detect_color_mode(), None);

        set_mode_detector(|| Some(ColorMode::Light));
    }
}
