//! Stylesheet references and the dark/light asset pair.

use serde::{Deserialize, Serialize};

use super::detect::ColorMode;

/// Which of the two stylesheets is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylesheetVariant {
    Light,
    Dark,
}

impl StylesheetVariant {
    /// Maps a toggle control's checked state to a variant.
    ///
    /// Checked means dark, unchecked means light.
    pub fn for_toggle(checked: bool) -> Self {
        if checked {
            StylesheetVariant::Dark
        } else {
            StylesheetVariant::Light
        }
    }
}

impl From<ColorMode> for StylesheetVariant {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Light => StylesheetVariant::Light,
            ColorMode::Dark => StylesheetVariant::Dark,
        }
    }
}

/// The pair of stylesheet asset paths a page switches between.
///
/// Defaults to the conventional `light.css` / `dark.css` pair; custom paths
/// can be set fluently.
///
/// # Example
///
/// ```rust
/// use pagechrome::{StylesheetPair, StylesheetVariant};
///
/// let pair = StylesheetPair::new()
///     .light("assets/day.css")
///     .dark("assets/night.css");
///
/// assert_eq!(pair.href(StylesheetVariant::Dark), "assets/night.css");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylesheetPair {
    light: String,
    dark: String,
}

impl StylesheetPair {
    /// Creates the default `light.css` / `dark.css` pair.
    pub fn new() -> Self {
        Self {
            light: "light.css".to_string(),
            dark: "dark.css".to_string(),
        }
    }

    /// Sets the light stylesheet path, returning an updated pair for chaining.
    pub fn light(mut self, href: impl Into<String>) -> Self {
        self.light = href.into();
        self
    }

    /// Sets the dark stylesheet path, returning an updated pair for chaining.
    pub fn dark(mut self, href: impl Into<String>) -> Self {
        self.dark = href.into();
        self
    }

    /// Resolves a variant to its asset path.
    pub fn href(&self, variant: StylesheetVariant) -> &str {
        match variant {
            StylesheetVariant::Light => &self.light,
            StylesheetVariant::Dark => &self.dark,
        }
    }
}

impl Default for StylesheetPair {
    fn default() -> Self {
        Self::new()
    }
}
