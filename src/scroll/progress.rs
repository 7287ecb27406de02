//! Scroll-position arithmetic.

use serde::{Deserialize, Serialize};

/// What the progress bar shows on a page that cannot scroll.
///
/// When the scrollable height is zero the scrolled fraction is undefined
/// (`0 / 0`), so the bar's value is a policy choice, defaulting to an empty
/// bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortPagePolicy {
    /// Report 0%: nothing has been scrolled.
    #[default]
    Empty,
    /// Report 100%: all of the (trivial) content is in view.
    Full,
}

impl ShortPagePolicy {
    fn percent(self) -> ProgressPercent {
        match self {
            ShortPagePolicy::Empty => ProgressPercent::new(0.0),
            ShortPagePolicy::Full => ProgressPercent::new(100.0),
        }
    }
}

/// One scroll event's payload: how far the page is scrolled and how far it
/// could scroll.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollMetrics {
    /// Vertical distance scrolled from the top, in pixels.
    pub offset: f64,
    /// Total content height minus the visible viewport height; the maximum
    /// possible offset.
    pub scrollable_height: f64,
}

impl ScrollMetrics {
    pub fn new(offset: f64, scrollable_height: f64) -> Self {
        Self {
            offset,
            scrollable_height,
        }
    }

    /// The scrolled fraction as a clamped percentage.
    ///
    /// Hosts report out-of-range offsets during elastic overscroll, so the
    /// result is always clamped into `[0, 100]`. A non-positive or
    /// non-finite scrollable height falls back to the short-page policy.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pagechrome::{ScrollMetrics, ShortPagePolicy};
    ///
    /// let percent = ScrollMetrics::new(50.0, 200.0).percent(ShortPagePolicy::Empty);
    /// assert_eq!(percent.width_style(), "25%");
    ///
    /// let clamped = ScrollMetrics::new(300.0, 200.0).percent(ShortPagePolicy::Empty);
    /// assert_eq!(clamped.width_style(), "100%");
    /// ```
    pub fn percent(&self, short_page: ShortPagePolicy) -> ProgressPercent {
        if !self.scrollable_height.is_finite() || self.scrollable_height <= 0.0 {
            return short_page.percent();
        }
        ProgressPercent::new(self.offset / self.scrollable_height * 100.0)
    }
}

/// A percentage guaranteed to lie in `[0, 100]`.
///
/// Construction clamps; non-finite input collapses to `0`, so a
/// `ProgressPercent` is always a defined, in-range value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct ProgressPercent(f64);

impl ProgressPercent {
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 100.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Formats the percentage as a CSS width value, e.g. `"25%"`.
    pub fn width_style(self) -> String {
        format!("{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_scrolled() {
        let percent = ScrollMetrics::new(50.0, 200.0).percent(ShortPagePolicy::Empty);
        assert_eq!(percent.value(), 25.0);
        assert_eq!(percent.width_style(), "25%");
    }

    #[test]
    fn test_overscroll_clamps_to_full() {
        let percent = ScrollMetrics::new(300.0, 200.0).percent(ShortPagePolicy::Empty);
        assert_eq!(percent.value(), 100.0);
        assert_eq!(percent.width_style(), "100%");
    }

    #[test]
    fn test_negative_offset_clamps_to_zero() {
        let percent = ScrollMetrics::new(-40.0, 200.0).percent(ShortPagePolicy::Empty);
        assert_eq!(percent.value(), 0.0);
        assert_eq!(percent.width_style(), "0%");
    }

    #[test]
    fn test_zero_height_uses_policy() {
        let metrics = ScrollMetrics::new(0.0, 0.0);
        assert_eq!(metrics.percent(ShortPagePolicy::Empty).value(), 0.0);
        assert_eq!(metrics.percent(ShortPagePolicy::Full).value(), 100.0);
    }

    #[test]
    fn test_negative_height_uses_policy() {
        let metrics = ScrollMetrics::new(10.0, -5.0);
        assert_eq!(metrics.percent(ShortPagePolicy::Empty).value(), 0.0);
    }

    #[test]
    fn test_non_finite_input_is_defined() {
        let percent = ScrollMetrics::new(f64::NAN, f64::INFINITY).percent(ShortPagePolicy::Empty);
        assert_eq!(percent.value(), 0.0);

        let percent = ScrollMetrics::new(f64::NAN, 200.0).percent(ShortPagePolicy::Empty);
        assert_eq!(percent.value(), 0.0);
    }

    #[test]
    fn test_fractional_width_style() {
        let percent = ScrollMetrics::new(25.0, 200.0).percent(ShortPagePolicy::Empty);
        assert_eq!(percent.width_style(), "12.5%");
    }

    #[test]
    fn test_policy_serde_round_trip() {
        let json = serde_json::to_string(&ShortPagePolicy::Full).unwrap();
        assert_eq!(json, "\"full\"");
        let back: ShortPagePolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ShortPagePolicy::Full);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn percent_is_always_in_range(
            offset in -1e9f64..1e9,
            height in -1e9f64..1e9,
        ) {
            let percent = ScrollMetrics::new(offset, height)
                .percent(ShortPagePolicy::Empty)
                .value();

            prop_assert!(percent.is_finite());
            prop_assert!(
                (0.0..=100.0).contains(&percent),
                "percent {} out of range for offset {} height {}",
                percent, offset, height
            );
        }

        #[test]
        fn percent_is_monotonic_in_offset(
            s1 in 0.0f64..1e6,
            delta in 0.0f64..1e6,
            height in 1.0f64..1e6,
        ) {
            let s2 = s1 + delta;
            let p1 = ScrollMetrics::new(s1, height)
                .percent(ShortPagePolicy::Empty)
                .value();
            let p2 = ScrollMetrics::new(s2, height)
                .percent(ShortPagePolicy::Empty)
                .value();

            prop_assert!(
                p1 <= p2,
                "percent went down: {} at {} vs {} at {}",
                p1, s1, p2, s2
            );
        }

        #[test]
        fn constructor_clamps_everything(value in proptest::num::f64::ANY) {
            let percent = ProgressPercent::new(value).value();
            prop_assert!((0.0..=100.0).contains(&percent));
        }
    }
}
