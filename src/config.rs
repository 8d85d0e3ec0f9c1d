use log::{warn, Level};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use web_sys::Element;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Verbose console output while developing with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

/// Root attribute that may carry a JSON object overriding controller options.
pub const OPTIONS_ATTRIBUTE: &str = "data-options";

pub const FAQ_ITEM_SELECTOR: &str = ".faq-item";
pub const FAQ_HEADER_SELECTOR: &str = ".faq-question";
pub const FAQ_CONTENT_SELECTOR: &str = ".faq-answer";

pub const CAROUSEL_TRACK_SELECTOR: &str = ".carousel-track";
pub const CAROUSEL_SLIDE_SELECTOR: &str = ".carousel-slide";
pub const CAROUSEL_PREV_SELECTOR: &str = ".carousel-prev";
pub const CAROUSEL_NEXT_SELECTOR: &str = ".carousel-next";
pub const CAROUSEL_DOTS_SELECTOR: &str = ".carousel-dots";

#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AccordionOptions {
    /// Must match the `height` transition duration in the stylesheet.
    pub transition_ms: u32,
    /// Extra wait before assuming `transitionend` is never coming.
    pub fallback_grace_ms: u32,
}

impl Default for AccordionOptions {
    fn default() -> Self {
        Self {
            transition_ms: 300,
            fallback_grace_ms: 100,
        }
    }
}

impl AccordionOptions {
    pub fn fallback_delay_ms(&self) -> u32 {
        self.transition_ms.saturating_add(self.fallback_grace_ms)
    }
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselOptions {
    /// Horizontal travel a touch must exceed to count as a swipe.
    pub swipe_threshold_px: f64,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            swipe_threshold_px: 50.0,
        }
    }
}

impl CarouselOptions {
    /// Threshold usable for swipe detection. Negative or non-finite
    /// overrides would turn plain taps into swipes, so they fall back to
    /// the default.
    pub fn swipe_threshold(&self) -> f64 {
        if self.swipe_threshold_px.is_finite() && self.swipe_threshold_px >= 0.0 {
            self.swipe_threshold_px
        } else {
            warn!("Ignoring swipe threshold {}", self.swipe_threshold_px);
            Self::default().swipe_threshold_px
        }
    }
}

pub fn options_from<T>(element: &Element) -> T
where
    T: DeserializeOwned + Default,
{
    match element.get_attribute(OPTIONS_ATTRIBUTE) {
        Some(raw) => parse_options(&raw),
        None => T::default(),
    }
}

pub fn parse_options<T>(raw: &str) -> T
where
    T: DeserializeOwned + Default,
{
    serde_json::from_str(raw).unwrap_or_else(|e| {
        warn!("Ignoring invalid {} value {:?}: {}", OPTIONS_ATTRIBUTE, raw, e);
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accordion_defaults_match_stylesheet() {
        let options = AccordionOptions::default();
        assert_eq!(options.transition_ms, 300);
        assert_eq!(options.fallback_delay_ms(), 400);
    }

    #[test]
    fn partial_override_keeps_remaining_defaults() {
        let options: AccordionOptions = parse_options(r#"{"transitionMs": 500}"#);
        assert_eq!(options.transition_ms, 500);
        assert_eq!(options.fallback_grace_ms, 100);
    }

    #[test]
    fn carousel_threshold_override() {
        let options: CarouselOptions = parse_options(r#"{"swipeThresholdPx": 80}"#);
        assert_eq!(options.swipe_threshold_px, 80.0);
    }

    #[test]
    fn negative_swipe_threshold_uses_default() {
        let options: CarouselOptions = parse_options(r#"{"swipeThresholdPx": -1}"#);
        assert_eq!(options.swipe_threshold(), 50.0);
    }

    #[test]
    fn zero_swipe_threshold_is_allowed() {
        let options: CarouselOptions = parse_options(r#"{"swipeThresholdPx": 0}"#);
        assert_eq!(options.swipe_threshold(), 0.0);
        let nan = CarouselOptions {
            swipe_threshold_px: f64::NAN,
        };
        assert_eq!(nan.swipe_threshold(), 50.0);
    }

    #[test]
    fn invalid_json_falls_back_to_defaults() {
        let options: CarouselOptions = parse_options("{not json");
        assert_eq!(options, CarouselOptions::default());
    }

    #[test]
    fn fallback_delay_saturates() {
        let options = AccordionOptions {
            transition_ms: u32::MAX,
            fallback_grace_ms: 10,
        };
        assert_eq!(options.fallback_delay_ms(), u32::MAX);
    }
}
