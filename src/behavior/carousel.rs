//! Testimonial carousel: one active slide out of a fixed set.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, KeyboardEvent, TouchEvent};

use super::error::AttachError;
use super::listener::Listener;
use crate::config::{self, CarouselOptions};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Previous,
    GoTo(isize),
}

impl Navigation {
    /// What clicking the dot at `index` does.
    pub fn dot(index: usize) -> Self {
        Navigation::GoTo(index as isize)
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Navigation::Previous),
            "ArrowRight" => Some(Navigation::Next),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselState {
    current: usize,
    total: usize,
}

impl CarouselState {
    /// `None` when there is nothing to show.
    pub fn new(total: usize) -> Option<Self> {
        (total > 0).then_some(Self { current: 0, total })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Any index is accepted; it wraps around both ends.
    pub fn go_to(&mut self, index: isize) -> usize {
        self.current = index.rem_euclid(self.total as isize) as usize;
        self.current
    }

    pub fn next(&mut self) -> usize {
        self.go_to(self.current as isize + 1)
    }

    pub fn previous(&mut self) -> usize {
        self.go_to(self.current as isize - 1)
    }

    pub fn apply(&mut self, navigation: Navigation) -> usize {
        match navigation {
            Navigation::Next => self.next(),
            Navigation::Previous => self.previous(),
            Navigation::GoTo(index) => self.go_to(index),
        }
    }

    pub fn track_transform(&self) -> String {
        format!("translateX({}%)", -(self.current as i64) * 100)
    }

    /// One flag per slide; exactly one is set.
    pub fn indicators(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.total).map(move |index| index == self.current)
    }
}

/// Checks that the markup can host a carousel: a track holding at least one
/// slide. On failure nothing has been touched yet, so the carousel stays inert.
pub fn resolve_track<T>(
    track: Option<T>,
    count_slides: impl FnOnce(&T) -> usize,
) -> Result<(T, CarouselState), AttachError> {
    let track = track.ok_or(AttachError::MissingElement(config::CAROUSEL_TRACK_SELECTOR))?;
    let state = CarouselState::new(count_slides(&track)).ok_or(AttachError::NoSlides)?;
    Ok((track, state))
}

pub fn dot_label(index: usize) -> String {
    format!("Go to slide {}", index + 1)
}

/// A touch that started on the carousel and has not ended yet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Swipe {
    start_x: f64,
    threshold: f64,
}

impl Swipe {
    pub fn begin(start_x: f64, threshold: f64) -> Self {
        Self { start_x, threshold }
    }

    /// Short drags are taps or scrolls and produce nothing.
    pub fn finish(self, end_x: f64) -> Option<Navigation> {
        let delta = end_x - self.start_x;
        if delta.abs() <= self.threshold {
            None
        } else if delta < 0.0 {
            Some(Navigation::Next)
        } else {
            Some(Navigation::Previous)
        }
    }
}

struct Inner {
    state: CarouselState,
    track: HtmlElement,
    dots: Vec<Element>,
}

impl Inner {
    fn render(&self) {
        let _ = self
            .track
            .style()
            .set_property("transform", &self.state.track_transform());
        for (dot, active) in self.dots.iter().zip(self.state.indicators()) {
            let _ = dot.class_list().toggle_with_force("active", active);
            let _ = dot.set_attribute("aria-current", if active { "true" } else { "false" });
        }
    }
}

/// Owns the carousel's listeners; dropping it leaves the markup inert.
pub struct CarouselController {
    _listeners: Vec<Listener>,
}

impl CarouselController {
    pub fn attach(root: &Element, options: CarouselOptions) -> Result<Self, AttachError> {
        let track = root
            .query_selector(config::CAROUSEL_TRACK_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let (track, state) = resolve_track(track, |track: &HtmlElement| {
            track
                .query_selector_all(config::CAROUSEL_SLIDE_SELECTOR)
                .map(|slides| slides.length() as usize)
                .unwrap_or(0)
        })?;
        let slide_count = state.total();

        let dot_host = root.query_selector(config::CAROUSEL_DOTS_SELECTOR).ok().flatten();
        let dots = match &dot_host {
            Some(host) => build_dots(host, slide_count),
            None => Vec::new(),
        };

        let inner = Rc::new(RefCell::new(Inner { state, track, dots }));
        let mut listeners = Vec::new();

        for (index, dot) in inner.borrow().dots.iter().enumerate() {
            let inner = inner.clone();
            listeners.push(Listener::new(dot, "click", move |_| {
                navigate(&inner, Navigation::dot(index));
            }));
        }

        for (selector, navigation) in [
            (config::CAROUSEL_PREV_SELECTOR, Navigation::Previous),
            (config::CAROUSEL_NEXT_SELECTOR, Navigation::Next),
        ] {
            if let Some(button) = root.query_selector(selector).ok().flatten() {
                let inner = inner.clone();
                listeners.push(Listener::new(&button, "click", move |_| {
                    navigate(&inner, navigation);
                }));
            }
        }

        {
            let inner = inner.clone();
            listeners.push(Listener::new(root, "keydown", move |event: Event| {
                let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if let Some(navigation) = Navigation::from_key(&key_event.key()) {
                    event.prevent_default();
                    navigate(&inner, navigation);
                }
            }));
        }

        let swipe: Rc<Cell<Option<Swipe>>> = Rc::new(Cell::new(None));
        {
            let swipe = swipe.clone();
            let threshold = options.swipe_threshold();
            listeners.push(Listener::new(root, "touchstart", move |event: Event| {
                let start = event
                    .dyn_ref::<TouchEvent>()
                    .and_then(|e| e.touches().item(0))
                    .map(|touch| Swipe::begin(touch.client_x() as f64, threshold));
                swipe.set(start);
            }));
        }
        {
            let inner = inner.clone();
            listeners.push(Listener::new(root, "touchend", move |event: Event| {
                let Some(started) = swipe.take() else {
                    return;
                };
                let end_x = event
                    .dyn_ref::<TouchEvent>()
                    .and_then(|e| e.changed_touches().item(0))
                    .map(|touch| touch.client_x() as f64);
                if let Some(navigation) = end_x.and_then(|x| started.finish(x)) {
                    navigate(&inner, navigation);
                }
            }));
        }

        inner.borrow().render();
        info!("Carousel attached with {} slide(s)", inner.borrow().state.total());

        Ok(Self {
            _listeners: listeners,
        })
    }
}

fn navigate(inner: &Rc<RefCell<Inner>>, navigation: Navigation) {
    let mut inner = inner.borrow_mut();
    inner.state.apply(navigation);
    debug!("Carousel showing slide {} of {}", inner.state.current() + 1, inner.state.total());
    inner.render();
}

fn build_dots(host: &Element, count: usize) -> Vec<Element> {
    let Some(document) = host.owner_document() else {
        return Vec::new();
    };
    host.set_inner_html("");

    let mut dots = Vec::with_capacity(count);
    for index in 0..count {
        // Stop rather than skip so dot positions keep matching slide indices
        let Ok(dot) = document.create_element("button") else {
            debug!("Could not create carousel dot {}", index);
            break;
        };
        let _ = dot.set_attribute("type", "button");
        dot.set_class_name("carousel-dot");
        let _ = dot.set_attribute("aria-label", &dot_label(index));
        if host.append_child(&dot).is_err() {
            break;
        }
        dots.push(dot);
    }
    dots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five() -> CarouselState {
        CarouselState::new(5).unwrap()
    }

    #[test]
    fn empty_carousel_has_no_state() {
        assert!(CarouselState::new(0).is_none());
    }

    #[test]
    fn starts_on_first_slide() {
        let state = five();
        assert_eq!(state.current(), 0);
        assert_eq!(state.track_transform(), "translateX(0%)");
    }

    #[test]
    fn go_to_wraps_both_ends() {
        let mut state = five();
        assert_eq!(state.go_to(-1), 4);
        assert_eq!(state.go_to(5), 0);
        assert_eq!(state.go_to(3), 3);
        assert_eq!(state.go_to(12), 2);
        assert_eq!(state.go_to(-7), 3);
    }

    #[test]
    fn next_total_times_is_a_full_cycle() {
        let mut state = five();
        state.go_to(2);
        for _ in 0..state.total() {
            state.next();
        }
        assert_eq!(state.current(), 2);
    }

    #[test]
    fn previous_from_first_lands_on_last() {
        let mut state = five();
        assert_eq!(state.previous(), 4);
        assert_eq!(state.track_transform(), "translateX(-400%)");
    }

    #[test]
    fn single_slide_stays_put() {
        let mut state = CarouselState::new(1).unwrap();
        assert_eq!(state.next(), 0);
        assert_eq!(state.previous(), 0);
    }

    #[test]
    fn exactly_one_indicator_is_active() {
        let mut state = five();
        state.go_to(3);
        let flags: Vec<bool> = state.indicators().collect();
        assert_eq!(flags, vec![false, false, false, true, false]);
    }

    #[test]
    fn missing_track_leaves_carousel_inert() {
        let result = resolve_track(None::<()>, |_| 5);
        assert_eq!(result, Err(AttachError::MissingElement(".carousel-track")));
    }

    #[test]
    fn empty_track_leaves_carousel_inert() {
        let result = resolve_track(Some("track"), |_| 0);
        assert_eq!(result, Err(AttachError::NoSlides));
    }

    #[test]
    fn track_with_slides_starts_at_first() {
        let (track, state) = resolve_track(Some("track"), |_| 4).unwrap();
        assert_eq!(track, "track");
        assert_eq!(state.total(), 4);
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn one_dot_per_slide_with_first_active() {
        let state = five();
        let flags: Vec<bool> = state.indicators().collect();
        assert_eq!(flags.len(), state.total());
        assert_eq!(flags.iter().filter(|active| **active).count(), 1);
        assert!(flags[0]);
        assert_eq!(dot_label(0), "Go to slide 1");
        assert_eq!(dot_label(4), "Go to slide 5");
    }

    #[test]
    fn clicking_a_dot_jumps_to_its_slide() {
        let mut state = five();
        state.next();
        assert_eq!(state.apply(Navigation::dot(3)), 3);
        assert_eq!(state.apply(Navigation::dot(0)), 0);
        assert_eq!(state.track_transform(), "translateX(0%)");
    }

    #[test]
    fn tap_with_negative_threshold_option_does_nothing() {
        let options = CarouselOptions {
            swipe_threshold_px: -1.0,
        };
        let swipe = Swipe::begin(120.0, options.swipe_threshold());
        assert_eq!(swipe.finish(120.0), None);
    }

    #[test]
    fn arrow_keys_map_to_navigation() {
        assert_eq!(Navigation::from_key("ArrowLeft"), Some(Navigation::Previous));
        assert_eq!(Navigation::from_key("ArrowRight"), Some(Navigation::Next));
        assert_eq!(Navigation::from_key("Enter"), None);
    }

    #[test]
    fn short_swipe_is_ignored() {
        let mut state = five();
        let swipe = Swipe::begin(200.0, 50.0);
        assert_eq!(swipe.finish(160.0), None);
        assert_eq!(swipe.finish(250.0), None); // exactly the threshold
        assert_eq!(state.current(), 0);
        if let Some(navigation) = swipe.finish(160.0) {
            state.apply(navigation);
        }
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn leftward_swipe_advances_one_slide() {
        let mut state = five();
        let navigation = Swipe::begin(200.0, 50.0).finish(140.0).unwrap();
        assert_eq!(navigation, Navigation::Next);
        assert_eq!(state.apply(navigation), 1);
    }

    #[test]
    fn rightward_swipe_goes_back() {
        let navigation = Swipe::begin(100.0, 50.0).finish(160.0);
        assert_eq!(navigation, Some(Navigation::Previous));
    }
}
