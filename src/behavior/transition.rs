use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlElement, TransitionEvent};

use super::listener::Listener;

/// Completion handle for one CSS transition on one element.
///
/// Fires `on_complete` when the element reports `transitionend` for the
/// watched property, or when the fallback timer runs out, whichever comes
/// first. The callback may run twice (event then timer); callers guard with
/// a ticket. Dropping the handle detaches the listener and cancels the
/// timer, so replacing it is how a newer animation supersedes an older one.
pub struct PendingTransition {
    _listener: Listener,
    _fallback: Timeout,
}

impl PendingTransition {
    pub fn start<F>(element: &HtmlElement, property: &'static str, fallback_ms: u32, on_complete: F) -> Self
    where
        F: Fn() + 'static,
    {
        let on_complete = Rc::new(on_complete);
        let watched: EventTarget = element.clone().into();

        let listener = {
            let on_complete = on_complete.clone();
            Listener::new(element, "transitionend", move |event: Event| {
                // transitionend bubbles up from animated children too
                if event.target().as_ref() != Some(&watched) {
                    return;
                }
                let matches_property = event
                    .dyn_ref::<TransitionEvent>()
                    .map(|e| e.property_name() == property)
                    .unwrap_or(false);
                if matches_property {
                    on_complete();
                }
            })
        };

        let fallback = Timeout::new(fallback_ms, move || on_complete());

        Self {
            _listener: listener,
            _fallback: fallback,
        }
    }
}
