//! Animated FAQ disclosure items.
//!
//! [`Disclosure`] is the per-item state machine; [`AccordionController`]
//! binds a list of them to existing `.faq-item` markup. Items toggle
//! independently, so any number of them can be open at once.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::error::AttachError;
use super::listener::Listener;
use super::transition::PendingTransition;
use crate::config::{self, AccordionOptions};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Closed,
    Opening,
    Open,
    Closing,
}

/// Height constraint on the content region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Extent {
    Zero,
    Px(f64),
    /// No fixed height; the content sizes itself.
    Natural,
}

impl Extent {
    pub fn to_css(self) -> String {
        match self {
            Extent::Zero => "0px".to_string(),
            Extent::Px(px) => format!("{}px", px),
            Extent::Natural => "auto".to_string(),
        }
    }
}

/// Heights read from the content element just before a toggle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Heights {
    /// Full height of the content (`scrollHeight`).
    pub natural: f64,
    /// Height currently on screen (`offsetHeight`), which differs from
    /// `natural` while an animation is still in flight.
    pub rendered: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionTicket {
    generation: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animation {
    pub from: Extent,
    pub to: Extent,
    pub ticket: TransitionTicket,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// Opening finished; release the fixed height.
    Expanded,
    /// Closing finished; drop the `open` attribute.
    Collapsed,
    /// The ticket belongs to an animation that has been superseded or
    /// already settled.
    Stale,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Disclosure {
    phase: Phase,
    extent: Extent,
    generation: u64,
}

impl Disclosure {
    pub fn new(open_at_load: bool) -> Self {
        let (phase, extent) = if open_at_load {
            (Phase::Open, Extent::Natural)
        } else {
            (Phase::Closed, Extent::Zero)
        };
        Self {
            phase,
            extent,
            generation: 0,
        }
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Semantic open state: stays true until a collapse has finished.
    pub fn is_open(&self) -> bool {
        self.phase != Phase::Closed
    }

    /// Value for the header's `aria-expanded`. Follows the semantic flag, so
    /// assistive tech hears "collapsed" only once the collapse has finished.
    pub fn aria_expanded(&self) -> &'static str {
        if self.is_open() {
            "true"
        } else {
            "false"
        }
    }

    /// Direction the item is heading in, which is what a toggle flips.
    pub fn expanded(&self) -> bool {
        matches!(self.phase, Phase::Opening | Phase::Open)
    }

    pub fn toggle(&mut self, heights: Heights) -> Animation {
        self.generation += 1;
        let ticket = TransitionTicket {
            generation: self.generation,
        };
        let from = Extent::Px(heights.rendered);

        let to = if self.expanded() {
            self.phase = Phase::Closing;
            Extent::Zero
        } else {
            self.phase = Phase::Opening;
            Extent::Px(heights.natural)
        };
        self.extent = to;

        Animation { from, to, ticket }
    }

    pub fn complete(&mut self, ticket: TransitionTicket) -> Completion {
        if ticket.generation != self.generation {
            return Completion::Stale;
        }
        match self.phase {
            Phase::Opening => {
                self.phase = Phase::Open;
                self.extent = Extent::Natural;
                Completion::Expanded
            }
            Phase::Closing => {
                self.phase = Phase::Closed;
                self.extent = Extent::Zero;
                Completion::Collapsed
            }
            Phase::Open | Phase::Closed => Completion::Stale,
        }
    }
}

struct Item {
    container: Element,
    header: Element,
    content: HtmlElement,
    state: Disclosure,
    pending: Option<PendingTransition>,
}

impl Item {
    fn discover(container: Element) -> Result<Self, AttachError> {
        let header = require(
            container.query_selector(config::FAQ_HEADER_SELECTOR).ok().flatten(),
            config::FAQ_HEADER_SELECTOR,
        )?;
        let content = require(
            container
                .query_selector(config::FAQ_CONTENT_SELECTOR)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok()),
            config::FAQ_CONTENT_SELECTOR,
        )?;

        let state = Disclosure::new(container.has_attribute("open"));
        let item = Self {
            container,
            header,
            content,
            state,
            pending: None,
        };
        item.set_height(item.state.extent());
        item.sync_aria();
        Ok(item)
    }

    fn set_height(&self, extent: Extent) {
        let _ = self.content.style().set_property("height", &extent.to_css());
    }

    fn sync_aria(&self) {
        let _ = self
            .header
            .set_attribute("aria-expanded", self.state.aria_expanded());
    }
}

fn require<T>(found: Option<T>, selector: &'static str) -> Result<T, AttachError> {
    found.ok_or(AttachError::MissingElement(selector))
}

/// Keeps the items that could be discovered. A broken item is logged and
/// dropped without affecting its siblings.
fn keep_well_formed<T>(candidates: impl IntoIterator<Item = Result<T, AttachError>>) -> Vec<T> {
    candidates
        .into_iter()
        .filter_map(|candidate| match candidate {
            Ok(item) => Some(item),
            Err(e) => {
                debug!("Skipping FAQ item: {}", e);
                None
            }
        })
        .collect()
}

/// Owns the header listeners; each listener keeps its item alive, and
/// dropping the controller releases every pending transition with them.
pub struct AccordionController {
    _listeners: Vec<Listener>,
}

impl AccordionController {
    /// Wires every well-formed `.faq-item` under `root`. Malformed items are
    /// skipped; the rest still work.
    pub fn attach(root: &Element, options: AccordionOptions) -> Self {
        let mut listeners = Vec::new();

        let nodes = match root.query_selector_all(config::FAQ_ITEM_SELECTOR) {
            Ok(nodes) => nodes,
            Err(_) => {
                debug!("FAQ root rejected item selector");
                return Self {
                    _listeners: listeners,
                };
            }
        };

        let candidates = (0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(Item::discover);

        for item in keep_well_formed(candidates) {
            let item = Rc::new(RefCell::new(item));
            let header = item.borrow().header.clone();
            let handle = item.clone();
            listeners.push(Listener::new(&header, "click", move |event| {
                event.prevent_default();
                toggle(&handle, options);
            }));
        }

        info!("Accordion attached to {} item(s)", listeners.len());
        Self {
            _listeners: listeners,
        }
    }
}

fn toggle(item: &Rc<RefCell<Item>>, options: AccordionOptions) {
    let mut guard = item.borrow_mut();
    // Dropping the old handle detaches its listener and timer.
    guard.pending = None;

    let heights = Heights {
        natural: guard.content.scroll_height() as f64,
        rendered: guard.content.offset_height() as f64,
    };
    let animation = guard.state.toggle(heights);

    if guard.state.is_open() {
        let _ = guard.container.set_attribute("open", "");
    }
    guard.sync_aria();

    guard.set_height(animation.from);
    // Reading layout commits the start height so the change below animates.
    let _ = guard.content.offset_height();
    guard.set_height(animation.to);

    let weak: Weak<RefCell<Item>> = Rc::downgrade(item);
    let ticket = animation.ticket;
    guard.pending = Some(PendingTransition::start(
        &guard.content,
        "height",
        options.fallback_delay_ms(),
        move || {
            if let Some(item) = weak.upgrade() {
                finish(&item, ticket);
            }
        },
    ));
}

fn finish(item: &Rc<RefCell<Item>>, ticket: TransitionTicket) {
    let mut guard = item.borrow_mut();
    match guard.state.complete(ticket) {
        Completion::Expanded => guard.set_height(Extent::Natural),
        Completion::Collapsed => {
            guard.set_height(Extent::Zero);
            let _ = guard.container.remove_attribute("open");
            guard.sync_aria();
        }
        Completion::Stale => {}
    }
}
