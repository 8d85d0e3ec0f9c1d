//! Controller wiring against real markup. Run with
//! `wasm-pack test --headless --firefox`.

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{window, Element, HtmlElement};

use super::accordion::AccordionController;
use super::carousel::CarouselController;
use super::error::AttachError;
use crate::config::{AccordionOptions, CarouselOptions};

wasm_bindgen_test_configure!(run_in_browser);

fn fixture(markup: &str) -> Element {
    let document = window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    root.set_inner_html(markup);
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn find(root: &Element, selector: &str) -> Element {
    root.query_selector(selector).unwrap().unwrap()
}

fn click(root: &Element, selector: &str) {
    find(root, selector).dyn_into::<HtmlElement>().unwrap().click();
}

fn track_transform(root: &Element) -> String {
    find(root, ".carousel-track")
        .dyn_into::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value("transform")
        .unwrap()
}

const FAQ_MARKUP: &str = r#"
    <div class="faq-item" id="first">
        <button class="faq-question">First</button>
        <div class="faq-answer"><p>one</p></div>
    </div>
    <div class="faq-item" id="broken">
        <button class="faq-question">No answer</button>
    </div>
    <div class="faq-item" id="preset" open>
        <button class="faq-question">Preset</button>
        <div class="faq-answer"><p>three</p></div>
    </div>
"#;

#[wasm_bindgen_test]
fn malformed_faq_item_is_skipped_and_siblings_are_wired() {
    let root = fixture(FAQ_MARKUP);
    let _controller = AccordionController::attach(&root, AccordionOptions::default());

    let header = |id: &str| find(&root, &format!("#{} .faq-question", id));
    assert_eq!(header("first").get_attribute("aria-expanded").as_deref(), Some("false"));
    assert_eq!(header("broken").get_attribute("aria-expanded"), None);
    assert_eq!(header("preset").get_attribute("aria-expanded").as_deref(), Some("true"));

    click(&root, "#broken .faq-question");
    assert!(!find(&root, "#broken").has_attribute("open"));

    click(&root, "#first .faq-question");
    assert!(find(&root, "#first").has_attribute("open"));
    assert_eq!(header("first").get_attribute("aria-expanded").as_deref(), Some("true"));
}

#[wasm_bindgen_test]
fn preset_open_item_starts_at_natural_height() {
    let root = fixture(FAQ_MARKUP);
    let _controller = AccordionController::attach(&root, AccordionOptions::default());

    let answer = find(&root, "#preset .faq-answer").dyn_into::<HtmlElement>().unwrap();
    assert_eq!(answer.style().get_property_value("height").unwrap(), "auto");
}

#[wasm_bindgen_test]
fn collapse_keeps_item_open_until_it_finishes() {
    let root = fixture(FAQ_MARKUP);
    let _controller = AccordionController::attach(&root, AccordionOptions::default());

    click(&root, "#preset .faq-question");
    assert!(find(&root, "#preset").has_attribute("open"));
    assert_eq!(
        find(&root, "#preset .faq-question").get_attribute("aria-expanded").as_deref(),
        Some("true")
    );
}

#[wasm_bindgen_test]
fn carousel_without_track_stays_inert() {
    let root = fixture(r#"<div class="carousel-dots"></div>"#);
    let result = CarouselController::attach(&root, CarouselOptions::default());

    assert!(matches!(result, Err(AttachError::MissingElement(".carousel-track"))));
    assert_eq!(find(&root, ".carousel-dots").child_element_count(), 0);
}

#[wasm_bindgen_test]
fn carousel_without_slides_stays_inert() {
    let root = fixture(r#"<div class="carousel-track"></div><div class="carousel-dots"></div>"#);
    let result = CarouselController::attach(&root, CarouselOptions::default());

    assert!(matches!(result, Err(AttachError::NoSlides)));
    assert_eq!(find(&root, ".carousel-dots").child_element_count(), 0);
    assert_eq!(track_transform(&root), "");
}

const CAROUSEL_MARKUP: &str = r#"
    <div class="carousel-track">
        <div class="carousel-slide">a</div>
        <div class="carousel-slide">b</div>
        <div class="carousel-slide">c</div>
    </div>
    <button class="carousel-prev">prev</button>
    <button class="carousel-next">next</button>
    <div class="carousel-dots"></div>
"#;

fn active_dots(root: &Element) -> Vec<bool> {
    let dots = root.query_selector_all(".carousel-dot").unwrap();
    (0..dots.length())
        .map(|i| {
            let dot = dots.item(i).unwrap().dyn_into::<Element>().unwrap();
            let active = dot.class_list().contains("active");
            assert_eq!(
                dot.get_attribute("aria-current").as_deref(),
                Some(if active { "true" } else { "false" })
            );
            active
        })
        .collect()
}

#[wasm_bindgen_test]
fn dots_are_built_once_per_slide_with_first_active() {
    let root = fixture(CAROUSEL_MARKUP);
    let _controller = CarouselController::attach(&root, CarouselOptions::default()).unwrap();

    assert_eq!(find(&root, ".carousel-dots").child_element_count(), 3);
    assert_eq!(active_dots(&root), vec![true, false, false]);
    assert_eq!(track_transform(&root), "translateX(0%)");
}

#[wasm_bindgen_test]
fn clicking_a_dot_goes_to_its_slide() {
    let root = fixture(CAROUSEL_MARKUP);
    let _controller = CarouselController::attach(&root, CarouselOptions::default()).unwrap();

    click(&root, ".carousel-dot:nth-child(3)");
    assert_eq!(active_dots(&root), vec![false, false, true]);
    assert_eq!(track_transform(&root), "translateX(-200%)");
}

#[wasm_bindgen_test]
fn previous_from_first_slide_wraps_to_last() {
    let root = fixture(CAROUSEL_MARKUP);
    let _controller = CarouselController::attach(&root, CarouselOptions::default()).unwrap();

    click(&root, ".carousel-prev");
    assert_eq!(active_dots(&root), vec![false, false, true]);

    click(&root, ".carousel-next");
    assert_eq!(active_dots(&root), vec![true, false, false]);
}
