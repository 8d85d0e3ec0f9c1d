use log::debug;
use web_sys::Element;
use yew::prelude::*;

use crate::behavior::carousel::CarouselController;
use crate::config;
use crate::content::Testimonial;

#[derive(Properties, PartialEq)]
pub struct TestimonialCarouselProps {
    pub testimonials: &'static [Testimonial],
    #[prop_or("Patient stories".into())]
    pub label: AttrValue,
}

#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel(props: &TestimonialCarouselProps) -> Html {
    let root_ref = use_node_ref();

    {
        let root_ref = root_ref.clone();
        use_effect_with_deps(
            move |_| {
                let controller = root_ref.cast::<Element>().and_then(|root| {
                    match CarouselController::attach(&root, config::options_from(&root)) {
                        Ok(controller) => Some(controller),
                        Err(e) => {
                            debug!("Carousel left inert: {}", e);
                            None
                        }
                    }
                });
                move || drop(controller)
            },
            (),
        );
    }

    html! {
        <div
            class="carousel"
            ref={root_ref}
            tabindex="0"
            role="region"
            aria-roledescription="carousel"
            aria-label={props.label.clone()}
        >
            <div class="carousel-viewport">
                <div class="carousel-track">
                    { for props.testimonials.iter().map(|testimonial| html! {
                        <figure class="carousel-slide">
                            <blockquote>{testimonial.quote}</blockquote>
                            <figcaption>
                                <strong>{testimonial.author}</strong>
                                <span>{testimonial.detail}</span>
                            </figcaption>
                        </figure>
                    }) }
                </div>
            </div>
            <button class="carousel-prev" type="button" aria-label="Previous story">{"‹"}</button>
            <button class="carousel-next" type="button" aria-label="Next story">{"›"}</button>
            <div class="carousel-dots"></div>

            <style>
                {r#"
                .carousel {
                    position: relative;
                    max-width: 760px;
                    margin: 0 auto;
                    outline: none;
                }

                .carousel:focus-visible {
                    box-shadow: 0 0 0 3px rgba(14, 116, 144, 0.4);
                    border-radius: 16px;
                }

                .carousel-viewport {
                    overflow: hidden;
                    border-radius: 16px;
                }

                .carousel-track {
                    display: flex;
                    transition: transform 0.5s ease;
                    touch-action: pan-y;
                }

                .carousel-slide {
                    flex: 0 0 100%;
                    margin: 0;
                    padding: 2.5rem 3rem;
                    box-sizing: border-box;
                    background: #f0f9ff;
                }

                .carousel-slide blockquote {
                    margin: 0 0 1.5rem;
                    font-size: 1.25rem;
                    line-height: 1.6;
                    color: #0f172a;
                }

                .carousel-slide figcaption span {
                    display: block;
                    color: #64748b;
                    font-size: 0.9rem;
                }

                .carousel-prev,
                .carousel-next {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    background: #ffffff;
                    border: 1px solid rgba(14, 116, 144, 0.2);
                    border-radius: 50%;
                    width: 2.5rem;
                    height: 2.5rem;
                    font-size: 1.5rem;
                    cursor: pointer;
                }

                .carousel-prev { left: -1.25rem; }
                .carousel-next { right: -1.25rem; }

                .carousel-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 1rem;
                }

                .carousel-dot {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    border: none;
                    background: #cbd5e1;
                    cursor: pointer;
                    padding: 0;
                }

                .carousel-dot.active {
                    background: #0e7490;
                }
                "#}
            </style>
        </div>
    }
}
