use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::carousel::TestimonialCarousel;
use crate::components::faq_list::FaqList;
use crate::components::hero_video::HeroVideo;
use crate::content::{
    CLINIC_ADDRESS, CLINIC_NAME, CLINIC_PHONE, FAQ_ENTRIES, FAQ_PREVIEW_COUNT, HERO_POSTER_SRC,
    HERO_VIDEO_SRC, SERVICES, TESTIMONIALS,
};
use crate::scroll;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    // Honor /#section links arriving from other pages once the sections exist
    {
        use_effect_with_deps(
            move |_| {
                if !scroll::scroll_to_location_hash() {
                    if let Some(window) = web_sys::window() {
                        window.scroll_to_with_x_and_y(0.0, 0.0);
                    }
                }
                || ()
            },
            (),
        );
    }

    let preview = &FAQ_ENTRIES[..FAQ_PREVIEW_COUNT.min(FAQ_ENTRIES.len())];

    html! {
        <div class="home-page">
            <section class="hero">
                <HeroVideo src={HERO_VIDEO_SRC} poster={HERO_POSTER_SRC} />
                <div class="hero-content">
                    <h1>{"Move better. Hurt less. Get back to what you love."}</h1>
                    <p>{format!("One-on-one physical therapy at {}.", CLINIC_NAME)}</p>
                    <a class="hero-cta" href={format!("tel:{}", CLINIC_PHONE)}>{"Call to book"}</a>
                </div>
            </section>

            <section id="services" class="home-section">
                <h2>{"What we treat"}</h2>
                <div class="service-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <div class="service-card">
                            <h3>{service.title}</h3>
                            <p>{service.summary}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="stories" class="home-section">
                <h2>{"Patient stories"}</h2>
                <TestimonialCarousel testimonials={TESTIMONIALS} />
            </section>

            <section id="faq" class="home-section">
                <h2>{"Common questions"}</h2>
                <FaqList entries={preview} />
                <p class="more-link">
                    <Link<Route> to={Route::Faq}>{"See all questions"}</Link<Route>>
                </p>
            </section>

            <section id="contact" class="home-section contact-section">
                <h2>{"Visit us"}</h2>
                <p>{CLINIC_ADDRESS}</p>
                <p>{"Call "}<a href={format!("tel:{}", CLINIC_PHONE)}>{CLINIC_PHONE}</a>{" to book an evaluation."}</p>
            </section>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 80vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    color: #ffffff;
                    text-align: center;
                }

                .hero::after {
                    content: '';
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(15, 23, 42, 0.2), rgba(15, 23, 42, 0.7));
                    z-index: -1;
                }

                .hero-content {
                    max-width: 720px;
                    padding: 0 2rem;
                }

                .hero-content h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }

                .hero-cta {
                    display: inline-block;
                    margin-top: 1.5rem;
                    padding: 0.9rem 2rem;
                    border-radius: 999px;
                    background: #0e7490;
                    color: #ffffff;
                    text-decoration: none;
                }

                .home-section {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 4rem 2rem 0;
                    scroll-margin-top: 80px;
                }

                .home-section h2 {
                    font-size: 2.25rem;
                    text-align: center;
                    margin-bottom: 2rem;
                    color: #0f172a;
                }

                .service-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                }

                .service-card {
                    background: #ffffff;
                    border: 1px solid rgba(14, 116, 144, 0.15);
                    border-radius: 12px;
                    padding: 1.5rem;
                }

                .more-link {
                    text-align: center;
                    margin-top: 1.5rem;
                }

                .contact-section {
                    text-align: center;
                }

                @media (max-width: 768px) {
                    .hero-content h1 {
                        font-size: 2.1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
