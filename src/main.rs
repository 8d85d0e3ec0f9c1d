use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;

mod config;
mod content;
mod scroll;
mod behavior {
    pub mod error;
    pub mod listener;
    pub mod transition;
    pub mod accordion;
    pub mod carousel;
    #[cfg(all(test, target_arch = "wasm32"))]
    mod browser_tests;
}
mod components {
    pub mod carousel;
    pub mod faq_list;
    pub mod footer;
    pub mod hero_video;
}
mod pages {
    pub mod home;
    pub mod faq;
}

use components::footer::Footer;
use content::CLINIC_NAME;
use pages::{faq::Faq, home::Home};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/faq")]
    Faq,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        },
    }
}

/// Home page sections reachable from the nav, as (element id, label).
const NAV_SECTIONS: &[(&str, &str)] = &[
    ("services", "Services"),
    ("stories", "Patient Stories"),
    ("contact", "Contact"),
];

fn menu_class(open: bool) -> &'static str {
    if open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let section_links = NAV_SECTIONS.iter().map(|&(id, label)| {
        let menu_open = menu_open.clone();
        // Smooth-scroll when the section is on this page, otherwise let the
        // browser follow /#id and the home page picks the hash up.
        let onclick = Callback::from(move |e: MouseEvent| {
            menu_open.set(false);
            if scroll::scroll_to_section(id) {
                e.prevent_default();
            }
        });
        html! {
            <a class="nav-link" href={format!("/#{}", id)} onclick={onclick}>{label}</a>
        }
    });

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {CLINIC_NAME}
                </Link<Route>>

                <button
                    class="burger-menu"
                    aria-label="Menu"
                    aria-expanded={if *menu_open { "true" } else { "false" }}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class(*menu_open)}>
                    { for section_links }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Faq} classes="nav-link">
                            {"FAQ"}
                        </Link<Route>>
                    </div>
                    <a class="nav-call-button" href={format!("tel:{}", content::CLINIC_PHONE)} onclick={close_menu}>
                        {"Call Us"}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 10;
                    background: rgba(255, 255, 255, 0.95);
                    border-bottom: 1px solid rgba(14, 116, 144, 0.1);
                }

                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    font-weight: 700;
                    color: #0e7490;
                    text-decoration: none;
                }

                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }

                .nav-link {
                    color: #0f172a;
                    text-decoration: none;
                }

                .nav-call-button {
                    padding: 0.5rem 1.25rem;
                    border-radius: 999px;
                    background: #0e7490;
                    color: #ffffff;
                    text-decoration: none;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }

                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #0f172a;
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1.5rem;
                        background: #ffffff;
                    }

                    .nav-right.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting {} site", CLINIC_NAME);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_class_reflects_open_state() {
        assert_eq!(menu_class(false), "nav-right");
        assert_eq!(menu_class(true), "nav-right mobile-menu-open");
    }

    #[test]
    fn nav_section_links_resolve_to_their_ids() {
        for (id, _) in NAV_SECTIONS {
            let href = format!("/#{}", id);
            assert_eq!(scroll::section_id(&href), Some(*id));
        }
    }
}
