use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{CLINIC_ADDRESS, CLINIC_NAME, CLINIC_PHONE};
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div>
                    <strong>{CLINIC_NAME}</strong>
                    <p>{CLINIC_ADDRESS}</p>
                    <p><a href={format!("tel:{}", CLINIC_PHONE)}>{CLINIC_PHONE}</a></p>
                </div>
                <div class="footer-links">
                    <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
                    <Link<Route> to={Route::Faq}>{"FAQ"}</Link<Route>>
                </div>
            </div>
            <p class="footer-copy">{format!("© {} {}", year, CLINIC_NAME)}</p>
            <style>
                {r#"
                .site-footer {
                    background: #0f172a;
                    color: #cbd5e1;
                    padding: 3rem 2rem 1.5rem;
                    margin-top: 4rem;
                }

                .footer-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    flex-wrap: wrap;
                    gap: 2rem;
                }

                .site-footer a {
                    color: #67e8f9;
                    text-decoration: none;
                }

                .footer-links {
                    display: flex;
                    gap: 1.5rem;
                }

                .footer-copy {
                    text-align: center;
                    font-size: 0.85rem;
                    color: #64748b;
                    margin-top: 2rem;
                }
                "#}
            </style>
        </footer>
    }
}
