use yew::prelude::*;

use crate::components::faq_list::FaqList;
use crate::content::{CLINIC_PHONE, FAQ_ENTRIES};

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <div class="faq-page">
            <section class="faq-hero">
                <h1>{"Frequently Asked Questions"}</h1>
                <p>{"Everything you need to know before your first visit"}</p>
            </section>

            <section class="faq-section">
                <FaqList entries={FAQ_ENTRIES} />
                <p class="faq-contact">
                    {"Still wondering about something? Call us at "}
                    <a href={format!("tel:{}", CLINIC_PHONE)}>{CLINIC_PHONE}</a>
                    {"."}
                </p>
            </section>

            <style>
                {r#"
                .faq-page {
                    padding-top: 74px;
                    min-height: 100vh;
                }

                .faq-hero {
                    text-align: center;
                    padding: 4rem 2rem 2rem;
                }

                .faq-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                    color: #0f172a;
                }

                .faq-hero p {
                    font-size: 1.2rem;
                    color: #64748b;
                    max-width: 600px;
                    margin: 0 auto;
                }

                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 2rem;
                }

                .faq-contact {
                    text-align: center;
                    color: #475569;
                    margin-top: 2rem;
                }

                @media (max-width: 768px) {
                    .faq-hero h1 {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
