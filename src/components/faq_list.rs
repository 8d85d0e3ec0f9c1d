use log::debug;
use web_sys::Element;
use yew::prelude::*;

use crate::behavior::accordion::AccordionController;
use crate::config;
use crate::content::FaqEntry;

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: &'static [FaqEntry],
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let list_ref = use_node_ref();

    // Wire the rendered markup once; the controller lives until unmount.
    {
        let list_ref = list_ref.clone();
        use_effect_with_deps(
            move |_| {
                let controller = match list_ref.cast::<Element>() {
                    Some(root) => Some(AccordionController::attach(&root, config::options_from(&root))),
                    None => {
                        debug!("FAQ list not mounted, accordion not attached");
                        None
                    }
                };
                move || drop(controller)
            },
            (),
        );
    }

    html! {
        <div class="faq-list" ref={list_ref}>
            { for props.entries.iter().map(|entry| html! {
                <div class="faq-item" open={entry.open_at_load}>
                    <button class="faq-question" type="button">
                        <span class="question-text">{entry.question}</span>
                        <span class="toggle-icon" aria-hidden="true">{"+"}</span>
                    </button>
                    <div class="faq-answer">
                        <div class="faq-answer-inner">
                            { for entry.answer.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                        </div>
                    </div>
                </div>
            }) }

            <style>
                {r#"
                .faq-list {
                    max-width: 800px;
                    margin: 0 auto;
                }

                .faq-item {
                    background: #ffffff;
                    border: 1px solid rgba(14, 116, 144, 0.15);
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                }

                .faq-item:hover {
                    border-color: rgba(14, 116, 144, 0.4);
                }

                .faq-question {
                    width: 100%;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    color: #0f172a;
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    color: #0e7490;
                    transition: transform 0.3s ease;
                }

                .faq-item[open] .toggle-icon {
                    transform: rotate(45deg);
                }

                /* duration must match AccordionOptions::transition_ms */
                .faq-answer {
                    overflow: hidden;
                    transition: height 0.3s ease;
                }

                .faq-answer-inner {
                    padding: 0 1.5rem 1.25rem;
                }

                .faq-answer p {
                    color: #475569;
                    line-height: 1.6;
                    margin: 0 0 0.75rem;
                }

                @media (prefers-reduced-motion: reduce) {
                    .faq-answer {
                        transition: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}
