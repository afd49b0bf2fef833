use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::FaqEntry;
use crate::state::FaqAccordion;

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub entries: &'static [FaqEntry],
    pub accordion: FaqAccordion,
    pub on_toggle: Callback<usize>,
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: FaqEntry,
    is_open: bool,
    on_toggle: Callback<MouseEvent>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button
                class="faq-question"
                onclick={props.on_toggle.clone()}
                aria-expanded={props.is_open.to_string()}
            >
                <span class="question-text">{props.entry.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <div class="faq-answer-body">{props.entry.answer}</div>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    html! {
        <section id="faq" class="faq-section">
            <div class="faq-container">
                <h2 class="serif">{"Questions Fréquentes"}</h2>

                <div class="faq-list">
                    { for props.entries.iter().enumerate().map(|(index, entry)| {
                        let on_toggle = props.on_toggle.reform(move |_: MouseEvent| index);
                        html! {
                            <FaqItem
                                key={index}
                                entry={*entry}
                                is_open={props.accordion.is_open(index)}
                                {on_toggle}
                            />
                        }
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .faq-section { padding: 6rem 0; background: #fff; }
                .faq-container { max-width: 48rem; margin: 0 auto; padding: 0 1.5rem; }
                .faq-section h2 {
                    text-align: center;
                    font-size: 1.875rem;
                    color: #000;
                    margin: 0 0 3rem;
                }
                .faq-list { display: flex; flex-direction: column; gap: 1rem; }
                .faq-item {
                    border: 1px solid #E5E7EB;
                    border-radius: 2px;
                    overflow: hidden;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    padding: 1.25rem;
                    text-align: left;
                    background: #FAFAFA;
                    border: none;
                    cursor: pointer;
                    font: inherit;
                    transition: background 0.2s;
                }
                .faq-question:hover { background: #F9FAFB; }
                .question-text { font-weight: 500; color: #111827; }
                .toggle-icon { font-size: 1.25rem; color: #000; flex-shrink: 0; }
                .faq-answer {
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    transition: all 0.3s ease-in-out;
                }
                .faq-item.open .faq-answer { max-height: 20rem; opacity: 1; }
                .faq-answer-body {
                    padding: 1.25rem;
                    color: #4B5563;
                    line-height: 1.7;
                    border-top: 1px solid #F3F4F6;
                }
                @media (min-width: 768px) {
                    .faq-section h2 { font-size: 2.25rem; }
                }
                "#}
            </style>
        </section>
    }
}
