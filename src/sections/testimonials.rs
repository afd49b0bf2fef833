use yew::prelude::*;

use crate::content::TESTIMONIALS;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section id="testimonials" class="testimonials">
            <div class="container">
                <h2 class="serif">{"Ce que disent nos clients"}</h2>

                <div class="testimonials-grid">
                    { for TESTIMONIALS.iter().map(|item| html! {
                        <div class="testimonial" key={item.author}>
                            <span class="quote-mark serif">{"“"}</span>
                            <p class="testimonial-quote">{format!("\"{}\"", item.quote)}</p>
                            <div class="testimonial-author">
                                <div class="avatar"></div>
                                <div>
                                    <p class="author-name">{item.author}</p>
                                    <p class="author-role">{item.role}</p>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .testimonials { padding: 6rem 0; background: #FAF0E6; }
                .testimonials h2 {
                    text-align: center;
                    font-size: 1.875rem;
                    color: #000;
                    margin: 0 0 4rem;
                }
                .testimonials-grid { display: grid; gap: 2rem; }
                .testimonial {
                    position: relative;
                    background: #fff;
                    padding: 2rem;
                    border-radius: 2px;
                    border: 1px solid #F3F4F6;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }
                .quote-mark {
                    position: absolute;
                    top: 1rem;
                    right: 1.5rem;
                    font-size: 4rem;
                    line-height: 1;
                    color: #E5E7EB;
                }
                .testimonial-quote {
                    position: relative;
                    z-index: 10;
                    color: #374151;
                    font-style: italic;
                    line-height: 1.7;
                    margin: 0 0 1.5rem;
                }
                .testimonial-author { display: flex; align-items: center; gap: 0.75rem; }
                .avatar {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    background: #E5E7EB;
                    flex-shrink: 0;
                }
                .author-name { font-weight: 700; font-size: 0.875rem; color: #111827; margin: 0; }
                .author-role { font-size: 0.75rem; color: #6B7280; margin: 0; }
                @media (min-width: 768px) {
                    .testimonials h2 { font-size: 2.25rem; }
                    .testimonials-grid { grid-template-columns: repeat(3, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}
