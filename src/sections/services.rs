use yew::prelude::*;

use crate::content::SERVICES;

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="services">
            <div class="container">
                <div class="section-heading">
                    <h2 class="serif">{"Notre Expertise"}</h2>
                    <p>{"Nous combinons l'art du design et la science de la conversion pour propulser votre entreprise."}</p>
                </div>

                <div class="services-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <div
                            class="service-card"
                            key={service.title}
                            style={format!("background: {};", service.background)}
                        >
                            <div class="service-icon">{service.icon}</div>
                            <h3 class="serif">{service.title}</h3>
                            <p>{service.description}</p>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .services { padding: 6rem 0; background: #fff; }
                .section-heading {
                    text-align: center;
                    max-width: 48rem;
                    margin: 0 auto 5rem;
                }
                .section-heading h2 {
                    font-size: 1.875rem;
                    color: #000;
                    margin: 0 0 1.5rem;
                }
                .section-heading p { color: #4B5563; font-size: 1.125rem; }
                .services-grid { display: grid; gap: 1.5rem; }
                .service-card {
                    padding: 2rem;
                    border-radius: 2px;
                    border: 1px solid #F9FAFB;
                    transition: all 0.3s;
                }
                .service-card:hover {
                    border-color: #E5E7EB;
                    transform: translateY(-0.5rem);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .service-icon {
                    font-size: 2rem;
                    margin-bottom: 1.5rem;
                    transition: transform 0.3s;
                }
                .service-card:hover .service-icon { transform: scale(1.1); }
                .service-card h3 { font-size: 1.25rem; color: #111827; margin: 0 0 0.75rem; }
                .service-card p { color: #6B7280; font-size: 0.875rem; line-height: 1.7; }
                @media (min-width: 768px) {
                    .services-grid { grid-template-columns: repeat(2, 1fr); }
                    .section-heading h2 { font-size: 3rem; }
                }
                @media (min-width: 1024px) {
                    .services-grid { grid-template-columns: repeat(4, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}
