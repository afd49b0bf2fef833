use yew::prelude::*;

// The form is presentational only; nothing is sent anywhere.
#[function_component(Cta)]
pub fn cta() -> Html {
    html! {
        <section id="contact" class="cta">
            <div class="cta-rule"></div>

            <div class="cta-inner">
                <h2 class="serif">{"Prêt à élever vos standards ?"}</h2>
                <p class="cta-lead">
                    {"Ne laissez pas un site web médiocre freiner la croissance de votre entreprise. Discutons de votre vision."}
                </p>

                <form class="cta-form">
                    <div>
                        <label for="email">{"Email Professionnel"}</label>
                        <input type="email" id="email" placeholder="vous@entreprise.com" />
                    </div>
                    <div>
                        <label for="project">{"Détails du projet"}</label>
                        <textarea id="project" rows="3" placeholder="Je souhaite créer un site pour..."></textarea>
                    </div>
                    <button type="button" class="cta-submit">
                        {"Demander un audit gratuit →"}
                    </button>
                    <p class="cta-note">{"Réponse sous 24h. Pas de spam, promis."}</p>
                </form>
            </div>

            <style>
                {r#"
                .cta {
                    position: relative;
                    padding: 6rem 0;
                    background: #F8F8FF;
                    overflow: hidden;
                }
                .cta-rule {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 1px;
                    background: linear-gradient(to right, transparent, #D1D5DB, transparent);
                }
                .cta-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    text-align: center;
                }
                .cta h2 { font-size: 2.25rem; color: #000; line-height: 1.25; margin: 0 0 1.5rem; }
                .cta-lead { font-size: 1.25rem; font-weight: 300; color: #4B5563; margin: 0 0 2.5rem; }
                .cta-form {
                    max-width: 28rem;
                    margin: 0 auto;
                    text-align: left;
                    background: #fff;
                    padding: 2rem;
                    border-radius: 2px;
                    border: 1px solid #F3F4F6;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .cta-form label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #374151;
                    margin-bottom: 0.25rem;
                }
                .cta-form input, .cta-form textarea {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    border: 1px solid #E5E7EB;
                    border-radius: 2px;
                    background: #FAFAFA;
                    font: inherit;
                    outline: none;
                }
                .cta-form input:focus, .cta-form textarea:focus { border-color: #000; }
                .cta-submit {
                    width: 100%;
                    background: #000;
                    color: #fff;
                    font-weight: 700;
                    padding: 1rem;
                    border: none;
                    border-radius: 2px;
                    cursor: pointer;
                    font: inherit;
                    transition: background 0.2s;
                }
                .cta-submit:hover { background: #1F2937; }
                .cta-note { font-size: 0.75rem; text-align: center; color: #9CA3AF; margin: 0.5rem 0 0; }
                @media (min-width: 768px) {
                    .cta h2 { font-size: 3.75rem; }
                }
                "#}
            </style>
        </section>
    }
}
