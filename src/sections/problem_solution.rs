use yew::prelude::*;

use crate::content::{PROBLEMS, SOLUTIONS};

#[function_component(ProblemSolution)]
pub fn problem_solution() -> Html {
    html! {
        <section class="problem-solution">
            <div class="container ps-grid">
                <div class="ps-problem fade-in-up">
                    <h2 class="serif">
                        {"Pourquoi la plupart des sites web "}
                        <span class="struck">{"échouent"}</span>
                        {" ?"}
                    </h2>
                    <p class="ps-lead">
                        {"Nous vivons à l'ère de l'attention courte. Vos visiteurs vous jugent en moins de 0.5 secondes. Un site lent, mal conçu ou générique ne vous coûte pas seulement de l'image, il vous coûte de l'argent."}
                    </p>
                    <div class="ps-pains">
                        { for PROBLEMS.iter().map(|point| html! {
                            <div class="ps-pain" key={point.title}>
                                <span class="ps-warn">{"⚠"}</span>
                                <p><strong>{point.title}</strong>{" "}{point.text}</p>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="ps-solution fade-in-up delay-200">
                    <div class="ps-card">
                        <h3 class="serif">{"L'Approche Elegant."}</h3>
                        <ul>
                            { for SOLUTIONS.iter().map(|point| html! {
                                <li key={point.title}>
                                    <span class="ps-check">{"✓"}</span>
                                    <div>
                                        <h4>{point.title}</h4>
                                        <p>{point.text}</p>
                                    </div>
                                </li>
                            }) }
                        </ul>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .problem-solution {
                    padding: 6rem 0;
                    background: #fff;
                    overflow: hidden;
                }
                .ps-grid {
                    display: grid;
                    gap: 4rem;
                    align-items: center;
                }
                .ps-problem h2 {
                    font-size: 1.875rem;
                    color: #111827;
                    margin: 0 0 1.5rem;
                }
                .struck {
                    color: #EF4444;
                    text-decoration: line-through;
                    text-decoration-color: #000;
                    opacity: 0.6;
                }
                .ps-lead { color: #4B5563; line-height: 1.7; }
                .ps-pains {
                    background: #FAFAFA;
                    padding: 1.5rem;
                    border-left: 4px solid #E5E7EB;
                    border-radius: 2px;
                }
                .ps-pain {
                    display: flex;
                    gap: 0.75rem;
                    font-size: 0.875rem;
                    color: #374151;
                }
                .ps-warn { color: #9CA3AF; }
                .ps-card {
                    background: #000;
                    color: #fff;
                    padding: 2.5rem;
                    border-radius: 2px;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .ps-card h3 { font-size: 1.5rem; margin: 0 0 1.5rem; }
                .ps-card ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .ps-card li { display: flex; gap: 1rem; }
                .ps-check {
                    flex-shrink: 0;
                    width: 2.25rem;
                    height: 2.25rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.1);
                    color: #4ADE80;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .ps-card h4 { margin: 0; font-size: 1.125rem; }
                .ps-card p { margin: 0.25rem 0 0; color: #9CA3AF; font-size: 0.875rem; }
                @media (min-width: 768px) {
                    .ps-grid { grid-template-columns: 1fr 1fr; }
                    .ps-problem h2 { font-size: 2.25rem; }
                }
                "#}
            </style>
        </section>
    }
}
