use yew::prelude::*;

use crate::content::PROJECTS;

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    html! {
        <section id="portfolio" class="portfolio">
            <div class="container">
                <div class="portfolio-header">
                    <div>
                        <h2 class="serif">{"Réalisations Récentes"}</h2>
                        <p>{"Découvrez comment nous avons aidé d'autres entreprises à se démarquer."}</p>
                    </div>
                    <a href="#" class="portfolio-all">{"Voir tout le portfolio"}</a>
                </div>

                <div class="portfolio-grid">
                    { for PROJECTS.iter().map(|project| html! {
                        <div class="project" key={project.title}>
                            <div class="project-image">
                                <img src={project.image} alt={project.title} loading="lazy" />
                                <span class="project-arrow">{"↗"}</span>
                            </div>
                            <h3 class="serif">{project.title}</h3>
                            <p>{project.category}</p>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .portfolio { padding: 6rem 0; background: #FAFAFA; }
                .portfolio-header {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    margin-bottom: 4rem;
                }
                .portfolio-header h2 { font-size: 1.875rem; color: #000; margin: 0 0 1rem; }
                .portfolio-header p { color: #4B5563; max-width: 28rem; margin: 0; }
                .portfolio-all {
                    align-self: flex-start;
                    font-weight: 500;
                    border-bottom: 1px solid #000;
                    padding-bottom: 0.25rem;
                }
                .portfolio-grid { display: grid; gap: 2rem; }
                .project { cursor: pointer; }
                .project-image {
                    position: relative;
                    overflow: hidden;
                    aspect-ratio: 4 / 3;
                    border-radius: 2px;
                    margin-bottom: 1rem;
                }
                .project-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s;
                }
                .project:hover .project-image img { transform: scale(1.05); }
                .project-arrow {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: #fff;
                    border-radius: 9999px;
                    padding: 0.25rem 0.6rem;
                    opacity: 0;
                    transform: translateY(0.5rem);
                    transition: all 0.3s;
                }
                .project:hover .project-arrow { opacity: 1; transform: translateY(0); }
                .project h3 { font-size: 1.25rem; color: #000; margin: 0; }
                .project:hover h3 { text-decoration: underline; text-underline-offset: 4px; }
                .project p { font-size: 0.875rem; color: #6B7280; margin: 0.25rem 0 0; }
                @media (min-width: 768px) {
                    .portfolio-header { flex-direction: row; justify-content: space-between; align-items: flex-end; }
                    .portfolio-header h2 { font-size: 3rem; }
                    .portfolio-grid { grid-template-columns: repeat(3, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}
