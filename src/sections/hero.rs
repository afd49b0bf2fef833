use yew::prelude::*;

use crate::content::HERO_IMAGE;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-glow hero-glow-right"></div>
            <div class="hero-glow hero-glow-left"></div>

            <div class="container hero-inner">
                <div class="hero-copy fade-in-up">
                    <div class="hero-badge">
                        <span class="pulse-dot"></span>
                        <span>{"Agence Web Premium en RDC"}</span>
                    </div>

                    <h1 class="serif">
                        {"Votre site web ne doit pas seulement être beau."}<br />
                        <span class="hero-accent">{"Il doit convertir."}</span>
                    </h1>

                    <p class="hero-subtitle">
                        {"Nous transformons votre vision en une expérience digitale inoubliable. Design minimaliste, performance maximale, et une stratégie conçue pour capturer vos clients dès la première seconde."}
                    </p>

                    <div class="hero-actions">
                        <a href="#contact" class="btn-primary">{"Lancer votre projet →"}</a>
                        <a href="#portfolio" class="btn-secondary">{"Voir nos réalisations"}</a>
                    </div>
                </div>

                <div class="hero-visual fade-in-up delay-200">
                    <div class="hero-frame">
                        <img src={HERO_IMAGE} alt="Design Minimaliste" />
                        <div class="hero-stat">
                            <p class="hero-stat-label">{"Taux de conversion"}</p>
                            <p class="hero-stat-value">{"+150%"}</p>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    padding-top: 5rem;
                    overflow: hidden;
                    background: #FAFAFA;
                }
                .hero-glow {
                    position: absolute;
                    border-radius: 9999px;
                    pointer-events: none;
                }
                .hero-glow-right {
                    top: 0;
                    right: 0;
                    width: 50%;
                    height: 100%;
                    background: #F0FFFF;
                    opacity: 0.4;
                    filter: blur(120px);
                    transform: translate(33%, -25%);
                }
                .hero-glow-left {
                    bottom: 0;
                    left: 0;
                    width: 33%;
                    height: 66%;
                    background: #FAF0E6;
                    opacity: 0.5;
                    filter: blur(100px);
                    transform: translate(-25%, 25%);
                }
                .hero-inner {
                    position: relative;
                    z-index: 10;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 3rem;
                }
                .hero-copy { text-align: center; }
                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    background: #F3F4F6;
                    border: 1px solid #E5E7EB;
                    margin-bottom: 1.5rem;
                    font-size: 0.75rem;
                    font-weight: 500;
                    text-transform: uppercase;
                    letter-spacing: 0.025em;
                    color: #4B5563;
                }
                .pulse-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: #22C55E;
                    animation: pulse 2s infinite;
                }
                @keyframes pulse { 50% { opacity: 0.5; } }
                .hero h1 {
                    font-size: 2.25rem;
                    line-height: 1.1;
                    color: #111827;
                    margin: 0 0 1.5rem;
                }
                .hero-accent {
                    font-style: italic;
                    font-weight: 300;
                    color: #4B5563;
                }
                .hero-subtitle {
                    font-size: 1.125rem;
                    font-weight: 300;
                    line-height: 1.7;
                    color: #4B5563;
                    max-width: 42rem;
                    margin: 0 auto 2.5rem;
                }
                .hero-actions {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                }
                .btn-primary {
                    background: #000;
                    color: #fff;
                    padding: 1rem 2rem;
                    border-radius: 2px;
                    font-weight: 500;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    transition: all 0.2s;
                }
                .btn-primary:hover { background: #1F2937; transform: translateY(-4px); }
                .btn-secondary {
                    padding: 1rem 2rem;
                    border-radius: 2px;
                    font-weight: 500;
                    color: #111827;
                    border: 1px solid #E5E7EB;
                    transition: all 0.2s;
                }
                .btn-secondary:hover { border-color: #9CA3AF; background: #fff; }
                .hero-visual { position: relative; }
                .hero-frame {
                    position: relative;
                    background: #fff;
                    padding: 0.5rem;
                    border-radius: 2px;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    transform: rotate(3deg);
                    transition: transform 0.5s;
                }
                .hero-frame:hover { transform: rotate(0); }
                .hero-frame img {
                    display: block;
                    width: 100%;
                    height: auto;
                    filter: grayscale(1);
                    transition: filter 0.5s;
                }
                .hero-frame img:hover { filter: none; }
                .hero-stat {
                    position: absolute;
                    bottom: -1.5rem;
                    left: -1.5rem;
                    background: #000;
                    color: #fff;
                    padding: 1rem;
                    border-radius: 2px;
                }
                .hero-stat p { margin: 0; }
                .hero-stat-label {
                    font-size: 0.75rem;
                    color: #D1D5DB;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }
                .hero-stat-value { font-weight: 700; font-size: 1.25rem; }
                @media (min-width: 768px) {
                    .hero-inner { flex-direction: row; gap: 5rem; }
                    .hero-copy { width: 60%; text-align: left; }
                    .hero-visual { width: 40%; }
                    .hero h1 { font-size: 3.75rem; }
                    .hero-subtitle { font-size: 1.25rem; margin-left: 0; }
                    .hero-actions { flex-direction: row; }
                }
                "#}
            </style>
        </section>
    }
}
