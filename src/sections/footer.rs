use chrono::Datelike;
use yew::prelude::*;

use crate::content::{BRAND, CONTACT_EMAIL, FOOTER_LINKS, SOCIAL_LINKS};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <h3 class="serif">{format!("{}.", BRAND)}</h3>
                        <p>{"Agence de développement web premium basée en RDC. Nous créons des expériences digitales qui marquent les esprits et convertissent."}</p>
                    </div>

                    <div>
                        <h4>{"Liens"}</h4>
                        <ul>
                            { for FOOTER_LINKS.iter().map(|link| html! {
                                <li key={link.label}><a href={link.href}>{link.label}</a></li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h4>{"Contact"}</h4>
                        <ul>
                            <li>
                                {"✉ "}
                                <a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                            </li>
                            <li>{"Kinshasa, Gombe"}</li>
                            <li>{"RDC"}</li>
                        </ul>
                        <div class="footer-socials">
                            { for SOCIAL_LINKS.iter().map(|link| html! {
                                <a key={link.label} href={link.href} aria-label={link.label}>{link.label}</a>
                            }) }
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("© {} Elegant Digital Agency. Tous droits réservés.", year)}</p>
                    <div class="footer-legal">
                        <a href="#">{"Confidentialité"}</a>
                        <a href="#">{"Conditions"}</a>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: #fff;
                    border-top: 1px solid #F3F4F6;
                    padding: 4rem 0 2rem;
                }
                .footer-grid { display: grid; gap: 3rem; margin-bottom: 4rem; }
                .footer-brand h3 { font-size: 1.5rem; color: #000; margin: 0 0 1rem; }
                .footer-brand p { color: #6B7280; max-width: 20rem; line-height: 1.7; }
                .site-footer h4 { font-weight: 700; color: #000; margin: 0 0 1rem; }
                .site-footer ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    color: #6B7280;
                    font-size: 0.875rem;
                }
                .site-footer ul a:hover { color: #000; }
                .footer-socials {
                    display: flex;
                    gap: 1rem;
                    margin-top: 1.5rem;
                    font-size: 0.875rem;
                    color: #9CA3AF;
                }
                .footer-socials a:hover { color: #000; }
                .footer-bottom {
                    border-top: 1px solid #F3F4F6;
                    padding-top: 2rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                    font-size: 0.75rem;
                    color: #9CA3AF;
                }
                .footer-bottom p { margin: 0; }
                .footer-legal { display: flex; gap: 1.5rem; }
                .footer-legal a:hover { color: #4B5563; }
                @media (min-width: 768px) {
                    .footer-grid { grid-template-columns: 2fr 1fr 1fr; }
                    .footer-bottom { flex-direction: row; justify-content: space-between; }
                }
                "#}
            </style>
        </footer>
    }
}
