use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::{BRAND, CONTACT_ANCHOR, CONTACT_LABEL, NAV_LINKS};

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub scrolled: bool,
    pub expanded: bool,
    pub on_toggle: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let NavbarProps { scrolled, expanded, on_toggle, on_close } = props;

    let toggle_menu = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    // Anchor navigation still happens, the panel just shouldn't stay open.
    let close_menu = {
        let on_close = on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <nav class={classes!("top-nav", scrolled.then(|| "scrolled"))}>
            <div class="container nav-content">
                <a href="#" class="nav-logo serif">
                    {BRAND}<span class="logo-dot">{"."}</span>
                </a>

                <div class="nav-desktop">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a key={link.label} href={link.href} class="nav-link">{link.label}</a>
                    }) }
                    <a href={CONTACT_ANCHOR} class="nav-cta">{CONTACT_LABEL}</a>
                </div>

                <button
                    class="burger-menu"
                    onclick={toggle_menu}
                    aria-label="Menu"
                    aria-expanded={expanded.to_string()}
                >
                    { if *expanded { "✕" } else { "☰" } }
                </button>
            </div>

            {
                if *expanded {
                    html! {
                        <div class="nav-mobile fade-in-up">
                            { for NAV_LINKS.iter().map(|link| html! {
                                <a
                                    key={link.label}
                                    href={link.href}
                                    class="nav-mobile-link"
                                    onclick={close_menu.clone()}
                                >
                                    {link.label}
                                </a>
                            }) }
                            <a href={CONTACT_ANCHOR} class="nav-cta nav-cta-mobile" onclick={close_menu.clone()}>
                                {CONTACT_LABEL}
                            </a>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    padding: 1.5rem 0;
                    background: transparent;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    padding: 1rem 0;
                    background: rgba(250, 250, 250, 0.9);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    border-bottom: 1px solid #F3F4F6;
                }
                .nav-content {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    letter-spacing: -0.05em;
                    color: #000;
                }
                .logo-dot { color: #9CA3AF; }
                .nav-desktop {
                    display: none;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #4B5563;
                    letter-spacing: 0.025em;
                    transition: color 0.2s;
                }
                .nav-link:hover { color: #000; }
                .nav-cta {
                    background: #000;
                    color: #fff;
                    padding: 0.625rem 1.5rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    border-radius: 2px;
                    transition: background 0.2s;
                }
                .nav-cta:hover { background: #1F2937; }
                .burger-menu {
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    cursor: pointer;
                    color: #000;
                }
                .nav-mobile {
                    position: absolute;
                    top: 100%;
                    left: 0;
                    width: 100%;
                    background: #fff;
                    border-bottom: 1px solid #F3F4F6;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    padding: 2rem 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    animation-duration: 0.3s;
                }
                .nav-mobile-link {
                    font-size: 1.125rem;
                    font-weight: 500;
                    color: #1F2937;
                }
                .nav-cta-mobile {
                    text-align: center;
                    padding: 0.75rem 1.5rem;
                }
                @media (min-width: 768px) {
                    .nav-desktop { display: flex; }
                    .burger-menu, .nav-mobile { display: none; }
                }
                "#}
            </style>
        </nav>
    }
}
