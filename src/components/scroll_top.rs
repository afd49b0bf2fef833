use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScrollTopProps {
    pub visible: bool,
    pub on_click: Callback<()>,
}

#[function_component(ScrollTopButton)]
pub fn scroll_top_button(props: &ScrollTopProps) -> Html {
    let onclick = {
        let on_click = props.on_click.clone();
        Callback::from(move |_| on_click.emit(()))
    };

    html! {
        <>
            <button
                class={classes!("scroll-top", (!props.visible).then(|| "hidden"))}
                onclick={onclick}
                aria-label="Retour en haut"
                tabindex={if props.visible { "0" } else { "-1" }}
            >
                {"↑"}
            </button>
            <style>
                {r#"
                .scroll-top {
                    position: fixed;
                    bottom: 2rem;
                    right: 2rem;
                    z-index: 50;
                    width: 2.75rem;
                    height: 2.75rem;
                    border: none;
                    border-radius: 9999px;
                    background: #000;
                    color: #fff;
                    font-size: 1.25rem;
                    cursor: pointer;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
                    opacity: 1;
                    transform: translateY(0);
                    transition: all 0.3s ease;
                }
                .scroll-top:hover { background: #1F2937; }
                .scroll-top.hidden {
                    opacity: 0;
                    transform: translateY(2.5rem);
                    pointer-events: none;
                }
                "#}
            </style>
        </>
    }
}
