use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let mobile_open = use_state(|| false);
    let scrolled = config::is_scrolled(scroll_y);

    let toggle = {
        let mobile_open = mobile_open.clone();
        Callback::from(move |_: MouseEvent| mobile_open.set(!*mobile_open))
    };

    let close = {
        let mobile_open = mobile_open.clone();
        Callback::from(move |_: MouseEvent| mobile_open.set(false))
    };

    html! {
        <nav class={classes!("top-nav", scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <div class="nav-logo">
                    <span class="nav-camera">{"📷"}</span>
                    { for "Amit".chars().map(|c| html! { <span class="nav-letter">{c.to_string()}</span> }) }
                    {" "}
                    { for "Adhikary".chars().map(|c| html! { <span class="nav-letter accent">{c.to_string()}</span> }) }
                </div>

                <div class="nav-right">
                    <a href={config::PORTFOLIO_URL} class="nav-home">{"⌂ Portfolio"}</a>
                </div>

                <button class="burger-menu" onclick={toggle} aria-label="Toggle mobile menu">
                    { if *mobile_open { "✕" } else { "☰" } }
                </button>
            </div>

            if *mobile_open {
                <div class="mobile-menu">
                    <a href={config::PORTFOLIO_URL} class="nav-home" onclick={close}>
                        {"⌂ Back to Portfolio"}
                    </a>
                </div>
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: background 0.5s ease;
                }
                .top-nav.scrolled {
                    background: rgba(30, 41, 59, 0.95);
                    backdrop-filter: blur(16px);
                    border-bottom: 1px solid rgba(99, 102, 241, 0.2);
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                }
                .nav-camera {
                    margin-right: 0.5rem;
                }
                .nav-letter:hover {
                    color: var(--primary);
                }
                .nav-letter.accent {
                    color: var(--secondary);
                }
                .nav-home {
                    padding: 0.5rem 1rem;
                    border-radius: 0.5rem;
                    color: #fff;
                    text-decoration: none;
                    background: var(--primary);
                }
                .burger-menu {
                    display: none;
                    background: var(--bg-secondary);
                    color: var(--text-primary);
                    border: none;
                    border-radius: 0.5rem;
                    padding: 0.5rem 0.75rem;
                    cursor: pointer;
                }
                .mobile-menu {
                    padding: 0.75rem 1rem;
                    background: rgba(30, 41, 59, 0.98);
                }
                .mobile-menu .nav-home {
                    display: block;
                }
                @media (max-width: 768px) {
                    .nav-right { display: none; }
                    .burger-menu { display: block; }
                }
                "#}
            </style>
        </nav>
    }
}
