use yew::prelude::*;

use crate::behavior::menu::link_target;
use crate::behavior::reveal::transition_delay;
use crate::config;
use crate::content::SOCIAL_LINKS;
use crate::hooks::floating_menu::use_floating_menu;

/// Left-edge panel of labelled links that slides out from a tab.
#[function_component(SocialSidebar)]
pub fn social_sidebar() -> Html {
    let root = use_node_ref();
    let (open, toggle) = use_floating_menu(root.clone());

    html! {
        <div ref={root} class={classes!("social-sidebar", open.then(|| "open"))}>
            <button
                class="social-sidebar-toggle"
                onclick={toggle}
                aria-label={if open { "Close social links" } else { "Open social links" }}
                aria-expanded={open.to_string()}
            >
                { if open { "‹" } else { "›" } }
            </button>

            <nav class="social-sidebar-panel" aria-hidden={(!open).to_string()}>
                { for SOCIAL_LINKS.iter().enumerate().map(|(i, link)| html! {
                    <a
                        key={link.label}
                        href={link.href}
                        target={link_target(link.href)}
                        rel="noopener noreferrer"
                        class="social-sidebar-link"
                        style={format!("background: {}; {}", link.background, transition_delay(i as f64 * 0.05))}
                    >
                        <img src={config::asset(link.icon)} alt="" />
                        <span>{link.label}</span>
                    </a>
                }) }
            </nav>

            <style>
                {r#"
                .social-sidebar {
                    position: fixed;
                    left: 0;
                    top: 50%;
                    transform: translateY(-50%);
                    z-index: 60;
                    display: flex;
                    align-items: center;
                }
                .social-sidebar-toggle {
                    order: 2;
                    width: 2rem;
                    height: 4rem;
                    border: none;
                    border-radius: 0 0.75rem 0.75rem 0;
                    color: #fff;
                    font-size: 1.5rem;
                    cursor: pointer;
                    background: linear-gradient(180deg, var(--primary), var(--secondary));
                }
                .social-sidebar-panel {
                    order: 1;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    width: 0;
                    overflow: hidden;
                    transition: width 0.3s ease;
                }
                .social-sidebar.open .social-sidebar-panel {
                    width: 11rem;
                    padding: 0.5rem;
                }
                .social-sidebar-link {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.5rem 0.75rem;
                    border-radius: 0.75rem;
                    color: #fff;
                    text-decoration: none;
                    white-space: nowrap;
                    opacity: 0;
                    transform: translateX(-20px);
                    transition: opacity 0.3s ease, transform 0.3s ease;
                }
                .social-sidebar.open .social-sidebar-link {
                    opacity: 1;
                    transform: translateX(0);
                }
                .social-sidebar-link:hover {
                    transform: translateX(4px);
                }
                .social-sidebar-link img {
                    width: 1.5rem;
                    height: 1.5rem;
                    object-fit: contain;
                }
                "#}
            </style>
        </div>
    }
}
