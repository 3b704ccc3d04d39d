use yew::prelude::*;

use crate::behavior::menu::{dock_scale, link_target};
use crate::config;
use crate::content::SOCIAL_LINKS;
use crate::hooks::floating_menu::use_floating_menu;

/// Bottom-centred dock; icons near the pointer grow.
#[function_component(SocialDock)]
pub fn social_dock() -> Html {
    let root = use_node_ref();
    let (open, toggle) = use_floating_menu(root.clone());
    let hovered = use_state(|| None::<usize>);

    let clear_hover = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(None))
    };

    html! {
        <div class="social-dock-wrap">
            <div ref={root} class={classes!("social-dock", open.then(|| "open"))}>
                <button
                    class="social-dock-toggle"
                    onclick={toggle}
                    aria-label={if open { "Hide social links" } else { "Show social links" }}
                >
                    { if open { "⌄" } else { "⌃" } }
                </button>

                if open {
                    <div class="social-dock-bar" onmouseleave={clear_hover}>
                        { for SOCIAL_LINKS.iter().enumerate().map(|(i, link)| {
                            let on_enter = {
                                let hovered = hovered.clone();
                                Callback::from(move |_: MouseEvent| hovered.set(Some(i)))
                            };
                            let scale = dock_scale(*hovered, i);
                            html! {
                                <a
                                    key={link.label}
                                    href={link.href}
                                    target={link_target(link.href)}
                                    rel="noopener noreferrer"
                                    class="social-dock-item"
                                    title={link.label}
                                    onmouseenter={on_enter}
                                    style={format!("transform: scale({}) translateY({}px);", scale, (1.0 - scale) * 20.0)}
                                >
                                    <span class="social-dock-icon" style={format!("background: {};", link.background)}>
                                        <img src={config::asset(link.icon)} alt={link.label} />
                                    </span>
                                    if *hovered == Some(i) {
                                        <span class="social-dock-tooltip">{link.label}</span>
                                    }
                                </a>
                            }
                        }) }
                    </div>
                }
            </div>

            <style>
                {r#"
                .social-dock-wrap {
                    position: fixed;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    z-index: 60;
                    display: flex;
                    justify-content: center;
                    pointer-events: none;
                }
                .social-dock {
                    position: relative;
                    pointer-events: auto;
                }
                .social-dock-toggle {
                    position: absolute;
                    top: -2.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    padding: 0.5rem 1rem;
                    border: none;
                    border-radius: 0.75rem 0.75rem 0 0;
                    color: #fff;
                    cursor: pointer;
                    background: linear-gradient(135deg, var(--primary), var(--secondary));
                }
                .social-dock:not(.open) .social-dock-toggle {
                    top: auto;
                    bottom: 0;
                }
                .social-dock-bar {
                    display: flex;
                    align-items: flex-end;
                    gap: 0.5rem;
                    padding: 0.75rem 1rem;
                    margin-bottom: 0.75rem;
                    border-radius: 1.25rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(17, 24, 39, 0.85);
                    backdrop-filter: blur(16px);
                }
                .social-dock-item {
                    position: relative;
                    transform-origin: bottom center;
                    transition: transform 0.2s ease;
                }
                .social-dock-icon {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 0.75rem;
                }
                .social-dock-icon img {
                    width: 1.75rem;
                    height: 1.75rem;
                    object-fit: contain;
                }
                .social-dock-tooltip {
                    position: absolute;
                    bottom: 100%;
                    left: 50%;
                    transform: translateX(-50%);
                    margin-bottom: 0.5rem;
                    padding: 0.25rem 0.5rem;
                    border-radius: 0.375rem;
                    font-size: 0.75rem;
                    white-space: nowrap;
                    color: #fff;
                    background: rgba(0, 0, 0, 0.8);
                }
                "#}
            </style>
        </div>
    }
}
