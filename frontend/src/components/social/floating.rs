use yew::prelude::*;

use crate::behavior::menu::{link_target, orbit_angles, orbit_offset, ORBIT_RADIUS};
use crate::config;
use crate::content::SOCIAL_LINKS;
use crate::hooks::floating_menu::use_floating_menu;

/// Round button in the corner; opening it fans the links out on a circle.
#[function_component(SocialOrbit)]
pub fn social_orbit() -> Html {
    let root = use_node_ref();
    let (open, toggle) = use_floating_menu(root.clone());
    let angles = orbit_angles(SOCIAL_LINKS.len());

    html! {
        <div ref={root} class={classes!("social-orbit", open.then(|| "open"))}>
            { for SOCIAL_LINKS.iter().zip(angles).enumerate().map(|(i, (link, angle))| {
                let (x, y) = if open { orbit_offset(angle, ORBIT_RADIUS) } else { (0.0, 0.0) };
                html! {
                    <a
                        key={link.label}
                        href={link.href}
                        target={link_target(link.href)}
                        rel="noopener noreferrer"
                        class="social-orbit-link"
                        title={link.label}
                        tabindex={if open { "0" } else { "-1" }}
                        style={format!(
                            "background: {}; transform: translate({:.1}px, {:.1}px); transition-delay: {:.2}s;",
                            link.background, x, y, i as f64 * 0.03,
                        )}
                    >
                        <img src={config::asset(link.icon)} alt={link.label} />
                    </a>
                }
            }) }

            <button
                class="social-orbit-toggle"
                onclick={toggle}
                aria-label={if open { "Close social links" } else { "Open social links" }}
            >
                { if open { "✕" } else { "✦" } }
            </button>

            <style>
                {r#"
                .social-orbit {
                    position: fixed;
                    right: 9rem;
                    bottom: 9rem;
                    z-index: 60;
                    width: 3.5rem;
                    height: 3.5rem;
                }
                .social-orbit-toggle {
                    position: relative;
                    z-index: 2;
                    width: 3.5rem;
                    height: 3.5rem;
                    border: none;
                    border-radius: 50%;
                    color: #fff;
                    font-size: 1.25rem;
                    cursor: pointer;
                    background: linear-gradient(135deg, var(--primary), var(--secondary));
                    box-shadow: 0 10px 30px rgba(99, 102, 241, 0.4);
                    transition: transform 0.3s ease;
                }
                .social-orbit.open .social-orbit-toggle {
                    transform: rotate(90deg);
                }
                .social-orbit-link {
                    position: absolute;
                    top: 0.25rem;
                    left: 0.25rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    opacity: 0;
                    pointer-events: none;
                    transition: transform 0.4s cubic-bezier(0.34, 1.56, 0.64, 1), opacity 0.3s ease;
                }
                .social-orbit.open .social-orbit-link {
                    opacity: 1;
                    pointer-events: auto;
                }
                .social-orbit-link img {
                    width: 1.5rem;
                    height: 1.5rem;
                    object-fit: contain;
                }
                "#}
            </style>
        </div>
    }
}
