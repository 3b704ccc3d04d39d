use chrono::{Datelike, Utc};
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config::{self, FOOTER_SOCIALS};

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <h3>{"My Clicks"}</h3>
                    <p class="footer-by">{"By Amit Adhikary"}</p>
                    <p>
                        {"Capturing moments, creating memories. Exploring the world through my lens and sharing the beauty I find along the way."}
                    </p>
                    <div class="footer-socials">
                        { for FOOTER_SOCIALS.iter().map(|social| html! {
                            <a
                                key={social.name}
                                href={social.href}
                                target={config::link_target(social.href)}
                                rel="noopener noreferrer"
                                aria-label={social.name}
                                class="footer-social"
                            >
                                {social.icon}
                            </a>
                        }) }
                    </div>
                </div>

                <div class="footer-links">
                    <h4>{"Links"}</h4>
                    <ul>
                        <li><a href={config::PORTFOLIO_URL}>{"Portfolio"}</a></li>
                        <li><a href={config::PORTFOLIO_CONTACT_URL}>{"Contact"}</a></li>
                    </ul>
                </div>
            </div>

            <div class="footer-divider"></div>

            <div class="footer-bottom">
                <p>{format!("© {} Amit Adhikary. All rights reserved.", year)}</p>
                <button class="footer-top" onclick={Callback::from(|_: MouseEvent| scroll_to_top())}>
                    {"Back to Top ↑"}
                </button>
            </div>

            <style>
                {r#"
                .footer {
                    padding: 4rem 1.5rem;
                    border-top: 1px solid var(--border-color);
                    background: linear-gradient(180deg, var(--bg-primary), var(--bg-secondary));
                }
                .footer-grid {
                    max-width: 80rem;
                    margin: 0 auto 3rem;
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 2rem;
                }
                .footer-brand p {
                    color: var(--text-secondary);
                    line-height: 1.7;
                }
                .footer-by {
                    margin-top: 0;
                    font-size: 0.875rem;
                }
                .footer-socials {
                    display: flex;
                    gap: 1rem;
                }
                .footer-social {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 0.5rem;
                    border: 1px solid var(--border-color);
                    background: var(--bg-card);
                    color: var(--text-secondary);
                    text-decoration: none;
                }
                .footer-social:hover {
                    color: var(--primary);
                    border-color: var(--primary);
                }
                .footer-links ul {
                    list-style: none;
                    padding: 0;
                }
                .footer-links li {
                    margin-bottom: 0.75rem;
                }
                .footer-links a {
                    color: var(--text-secondary);
                    text-decoration: none;
                }
                .footer-links a:hover {
                    color: var(--primary);
                }
                .footer-divider {
                    height: 1px;
                    margin-bottom: 2rem;
                    background: linear-gradient(90deg, transparent, rgba(99, 102, 241, 0.3), transparent);
                }
                .footer-bottom {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1.5rem;
                    color: var(--text-secondary);
                    font-size: 0.875rem;
                }
                .footer-top {
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 0.75rem;
                    color: #fff;
                    cursor: pointer;
                    background: linear-gradient(90deg, var(--primary), var(--secondary));
                }
                @media (max-width: 768px) {
                    .footer-grid { grid-template-columns: 1fr; }
                    .footer-bottom { flex-direction: column; }
                }
                "#}
            </style>
        </footer>
    }
}
