use web_sys::MouseEvent;
use yew::prelude::*;

use crate::behavior::scroll_spy::SectionId;
use crate::config;
use crate::content::HERO_TITLES;
use crate::dom;
use crate::hooks::timers::use_typewriter;

fn scroll_to(section: SectionId) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| dom::scroll_to_section(section.as_str()))
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let typed = use_typewriter(HERO_TITLES);

    html! {
        <section id={SectionId::Home.as_str()} class="hero">
            <div class="hero-background"></div>
            <div class="hero-grid">
                <div class="hero-text">
                    <p class="hero-greeting">{"Hello, I'm"}</p>
                    <h1 class="hero-name">{"Amit Adhikary"}</h1>
                    <h2 class="hero-typed">
                        <span>{typed}</span>
                        <span class="hero-cursor">{"|"}</span>
                    </h2>
                    <div class="hero-description">
                        <p>{"Welcome to amitadhikary.com!"}</p>
                        <p>
                            {"I'm Amit Adhikary, a Software Engineer and Full Stack Web Developer from India, skilled in React, TypeScript, Python, Django, Node.js, and modern technologies. "}
                            {"I build scalable, high-performance applications with clean architecture and strong problem-solving skills."}
                        </p>
                    </div>
                    <div class="hero-cta-group">
                        <button class="hero-cta" onclick={scroll_to(SectionId::Projects)}>
                            {"View My Work →"}
                        </button>
                        <button class="hero-cta secondary" onclick={scroll_to(SectionId::Contact)}>
                            {"✉ Get In Touch"}
                        </button>
                    </div>
                </div>
                <div class="hero-photo">
                    <div class="hero-photo-ring">
                        <img
                            src={config::asset("Pi7_Passport_Photo_v2.jpeg")}
                            alt="Amit Adhikary"
                            loading="eager"
                        />
                    </div>
                </div>
            </div>
            <button class="hero-scroll-hint" onclick={scroll_to(SectionId::About)} aria-label="Scroll to about">
                {"⌄"}
            </button>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    padding-top: 5rem;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(135deg, var(--bg-primary), var(--bg-secondary), var(--bg-primary));
                    opacity: 0.5;
                }
                .hero-grid {
                    position: relative;
                    z-index: 1;
                    max-width: 80rem;
                    width: 100%;
                    margin: 0 auto;
                    padding: 2rem 1.5rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .hero-text {
                    animation: heroSlideIn 0.8s ease-out;
                }
                @keyframes heroSlideIn {
                    from { opacity: 0; transform: translateX(-50px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                .hero-greeting {
                    color: var(--primary);
                    font-size: 1.25rem;
                    margin: 0;
                }
                .hero-name {
                    font-size: 3.75rem;
                    font-weight: 800;
                    margin: 0.5rem 0;
                    background: linear-gradient(90deg, var(--text-primary), var(--primary));
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-typed {
                    min-height: 2.5rem;
                    font-size: 1.75rem;
                    color: var(--secondary);
                }
                .hero-cursor {
                    animation: heroBlink 1s step-end infinite;
                }
                @keyframes heroBlink {
                    50% { opacity: 0; }
                }
                .hero-description {
                    color: var(--text-secondary);
                    line-height: 1.7;
                }
                .hero-cta-group {
                    display: flex;
                    gap: 1rem;
                    margin-top: 2rem;
                    flex-wrap: wrap;
                }
                .hero-cta {
                    padding: 0.9rem 2rem;
                    border-radius: 0.75rem;
                    border: none;
                    font-weight: 600;
                    color: #fff;
                    cursor: pointer;
                    background: linear-gradient(90deg, var(--primary), var(--secondary));
                    transition: transform 0.2s ease;
                }
                .hero-cta:hover {
                    transform: translateY(-3px) scale(1.05);
                }
                .hero-cta.secondary {
                    background: transparent;
                    border: 2px solid var(--primary);
                    color: var(--primary);
                }
                .hero-photo {
                    display: flex;
                    justify-content: center;
                }
                .hero-photo-ring {
                    width: 20rem;
                    height: 20rem;
                    border-radius: 50%;
                    padding: 6px;
                    background: linear-gradient(135deg, var(--primary), var(--secondary));
                }
                .hero-photo-ring img {
                    width: 100%;
                    height: 100%;
                    border-radius: 50%;
                    object-fit: cover;
                }
                .hero-scroll-hint {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    background: none;
                    border: none;
                    color: var(--text-secondary);
                    font-size: 2rem;
                    cursor: pointer;
                    animation: heroBounce 2s infinite;
                }
                @keyframes heroBounce {
                    0%, 100% { transform: translate(-50%, 0); }
                    50% { transform: translate(-50%, 10px); }
                }
                @media (max-width: 1024px) {
                    .hero-grid { grid-template-columns: 1fr; text-align: center; }
                    .hero-cta-group { justify-content: center; }
                    .hero-photo { order: -1; }
                    .hero-photo-ring { width: 14rem; height: 14rem; }
                    .hero-name { font-size: 2.5rem; }
                }
                "#}
            </style>
        </section>
    }
}
