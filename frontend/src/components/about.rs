use yew::prelude::*;

use crate::behavior::reveal::stagger;
use crate::behavior::scroll_spy::SectionId;
use crate::components::reveal::Reveal;
use crate::content::{HIGHLIGHTS, STATS};
use crate::hooks::in_view::use_in_view;
use crate::hooks::timers::use_count_up;

#[derive(Properties, PartialEq)]
pub struct StatItemProps {
    pub number: u32,
    pub label: AttrValue,
    #[prop_or(AttrValue::Static("+"))]
    pub suffix: AttrValue,
}

/// A number that counts up from zero the first time it is seen.
#[function_component(StatItem)]
pub fn stat_item(props: &StatItemProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), "0px");
    let count = use_count_up(props.number, visible);

    html! {
        <div ref={node} class={classes!("stat-item", visible.then(|| "visible"))}>
            <div class="stat-number">
                <span class="stat-count">{count.to_string()}</span>
                <span class="stat-suffix">{props.suffix.clone()}</span>
            </div>
            <div class="stat-label">{props.label.clone()}</div>
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={SectionId::About.as_str()} class="about">
            <Reveal class="section-header">
                <h2 class="section-title">{"About Me"}</h2>
                <div class="section-underline"></div>
            </Reveal>

            <div class="stats-grid">
                { for STATS.iter().map(|stat| html! {
                    <StatItem number={stat.number} label={stat.label} suffix={stat.suffix} />
                }) }
            </div>

            <div class="about-grid">
                <Reveal class="about-text">
                    <p>
                        {"I'm a Full Stack Developer with a strong foundation in Data Structures and Algorithms, which guides my approach to building scalable and maintainable backend systems. "}
                        {"I specialize in designing RESTful APIs, managing databases, and developing robust web applications."}
                    </p>
                    <p>
                        {"My expertise lies in "}
                        <span class="highlight">{"Data Structures and Algorithms"}</span>
                        {", which drives my web development journey. I'm constantly exploring the latest technologies and best practices to deliver robust, scalable applications."}
                    </p>
                    <p>
                        {"When I'm not coding, you'll find me solving algorithmic challenges, contributing to open-source projects, or exploring new frameworks. I believe in continuous learning and staying updated with the ever-evolving "}
                        <span class="highlight">{"tech landscape"}</span>
                        {"."}
                    </p>
                </Reveal>

                <div class="highlight-grid">
                    { for HIGHLIGHTS.iter().enumerate().map(|(i, item)| html! {
                        <Reveal class="highlight-card" delay={stagger(i, 0.1)}>
                            <div class="highlight-icon">{item.icon}</div>
                            <h4>{item.title}</h4>
                            <p>{item.desc}</p>
                        </Reveal>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .about {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 6rem 1.5rem;
                }
                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    margin: 3rem 0;
                }
                .stat-item {
                    text-align: center;
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .stat-item.visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                .stat-number {
                    font-size: 3rem;
                    font-weight: 700;
                }
                .stat-count {
                    background: linear-gradient(90deg, var(--primary), var(--secondary));
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .stat-suffix {
                    color: var(--primary);
                    margin-left: 0.25rem;
                }
                .stat-label {
                    color: var(--text-secondary);
                    font-weight: 500;
                }
                .about-grid {
                    display: grid;
                    grid-template-columns: 3fr 2fr;
                    gap: 3rem;
                }
                .about-text p {
                    color: var(--text-secondary);
                    line-height: 1.8;
                    margin-bottom: 1.25rem;
                }
                .highlight {
                    color: var(--primary);
                    font-weight: 600;
                }
                .highlight-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .highlight-card {
                    padding: 1.25rem;
                    border-radius: 1rem;
                    border: 1px solid var(--border-color);
                    background: var(--bg-card);
                }
                .highlight-card:hover {
                    border-color: var(--primary);
                }
                .highlight-icon {
                    font-size: 1.75rem;
                }
                .highlight-card h4 {
                    margin: 0.5rem 0 0.25rem;
                }
                .highlight-card p {
                    margin: 0;
                    font-size: 0.875rem;
                    color: var(--text-secondary);
                }
                @media (max-width: 768px) {
                    .about-grid { grid-template-columns: 1fr; }
                    .stats-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
