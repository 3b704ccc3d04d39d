use yew::prelude::*;

use crate::behavior::reveal::stagger;
use crate::behavior::scroll_spy::SectionId;
use crate::components::reveal::Reveal;
use crate::config;
use crate::content::{SKILLS, SOFT_SKILLS};
use crate::hooks::in_view::use_in_view;
use crate::hooks::timers::use_delayed_value;

#[derive(Properties, PartialEq)]
pub struct SkillItemProps {
    pub name: AttrValue,
    pub level: u32,
    pub icon: AttrValue,
    /// Seconds between the item appearing and its bar starting to fill.
    pub delay: f64,
}

#[function_component(SkillItem)]
pub fn skill_item(props: &SkillItemProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), "-50px");
    let delay_ms = (props.delay * 1000.0).round() as u32;
    let width = use_delayed_value(props.level, visible, delay_ms);

    html! {
        <div ref={node} class={classes!("skill-item", visible.then(|| "visible"))}>
            <div class="skill-head">
                <img src={config::asset(&props.icon)} alt={props.name.clone()} class="skill-icon" />
                <span class="skill-name">{props.name.clone()}</span>
                <span class="skill-level">{format!("{}%", props.level)}</span>
            </div>
            <div class="skill-track">
                <div class="skill-fill" style={format!("width: {}%;", width)}></div>
            </div>
            <div class="skill-caption">{format!("{}% Proficiency", props.level)}</div>
        </div>
    }
}

#[function_component(Skills)]
pub fn skills() -> Html {
    html! {
        <section id={SectionId::Skills.as_str()} class="skills">
            <Reveal class="section-header">
                <h2 class="section-title">{"Skills & Expertise"}</h2>
                <div class="section-underline"></div>
                <p class="section-subtitle">
                    {"Technologies and tools I work with to bring ideas to life"}
                </p>
            </Reveal>

            <h3 class="skills-heading">{"Technical Skills"}</h3>
            <div class="skills-grid">
                { for SKILLS.iter().enumerate().map(|(i, skill)| html! {
                    <SkillItem
                        key={skill.name}
                        name={skill.name}
                        level={skill.level}
                        icon={skill.icon}
                        delay={stagger(i, 0.1)}
                    />
                }) }
            </div>

            <h3 class="skills-heading">{"Soft Skills"}</h3>
            <div class="soft-skills-grid">
                { for SOFT_SKILLS.iter().enumerate().map(|(i, skill)| html! {
                    <Reveal class="soft-skill-card" delay={stagger(i, 0.05)}>
                        <h4>{skill.title}</h4>
                        <p>{skill.description}</p>
                    </Reveal>
                }) }
            </div>

            <style>
                {r#"
                .skills {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 6rem 1.5rem;
                }
                .skills-heading {
                    text-align: center;
                    font-size: 1.5rem;
                    margin: 3rem 0 1.5rem;
                    color: var(--text-primary);
                }
                .skills-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
                    gap: 1.5rem;
                }
                .skill-item {
                    padding: 1.25rem;
                    border-radius: 1rem;
                    border: 1px solid var(--border-color);
                    background: var(--bg-card);
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.5s ease, transform 0.5s ease;
                }
                .skill-item.visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                .skill-head {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 0.75rem;
                }
                .skill-icon {
                    width: 2rem;
                    height: 2rem;
                    object-fit: contain;
                }
                .skill-name {
                    flex: 1;
                    font-weight: 600;
                }
                .skill-level {
                    color: var(--primary);
                    font-weight: 600;
                }
                .skill-track {
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: var(--bg-secondary);
                    overflow: hidden;
                }
                .skill-fill {
                    height: 100%;
                    border-radius: 9999px;
                    background: linear-gradient(90deg, var(--primary), var(--secondary));
                    transition: width 1s ease-out;
                }
                .skill-caption {
                    margin-top: 0.5rem;
                    font-size: 0.75rem;
                    color: var(--text-secondary);
                }
                .soft-skills-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr));
                    gap: 1rem;
                }
                .soft-skill-card {
                    padding: 1.25rem;
                    border-radius: 1rem;
                    border: 1px solid var(--border-color);
                    background: var(--bg-card);
                }
                .soft-skill-card:hover {
                    border-color: var(--secondary);
                }
                .soft-skill-card h4 {
                    margin: 0 0 0.5rem;
                    color: var(--primary);
                }
                .soft-skill-card p {
                    margin: 0;
                    font-size: 0.875rem;
                    color: var(--text-secondary);
                }
                "#}
            </style>
        </section>
    }
}
