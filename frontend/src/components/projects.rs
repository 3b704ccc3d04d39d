use yew::prelude::*;

use crate::behavior::reveal::stagger;
use crate::behavior::scroll_spy::SectionId;
use crate::components::reveal::Reveal;
use crate::config;
use crate::content::{Project, GITHUB_PROFILE, PROJECTS};

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
    pub delay: f64,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;
    let (badges, hidden) = project.badges();

    html! {
        <Reveal class="project-card" delay={props.delay}>
            <div class="project-image">
                <img src={config::asset(project.image)} alt={project.title} loading="lazy" />
                <div class="project-badges">
                    { for badges.iter().map(|tech| html! {
                        <span class="project-badge">{*tech}</span>
                    }) }
                    if hidden > 0 {
                        <span class="project-badge more">{format!("+{}", hidden)}</span>
                    }
                </div>
            </div>
            <div class="project-body">
                <h3>{project.title}</h3>
                <p>{project.description}</p>
                <div class="project-links">
                    <a
                        href={project.primary_link()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="project-link primary"
                    >
                        { if project.live_url.is_some() { "Live Demo ↗" } else { "View Code ↗" } }
                    </a>
                    if let Some(repo) = project.secondary_link() {
                        <a
                            href={repo}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="project-link"
                            aria-label="View GitHub Repository"
                        >
                            {"GitHub"}
                        </a>
                    }
                </div>
            </div>
        </Reveal>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    html! {
        <section id={SectionId::Projects.as_str()} class="projects">
            <Reveal class="section-header">
                <h2 class="section-title">{"Featured Projects"}</h2>
                <div class="section-underline"></div>
                <p class="section-subtitle">
                    {"Showcase of my recent work and technical expertise in building modern web applications"}
                </p>
            </Reveal>

            <div class="projects-grid">
                { for PROJECTS.iter().enumerate().map(|(i, project)| html! {
                    <ProjectCard project={project.clone()} delay={stagger(i, 0.1)} />
                }) }
            </div>

            <div class="projects-more">
                <a href={GITHUB_PROFILE} target="_blank" rel="noopener noreferrer" class="hero-cta">
                    {"View All Projects on GitHub →"}
                </a>
            </div>

            <style>
                {r#"
                .projects {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 6rem 1.5rem;
                }
                .projects-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
                    gap: 2rem;
                }
                .project-card {
                    display: flex;
                    flex-direction: column;
                    border-radius: 1rem;
                    overflow: hidden;
                    border: 1px solid var(--border-color);
                    background: var(--bg-card);
                    transition: border-color 0.3s ease, box-shadow 0.3s ease;
                }
                .project-card:hover {
                    border-color: var(--primary);
                    box-shadow: 0 25px 50px rgba(99, 102, 241, 0.1);
                }
                .project-image {
                    position: relative;
                    height: 12rem;
                    overflow: hidden;
                }
                .project-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.4s ease;
                }
                .project-card:hover .project-image img {
                    transform: scale(1.1);
                }
                .project-badges {
                    position: absolute;
                    top: 0.75rem;
                    left: 0.75rem;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.375rem;
                }
                .project-badge {
                    padding: 0.25rem 0.5rem;
                    border-radius: 0.5rem;
                    font-size: 0.75rem;
                    color: #fff;
                    background: rgba(99, 102, 241, 0.85);
                }
                .project-badge.more {
                    background: rgba(17, 24, 39, 0.85);
                }
                .project-body {
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    flex: 1;
                }
                .project-body p {
                    color: var(--text-secondary);
                    font-size: 0.9rem;
                    line-height: 1.6;
                    flex: 1;
                }
                .project-links {
                    display: flex;
                    gap: 0.75rem;
                }
                .project-link {
                    padding: 0.5rem 1rem;
                    border-radius: 0.5rem;
                    text-decoration: none;
                    color: var(--text-primary);
                    border: 1px solid var(--border-color);
                }
                .project-link.primary {
                    color: #fff;
                    border: none;
                    background: linear-gradient(90deg, var(--primary), var(--secondary));
                }
                .projects-more {
                    text-align: center;
                    margin-top: 3rem;
                }
                .projects-more .hero-cta {
                    text-decoration: none;
                    display: inline-block;
                }
                "#}
            </style>
        </section>
    }
}
