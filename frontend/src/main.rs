use yew::prelude::*;
use log::{info, Level};

mod config;
mod content;
mod dom;
mod behavior {
    pub mod scroll_spy;
    pub mod typewriter;
    pub mod counter;
    pub mod reveal;
    pub mod contact_form;
    pub mod menu;
}
mod hooks {
    pub mod in_view;
    pub mod timers;
    pub mod floating_menu;
}
mod components {
    pub mod reveal;
    pub mod navbar;
    pub mod hero;
    pub mod about;
    pub mod projects;
    pub mod skills;
    pub mod contact;
    pub mod section_divider;
    pub mod social_menu;
    pub mod social {
        pub mod sidebar;
        pub mod dock;
        pub mod floating;
    }
}

use components::{
    about::About,
    contact::Contact,
    hero::Hero,
    navbar::Navbar,
    projects::Projects,
    section_divider::SectionDivider,
    skills::Skills,
    social_menu::SocialMenu,
};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <>
            <Navbar />
            <main class="page">
                <Hero />
                <SectionDivider gradient=true />
                <About />
                <SectionDivider />
                <Projects />
                <SectionDivider />
                <Skills />
                <SectionDivider gradient=true />
                <Contact />
            </main>
            <SocialMenu variant={config::SOCIAL_MENU_VARIANT} />

            <style>
                {r#"
                :root {
                    --primary: #6366f1;
                    --secondary: #8b5cf6;
                    --bg-primary: #0f172a;
                    --bg-secondary: #1e293b;
                    --bg-card: rgba(30, 41, 59, 0.6);
                    --text-primary: #f1f5f9;
                    --text-secondary: #94a3b8;
                    --border-color: rgba(148, 163, 184, 0.15);
                }
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    font-family: 'Inter', system-ui, -apple-system, sans-serif;
                    color: var(--text-primary);
                    background: var(--bg-primary);
                }
                .page {
                    overflow-x: hidden;
                }
                .reveal {
                    opacity: 0;
                    transform: translateY(50px);
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                }
                .reveal.visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                .section-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .section-title {
                    font-size: 2.5rem;
                    font-weight: 800;
                    margin: 0.5rem 0;
                    background: linear-gradient(90deg, var(--primary), var(--secondary));
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .section-underline {
                    width: 6rem;
                    height: 4px;
                    margin: 0 auto 1rem;
                    border-radius: 9999px;
                    background: linear-gradient(90deg, var(--primary), var(--secondary));
                }
                .section-subtitle {
                    max-width: 40rem;
                    margin: 0 auto;
                    color: var(--text-secondary);
                }
                "#}
            </style>
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}
