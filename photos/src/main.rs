use yew::prelude::*;
use log::{info, Level};

mod config;
mod components {
    pub mod navbar;
    pub mod footer;
}

use components::{footer::Footer, navbar::Navbar};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="app">
            <Navbar />
            <main class="gallery">
                <h1>{"My Photography"}</h1>
                <p class="gallery-intro">
                    {"Welcome to my photography portfolio. This is where I share my passion for capturing moments."}
                </p>
                <div class="gallery-placeholder">
                    <p>{"Photo gallery coming soon..."}</p>
                </div>
            </main>
            <Footer />

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
                body {
                    margin: 0;
                    font-family: 'Inter', system-ui, -apple-system, sans-serif;
                    color: var(--text-primary);
                    background: var(--bg-primary);
                }
                .app {
                    min-height: 100vh;
                }
                .gallery {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 9rem 1.5rem 4rem;
                    text-align: center;
                }
                .gallery h1 {
                    font-size: 3.5rem;
                    margin: 0 0 1.5rem;
                }
                .gallery-intro {
                    max-width: 42rem;
                    margin: 0 auto 3rem;
                    font-size: 1.25rem;
                    color: var(--text-secondary);
                }
                .gallery-placeholder {
                    padding: 3rem;
                    border-radius: 1rem;
                    border: 1px solid var(--border-color);
                    background: var(--bg-card);
                    color: var(--text-secondary);
                    font-size: 1.125rem;
                }
                "#}
            </style>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting photos");
    yew::Renderer::<App>::new().render();
}
