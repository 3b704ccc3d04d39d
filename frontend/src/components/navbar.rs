use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::behavior::menu::{MenuEvent, MenuState};
use crate::behavior::scroll_spy::{ScrollSample, ScrollSpy, SectionId};
use crate::config;
use crate::dom;

/// Lets the mobile menu finish closing before the page starts moving.
const MENU_CLOSE_MS: u32 = 100;

fn sample_sections() -> ScrollSample {
    ScrollSample {
        scroll_y: dom::scroll_y(),
        sections: SectionId::ALL
            .iter()
            .map(|id| (*id, dom::section_bounds(id.as_str())))
            .collect(),
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let spy = use_reducer_eq(ScrollSpy::default);
    let mobile_menu = use_state(MenuState::default);
    let pending_scroll: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    {
        let dispatcher = spy.dispatcher();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.map(|window| {
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        dispatcher.dispatch(sample_sections());
                    }) as Box<dyn FnMut()>);

                    if let Err(err) = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        log::warn!("could not listen for scroll: {:?}", err);
                    }

                    // Initial check
                    let _ = scroll_callback
                        .as_ref()
                        .unchecked_ref::<web_sys::js_sys::Function>()
                        .call0(&JsValue::NULL);

                    (window, scroll_callback)
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    {
        let pending_scroll = pending_scroll.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    pending_scroll.borrow_mut().take();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let mobile_menu = mobile_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            mobile_menu.set(mobile_menu.next(MenuEvent::Toggle));
        })
    };

    let go_to = {
        let mobile_menu = mobile_menu.clone();
        move |section: SectionId| {
            let mobile_menu = mobile_menu.clone();
            let pending_scroll = pending_scroll.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                mobile_menu.set(MenuState::Closed);
                let id = section.as_str();
                // replacing the handle cancels a scroll that has not started yet
                *pending_scroll.borrow_mut() = Some(Timeout::new(MENU_CLOSE_MS, move || {
                    dom::scroll_to_section(id);
                }));
            })
        }
    };

    let nav_links = |class: &'static str| -> Html {
        SectionId::ALL
            .iter()
            .map(|section| {
                let active = spy.active == *section;
                html! {
                    <a
                        href={format!("#{}", section.as_str())}
                        class={classes!(class, active.then(|| "active"))}
                        onclick={go_to(*section)}
                    >
                        {section.label()}
                    </a>
                }
            })
            .collect::<Html>()
    };

    html! {
        <nav class={classes!("top-nav", spy.scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#home" class="nav-logo" onclick={go_to(SectionId::Home)}>
                    <span class="nav-logo-first">
                        { for "Amit".chars().enumerate().map(|(i, c)| html! {
                            <span class="nav-letter" style={format!("animation-delay: {:.1}s", i as f64 * 0.1)}>{c.to_string()}</span>
                        }) }
                    </span>
                    {" "}
                    <span class="nav-logo-last">
                        { for "Adhikary".chars().enumerate().map(|(i, c)| html! {
                            <span class="nav-letter" style={format!("animation-delay: {:.1}s", (i + 4) as f64 * 0.1)}>{c.to_string()}</span>
                        }) }
                    </span>
                </a>

                <div class="nav-right">
                    { nav_links("nav-link") }
                    <a href={config::PHOTOS_URL} target="_blank" rel="noopener noreferrer" class="nav-link nav-photos">
                        {"📷 Photos"}
                    </a>
                    <a href={config::RESUME_PATH} download="" class="nav-resume">
                        {"⬇ Resume"}
                    </a>
                </div>

                <button
                    class={classes!("burger-menu", mobile_menu.is_open().then(|| "open"))}
                    onclick={toggle_menu}
                    aria-label="Toggle mobile menu"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            if mobile_menu.is_open() {
                <div class="mobile-menu">
                    { nav_links("mobile-link") }
                    <a href={config::PHOTOS_URL} target="_blank" rel="noopener noreferrer" class="mobile-link">
                        {"📷 Photos"}
                    </a>
                    <a href={config::RESUME_PATH} download="" class="mobile-link nav-resume">
                        {"⬇ Download Resume"}
                    </a>
                </div>
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: background 0.5s ease, box-shadow 0.5s ease;
                }
                .top-nav.scrolled {
                    background: rgba(17, 24, 39, 0.95);
                    backdrop-filter: blur(16px);
                    border-bottom: 1px solid rgba(99, 102, 241, 0.2);
                    box-shadow: 0 20px 40px rgba(99, 102, 241, 0.05);
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: var(--text-primary);
                    text-decoration: none;
                }
                .nav-letter {
                    display: inline-block;
                    opacity: 0;
                    animation: navLetterIn 0.3s forwards;
                }
                .nav-letter:hover {
                    color: var(--primary);
                    transform: scale(1.2);
                }
                @keyframes navLetterIn {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-link {
                    color: var(--text-secondary);
                    text-decoration: none;
                    position: relative;
                    transition: color 0.3s ease;
                }
                .nav-link:hover,
                .nav-link.active {
                    color: var(--primary);
                }
                .nav-link.active::after {
                    content: "";
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: -6px;
                    height: 2px;
                    background: linear-gradient(90deg, var(--primary), var(--secondary));
                }
                .nav-resume {
                    padding: 0.5rem 1rem;
                    border-radius: 0.75rem;
                    color: #fff;
                    text-decoration: none;
                    background: linear-gradient(90deg, var(--primary), var(--secondary));
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: var(--text-primary);
                    transition: transform 0.3s ease;
                }
                .mobile-menu {
                    display: flex;
                    flex-direction: column;
                    padding: 1rem 1.5rem;
                    gap: 0.75rem;
                    background: rgba(17, 24, 39, 0.98);
                }
                .mobile-link {
                    color: var(--text-secondary);
                    text-decoration: none;
                    padding: 0.5rem 0;
                }
                .mobile-link.active {
                    color: var(--primary);
                }
                @media (max-width: 768px) {
                    .nav-right { display: none; }
                    .burger-menu { display: flex; }
                }
                "#}
            </style>
        </nav>
    }
}
