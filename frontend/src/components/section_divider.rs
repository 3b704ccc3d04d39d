use yew::prelude::*;

use crate::hooks::in_view::use_in_view;

#[derive(Properties, PartialEq)]
pub struct SectionDividerProps {
    #[prop_or_default]
    pub gradient: bool,
}

#[function_component(SectionDivider)]
pub fn section_divider(props: &SectionDividerProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), "-50px");

    html! {
        <div
            ref={node}
            class={classes!(
                "section-divider",
                props.gradient.then(|| "gradient"),
                visible.then(|| "visible"),
            )}
            aria-hidden="true"
        >
            <span class="divider-line left"></span>
            <span class="divider-dot"></span>
            <span class="divider-line right"></span>

            <style>
                {r#"
                .section-divider {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    max-width: 40rem;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                }
                .divider-line {
                    flex: 1;
                    height: 1px;
                    background: var(--border-color);
                    transform: scaleX(0);
                    transition: transform 0.8s ease-out;
                }
                .divider-line.left { transform-origin: right; }
                .divider-line.right { transform-origin: left; }
                .section-divider.visible .divider-line {
                    transform: scaleX(1);
                }
                .section-divider.gradient .divider-line.left {
                    background: linear-gradient(90deg, transparent, var(--primary));
                }
                .section-divider.gradient .divider-line.right {
                    background: linear-gradient(90deg, var(--secondary), transparent);
                }
                .divider-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 50%;
                    background: var(--primary);
                    opacity: 0;
                    transition: opacity 0.4s ease 0.6s;
                }
                .section-divider.visible .divider-dot {
                    opacity: 1;
                }
                "#}
            </style>
        </div>
    }
}
