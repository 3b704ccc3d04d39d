use yew::prelude::*;

use crate::behavior::reveal::transition_delay;
use crate::hooks::in_view::use_in_view;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Seconds to hold the enter animation, for staggered groups.
    #[prop_or_default]
    pub delay: f64,
    #[prop_or("-100px")]
    pub margin: &'static str,
}

/// Fades and lifts its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), props.margin);

    html! {
        <div
            ref={node}
            class={classes!("reveal", visible.then(|| "visible"), props.class.clone())}
            style={transition_delay(props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}
