use yew::prelude::*;

use crate::behavior::menu::MenuVariant;
use crate::components::social::dock::SocialDock;
use crate::components::social::floating::SocialOrbit;
use crate::components::social::sidebar::SocialSidebar;

#[derive(Properties, PartialEq)]
pub struct SocialMenuProps {
    #[prop_or_default]
    pub variant: MenuVariant,
}

#[function_component(SocialMenu)]
pub fn social_menu(props: &SocialMenuProps) -> Html {
    match props.variant {
        MenuVariant::Sidebar => html! { <SocialSidebar /> },
        MenuVariant::Dock => html! { <SocialDock /> },
        MenuVariant::Orbit => html! { <SocialOrbit /> },
    }
}
