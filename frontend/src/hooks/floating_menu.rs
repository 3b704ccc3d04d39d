use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, Node};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::behavior::menu::{MenuEvent, MenuState};

/// Open/close state for a floating menu rooted at `root`.
///
/// Returns whether the menu is open and the callback for its toggle button.
/// Any window scroll or a mousedown outside `root` closes it.
#[hook]
pub fn use_floating_menu(root: NodeRef) -> (bool, Callback<MouseEvent>) {
    let state = use_state(MenuState::default);

    {
        let state = state.clone();
        use_event_with_window("scroll", move |_: Event| {
            let next = state.next(MenuEvent::Scroll);
            if next != *state {
                state.set(next);
            }
        });
    }

    {
        let state = state.clone();
        use_event_with_window("mousedown", move |e: MouseEvent| {
            if !state.is_open() {
                return;
            }
            let Some(container) = root.cast::<Node>() else {
                return;
            };
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            if !container.contains(target.as_ref()) {
                state.set(state.next(MenuEvent::PointerDownOutside));
            }
        });
    }

    let toggle = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.set(state.next(MenuEvent::Toggle));
        })
    };

    (state.is_open(), toggle)
}
