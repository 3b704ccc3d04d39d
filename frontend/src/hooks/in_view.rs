use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::behavior::reveal::RevealLatch;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// `true` from the first time `node` intersects the viewport onwards.
///
/// `root_margin` is passed straight to the observer, e.g. `"-100px"` to
/// wait until the element is 100px inside the viewport. The observer is
/// disconnected as soon as the latch flips, and on unmount.
#[hook]
pub fn use_in_view(node: NodeRef, root_margin: &'static str) -> bool {
    let latch = use_state(RevealLatch::default);
    let revealed = latch.is_revealed();

    {
        let latch = latch.clone();
        use_effect_with_deps(
            move |(node, revealed): &(NodeRef, bool)| {
                let mut observer: Option<(IntersectionObserver, ObserverCallback)> = None;

                if !*revealed {
                    if let Some(element) = node.cast::<Element>() {
                        let on_entries = latch.clone();
                        let callback = Closure::wrap(Box::new(
                            move |entries: Array, observer: IntersectionObserver| {
                                let intersecting = entries.iter().any(|entry| {
                                    entry
                                        .unchecked_into::<IntersectionObserverEntry>()
                                        .is_intersecting()
                                });
                                let mut next = *on_entries;
                                if next.observe(intersecting) {
                                    observer.disconnect();
                                    on_entries.set(next);
                                }
                            },
                        )
                            as Box<dyn FnMut(Array, IntersectionObserver)>);

                        let options = IntersectionObserverInit::new();
                        options.set_root_margin(root_margin);

                        match IntersectionObserver::new_with_options(
                            callback.as_ref().unchecked_ref(),
                            &options,
                        ) {
                            Ok(created) => {
                                created.observe(&element);
                                observer = Some((created, callback));
                            }
                            Err(err) => {
                                // no observer support, show the content right away
                                log::warn!("IntersectionObserver unavailable: {:?}", err);
                                let mut next = *latch;
                                next.observe(true);
                                latch.set(next);
                            }
                        }
                    }
                }

                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            (node, revealed),
        );
    }

    revealed
}
