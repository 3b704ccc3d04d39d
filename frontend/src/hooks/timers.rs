//! Timer-driven animation hooks.
//!
//! Each hook keeps at most one `Timeout` alive. The timeout belongs to the
//! effect run that scheduled it: when the animation state changes or the
//! component unmounts, the effect's cleanup drops it, which cancels it.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::behavior::counter::{CountUp, COUNT_TICK_MS};
use crate::behavior::typewriter::Typewriter;

/// Text currently shown by a typing effect cycling through `sources`.
#[hook]
pub fn use_typewriter(sources: &'static [&'static str]) -> &'static str {
    let engine = use_state(|| Typewriter::new(sources));

    {
        let handle = engine.clone();
        use_effect_with_deps(
            move |current: &Typewriter| {
                let mut next = current.clone();
                let timeout = Timeout::new(current.delay_ms(), move || {
                    next.tick();
                    handle.set(next);
                });
                move || drop(timeout)
            },
            (*engine).clone(),
        );
    }

    engine.text()
}

/// Value of a count-up animation that starts the first time `visible` is true.
#[hook]
pub fn use_count_up(target: u32, visible: bool) -> u32 {
    let counter = use_state(|| CountUp::with_defaults(target));

    {
        let handle = counter.clone();
        use_effect_with_deps(
            move |(visible, current): &(bool, CountUp)| {
                let mut pending = None;
                if *visible {
                    let mut next = current.clone();
                    if next.start() {
                        handle.set(next);
                    } else if !next.is_finished() {
                        pending = Some(Timeout::new(COUNT_TICK_MS, move || {
                            next.tick();
                            handle.set(next);
                        }));
                    }
                }
                move || drop(pending)
            },
            (visible, (*counter).clone()),
        );
    }

    counter.value()
}

/// Becomes `value` once `delay_ms` has passed with `armed` set; `0` before that.
///
/// Used for the skill bars, which fill a little after they scroll into view.
#[hook]
pub fn use_delayed_value(value: u32, armed: bool, delay_ms: u32) -> u32 {
    let shown = use_state(|| 0u32);

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |(value, armed): &(u32, bool)| {
                let pending = armed.then(|| {
                    let value = *value;
                    Timeout::new(delay_ms, move || shown.set(value))
                });
                move || drop(pending)
            },
            (value, armed),
        );
    }

    *shown
}
