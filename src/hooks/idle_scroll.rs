use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

pub const DEFAULT_IDLE_MS: u32 = 1_300;

/// `true` once the page has not scrolled for `delay_ms`; any scroll shows the navbar again.
#[hook]
pub fn use_hide_on_idle_scroll(delay_ms: u32) -> bool {
    let hidden = use_state(|| false);

    {
        let hidden = hidden.setter();
        use_effect_with_deps(
            move |delay_ms: &u32| {
                let delay_ms = *delay_ms;
                let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

                let on_scroll = {
                    let pending = pending.clone();
                    move || {
                        hidden.set(false);
                        let hide = hidden.clone();
                        // replacing the handle cancels the previous countdown
                        *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || hide.set(true)));
                    }
                };
                on_scroll();

                let listener = Closure::wrap(Box::new(on_scroll) as Box<dyn FnMut()>);
                let window = web_sys::window();
                if let Some(window) = &window {
                    let _ = window
                        .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                    pending.borrow_mut().take();
                }
            },
            delay_ms,
        );
    }

    *hidden
}
