use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

/// Emits `on_enter` every time the element behind `node` scrolls into view.
#[hook]
pub fn use_viewport_enter(node: NodeRef, on_enter: Callback<()>) {
    use_effect_with_deps(
        move |(node, on_enter): &(NodeRef, Callback<()>)| {
            let on_enter = on_enter.clone();
            let observer = node.cast::<Element>().and_then(|element| {
                let callback = Closure::<dyn Fn(Array)>::new(move |entries: Array| {
                    let entered = entries.iter().any(|entry| {
                        entry
                            .unchecked_into::<IntersectionObserverEntry>()
                            .is_intersecting()
                    });
                    if entered {
                        on_enter.emit(());
                    }
                });

                match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
                    Ok(observer) => {
                        observer.observe(&element);
                        Some((observer, callback))
                    }
                    Err(err) => {
                        warn!("IntersectionObserver unavailable: {:?}", err);
                        None
                    }
                }
            });

            move || {
                // The closure has to outlive the observer.
                if let Some((observer, _callback)) = observer {
                    observer.disconnect();
                }
            }
        },
        (node, on_enter),
    );
}
