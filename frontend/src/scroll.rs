use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::prelude::*;

use crate::page::{PageAction, PageState};

/// Host object that delivers scroll events.
pub trait Viewport {
    type Listener;

    /// Registers `handler`, which is called with the vertical scroll offset on
    /// every scroll event. Returns `None` if the host refused the listener.
    fn add_scroll_listener(&self, handler: Box<dyn Fn(f64)>) -> Option<Self::Listener>;

    fn remove_scroll_listener(&self, listener: Self::Listener);
}

#[derive(Clone)]
pub struct BrowserViewport {
    window: Window,
}

impl BrowserViewport {
    pub fn current() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

impl Viewport for BrowserViewport {
    type Listener = Closure<dyn Fn()>;

    fn add_scroll_listener(&self, handler: Box<dyn Fn(f64)>) -> Option<Self::Listener> {
        let window = self.window.clone();
        let callback = Closure::<dyn Fn()>::new(move || match window.scroll_y() {
            Ok(offset) => handler(offset),
            Err(err) => warn!("Could not read scroll offset: {:?}", err),
        });

        match self
            .window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        {
            Ok(()) => Some(callback),
            Err(err) => {
                warn!("Failed to attach scroll listener: {:?}", err);
                None
            }
        }
    }

    fn remove_scroll_listener(&self, listener: Self::Listener) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
        {
            warn!("Failed to detach scroll listener: {:?}", err);
        }
    }
}

/// Keeps a scroll listener attached for as long as it is alive.
pub struct ScrollSubscription<V: Viewport> {
    viewport: V,
    listener: Option<V::Listener>,
}

impl<V: Viewport> ScrollSubscription<V> {
    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }
}

impl<V: Viewport> Drop for ScrollSubscription<V> {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.viewport.remove_scroll_listener(listener);
        }
    }
}

pub fn observe_scroll<V, F>(viewport: V, handler: F) -> ScrollSubscription<V>
where
    V: Viewport,
    F: Fn(f64) + 'static,
{
    let listener = viewport.add_scroll_listener(Box::new(handler));
    ScrollSubscription { viewport, listener }
}

/// Starts feeding scroll offsets from `viewport` into `dispatch`.
///
/// Returns `None` when there is no viewport to observe. The listener stays
/// attached until the returned subscription is dropped.
pub fn attach_page_observer<V, F>(viewport: Option<V>, dispatch: F) -> Option<ScrollSubscription<V>>
where
    V: Viewport,
    F: Fn(PageAction) + 'static,
{
    let Some(viewport) = viewport else {
        warn!("No window available, scroll observer not attached");
        return None;
    };

    let subscription = observe_scroll(viewport, move |offset| dispatch(PageAction::Scrolled(offset)));
    if subscription.is_attached() {
        info!("Scroll observer attached");
    }
    Some(subscription)
}

/// Owns the page state and keeps it in sync with the window scroll offset.
///
/// The listener is attached once on mount and removed when the calling
/// component unmounts.
#[hook]
pub fn use_page_state() -> UseReducerHandle<PageState> {
    let state = use_reducer_eq(PageState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let subscription = attach_page_observer(BrowserViewport::current(), move |action| {
                    dispatcher.dispatch(action);
                });

                move || {
                    if subscription.is_some() {
                        info!("Scroll observer detached");
                    }
                    drop(subscription);
                }
            },
            (),
        );
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::page::SelectedPage;

    #[derive(Default)]
    struct ListenerTable {
        next_id: usize,
        attached: Vec<(usize, Rc<dyn Fn(f64)>)>,
    }

    #[derive(Clone, Default)]
    struct FakeViewport {
        listeners: Rc<RefCell<ListenerTable>>,
        refuse: bool,
    }

    impl FakeViewport {
        fn refusing() -> Self {
            Self {
                refuse: true,
                ..Self::default()
            }
        }

        fn listener_count(&self) -> usize {
            self.listeners.borrow().attached.len()
        }

        fn scroll_to(&self, offset: f64) {
            let handlers: Vec<Rc<dyn Fn(f64)>> = self
                .listeners
                .borrow()
                .attached
                .iter()
                .map(|(_, handler)| Rc::clone(handler))
                .collect();
            for handler in handlers {
                handler(offset);
            }
        }
    }

    impl Viewport for FakeViewport {
        type Listener = usize;

        fn add_scroll_listener(&self, handler: Box<dyn Fn(f64)>) -> Option<usize> {
            if self.refuse {
                return None;
            }
            let mut listeners = self.listeners.borrow_mut();
            let id = listeners.next_id;
            listeners.next_id += 1;
            listeners.attached.push((id, Rc::from(handler)));
            Some(id)
        }

        fn remove_scroll_listener(&self, listener: usize) {
            self.listeners
                .borrow_mut()
                .attached
                .retain(|(id, _)| *id != listener);
        }
    }

    fn state_sink() -> (Rc<RefCell<PageState>>, impl Fn(PageAction) + 'static) {
        let state = Rc::new(RefCell::new(PageState::default()));
        let sink = Rc::clone(&state);
        let dispatch = move |action| {
            let next = sink.borrow().apply(action);
            *sink.borrow_mut() = next;
        };
        (state, dispatch)
    }

    fn mount(viewport: &FakeViewport) -> (Rc<RefCell<PageState>>, ScrollSubscription<FakeViewport>) {
        let (state, dispatch) = state_sink();
        let subscription = attach_page_observer(Some(viewport.clone()), dispatch)
            .expect("a viewport yields a subscription");
        (state, subscription)
    }

    #[test]
    fn missing_viewport_attaches_nothing() {
        let (state, dispatch) = state_sink();
        let subscription = attach_page_observer(None::<FakeViewport>, dispatch);
        assert!(subscription.is_none());
        assert_eq!(*state.borrow(), PageState::default());
    }

    #[test]
    fn registers_exactly_once_per_attach() {
        let viewport = FakeViewport::default();
        let (_, subscription) = mount(&viewport);
        assert_eq!(viewport.listener_count(), 1);
        assert_eq!(viewport.listeners.borrow().next_id, 1);

        for offset in [120.0, 0.0, 640.0] {
            viewport.scroll_to(offset);
        }
        // State changes do not cause another registration.
        assert_eq!(viewport.listeners.borrow().next_id, 1);
        drop(subscription);
    }

    #[test]
    fn subscription_stays_live_until_dropped() {
        let viewport = FakeViewport::default();
        let (state, subscription) = mount(&viewport);

        viewport.scroll_to(300.0);
        assert!(!state.borrow().is_top_of_page);
        assert_eq!(viewport.listener_count(), 1);

        viewport.scroll_to(0.0);
        assert!(state.borrow().is_top_of_page);
        assert_eq!(viewport.listener_count(), 1);

        drop(subscription);
        viewport.scroll_to(50.0);
        assert!(state.borrow().is_top_of_page);
    }

    #[test]
    fn attaches_one_listener_and_detaches_on_drop() {
        let viewport = FakeViewport::default();
        let (_, subscription) = mount(&viewport);
        assert!(subscription.is_attached());
        assert_eq!(viewport.listener_count(), 1);

        drop(subscription);
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn repeated_mounts_do_not_leak() {
        let viewport = FakeViewport::default();
        for _ in 0..10 {
            let (_, subscription) = mount(&viewport);
            assert_eq!(viewport.listener_count(), 1);
            drop(subscription);
        }
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn scroll_events_update_state() {
        let viewport = FakeViewport::default();
        let (state, _subscription) = mount(&viewport);

        viewport.scroll_to(250.0);
        assert_eq!(
            *state.borrow(),
            PageState {
                selected_page: SelectedPage::Home,
                is_top_of_page: false,
            }
        );

        viewport.scroll_to(0.0);
        assert_eq!(*state.borrow(), PageState::default());
    }

    #[test]
    fn scrolling_away_keeps_selection() {
        let viewport = FakeViewport::default();
        let (state, _subscription) = mount(&viewport);

        let selected = state.borrow().apply(PageAction::Select(SelectedPage::OurClasses));
        *state.borrow_mut() = selected;
        viewport.scroll_to(900.0);

        assert_eq!(state.borrow().selected_page, SelectedPage::OurClasses);
        assert!(!state.borrow().is_top_of_page);
    }

    #[test]
    fn unmount_after_many_events_restores_listener_count() {
        let viewport = FakeViewport::default();
        let (state, subscription) = mount(&viewport);
        for offset in [10.0, 0.0, 35.5, 400.0, 0.0, 12.0] {
            viewport.scroll_to(offset);
        }
        drop(subscription);
        assert_eq!(viewport.listener_count(), 0);

        // Events after teardown no longer reach the state.
        let before = state.borrow().clone();
        viewport.scroll_to(0.0);
        assert_eq!(*state.borrow(), before);
    }

    #[test]
    fn refused_listener_is_not_removed_twice() {
        let viewport = FakeViewport::refusing();
        let (_, subscription) = mount(&viewport);
        assert!(!subscription.is_attached());
        drop(subscription);
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn independent_subscriptions_detach_separately() {
        let viewport = FakeViewport::default();
        let (_, first) = mount(&viewport);
        let (_, second) = mount(&viewport);
        assert_eq!(viewport.listener_count(), 2);

        drop(first);
        assert_eq!(viewport.listener_count(), 1);
        drop(second);
        assert_eq!(viewport.listener_count(), 0);
    }
}
