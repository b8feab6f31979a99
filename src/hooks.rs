//! Reactive bindings between the DOM and [`crate::motion`].
//!
//! All browser work happens inside effects or event handlers, so these
//! hooks are safe to call during server rendering: there they simply
//! return their initial values.

use std::time::Duration;

use leptos::ev::MouseEvent;
use leptos::html::ElementType;
use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

use crate::motion::{Intensity, PointerSample, Threshold};
#[cfg(feature = "hydrate")]
use crate::motion::{is_scrolled, scroll_progress, Bounds, ListenerHandle, OneShotReveal, Watcher};

#[cfg(feature = "hydrate")]
struct DomWatcher(::web_sys::IntersectionObserver);

#[cfg(feature = "hydrate")]
impl Watcher for DomWatcher {
    fn disconnect(&mut self) {
        self.0.disconnect();
    }
}

/// One-shot visibility flag for the element behind `node_ref`.
///
/// Starts `false`, becomes `true` the first time at least `threshold` of
/// the element is on screen, and stays `true`. The observer is dropped as
/// soon as it fires and again (harmlessly) when the component unmounts.
#[allow(unused_variables)]
pub fn use_reveal<E>(node_ref: NodeRef<E>, threshold: Threshold) -> ReadSignal<bool>
where
    E: ElementType,
    E::Output: leptos::wasm_bindgen::JsCast + Clone + 'static,
{
    let (visible, set_visible) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        use ::web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsValue;

        let machine = StoredValue::new_local(None::<OneShotReveal<Option<DomWatcher>>>);
        // Kept apart from the machine so the callback is never dropped while it runs
        let callback_slot = StoredValue::new_local(None::<Closure<dyn FnMut(js_sys::Array)>>);

        Effect::new(move |_| {
            let Some(el) = node_ref.get() else {
                return;
            };
            if machine.with_value(|m| m.is_some()) {
                return;
            }
            let el: ::web_sys::Element = el.unchecked_into();

            let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let ratio = entry.intersection_ratio();
                    let fired = machine
                        .try_update_value(|m| m.as_mut().map(|m| m.observe(ratio)).unwrap_or(false))
                        .unwrap_or(false);
                    if fired {
                        log::debug!("revealed at {:.2} of viewport", ratio);
                        set_visible.set(true);
                    }
                }
            });

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(threshold.value()));

            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                Ok(observer) => {
                    observer.observe(&el);
                    machine.set_value(Some(OneShotReveal::new(threshold, Some(DomWatcher(observer)))));
                    callback_slot.set_value(Some(callback));
                }
                Err(err) => {
                    log::warn!("IntersectionObserver unavailable, showing content: {:?}", err);
                    let mut reveal = OneShotReveal::new(threshold, None);
                    reveal.fail_open();
                    machine.set_value(Some(reveal));
                    set_visible.set(true);
                }
            }
        });

        on_cleanup(move || {
            machine.try_update_value(|m| {
                if let Some(m) = m.as_mut() {
                    m.release();
                }
            });
        });
    }

    visible
}

/// Whether the page has scrolled past the header's threshold
pub fn use_scrolled() -> ReadSignal<bool> {
    let (scrolled, set_scrolled) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = window().scroll_y().unwrap_or(0.0);
            let next = is_scrolled(y);
            if next != scrolled.get_untracked() {
                set_scrolled.set(next);
            }
        });
        let mut listener = ListenerHandle::new(move || handle.remove());
        on_cleanup(move || {
            listener.release();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = set_scrolled;

    scrolled
}

/// Scroll progress of the element behind `node_ref` past the viewport top, in `[0, 1]`
#[allow(unused_variables)]
pub fn use_scroll_progress<E>(node_ref: NodeRef<E>) -> ReadSignal<f64>
where
    E: ElementType,
    E::Output: leptos::wasm_bindgen::JsCast + Clone + 'static,
{
    let (progress, set_progress) = signal(0.0);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            if let Some(el) = node_ref.get_untracked() {
                let rect = el.unchecked_ref::<::web_sys::Element>().get_bounding_client_rect();
                set_progress.set(scroll_progress(rect.top(), rect.height()));
            }
        });
        let mut listener = ListenerHandle::new(move || handle.remove());
        on_cleanup(move || {
            listener.release();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = set_progress;

    progress
}

/// Flips to `true` once `delay` has elapsed after mount
#[allow(unused_variables)]
pub fn use_mounted_after(delay: Duration) -> ReadSignal<bool> {
    let (ready, set_ready) = signal(false);

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        set_timeout(move || set_ready.set(true), delay);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = set_ready;

    ready
}

/// Pointer sample for a mouse event, measured against the listening element
#[allow(unused_variables)]
pub fn pointer_sample(ev: &MouseEvent, intensity: Intensity) -> Option<PointerSample> {
    #[cfg(feature = "hydrate")]
    {
        let target = ev.current_target()?;
        let el = target.dyn_into::<::web_sys::Element>().ok()?;
        let rect = el.get_bounding_client_rect();
        let bounds = Bounds::new(rect.left(), rect.top(), rect.width(), rect.height());
        return Some(PointerSample::from_client(
            bounds,
            ev.client_x() as f64,
            ev.client_y() as f64,
            intensity,
        ));
    }
    #[cfg(not(feature = "hydrate"))]
    None
}
