use gloo_timers::callback::{Interval, Timeout};
use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{RevealOptions, Scheduler, Subscription, Viewport};

/// Timers backed by `setInterval`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn every(&self, interval_ms: u32, mut tick: Box<dyn FnMut()>) -> Option<Subscription> {
        web_sys::window()?;
        let interval = Interval::new(interval_ms, move || tick());
        Some(Subscription::new(move || drop(interval)))
    }
}

/// Visibility reports backed by `IntersectionObserver`, one observer per
/// watched element.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserViewport;

impl BrowserViewport {
    pub fn is_supported() -> bool {
        web_sys::window()
            .map(|window| {
                Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
            })
            .unwrap_or(false)
    }
}

impl Viewport for BrowserViewport {
    type Target = Element;

    fn observe(
        &self,
        target: &Element,
        options: RevealOptions,
        mut on_change: Box<dyn FnMut(f64, bool)>,
    ) -> Option<Subscription> {
        if !Self::is_supported() {
            return None;
        }

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_change(entry.intersection_ratio(), entry.is_intersecting());
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin());

        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => observer,
                Err(e) => {
                    warn!("Failed to create IntersectionObserver: {:?}", e);
                    return None;
                }
            };
        observer.observe(target);

        Some(Subscription::new(move || {
            observer.disconnect();
            // The release can run from inside the observer callback, so the
            // closure is dropped on the next turn of the event loop.
            Timeout::new(0, move || drop(callback)).forget();
        }))
    }
}
