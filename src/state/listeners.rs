use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use crate::error::SliderError;

type Handler = Closure<dyn FnMut(Event)>;

/// Listeners registered on a shared target (usually the document).
///
/// Every listener added through [`GlobalListeners::listen`] is removed again when the
/// guard drops, so a component holding it in its effect cleanup cannot leak handlers.
pub struct GlobalListeners {
    target: EventTarget,
    handlers: Vec<(&'static str, Handler)>,
}

impl GlobalListeners {
    pub fn on_document() -> Result<Self, SliderError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(SliderError::NoDocument)?;
        Ok(Self::new(document.into()))
    }

    pub fn new(target: EventTarget) -> Self {
        Self {
            target,
            handlers: Vec::new(),
        }
    }

    /// Registers `f` for `kind`. Non-passive listeners may call `prevent_default`.
    pub fn listen<F>(&mut self, kind: &'static str, passive: bool, f: F) -> Result<(), SliderError>
    where
        F: FnMut(Event) + 'static,
    {
        let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
        let opts = AddEventListenerOptions::new();
        opts.set_passive(passive);
        self.target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                cb.as_ref().unchecked_ref(),
                &opts,
            )
            .map_err(|e| SliderError::listener(kind, e))?;
        self.handlers.push((kind, cb));
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.handlers.len()
    }
}

impl Drop for GlobalListeners {
    fn drop(&mut self) {
        for (kind, cb) in self.handlers.drain(..) {
            if let Err(e) = self
                .target
                .remove_event_listener_with_callback(kind, cb.as_ref().unchecked_ref())
            {
                log::error!("{}", SliderError::listener(kind, e));
            }
        }
        log::debug!("global listeners removed");
    }
}

impl std::fmt::Debug for GlobalListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kinds: Vec<&str> = self.handlers.iter().map(|(k, _)| *k).collect();
        f.debug_struct("GlobalListeners").field("kinds", &kinds).finish()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;
    use web_sys::EventInit;

    fn cancelable(kind: &str) -> Event {
        let init = EventInit::new();
        init.set_cancelable(true);
        Event::new_with_event_init_dict(kind, &init).unwrap()
    }

    #[wasm_bindgen_test]
    fn listeners_run_until_dropped() {
        let target = EventTarget::new().unwrap();
        let hits = Rc::new(Cell::new(0));
        let mut listeners = GlobalListeners::new(target.clone());
        for kind in ["mouseup", "touchend"] {
            let hits = hits.clone();
            listeners
                .listen(kind, true, move |_e: Event| hits.set(hits.get() + 1))
                .unwrap();
        }
        assert_eq!(listeners.count(), 2);

        target.dispatch_event(&Event::new("mouseup").unwrap()).unwrap();
        target.dispatch_event(&Event::new("touchend").unwrap()).unwrap();
        assert_eq!(hits.get(), 2);

        drop(listeners);
        target.dispatch_event(&Event::new("mouseup").unwrap()).unwrap();
        target.dispatch_event(&Event::new("touchend").unwrap()).unwrap();
        assert_eq!(hits.get(), 2);
    }

    #[wasm_bindgen_test]
    fn non_passive_listener_prevents_default() {
        let target = EventTarget::new().unwrap();
        let mut listeners = GlobalListeners::new(target.clone());
        listeners
            .listen("touchmove", false, |e: Event| e.prevent_default())
            .unwrap();

        let e = cancelable("touchmove");
        let proceed = target.dispatch_event(&e).unwrap();
        assert!(!proceed);
        assert!(e.default_prevented());
    }
}
