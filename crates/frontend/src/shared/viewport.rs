//! "Scrolled into view" notifications.
//!
//! [`ViewportTrigger::subscribe`] watches an element with an
//! `IntersectionObserver`; [`ViewportTrigger::on_enter_once`] runs its
//! callback the first time the element becomes visible and never again.
//! The one-shot rule itself lives in [`OnceLatch`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Opens exactly once.
#[derive(Debug, Default)]
pub struct OnceLatch {
    fired: Cell<bool>,
}

impl OnceLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` on the first call only.
    pub fn fire(&self) -> bool {
        !self.fired.replace(true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }
}

/// Fraction of the element that must be visible.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

pub struct ViewportTrigger {
    target: Element,
    threshold: f64,
}

impl ViewportTrigger {
    pub fn subscribe(target: Element) -> Self {
        Self {
            target,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Start observing. Dropping the returned watch disconnects the observer,
    /// so a pending callback never runs after its owner is gone.
    pub fn on_enter_once(self, callback: impl FnOnce() + 'static) -> Result<ViewportWatch, JsValue> {
        let latch = Rc::new(OnceLatch::new());
        let pending: Rc<RefCell<Option<Box<dyn FnOnce()>>>> = Rc::new(RefCell::new(Some(Box::new(callback))));

        let handler = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            let entered = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if !entered || !latch.fire() {
                return;
            }
            observer.disconnect();
            let callback = pending.borrow_mut().take();
            if let Some(callback) = callback {
                callback();
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(self.threshold));
        let observer = IntersectionObserver::new_with_options(handler.as_ref().unchecked_ref(), &init)?;
        observer.observe(&self.target);

        Ok(ViewportWatch {
            observer,
            _handler: handler,
        })
    }
}

pub struct ViewportWatch {
    observer: IntersectionObserver,
    _handler: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for ViewportWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_fires_once() {
        let latch = OnceLatch::new();
        assert!(!latch.has_fired());
        assert!(latch.fire());
        assert!(!latch.fire());
        assert!(!latch.fire());
        assert!(latch.has_fired());
    }
}
