//! Viewport intersection watching for section reveal and scroll-spy.
//!
//! Wraps an `IntersectionObserver` over the five section anchors: a
//! section counts as visible once 30% of it sits inside a viewport band
//! shrunk by 20% at the bottom. The wrapper owns the JS-side callback
//! closure for the observer's lifetime; `disconnect` is the teardown path
//! and must run before the owning view unmounts.

#[cfg(test)]
#[path = "observer_test.rs"]
mod observer_test;

use crate::state::sections::SectionId;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
#[cfg(target_arch = "wasm32")]
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of a section that must be visible before it counts as
/// intersecting.
pub const REVEAL_THRESHOLD: f64 = 0.3;

/// Root margin shrinking the observation band by 20% at the bottom, so
/// sections activate once they are meaningfully on screen rather than at
/// the first touched pixel.
pub const VIEWPORT_MARGIN: &str = "0px 0px -20% 0px";

/// A connected intersection observer over the section anchors.
///
/// Outside a browser this is an inert stub and [`SectionObserver::connect`]
/// returns `None`.
pub struct SectionObserver {
    #[cfg(target_arch = "wasm32")]
    inner: IntersectionObserver,
    /// Keeps the JS callback alive while the observer is connected.
    #[cfg(target_arch = "wasm32")]
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl SectionObserver {
    /// Connect an observer watching every section anchor in the document.
    ///
    /// `on_enter` fires once per entry whose state transitions to
    /// intersecting, in the order the browser delivers them. Returns
    /// `None` outside a browser or when observer construction fails;
    /// anchors missing from the document are skipped with a warning.
    pub fn connect(on_enter: impl Fn(SectionId) + 'static) -> Option<Self> {
        #[cfg(target_arch = "wasm32")]
        {
            let document = web_sys::window().and_then(|w| w.document())?;

            let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                move |entries: js_sys::Array, _obs: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        if !entry.is_intersecting() {
                            continue;
                        }
                        let id = entry.target().id();
                        match SectionId::from_anchor(&id) {
                            Some(section) => on_enter(section),
                            None => log::warn!("intersection for unknown element id {id:?}"),
                        }
                    }
                },
            );

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
            options.set_root_margin(VIEWPORT_MARGIN);

            let inner = IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;

            for section in SectionId::ALL {
                match document.get_element_by_id(section.anchor()) {
                    Some(el) => inner.observe(&el),
                    None => log::warn!("missing section anchor {:?}", section.anchor()),
                }
            }

            Some(Self {
                inner,
                _callback: callback,
            })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = on_enter;
            None
        }
    }

    /// Stop watching all sections. No `on_enter` invocations occur after
    /// this returns.
    pub fn disconnect(&self) {
        #[cfg(target_arch = "wasm32")]
        self.inner.disconnect();
    }
}
