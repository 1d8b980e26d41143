use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::error::HostError;
use crate::greeting::{Host, BOUND_MARKER_ATTR};

/// [`Host`] backed by the page's `window`.
#[derive(Clone)]
pub struct BrowserHost {
    window: web_sys::Window,
    document: web_sys::Document,
}

impl BrowserHost {
    pub fn current() -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        let document = window.document().ok_or(HostError::NoDocument)?;
        Ok(Self { window, document })
    }

    pub fn document(&self) -> &web_sys::Document {
        &self.document
    }
}

impl Host for BrowserHost {
    type Element = web_sys::Element;

    fn element_by_id(&self, id: &str) -> Option<web_sys::Element> {
        self.document.get_element_by_id(id)
    }

    fn is_bound(&self, element: &web_sys::Element) -> bool {
        element.has_attribute(BOUND_MARKER_ATTR)
    }

    fn mark_bound(&self, element: &web_sys::Element) {
        let _ = element.set_attribute(BOUND_MARKER_ATTR, "true");
    }

    fn add_click_listener(
        &self,
        element: &web_sys::Element,
        listener: Box<dyn FnMut()>,
    ) -> Result<(), HostError> {
        let cb = Closure::wrap(listener);
        element
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .map_err(|e| HostError::ListenerRejected(format!("{e:?}")))?;
        // The listener lives as long as the node; hand the closure to JS.
        cb.forget();
        Ok(())
    }

    fn alert(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }
}
