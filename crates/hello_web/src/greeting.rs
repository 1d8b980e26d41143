//! Click-to-greet bootstrap.
//!
//! The DOM surface is reached through [`Host`] so the binding rules can be
//! unit-tested on the host; the wasm implementation lives in `web`.

use crate::error::HostError;

/// Id of the element the greeting is bound to.
pub const TARGET_ELEMENT_ID: &str = "hello-kotlin";

/// Text shown in the alert.
pub const GREETING_MESSAGE: &str = "Hello, developer!";

/// Attribute set on the element once its listener is registered.
pub const BOUND_MARKER_ATTR: &str = "data-hello-bound";

/// The slice of the browser that [`bootstrap`] needs.
///
/// Implementations are cheap handles: the click listener keeps a clone to
/// reach [`Host::alert`].
pub trait Host: Clone + 'static {
    type Element;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Whether a greeting listener was already registered on `element`.
    fn is_bound(&self, element: &Self::Element) -> bool;

    fn mark_bound(&self, element: &Self::Element);

    fn add_click_listener(
        &self,
        element: &Self::Element,
        listener: Box<dyn FnMut()>,
    ) -> Result<(), HostError>;

    /// Blocking modal alert. Failures are ignored.
    fn alert(&self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    Bound,
    AlreadyBound,
    MissingElement,
    Rejected(HostError),
}

/// Binds the greeting alert to [`TARGET_ELEMENT_ID`].
///
/// Never fails from the caller's point of view: a missing element or a refused
/// registration is logged and reported through the outcome only. Running it
/// again on the same element does not stack listeners.
pub fn bootstrap<H: Host>(host: &H) -> BootstrapOutcome {
    let Some(element) = host.element_by_id(TARGET_ELEMENT_ID) else {
        tracing::debug!(id = TARGET_ELEMENT_ID, "target element not found; nothing to bind");
        return BootstrapOutcome::MissingElement;
    };

    if host.is_bound(&element) {
        tracing::debug!(id = TARGET_ELEMENT_ID, "greeting already bound");
        return BootstrapOutcome::AlreadyBound;
    }

    let alert_host = host.clone();
    let listener = Box::new(move || alert_host.alert(GREETING_MESSAGE));

    match host.add_click_listener(&element, listener) {
        Ok(()) => {
            host.mark_bound(&element);
            tracing::info!(id = TARGET_ELEMENT_ID, "greeting bound");
            BootstrapOutcome::Bound
        }
        Err(e) => {
            tracing::warn!(id = TARGET_ELEMENT_ID, error = %e, "failed to bind greeting");
            BootstrapOutcome::Rejected(e)
        }
    }
}
