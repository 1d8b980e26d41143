use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::greeting::bootstrap;
use crate::logging;

mod browser_host;

pub use browser_host::BrowserHost;

/// Page entry: binds the greeting once the document has been parsed.
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init();

    let host = match BrowserHost::current() {
        Ok(h) => h,
        Err(e) => {
            tracing::warn!(error = %e, "greeting not started");
            return;
        }
    };

    if host.document().ready_state() != "loading" {
        bootstrap(&host);
        return;
    }

    let document = host.document().clone();
    let on_ready = Closure::once_into_js(move || {
        bootstrap(&host);
    });
    if let Err(e) =
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
    {
        tracing::warn!(error = ?e, "failed to wait for DOMContentLoaded");
    }
}
