//! Browser-hosted hello-world (wasm).
//!
//! This crate is a stub by default so the workspace builds on native targets
//! without requiring wasm toolchains. The DOM-independent parts (`greeting`,
//! `error`, `logging`) build everywhere and are unit-tested on the host.
//!
//! Enable the real app with: `--features web` (and a wasm32 target).

pub mod error;
pub mod greeting;
pub mod logging;

pub use error::HostError;
pub use greeting::{bootstrap, BootstrapOutcome, Host, GREETING_MESSAGE, TARGET_ELEMENT_ID};

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::{start, BrowserHost};
