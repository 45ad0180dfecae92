#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

// Page logic lives in host-testable modules; only `wasm` touches the DOM.

pub mod config;
pub mod contact;
pub mod error;
pub mod escape;
pub mod modal;
pub mod nav;
pub mod portfolio;
pub mod reveal;
pub mod scene;

pub use config::SiteConfig;
pub use error::SiteError;
pub use escape::escape_html;
pub use portfolio::{Portfolio, WorkItem, WorkItemId};

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
