//! WASM controller for the NAF/NAFA cascading selector
//!
//! Four dependent selects (sector → division → group → class) are filled
//! from static option fragments. All cascade logic lives in Rust:
//! - `CascadingSelectController` decides what to fetch and which selects
//!   are enabled
//! - `DomView` / `BrowserFetch` bind it to the page and to `window.fetch`
//! - JavaScript only starts it once the DOM is ready
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { startCascade } from './pkg/naf_web_wasm.js';
//!
//! await init();
//! document.addEventListener('DOMContentLoaded', () => {
//!     startCascade({ divisionsFolder: '/data/divisions/' });
//! });
//! ```

pub mod config;
pub mod controller;
pub mod dom;
pub mod source;
pub mod view;

use wasm_bindgen::prelude::*;

// Re-export main types
pub use config::SelectConfig;
pub use controller::{CascadingSelectController, LoadOutcome};
pub use dom::{start_cascade, BrowserFetch, DomView};
pub use source::{FetchError, FetchResponse, FragmentSource};
pub use view::{ChosenOption, SelectorView};

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Confirmation text shown for a class choice
#[wasm_bindgen(js_name = leafConfirmation)]
pub fn leaf_confirmation(label: &str, value: &str) -> String {
    naf_types::leaf_confirmation(label, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version() {
        let version = get_version();
        assert!(!version.is_empty());
    }

    #[test]
    fn test_leaf_confirmation() {
        assert_eq!(
            leaf_confirmation("Boulangerie", "1071C"),
            "Votre code NAF/NAFA Boulangerie (1071C)"
        );
    }
}
