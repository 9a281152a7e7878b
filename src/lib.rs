/// BrickMind - LEGO set price finder
/// Built with Rust + WASM + Yew

pub mod analytics;
pub mod catalog;
pub mod comparison;
pub mod config;
pub mod navigation;
pub mod pricing;
pub mod set_number;
pub mod storage;
pub mod theme;
pub mod ui;
pub mod wishlist;
pub mod wishlist_data;

use wasm_bindgen::prelude::*;

pub use set_number::extract_set_number;
pub use storage::{AppStorage, BrowserStorage, KeyValueStore, MemoryStorage, StorageError};
pub use wishlist::WishlistStore;
pub use wishlist_data::{
    AddOutcome, CandidateError, ClearOutcome, RemoveOutcome, ToggleOutcome, WishlistCandidate,
    WishlistEntry,
};

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export the set number extractor for JavaScript access
#[wasm_bindgen(js_name = extractSetNumber)]
pub fn extract_set_number_js(text: &str) -> Option<String> {
    set_number::extract_set_number(text)
}

/// Current wishlist as a JS array, in persisted order
#[wasm_bindgen(js_name = wishlistSnapshot)]
pub fn wishlist_snapshot() -> Result<JsValue, JsValue> {
    let storage = BrowserStorage::local().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let store = WishlistStore::open(storage);

    serde_wasm_bindgen::to_value(&store.get_all().to_vec())
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize wishlist: {:?}", e)))
}

// Start the Yew app
#[wasm_bindgen]
pub fn start_app() {
    yew::Renderer::<ui::App>::new().render();
}
