/// UI module exports
use patternfly_yew::prelude::AlertType;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use yew::Callback;

use crate::catalog::{Product, SortOrder};
use crate::wishlist_data::WishlistEntry;

pub mod analytics;
pub mod app;
pub mod comparison;
pub mod components;
pub mod search;
pub mod tools;
pub mod wishlist_actions;

pub use app::App;

// Simulated backend latency, in milliseconds
const SEARCH_LATENCY_MS: i32 = 800;
const PRICE_CHECK_LATENCY_MS: i32 = 600;
const IDENTIFY_LATENCY_MS: i32 = 600;
const COMPARE_LATENCY_MS: i32 = 800;
const NOTICE_TIMEOUT_MS: i32 = 3000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NoticeKind {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeKind {
    fn alert_type(self) -> AlertType {
        match self {
            NoticeKind::Success => AlertType::Success,
            NoticeKind::Info => AlertType::Info,
            NoticeKind::Warning => AlertType::Warning,
            NoticeKind::Error => AlertType::Danger,
        }
    }
}

/// Short-lived status message shown above the active tab
#[derive(Clone, PartialEq, Debug)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Notice { kind: NoticeKind::Info, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Notice { kind: NoticeKind::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice { kind: NoticeKind::Error, message: message.into() }
    }
}

/// What the search tab is showing
#[derive(Clone, PartialEq, Default, Debug)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<Product>,
    pub sort: SortOrder,
    pub loading: bool,
    /// A search has completed, so an empty result list means "nothing found"
    pub searched: bool,
}

/// Wishlist mutations requested by the tabs; the app applies them to the store
#[derive(Clone, PartialEq, Debug)]
pub enum WishlistAction {
    /// Free-text add; `on_added` fires only when the store accepted the entry
    AddText {
        query: String,
        on_added: Callback<WishlistEntry>,
    },
    Toggle(Product),
    Remove(String),
    Clear,
}

/// Resolve after `ms` milliseconds (immediately outside a browser window)
async fn simulate_latency(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().map(|window| {
            window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
        });

        if !matches!(scheduled, Some(Ok(_))) {
            if let Err(e) = resolve.call0(&JsValue::NULL) {
                log::warn!("Timer fallback failed: {:?}", e);
            }
        }
    });

    if let Err(e) = JsFuture::from(promise).await {
        log::warn!("Timer failed: {:?}", e);
    }
}
