//! Browser adapters for the core seams: local storage, the document theme
//! attribute, body scrolling and boot configuration.

use crate::core::config::ShellConfig;
use crate::core::modal::{ScrollLocks, ScrollSurface};
use crate::core::prefs::{PreferenceError, PreferenceStore};
use crate::core::theme::{ThemeMode, ThemeSurface};
use gloo::console;
use gloo::utils::{document, window};
use std::rc::Rc;
use web_sys::{HtmlElement, Storage};

const ROOT_ID: &str = "root";
const CONFIG_ATTRIBUTE: &str = "data-config";
const THEME_ATTRIBUTE: &str = "data-theme";
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// `localStorage`-backed preferences. Missing storage behaves as an empty, read-only store.
pub(crate) struct BrowserPreferences;

fn local_storage() -> Option<Storage> {
    window().local_storage().ok().flatten()
}

impl PreferenceStore for BrowserPreferences {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let storage = local_storage().ok_or(PreferenceError::Unavailable)?;
        storage.set_item(key, value).map_err(|err| {
            console::warn!("preference write failed", key, err.clone());
            PreferenceError::Rejected(
                err.as_string()
                    .unwrap_or_else(|| "storage error".to_string()),
            )
        })
    }
}

/// Writes `data-theme` on the root document element.
pub(crate) struct DocumentTheme;

impl ThemeSurface for DocumentTheme {
    fn apply(&self, mode: ThemeMode) {
        let Some(root) = document().document_element() else {
            return;
        };
        if let Err(err) = root.set_attribute(THEME_ATTRIBUTE, mode.as_str()) {
            console::error!("theme attribute update failed", err);
        }
    }
}

thread_local! {
    static BODY_LOCKS: Rc<ScrollLocks> = Rc::default();
}

/// Inline `overflow` style of the document body.
#[derive(Clone)]
pub(crate) struct BodyScroll {
    body: HtmlElement,
    locks: Rc<ScrollLocks>,
}

impl BodyScroll {
    pub(crate) fn current() -> Option<Self> {
        let body = document().body()?;
        let locks = BODY_LOCKS.with(Rc::clone);
        Some(Self { body, locks })
    }
}

impl ScrollSurface for BodyScroll {
    fn overflow(&self) -> String {
        self.body
            .style()
            .get_property_value("overflow")
            .unwrap_or_default()
    }

    fn set_overflow(&self, value: &str) {
        let style = self.body.style();
        let result = if value.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", value)
        };
        if let Err(err) = result {
            console::error!("body overflow update failed", err);
        }
    }

    fn locks(&self) -> &ScrollLocks {
        &self.locks
    }
}

/// OS-level dark scheme preference, `None` when the query is unsupported.
pub(crate) fn os_prefers_dark() -> Option<bool> {
    window()
        .match_media(DARK_SCHEME_QUERY)
        .ok()
        .flatten()
        .map(|query| query.matches())
}

/// Read [`ShellConfig`] from the `data-config` attribute of `#root`.
pub(crate) fn load_config() -> ShellConfig {
    let raw = document()
        .get_element_by_id(ROOT_ID)
        .and_then(|root| root.get_attribute(CONFIG_ATTRIBUTE));
    let Some(raw) = raw else {
        return ShellConfig::default();
    };
    match ShellConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            console::warn!("invalid shell config, using defaults", err.to_string());
            ShellConfig::default()
        }
    }
}
