//! Fire-and-forget entry points into the app store.

use crate::core::banner::DataLayerError;
use crate::core::store::{AppStore, ShellAction, apply, toggle_store_theme};
use crate::core::theme::ThemeState;
use crate::core::toast::ToastKind;
use crate::services::browser::{BrowserPreferences, DocumentTheme};
use gloo::console;
use yewdux::prelude::Dispatch;

/// Wall clock in epoch milliseconds.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn now_ms() -> u64 {
    let now = js_sys::Date::now();
    if now.is_finite() && now > 0.0 {
        now as u64
    } else {
        0
    }
}

fn dispatch(action: ShellAction) {
    Dispatch::<AppStore>::new().reduce_mut(|store| apply(store, action));
}

fn notify(kind: ToastKind, message: impl Into<String>) {
    dispatch(ShellAction::Notify {
        kind,
        message: message.into(),
        now_ms: now_ms(),
    });
}

pub(crate) fn success(message: impl Into<String>) {
    notify(ToastKind::Success, message);
}

pub(crate) fn error(message: impl Into<String>) {
    notify(ToastKind::Error, message);
}

pub(crate) fn info(message: impl Into<String>) {
    notify(ToastKind::Info, message);
}

pub(crate) fn warning(message: impl Into<String>) {
    notify(ToastKind::Warning, message);
}

/// Remove toast `id` and anything else past its deadline.
pub(crate) fn expire_toast(id: u64) {
    let now_ms = now_ms();
    Dispatch::<AppStore>::new().reduce_mut(|store| {
        apply(store, ShellAction::ExpireToasts { now_ms });
        apply(store, ShellAction::DismissToast(id));
    });
}

pub(crate) fn dismiss_toast(id: u64) {
    dispatch(ShellAction::DismissToast(id));
}

/// Typed failure channel of the data layer.
pub(crate) fn report_data_error(error: DataLayerError) {
    console::warn!("data layer failure", error.to_string());
    dispatch(ShellAction::ReportDataError(error));
}

pub(crate) fn dismiss_banner() {
    dispatch(ShellAction::DismissBanner);
}

/// Flip the theme, persisting it under `storage_key`.
pub(crate) fn toggle_theme(storage_key: &str) {
    let mut next = ThemeState::default();
    Dispatch::<AppStore>::new().reduce_mut(|store| {
        next = toggle_store_theme(store, &BrowserPreferences, storage_key, &DocumentTheme);
    });
    console::info!("theme changed", next.mode().as_str());
}
