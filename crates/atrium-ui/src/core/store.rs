//! App-wide yewdux store.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Mutations go through [`apply`] (or [`toggle_store_theme`] for the side-effecting
//!   theme flip) so reducers stay predictable and host-testable.

use crate::core::banner::{DataLayerError, ErrorBannerState};
use crate::core::config::ShellConfig;
use crate::core::prefs::PreferenceStore;
use crate::core::theme::{ThemeState, ThemeSurface, toggle_theme};
use crate::core::toast::{ToastKind, ToastQueue};
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Active theme; the single source for theme-dependent styling.
    pub theme: ThemeState,
    /// Live toast notifications.
    pub toasts: ToastQueue,
    /// Global data-layer error banner.
    pub banner: ErrorBannerState,
}

/// State transitions applied through the store dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellAction {
    /// Enqueue a toast.
    Notify {
        /// Toast kind.
        kind: ToastKind,
        /// Toast text.
        message: String,
        /// Current epoch milliseconds.
        now_ms: u64,
    },
    /// Remove a toast by id.
    DismissToast(u64),
    /// Remove every toast past its deadline.
    ExpireToasts {
        /// Current epoch milliseconds.
        now_ms: u64,
    },
    /// Data layer reported a failure.
    ReportDataError(DataLayerError),
    /// User dismissed the error banner.
    DismissBanner,
}

/// Seed the store at boot from the resolved theme and configuration.
pub fn seed(store: &mut AppStore, theme: ThemeState, config: &ShellConfig) {
    store.theme = theme;
    store.toasts.set_lifetime_ms(config.toast_lifetime_ms);
}

/// Apply one [`ShellAction`].
pub fn apply(store: &mut AppStore, action: ShellAction) {
    match action {
        ShellAction::Notify {
            kind,
            message,
            now_ms,
        } => {
            store.toasts.push(kind, message, now_ms);
        }
        ShellAction::DismissToast(id) => {
            store.toasts.dismiss(id);
        }
        ShellAction::ExpireToasts { now_ms } => {
            store.toasts.expire(now_ms);
        }
        ShellAction::ReportDataError(error) => store.banner.report(error),
        ShellAction::DismissBanner => store.banner.dismiss(),
    }
}

/// Flip the store theme, persisting under `key` and applying it to `surface`.
pub fn toggle_store_theme<P, S>(
    store: &mut AppStore,
    prefs: &P,
    key: &str,
    surface: &S,
) -> ThemeState
where
    P: PreferenceStore + ?Sized,
    S: ThemeSurface + ?Sized,
{
    toggle_theme(&mut store.theme, prefs, key, surface)
}
