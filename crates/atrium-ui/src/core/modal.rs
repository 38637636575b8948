//! Modal dialog configuration, dismissal rules and scoped side effects.
//!
//! # Design
//! - Dismissal decisions are pure functions; the view only forwards events.
//! - The modal never closes itself: a positive decision is handed to the caller's callback.
//! - Scroll locking and key listeners are guards released on `Drop`, so closing and
//!   unmounting share one release path.

use std::cell::{Cell, RefCell};

/// Size presets for the dialog box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ModalSize {
    /// Narrow confirmation dialogs.
    Small,
    /// General purpose dialogs.
    #[default]
    Medium,
    /// Wide dialogs for tables and forms.
    Large,
    /// Covers the whole viewport.
    Fullscreen,
}

/// Fixed dimensions applied to the dialog box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizePreset {
    /// CSS width.
    pub width: &'static str,
    /// CSS max-width.
    pub max_width: &'static str,
    /// CSS max-height.
    pub max_height: &'static str,
}

impl SizePreset {
    /// Inline style declaration for the preset.
    #[must_use]
    pub fn style(self) -> String {
        format!(
            "width: {}; max-width: {}; max-height: {};",
            self.width, self.max_width, self.max_height
        )
    }
}

const SMALL: SizePreset = SizePreset {
    width: "90%",
    max_width: "400px",
    max_height: "90vh",
};
const MEDIUM: SizePreset = SizePreset {
    width: "90%",
    max_width: "600px",
    max_height: "90vh",
};
const LARGE: SizePreset = SizePreset {
    width: "90%",
    max_width: "900px",
    max_height: "90vh",
};
const FULLSCREEN: SizePreset = SizePreset {
    width: "100vw",
    max_width: "100vw",
    max_height: "100vh",
};

impl ModalSize {
    /// All presets in ascending order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Small, Self::Medium, Self::Large, Self::Fullscreen]
    }

    /// Resolve a size name; unknown names map to [`ModalSize::Medium`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "small" => Self::Small,
            "large" => Self::Large,
            "fullscreen" => Self::Fullscreen,
            _ => Self::Medium,
        }
    }

    /// Stable name of the preset.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Fullscreen => "fullscreen",
        }
    }

    /// Dimensions for the preset.
    #[must_use]
    pub const fn preset(self) -> SizePreset {
        match self {
            Self::Small => SMALL,
            Self::Medium => MEDIUM,
            Self::Large => LARGE,
            Self::Fullscreen => FULLSCREEN,
        }
    }
}

/// Parameters controlling one modal's appearance and dismissal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalConfig {
    /// Whether the modal is rendered at all.
    pub is_open: bool,
    /// Heading text.
    pub title: String,
    /// Dimension preset.
    pub size: ModalSize,
    /// Render the header close button.
    pub show_close_button: bool,
    /// Escape key requests dismissal.
    pub close_on_esc: bool,
    /// Clicking the backdrop requests dismissal.
    pub close_on_overlay_click: bool,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            is_open: false,
            title: String::new(),
            size: ModalSize::Medium,
            show_close_button: true,
            close_on_esc: true,
            close_on_overlay_click: true,
        }
    }
}

impl ModalConfig {
    /// Open config with the given title and default dismissal rules.
    #[must_use]
    pub fn open(title: impl Into<String>) -> Self {
        Self {
            is_open: true,
            title: title.into(),
            ..Self::default()
        }
    }

    /// Builder-style size override.
    #[must_use]
    pub const fn with_size(mut self, size: ModalSize) -> Self {
        self.size = size;
        self
    }
}

/// What asked the modal to close.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissTrigger {
    /// Header close button.
    CloseButton,
    /// Escape key.
    Escape,
    /// Click on the backdrop itself.
    Overlay,
}

/// Key-press decision. `Esc` covers legacy browsers.
#[must_use]
pub fn dismissal_for_key(config: &ModalConfig, key: &str) -> Option<DismissTrigger> {
    (config.is_open && config.close_on_esc && matches!(key, "Escape" | "Esc"))
        .then_some(DismissTrigger::Escape)
}

/// Click decision. `target_is_overlay` must be `true` only when the event target is
/// the overlay element itself, not a descendant the click bubbled from.
#[must_use]
pub fn dismissal_for_click(
    config: &ModalConfig,
    target_is_overlay: bool,
) -> Option<DismissTrigger> {
    (config.is_open && config.close_on_overlay_click && target_is_overlay)
        .then_some(DismissTrigger::Overlay)
}

/// Lock bookkeeping shared by every guard on one surface.
///
/// The overflow value found by the first lock is restored only when the last lock
/// is released, whatever order the guards drop in.
#[derive(Debug, Default)]
pub struct ScrollLocks {
    depth: Cell<u32>,
    restore: RefCell<String>,
}

impl ScrollLocks {
    /// Number of live locks.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth.get()
    }
}

/// Document body (or a stand-in) whose overflow gets locked.
pub trait ScrollSurface {
    /// Current inline overflow value.
    fn overflow(&self) -> String;
    /// Replace the inline overflow value.
    fn set_overflow(&self, value: &str);
    /// Lock bookkeeping shared by every handle to the same surface.
    fn locks(&self) -> &ScrollLocks;
}

/// Overflow value applied while a modal is open.
pub const LOCKED_OVERFLOW: &str = "hidden";

/// Scroll lock held for as long as the guard lives.
#[must_use = "dropping the guard releases the scroll lock immediately"]
pub struct ScrollLock<S: ScrollSurface> {
    surface: S,
}

impl<S: ScrollSurface> ScrollLock<S> {
    /// Lock scrolling on `surface`. The first lock remembers the prior overflow value.
    pub fn acquire(surface: S) -> Self {
        let locks = surface.locks();
        let depth = locks.depth.get();
        if depth == 0 {
            *locks.restore.borrow_mut() = surface.overflow();
            surface.set_overflow(LOCKED_OVERFLOW);
        }
        locks.depth.set(depth + 1);
        Self { surface }
    }
}

impl<S: ScrollSurface> Drop for ScrollLock<S> {
    fn drop(&mut self) {
        let locks = self.surface.locks();
        let depth = locks.depth.get().saturating_sub(1);
        locks.depth.set(depth);
        if depth == 0 {
            let restore = locks.restore.take();
            self.surface.set_overflow(&restore);
        }
    }
}

/// All side effects held by one open modal.
///
/// `L` is whatever guard unregisters the key listener on drop.
#[must_use = "dropping the effects releases them immediately"]
pub struct ModalEffects<S: ScrollSurface, L> {
    keys: Option<L>,
    _scroll: ScrollLock<S>,
}

impl<S: ScrollSurface, L> ModalEffects<S, L> {
    /// Lock scrolling and, when `close_on_esc` is set, register the key listener.
    pub fn acquire(surface: S, close_on_esc: bool, register: impl FnOnce() -> L) -> Self {
        let scroll = ScrollLock::acquire(surface);
        let keys = close_on_esc.then(register);
        Self {
            keys,
            _scroll: scroll,
        }
    }

    /// Whether a key listener is held.
    #[must_use]
    pub const fn listens_for_keys(&self) -> bool {
        self.keys.is_some()
    }

    /// Add or drop the key listener without touching the scroll lock.
    pub fn set_close_on_esc(&mut self, close_on_esc: bool, register: impl FnOnce() -> L) {
        if close_on_esc != self.keys.is_some() {
            self.keys = close_on_esc.then(register);
        }
    }
}

/// Side effects of one modal mount, driven by its successive configurations.
///
/// The view calls [`ModalSession::sync`] whenever `is_open` or `close_on_esc`
/// changes and [`ModalSession::close`] on unmount.
pub struct ModalSession<S: ScrollSurface, L> {
    effects: Option<ModalEffects<S, L>>,
}

impl<S: ScrollSurface, L> Default for ModalSession<S, L> {
    fn default() -> Self {
        Self { effects: None }
    }
}

impl<S: ScrollSurface, L> ModalSession<S, L> {
    /// Bring the held effects in line with `config`.
    ///
    /// Returns `true` when this call opened the modal, which is when focus moves to it.
    /// `surface` is only consulted on open; `None` leaves the session closed.
    pub fn sync(
        &mut self,
        config: &ModalConfig,
        surface: impl FnOnce() -> Option<S>,
        register: impl FnOnce() -> L,
    ) -> bool {
        if !config.is_open {
            self.effects = None;
            return false;
        }
        if let Some(effects) = self.effects.as_mut() {
            effects.set_close_on_esc(config.close_on_esc, register);
            return false;
        }
        self.effects = surface().map(|surface| {
            ModalEffects::acquire(surface, config.close_on_esc, register)
        });
        self.effects.is_some()
    }

    /// Release everything; used when the modal unmounts.
    pub fn close(&mut self) {
        self.effects = None;
    }

    /// Whether the modal currently holds its effects.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.effects.is_some()
    }

    /// Whether a key listener is held.
    #[must_use]
    pub fn listens_for_keys(&self) -> bool {
        self.effects
            .as_ref()
            .is_some_and(ModalEffects::listens_for_keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeBody {
        overflow: Rc<RefCell<String>>,
        locks: Rc<ScrollLocks>,
    }

    impl ScrollSurface for FakeBody {
        fn overflow(&self) -> String {
            self.overflow.borrow().clone()
        }

        fn set_overflow(&self, value: &str) {
            *self.overflow.borrow_mut() = value.to_string();
        }

        fn locks(&self) -> &ScrollLocks {
            &self.locks
        }
    }

    struct CountingListener(Rc<Cell<i32>>);

    impl Drop for CountingListener {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    #[test]
    fn size_names_resolve_with_medium_fallback() {
        assert_eq!(ModalSize::from_name("large"), ModalSize::Large);
        assert_eq!(ModalSize::from_name(" Small "), ModalSize::Small);
        assert_eq!(ModalSize::from_name("fullscreen"), ModalSize::Fullscreen);
        assert_eq!(ModalSize::from_name("huge"), ModalSize::Medium);
        assert_eq!(ModalSize::from_name(""), ModalSize::Medium);
        assert_eq!(ModalSize::from_name("large").preset().max_width, "900px");
        assert_eq!(
            ModalSize::from_name("huge").preset(),
            ModalSize::Medium.preset()
        );
    }

    #[test]
    fn presets_are_distinct() {
        let presets: Vec<_> = ModalSize::all().iter().map(|s| s.preset()).collect();
        for (i, a) in presets.iter().enumerate() {
            for b in &presets[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(
            ModalSize::Fullscreen.preset().style(),
            "width: 100vw; max-width: 100vw; max-height: 100vh;"
        );
    }

    #[test]
    fn escape_respects_config() {
        let config = ModalConfig::open("t");
        assert_eq!(
            dismissal_for_key(&config, "Escape"),
            Some(DismissTrigger::Escape)
        );
        assert_eq!(
            dismissal_for_key(&config, "Esc"),
            Some(DismissTrigger::Escape)
        );
        assert_eq!(dismissal_for_key(&config, "Enter"), None);

        let config = ModalConfig {
            close_on_esc: false,
            ..ModalConfig::open("t")
        };
        assert_eq!(dismissal_for_key(&config, "Escape"), None);
        assert_eq!(dismissal_for_key(&ModalConfig::default(), "Escape"), None);
    }

    #[test]
    fn only_overlay_target_dismisses() {
        let config = ModalConfig::open("t");
        assert_eq!(dismissal_for_click(&config, false), None);
        assert_eq!(
            dismissal_for_click(&config, true),
            Some(DismissTrigger::Overlay)
        );

        let sticky = ModalConfig {
            close_on_overlay_click: false,
            ..ModalConfig::open("t")
        };
        assert_eq!(dismissal_for_click(&sticky, true), None);
    }

    #[test]
    fn scroll_lock_restores_previous_overflow() {
        let body = FakeBody::default();
        body.set_overflow("auto");
        let lock = ScrollLock::acquire(body.clone());
        assert_eq!(body.overflow(), LOCKED_OVERFLOW);
        drop(lock);
        assert_eq!(body.overflow(), "auto");
    }

    #[test]
    fn effects_skip_key_listener_when_escape_disabled() {
        let body = FakeBody::default();
        let live = Rc::new(Cell::new(0));
        let effects = ModalEffects::acquire(body.clone(), false, || {
            live.set(live.get() + 1);
            CountingListener(live.clone())
        });
        assert!(!effects.listens_for_keys());
        assert_eq!(live.get(), 0);
        assert_eq!(body.overflow(), LOCKED_OVERFLOW);
        drop(effects);
        assert_eq!(body.overflow(), "");
    }

    #[test]
    fn effects_release_listener_and_scroll_together() {
        let body = FakeBody::default();
        let live = Rc::new(Cell::new(0));
        let effects = ModalEffects::acquire(body.clone(), true, || {
            live.set(live.get() + 1);
            CountingListener(live.clone())
        });
        assert!(effects.listens_for_keys());
        assert_eq!(live.get(), 1);
        drop(effects);
        assert_eq!(live.get(), 0);
        assert_eq!(body.overflow(), "");
    }

    #[test]
    fn overlapping_locks_restore_only_after_the_last_release() {
        let body = FakeBody::default();
        body.set_overflow("auto");
        let page_modal = ScrollLock::acquire(body.clone());
        let help_modal = ScrollLock::acquire(body.clone());
        assert_eq!(body.locks.depth(), 2);

        drop(page_modal);
        assert_eq!(body.overflow(), LOCKED_OVERFLOW);

        drop(help_modal);
        assert_eq!(body.overflow(), "auto");
        assert_eq!(body.locks.depth(), 0);
    }

    #[test]
    fn session_follows_open_and_escape_changes() {
        let body = FakeBody::default();
        let live = Rc::new(Cell::new(0));
        let register = || {
            live.set(live.get() + 1);
            CountingListener(live.clone())
        };
        let mut session = ModalSession::default();
        let mut config = ModalConfig::open("t");

        assert!(session.sync(&config, || Some(body.clone()), register));
        assert!(session.listens_for_keys());
        assert!(!session.sync(&config, || Some(body.clone()), register));
        assert_eq!(live.get(), 1);

        config.close_on_esc = false;
        assert!(!session.sync(&config, || Some(body.clone()), register));
        assert!(!session.listens_for_keys());
        assert_eq!(live.get(), 0);
        assert_eq!(body.overflow(), LOCKED_OVERFLOW);

        config.close_on_esc = true;
        session.sync(&config, || Some(body.clone()), register);
        assert_eq!(live.get(), 1);

        config.is_open = false;
        assert!(!session.sync(&config, || Some(body.clone()), register));
        assert!(!session.is_active());
        assert_eq!(live.get(), 0);
        assert_eq!(body.overflow(), "");
    }

    #[test]
    fn session_without_surface_stays_closed() {
        let mut session = ModalSession::<FakeBody, CountingListener>::default();
        let live = Rc::new(Cell::new(0));
        let opened = session.sync(&ModalConfig::open("t"), || None, || {
            CountingListener(live.clone())
        });
        assert!(!opened);
        assert!(!session.is_active());
    }
}
