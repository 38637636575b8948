//! Toast notification queue.
//!
//! # Design
//! - Every toast records its own deadline, so expiry is independent per message.
//! - Storage order is insertion order; views render newest first.
//! - Time is passed in as milliseconds so the queue stays clock-free.

/// Default on-screen lifetime of a toast in milliseconds.
pub const DEFAULT_TOAST_LIFETIME_MS: u32 = 5_000;

/// Toast variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Success toast.
    Success,
    /// Error toast.
    Error,
    /// Informational toast.
    Info,
    /// Warning toast.
    Warning,
}

impl ToastKind {
    /// Class suffix used by the alert styles (`alert-success`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

/// Toast payload used by the host and app state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Severity classification.
    pub kind: ToastKind,
    /// Display message for the toast.
    pub message: String,
    /// Epoch milliseconds after which the toast is removed.
    pub expires_at_ms: u64,
}

impl Toast {
    /// Milliseconds left before expiry at `now_ms` (zero once due).
    #[must_use]
    pub const fn remaining_ms(&self, now_ms: u64) -> u64 {
        self.expires_at_ms.saturating_sub(now_ms)
    }
}

/// Queue of live toasts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
    lifetime_ms: u32,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::with_lifetime(DEFAULT_TOAST_LIFETIME_MS)
    }
}

impl ToastQueue {
    /// Empty queue whose toasts live for `lifetime_ms`.
    #[must_use]
    pub const fn with_lifetime(lifetime_ms: u32) -> Self {
        Self {
            items: Vec::new(),
            next_id: 0,
            lifetime_ms,
        }
    }

    /// Lifetime applied to newly pushed toasts.
    #[must_use]
    pub const fn lifetime_ms(&self) -> u32 {
        self.lifetime_ms
    }

    /// Change the lifetime for toasts pushed from now on.
    pub fn set_lifetime_ms(&mut self, lifetime_ms: u32) {
        self.lifetime_ms = lifetime_ms;
    }

    /// Enqueue a message and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>, now_ms: u64) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            kind,
            message: message.into(),
            expires_at_ms: now_ms.saturating_add(u64::from(self.lifetime_ms)),
        });
        id
    }

    /// Enqueue a success toast.
    pub fn success(&mut self, message: impl Into<String>, now_ms: u64) -> u64 {
        self.push(ToastKind::Success, message, now_ms)
    }

    /// Enqueue an error toast.
    pub fn error(&mut self, message: impl Into<String>, now_ms: u64) -> u64 {
        self.push(ToastKind::Error, message, now_ms)
    }

    /// Enqueue an info toast.
    pub fn info(&mut self, message: impl Into<String>, now_ms: u64) -> u64 {
        self.push(ToastKind::Info, message, now_ms)
    }

    /// Enqueue a warning toast.
    pub fn warning(&mut self, message: impl Into<String>, now_ms: u64) -> u64 {
        self.push(ToastKind::Warning, message, now_ms)
    }

    /// Remove a toast by id. Returns `false` when it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|toast| toast.id != id);
        self.items.len() != before
    }

    /// Drop every toast whose deadline has passed; returns the removed ids.
    pub fn expire(&mut self, now_ms: u64) -> Vec<u64> {
        let mut removed = Vec::new();
        self.items.retain(|toast| {
            let keep = toast.expires_at_ms > now_ms;
            if !keep {
                removed.push(toast.id);
            }
            keep
        });
        removed
    }

    /// Live toasts, newest first.
    pub fn newest_first(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter().rev()
    }

    /// Number of live toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no toast is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic_and_kinds_kept() {
        let mut queue = ToastQueue::default();
        let a = queue.success("saved", 0);
        let b = queue.warning("low balance", 0);
        assert!(b > a);
        let kinds: Vec<_> = queue.newest_first().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![ToastKind::Warning, ToastKind::Success]);
        assert_eq!(ToastKind::Warning.as_str(), "warning");
    }

    #[test]
    fn staggered_toasts_expire_on_their_own_deadlines() {
        let mut queue = ToastQueue::default();
        let first = queue.info("first", 1_000);
        let second = queue.error("second", 3_000);

        assert!(queue.expire(5_999).is_empty());
        assert_eq!(queue.expire(6_000), vec![first]);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.expire(8_000), vec![second]);
        assert!(queue.is_empty());
    }

    #[test]
    fn manual_dismiss_removes_only_target() {
        let mut queue = ToastQueue::default();
        let a = queue.info("a", 0);
        let b = queue.info("b", 0);
        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert_eq!(
            queue.newest_first().map(|t| t.id).collect::<Vec<_>>(),
            vec![b]
        );
    }

    #[test]
    fn lifetime_is_configurable() {
        let mut queue = ToastQueue::with_lifetime(200);
        let id = queue.success("quick", 50);
        assert_eq!(
            queue.newest_first().next().map(|t| t.remaining_ms(100)),
            Some(150)
        );
        queue.set_lifetime_ms(1_000);
        assert_eq!(queue.lifetime_ms(), 1_000);
        assert_eq!(queue.expire(250), vec![id]);
    }
}
