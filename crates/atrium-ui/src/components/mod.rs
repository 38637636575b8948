//! Reusable view components.
pub(crate) mod error_banner;
pub(crate) mod layout;
pub(crate) mod loading;
pub(crate) mod modal;
pub(crate) mod toast;
