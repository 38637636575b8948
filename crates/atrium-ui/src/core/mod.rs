//! Core, DOM-free primitives and helpers for the Web UI.
pub mod banner;
pub mod config;
pub mod modal;
pub mod prefs;
pub mod routes;
pub mod store;
pub mod theme;
pub mod toast;
