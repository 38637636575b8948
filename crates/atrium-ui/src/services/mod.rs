//! Browser-side services: storage and DOM adapters, data access, notifications.
pub(crate) mod browser;
pub(crate) mod data;
pub(crate) mod help;
pub(crate) mod notify;
