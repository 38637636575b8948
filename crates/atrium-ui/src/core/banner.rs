//! Typed data-layer failures and the global error banner state.
//!
//! # Design
//! - The data layer reports failures as [`DataLayerError`] values; nothing inspects log text.
//! - Reporting shows the banner, dismissing hides it until the next report.
//! - Help content for the banner is loaded on demand and its failures stay local.

/// Category of a data-access failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataErrorKind {
    /// The backend refused access (missing rules, expired session).
    PermissionDenied,
    /// Any other data-layer failure.
    DataLayer,
}

impl DataErrorKind {
    /// Classify an HTTP status; only 401 and 403 count as permission failures.
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::PermissionDenied,
            _ => Self::DataLayer,
        }
    }

    /// Help document stem for this kind.
    #[must_use]
    pub const fn help_topic(self) -> &'static str {
        match self {
            Self::PermissionDenied => "permission-denied",
            Self::DataLayer => "data-layer",
        }
    }

    /// Banner headline.
    #[must_use]
    pub const fn headline(self) -> &'static str {
        match self {
            Self::PermissionDenied => "Data access denied",
            Self::DataLayer => "Data service unavailable",
        }
    }
}

/// Failure reported by the data-access layer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{}: {message}", .kind.headline())]
pub struct DataLayerError {
    /// Failure category.
    pub kind: DataErrorKind,
    /// Detail from the data layer.
    pub message: String,
}

impl DataLayerError {
    /// Permission failure with a message.
    #[must_use]
    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self {
            kind: DataErrorKind::PermissionDenied,
            message: message.into(),
        }
    }

    /// Generic data-layer failure with a message.
    #[must_use]
    pub fn data_layer(message: impl Into<String>) -> Self {
        Self {
            kind: DataErrorKind::DataLayer,
            message: message.into(),
        }
    }

    /// Failure derived from an HTTP response status.
    #[must_use]
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: DataErrorKind::from_status(status),
            message: message.into(),
        }
    }
}

/// Visibility and context of the global error banner.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ErrorBannerState {
    /// Whether the banner is shown.
    pub visible: bool,
    /// Most recent reported failure.
    pub last_error: Option<DataLayerError>,
}

impl ErrorBannerState {
    /// Record a failure and show the banner.
    pub fn report(&mut self, error: DataLayerError) {
        self.visible = true;
        self.last_error = Some(error);
    }

    /// Hide the banner; the last failure is kept for the help window.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    /// Kind of the last failure, if any.
    #[must_use]
    pub fn kind(&self) -> Option<DataErrorKind> {
        self.last_error.as_ref().map(|err| err.kind)
    }
}

/// State of the banner's help window.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum HelpState {
    /// Window closed.
    #[default]
    Closed,
    /// Instructions being fetched.
    Loading,
    /// Instructions ready to display.
    Loaded(String),
    /// Fetch failed; the message is shown inside the window.
    Failed(String),
}

impl HelpState {
    /// Whether the help window is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Fold a fetch result into the window state.
    #[must_use]
    pub fn settle<E: std::fmt::Display>(result: Result<String, E>) -> Self {
        match result {
            Ok(body) if body.trim().is_empty() => {
                Self::Failed("No instructions are available for this error.".to_string())
            }
            Ok(body) => Self::Loaded(body),
            Err(err) => Self::Failed(format!("Could not load instructions: {err}")),
        }
    }
}

/// Path of the help document for `kind` below `base_url`.
#[must_use]
pub fn help_url(base_url: &str, kind: DataErrorKind) -> String {
    format!("{}/{}.md", base_url.trim_end_matches('/'), kind.help_topic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification_separates_permission_errors() {
        assert_eq!(
            DataErrorKind::from_status(403),
            DataErrorKind::PermissionDenied
        );
        assert_eq!(
            DataErrorKind::from_status(401),
            DataErrorKind::PermissionDenied
        );
        assert_eq!(DataErrorKind::from_status(500), DataErrorKind::DataLayer);
        assert_eq!(DataErrorKind::from_status(0), DataErrorKind::DataLayer);
    }

    #[test]
    fn banner_shows_on_report_and_stays_hidden_after_dismiss() {
        let mut banner = ErrorBannerState::default();
        assert!(!banner.visible);

        banner.report(DataLayerError::permission_denied("missing read rule"));
        assert!(banner.visible);
        assert_eq!(banner.kind(), Some(DataErrorKind::PermissionDenied));

        banner.dismiss();
        assert!(!banner.visible);
        banner.dismiss();
        assert!(!banner.visible);

        banner.report(DataLayerError::data_layer("timeout"));
        assert!(banner.visible);
        assert_eq!(banner.kind(), Some(DataErrorKind::DataLayer));
    }

    #[test]
    fn error_display_includes_headline() {
        let err = DataLayerError::from_status(403, "portfolio read");
        assert_eq!(err.to_string(), "Data access denied: portfolio read");
    }

    #[test]
    fn help_fetch_failures_render_inline() {
        assert_eq!(
            HelpState::settle::<String>(Ok("Enable the rule.".into())),
            HelpState::Loaded("Enable the rule.".into())
        );
        assert_eq!(
            HelpState::settle(Err("404 Not Found")),
            HelpState::Failed("Could not load instructions: 404 Not Found".into())
        );
        assert!(matches!(
            HelpState::settle::<String>(Ok("  ".into())),
            HelpState::Failed(_)
        ));
        assert!(HelpState::Loading.is_open());
        assert!(!HelpState::Closed.is_open());
    }

    #[test]
    fn help_url_joins_base_and_topic() {
        assert_eq!(
            help_url("/help/", DataErrorKind::PermissionDenied),
            "/help/permission-denied.md"
        );
        assert_eq!(help_url("", DataErrorKind::DataLayer), "/data-layer.md");
    }
}
