use atrium_ui::core::banner::DataErrorKind;
use atrium_ui::core::config::ShellConfig;

const INDEX_HTML: &str = include_str!("../index.html");

fn root_config() -> Option<&'static str> {
    let start = INDEX_HTML.find("data-config='")? + "data-config='".len();
    let end = INDEX_HTML[start..].find('\'')?;
    Some(&INDEX_HTML[start..start + end])
}

#[test]
fn host_page_loads_the_component_stylesheet() {
    // Modal, toast and alert markup rely on the DaisyUI class rules.
    assert!(INDEX_HTML.contains("daisyui@4"));
    assert!(INDEX_HTML.contains("dist/full.min.css"));
    assert!(INDEX_HTML.contains("cdn.tailwindcss.com"));
}

#[test]
fn host_page_config_is_valid() {
    let raw = root_config();
    assert!(raw.is_some());
    let config = ShellConfig::from_json(raw.unwrap_or_default());
    assert!(config.is_ok(), "{config:?}");
    if let Ok(config) = config {
        assert_eq!(config.help_base_url, "/help");
        assert_eq!(config.toast_lifetime_ms, 5_000);
    }
}

#[test]
fn help_documents_exist_for_every_error_kind() {
    // File names follow `DataErrorKind::help_topic`.
    let permission = include_str!("../static/help/permission-denied.md");
    let data_layer = include_str!("../static/help/data-layer.md");
    for (kind, doc) in [
        (DataErrorKind::PermissionDenied, permission),
        (DataErrorKind::DataLayer, data_layer),
    ] {
        assert!(doc.starts_with(&format!("# {}", kind.headline())), "{kind:?}");
    }
}
