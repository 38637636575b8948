//! Help document fetches for the error banner.

use crate::core::banner::{DataErrorKind, HelpState, help_url};
use anyhow::{Result, bail};
use gloo::console;
use gloo_net::http::Request;

async fn fetch_text(url: &str) -> Result<String> {
    let response = Request::get(url).send().await?;
    if !response.ok() {
        bail!("{} {}", response.status(), response.status_text());
    }
    Ok(response.text().await?)
}

/// Load the instructions for `kind`; failures become [`HelpState::Failed`].
pub(crate) async fn load_help(base_url: &str, kind: DataErrorKind) -> HelpState {
    let url = help_url(base_url, kind);
    let result = fetch_text(&url).await;
    if let Err(err) = &result {
        console::error!("help fetch failed", url.as_str(), err.to_string());
    }
    HelpState::settle(result)
}
