//! Data-layer HTTP helpers.
//!
//! # Design
//! - Every failure leaves this module as a typed [`DataLayerError`].
//! - `load_or_report` is the only place that pushes failures into the banner channel.

use crate::core::banner::DataLayerError;
use crate::core::config::ShellConfig;
use crate::services::notify;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

pub(crate) async fn fetch_json<T: DeserializeOwned>(
    config: &ShellConfig,
    path: &str,
) -> Result<T, DataLayerError> {
    let url = config.data_url(path);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|err| DataLayerError::data_layer(format!("{url}: {err}")))?;
    if !response.ok() {
        let status = response.status();
        return Err(DataLayerError::from_status(
            status,
            format!("{url}: {status} {}", response.status_text()),
        ));
    }
    response
        .json::<T>()
        .await
        .map_err(|err| DataLayerError::data_layer(format!("{url}: {err}")))
}

/// Fetch `path`, reporting failures to the error banner. `None` means the caller
/// should continue with its fallback data.
pub(crate) async fn load_or_report<T: DeserializeOwned>(
    config: &ShellConfig,
    path: &str,
) -> Option<T> {
    match fetch_json(config, path).await {
        Ok(value) => Some(value),
        Err(err) => {
            notify::report_data_error(err);
            None
        }
    }
}
