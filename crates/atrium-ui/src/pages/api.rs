use crate::core::banner::DataLayerError;
use crate::core::config::ShellConfig;
use crate::services::{data, notify};
use std::rc::Rc;
use yew::prelude::*;

const STATUS_PATH: &str = "status";

/// Exercises the data-error channel.
#[function_component(ApiPage)]
pub(crate) fn api_page() -> Html {
    let config = use_context::<Rc<ShellConfig>>().unwrap_or_default();

    let on_denied = Callback::from(|_| {
        notify::report_data_error(DataLayerError::permission_denied(
            "status: 403 Forbidden",
        ));
    });
    let on_unavailable = Callback::from(|_| {
        notify::report_data_error(DataLayerError::data_layer("status: connection refused"));
    });
    let on_probe = Callback::from(move |_| {
        let config = config.clone();
        yew::platform::spawn_local(async move {
            if data::load_or_report::<serde_json::Value>(&config, STATUS_PATH)
                .await
                .is_some()
            {
                notify::success("Data service reachable");
            }
        });
    });

    html! {
        <section class="grid gap-4">
            <h1 class="text-2xl font-semibold">{"API"}</h1>
            <p class="text-base-content/70">{"Check the data service or simulate its failures."}</p>
            <div class="flex flex-wrap gap-2">
                <button class="btn btn-primary" onclick={on_probe}>{"Probe data service"}</button>
                <button class="btn btn-outline btn-error" onclick={on_denied}>{"Simulate permission error"}</button>
                <button class="btn btn-outline btn-warning" onclick={on_unavailable}>{"Simulate data-layer error"}</button>
            </div>
        </section>
    }
}
