use crate::components::modal::Modal;
use crate::core::config::ShellConfig;
use crate::core::modal::{DismissTrigger, ModalConfig, ModalSize};
use crate::core::store::AppStore;
use crate::services::notify;
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::use_selector;

/// Size names offered by the demo; the last one is unknown and renders as medium.
const SIZE_NAMES: [&str; 5] = ["small", "medium", "large", "fullscreen", "huge"];

/// Live showcase of the modal, toast and theme primitives.
#[function_component(ComponentsPage)]
pub(crate) fn components_page() -> Html {
    let config = use_context::<Rc<ShellConfig>>().unwrap_or_default();
    let theme = use_selector(|store: &AppStore| store.theme);
    let modal = use_state(ModalConfig::default);
    let close_on_esc = use_state(|| true);
    let close_on_overlay = use_state(|| true);

    let open_with = |name: &'static str| {
        let modal = modal.clone();
        let close_on_esc = close_on_esc.clone();
        let close_on_overlay = close_on_overlay.clone();
        Callback::from(move |_| {
            modal.set(ModalConfig {
                close_on_esc: *close_on_esc,
                close_on_overlay_click: *close_on_overlay,
                ..ModalConfig::open(format!("{name} modal")).with_size(ModalSize::from_name(name))
            });
        })
    };
    let on_close = {
        let modal = modal.clone();
        Callback::from(move |trigger: DismissTrigger| {
            notify::info(format!("Modal closed via {trigger:?}"));
            modal.set(ModalConfig::default());
        })
    };
    let toggle_esc = {
        let close_on_esc = close_on_esc.clone();
        Callback::from(move |_| close_on_esc.set(!*close_on_esc))
    };
    let toggle_overlay = {
        let close_on_overlay = close_on_overlay.clone();
        Callback::from(move |_| close_on_overlay.set(!*close_on_overlay))
    };
    let toggle_theme = {
        let key = config.theme_storage_key.clone();
        Callback::from(move |_| notify::toggle_theme(&key))
    };

    html! {
        <section class="grid gap-6">
            <h1 class="text-2xl font-semibold">{"Components"}</h1>

            <div class="card bg-base-100 shadow p-4 grid gap-3">
                <h2 class="card-title">{"Modal"}</h2>
                <div class="flex flex-wrap gap-2">
                    {for SIZE_NAMES.into_iter().map(|name| html! {
                        <button class="btn btn-sm" onclick={open_with(name)}>{name}</button>
                    })}
                </div>
                <label class="label cursor-pointer gap-2 justify-start">
                    <input type="checkbox" class="toggle toggle-sm" checked={*close_on_esc} onclick={toggle_esc} />
                    <span>{"Close on Escape"}</span>
                </label>
                <label class="label cursor-pointer gap-2 justify-start">
                    <input type="checkbox" class="toggle toggle-sm" checked={*close_on_overlay} onclick={toggle_overlay} />
                    <span>{"Close on overlay click"}</span>
                </label>
            </div>

            <div class="card bg-base-100 shadow p-4 grid gap-3">
                <h2 class="card-title">{"Toasts"}</h2>
                <div class="flex flex-wrap gap-2">
                    <button class="btn btn-sm btn-success" onclick={Callback::from(|_| notify::success("Saved"))}>{"Success"}</button>
                    <button class="btn btn-sm btn-error" onclick={Callback::from(|_| notify::error("Something failed"))}>{"Error"}</button>
                    <button class="btn btn-sm btn-info" onclick={Callback::from(|_| notify::info("Heads up"))}>{"Info"}</button>
                    <button class="btn btn-sm btn-warning" onclick={Callback::from(|_| notify::warning("Check this"))}>{"Warning"}</button>
                </div>
            </div>

            <div class="card bg-base-100 shadow p-4 grid gap-3">
                <h2 class="card-title">{"Theme"}</h2>
                <p>{format!("Current theme: {}", theme.mode().as_str())}</p>
                <button class="btn btn-sm w-fit" onclick={toggle_theme}>{"Toggle theme"}</button>
            </div>

            <Modal config={(*modal).clone()} on_close={on_close}>
                <p>{format!("Size preset: {}", modal.size.as_str())}</p>
                <p class="text-sm text-base-content/70">{"Close with the button, Escape or a click outside."}</p>
            </Modal>
        </section>
    }
}
