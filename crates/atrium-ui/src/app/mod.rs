//! Application root and browser entry point.

mod shell;

use crate::components::error_banner::ErrorBannerHost;
use crate::components::layout::AppShell;
use crate::components::toast::ToastHost;
use crate::core::config::ShellConfig;
use crate::core::store::{AppStore, seed};
use crate::core::theme::{ThemeSurface, initial_theme};
use crate::services::browser::{BrowserPreferences, DocumentTheme, load_config, os_prefers_dark};
use gloo::console;
use gloo::utils::document;
use shell::{PageRegistry, RouteShell};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::BrowserRouter;
use yewdux::prelude::Dispatch;

#[derive(Properties, PartialEq)]
pub(crate) struct AtriumAppProps {
    pub(crate) config: Rc<ShellConfig>,
}

#[function_component(AtriumApp)]
pub(crate) fn atrium_app(props: &AtriumAppProps) -> Html {
    let registry = use_memo(|()| PageRegistry::default(), ());

    html! {
        <ContextProvider<Rc<ShellConfig>> context={props.config.clone()}>
            <ContextProvider<PageRegistry> context={(*registry).clone()}>
                <BrowserRouter>
                    <AppShell>
                        <RouteShell />
                    </AppShell>
                    <ErrorBannerHost />
                    <ToastHost />
                </BrowserRouter>
            </ContextProvider<PageRegistry>>
        </ContextProvider<Rc<ShellConfig>>>
    }
}

/// Boot the shell: resolve config and theme, seed the store, mount into `#root`.
pub fn run_app() {
    console_error_panic_hook::set_once();

    let config = load_config();
    let theme = initial_theme(&BrowserPreferences, &config.theme_storage_key, os_prefers_dark());
    Dispatch::<AppStore>::new().reduce_mut(|store| seed(store, theme, &config));
    DocumentTheme.apply(theme.mode());
    console::info!("atrium shell starting", theme.mode().as_str());

    let props = AtriumAppProps {
        config: Rc::new(config),
    };
    match document().get_element_by_id("root") {
        Some(root) => {
            yew::Renderer::<AtriumApp>::with_root_and_props(root, props).render();
        }
        None => {
            console::warn!("#root missing, mounting on body");
            yew::Renderer::<AtriumApp>::with_props(props).render();
        }
    }
}
