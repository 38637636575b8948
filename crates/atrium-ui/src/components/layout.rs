use crate::core::config::ShellConfig;
use crate::core::routes::{PageId, Route, TransitionAction, TransitionState};
use crate::core::store::AppStore;
use crate::core::theme::ThemeMode;
use crate::services::notify;
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::{Link, use_route};
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct AppShellProps {
    pub(crate) children: Children,
}

/// Theme-aware frame: navigation, theme toggle and the page slot.
#[function_component(AppShell)]
pub(crate) fn app_shell(props: &AppShellProps) -> Html {
    let config = use_context::<Rc<ShellConfig>>().unwrap_or_default();
    let theme = use_selector(|store: &AppStore| store.theme);
    let active = use_route::<Route>().unwrap_or(Route::Home);
    let transition = use_reducer(TransitionState::default);
    let generation = use_mut_ref(|| 0u64);
    let nav_open = use_state(|| false);

    {
        let transition = transition.clone();
        let delay = config.transition_ms;
        use_effect_with_deps(
            move |_| {
                let next = {
                    let mut current = generation.borrow_mut();
                    *current += 1;
                    *current
                };
                transition.dispatch(TransitionAction::Begin(next));
                let timer = Timeout::new(delay, move || {
                    transition.dispatch(TransitionAction::Settle(next));
                });
                move || drop(timer)
            },
            active,
        );
    }

    let toggle_theme = {
        let key = config.theme_storage_key.clone();
        Callback::from(move |_| notify::toggle_theme(&key))
    };
    let toggle_nav = {
        let nav_open = nav_open.clone();
        Callback::from(move |_| nav_open.set(!*nav_open))
    };
    let theme_label = match theme.mode() {
        ThemeMode::Light => "Dark mode",
        ThemeMode::Dark => "Light mode",
    };

    html! {
        <div class={classes!("app-shell", format!("theme-{}", theme.mode().as_str()))}>
            <header class="navbar bg-base-100 border-b border-base-200">
                <div class="navbar-start">
                    <button class="btn btn-ghost lg:hidden" aria-label="Toggle navigation" onclick={toggle_nav.clone()}>{"☰"}</button>
                    <strong class="text-lg">{"Atrium"}</strong>
                </div>
                <nav class={classes!("navbar-center", "menu", "menu-horizontal", if *nav_open { "open" } else { "closed" })}>
                    {for PageId::all().into_iter().map(|page| nav_item(page, active, &toggle_nav))}
                </nav>
                <div class="navbar-end">
                    <button class="btn btn-ghost btn-sm" aria-label="Toggle theme" onclick={toggle_theme}>{theme_label}</button>
                </div>
            </header>
            <main class={classes!("page", transition.transitioning.then_some("page-transitioning"))}>
                {for props.children.iter()}
            </main>
        </div>
    }
}

fn nav_item(page: PageId, active: Route, on_navigate: &Callback<MouseEvent>) -> Html {
    let route = page.route();
    let classes = classes!("nav-item", (active == route).then_some("active"));
    html! {
        <li onclick={on_navigate.clone()}>
            <Link<Route> to={route} classes={classes}>{page.title()}</Link<Route>>
        </li>
    }
}
