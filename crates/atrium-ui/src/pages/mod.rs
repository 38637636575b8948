//! Page bundles behind the route shell.
//!
//! Every page is reached through [`load_bundle`], which the shell runs at most
//! once per successful load and caches in a [`crate::core::routes::PageCache`].

mod api;
mod components_demo;
mod dashboard;
mod home;
mod section;

use crate::core::routes::{PageId, PageLoadError};
use gloo_timers::future::TimeoutFuture;
use yew::prelude::*;

/// A loaded page: its identity and how to render it.
#[derive(Clone, Copy)]
pub(crate) struct PageBundle {
    pub(crate) page: PageId,
    render: fn() -> Html,
}

impl PageBundle {
    pub(crate) fn render(&self) -> Html {
        (self.render)()
    }
}

/// Resolve the bundle for `page`.
///
/// Yields to the event loop first so the loading placeholder paints before the
/// page mounts; a split-bundle loader plugs in here.
pub(crate) async fn load_bundle(page: PageId) -> Result<PageBundle, PageLoadError> {
    TimeoutFuture::new(0).await;
    let render: fn() -> Html = match page {
        PageId::Home => || html! { <home::HomePage /> },
        PageId::Dashboard => || html! { <dashboard::DashboardPage /> },
        PageId::Market => || html! { <section::SectionPage page={PageId::Market} /> },
        PageId::Games => || html! { <section::SectionPage page={PageId::Games} /> },
        PageId::Investments => || html! { <section::SectionPage page={PageId::Investments} /> },
        PageId::Components => || html! { <components_demo::ComponentsPage /> },
        PageId::Api => || html! { <api::ApiPage /> },
        PageId::Tools => || html! { <section::SectionPage page={PageId::Tools} /> },
    };
    Ok(PageBundle { page, render })
}
