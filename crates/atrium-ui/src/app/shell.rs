use crate::components::loading::LoadingView;
use crate::core::routes::{PageCache, PageId, PageStatus, Route, RouteOutcome, load_page, resolve};
use crate::pages::{PageBundle, load_bundle};
use gloo::console;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::{Redirect, Switch};

/// Shared bundle cache for every [`LazyPage`].
#[derive(Clone, Default)]
pub(crate) struct PageRegistry(Rc<RefCell<PageCache<PageBundle>>>);

impl PartialEq for PageRegistry {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[function_component(RouteShell)]
pub(crate) fn route_shell() -> Html {
    html! { <Switch<Route> render={switch} /> }
}

fn switch(route: Route) -> Html {
    match resolve(route) {
        RouteOutcome::Render(page) => html! { <LazyPage page={page} /> },
        RouteOutcome::Redirect(to) => html! { <Redirect<Route> to={to} /> },
    }
}

#[derive(Properties, PartialEq)]
struct LazyPageProps {
    page: PageId,
}

/// Loads the bundle for `page` through the registry and renders it once ready.
#[function_component(LazyPage)]
fn lazy_page(props: &LazyPageProps) -> Html {
    let registry = use_context::<PageRegistry>().unwrap_or_default();
    let loaded = use_state(|| (props.page, PageStatus::<PageBundle>::Idle));
    let current = use_mut_ref(|| props.page);

    {
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |page| {
                let page = *page;
                *current.borrow_mut() = page;
                let cache = registry.0;
                let cached = cache.borrow().status(page);
                if let PageStatus::Ready(_) = cached {
                    loaded.set((page, cached));
                } else {
                    loaded.set((page, PageStatus::Loading));
                    yew::platform::spawn_local(async move {
                        let status = load_page(&cache, page, load_bundle).await;
                        let settle = move |status: &PageStatus<PageBundle>| {
                            // A load that finishes after navigating away must not replace the page.
                            if *current.borrow() != page {
                                return;
                            }
                            if let PageStatus::Failed(err) = status {
                                console::error!("page load failed", err.to_string());
                            }
                            loaded.set((page, status.clone()));
                        };
                        match status {
                            PageStatus::Loading => cache.borrow_mut().wait(page, settle),
                            settled => settle(&settled),
                        }
                    });
                }
                || ()
            },
            props.page,
        );
    }

    let (page, status) = &*loaded;
    if *page != props.page {
        return html! { <LoadingView /> };
    }
    match status {
        PageStatus::Idle | PageStatus::Loading => html! { <LoadingView /> },
        PageStatus::Ready(bundle) if bundle.page == props.page => bundle.render(),
        PageStatus::Ready(_) => html! { <LoadingView /> },
        PageStatus::Failed(err) => html! {
            <div class="alert alert-error" role="alert">
                <span>{err.to_string()}</span>
                <span class="text-sm">{"Navigate here again to retry."}</span>
            </div>
        },
    }
}
