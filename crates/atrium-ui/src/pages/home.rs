use crate::core::routes::{PageId, Route};
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    html! {
        <section class="grid gap-6">
            <div class="hero bg-base-200 rounded-box p-8">
                <div class="hero-content text-center">
                    <div class="max-w-xl">
                        <h1 class="text-4xl font-bold">{"Atrium"}</h1>
                        <p class="py-4">{"Markets, games and investments in one place."}</p>
                    </div>
                </div>
            </div>
            <div class="grid gap-4 md:grid-cols-3">
                {for PageId::all().into_iter().filter(|page| *page != PageId::Home).map(|page| html! {
                    <Link<Route> to={page.route()} classes={classes!("card", "bg-base-100", "shadow", "p-4")}>
                        <h2 class="card-title">{page.title()}</h2>
                    </Link<Route>>
                })}
            </div>
        </section>
    }
}
