use crate::core::routes::PageId;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SectionPageProps {
    pub(crate) page: PageId,
}

const fn summary(page: PageId) -> &'static str {
    match page {
        PageId::Market => "Live quotes and order books.",
        PageId::Games => "Leaderboards and open lobbies.",
        PageId::Investments => "Holdings, allocations and returns.",
        PageId::Tools => "Calculators and converters.",
        PageId::Home | PageId::Dashboard | PageId::Components | PageId::Api => "",
    }
}

/// Content page for the sections that share one layout.
#[function_component(SectionPage)]
pub(crate) fn section_page(props: &SectionPageProps) -> Html {
    html! {
        <section class="grid gap-4" data-page={props.page.slug()}>
            <h1 class="text-2xl font-semibold">{props.page.title()}</h1>
            <p class="text-base-content/70">{summary(props.page)}</p>
        </section>
    }
}
