use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LoadingViewProps {
    #[prop_or(AttrValue::Static("Loading…"))]
    pub(crate) label: AttrValue,
}

/// Placeholder shown while a page bundle or help document loads.
#[function_component(LoadingView)]
pub(crate) fn loading_view(props: &LoadingViewProps) -> Html {
    html! {
        <div class="loading-view flex items-center justify-center gap-3 p-10" aria-busy="true">
            <span class="loading loading-spinner loading-md"></span>
            <span class="text-base-content/70">{props.label.clone()}</span>
        </div>
    }
}
