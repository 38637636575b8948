use crate::components::loading::LoadingView;
use crate::components::modal::Modal;
use crate::core::banner::{DataErrorKind, HelpState};
use crate::core::config::ShellConfig;
use crate::core::modal::{ModalConfig, ModalSize};
use crate::core::store::AppStore;
use crate::services::{help, notify};
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct ErrorBannerProps {
    pub(crate) show: bool,
    pub(crate) kind: DataErrorKind,
    #[prop_or_default]
    pub(crate) detail: Option<AttrValue>,
    pub(crate) on_dismiss: Callback<()>,
    pub(crate) on_help: Callback<()>,
}

#[function_component(ErrorBanner)]
pub(crate) fn error_banner(props: &ErrorBannerProps) -> Html {
    if !props.show {
        return html! {};
    }
    let on_dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(()))
    };
    let on_help = {
        let on_help = props.on_help.clone();
        Callback::from(move |_| on_help.emit(()))
    };
    let tone = match props.kind {
        DataErrorKind::PermissionDenied => "alert-error",
        DataErrorKind::DataLayer => "alert-warning",
    };

    html! {
        <div class={classes!("alert", tone, "error-banner")} role="alert">
            <div class="grid gap-1">
                <strong>{props.kind.headline()}</strong>
                <span class="text-sm">{"The app is showing sample data until access is restored."}</span>
                {props.detail.clone().map(|detail| html! {
                    <span class="text-xs opacity-70">{detail}</span>
                }).unwrap_or_default()}
            </div>
            <div class="flex gap-2">
                <button class="btn btn-sm" onclick={on_help}>{"How to fix"}</button>
                <button class="btn btn-sm btn-ghost" aria-label="Dismiss error" onclick={on_dismiss}>{"Dismiss"}</button>
            </div>
        </div>
    }
}

/// Connects the banner to the store and owns the help window.
#[function_component(ErrorBannerHost)]
pub(crate) fn error_banner_host() -> Html {
    let config = use_context::<Rc<ShellConfig>>().unwrap_or_default();
    let banner = use_selector(|store: &AppStore| store.banner.clone());
    let help_state = use_state(HelpState::default);
    let help_request = use_mut_ref(|| 0u32);

    let kind = banner.kind().unwrap_or(DataErrorKind::DataLayer);
    let on_dismiss = Callback::from(|()| notify::dismiss_banner());
    let on_help = {
        let help_state = help_state.clone();
        let help_request = help_request.clone();
        let base_url = config.help_base_url.clone();
        Callback::from(move |()| {
            let request = {
                let mut current = help_request.borrow_mut();
                *current += 1;
                *current
            };
            help_state.set(HelpState::Loading);
            let help_state = help_state.clone();
            let help_request = help_request.clone();
            let base_url = base_url.clone();
            yew::platform::spawn_local(async move {
                let settled = help::load_help(&base_url, kind).await;
                // Closing the window or reopening it invalidates this request.
                if *help_request.borrow() == request {
                    help_state.set(settled);
                }
            });
        })
    };
    let on_close_help = {
        let help_state = help_state.clone();
        Callback::from(move |_| {
            *help_request.borrow_mut() += 1;
            help_state.set(HelpState::Closed);
        })
    };

    let help_config = ModalConfig {
        is_open: help_state.is_open(),
        title: format!("How to fix: {}", kind.headline()),
        size: ModalSize::Large,
        ..ModalConfig::default()
    };
    let help_body = match &*help_state {
        HelpState::Closed => html! {},
        HelpState::Loading => html! { <LoadingView label="Loading instructions…" /> },
        HelpState::Loaded(text) => html! { <pre class="help-text whitespace-pre-wrap">{text.clone()}</pre> },
        HelpState::Failed(message) => html! {
            <div class="alert alert-error" role="alert">{message.clone()}</div>
        },
    };

    html! {
        <>
            <ErrorBanner
                show={banner.visible}
                kind={kind}
                detail={banner.last_error.as_ref().map(|err| AttrValue::from(err.message.clone()))}
                on_dismiss={on_dismiss}
                on_help={on_help}
            />
            <Modal config={help_config} on_close={on_close_help}>
                {help_body}
            </Modal>
        </>
    }
}
