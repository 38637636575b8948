use crate::core::store::AppStore;
use crate::core::toast::Toast;
use crate::services::notify;
use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    #[prop_or_default]
    pub(crate) class: Classes,
}

/// Single top-right region; newest toast first.
#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    let toasts = use_selector(|store: &AppStore| store.toasts.clone());

    html! {
        <div
            class={classes!("toast", "toast-top", "toast-end", props.class.clone())}
            aria-live="polite"
            aria-atomic="false">
            {for toasts.newest_first().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let id = props.toast.id;
        let remaining = props.toast.remaining_ms(notify::now_ms());
        use_effect_with_deps(
            move |_| {
                let delay = u32::try_from(remaining).unwrap_or(u32::MAX);
                let timer = Timeout::new(delay, move || notify::expire_toast(id));
                move || drop(timer)
            },
            id,
        );
    }

    let id = props.toast.id;
    let on_close = Callback::from(move |_| notify::dismiss_toast(id));

    html! {
        <div class={classes!("alert", format!("alert-{}", props.toast.kind.as_str()))} role="status">
            <span>{props.toast.message.clone()}</span>
            <button class="btn btn-ghost btn-xs" aria-label="Dismiss notification" onclick={on_close}>{"✕"}</button>
        </div>
    }
}
