use crate::core::modal::{
    DismissTrigger, ModalConfig, ModalSession, dismissal_for_click, dismissal_for_key,
};
use crate::services::browser::BodyScroll;
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::document;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, KeyboardEvent};
use yew::prelude::*;

const TITLE_ID: &str = "atrium-modal-title";

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    pub(crate) config: ModalConfig,
    /// Receives every dismissal request; the caller decides whether to close.
    pub(crate) on_close: Callback<DismissTrigger>,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) children: Children,
}

type Latest = Rc<RefCell<(ModalConfig, Callback<DismissTrigger>)>>;

/// Keydown listener reading the props of the most recent render.
fn escape_listener(latest: Latest) -> EventListener {
    EventListener::new(&document(), "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let (config, on_close) = latest.borrow().clone();
        if let Some(trigger) = dismissal_for_key(&config, &event.key()) {
            on_close.emit(trigger);
        }
    })
}

#[function_component(Modal)]
pub(crate) fn modal(props: &ModalProps) -> Html {
    let overlay_ref = use_node_ref();
    let dialog_ref = use_node_ref();
    let session = use_mut_ref(ModalSession::<BodyScroll, EventListener>::default);
    let latest: Latest = use_mut_ref(|| (props.config.clone(), props.on_close.clone()));
    *latest.borrow_mut() = (props.config.clone(), props.on_close.clone());

    {
        let session = session.clone();
        let config = props.config.clone();
        let dialog_ref = dialog_ref.clone();
        use_effect_with_deps(
            move |_| {
                let opened = session.borrow_mut().sync(&config, BodyScroll::current, || {
                    escape_listener(latest)
                });
                if opened
                    && let Some(dialog) = dialog_ref.cast::<HtmlElement>()
                    && let Err(err) = dialog.focus()
                {
                    console::error!("modal focus failed", err);
                }
                || ()
            },
            (props.config.is_open, props.config.close_on_esc),
        );
    }
    use_effect_with_deps(move |()| move || session.borrow_mut().close(), ());

    if !props.config.is_open {
        return html! {};
    }

    let on_backdrop_click = {
        let config = props.config.clone();
        let on_close = props.on_close.clone();
        let overlay_ref = overlay_ref.clone();
        Callback::from(move |event: MouseEvent| {
            let target_is_overlay = match (event.target(), overlay_ref.get()) {
                (Some(target), Some(overlay)) => JsValue::from(target) == JsValue::from(overlay),
                _ => false,
            };
            if let Some(trigger) = dismissal_for_click(&config, target_is_overlay) {
                on_close.emit(trigger);
            }
        })
    };
    let on_close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(DismissTrigger::CloseButton))
    };

    let size = props.config.size;
    html! {
        <div class={classes!("modal", "modal-open", format!("modal-{}", size.as_str()))}>
            <div
                ref={dialog_ref}
                class={classes!("modal-box", props.class.clone())}
                style={size.preset().style()}
                role="dialog"
                aria-modal="true"
                aria-labelledby={TITLE_ID}
                tabindex="-1">
                <div class="flex items-center justify-between gap-4 mb-4">
                    <h3 id={TITLE_ID} class="text-lg font-semibold">{props.config.title.clone()}</h3>
                    {if props.config.show_close_button {
                        html! {
                            <button
                                class="btn btn-ghost btn-sm btn-circle"
                                aria-label="Close dialog"
                                onclick={on_close_button}>
                                {"✕"}
                            </button>
                        }
                    } else { html! {} }}
                </div>
                { for props.children.iter() }
            </div>
            <div
                class="modal-backdrop"
                ref={overlay_ref}
                onclick={on_backdrop_click}
                role="presentation">
            </div>
        </div>
    }
}
