use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent};
use yew::prelude::*;

use clubsite_core::{ModalAction, ModalLinkState};

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ModalStore(ModalLinkState);

impl Reducible for ModalStore {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        next.apply(action);
        if next == self.0 {
            return self;
        }
        Rc::new(Self(next))
    }
}

/// Per-section modal state plus the callbacks the cards and the modal frame
/// need. Each section owns its own handle.
#[derive(Clone)]
pub(crate) struct ModalHandle {
    store: UseReducerHandle<ModalStore>,
}

impl ModalHandle {
    pub(crate) fn state(&self) -> &ModalLinkState {
        &self.store.0
    }

    pub(crate) fn open(&self) -> Callback<String> {
        let store = self.store.clone();
        Callback::from(move |name: String| {
            gloo::console::log!("modal: open", name.clone());
            store.dispatch(ModalAction::Open(name));
        })
    }

    pub(crate) fn close(&self) -> Callback<()> {
        let store = self.store.clone();
        Callback::from(move |_| {
            store.dispatch(ModalAction::Close);
        })
    }
}

#[hook]
pub(crate) fn use_modal_link<F>(init: F) -> ModalHandle
where
    F: FnOnce() -> ModalLinkState,
{
    let store = use_reducer(move || ModalStore(init()));
    let is_active = store.0.is_active();

    {
        let store = store.clone();
        use_effect_with(is_active, move |is_active| {
            let listener = (*is_active)
                .then(web_sys::window)
                .flatten()
                .map(|window| {
                    EventListener::new(&window, "keydown", move |event: &Event| {
                        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        if event.key() == "Escape" {
                            store.dispatch(ModalAction::Close);
                        }
                    })
                });
            move || drop(listener)
        });
    }

    ModalHandle { store }
}

#[derive(Properties, PartialEq)]
pub(crate) struct EntityModalProps {
    pub(crate) open: bool,
    pub(crate) title: AttrValue,
    #[prop_or_default]
    pub(crate) share_url: Option<AttrValue>,
    pub(crate) on_close: Callback<()>,
    #[prop_or_default]
    pub(crate) children: Html,
}

#[function_component(EntityModal)]
pub(crate) fn entity_modal(props: &EntityModalProps) -> Html {
    if !props.open {
        return html! {};
    }
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_button = on_backdrop.clone();
    let stop = Callback::from(|event: MouseEvent| event.stop_propagation());
    let share = props.share_url.as_ref().map(|href| {
        html! { <a class="modal-share" href={href.clone()}>{"Link to this"}</a> }
    });
    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div class="modal" role="dialog" aria-modal="true" onclick={stop}>
                <header class="modal-header">
                    <h2>{props.title.clone()}</h2>
                    <button class="modal-close" aria-label="Close" onclick={on_button}>
                        {"×"}
                    </button>
                </header>
                <div class="modal-body">{props.children.clone()}</div>
                {share}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reducer_keeps_same_state_on_no_op() {
        let closed = Rc::new(ModalStore(ModalLinkState::new()));
        let after_close = closed.clone().reduce(ModalAction::Close);
        assert!(Rc::ptr_eq(&closed, &after_close));

        let opened = closed.clone().reduce(ModalAction::Open("Rover".to_string()));
        assert!(!Rc::ptr_eq(&closed, &opened));
        assert!(opened.0.is_active());
        assert_eq!(opened.0.active_name(), Some("Rover"));

        let reopened = opened.clone().reduce(ModalAction::Open("Rover".to_string()));
        assert!(Rc::ptr_eq(&opened, &reopened));

        let closed_again = opened.reduce(ModalAction::Close);
        assert!(!closed_again.0.is_active());
        assert_eq!(closed_again.0.active_name(), Some("Rover"));
    }
}
