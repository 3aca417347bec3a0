use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::{Element, Window};
use yew::prelude::*;

use clubsite_core::{
    update_classes_if_in_view, ClassTarget, ElementRect, RevealClasses, Viewport,
    REVEAL_HIDDEN_CLASS, REVEAL_VISIBLE_CLASS,
};

pub(crate) struct DomTarget<'a>(&'a Element);

impl<'a> DomTarget<'a> {
    pub(crate) fn new(element: &'a Element) -> Self {
        Self(element)
    }
}

impl ClassTarget for DomTarget<'_> {
    fn bounding_rect(&self) -> ElementRect {
        let rect = self.0.get_bounding_client_rect();
        ElementRect {
            top: rect.top(),
            bottom: rect.bottom(),
        }
    }

    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }
}

pub(crate) fn current_viewport(window: &Window) -> Viewport {
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    Viewport {
        scroll_y: window.scroll_y().unwrap_or(0.0),
        height,
    }
}

pub(crate) fn reveal_element(
    viewport: &Viewport,
    element: Option<&Element>,
    classes: &RevealClasses,
) -> bool {
    let target = element.map(DomTarget::new);
    update_classes_if_in_view(viewport, target.as_ref(), classes)
}

/// Window scroll and resize listeners for one element. Both are detached when
/// this is dropped.
pub(crate) struct ScrollWatch {
    _scroll: EventListener,
    _resize: EventListener,
}

impl ScrollWatch {
    pub(crate) fn attach(window: &Window, check: Rc<dyn Fn()>) -> Self {
        let on_scroll = check.clone();
        let scroll = EventListener::new(window, "scroll", move |_| on_scroll());
        let resize = EventListener::new(window, "resize", move |_| check());
        Self {
            _scroll: scroll,
            _resize: resize,
        }
    }
}

#[hook]
pub(crate) fn use_reveal(node: NodeRef, classes: Rc<RevealClasses>) {
    use_effect_with((node, classes), move |(node, classes)| {
        let watch = web_sys::window().map(|window| {
            let check: Rc<dyn Fn()> = {
                let node = node.clone();
                let classes = classes.clone();
                let window = window.clone();
                Rc::new(move || {
                    let viewport = current_viewport(&window);
                    let element = node.cast::<Element>();
                    reveal_element(&viewport, element.as_ref(), &classes);
                })
            };
            check();
            ScrollWatch::attach(&window, check)
        });
        move || drop(watch)
    });
}

#[derive(Properties, PartialEq)]
pub(crate) struct RevealProps {
    #[prop_or_default]
    pub(crate) id: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or(AttrValue::Static(REVEAL_VISIBLE_CLASS))]
    pub(crate) add: AttrValue,
    #[prop_or(AttrValue::Static(REVEAL_HIDDEN_CLASS))]
    pub(crate) remove: AttrValue,
    #[prop_or_default]
    pub(crate) children: Html,
}

/// Section wrapper that starts with the `remove` classes and swaps in the
/// `add` classes the first time it scrolls into view.
#[function_component(Reveal)]
pub(crate) fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let classes = {
        let add = props.add.clone();
        let remove = props.remove.clone();
        use_memo((add, remove), |(add, remove)| RevealClasses::parse(add, remove))
    };
    use_reveal(node.clone(), classes.clone());
    let mut class = props.class.clone();
    for name in &classes.remove {
        class.push(name.clone());
    }
    html! {
        <section id={props.id.clone()} class={class} ref={node}>
            {props.children.clone()}
        </section>
    }
}
