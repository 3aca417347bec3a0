use std::rc::Rc;

use yew::prelude::*;

use clubsite_core::{deep_link_name, ModalLinkState, Named, Project, Showcase, Team};

use crate::location;
use crate::modal::{use_modal_link, EntityModal};
use crate::reveal::Reveal;

/// Records that can fill an `EntitySection`. `extra_details` renders the
/// record-specific part of the modal body.
pub(crate) trait SectionEntity: Showcase + PartialEq + 'static {
    fn extra_details(&self) -> Html;
}

impl SectionEntity for Project {
    fn extra_details(&self) -> Html {
        let tags = self
            .tags
            .iter()
            .map(|tag| html! { <li class="tag">{tag.clone()}</li> })
            .collect::<Html>();
        html! { <ul class="tags">{tags}</ul> }
    }
}

impl SectionEntity for Team {
    fn extra_details(&self) -> Html {
        let members = self
            .members
            .iter()
            .map(|member| {
                html! {
                    <li class="member">
                        <span class="member-name">{member.name.clone()}</span>
                        if !member.role.is_empty() {
                            <span class="member-role">{member.role.clone()}</span>
                        }
                    </li>
                }
            })
            .collect::<Html>();
        html! { <ul class="members">{members}</ul> }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct EntitySectionProps<E: PartialEq + 'static> {
    pub(crate) id: AttrValue,
    pub(crate) title: AttrValue,
    pub(crate) entities: Rc<[E]>,
    pub(crate) search: AttrValue,
}

fn initial_modal_state<E: Named>(section: &str, entities: &[E], search: &str) -> ModalLinkState {
    let requested = deep_link_name(search);
    let state = ModalLinkState::from_deep_link(entities, requested.as_deref());
    if let Some(name) = requested {
        if state.is_active() {
            gloo::console::log!("modal: deep link opened", section, name);
        } else {
            gloo::console::warn!("modal: deep link unmatched", section, name);
        }
    }
    state
}

fn entity_cards<E: Showcase>(entities: &[E], on_open: &Callback<String>) -> Html {
    entities
        .iter()
        .map(|entity| {
            let name = entity.name().to_string();
            let onclick = {
                let on_open = on_open.clone();
                let name = name.clone();
                Callback::from(move |_: MouseEvent| on_open.emit(name.clone()))
            };
            let image = entity.image().map(|src| {
                html! { <img class="card-image" src={src.to_string()} alt={name.clone()} loading="lazy" /> }
            });
            html! {
                <li class="card" key={name.clone()}>
                    <button class="card-button" {onclick}>
                        {image}
                        <h3>{name}</h3>
                        <p>{entity.summary().to_string()}</p>
                    </button>
                </li>
            }
        })
        .collect()
}

fn entity_details<E: Showcase>(entity: &E, extra: Html) -> Html {
    let image = entity.image().map(|src| {
        html! { <img class="modal-image" src={src.to_string()} alt={entity.name().to_string()} /> }
    });
    let links = entity
        .links()
        .iter()
        .map(|link| {
            html! {
                <li><a href={link.href.clone()} target="_blank" rel="noopener">{link.label.clone()}</a></li>
            }
        })
        .collect::<Html>();
    html! {
        <>
            {image}
            <p>{entity.description().to_string()}</p>
            {extra}
            if !entity.links().is_empty() {
                <ul class="modal-links">{links}</ul>
            }
        </>
    }
}

#[function_component(Hero)]
pub(crate) fn hero() -> Html {
    html! {
        <header class="hero">
            <h1>{"Student Engineering Society"}</h1>
            <p>{"We design, build and race things. Come build with us."}</p>
            <nav>
                <a href="#projects">{"Projects"}</a>
                <a href="#teams">{"Teams"}</a>
            </nav>
        </header>
    }
}

/// Card grid for one collection plus its own deep-linkable detail modal.
/// The modal sits next to the reveal wrapper, not inside it, so a section
/// that is still hidden never hides an open modal.
#[function_component(EntitySection)]
pub(crate) fn entity_section<E>(props: &EntitySectionProps<E>) -> Html
where
    E: SectionEntity,
{
    let modal = {
        let entities = props.entities.clone();
        let id = props.id.clone();
        let search = props.search.clone();
        use_modal_link(move || initial_modal_state(&id, &entities[..], &search))
    };
    let entities: &[E] = &props.entities;
    let state = modal.state();
    let active = if state.is_active() {
        state.active_entity(entities)
    } else {
        None
    };
    let modal_view = match active {
        Some(entity) => html! {
            <EntityModal
                open={true}
                title={entity.name().to_string()}
                share_url={AttrValue::from(location::share_url(entity.name()))}
                on_close={modal.close()}
            >
                {entity_details(entity, entity.extra_details())}
            </EntityModal>
        },
        None => html! {},
    };
    html! {
        <>
            <Reveal id={props.id.clone()} class={classes!("section", props.id.to_string())}>
                <h2>{props.title.clone()}</h2>
                <ul class="cards">{entity_cards(entities, &modal.open())}</ul>
            </Reveal>
            {modal_view}
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_error_panic_hook::set_once as set_panic_hook;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement, KeyboardEvent, KeyboardEventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    fn projects() -> Rc<[Project]> {
        let raw = r#"{ "projects": [
            { "name": "Solar Car", "summary": "races" },
            { "name": "Rover", "summary": "drives", "tags": ["robotics"] }
        ] }"#;
        let catalog = clubsite_core::Catalog::from_json(raw).expect("test catalog");
        Rc::from(catalog.projects)
    }

    fn mount_root(style: &str) -> Element {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let root = document.create_element("div").expect("create test root");
        root.set_attribute("style", style).expect("set style");
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("append test root");
        root
    }

    fn render_projects(root: &Element, search: &'static str) -> yew::AppHandle<EntitySection<Project>> {
        yew::Renderer::<EntitySection<Project>>::with_root_and_props(
            root.clone(),
            EntitySectionProps {
                id: AttrValue::from("projects"),
                title: AttrValue::from("Projects"),
                entities: projects(),
                search: AttrValue::from(search),
            },
        )
        .render()
    }

    fn press_escape() {
        let init = KeyboardEventInit::new();
        init.set_key("Escape");
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
            .expect("keyboard event");
        web_sys::window()
            .expect("window available")
            .dispatch_event(&event)
            .expect("dispatch keydown");
    }

    #[wasm_bindgen_test(async)]
    async fn deep_link_opens_modal_outside_hidden_section() {
        set_panic_hook();
        let root = mount_root("position: absolute; top: 5000px; left: 0; width: 400px;");
        let handle = render_projects(&root, "?project=rover");
        TimeoutFuture::new(20).await;

        let section = root.query_selector("section").expect("query").expect("section rendered");
        assert!(section.class_list().contains("reveal-hidden"));

        let modal = root
            .query_selector(".modal-backdrop")
            .expect("query")
            .expect("modal rendered");
        assert!(modal.closest(".reveal-hidden").expect("closest").is_none());
        let title = root.query_selector(".modal h2").expect("query").expect("title");
        assert_eq!(title.text_content().as_deref(), Some("Rover"));

        handle.destroy();
        root.remove();
    }

    #[wasm_bindgen_test(async)]
    async fn escape_closes_deep_linked_modal() {
        set_panic_hook();
        let root = mount_root("position: absolute; top: 0; left: 0; width: 400px;");
        let handle = render_projects(&root, "?project=ROVER");
        TimeoutFuture::new(20).await;
        assert!(root.query_selector(".modal").expect("query").is_some());

        press_escape();
        TimeoutFuture::new(20).await;
        assert!(root.query_selector(".modal").expect("query").is_none());

        handle.destroy();
        root.remove();
    }

    #[wasm_bindgen_test(async)]
    async fn unmatched_deep_link_leaves_modal_closed_until_card_click() {
        set_panic_hook();
        let root = mount_root("position: absolute; top: 0; left: 0; width: 400px;");
        let handle = render_projects(&root, "?project=Glider");
        TimeoutFuture::new(20).await;
        assert!(root.query_selector(".modal").expect("query").is_none());

        let button = root
            .query_selector(".card-button")
            .expect("query")
            .expect("card rendered")
            .dyn_into::<HtmlElement>()
            .expect("button element");
        button.click();
        TimeoutFuture::new(20).await;
        let title = root.query_selector(".modal h2").expect("query").expect("title");
        assert_eq!(title.text_content().as_deref(), Some("Solar Car"));

        handle.destroy();
        root.remove();
    }
}
