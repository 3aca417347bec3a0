mod content;
mod location;
mod modal;
mod reveal;
mod sections;

use std::rc::Rc;

use yew::prelude::*;

use clubsite_core::{Project, Team};

use crate::sections::{EntitySection, Hero};

#[function_component(App)]
fn app() -> Html {
    let collections = use_memo((), |_| {
        let catalog = content::catalog();
        let projects: Rc<[Project]> = Rc::from(catalog.projects.clone());
        let teams: Rc<[Team]> = Rc::from(catalog.teams.clone());
        (projects, teams)
    });
    let search = use_state(|| AttrValue::from(location::current_search()));
    let (projects, teams) = (*collections).clone();
    html! {
        <>
            <Hero />
            <main class="site">
                <EntitySection<Project>
                    id="projects"
                    title="Projects"
                    entities={projects}
                    search={(*search).clone()}
                />
                <EntitySection<Team>
                    id="teams"
                    title="Teams"
                    entities={teams}
                    search={(*search).clone()}
                />
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
