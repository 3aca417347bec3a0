use std::cell::RefCell;
use std::rc::Rc;

use clubsite_core::{Catalog, CatalogError};

const CATALOG_JSON: &str = include_str!("../content/catalog.json");

thread_local! {
    static CATALOG: RefCell<Option<Rc<Catalog>>> = RefCell::new(None);
}

pub(crate) fn catalog() -> Rc<Catalog> {
    if let Some(catalog) = CATALOG.with(|slot| slot.borrow().clone()) {
        return catalog;
    }
    let catalog = Rc::new(load_catalog(CATALOG_JSON).unwrap_or_else(|err| {
        gloo::console::error!("content: catalog rejected", err.to_string());
        Catalog::default()
    }));
    CATALOG.with(|slot| {
        *slot.borrow_mut() = Some(catalog.clone());
    });
    catalog
}

fn load_catalog(raw: &str) -> Result<Catalog, CatalogError> {
    let catalog = Catalog::from_json(raw)?;
    gloo::console::log!(
        "content: catalog loaded",
        catalog.projects.len() as u32,
        catalog.teams.len() as u32
    );
    Ok(catalog)
}
