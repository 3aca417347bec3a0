pub mod catalog;
pub mod deep_link;
pub mod entity;
pub mod modal;
pub mod viewport;

pub use catalog::{validate_names, Catalog, CatalogError};
pub use deep_link::{deep_link_name, query_param, share_query, DEEP_LINK_PARAM};
pub use entity::{find_by_name, EntityLink, Member, Named, Project, Showcase, Team};
pub use modal::{ModalAction, ModalLinkState};
pub use viewport::{
    update_classes_if_in_view, ClassTarget, ElementRect, RevealClasses, Viewport,
    REVEAL_HIDDEN_CLASS, REVEAL_VISIBLE_CLASS,
};
