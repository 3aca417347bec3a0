use crate::deep_link::deep_link_name;
use crate::entity::{find_by_name, Named};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalAction {
    Open(String),
    Close,
    Reopen,
}

/// Open/closed state of a detail modal plus the name it was last opened for.
///
/// `active_name` survives `close` so the same entity can be shown again
/// without re-specifying it. `None` means no entity has been selected yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalLinkState {
    is_active: bool,
    active_name: Option<String>,
}

impl ModalLinkState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state for a page loaded with `search` as its query string.
    pub fn from_query<E: Named>(entities: &[E], search: &str) -> Self {
        Self::from_deep_link(entities, deep_link_name(search).as_deref())
    }

    /// Opens only when `requested` names an entity in `entities`. The name is
    /// kept as given, not normalized to the entity's casing.
    pub fn from_deep_link<E: Named>(entities: &[E], requested: Option<&str>) -> Self {
        match requested {
            Some(name) if find_by_name(entities, name).is_some() => Self {
                is_active: true,
                active_name: Some(name.to_string()),
            },
            _ => Self::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn active_name(&self) -> Option<&str> {
        self.active_name.as_deref()
    }

    /// Resolved on every call. May be `None` even while active after an
    /// unchecked `open`.
    pub fn active_entity<'a, E: Named>(&self, entities: &'a [E]) -> Option<&'a E> {
        let name = self.active_name.as_deref()?;
        find_by_name(entities, name)
    }

    pub fn apply(&mut self, action: ModalAction) {
        match action {
            ModalAction::Open(name) => {
                self.is_active = true;
                self.active_name = Some(name);
            }
            ModalAction::Close => {
                self.is_active = false;
            }
            ModalAction::Reopen => {
                if self.active_name.is_some() {
                    self.is_active = true;
                }
            }
        }
    }

    /// Does not check `name` against any collection.
    pub fn open(&mut self, name: impl Into<String>) {
        self.apply(ModalAction::Open(name.into()));
    }

    pub fn try_open<E: Named>(&mut self, entities: &[E], name: &str) -> bool {
        if find_by_name(entities, name).is_none() {
            return false;
        }
        self.open(name);
        true
    }

    pub fn close(&mut self) {
        self.apply(ModalAction::Close);
    }

    pub fn reopen(&mut self) -> bool {
        self.apply(ModalAction::Reopen);
        self.is_active
    }
}
