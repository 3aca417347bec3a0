use serde::Deserialize;

/// Anything a modal can be opened for. Names are unique within a collection
/// and compared case-insensitively.
pub trait Named {
    fn name(&self) -> &str;
}

/// Display fields shared by the records shown as cards and modal bodies.
pub trait Showcase: Named {
    fn summary(&self) -> &str;
    fn description(&self) -> &str;
    fn image(&self) -> Option<&str>;
    fn links(&self) -> &[EntityLink];
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct EntityLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub links: Vec<EntityLink>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Member {
    pub name: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Team {
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub links: Vec<EntityLink>,
    #[serde(default)]
    pub members: Vec<Member>,
}

impl Named for Project {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Team {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Showcase for Project {
    fn summary(&self) -> &str {
        &self.summary
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    fn links(&self) -> &[EntityLink] {
        &self.links
    }
}

impl Showcase for Team {
    fn summary(&self) -> &str {
        &self.summary
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    fn links(&self) -> &[EntityLink] {
        &self.links
    }
}

pub fn names_match(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// Case-insensitive exact lookup. First match in collection order wins.
pub fn find_by_name<'a, E: Named>(entities: &'a [E], name: &str) -> Option<&'a E> {
    entities
        .iter()
        .find(|entity| names_match(entity.name(), name))
}
