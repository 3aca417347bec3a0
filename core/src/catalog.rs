use std::fmt;

use serde::Deserialize;

use crate::entity::{names_match, Named, Project, Team};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub teams: Vec<Team>,
}

impl Catalog {
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog =
            serde_json::from_str(raw).map_err(|err| CatalogError::Parse(err.to_string()))?;
        validate_names("project", &catalog.projects)?;
        validate_names("team", &catalog.teams)?;
        Ok(catalog)
    }
}

/// Rejects blank names and names that collide case-insensitively.
pub fn validate_names<E: Named>(kind: &'static str, entities: &[E]) -> Result<(), CatalogError> {
    for (index, entity) in entities.iter().enumerate() {
        let name = entity.name();
        if name.trim().is_empty() {
            return Err(CatalogError::EmptyName { kind, index });
        }
        if let Some(first) = entities[..index]
            .iter()
            .position(|earlier| names_match(earlier.name(), name))
        {
            return Err(CatalogError::DuplicateName {
                kind,
                name: name.to_string(),
                first,
                second: index,
            });
        }
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Parse(String),
    EmptyName {
        kind: &'static str,
        index: usize,
    },
    DuplicateName {
        kind: &'static str,
        name: String,
        first: usize,
        second: usize,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(message) => write!(f, "catalog is not valid json: {message}"),
            CatalogError::EmptyName { kind, index } => {
                write!(f, "{kind} at position {index} has an empty name")
            }
            CatalogError::DuplicateName {
                kind,
                name,
                first,
                second,
            } => write!(
                f,
                "{kind} name '{name}' at position {second} duplicates position {first}"
            ),
        }
    }
}

impl std::error::Error for CatalogError {}
