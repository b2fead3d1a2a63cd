use serde::Deserialize;

use crate::profile::{DecoratorTable, Profile, Structure};

// Input tree. The two node shapes alternate by construction: an Item only
// ever holds Collections and a Collection only ever holds Items.

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Item {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub children: Vec<Collection>,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            children: Vec::new(),
        }
    }

    /// Item with no name of its own, rendered as decorators only
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_child(mut self, collection: Collection) -> Self {
        self.children.push(collection);
        self
    }

    /// Number of items in this subtree, including this one
    pub fn count(&self) -> usize {
        1 + self
            .children
            .iter()
            .flat_map(|c| c.elements.iter())
            .map(Item::count)
            .sum::<usize>()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawCollection")]
pub struct Collection {
    /// Display label, substituted into the collection placeholders
    pub label: String,
    /// Written out right after the opening prefix when present
    pub name: Option<String>,
    pub elements: Vec<Item>,
}

impl Collection {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            name: None,
            elements: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_element(mut self, item: Item) -> Self {
        self.elements.push(item);
        self
    }
}

// `Type` is the label. A collection with only a `Name` uses that as its
// label instead; with both, the name is emitted as well.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawCollection {
    #[serde(rename = "Type")]
    pub kind: Option<String>,
    pub name: Option<String>,
    pub elements: Vec<Item>,
}

impl TryFrom<RawCollection> for Collection {
    type Error = String;

    fn try_from(raw: RawCollection) -> Result<Self, Self::Error> {
        let (label, name) = match (raw.kind, raw.name) {
            (Some(kind), name) => (kind, name),
            (None, Some(name)) => (name, None),
            (None, None) => return Err("collection has neither a Type nor a Name".to_string()),
        };
        Ok(Collection {
            label,
            name,
            elements: raw.elements,
        })
    }
}

// Profile files, keyed by format the same way the built-in registries are.

#[derive(Debug, Default, Deserialize)]
pub struct ProfileFile {
    #[serde(rename = "JSON", default)]
    pub json: Vec<Profile>,
    #[serde(rename = "XML", default)]
    pub xml: Vec<Profile>,
    #[serde(rename = "DOT", default)]
    pub dot: Vec<Profile>,
}

impl ProfileFile {
    pub fn is_empty(&self) -> bool {
        self.json.is_empty() && self.xml.is_empty() && self.dot.is_empty()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawProfile {
    pub name: String,
    pub options: RawOptions,
    #[serde(default)]
    pub structure: Option<Structure>,
}

// `IdentLength`, `IdentCharacters` and `Format` show up in older profile
// files; they never influenced rendering and are ignored here.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawOptions {
    pub decorators: DecoratorTable,
}

impl From<RawProfile> for Profile {
    fn from(raw: RawProfile) -> Self {
        Profile {
            name: raw.name,
            decorators: raw.options.decorators,
            structure: raw.structure,
        }
    }
}
