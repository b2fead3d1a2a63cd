use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use crate::parser::{ProfileFile, RawProfile};
use crate::profile::builtin;
use crate::profile::decorator::*;

/// Name every format's registry falls back to
pub const DEFAULT_PROFILE: &str = "default";

/// Output formats with their own profile registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Xml,
    Dot,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Json, Format::Xml, Format::Dot];

    /// Key used for this format in profile files
    pub fn key(self) -> &'static str {
        match self {
            Format::Json => "JSON",
            Format::Xml => "XML",
            Format::Dot => "DOT",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "xml" => Ok(Format::Xml),
            "dot" | "graph" => Ok(Format::Dot),
            other => Err(anyhow::anyhow!("Unknown output format: {}", other)),
        }
    }
}

/// Decorator used for one role at one level: either another role of the
/// profile's table, named the way profile files name them, or a decorator
/// written out in full.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Override {
    Role(Role),
    Inline(Decorator),
}

impl From<Role> for Override {
    fn from(role: Role) -> Self {
        Override::Role(role)
    }
}

impl From<Decorator> for Override {
    fn from(decorator: Decorator) -> Self {
        Override::Inline(decorator)
    }
}

/// Decorator overrides mirroring the shape of the tree being rendered.
///
/// The root structure applies to the root item. `children[k]` applies to the
/// k-th child collection of an item and is handed unchanged to that
/// collection's elements, which in turn index their own `children`. Where no
/// structure exists the table defaults are used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Structure {
    #[serde(alias = "OuterDecorator")]
    pub outer: Option<Override>,
    #[serde(alias = "InnerDecorator")]
    pub inner: Option<Override>,
    pub children: Vec<Structure>,
}

impl Structure {
    pub fn with_outer(mut self, decorator: impl Into<Override>) -> Self {
        self.outer = Some(decorator.into());
        self
    }

    pub fn with_inner(mut self, decorator: impl Into<Override>) -> Self {
        self.inner = Some(decorator.into());
        self
    }

    pub fn with_child(mut self, child: Structure) -> Self {
        self.children.push(child);
        self
    }

    pub fn child(&self, index: usize) -> Option<&Structure> {
        self.children.get(index)
    }

    pub fn decorator(&self, role: Role) -> Option<&Override> {
        match role {
            Role::Outer => self.outer.as_ref(),
            Role::Inner => self.inner.as_ref(),
        }
    }
}

/// Picks the decorator for `role`, preferring an override over the table
pub fn resolve_decorator<'a>(
    structure: Option<&'a Structure>,
    table: &'a DecoratorTable,
    role: Role,
) -> &'a Decorator {
    match structure.and_then(|s| s.decorator(role)) {
        Some(Override::Role(named)) => table.decorator(*named),
        Some(Override::Inline(decorator)) => decorator,
        None => table.decorator(role),
    }
}

/// Named, format specific rendering configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawProfile")]
pub struct Profile {
    pub name: String,
    pub decorators: DecoratorTable,
    pub structure: Option<Structure>,
}

impl Profile {
    pub fn new(name: impl Into<String>, decorators: DecoratorTable) -> Self {
        Self {
            name: name.into(),
            decorators,
            structure: None,
        }
    }

    pub fn with_structure(mut self, structure: Structure) -> Self {
        self.structure = Some(structure);
        self
    }
}

/// Profiles available for one format. Never empty, so resolution always
/// has something to return.
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    format: Format,
    profiles: Vec<Profile>,
}

impl ProfileRegistry {
    pub fn new(format: Format, first: Profile) -> Self {
        Self {
            format,
            profiles: vec![first],
        }
    }

    pub fn register(&mut self, profile: Profile) {
        self.profiles.push(profile);
    }

    /// Places `profiles` ahead of the existing entries so they win lookups
    pub fn prepend(&mut self, profiles: Vec<Profile>) {
        self.profiles.splice(0..0, profiles);
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.name.as_str())
    }

    /// Resolves `name` to a profile.
    ///
    /// An exact match wins (the first one, should names repeat). Otherwise the
    /// profile named `default` is used, and failing that the first entry.
    /// Lookup never fails.
    pub fn resolve(&self, name: &str) -> &Profile {
        if let Some(profile) = self.profiles.iter().find(|p| p.name == name) {
            return profile;
        }

        if let Some(profile) = self.profiles.iter().find(|p| p.name == DEFAULT_PROFILE) {
            debug!(format = %self.format, requested = name, "profile not found, using default");
            return profile;
        }

        let fallback = &self.profiles[0];
        debug!(
            format = %self.format,
            requested = name,
            fallback = %fallback.name,
            "profile not found and no default, using first"
        );
        fallback
    }
}

/// One registry per output format
#[derive(Debug, Clone)]
pub struct ProfileSet {
    json: ProfileRegistry,
    xml: ProfileRegistry,
    dot: ProfileRegistry,
}

impl ProfileSet {
    /// Registries seeded with the built-in `default` profile of each format
    pub fn builtin() -> Self {
        Self {
            json: ProfileRegistry::new(Format::Json, builtin::json_profile()),
            xml: ProfileRegistry::new(Format::Xml, builtin::xml_profile()),
            dot: ProfileRegistry::new(Format::Dot, builtin::dot_profile()),
        }
    }

    pub fn registry(&self, format: Format) -> &ProfileRegistry {
        match format {
            Format::Json => &self.json,
            Format::Xml => &self.xml,
            Format::Dot => &self.dot,
        }
    }

    pub fn registry_mut(&mut self, format: Format) -> &mut ProfileRegistry {
        match format {
            Format::Json => &mut self.json,
            Format::Xml => &mut self.xml,
            Format::Dot => &mut self.dot,
        }
    }

    /// Adds the profiles from a loaded file ahead of the current ones
    pub fn merge(&mut self, file: ProfileFile) {
        self.json.prepend(file.json);
        self.xml.prepend(file.xml);
        self.dot.prepend(file.dot);
    }
}

impl Default for ProfileSet {
    fn default() -> Self {
        Self::builtin()
    }
}
