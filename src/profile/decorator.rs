use serde::Deserialize;

/// Whether a decorator breaks the line and indents before its fragment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[serde(alias = "div")]
    Block,
    #[default]
    #[serde(alias = "span")]
    Inline,
}

impl Style {
    pub fn is_block(self) -> bool {
        matches!(self, Style::Block)
    }
}

/// The two structural roles a decorator can play. Profile files name them
/// by their table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Role {
    /// Wraps a collection and separates its elements
    #[serde(rename = "Collection", alias = "Outer")]
    Outer,
    /// Wraps a single item
    #[serde(rename = "Item", alias = "Inner")]
    Inner,
}

/// Template rule for one structural role.
///
/// The four template fragments may contain placeholders:
/// `CollectionPlaceholder` and `SanitizedCollectionPlaceholder` resolve to the
/// collection label (raw and identifier-safe), while `${0}` and `${1}` in an
/// item opening prefix resolve to the item's own name and its parent item's
/// name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Decorator {
    #[serde(alias = "OppeningPrefix")]
    pub opening_prefix: String,
    #[serde(alias = "OppeningSufix")]
    pub opening_suffix: String,
    pub closing_prefix: String,
    #[serde(alias = "ClosingSufix")]
    pub closing_suffix: String,
    pub item_ident: i32,
    pub children_ident: i32,
    pub item_ident_character: char,
    pub children_ident_character: char,
    pub item_style: Style,
    pub children_style: Style,
    pub separator: String,
}

impl Default for Decorator {
    fn default() -> Self {
        Self {
            opening_prefix: String::new(),
            opening_suffix: String::new(),
            closing_prefix: String::new(),
            closing_suffix: String::new(),
            item_ident: 0,
            children_ident: 0,
            item_ident_character: ' ',
            children_ident_character: ' ',
            item_style: Style::Inline,
            children_style: Style::Inline,
            separator: String::new(),
        }
    }
}

impl Decorator {
    pub fn new(
        opening_prefix: impl Into<String>,
        opening_suffix: impl Into<String>,
        closing_prefix: impl Into<String>,
        closing_suffix: impl Into<String>,
    ) -> Self {
        Self {
            opening_prefix: opening_prefix.into(),
            opening_suffix: opening_suffix.into(),
            closing_prefix: closing_prefix.into(),
            closing_suffix: closing_suffix.into(),
            ..Self::default()
        }
    }

    pub fn with_item_layout(mut self, style: Style, ident: i32, character: char) -> Self {
        self.item_style = style;
        self.item_ident = ident;
        self.item_ident_character = character;
        self
    }

    pub fn with_children_layout(mut self, style: Style, ident: i32, character: char) -> Self {
        self.children_style = style;
        self.children_ident = ident;
        self.children_ident_character = character;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

/// Paired decorators used by one profile. Both roles are mandatory, so a
/// table read from a profile file without either one fails to load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DecoratorTable {
    pub collection: Decorator,
    pub item: Decorator,
}

impl DecoratorTable {
    pub fn new(collection: Decorator, item: Decorator) -> Self {
        Self { collection, item }
    }

    pub fn decorator(&self, role: Role) -> &Decorator {
        match role {
            Role::Outer => &self.collection,
            Role::Inner => &self.item,
        }
    }
}
