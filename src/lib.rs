//! # tree-export
//!
//! Renders a tree of alternating items and collections into JSON-like,
//! XML-like and graph description output. A single recursive walk produces
//! every format; what differs between them is only the decorator table of
//! the selected profile.
//!
//! ```ignore
//! use tree_export::{Collection, Exporter, Item};
//!
//! let tree = Item::new("App")
//!     .with_child(Collection::new("Modules").with_element(Item::new("AppModule")));
//! let graph = Exporter::new(tree).render_as_graph("default", false);
//! assert!(graph.contains("subgraph cluster_Modules"));
//! ```

pub mod parser;
pub mod profile;
pub mod renderer;

#[cfg(test)]
mod tests;

pub use parser::{Collection, Item, ProfileFile, ProfileParser, TreeParser};
pub use profile::{
    Decorator, DecoratorTable, Format, Override, Profile, ProfileRegistry, ProfileSet, Role,
    Structure, Style, DEFAULT_PROFILE,
};
pub use renderer::{to_html, Exporter, Fragment, Markers, Render, RenderContext, TreeRenderer};
