//! Reference decorator tables shipped for each format

use crate::profile::decorator::*;
use crate::profile::registry::{Profile, DEFAULT_PROFILE};

// All built-in decorators share the same layout: each item or collection
// starts on its own line one column deeper, children stay inline.
fn laid_out(decorator: Decorator) -> Decorator {
    decorator
        .with_item_layout(Style::Block, 1, ' ')
        .with_children_layout(Style::Inline, 0, ' ')
}

pub fn json_profile() -> Profile {
    Profile::new(
        DEFAULT_PROFILE,
        DecoratorTable::new(
            laid_out(Decorator::new("'CollectionPlaceholder' :[", "", "]", "")).with_separator(","),
            laid_out(Decorator::new("{ '", "' :{", "}}", "")).with_separator(","),
        ),
    )
}

pub fn xml_profile() -> Profile {
    Profile::new(
        DEFAULT_PROFILE,
        DecoratorTable::new(
            laid_out(Decorator::new(
                "<SanitizedCollectionPlaceholder>",
                "",
                "</SanitizedCollectionPlaceholder>",
                "",
            ))
            .with_separator(","),
            laid_out(Decorator::new("<Item name='", "'>", "</Item>", "")).with_separator(","),
        ),
    )
}

pub fn dot_profile() -> Profile {
    Profile::new(
        DEFAULT_PROFILE,
        DecoratorTable::new(
            laid_out(Decorator::new(
                "subgraph cluster_SanitizedCollectionPlaceholder",
                "{ color=yellow; node [style=filled,color=white]; color=blue; ",
                " label = \"CollectionPlaceholder\"; }",
                "",
            ))
            .with_separator(";"),
            laid_out(Decorator::default()).with_separator(","),
        ),
    )
}
