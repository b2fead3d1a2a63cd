//! Colorization markers wrapped around rendered fragments

use crate::renderer::traits::Render;

/// Opens a marker tag; becomes `<` once the surrounding text is escaped
pub const MARKER_OPEN: &str = "!%#";
/// Closes a marker tag; becomes `>` once the surrounding text is escaped
pub const MARKER_CLOSE: &str = "#%!";

/// Semantic class of an emitted fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fragment {
    OuterOpeningPrefix,
    OuterOpeningSuffix,
    OuterClosingPrefix,
    OuterClosingSuffix,
    InnerOpeningPrefix,
    InnerItem,
    InnerOpeningSuffix,
    InnerClosingPrefix,
}

impl Fragment {
    pub fn class_name(self) -> &'static str {
        match self {
            Fragment::OuterOpeningPrefix => "OuterOpeningPrefix",
            Fragment::OuterOpeningSuffix => "OuterOpeningSuffix",
            Fragment::OuterClosingPrefix => "OuterClosingPrefix",
            Fragment::OuterClosingSuffix => "OuterClosingSuffix",
            Fragment::InnerOpeningPrefix => "InnerOpeningPrefix",
            Fragment::InnerItem => "InnerItem",
            Fragment::InnerOpeningSuffix => "InnerOpeningSuffix",
            Fragment::InnerClosingPrefix => "InnerClosingPrefix",
        }
    }
}

/// Wraps each fragment in a begin/end marker pair carrying its class name
pub struct Markers;

impl Render for Markers {
    fn style(&self, fragment: Fragment, content: &str) -> String {
        format!(
            "{open}span class=\"{class}\"{close}{content}{open}/span{close}",
            open = MARKER_OPEN,
            close = MARKER_CLOSE,
            class = fragment.class_name(),
        )
    }
}

/// Converts marked-up output into HTML. The text is escaped first and the
/// markers are substituted afterwards, so literal angle brackets in the
/// output stay escaped while the markers become real `<span>` tags.
pub fn to_html(marked: &str) -> String {
    let mut escaped = String::with_capacity(marked.len());
    for c in marked.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }

    escaped.replace(MARKER_OPEN, "<").replace(MARKER_CLOSE, ">")
}

/// Drops every marker, leaving the text as if rendered without colorization
pub fn strip_markers(marked: &str) -> String {
    let mut output = String::with_capacity(marked.len());
    let mut rest = marked;

    while let Some(start) = rest.find(MARKER_OPEN) {
        output.push_str(&rest[..start]);
        let tail = &rest[start + MARKER_OPEN.len()..];
        match tail.find(MARKER_CLOSE) {
            Some(end) => rest = &tail[end + MARKER_CLOSE.len()..],
            None => {
                rest = &rest[start..];
                break;
            }
        }
    }

    output.push_str(rest);
    output
}
