use crate::profile::{DecoratorTable, Structure};
use crate::renderer::markup::Fragment;

/// Name recorded for one nesting level of the walk. Each rendered item
/// pushes its own entry onto the chain it was handed, so the chain always
/// describes the path from the root to the item currently being rendered.
#[derive(Debug, Clone, Copy)]
pub struct Breadcrumb<'a> {
    pub level: usize,
    pub name: Option<&'a str>,
    pub parent: Option<&'a Breadcrumb<'a>>,
}

impl<'a> Breadcrumb<'a> {
    pub fn new(level: usize, name: Option<&'a str>, parent: Option<&'a Breadcrumb<'a>>) -> Self {
        Self {
            level,
            name,
            parent,
        }
    }

    /// Name recorded at `level`, if that level is on the chain and named
    pub fn name_at(&self, level: usize) -> Option<&'a str> {
        let mut crumb = Some(self);
        while let Some(current) = crumb {
            if current.level == level {
                return current.name;
            }
            if current.level < level {
                return None;
            }
            crumb = current.parent;
        }
        None
    }
}

/// Configuration context for rendering one node
#[derive(Debug, Clone)]
pub struct RenderContext<'a, N> {
    pub node: &'a N,
    pub decorators: &'a DecoratorTable,
    pub overrides: Option<&'a Structure>,
    pub indent: String,
    pub level: usize,
    pub colorized: bool,
    /// Siblings still to be rendered after this node; `None` outside a
    /// collection
    pub elements_left: Option<usize>,
    pub breadcrumbs: Option<&'a Breadcrumb<'a>>,
}

impl<'a, N> RenderContext<'a, N> {
    pub fn root(
        node: &'a N,
        decorators: &'a DecoratorTable,
        overrides: Option<&'a Structure>,
        colorized: bool,
    ) -> Self {
        Self {
            node,
            decorators,
            overrides,
            indent: String::new(),
            level: 0,
            colorized,
            elements_left: None,
            breadcrumbs: None,
        }
    }

    /// Elements that follow this one inside the enclosing collection
    pub fn has_following_siblings(&self) -> bool {
        self.elements_left.is_some_and(|left| left > 0)
    }

    pub fn is_last_sibling(&self) -> bool {
        self.elements_left == Some(0)
    }
}

/// Styles one structural fragment of the output
#[cfg_attr(test, mockall::automock)]
pub trait Render {
    fn style(&self, fragment: Fragment, content: &str) -> String;
}
