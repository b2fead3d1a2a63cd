use tracing::{debug, trace};

use crate::parser::{Collection, Item};
use crate::profile::{resolve_decorator, Format, ProfileSet, Role};
use crate::renderer::components::*;
use crate::renderer::markup::{Fragment, Markers};
use crate::renderer::traits::*;

/// Walks a tree, emitting decorator fragments around every item and
/// collection. The walk itself knows nothing about any output format; all
/// of that lives in the decorator table carried by the context.
pub struct TreeRenderer<'m> {
    markup: &'m dyn Render,
}

impl<'m> TreeRenderer<'m> {
    pub fn new(markup: &'m dyn Render) -> Self {
        Self { markup }
    }

    fn emit<N>(&self, output: &mut String, context: &RenderContext<'_, N>, fragment: Fragment, text: &str) {
        if context.colorized {
            output.push_str(&self.markup.style(fragment, text));
        } else {
            output.push_str(text);
        }
    }

    pub fn render_item(&self, context: &RenderContext<'_, Item>) -> String {
        let mut output = String::new();
        self.write_item(&mut output, context);
        output
    }

    /// Elements are handed the collection's own grown indent rather than
    /// that indent joined onto the one the collection started from, so each
    /// level indents by exactly its decorator's amount.
    pub fn render_collection(&self, context: &RenderContext<'_, Collection>) -> String {
        let mut output = String::new();
        self.write_collection(&mut output, context);
        output
    }

    fn write_item(&self, output: &mut String, context: &RenderContext<'_, Item>) {
        let item = context.node;
        let outer = resolve_decorator(context.overrides, context.decorators, Role::Outer);
        let inner = resolve_decorator(context.overrides, context.decorators, Role::Inner);
        let name = item.name.as_deref();
        let crumbs = Breadcrumb::new(context.level, name, context.breadcrumbs);

        trace!(level = context.level, item = ?name, "rendering item");

        let mut indent = context.indent.clone();

        if inner.item_style.is_block() {
            indent = IndentationHelper::extend(
                &context.indent,
                inner.item_ident,
                inner.item_ident_character,
            );
            output.push_str(&indent);
        }

        let tag = Placeholders::substitute_breadcrumbs(&inner.opening_prefix, &crumbs, context.level);
        self.emit(output, context, Fragment::InnerOpeningPrefix, &tag);

        if let Some(name) = name {
            self.emit(output, context, Fragment::InnerItem, name);
        }

        if inner.children_style.is_block() {
            output.push('\n');
            indent = IndentationHelper::extend(
                &context.indent,
                inner.children_ident,
                inner.children_ident_character,
            );
            output.push_str(&indent);
        }
        self.emit(output, context, Fragment::InnerOpeningSuffix, &inner.opening_suffix);

        if !item.children.is_empty() {
            output.push('\n');
        }
        for (index, collection) in item.children.iter().enumerate() {
            let child = RenderContext {
                node: collection,
                decorators: context.decorators,
                overrides: context.overrides.and_then(|s| s.child(index)),
                indent: indent.clone(),
                level: context.level + 1,
                colorized: context.colorized,
                elements_left: None,
                breadcrumbs: Some(&crumbs),
            };
            self.write_collection(output, &child);
        }

        if inner.children_style.is_block() {
            output.push('\n');
            output.push_str(&IndentationHelper::extend(
                &context.indent,
                -inner.children_ident,
                inner.children_ident_character,
            ));
        }
        self.emit(output, context, Fragment::InnerClosingPrefix, &inner.closing_prefix);

        // The separator belongs to the collection holding this item
        if context.has_following_siblings() {
            output.push_str(&outer.separator);
        }

        if inner.item_style.is_block() {
            output.push('\n');
            if context.is_last_sibling() {
                output.push_str(&IndentationHelper::extend(
                    &context.indent,
                    -inner.item_ident,
                    inner.item_ident_character,
                ));
            }
        }
        output.push_str(&inner.closing_suffix);
    }

    fn write_collection(&self, output: &mut String, context: &RenderContext<'_, Collection>) {
        let collection = context.node;
        let outer = resolve_decorator(context.overrides, context.decorators, Role::Outer);
        let label = collection.label.as_str();

        trace!(level = context.level, label, elements = collection.elements.len(), "rendering collection");

        let mut indent = context.indent.clone();

        if outer.item_style.is_block() {
            indent = IndentationHelper::extend(
                &context.indent,
                outer.item_ident,
                outer.item_ident_character,
            );
            output.push_str(&indent);
        }
        let opening = Placeholders::substitute_label(&outer.opening_prefix, label);
        self.emit(output, context, Fragment::OuterOpeningPrefix, &opening);
        if let Some(name) = &collection.name {
            output.push_str(name);
        }

        if outer.children_style.is_block() {
            output.push('\n');
            indent = IndentationHelper::extend(
                &context.indent,
                outer.children_ident,
                outer.children_ident_character,
            );
            output.push_str(&indent);
        }
        self.emit(output, context, Fragment::OuterOpeningSuffix, &outer.opening_suffix);

        let count = collection.elements.len();
        if count > 0 {
            output.push('\n');
        }
        for (index, item) in collection.elements.iter().enumerate() {
            let element = RenderContext {
                node: item,
                decorators: context.decorators,
                overrides: context.overrides,
                indent: indent.clone(),
                level: context.level,
                colorized: context.colorized,
                elements_left: Some(count - 1 - index),
                breadcrumbs: context.breadcrumbs,
            };
            self.write_item(output, &element);
        }

        if outer.children_style.is_block() {
            output.push('\n');
            output.push_str(&IndentationHelper::extend(
                &context.indent,
                -outer.children_ident,
                outer.children_ident_character,
            ));
        }
        let closing = Placeholders::substitute_label(&outer.closing_prefix, label);
        self.emit(output, context, Fragment::OuterClosingPrefix, &closing);

        if outer.item_style.is_block() {
            output.push('\n');
            output.push_str(&IndentationHelper::extend(
                &context.indent,
                -outer.item_ident,
                outer.item_ident_character,
            ));
        }
        self.emit(output, context, Fragment::OuterClosingSuffix, &outer.closing_suffix);
    }
}

/// Renders one tree in any of the registered formats and profiles
pub struct Exporter {
    tree: Item,
    profiles: ProfileSet,
}

impl Exporter {
    pub fn new(tree: Item) -> Self {
        Self::with_profiles(tree, ProfileSet::builtin())
    }

    pub fn with_profiles(tree: Item, profiles: ProfileSet) -> Self {
        Self { tree, profiles }
    }

    /// JSON-shaped output, wrapped in `{` and `}`
    pub fn render_as_json_like(&self, profile_name: &str, colorized: bool) -> String {
        format!("{{{}}}", self.walk(Format::Json, profile_name, colorized))
    }

    /// XML-shaped output, returned as the walk produced it
    pub fn render_as_xml_like(&self, profile_name: &str, colorized: bool) -> String {
        self.walk(Format::Xml, profile_name, colorized)
    }

    /// Graph description, wrapped in a `digraph G{ ... }` envelope
    pub fn render_as_graph(&self, profile_name: &str, colorized: bool) -> String {
        format!("digraph G{{ {} }}", self.walk(Format::Dot, profile_name, colorized))
    }

    pub fn render(&self, format: Format, profile_name: &str, colorized: bool) -> String {
        match format {
            Format::Json => self.render_as_json_like(profile_name, colorized),
            Format::Xml => self.render_as_xml_like(profile_name, colorized),
            Format::Dot => self.render_as_graph(profile_name, colorized),
        }
    }

    fn walk(&self, format: Format, profile_name: &str, colorized: bool) -> String {
        let profile = self.profiles.registry(format).resolve(profile_name);
        let context = RenderContext::root(
            &self.tree,
            &profile.decorators,
            profile.structure.as_ref(),
            colorized,
        );

        let output = TreeRenderer::new(&Markers).render_item(&context);
        debug!(
            %format,
            requested = profile_name,
            profile = %profile.name,
            colorized,
            bytes = output.len(),
            "rendered tree"
        );
        output
    }
}
