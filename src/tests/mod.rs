#[cfg(test)]
mod rendering_tests {
    use crate::profile::builtin;
    use crate::renderer::markup::strip_markers;
    use crate::renderer::traits::MockRender;
    use crate::{
        Collection, Decorator, DecoratorTable, Exporter, Format, Fragment, Item, Markers, Profile,
        ProfileSet, RenderContext, Structure, Style, TreeRenderer, DEFAULT_PROFILE,
    };

    // App -> Modules -> AppModule
    fn create_app_tree() -> Item {
        Item::new("App").with_child(Collection::new("Modules").with_element(Item::new("AppModule")))
    }

    fn create_nested_tree() -> Item {
        Item::new("App")
            .with_child(
                Collection::new("Modules")
                    .with_element(Item::new("A"))
                    .with_element(
                        Item::new("B").with_child(Collection::new("Parts").with_element(Item::new("C"))),
                    ),
            )
            .with_child(Collection::new("Services").with_element(Item::new("S")))
    }

    fn exporter_with(format: Format, profile: Profile, tree: Item) -> Exporter {
        let mut profiles = ProfileSet::builtin();
        profiles.registry_mut(format).register(profile);
        Exporter::with_profiles(tree, profiles)
    }

    #[test]
    fn test_json_like_scenario() {
        let output = Exporter::new(create_app_tree()).render_as_json_like(DEFAULT_PROFILE, false);

        assert!(output.starts_with('{'));
        assert!(output.ends_with('}'));
        assert!(output.contains("'Modules' :["));
        assert!(output.contains("{ 'AppModule' :{"));
        assert_eq!(
            output,
            "{ { 'App' :{\n  'Modules' :[\n   { 'AppModule' :{}}\n ]\n}}\n}"
        );
    }

    #[test]
    fn test_xml_like_scenario() {
        let output = Exporter::new(create_app_tree()).render_as_xml_like(DEFAULT_PROFILE, false);

        assert_eq!(
            output,
            " <Item name='App'>\n  <Modules>\n   <Item name='AppModule'></Item>\n </Modules>\n</Item>\n"
        );
    }

    #[test]
    fn test_graph_scenario() {
        let output = Exporter::new(create_app_tree()).render_as_graph(DEFAULT_PROFILE, false);

        assert!(output.starts_with("digraph G{ "));
        assert!(output.ends_with(" }"));
        assert!(output.contains("subgraph cluster_Modules"));
        assert_eq!(
            output,
            "digraph G{  App\n  subgraph cluster_Modules{ color=yellow; node [style=filled,color=white]; color=blue; \n   AppModule\n  label = \"Modules\"; }\n\n }"
        );
    }

    #[test]
    fn test_graph_sanitizes_cluster_identifier() {
        let tree = Item::new("App")
            .with_child(Collection::new("My Component").with_element(Item::new("Header")));
        let output = Exporter::new(tree).render_as_graph(DEFAULT_PROFILE, false);

        assert!(output.contains("subgraph cluster_My_Component"));
        assert!(output.contains("label = \"My Component\""));
        assert!(!output.contains("cluster_My Component"));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let exporter = Exporter::new(create_nested_tree());
        for format in Format::ALL {
            let first = exporter.render(format, DEFAULT_PROFILE, false);
            let second = exporter.render(format, DEFAULT_PROFILE, false);
            assert_eq!(first, second, "{} output changed between renders", format);
        }
    }

    #[test]
    fn test_unknown_profile_matches_default() {
        let exporter = Exporter::new(create_nested_tree());
        for format in Format::ALL {
            assert_eq!(
                exporter.render(format, "no-such-profile", false),
                exporter.render(format, DEFAULT_PROFILE, false)
            );
        }
    }

    #[test]
    fn test_separators_only_between_items() {
        let things = ["One", "Two", "Three", "Four"]
            .into_iter()
            .fold(Collection::new("Things"), |c, name| c.with_element(Item::new(name)));
        let output = Exporter::new(Item::new("Root").with_child(things))
            .render_as_json_like(DEFAULT_PROFILE, false);

        assert_eq!(output.matches(',').count(), 3);
        assert_eq!(
            output,
            "{ { 'Root' :{\n  'Things' :[\n   { 'One' :{}},\n   { 'Two' :{}},\n   { 'Three' :{}},\n   { 'Four' :{}}\n ]\n}}\n}"
        );

        // Nothing trails the last item
        let last_comma = output.rfind(',').unwrap();
        let last_item = output.find("'Four'").unwrap();
        assert!(last_comma < last_item);
    }

    #[test]
    fn test_single_element_has_no_separator() {
        let output = Exporter::new(create_app_tree()).render_as_json_like(DEFAULT_PROFILE, false);
        assert!(!output.contains(','));
    }

    #[test]
    fn test_empty_collection() {
        let tree = Item::new("App").with_child(Collection::new("Empty"));
        let output = Exporter::new(tree).render_as_json_like(DEFAULT_PROFILE, false);

        assert_eq!(output, "{ { 'App' :{\n  'Empty' :[]\n}}\n}");
    }

    #[test]
    fn test_anonymous_root_renders_decorators_only() {
        let tree = Item::anonymous().with_child(Collection::new("Modules").with_element(Item::new("M")));
        let output = Exporter::new(tree).render_as_xml_like(DEFAULT_PROFILE, false);

        assert_eq!(
            output,
            " <Item name=''>\n  <Modules>\n   <Item name='M'></Item>\n </Modules>\n</Item>\n"
        );
    }

    #[test]
    fn test_breadcrumb_placeholders() {
        let table = DecoratorTable::new(
            Decorator::new("<group name=\"CollectionPlaceholder\">", "", "</group>", "")
                .with_item_layout(Style::Block, 1, ' '),
            Decorator::new("<node id=\"${0}\" parent=\"${1}\" label=\"", "\">", "</node>", "")
                .with_item_layout(Style::Block, 1, ' '),
        );
        let tree = Item::new("App Root").with_child(
            Collection::new("Modules").with_element(
                Item::new("Core-Module")
                    .with_child(Collection::new("Services").with_element(Item::new("Auth"))),
            ),
        );

        let exporter = exporter_with(Format::Xml, Profile::new("ids", table), tree);
        let output = exporter.render_as_xml_like("ids", false);

        assert_eq!(
            output,
            " <node id=\"App_Root\" parent=\"${1}\" label=\"App Root\">\n  <group name=\"Modules\">\n   <node id=\"Core_Module\" parent=\"App_Root\" label=\"Core-Module\">\n    <group name=\"Services\">\n     <node id=\"Auth\" parent=\"Core_Module\" label=\"Auth\"></node>\n   </group>\n  </node>\n </group>\n</node>\n"
        );
    }

    #[test]
    fn test_block_children_with_tab_indent() {
        let table = DecoratorTable::new(
            Decorator::new("[", "", "]", "")
                .with_children_layout(Style::Block, 2, ' ')
                .with_separator(", "),
            Decorator::new("(", ")", "end", "")
                .with_children_layout(Style::Block, 1, '\t')
                .with_separator(", "),
        );
        let tree = Item::new("root").with_child(
            Collection::new("list")
                .with_element(Item::new("a"))
                .with_element(Item::new("b")),
        );

        let exporter = exporter_with(Format::Xml, Profile::new("blocks", table), tree);
        assert_eq!(
            exporter.render_as_xml_like("blocks", false),
            "(root\n\t)\n[\n\t  \n(a\n\t  \t)\n\t end, (b\n\t  \t)\n\t end\n]\nend"
        );
    }

    #[test]
    fn test_structure_overrides_apply_per_child() {
        let structure = Structure::default().with_child(
            Structure::default()
                .with_outer(
                    Decorator::new("<mods>", "", "</mods>", "")
                        .with_item_layout(Style::Block, 1, ' ')
                        .with_separator(" | "),
                )
                .with_inner(
                    Decorator::new("<mod>", "", "</mod>", "").with_item_layout(Style::Block, 1, ' '),
                ),
        );
        let profile = Profile::new("modules", builtin::xml_profile().decorators).with_structure(structure);
        let exporter = exporter_with(Format::Xml, profile, create_nested_tree());

        // First child collection and its elements use the overrides, deeper
        // levels and the second collection keep the table defaults
        assert_eq!(
            exporter.render_as_xml_like("modules", false),
            " <Item name='App'>\n  <mods>\n   <mod>A</mod> | \n   <mod>B\n    <Parts>\n     <Item name='C'></Item>\n   </Parts>\n  </mod>\n </mods>\n  <Services>\n   <Item name='S'></Item>\n </Services>\n</Item>\n"
        );
        assert_eq!(
            exporter.render_as_xml_like(DEFAULT_PROFILE, false),
            " <Item name='App'>\n  <Modules>\n   <Item name='A'></Item>,\n   <Item name='B'>\n    <Parts>\n     <Item name='C'></Item>\n   </Parts>\n  </Item>\n </Modules>\n  <Services>\n   <Item name='S'></Item>\n </Services>\n</Item>\n"
        );
    }

    #[test]
    fn test_colorized_wraps_fragments() {
        let output = Exporter::new(create_app_tree()).render_as_xml_like(DEFAULT_PROFILE, true);

        assert_eq!(
            output,
            " !%#span class=\"InnerOpeningPrefix\"#%!<Item name='!%#/span#%!!%#span class=\"InnerItem\"#%!App!%#/span#%!!%#span class=\"InnerOpeningSuffix\"#%!'>!%#/span#%!\n  !%#span class=\"OuterOpeningPrefix\"#%!<Modules>!%#/span#%!!%#span class=\"OuterOpeningSuffix\"#%!!%#/span#%!\n   !%#span class=\"InnerOpeningPrefix\"#%!<Item name='!%#/span#%!!%#span class=\"InnerItem\"#%!AppModule!%#/span#%!!%#span class=\"InnerOpeningSuffix\"#%!'>!%#/span#%!!%#span class=\"InnerClosingPrefix\"#%!</Item>!%#/span#%!\n !%#span class=\"OuterClosingPrefix\"#%!</Modules>!%#/span#%!\n!%#span class=\"OuterClosingSuffix\"#%!!%#/span#%!!%#span class=\"InnerClosingPrefix\"#%!</Item>!%#/span#%!\n"
        );
    }

    #[test]
    fn test_colorized_strips_back_to_plain() {
        let exporter = Exporter::new(create_nested_tree());
        for format in Format::ALL {
            let plain = exporter.render(format, DEFAULT_PROFILE, false);
            let colorized = exporter.render(format, DEFAULT_PROFILE, true);
            assert_ne!(plain, colorized);
            assert_eq!(strip_markers(&colorized), plain);
        }
    }

    #[test]
    fn test_html_keeps_literal_brackets_escaped() {
        let output = Exporter::new(create_app_tree()).render_as_xml_like(DEFAULT_PROFILE, true);
        let html = crate::to_html(&output);

        assert!(html.contains("<span class=\"OuterOpeningPrefix\">&lt;Modules&gt;</span>"));
        assert!(html.contains("<span class=\"InnerItem\">AppModule</span>"));
        assert!(!html.contains("<Modules>"));
    }

    #[test]
    fn test_render_styles_every_fragment() {
        let mut markup = MockRender::new();
        // Two items with four fragments each, one collection with four
        markup
            .expect_style()
            .times(12)
            .returning(|fragment: Fragment, content: &str| format!("[{}:{}]", fragment.class_name(), content));

        let tree = create_app_tree();
        let table = builtin::json_profile().decorators;
        let context = RenderContext::root(&tree, &table, None, true);
        let output = TreeRenderer::new(&markup).render_item(&context);

        assert!(output.contains("[InnerItem:App]"));
        assert!(output.contains("[InnerItem:AppModule]"));
        assert!(output.contains("[OuterOpeningPrefix:'Modules' :[]"));
        assert!(output.contains("[OuterClosingPrefix:]]"));
    }

    #[test]
    fn test_plain_render_never_styles() {
        let mut markup = MockRender::new();
        markup.expect_style().never();

        let tree = create_nested_tree();
        let table = builtin::dot_profile().decorators;
        let context = RenderContext::root(&tree, &table, None, false);
        let output = TreeRenderer::new(&markup).render_item(&context);

        assert!(output.contains("subgraph cluster_Parts"));
    }

    #[test]
    fn test_collection_name_follows_opening_prefix() {
        let collection = Collection::new("Modules")
            .with_name("mods")
            .with_element(Item::new("A"));
        let table = DecoratorTable::new(
            Decorator::new("[", "", "]", ""),
            Decorator::new("(", "", ")", ""),
        );
        let renderer = TreeRenderer::new(&Markers);

        let plain = RenderContext::root(&collection, &table, None, false);
        assert_eq!(renderer.render_collection(&plain), "[mods\n(A)]");

        // The name is written as is, outside any marker
        let colorized = RenderContext::root(&collection, &table, None, true);
        assert!(renderer
            .render_collection(&colorized)
            .contains("!%#span class=\"OuterOpeningPrefix\"#%![!%#/span#%!mods"));
    }

    #[test]
    fn test_deeply_nested_tree() {
        let depth = 200;
        let mut tree = Item::new("leaf");
        for level in (0..depth).rev() {
            tree = Item::new(format!("n{}", level))
                .with_child(Collection::new(format!("c{}", level)).with_element(tree));
        }

        let output = Exporter::new(tree).render_as_xml_like(DEFAULT_PROFILE, false);
        assert_eq!(output.matches("<Item name=").count(), depth + 1);
        assert_eq!(output.matches("</Item>").count(), depth + 1);
        assert!(output.contains("<c199>"));
    }

    #[test]
    fn test_profile_without_default_uses_first() {
        let table = DecoratorTable::new(
            Decorator::new("<only>", "", "</only>", ""),
            Decorator::new("", "", "", ""),
        );
        let mut registry = crate::ProfileRegistry::new(Format::Json, Profile::new("only", table));
        registry.register(Profile::new("other", builtin::json_profile().decorators));

        assert_eq!(registry.resolve(DEFAULT_PROFILE).name, "only");
    }
}
