// Layout, escaping and composition laws checked over small generated trees
mod common;

use svg_builder::*;

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic tree with mixed shapes, groups and text, `depth` levels deep
    fn sample_tree(depth: usize, fan_out: usize) -> Element {
        let mut group = g().id(format!("level-{}", depth));
        for i in 0..fan_out {
            let child: Node = if depth == 0 {
                if i % 2 == 0 {
                    circle(i as f64, 2.5 * i as f64, 1.0).fill("red").into()
                } else {
                    text(&format!("label {} < {}", i, i + 1)).x(i as f64).into()
                }
            } else {
                sample_tree(depth - 1, fan_out).into()
            };
            group = group.with_child(child);
        }
        group
    }

    fn compact() -> Configuration {
        Configuration::compact()
    }

    fn pretty() -> Configuration {
        Configuration::pretty()
    }

    #[test]
    fn test_compact_is_open_tag_children_close_tag() {
        common::init_logging();
        let children: Vec<Node> = vec![
            circle(1.0, 2.0, 3.0).into(),
            Node::text("a & b"),
            rect(0.0, 0.0, 4.0, 4.0).with(block![fill("blue")]).into(),
        ];
        let element = g().id("outer").with_children(children.clone());
        let rendered = element.render(&compact());

        let mut expected = String::from(r#"<g id="outer">"#);
        for child in &children {
            expected.push_str(&render(child, &compact()));
        }
        expected.push_str("</g>");

        assert_eq!(rendered, expected);
        assert!(!rendered.contains('\n'));
    }

    #[test]
    fn test_compact_never_adds_whitespace() {
        let tree = Node::from(sample_tree(3, 3));
        let rendered = render(&tree, &compact());
        assert!(!rendered.contains('\n'));
        assert!(!rendered.contains("> <"));
        assert!(!rendered.contains(">  <"));
    }

    #[test]
    fn test_pretty_indents_each_level_by_one_unit() {
        let tree = Node::from(g().with(block![g().with(block![g().with(block![circle(0.0, 0.0, 1.0)])])]));
        let rendered = render(&tree, &pretty());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines,
            vec![
                "<g>",
                "  <g>",
                "    <g>",
                r#"      <circle cx="0" cy="0" r="1"></circle>"#,
                "    </g>",
                "  </g>",
                "</g>",
            ]
        );
        assert!(rendered.ends_with("</g>\n"));
    }

    #[test]
    fn test_pretty_closing_tag_matches_opening_depth() {
        let rendered = render(&Node::from(sample_tree(2, 2)), &pretty());
        let mut open_indents: Vec<usize> = Vec::new();
        for line in rendered.lines() {
            let indent = line.len() - line.trim_start().len();
            let trimmed = line.trim_start();
            if trimmed.starts_with("<g") {
                open_indents.push(indent);
            } else if trimmed == "</g>" {
                assert_eq!(Some(indent), open_indents.pop(), "unbalanced close in:\n{}", rendered);
            }
        }
        assert!(open_indents.is_empty());
    }

    #[test]
    fn test_pretty_uses_configured_indent_unit() {
        let config = Configuration::pretty().with_indent_unit("\t");
        let rendered = g().with(block![rect(0.0, 0.0, 1.0, 1.0)]).render(&config);
        assert_eq!(rendered, "<g>\n\t<rect x=\"0\" y=\"0\" width=\"1\" height=\"1\"></rect>\n</g>\n");
    }

    #[test]
    fn test_rendering_twice_is_identical() {
        let tree = Node::from(sample_tree(2, 4));
        for config in [compact(), pretty()] {
            let first = render(&tree, &config);
            let second = render(&tree, &config);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_parallel_renders_match_sequential() {
        let trees: Vec<Node> = (0..16).map(|i| Node::from(sample_tree(i % 3, 3))).collect();
        let config = pretty();
        let parallel = render_all(&trees, &config);
        let sequential: Vec<String> = trees.iter().map(|tree| render(tree, &config)).collect();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_same_tree_rendered_concurrently_with_different_configs() {
        let tree = Node::from(sample_tree(2, 3));
        let (compact_out, pretty_out) = rayon::join(
            || render(&tree, &Configuration::compact()),
            || render(&tree, &Configuration::pretty()),
        );
        assert_eq!(compact_out, render(&tree, &compact()));
        assert_eq!(pretty_out, render(&tree, &pretty()));
    }

    #[test]
    fn test_attribute_overwrite_law() {
        let element = circle(50.0, 50.0, 40.0).with(block![
            fill("red"),
            stroke("black"),
            fill("blue"),
        ]);
        let rendered = element.render(&compact());

        assert_eq!(rendered.matches("fill=").count(), 1);
        assert_eq!(
            rendered,
            r#"<circle cx="50" cy="50" r="40" fill="blue" stroke="black"></circle>"#
        );
    }

    #[test]
    fn test_escaping_round_trip() {
        let samples = ["a < b & c", "&&<<>>", "no specials", "x>y&amp;", "<tag attr=\"v\">"];
        for sample in samples {
            let escaped = render(&Node::text(sample), &compact());
            assert!(!escaped.contains('<'));
            assert!(!escaped.contains('>'));
            let restored = escaped
                .replace("&lt;", "<")
                .replace("&gt;", ">")
                .replace("&amp;", "&");
            assert_eq!(restored, sample);
        }
    }

    #[test]
    fn test_fragment_flattening_matches_direct_children() {
        let a = || circle(1.0, 1.0, 1.0);
        let b = || rect(0.0, 0.0, 2.0, 2.0);

        let via_fragment = g().with(block![Node::fragment([a().into(), b().into()])]);
        let direct = g().with(block![a(), b()]);

        assert_eq!(via_fragment.children(), direct.children());
        assert_eq!(via_fragment.render(&pretty()), direct.render(&pretty()));
    }

    #[test]
    fn test_conditional_items() {
        let show_label = false;
        let highlight: Option<&str> = Some("orange");
        let element = g().with(block![
            highlight.map(fill),
            Item::when(show_label, text("label")),
            Item::when(true, circle(0.0, 0.0, 1.0)),
        ]);

        assert_eq!(
            element.render(&compact()),
            r#"<g fill="orange"><circle cx="0" cy="0" r="1"></circle></g>"#
        );
    }

    #[test]
    fn test_concrete_scenarios() {
        let circle_node = make_element(
            "circle",
            [("cx", "50"), ("cy", "50"), ("r", "40")],
            block![],
        );
        assert_eq!(
            render(&circle_node, &compact()),
            r#"<circle cx="50" cy="50" r="40"></circle>"#
        );
        assert_eq!(
            render(&circle_node, &pretty()),
            "<circle cx=\"50\" cy=\"50\" r=\"40\"></circle>\n"
        );

        let rect_node = make_element("rect", [("width", "10"), ("height", "5")], block![]);
        let group = make_element(
            "g",
            Vec::<(String, String)>::new(),
            block![circle_node.clone(), rect_node],
        );
        assert_eq!(
            render(&group, &pretty()),
            "<g>\n  <circle cx=\"50\" cy=\"50\" r=\"40\"></circle>\n  <rect width=\"10\" height=\"5\"></rect>\n</g>\n"
        );

        assert_eq!(render(&Node::text("a < b & c"), &compact()), "a &lt; b &amp; c");
    }

    #[test]
    fn test_display_is_compact() {
        let node = Node::from(g().with(block![circle(1.0, 2.0, 3.0)]));
        assert_eq!(node.to_string(), render(&node, &compact()));
    }
}
