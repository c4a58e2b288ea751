// Document envelope and root-element rendering
mod common;

use svg_builder::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_with_xml_declaration() {
        common::init_logging();
        let document = Document::new(svg_sized(100.0, 100.0).with(block![circle(50.0, 50.0, 40.0)]))
            .with_xml_declaration();

        let rendered = document.render(&Configuration::compact());
        assert!(rendered.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(rendered.contains("<svg"));
        assert!(rendered.contains("<circle"));
        assert!(!rendered.contains("<!DOCTYPE"));
    }

    #[test]
    fn test_document_with_doctype() {
        let document = wrap_document(
            svg_sized(100.0, 100.0).with(block![rect(10.0, 10.0, 80.0, 80.0)]),
            true,
            true,
        );

        let rendered = document.render(&Configuration::pretty());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], XML_DECLARATION);
        assert!(lines[1].starts_with("<!DOCTYPE svg PUBLIC"));
        assert!(lines[1].contains("svg11.dtd"));
        assert_eq!(lines[2], r#"<svg width="100" height="100">"#);
        assert_eq!(lines[3], r#"  <rect x="10" y="10" width="80" height="80"></rect>"#);
        assert_eq!(lines[4], "</svg>");
        assert!(rendered.ends_with("</svg>\n"));
    }

    #[test]
    fn test_doctype_without_prologue() {
        let document = wrap_document(svg(), false, true);
        assert_eq!(
            document.render(&Configuration::pretty()),
            format!("{}\n<svg></svg>\n", SVG_DOCTYPE)
        );
    }

    #[test]
    fn test_pretty_and_compact_documents() {
        let root = svg().with(block![g().with(block![
            circle(50.0, 50.0, 40.0),
            rect(10.0, 10.0, 30.0, 30.0),
        ])]);

        let pretty = Document::new(root.clone()).render(&Configuration::pretty());
        assert!(pretty.contains('\n'));
        assert!(pretty.contains("\n  <g>\n    <circle"));

        let compact = Document::new(root).render(&Configuration::default());
        assert!(!compact.contains('\n'));
    }

    #[test]
    fn test_namespaced_root_without_trailing_whitespace() {
        let document = common::test_document(100.0, 100.0, None, block![
            circle(50.0, 50.0, 40.0).with(block![fill("red"), stroke_with_width("black", 2.0)]),
        ]);

        let expected = "<svg width=\"100\" height=\"100\" xmlns=\"http://www.w3.org/2000/svg\">\n  <circle cx=\"50\" cy=\"50\" r=\"40\" fill=\"red\" stroke=\"black\" stroke-width=\"2\"></circle>\n</svg>\n";
        assert_eq!(document.render(&Configuration::pretty()), expected);
    }

    #[test]
    fn test_view_box_root() {
        let icon = svg_with_view_box("0 0 24 24").with(block![
            path("M12 2L2 7l10 5 10-5-10-5z").with(block![fill("currentColor")]),
            path("M2 17l10 5 10-5-10-5z").with(block![fill("currentColor"), opacity(0.7)]),
        ]);

        let output = icon.render(&Configuration::compact());
        assert!(output.starts_with(r#"<svg viewBox="0 0 24 24">"#));
        assert!(output.contains(r#"<path d="M12 2L2 7l10 5 10-5-10-5z" fill="currentColor"></path>"#));
        assert!(output.contains(r#"opacity="0.7""#));
    }

    #[test]
    fn test_invalid_view_box_falls_back_to_bare_root() {
        common::init_logging();
        let root = svg_with_view_box("0 0 wide").with(block![circle(1.0, 1.0, 1.0)]);
        assert_eq!(
            root.render(&Configuration::compact()),
            r#"<svg><circle cx="1" cy="1" r="1"></circle></svg>"#
        );
    }
}
