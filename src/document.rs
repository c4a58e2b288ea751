//! Document wrapper - optional XML prologue and DOCTYPE around a root element

use crate::node::Node;
use crate::printer::{Configuration, Printer};

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

pub const SVG_DOCTYPE: &str = r#"<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">"#;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// A root node plus the envelope lines requested for it
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub root: Node,
    pub include_xml_declaration: bool,
    pub include_doctype: bool,
}

impl Document {
    /// A document with no prologue and no doctype
    pub fn new(root: impl Into<Node>) -> Self {
        Document {
            root: root.into(),
            include_xml_declaration: false,
            include_doctype: false,
        }
    }

    pub fn with_xml_declaration(mut self) -> Self {
        self.include_xml_declaration = true;
        self
    }

    pub fn with_doctype(mut self) -> Self {
        self.include_doctype = true;
        self
    }

    /// Renders the envelope lines followed by the root
    ///
    /// Pretty mode puts the declaration and the doctype on lines of their own;
    /// compact mode writes them back to back with the root.
    pub fn render(&self, config: &Configuration) -> String {
        let mut printer = Printer::new(config);
        if self.include_xml_declaration {
            printer.print_raw_line(XML_DECLARATION);
        }
        if self.include_doctype {
            printer.print_raw_line(SVG_DOCTYPE);
        }
        printer.print(&self.root);
        printer.finish()
    }
}

/// Wraps `root` with the requested envelope lines
pub fn wrap_document(root: impl Into<Node>, include_prologue: bool, include_doctype: bool) -> Document {
    Document {
        root: root.into(),
        include_xml_declaration: include_prologue,
        include_doctype,
    }
}
