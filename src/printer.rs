//! Printer module - serializes Node trees to markup text
//!
//! A render call owns a fresh `Printer` (output buffer plus depth counter), so
//! independent trees can be rendered from several threads at once and a
//! single tree can be rendered concurrently under different configurations.

use crate::node::{Element, Node};
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Layout policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Everything on one line, no whitespace added
    #[default]
    Compact,
    /// One element per line, children indented one unit deeper
    Pretty,
}

/// Formatting policy for a render call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub mode: Mode,
    pub indent_unit: String,
}

pub const DEFAULT_INDENT_UNIT: &str = "  ";

impl Configuration {
    pub fn compact() -> Self {
        Configuration {
            mode: Mode::Compact,
            indent_unit: DEFAULT_INDENT_UNIT.to_string(),
        }
    }

    pub fn pretty() -> Self {
        Configuration {
            mode: Mode::Pretty,
            indent_unit: DEFAULT_INDENT_UNIT.to_string(),
        }
    }

    pub fn with_indent_unit(mut self, indent_unit: impl Into<String>) -> Self {
        self.indent_unit = indent_unit.into();
        self
    }

    pub fn is_pretty(&self) -> bool {
        self.mode == Mode::Pretty
    }

    /// Loads a configuration from JSON, e.g. `{"mode": "pretty", "indent_unit": "\t"}`
    ///
    /// Missing fields fall back to the compact preset.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse printer configuration")
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::compact()
    }
}

/// Serializer state for one render call
///
/// In pretty mode every element starts on a fresh line at `depth` indentation
/// and ends with a newline. Text is written exactly where the cursor is, with
/// no indentation or line break around it, so character data never picks up
/// layout whitespace.
pub struct Printer<'a> {
    config: &'a Configuration,
    buffer: String,
    depth: usize,
    at_line_start: bool,
}

impl<'a> Printer<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        Printer::at_depth(config, 0)
    }

    /// Starts the walk at `depth`, indenting the first line accordingly
    pub fn at_depth(config: &'a Configuration, depth: usize) -> Self {
        Printer {
            config,
            buffer: String::with_capacity(1024),
            depth,
            at_line_start: true,
        }
    }

    pub fn print(&mut self, node: &Node) {
        match node {
            Node::Empty => {}
            Node::Text(text) => self.print_text(text),
            Node::Fragment(children) => {
                for child in children {
                    self.print(child);
                }
            }
            Node::Element(element) => self.print_element(element),
        }
    }

    pub fn print_element(&mut self, element: &Element) {
        let pretty = self.config.is_pretty();
        if pretty {
            self.begin_line();
        }

        self.buffer.push('<');
        self.buffer.push_str(element.tag());
        for (name, value) in element.attributes() {
            self.buffer.push(' ');
            self.buffer.push_str(name);
            self.buffer.push_str("=\"");
            write_escaped_attr(&mut self.buffer, value);
            self.buffer.push('"');
        }
        self.buffer.push('>');
        self.at_line_start = false;

        if element.has_content() {
            self.depth += 1;
            for child in element.children() {
                self.print(child);
            }
            self.depth -= 1;
            if pretty && self.at_line_start {
                self.write_indent();
            }
        }

        self.buffer.push_str("</");
        self.buffer.push_str(element.tag());
        self.buffer.push('>');
        if pretty {
            self.buffer.push('\n');
            self.at_line_start = true;
        }
    }

    /// Raw markup written without escaping, e.g. a prologue line
    pub fn print_raw_line(&mut self, line: &str) {
        if self.config.is_pretty() {
            self.begin_line();
            self.buffer.push_str(line);
            self.buffer.push('\n');
            self.at_line_start = true;
        } else {
            self.buffer.push_str(line);
        }
    }

    pub fn finish(self) -> String {
        self.buffer
    }

    fn print_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        write_escaped_text(&mut self.buffer, text);
        self.at_line_start = false;
    }

    fn begin_line(&mut self) {
        if !self.at_line_start {
            self.buffer.push('\n');
            self.at_line_start = true;
        }
        self.write_indent();
    }

    fn write_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.config.indent_unit);
        }
    }
}

/// Serializes a node tree to a string
///
/// # Arguments
/// * `node` - The root node to serialize
/// * `config` - Layout policy
///
/// # Returns
/// The complete markup text
pub fn render(node: &Node, config: &Configuration) -> String {
    render_at(node, config, 0)
}

/// Serializes a node tree as if it were nested `depth` levels deep
pub fn render_at(node: &Node, config: &Configuration, depth: usize) -> String {
    let mut printer = Printer::at_depth(config, depth);
    printer.print(node);
    finish_render(printer)
}

/// Serializes a single element without wrapping it in a `Node`
pub fn render_element(element: &Element, config: &Configuration) -> String {
    let mut printer = Printer::new(config);
    printer.print_element(element);
    finish_render(printer)
}

fn finish_render(printer: Printer<'_>) -> String {
    let mode = printer.config.mode;
    let output = printer.finish();
    log::debug!("rendered {} bytes ({:?} mode)", output.len(), mode);
    output
}

/// Renders independent trees in parallel, one printer per tree
///
/// Output order matches input order.
pub fn render_all(nodes: &[Node], config: &Configuration) -> Vec<String> {
    nodes.par_iter().map(|node| render(node, config)).collect()
}

/// Escapes `&`, `<`, `>` and `"` in attribute values
fn write_escaped_attr(buffer: &mut String, input: &str) {
    write_escaped(buffer, input, true);
}

/// Escapes `&`, `<` and `>` in character data
fn write_escaped_text(buffer: &mut String, input: &str) {
    write_escaped(buffer, input, false);
}

fn write_escaped(buffer: &mut String, input: &str, in_attribute: bool) {
    let mut last = 0;
    for (idx, ch) in input.char_indices() {
        let entity = match ch {
            '&' => Some("&amp;"),
            '<' => Some("&lt;"),
            '>' => Some("&gt;"),
            '"' if in_attribute => Some("&quot;"),
            _ => None,
        };

        if let Some(entity) = entity {
            buffer.push_str(&input[last..idx]);
            buffer.push_str(entity);
            last = idx + ch.len_utf8();
        }
    }
    buffer.push_str(&input[last..]);
}
