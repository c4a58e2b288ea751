//! Node model - the immutable markup tree handed to the printer

use crate::compose::{compose, Item};
use crate::format::AttributeValue;
use crate::printer::{render, render_element, Configuration};
use indexmap::IndexMap;
use std::fmt;

/// One unit of the markup tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A tagged element with attributes and children
    Element(Element),
    /// Character data, escaped when printed
    Text(String),
    /// Renders nothing; the identity of composition
    Empty,
    /// Siblings without a wrapping tag
    Fragment(Vec<Node>),
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    pub fn fragment(children: impl IntoIterator<Item = Node>) -> Self {
        Node::Fragment(children.into_iter().collect())
    }

    /// True when printing this node would produce at least one character
    pub fn has_content(&self) -> bool {
        match self {
            Node::Element(_) => true,
            Node::Text(text) => !text.is_empty(),
            Node::Empty => false,
            Node::Fragment(children) => children.iter().any(Node::has_content),
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn render(&self, config: &Configuration) -> String {
        render(self, config)
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::Empty
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// Compact rendering
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, &Configuration::compact()))
    }
}

/// A markup element
///
/// The tag is fixed at construction. Attributes keep insertion order and
/// setting an existing name overwrites the value in place. Every mutator takes
/// `self` by value and hands back the updated element, so a value that has
/// already been placed in a tree is never changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attributes: IndexMap<String, String>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Looks up a single attribute value
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// True when at least one child would print something
    pub fn has_content(&self) -> bool {
        self.children.iter().any(Node::has_content)
    }

    /// Returns the element with `name` set to `value`
    ///
    /// An existing entry keeps its position and takes the new value. Empty
    /// names are dropped.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl AttributeValue) -> Self {
        self.set_attribute(name.into(), value.to_attribute_value());
        self
    }

    /// Sets the attribute only when a value is present
    pub fn with_optional_attribute<V: AttributeValue>(
        self,
        name: impl Into<String>,
        value: Option<V>,
    ) -> Self {
        match value {
            Some(value) => self.with_attribute(name, value),
            None => self,
        }
    }

    /// Merges attributes in order, later entries overwriting earlier ones
    pub fn with_attributes<K, V>(mut self, attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in attributes {
            self.set_attribute(name.into(), value.into());
        }
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Applies a builder block: its children are appended after the existing
    /// ones and its attributes merge over the existing attributes.
    pub fn with(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        let composed = compose(items);
        for (name, value) in composed.attributes {
            self.set_attribute(name, value);
        }
        self.children.extend(composed.children);
        self
    }

    pub fn render(&self, config: &Configuration) -> String {
        render_element(self, config)
    }

    fn set_attribute(&mut self, name: String, value: String) {
        if name.is_empty() {
            log::debug!("dropping attribute with empty name on <{}>", self.tag);
            return;
        }
        self.attributes.insert(name, value);
    }
}
