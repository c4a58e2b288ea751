//! Composition - folds a builder block into children and attributes
//!
//! A block is an ordered list of [`Item`]s. Child nodes keep their order,
//! attribute items are pulled out and merged into the attribute map of the
//! element being built, wherever they appear in the block. A later assignment
//! to the same name replaces the value but keeps the position of the first one.

use crate::format::AttributeValue;
use crate::node::{Element, Node};
use indexmap::IndexMap;

/// A single `name="value"` assignment produced inside a builder block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Creates an attribute fragment from any formattable value
pub fn attribute(name: impl Into<String>, value: impl AttributeValue) -> Attribute {
    Attribute {
        name: name.into(),
        value: value.to_attribute_value(),
    }
}

/// One sub-expression of a builder block
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Child(Node),
    Attribute(Attribute),
    /// Several items from one expression, spliced one level into the block
    Group(Vec<Item>),
    /// An absent branch; contributes nothing
    Empty,
}

impl Item {
    /// Includes `item` only when `condition` holds
    pub fn when(condition: bool, item: impl Into<Item>) -> Item {
        if condition {
            item.into()
        } else {
            Item::Empty
        }
    }
}

impl From<Node> for Item {
    fn from(node: Node) -> Self {
        Item::Child(node)
    }
}

impl From<Element> for Item {
    fn from(element: Element) -> Self {
        Item::Child(Node::Element(element))
    }
}

impl From<Attribute> for Item {
    fn from(attribute: Attribute) -> Self {
        Item::Attribute(attribute)
    }
}

impl From<&str> for Item {
    fn from(text: &str) -> Self {
        Item::Child(Node::Text(text.to_string()))
    }
}

impl From<String> for Item {
    fn from(text: String) -> Self {
        Item::Child(Node::Text(text))
    }
}

impl<T: Into<Item>> From<Option<T>> for Item {
    fn from(value: Option<T>) -> Self {
        value.map_or(Item::Empty, Into::into)
    }
}

impl<T: Into<Item>> From<Vec<T>> for Item {
    fn from(items: Vec<T>) -> Self {
        Item::Group(items.into_iter().map(Into::into).collect())
    }
}

/// Result of folding a block
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Composed {
    pub children: Vec<Node>,
    pub attributes: IndexMap<String, String>,
}

impl Composed {
    fn push_item(&mut self, item: Item, splice_groups: bool) {
        match item {
            Item::Child(node) => self.push_node(node),
            Item::Attribute(Attribute { name, value }) => {
                if name.is_empty() {
                    log::debug!("ignoring attribute with empty name in builder block");
                    return;
                }
                self.attributes.insert(name, value);
            }
            Item::Group(items) if splice_groups => {
                for item in items {
                    self.push_item(item, false);
                }
            }
            Item::Group(items) => {
                // Nested groups past the first level stay grouped as a fragment
                let mut nested = Composed::default();
                for item in items {
                    nested.push_item(item, false);
                }
                self.attributes.extend(nested.attributes);
                if !nested.children.is_empty() {
                    self.children.push(Node::Fragment(nested.children));
                }
            }
            Item::Empty => {}
        }
    }

    fn push_node(&mut self, node: Node) {
        match node {
            Node::Empty => {}
            Node::Fragment(children) => self.children.extend(children),
            other => self.children.push(other),
        }
    }
}

/// Folds a block into ordered children and a merged attribute map
///
/// * `Node` items become children in the order encountered; `Empty` is dropped
/// * `Fragment` nodes splice their children in place (one level only)
/// * attribute items merge last-write-wins into the map
/// * `Group` items splice their contents one level
pub fn compose(items: impl IntoIterator<Item = Item>) -> Composed {
    let mut composed = Composed::default();
    for item in items {
        composed.push_item(item, true);
    }
    composed
}

/// Builds an element from a tag, an initial attribute list and a block
///
/// The initial attributes are inserted first in the order given; attributes
/// from the block then merge over them.
///
/// # Arguments
/// * `tag` - Element name, e.g. `"circle"`
/// * `attributes` - Initial `(name, value)` pairs
/// * `items` - The builder block
pub fn make_element<K, V>(
    tag: impl Into<String>,
    attributes: impl IntoIterator<Item = (K, V)>,
    items: impl IntoIterator<Item = Item>,
) -> Node
where
    K: Into<String>,
    V: Into<String>,
{
    Node::Element(Element::new(tag).with_attributes(attributes).with(items))
}

/// Collects heterogeneous expressions into a builder block
///
/// ```ignore
/// let block = block![fill("red"), circle(5.0, 5.0, 2.0), "label"];
/// ```
#[macro_export]
macro_rules! block {
    () => {
        ::std::vec::Vec::<$crate::compose::Item>::new()
    };
    ($($item:expr),+ $(,)?) => {
        ::std::vec![$($crate::compose::Item::from($item)),+]
    };
}
