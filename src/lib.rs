//! Declarative builder for SVG markup
//!
//! Build a tree of [`Node`]s with element constructors and `block![...]`
//! content blocks, then turn it into text with [`render`] under a
//! [`Configuration`] (compact or pretty).
//!
//! # Example
//! ```ignore
//! use svg_builder::*;
//!
//! let logo = svg_sized(100.0, 100.0).with(block![
//!     circle(50.0, 50.0, 40.0).with(block![fill("red"), stroke_with_width("black", 2.0)]),
//! ]);
//! let markup = logo.render(&Configuration::pretty());
//! ```

pub mod attributes;
pub mod compose;
pub mod document;
pub mod elements;
pub mod format;
pub mod node;
pub mod printer;
pub mod transform;

pub use attributes::*;
pub use compose::{attribute, compose, make_element, Attribute, Composed, Item};
pub use document::{wrap_document, Document, SVG_DOCTYPE, SVG_NAMESPACE, XML_DECLARATION};
pub use elements::*;
pub use format::{
    format_list, format_number, format_points, AttributeValue, FillRule, GradientUnits, Length,
    MarkerUnits, SpreadMethod, StrokeLinecap, StrokeLinejoin, TextAnchor, Unit, ViewBox,
};
pub use node::{Element, Node};
pub use printer::{render, render_all, render_at, render_element, Configuration, Mode, Printer};
pub use transform::{format_transforms, Transform};
