//! Presentation attributes - fragments for builder blocks and chaining sugar
//!
//! The free functions return [`Attribute`] items to drop into a `block![...]`.
//! The `Element` methods are the same assignments written as a chain.

use crate::compose::{attribute, Attribute, Item};
use crate::document::SVG_NAMESPACE;
use crate::format::{
    format_list, AttributeValue, FillRule, StrokeLinecap, StrokeLinejoin, ViewBox,
};
use crate::node::Element;
use crate::transform::{format_transforms, Transform};

pub fn fill(paint: impl AttributeValue) -> Attribute {
    attribute("fill", paint)
}

pub fn fill_opacity(value: f64) -> Attribute {
    attribute("fill-opacity", value)
}

pub fn fill_rule(rule: FillRule) -> Attribute {
    attribute("fill-rule", rule)
}

pub fn stroke(paint: impl AttributeValue) -> Attribute {
    attribute("stroke", paint)
}

/// `stroke` and `stroke-width` in one expression
pub fn stroke_with_width(paint: impl AttributeValue, width: f64) -> Item {
    Item::Group(vec![
        Item::Attribute(stroke(paint)),
        Item::Attribute(stroke_width(width)),
    ])
}

pub fn stroke_width(width: f64) -> Attribute {
    attribute("stroke-width", width)
}

/// Dash pattern, e.g. `stroke_dasharray(&[5.0, 5.0])` -> `stroke-dasharray="5 5"`
pub fn stroke_dasharray(pattern: &[f64]) -> Attribute {
    attribute("stroke-dasharray", format_list(pattern))
}

pub fn stroke_linecap(cap: StrokeLinecap) -> Attribute {
    attribute("stroke-linecap", cap)
}

pub fn stroke_linejoin(join: StrokeLinejoin) -> Attribute {
    attribute("stroke-linejoin", join)
}

pub fn stroke_opacity(value: f64) -> Attribute {
    attribute("stroke-opacity", value)
}

pub fn opacity(value: f64) -> Attribute {
    attribute("opacity", value)
}

/// Transform list in the given order
pub fn transform(transforms: impl AsRef<[Transform]>) -> Attribute {
    attribute("transform", format_transforms(transforms.as_ref()))
}

pub fn font_family(family: impl AttributeValue) -> Attribute {
    attribute("font-family", family)
}

pub fn font_size(size: impl AttributeValue) -> Attribute {
    attribute("font-size", size)
}

pub fn font_weight(weight: impl AttributeValue) -> Attribute {
    attribute("font-weight", weight)
}

/// Accepts a [`crate::format::TextAnchor`] or a raw keyword
pub fn text_anchor(anchor: impl AttributeValue) -> Attribute {
    attribute("text-anchor", anchor)
}

/// `clip-path` reference, e.g. `clip_path("url(#clip1)")`
pub fn clip_path(reference: impl AttributeValue) -> Attribute {
    attribute("clip-path", reference)
}

pub fn mask(reference: impl AttributeValue) -> Attribute {
    attribute("mask", reference)
}

pub fn id(value: impl AttributeValue) -> Attribute {
    attribute("id", value)
}

pub fn class(value: impl AttributeValue) -> Attribute {
    attribute("class", value)
}

pub fn style(value: impl AttributeValue) -> Attribute {
    attribute("style", value)
}

impl Element {
    pub fn fill(self, paint: impl AttributeValue) -> Self {
        self.with_attribute("fill", paint)
    }

    pub fn stroke(self, paint: impl AttributeValue) -> Self {
        self.with_attribute("stroke", paint)
    }

    pub fn stroke_width(self, width: f64) -> Self {
        self.with_attribute("stroke-width", width)
    }

    pub fn opacity(self, value: f64) -> Self {
        self.with_attribute("opacity", value)
    }

    pub fn transform(self, transforms: impl AsRef<[Transform]>) -> Self {
        self.with_attribute("transform", format_transforms(transforms.as_ref()))
    }

    pub fn id(self, value: impl AttributeValue) -> Self {
        self.with_attribute("id", value)
    }

    pub fn class(self, value: impl AttributeValue) -> Self {
        self.with_attribute("class", value)
    }

    pub fn x(self, value: impl AttributeValue) -> Self {
        self.with_attribute("x", value)
    }

    pub fn y(self, value: impl AttributeValue) -> Self {
        self.with_attribute("y", value)
    }

    pub fn dx(self, value: f64) -> Self {
        self.with_attribute("dx", value)
    }

    pub fn dy(self, value: f64) -> Self {
        self.with_attribute("dy", value)
    }

    pub fn width(self, value: impl AttributeValue) -> Self {
        self.with_attribute("width", value)
    }

    pub fn height(self, value: impl AttributeValue) -> Self {
        self.with_attribute("height", value)
    }

    pub fn rx(self, value: f64) -> Self {
        self.with_attribute("rx", value)
    }

    pub fn ry(self, value: f64) -> Self {
        self.with_attribute("ry", value)
    }

    pub fn href(self, reference: impl AttributeValue) -> Self {
        self.with_attribute("href", reference)
    }

    pub fn view_box(self, view_box: ViewBox) -> Self {
        self.with_attribute("viewBox", view_box)
    }

    pub fn preserve_aspect_ratio(self, value: impl AttributeValue) -> Self {
        self.with_attribute("preserveAspectRatio", value)
    }

    /// Declares the SVG namespace, needed on a standalone document root
    pub fn xmlns(self) -> Self {
        self.with_attribute("xmlns", SVG_NAMESPACE)
    }
}
