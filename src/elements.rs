//! Element constructors for the SVG vocabulary
//!
//! Each constructor sets its positional attributes in parameter order and
//! returns an [`Element`], ready for chained attributes and a `.with(block![...])`
//! content block.

use crate::format::{
    format_points, AttributeValue, GradientUnits, Length, MarkerUnits, SpreadMethod, ViewBox,
};
use crate::node::Element;
use crate::transform::{format_transforms, Transform};

// Document structure

/// Bare `<svg>` root
pub fn svg() -> Element {
    Element::new("svg")
}

/// `<svg>` root with a width and height
pub fn svg_sized(width: impl Into<Length>, height: impl Into<Length>) -> Element {
    svg().width(width.into()).height(height.into())
}

/// `<svg>` root from a textual viewBox such as `"0 0 24 24"`
///
/// A string that does not hold exactly four numbers leaves the root without
/// a viewBox.
pub fn svg_with_view_box(view_box: &str) -> Element {
    match view_box.parse::<ViewBox>() {
        Ok(vb) => svg().view_box(vb),
        Err(e) => {
            log::warn!("ignoring viewBox '{}': {:#}", view_box, e);
            svg()
        }
    }
}

pub fn g() -> Element {
    Element::new("g")
}

pub fn defs() -> Element {
    Element::new("defs")
}

pub fn symbol(id: &str) -> Element {
    Element::new("symbol").id(id)
}

/// `<use href="...">`
pub fn use_ref(href: &str) -> Element {
    Element::new("use").href(href)
}

pub fn switch() -> Element {
    Element::new("switch")
}

// Basic shapes

pub fn circle(cx: f64, cy: f64, r: f64) -> Element {
    Element::new("circle")
        .with_attribute("cx", cx)
        .with_attribute("cy", cy)
        .with_attribute("r", r)
}

pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Element {
    Element::new("rect").x(x).y(y).width(width).height(height)
}

pub fn ellipse(cx: f64, cy: f64, rx: f64, ry: f64) -> Element {
    Element::new("ellipse")
        .with_attribute("cx", cx)
        .with_attribute("cy", cy)
        .rx(rx)
        .ry(ry)
}

pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Element {
    Element::new("line")
        .with_attribute("x1", x1)
        .with_attribute("y1", y1)
        .with_attribute("x2", x2)
        .with_attribute("y2", y2)
}

/// Polygon from a ready-made points string
pub fn polygon(points: &str) -> Element {
    Element::new("polygon").with_attribute("points", points)
}

/// Polygon from coordinate pairs
pub fn polygon_points(points: &[(f64, f64)]) -> Element {
    Element::new("polygon").with_attribute("points", format_points(points))
}

pub fn polyline(points: &str) -> Element {
    Element::new("polyline").with_attribute("points", points)
}

pub fn polyline_points(points: &[(f64, f64)]) -> Element {
    Element::new("polyline").with_attribute("points", format_points(points))
}

pub fn path(d: &str) -> Element {
    Element::new("path").with_attribute("d", d)
}

// Text

/// `<text>` with optional character content (an empty string adds no text)
pub fn text(content: &str) -> Element {
    with_text(Element::new("text"), content)
}

pub fn tspan(content: &str) -> Element {
    with_text(Element::new("tspan"), content)
}

fn with_text(element: Element, content: &str) -> Element {
    if content.is_empty() {
        element
    } else {
        element.with_child(content)
    }
}

// Paint servers

/// # Arguments
/// * `id` - Reference name used as `url(#id)`
/// * `x1`, `y1`, `x2`, `y2` - Gradient vector, e.g. `"0%"` or `Length::percent(100.0)`
pub fn linear_gradient(
    id: &str,
    x1: impl AttributeValue,
    y1: impl AttributeValue,
    x2: impl AttributeValue,
    y2: impl AttributeValue,
) -> Element {
    Element::new("linearGradient")
        .id(id)
        .with_attribute("x1", x1)
        .with_attribute("y1", y1)
        .with_attribute("x2", x2)
        .with_attribute("y2", y2)
}

pub fn radial_gradient(
    id: &str,
    cx: impl AttributeValue,
    cy: impl AttributeValue,
    r: impl AttributeValue,
) -> Element {
    Element::new("radialGradient")
        .id(id)
        .with_attribute("cx", cx)
        .with_attribute("cy", cy)
        .with_attribute("r", r)
}

/// Gradient stop, e.g. `stop("0%", "rgb(255,255,0)")`
pub fn stop(offset: impl AttributeValue, color: impl AttributeValue) -> Element {
    Element::new("stop")
        .with_attribute("offset", offset)
        .with_attribute("stop-color", color)
}

pub fn pattern(id: &str, x: f64, y: f64, width: f64, height: f64) -> Element {
    Element::new("pattern").id(id).x(x).y(y).width(width).height(height)
}

// Clipping, masking, markers

pub fn clip_path_element(id: &str) -> Element {
    Element::new("clipPath").id(id)
}

pub fn mask_element(id: &str) -> Element {
    Element::new("mask").id(id)
}

pub fn marker(id: &str, ref_x: f64, ref_y: f64, marker_width: f64, marker_height: f64) -> Element {
    Element::new("marker")
        .id(id)
        .with_attribute("refX", ref_x)
        .with_attribute("refY", ref_y)
        .with_attribute("markerWidth", marker_width)
        .with_attribute("markerHeight", marker_height)
}

// Embedded content and linking

pub fn image(href: &str, x: f64, y: f64, width: f64, height: f64) -> Element {
    Element::new("image").href(href).x(x).y(y).width(width).height(height)
}

pub fn foreign_object(x: f64, y: f64, width: f64, height: f64) -> Element {
    Element::new("foreignObject").x(x).y(y).width(width).height(height)
}

/// `<a href="...">`
pub fn anchor(href: &str) -> Element {
    Element::new("a").href(href)
}

/// Attributes that only make sense on paint servers, markers and clip paths
impl Element {
    pub fn gradient_units(self, units: GradientUnits) -> Self {
        self.with_attribute("gradientUnits", units)
    }

    pub fn gradient_transform(self, transforms: impl AsRef<[Transform]>) -> Self {
        self.with_attribute("gradientTransform", format_transforms(transforms.as_ref()))
    }

    pub fn spread_method(self, method: SpreadMethod) -> Self {
        self.with_attribute("spreadMethod", method)
    }

    /// Focal point of a radial gradient
    pub fn focus(self, fx: impl AttributeValue, fy: impl AttributeValue) -> Self {
        self.with_attribute("fx", fx).with_attribute("fy", fy)
    }

    pub fn stop_opacity(self, value: f64) -> Self {
        self.with_attribute("stop-opacity", value)
    }

    pub fn pattern_units(self, units: GradientUnits) -> Self {
        self.with_attribute("patternUnits", units)
    }

    pub fn pattern_transform(self, transforms: impl AsRef<[Transform]>) -> Self {
        self.with_attribute("patternTransform", format_transforms(transforms.as_ref()))
    }

    pub fn clip_path_units(self, units: GradientUnits) -> Self {
        self.with_attribute("clipPathUnits", units)
    }

    pub fn mask_units(self, units: GradientUnits) -> Self {
        self.with_attribute("maskUnits", units)
    }

    pub fn marker_units(self, units: MarkerUnits) -> Self {
        self.with_attribute("markerUnits", units)
    }

    /// Marker orientation: `"auto"`, `"auto-start-reverse"` or an angle
    pub fn orient(self, value: impl AttributeValue) -> Self {
        self.with_attribute("orient", value)
    }

    pub fn target(self, value: impl AttributeValue) -> Self {
        self.with_attribute("target", value)
    }
}
