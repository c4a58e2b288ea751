//! Transform lists for the `transform`, `gradientTransform` and `patternTransform` attributes

use crate::format::{format_number, AttributeValue};
use std::fmt;

/// One entry of a transform list
///
/// The optional second argument of `Translate`/`Scale` is printed whenever the
/// caller supplied it; `None` selects the single-argument form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Translate { x: f64, y: Option<f64> },
    Scale { x: f64, y: Option<f64> },
    Rotate { angle: f64, center: Option<(f64, f64)> },
    SkewX(f64),
    SkewY(f64),
    Matrix { a: f64, b: f64, c: f64, d: f64, e: f64, f: f64 },
}

impl Transform {
    pub fn translate(x: f64, y: f64) -> Self {
        Transform::Translate { x, y: Some(y) }
    }

    pub fn translate_x(x: f64) -> Self {
        Transform::Translate { x, y: None }
    }

    pub fn scale(x: f64, y: f64) -> Self {
        Transform::Scale { x, y: Some(y) }
    }

    /// Uniform scale, printed as `scale(s)`
    pub fn scale_uniform(s: f64) -> Self {
        Transform::Scale { x: s, y: None }
    }

    pub fn rotate(angle: f64) -> Self {
        Transform::Rotate { angle, center: None }
    }

    pub fn rotate_around(angle: f64, cx: f64, cy: f64) -> Self {
        Transform::Rotate { angle, center: Some((cx, cy)) }
    }

    pub fn skew_x(angle: f64) -> Self {
        Transform::SkewX(angle)
    }

    pub fn skew_y(angle: f64) -> Self {
        Transform::SkewY(angle)
    }

    pub fn matrix(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Transform::Matrix { a, b, c, d, e, f }
    }

    fn name(&self) -> &'static str {
        match self {
            Transform::Translate { .. } => "translate",
            Transform::Scale { .. } => "scale",
            Transform::Rotate { .. } => "rotate",
            Transform::SkewX(_) => "skewX",
            Transform::SkewY(_) => "skewY",
            Transform::Matrix { .. } => "matrix",
        }
    }

    fn arguments(&self) -> Vec<f64> {
        match *self {
            Transform::Translate { x, y } | Transform::Scale { x, y } => {
                std::iter::once(x).chain(y).collect()
            }
            Transform::Rotate { angle, center } => match center {
                Some((cx, cy)) => vec![angle, cx, cy],
                None => vec![angle],
            },
            Transform::SkewX(angle) | Transform::SkewY(angle) => vec![angle],
            Transform::Matrix { a, b, c, d, e, f } => vec![a, b, c, d, e, f],
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args = self
            .arguments()
            .into_iter()
            .map(format_number)
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{}({})", self.name(), args)
    }
}

impl AttributeValue for Transform {
    fn to_attribute_value(&self) -> String {
        self.to_string()
    }
}

/// Joins transforms with a single space, keeping the supplied order
///
/// Order matters to the renderer, so entries are never sorted or deduplicated.
pub fn format_transforms(transforms: &[Transform]) -> String {
    transforms
        .iter()
        .map(Transform::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl AttributeValue for [Transform] {
    fn to_attribute_value(&self) -> String {
        format_transforms(self)
    }
}

impl AttributeValue for Vec<Transform> {
    fn to_attribute_value(&self) -> String {
        format_transforms(self)
    }
}
